//! Solver configuration
//!
//! All values are owned by the caller; the engine only reads them.

use crate::error::SolverError;
use crate::solver::LeafCost;

/// Which words may be tried as the next guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GuessPolicy {
    /// Hard mode: only words still in the candidate set may be guessed
    #[default]
    Closed,
    /// Any word of the universe may be guessed
    Open,
}

/// Configuration consumed by [`RootEvaluator`](crate::solver::RootEvaluator)
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Guess-pool policy for every level below the root
    pub policy: GuessPolicy,

    /// Lookahead depth: 0 solves exactly, >0 uses the depth-limited heuristic
    pub ply: usize,

    /// Evaluate only this many entropy-ranked root guesses (0 = all of them)
    pub max_exact_roots: usize,

    /// Memo cache capacity per worker (0 disables memoization)
    pub cache_capacity: usize,

    /// Fraction of the cache evicted when it is full
    pub evict_fraction: f64,

    /// Leaf estimate used below the lookahead horizon
    pub leaf_cost: LeafCost,

    /// Worker threads for root evaluation (0 = one per core)
    pub workers: usize,

    /// Stack size of each worker thread in bytes
    pub worker_stack_size: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            policy: GuessPolicy::Closed,
            ply: 0,
            max_exact_roots: 64,
            cache_capacity: 1_000_000,
            evict_fraction: 0.1,
            leaf_cost: LeafCost::default(),
            workers: 0,
            worker_stack_size: 64 * 1024 * 1024,
        }
    }
}

impl SolverConfig {
    /// Check that every value is usable
    ///
    /// # Errors
    /// Returns `InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<(), SolverError> {
        if !(self.evict_fraction > 0.0 && self.evict_fraction <= 1.0) {
            return Err(SolverError::InvalidConfig(format!(
                "evict_fraction must be in (0, 1], got {}",
                self.evict_fraction
            )));
        }
        if self.worker_stack_size < 64 * 1024 {
            return Err(SolverError::InvalidConfig(format!(
                "worker_stack_size of {} bytes is too small",
                self.worker_stack_size
            )));
        }
        self.leaf_cost.validate()
    }
}
