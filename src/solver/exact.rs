//! Exact memoized expectimax
//!
//! The expected number of guesses for a candidate set `S` (each secret equally
//! likely) is
//!
//! ```text
//! E(S) = 1                                      if |S| = 1
//! E(S) = min over g of 1 + Σ p(b) × E(b)        otherwise
//! ```
//!
//! where the sum runs over the buckets `b` of `partition(S, g)` other than the
//! all-correct one: guessing the secret ends the game on that guess, so it adds
//! nothing beyond the guess itself. With two candidates this gives 1.5.
//!
//! The guess pool is `S` itself under [`GuessPolicy::Closed`] and the whole
//! universe under [`GuessPolicy::Open`]. Buckets are always solved as plain
//! candidate sets, whatever the policy.

use super::cache::{CacheStats, MemoCache};
use super::partition::{Bucket, partition};
use crate::config::{GuessPolicy, SolverConfig};
use crate::core::{CandidateSet, Pattern, PatternTable};
use crate::error::SolverError;
use std::cmp::Reverse;

/// Optimal value of a candidate set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Minimal expected number of guesses, including the next one
    pub expected_steps: f64,
    /// Universe index of a guess achieving it (first in universe order on ties)
    pub best_guess: usize,
}

/// Recursive solver owning its memo cache
///
/// The cache is keyed by candidate set only, so it is never shared between
/// policies: a solver is built for one policy and keeps it for its lifetime.
///
/// # Examples
/// ```
/// use wordle_expectimax::config::GuessPolicy;
/// use wordle_expectimax::core::{CandidateSet, PatternTable, Universe};
/// use wordle_expectimax::solver::ExactSolver;
///
/// let universe = Universe::from_strs(&["crane", "slate", "irate", "plate", "erase"]).unwrap();
/// let table = PatternTable::build(&universe);
/// let mut solver = ExactSolver::new(&table, GuessPolicy::Closed, 1000, 0.1);
///
/// let solution = solver.solve(&CandidateSet::full(&universe)).unwrap();
/// assert_eq!(universe.word(solution.best_guess).text(), "slate");
/// assert!((solution.expected_steps - 1.8).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct ExactSolver<'a> {
    table: &'a PatternTable,
    policy: GuessPolicy,
    all_correct: Pattern,
    cache: MemoCache<Solution>,
}

impl<'a> ExactSolver<'a> {
    /// Create a solver with a fresh cache of `cache_capacity` entries
    #[must_use]
    pub fn new(
        table: &'a PatternTable,
        policy: GuessPolicy,
        cache_capacity: usize,
        evict_fraction: f64,
    ) -> Self {
        Self {
            table,
            policy,
            all_correct: table.all_correct(),
            cache: MemoCache::new(cache_capacity, evict_fraction),
        }
    }

    /// Create a solver from the policy and cache settings of `config`
    #[must_use]
    pub fn from_config(table: &'a PatternTable, config: &SolverConfig) -> Self {
        Self::new(
            table,
            config.policy,
            config.cache_capacity,
            config.evict_fraction,
        )
    }

    /// Solve a candidate set
    ///
    /// # Errors
    /// Returns `EmptyCandidateSet` or `IndexOutOfRange` if `set` does not fit the
    /// pattern table. Nothing is computed in that case.
    pub fn solve(&mut self, set: &CandidateSet) -> Result<Solution, SolverError> {
        check_set(self.table, set)?;
        Ok(self.solve_slice(set.indices()))
    }

    /// Solve a sorted, non-empty, in-range index slice
    pub(crate) fn solve_slice(&mut self, set: &[usize]) -> Solution {
        if let [only] = set {
            return Solution {
                expected_steps: 1.0,
                best_guess: *only,
            };
        }

        if let Some(hit) = self.cache.get(set) {
            return hit;
        }

        let solution = self.search(set);
        self.cache.put(set, solution);
        solution
    }

    fn search(&mut self, set: &[usize]) -> Solution {
        let mut best = Solution {
            expected_steps: f64::INFINITY,
            best_guess: set[0],
        };

        match self.policy {
            GuessPolicy::Closed => {
                for &guess in set {
                    self.try_guess(set, guess, &mut best);
                }
            }
            GuessPolicy::Open => {
                for guess in 0..self.table.size() {
                    self.try_guess(set, guess, &mut best);
                }
            }
        }

        // Every member of `set` splits off at least its own all-correct bucket
        debug_assert!(best.expected_steps.is_finite());
        best
    }

    /// Score `guess` and replace `best` if it is strictly better
    ///
    /// Buckets are solved largest first while the running sum is compared with
    /// a lower bound on the rest (each unsolved bucket costs at least one guess).
    /// Once the bound reaches `best` the guess cannot win and is abandoned.
    /// Large buckets carry most of the excess over that bound, so solving them
    /// first lets a losing guess cross `best` after the fewest recursive solves.
    fn try_guess(&mut self, set: &[usize], guess: usize, best: &mut Solution) {
        let split = partition(self.table, set, guess);
        if split.is_degenerate(self.all_correct) {
            return;
        }

        let all_correct = self.all_correct;
        let mut buckets: Vec<Bucket> = split
            .into_buckets()
            .into_iter()
            .filter(|b| b.pattern != all_correct)
            .collect();
        buckets.sort_by_key(|b| Reverse(b.len()));

        let total = set.len() as f64;
        let mut remaining: usize = buckets.iter().map(Bucket::len).sum();
        let mut partial = 0.0;

        if 1.0 + remaining as f64 / total >= best.expected_steps {
            return;
        }

        for bucket in &buckets {
            remaining -= bucket.len();
            let steps = self.solve_slice(bucket.members.indices()).expected_steps;
            partial += bucket.len() as f64 / total * steps;

            if 1.0 + partial + remaining as f64 / total >= best.expected_steps {
                return;
            }
        }

        *best = Solution {
            expected_steps: 1.0 + partial,
            best_guess: guess,
        };
    }

    /// The guess-pool policy this solver was built for
    #[must_use]
    pub const fn policy(&self) -> GuessPolicy {
        self.policy
    }

    /// Counters of the owned memo cache
    #[must_use]
    pub const fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Discard every memoized result
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

/// Reject an empty set or one with indices beyond the table
pub(crate) fn check_set(table: &PatternTable, set: &CandidateSet) -> Result<(), SolverError> {
    match set.indices().last() {
        None => Err(SolverError::EmptyCandidateSet),
        Some(&index) if index >= table.size() => Err(SolverError::IndexOutOfRange {
            index,
            len: table.size(),
        }),
        Some(_) => Ok(()),
    }
}
