//! Depth-limited greedy approximation of the exact solver
//!
//! Each explored level picks the guess that looks best one step ahead (closed
//! policy, leaf estimates for the children) and expands only that guess. Below
//! the horizon a bucket of `k` candidates is replaced by a closed-form
//! [`LeafCost`]. Cost grows exponentially with the ply, so useful values are small.

use super::exact::check_set;
use super::partition::partition;
use crate::core::{CandidateSet, Pattern, PatternTable};
use crate::error::SolverError;

/// Estimate of the expected guesses left for a bucket of `k` candidates
///
/// Every variant returns exactly 1 for a single candidate and at least 1 otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LeafCost {
    /// The same value for every bucket larger than one (fast variant)
    Constant(f64),
    /// `c × ln(a0 × (log2(k) + a1))`, a smooth sub-linear fit of expected
    /// remaining turns against the uncertainty left in the bucket
    Calibrated { c: f64, a0: f64, a1: f64 },
    /// `(k + 1) / 2`: the cost of guessing the candidates one at a time
    Sequential,
}

impl LeafCost {
    /// Calibrated curve with its fitted coefficients
    pub const CALIBRATED: Self = Self::Calibrated {
        c: 1.785,
        a0: 0.4273,
        a1: 3.775,
    };

    /// Estimated expected guesses for a bucket of `k` candidates
    ///
    /// # Examples
    /// ```
    /// use wordle_expectimax::solver::LeafCost;
    ///
    /// assert_eq!(LeafCost::Sequential.cost(5), 3.0);
    /// assert_eq!(LeafCost::Constant(2.0).cost(1), 1.0);
    /// assert!(LeafCost::CALIBRATED.cost(100) > LeafCost::CALIBRATED.cost(10));
    /// ```
    #[must_use]
    pub fn cost(&self, k: usize) -> f64 {
        if k <= 1 {
            return 1.0;
        }

        let estimate = match *self {
            Self::Constant(value) => value,
            Self::Calibrated { c, a0, a1 } => {
                let uncertainty = (k as f64).log2();
                c * (a0 * (uncertainty + a1)).ln()
            }
            Self::Sequential => (k as f64 + 1.0) / 2.0,
        };

        estimate.max(1.0)
    }

    /// Check that the parameters give a finite estimate for every `k`
    ///
    /// # Errors
    /// Returns `InvalidConfig` for non-finite parameters, or calibration
    /// coefficients that would take the logarithm of a non-positive number.
    pub fn validate(&self) -> Result<(), SolverError> {
        match *self {
            Self::Constant(value) if !value.is_finite() => Err(SolverError::InvalidConfig(
                format!("constant leaf cost must be finite, got {value}"),
            )),
            Self::Calibrated { c, a0, a1 } => {
                if ![c, a0, a1].iter().all(|v| v.is_finite()) {
                    return Err(SolverError::InvalidConfig(
                        "calibrated leaf cost coefficients must be finite".to_string(),
                    ));
                }
                if a0 <= 0.0 || a1 <= 0.0 {
                    return Err(SolverError::InvalidConfig(format!(
                        "calibrated leaf cost needs a0 > 0 and a1 > 0, got a0={a0}, a1={a1}"
                    )));
                }
                Ok(())
            }
            Self::Constant(_) | Self::Sequential => Ok(()),
        }
    }
}

impl Default for LeafCost {
    fn default() -> Self {
        Self::CALIBRATED
    }
}

/// Greedy lookahead evaluator
///
/// Holds no cache: every call is a fresh, deterministic expansion.
#[derive(Debug, Clone, Copy)]
pub struct LookaheadEvaluator<'a> {
    table: &'a PatternTable,
    leaf: LeafCost,
    all_correct: Pattern,
}

impl<'a> LookaheadEvaluator<'a> {
    #[must_use]
    pub fn new(table: &'a PatternTable, leaf: LeafCost) -> Self {
        Self {
            table,
            leaf,
            all_correct: table.all_correct(),
        }
    }

    /// The leaf estimate in use
    #[must_use]
    pub const fn leaf_cost(&self) -> LeafCost {
        self.leaf
    }

    /// Approximate expected guesses when `guess` is played first against `set`
    ///
    /// Each non-winning bucket then gets `max_ply` greedy levels before falling
    /// back to the leaf estimate. With `max_ply = 0` the buckets are scored by
    /// the leaf estimate directly.
    ///
    /// # Errors
    /// Returns an error if `set` or `guess` is out of range for the table.
    pub fn evaluate(
        &self,
        set: &CandidateSet,
        guess: usize,
        max_ply: usize,
    ) -> Result<f64, SolverError> {
        check_set(self.table, set)?;
        if guess >= self.table.size() {
            return Err(SolverError::IndexOutOfRange {
                index: guess,
                len: self.table.size(),
            });
        }

        Ok(self.expand(set.indices(), guess, max_ply))
    }

    /// Approximate expected guesses for a sorted, non-empty, in-range set
    /// with `ply` greedy levels left
    #[must_use]
    pub fn value(&self, set: &[usize], ply: usize) -> f64 {
        if set.len() <= 1 {
            return 1.0;
        }
        if ply == 0 {
            return self.leaf.cost(set.len());
        }

        let guess = self.greedy_guess(set);
        self.expand(set, guess, ply - 1)
    }

    /// `1 + Σ p(b) × value(b, child_ply)` over the non-winning buckets of `guess`
    fn expand(&self, set: &[usize], guess: usize, child_ply: usize) -> f64 {
        let split = partition(self.table, set, guess);
        let mut cost = 1.0;

        for bucket in split.buckets() {
            if bucket.pattern != self.all_correct {
                cost += split.probability(bucket)
                    * self.value(bucket.members.indices(), child_ply);
            }
        }

        cost
    }

    /// The member of `set` with the lowest one-step score
    /// `1 + Σ p(b) × leaf(|b|)`, first in set order on ties
    fn greedy_guess(&self, set: &[usize]) -> usize {
        let mut best_guess = set[0];
        let mut best_score = f64::INFINITY;

        for &guess in set {
            let split = partition(self.table, set, guess);
            let score = 1.0
                + split
                    .buckets()
                    .iter()
                    .filter(|b| b.pattern != self.all_correct)
                    .map(|b| split.probability(b) * self.leaf.cost(b.len()))
                    .sum::<f64>();

            if score < best_score {
                best_score = score;
                best_guess = guess;
            }
        }

        best_guess
    }
}
