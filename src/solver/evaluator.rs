//! One interface over the exact and depth-limited evaluators
//!
//! Callers pick a depth once ([`SolverConfig::ply`], 0 meaning exact) and then
//! treat both algorithms the same way.

use super::cache::CacheStats;
use super::exact::ExactSolver;
use super::lookahead::LookaheadEvaluator;
use crate::config::SolverConfig;
use crate::core::PatternTable;

/// Something that values a candidate set in expected guesses
pub trait Evaluator {
    /// Expected guesses to finish from `set` (sorted, non-empty, in range),
    /// counting the next guess
    fn expected_steps(&mut self, set: &[usize]) -> f64;
}

impl Evaluator for ExactSolver<'_> {
    fn expected_steps(&mut self, set: &[usize]) -> f64 {
        self.solve_slice(set).expected_steps
    }
}

/// Enum wrapper for both evaluators
///
/// Allows runtime selection of the algorithm while keeping static dispatch.
#[derive(Debug, Clone)]
pub enum SetEvaluator<'a> {
    /// Exact memoized expectimax
    Exact(ExactSolver<'a>),
    /// Greedy lookahead of `ply` levels
    Lookahead {
        evaluator: LookaheadEvaluator<'a>,
        ply: usize,
    },
}

impl Evaluator for SetEvaluator<'_> {
    fn expected_steps(&mut self, set: &[usize]) -> f64 {
        match self {
            Self::Exact(solver) => solver.expected_steps(set),
            Self::Lookahead { evaluator, ply } => evaluator.value(set, *ply),
        }
    }
}

impl<'a> SetEvaluator<'a> {
    /// Build the evaluator `config` asks for, with a fresh cache when exact
    #[must_use]
    pub fn from_config(table: &'a PatternTable, config: &SolverConfig) -> Self {
        if config.ply == 0 {
            Self::Exact(ExactSolver::from_config(table, config))
        } else {
            Self::Lookahead {
                evaluator: LookaheadEvaluator::new(table, config.leaf_cost),
                ply: config.ply,
            }
        }
    }

    /// Whether results are exact rather than estimates
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        matches!(self, Self::Exact(_))
    }

    /// Memo cache counters (all zero for the lookahead evaluator, which has no cache)
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        match self {
            Self::Exact(solver) => solver.cache_stats(),
            Self::Lookahead { .. } => CacheStats::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Universe;

    fn fixture() -> (Universe, PatternTable) {
        let universe =
            Universe::from_strs(&["crane", "slate", "irate", "plate", "erase"]).unwrap();
        let table = PatternTable::build(&universe);
        (universe, table)
    }

    #[test]
    fn ply_zero_selects_exact() {
        let (_, table) = fixture();
        let evaluator = SetEvaluator::from_config(&table, &SolverConfig::default());
        assert!(evaluator.is_exact());
    }

    #[test]
    fn positive_ply_selects_lookahead() {
        let (_, table) = fixture();
        let config = SolverConfig {
            ply: 2,
            ..SolverConfig::default()
        };
        let evaluator = SetEvaluator::from_config(&table, &config);

        assert!(matches!(evaluator, SetEvaluator::Lookahead { ply: 2, .. }));
        assert_eq!(evaluator.cache_stats(), CacheStats::default());
    }

    #[test]
    fn both_variants_agree_on_small_fixture() {
        let (_, table) = fixture();
        let set = [0, 1, 2, 3, 4];

        let mut exact = SetEvaluator::from_config(&table, &SolverConfig::default());
        let mut lookahead = SetEvaluator::from_config(
            &table,
            &SolverConfig {
                ply: 2,
                ..SolverConfig::default()
            },
        );

        // greedy picks slate (all singletons), which is also the optimum
        let exact_steps = exact.expected_steps(&set);
        assert!((exact_steps - 1.8).abs() < 1e-9);
        assert!((lookahead.expected_steps(&set) - exact_steps).abs() < 1e-9);
    }

    #[test]
    fn exact_variant_reports_cache_use() {
        let (_, table) = fixture();
        let mut evaluator = SetEvaluator::from_config(&table, &SolverConfig::default());

        let _ = evaluator.expected_steps(&[0, 1, 2, 3, 4]);
        assert!(evaluator.cache_stats().insertions > 0);
    }
}
