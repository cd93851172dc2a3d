//! Score one forced first guess

use super::Workspace;
use crate::config::SolverConfig;
use crate::output;
use crate::solver::RootEvaluator;
use crate::solver::entropy::{GuessMetrics, calculate_metrics};
use anyhow::Result;

/// Everything known about one guess against the candidate set
#[derive(Debug, Clone, PartialEq)]
pub struct GuessReport {
    pub guess: usize,
    /// Expected guesses when this guess is played first
    pub expected_steps: f64,
    /// Whether `expected_steps` is exact or a lookahead estimate
    pub exact: bool,
    pub metrics: GuessMetrics,
}

/// Evaluate `guess` as a forced first guess and print the report
///
/// # Errors
/// Returns an error if the guess is not part of the universe or the
/// configuration is invalid.
pub fn run_evaluate(
    workspace: &Workspace,
    config: SolverConfig,
    guess: &str,
) -> Result<GuessReport> {
    let guess = workspace.resolve_guess(guess)?;
    let exact = config.ply == 0;
    let evaluator = RootEvaluator::new(&workspace.universe, &workspace.table, config)?;

    let report = GuessReport {
        guess,
        expected_steps: evaluator.evaluate_guess(&workspace.candidates, guess)?,
        exact,
        metrics: calculate_metrics(&workspace.table, guess, workspace.candidates.indices()),
    };

    output::print_evaluation(&workspace.universe, &report, workspace.candidates.len());
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::words_from_slice;

    fn workspace() -> Workspace {
        let words = words_from_slice(&["crane", "slate", "irate", "plate", "erase"]);
        Workspace::from_words(words, None).unwrap()
    }

    fn config() -> SolverConfig {
        SolverConfig {
            workers: 1,
            worker_stack_size: 4 * 1024 * 1024,
            ..SolverConfig::default()
        }
    }

    #[test]
    fn reports_forced_cost_and_metrics() {
        let report = run_evaluate(&workspace(), config(), "plate").unwrap();

        assert_eq!(report.guess, 3);
        assert!(report.exact);
        assert!((report.expected_steps - 2.0).abs() < 1e-9);
        assert_eq!(report.metrics.max_partition, 2);
    }

    #[test]
    fn lookahead_report_is_marked_inexact() {
        let config = SolverConfig { ply: 1, ..config() };
        let report = run_evaluate(&workspace(), config, "crane").unwrap();

        assert!(!report.exact);
        assert!((report.expected_steps - 2.2).abs() < 1e-9);
    }

    #[test]
    fn unknown_guess_fails() {
        assert!(run_evaluate(&workspace(), config(), "zzzzz").is_err());
    }
}
