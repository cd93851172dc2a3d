//! Rank root guesses for a candidate set

use super::Workspace;
use crate::config::SolverConfig;
use crate::output;
use crate::solver::{CancelFlag, RankOutcome, RootEvaluator};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

/// Options of the `rank` command
#[derive(Debug, Clone, Default)]
pub struct RankOptions {
    /// Rows to print (0 = all)
    pub top: usize,
    /// Stop scoring new roots after this long
    pub time_limit: Option<Duration>,
    /// Draw a progress bar on stderr
    pub show_progress: bool,
}

/// Rank the entropy-selected root guesses and print the table
///
/// # Errors
/// Returns an error if the configuration is invalid or the worker pool cannot start.
pub fn run_rank(
    workspace: &Workspace,
    config: SolverConfig,
    options: &RankOptions,
) -> Result<RankOutcome> {
    let exact = config.ply == 0;
    let evaluator = RootEvaluator::new(&workspace.universe, &workspace.table, config)?;
    let cancel = CancelFlag::new();

    let bar = if options.show_progress {
        let bar = ProgressBar::new(evaluator.root_count(&workspace.candidates) as u64);
        bar.set_style(ProgressStyle::with_template(
            "{spinner} [{elapsed_precise}] {wide_bar} {pos}/{len} roots",
        )?);
        bar
    } else {
        ProgressBar::hidden()
    };

    let outcome = thread::scope(|scope| {
        let (done_tx, done_rx) = mpsc::channel::<()>();

        if let Some(limit) = options.time_limit {
            let cancel = cancel.clone();
            scope.spawn(move || {
                if let Err(RecvTimeoutError::Timeout) = done_rx.recv_timeout(limit) {
                    log::info!("Time limit of {limit:?} reached");
                    cancel.cancel();
                }
            });
        }

        let outcome =
            evaluator.rank_with_progress(&workspace.candidates, &cancel, || bar.inc(1));
        drop(done_tx);
        outcome
    })?;

    bar.finish_and_clear();
    output::print_ranking(&workspace.universe, &outcome, options.top, exact);
    Ok(outcome)
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
            workers: 2,
            worker_stack_size: 4 * 1024 * 1024,
            ..SolverConfig::default()
        }
    }

    #[test]
    fn ranks_fixture() {
        let workspace = workspace();
        let outcome = run_rank(&workspace, config(), &RankOptions::default()).unwrap();

        assert!(!outcome.cancelled);
        let best = outcome.best().unwrap();
        assert_eq!(workspace.universe.word(best.guess).text(), "slate");
    }

    #[test]
    fn generous_time_limit_does_not_cancel() {
        let workspace = workspace();
        let options = RankOptions {
            time_limit: Some(Duration::from_secs(600)),
            ..RankOptions::default()
        };

        let outcome = run_rank(&workspace, config(), &options).unwrap();
        assert!(!outcome.cancelled);
        assert_eq!(outcome.results.len(), 5);
    }

    #[test]
    fn invalid_config_is_reported() {
        let workspace = workspace();
        let config = SolverConfig {
            evict_fraction: 2.0,
            ..config()
        };
        assert!(run_rank(&workspace, config, &RankOptions::default()).is_err());
    }
}
