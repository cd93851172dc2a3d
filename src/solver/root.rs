//! Scoring and ranking of root guesses
//!
//! A root guess is played first, unconditionally; its cost is
//! `1 + Σ p(b) × E(b)` over the buckets it leaves, with `E` supplied by an
//! [`Evaluator`]. Ranking runs entropy pre-selection, then scores the selected
//! roots in parallel on a dedicated worker pool. Each worker owns its own
//! evaluator and cache.

use super::cache::CacheStats;
use super::entropy::{GuessMetrics, ScoredGuess, select_top};
use super::evaluator::{Evaluator, SetEvaluator};
use super::exact::check_set;
use super::partition::partition;
use crate::config::{GuessPolicy, SolverConfig};
use crate::core::{CandidateSet, PatternTable, Universe};
use crate::error::SolverError;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::sync::Arc;
use std::sync::atomic::{self, AtomicBool};
use std::time::Instant;

/// Cost of playing `guess` first against `set`, with the buckets it leaves
/// valued by `evaluator`
///
/// The all-correct bucket ends the game on this guess and adds nothing.
///
/// # Panics
/// Panics if the bucket probabilities do not sum to one.
pub fn forced_first_guess_cost<E>(
    table: &PatternTable,
    set: &[usize],
    guess: usize,
    evaluator: &mut E,
) -> f64
where
    E: Evaluator + ?Sized,
{
    let split = partition(table, set, guess);
    split.assert_mass();

    let all_correct = table.all_correct();
    let mut cost = 1.0;
    for bucket in split.buckets() {
        if bucket.pattern != all_correct {
            cost += split.probability(bucket)
                * evaluator.expected_steps(bucket.members.indices());
        }
    }
    cost
}

/// Cooperative cancellation signal shared with a running ranking
///
/// Checked once before each root guess; a root already being scored finishes.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask running evaluations to stop at the next root
    pub fn cancel(&self) {
        self.0.store(true, atomic::Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(atomic::Ordering::Relaxed)
    }
}

/// One scored root guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedGuess {
    /// Universe index of the guess
    pub guess: usize,
    /// Expected guesses to solve when this guess is played first
    pub expected_steps: f64,
    /// Split metrics of the guess over the candidate set
    pub metrics: GuessMetrics,
}

/// Result of a ranking run
#[derive(Debug, Clone, PartialEq)]
pub struct RankOutcome {
    /// Completed root evaluations, best first
    pub results: Vec<RankedGuess>,
    /// Whether cancellation skipped some of the selected roots
    pub cancelled: bool,
    /// Cache counters summed over all workers
    pub cache_stats: CacheStats,
}

impl RankOutcome {
    /// The best guess found, if any root completed
    #[must_use]
    pub fn best(&self) -> Option<&RankedGuess> {
        self.results.first()
    }
}

/// Order ranked guesses: fewer expected steps, then higher entropy, then smaller
/// expected bucket, then the word itself
#[must_use]
pub fn compare_ranked(universe: &Universe, a: &RankedGuess, b: &RankedGuess) -> Ordering {
    a.expected_steps
        .total_cmp(&b.expected_steps)
        .then(b.metrics.entropy.total_cmp(&a.metrics.entropy))
        .then(
            a.metrics
                .expected_remaining
                .total_cmp(&b.metrics.expected_remaining),
        )
        .then_with(|| universe.word(a.guess).cmp(universe.word(b.guess)))
}

/// Scores root guesses over a fixed universe
pub struct RootEvaluator<'a> {
    universe: &'a Universe,
    table: &'a PatternTable,
    config: SolverConfig,
    pool: rayon::ThreadPool,
}

impl<'a> RootEvaluator<'a> {
    /// Create an evaluator and its worker pool
    ///
    /// # Errors
    /// Returns an error if `config` is invalid, `table` was not built from
    /// `universe`, or the worker pool cannot be started.
    pub fn new(
        universe: &'a Universe,
        table: &'a PatternTable,
        config: SolverConfig,
    ) -> Result<Self, SolverError> {
        config.validate()?;
        if table.size() != universe.len() {
            return Err(SolverError::InvalidConfig(format!(
                "pattern table covers {} words but the universe has {}",
                table.size(),
                universe.len()
            )));
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.workers)
            .stack_size(config.worker_stack_size)
            .thread_name(|i| format!("expectimax-{i}"))
            .build()?;

        Ok(Self {
            universe,
            table,
            config,
            pool,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Guesses eligible at the root: the candidates themselves when closed,
    /// the whole universe when open
    fn root_pool(&self, candidates: &CandidateSet) -> Vec<usize> {
        match self.config.policy {
            GuessPolicy::Closed => candidates.indices().to_vec(),
            GuessPolicy::Open => (0..self.universe.len()).collect(),
        }
    }

    /// Number of root guesses a ranking of `candidates` will score
    #[must_use]
    pub fn root_count(&self, candidates: &CandidateSet) -> usize {
        let pool = match self.config.policy {
            GuessPolicy::Closed => candidates.len(),
            GuessPolicy::Open => self.universe.len(),
        };
        match self.config.max_exact_roots {
            0 => pool,
            limit => pool.min(limit),
        }
    }

    /// Expected guesses when `guess` is played first against `candidates`
    ///
    /// Runs on the worker pool so deep recursion gets the configured stack.
    ///
    /// # Errors
    /// Returns an error if `candidates` or `guess` is out of range.
    pub fn evaluate_guess(
        &self,
        candidates: &CandidateSet,
        guess: usize,
    ) -> Result<f64, SolverError> {
        check_set(self.table, candidates)?;
        self.universe.check_index(guess)?;

        let cost = self.pool.install(|| {
            let mut evaluator = SetEvaluator::from_config(self.table, &self.config);
            forced_first_guess_cost(self.table, candidates.indices(), guess, &mut evaluator)
        });
        Ok(cost)
    }

    /// Rank the entropy-selected root guesses for `candidates`
    ///
    /// # Errors
    /// Returns an error if `candidates` is out of range for the universe.
    pub fn rank(
        &self,
        candidates: &CandidateSet,
        cancel: &CancelFlag,
    ) -> Result<RankOutcome, SolverError> {
        self.rank_with_progress(candidates, cancel, || {})
    }

    /// [`rank`](Self::rank), calling `progress` after each completed root
    ///
    /// # Errors
    /// Returns an error if `candidates` is out of range for the universe.
    pub fn rank_with_progress<F>(
        &self,
        candidates: &CandidateSet,
        cancel: &CancelFlag,
        progress: F,
    ) -> Result<RankOutcome, SolverError>
    where
        F: Fn() + Sync,
    {
        check_set(self.table, candidates)?;
        let start = Instant::now();

        let guess_pool = self.root_pool(candidates);
        let roots = select_top(
            self.universe,
            self.table,
            &guess_pool,
            candidates.indices(),
            self.config.max_exact_roots,
        );
        log::info!(
            "Ranking {} of {} root guesses over {} candidates ({:?}, ply {})",
            roots.len(),
            guess_pool.len(),
            candidates.len(),
            self.config.policy,
            self.config.ply
        );

        let (cache_stats, mut results) = self.pool.install(|| {
            roots
                .par_iter()
                .fold(
                    || {
                        (
                            SetEvaluator::from_config(self.table, &self.config),
                            Vec::new(),
                        )
                    },
                    |(mut evaluator, mut done), scored| {
                        if !cancel.is_cancelled() {
                            done.push(self.score_root(candidates, scored, &mut evaluator));
                            progress();
                        }
                        (evaluator, done)
                    },
                )
                .map(|(evaluator, done)| {
                    let stats = evaluator.cache_stats();
                    log::debug!(
                        "worker finished {} roots: {} hits, {} misses, {} evictions",
                        done.len(),
                        stats.hits,
                        stats.misses,
                        stats.evictions
                    );
                    (stats, done)
                })
                .reduce(
                    || (CacheStats::default(), Vec::new()),
                    |(mut stats, mut done), (more_stats, more)| {
                        stats += more_stats;
                        done.extend(more);
                        (stats, done)
                    },
                )
        });

        results.sort_by(|a, b| compare_ranked(self.universe, a, b));
        let cancelled = results.len() < roots.len();

        if cancelled {
            log::info!(
                "Ranking cancelled after {} of {} roots",
                results.len(),
                roots.len()
            );
        } else {
            log::info!(
                "Ranked {} roots in {}ms",
                results.len(),
                start.elapsed().as_millis()
            );
        }

        Ok(RankOutcome {
            results,
            cancelled,
            cache_stats,
        })
    }

    fn score_root(
        &self,
        candidates: &CandidateSet,
        scored: &ScoredGuess,
        evaluator: &mut SetEvaluator<'_>,
    ) -> RankedGuess {
        let expected_steps =
            forced_first_guess_cost(self.table, candidates.indices(), scored.guess, evaluator);
        log::debug!(
            "{}: {expected_steps:.4} expected steps",
            self.universe.word(scored.guess)
        );

        RankedGuess {
            guess: scored.guess,
            expected_steps,
            metrics: scored.metrics,
        }
    }
}
