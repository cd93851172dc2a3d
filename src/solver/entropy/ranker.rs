//! Entropy-based ordering of candidate guesses
//!
//! Exact evaluation is far too expensive to run on every possible guess, so the
//! guesses are first ordered by how well they split the candidates and only the
//! head of that list is handed to the expensive evaluators.

use super::calculator::{GuessMetrics, calculate_metrics};
use crate::core::{PatternTable, Universe};
use rayon::prelude::*;
use std::cmp::Ordering;

/// A guess together with its split metrics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredGuess {
    /// Universe index of the guess
    pub guess: usize,
    pub metrics: GuessMetrics,
}

/// Order two scored guesses: entropy (primary, higher first), `expected_remaining`
/// (secondary, lower first), `max_partition` (tertiary, lower first), then the
/// word itself lexicographically so the order is fully deterministic.
#[must_use]
pub fn compare_scored(universe: &Universe, a: &ScoredGuess, b: &ScoredGuess) -> Ordering {
    b.metrics
        .entropy
        .total_cmp(&a.metrics.entropy)
        .then(
            a.metrics
                .expected_remaining
                .total_cmp(&b.metrics.expected_remaining),
        )
        .then(a.metrics.max_partition.cmp(&b.metrics.max_partition))
        .then_with(|| universe.word(a.guess).cmp(universe.word(b.guess)))
}

/// Score every guess of `guess_pool` against `candidates` and sort best-first
///
/// Scoring runs in parallel; the final order does not depend on scheduling.
#[must_use]
pub fn rank_by_entropy(
    universe: &Universe,
    table: &PatternTable,
    guess_pool: &[usize],
    candidates: &[usize],
) -> Vec<ScoredGuess> {
    let mut scored: Vec<ScoredGuess> = guess_pool
        .par_iter()
        .map(|&guess| ScoredGuess {
            guess,
            metrics: calculate_metrics(table, guess, candidates),
        })
        .collect();

    scored.sort_by(|a, b| compare_scored(universe, a, b));
    scored
}

/// The `limit` most promising guesses (all of them when `limit` is 0)
#[must_use]
pub fn select_top(
    universe: &Universe,
    table: &PatternTable,
    guess_pool: &[usize],
    candidates: &[usize],
    limit: usize,
) -> Vec<ScoredGuess> {
    let mut ranked = rank_by_entropy(universe, table, guess_pool, candidates);
    if limit > 0 {
        ranked.truncate(limit);
    }
    ranked
}
