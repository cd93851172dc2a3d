//! Entropy-based scoring and ranking of guesses

mod calculator;
mod ranker;

pub use calculator::{GuessMetrics, calculate_metrics};
pub use ranker::{ScoredGuess, compare_scored, rank_by_entropy, select_top};
