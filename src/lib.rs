//! Wordle Expectimax
//!
//! A decision engine for word-guessing games with positional feedback. Given a
//! universe of words and a candidate set, it computes the minimum expected number
//! of guesses to isolate the secret, exactly (memoized expectimax with
//! branch-and-bound) or approximately (depth-limited greedy lookahead), and ranks
//! guesses by that value.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_expectimax::config::SolverConfig;
//! use wordle_expectimax::core::{CandidateSet, PatternTable, Universe};
//! use wordle_expectimax::solver::{CancelFlag, RootEvaluator};
//!
//! let universe = Universe::from_strs(&["crane", "slate", "irate", "plate", "erase"]).unwrap();
//! let table = PatternTable::build(&universe);
//! let config = SolverConfig {
//!     worker_stack_size: 4 * 1024 * 1024,
//!     ..SolverConfig::default()
//! };
//!
//! let ranker = RootEvaluator::new(&universe, &table, config).unwrap();
//! let outcome = ranker.rank(&CandidateSet::full(&universe), &CancelFlag::new()).unwrap();
//!
//! let best = outcome.best().unwrap();
//! assert_eq!(universe.word(best.guess).text(), "slate");
//! assert!((best.expected_steps - 1.8).abs() < 1e-9);
//! ```

// Core domain types
pub mod core;

// Solver configuration
pub mod config;

// Error types
pub mod error;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::SolverError;
