//! Error types for the solving engine

use crate::core::WordError;
use thiserror::Error;

/// Errors returned by public entry points of the engine
///
/// Internal invariant violations (lost candidates in a partition, probability mass
/// not summing to one) are defects and panic instead.
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("invalid word: {0}")]
    Word(#[from] WordError),

    #[error("the word universe is empty")]
    EmptyUniverse,

    #[error("word \"{word}\" has length {}, expected {expected}", word.len())]
    MixedLength { word: String, expected: usize },

    #[error("word \"{0}\" appears more than once")]
    DuplicateWord(String),

    #[error("word \"{0}\" is not part of the universe")]
    UnknownWord(String),

    #[error("candidate set is empty")]
    EmptyCandidateSet,

    #[error("index {index} is out of range for a universe of {len} words")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unable to start worker pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
