//! Core domain types: words, feedback patterns, the universe, and the pattern table

mod pattern;
mod table;
mod universe;
mod word;

pub use pattern::Pattern;
pub use table::PatternTable;
pub use universe::{CandidateSet, Universe};
pub use word::{MAX_WORD_LEN, Word, WordError};
