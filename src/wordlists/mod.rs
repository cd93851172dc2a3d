//! Word lists supplied by the caller
//!
//! The engine never filters or validates word lists beyond what [`Word::new`]
//! accepts; these helpers turn files and slices into words for a
//! [`Universe`](crate::core::Universe) or a candidate set.
//!
//! [`Word::new`]: crate::core::Word::new

pub mod loader;

pub use loader::{dedup_preserving_order, load_from_file, words_from_slice};
