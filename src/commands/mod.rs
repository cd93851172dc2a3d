//! Command implementations for the CLI

mod buckets;
mod evaluate;
mod rank;

pub use buckets::run_buckets;
pub use evaluate::{GuessReport, run_evaluate};
pub use rank::{RankOptions, run_rank};

use crate::core::{CandidateSet, Pattern, PatternTable, Universe, Word};
use crate::wordlists::{dedup_preserving_order, load_from_file};
use anyhow::{Context, Result};
use std::path::Path;

/// Universe, pattern table, and candidate set shared by every command
pub struct Workspace {
    pub universe: Universe,
    pub table: PatternTable,
    pub candidates: CandidateSet,
}

impl Workspace {
    /// Load the universe from `words` and, optionally, a candidate subset from
    /// `candidates` (the whole universe otherwise)
    ///
    /// # Errors
    /// Returns an error if a file cannot be read, the universe is invalid, or a
    /// candidate is not part of the universe.
    pub fn load(words: &Path, candidates: Option<&Path>) -> Result<Self> {
        let universe_words = load_from_file(words)
            .with_context(|| format!("Failed to read word list {}", words.display()))?;

        let candidate_words = candidates
            .map(|path| {
                load_from_file(path)
                    .with_context(|| format!("Failed to read candidate list {}", path.display()))
            })
            .transpose()?;

        Self::from_words(universe_words, candidate_words)
    }

    /// Build a workspace from in-memory word lists
    ///
    /// Repeated words are dropped, keeping the first occurrence.
    ///
    /// # Errors
    /// Returns an error if the universe is invalid or a candidate is unknown.
    pub fn from_words(words: Vec<Word>, candidates: Option<Vec<Word>>) -> Result<Self> {
        let universe = Universe::new(dedup_preserving_order(words))
            .context("Invalid word universe")?;
        let table = PatternTable::build(&universe);

        let candidates = match candidates {
            Some(words) => CandidateSet::from_words(&universe, &words)
                .context("Invalid candidate list")?,
            None => CandidateSet::full(&universe),
        };

        Ok(Self {
            universe,
            table,
            candidates,
        })
    }

    /// Universe index of the word spelled `text`
    ///
    /// # Errors
    /// Returns an error if `text` is not a valid word of the universe.
    pub fn resolve_guess(&self, text: &str) -> Result<usize> {
        let word = Word::new(text).with_context(|| format!("Invalid guess {text:?}"))?;
        Ok(self.universe.require(&word)?)
    }

    /// Parse a feedback string such as `"--G-Y"` or `"⬜⬜🟩⬜🟨"` for words of
    /// this universe
    ///
    /// # Errors
    /// Returns an error if a symbol is not a feedback symbol or the length does
    /// not match the word length.
    pub fn parse_feedback(&self, text: &str) -> Result<Pattern> {
        let symbols = text.chars().count();
        anyhow::ensure!(
            symbols == self.universe.word_len(),
            "Feedback {text:?} has {symbols} symbols, expected {}",
            self.universe.word_len()
        );
        Pattern::parse(text).with_context(|| format!("Invalid feedback {text:?}"))
    }
}
