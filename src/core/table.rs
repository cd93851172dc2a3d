//! Precomputed guess × secret feedback table
//!
//! Every solver lookup goes through this table, so pattern calculation happens
//! exactly once per ordered pair of words.

use super::{Pattern, Universe};
use rayon::prelude::*;
use std::time::Instant;

/// Row-major table: `get(g, a)` is the pattern for guessing `g` when `a` is the secret
#[derive(Debug, Clone)]
pub struct PatternTable {
    size: usize,
    word_len: usize,
    codes: Vec<Pattern>,
}

impl PatternTable {
    /// Compute the pattern for every ordered pair of universe words
    ///
    /// O(|U|² · length); rows are filled in parallel.
    #[must_use]
    pub fn build(universe: &Universe) -> Self {
        let start = Instant::now();
        let size = universe.len();
        let words = universe.words();

        let mut codes = vec![Pattern::new(0); size * size];
        codes
            .par_chunks_mut(size)
            .zip(words.par_iter())
            .for_each(|(row, guess)| {
                for (cell, answer) in row.iter_mut().zip(words) {
                    *cell = Pattern::calculate(guess, answer);
                }
            });

        log::info!(
            "Built {size}x{size} pattern table in {}ms",
            start.elapsed().as_millis()
        );

        Self {
            size,
            word_len: universe.word_len(),
            codes,
        }
    }

    /// Pattern produced by guessing `guess` against secret `answer`
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, guess: usize, answer: usize) -> Pattern {
        assert!(answer < self.size, "answer index {answer} out of range");
        self.codes[guess * self.size + answer]
    }

    /// Patterns for one guess against every secret, in universe order
    #[inline]
    #[must_use]
    pub fn row(&self, guess: usize) -> &[Pattern] {
        &self.codes[guess * self.size..(guess + 1) * self.size]
    }

    /// Number of words on each axis
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Word length of the underlying universe
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    /// The all-green pattern for this table's word length
    #[must_use]
    pub const fn all_correct(&self) -> Pattern {
        Pattern::all_correct(self.word_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn table_matches_direct_calculation() {
        let universe = Universe::from_strs(&["crane", "slate", "speed", "erase"]).unwrap();
        let table = PatternTable::build(&universe);

        assert_eq!(table.size(), 4);
        for g in 0..4 {
            for a in 0..4 {
                assert_eq!(
                    table.get(g, a),
                    Pattern::calculate(universe.word(g), universe.word(a))
                );
            }
        }
    }

    #[test]
    fn diagonal_is_all_correct() {
        let universe = Universe::from_strs(&["cat", "act", "tac", "cot"]).unwrap();
        let table = PatternTable::build(&universe);

        for i in 0..universe.len() {
            assert_eq!(table.get(i, i), table.all_correct());
        }
    }

    #[test]
    fn table_is_asymmetric() {
        let universe = Universe::from_strs(&["speed", "erase"]).unwrap();
        let table = PatternTable::build(&universe);
        assert_ne!(table.get(0, 1), table.get(1, 0));
        assert_eq!(table.get(0, 1).value(), 37);
    }

    #[test]
    fn row_lists_one_guess() {
        let universe = Universe::from_strs(&["crane", "slate", "irate"]).unwrap();
        let table = PatternTable::build(&universe);
        let crane = Word::new("crane").unwrap();

        let row = table.row(0);
        assert_eq!(row.len(), 3);
        assert_eq!(row[1], Pattern::calculate(&crane, universe.word(1)));
    }
}
