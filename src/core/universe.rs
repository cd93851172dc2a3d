//! Word universe and candidate sets
//!
//! A [`Universe`] is the ordered list of every word the engine knows about. Every
//! other structure refers to words by their index in it. A [`CandidateSet`] is the
//! sorted, deduplicated list of indices still consistent with the feedback so far.

use super::Word;
use crate::error::SolverError;
use rustc_hash::FxHashMap;

/// Ordered sequence of unique, equal-length words
#[derive(Debug, Clone)]
pub struct Universe {
    words: Vec<Word>,
    index: FxHashMap<Word, usize>,
    word_len: usize,
}

impl Universe {
    /// Build a universe, assigning each word its position as a stable index
    ///
    /// # Errors
    /// Returns an error if the list is empty, the words differ in length, or a word
    /// appears twice.
    pub fn new(words: Vec<Word>) -> Result<Self, SolverError> {
        let word_len = words.first().ok_or(SolverError::EmptyUniverse)?.len();

        let mut index = FxHashMap::default();
        index.reserve(words.len());

        for (i, word) in words.iter().enumerate() {
            if word.len() != word_len {
                return Err(SolverError::MixedLength {
                    word: word.text().to_string(),
                    expected: word_len,
                });
            }
            if index.insert(word.clone(), i).is_some() {
                return Err(SolverError::DuplicateWord(word.text().to_string()));
            }
        }

        Ok(Self {
            words,
            index,
            word_len,
        })
    }

    /// Build a universe from string slices
    ///
    /// # Errors
    /// Returns an error if any word is invalid or the universe itself is invalid.
    pub fn from_strs(words: &[&str]) -> Result<Self, SolverError> {
        let words = words
            .iter()
            .map(|&w| Word::new(w))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(words)
    }

    /// Number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; construction rejects empty universes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length shared by every word
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    /// All words in index order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// The word at `index`
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn word(&self, index: usize) -> &Word {
        &self.words[index]
    }

    /// Index of `word`, if it belongs to the universe
    #[must_use]
    pub fn index_of(&self, word: &Word) -> Option<usize> {
        self.index.get(word).copied()
    }

    /// Index of `word`, or an `UnknownWord` error
    ///
    /// # Errors
    /// Returns an error if the word is not part of the universe.
    pub fn require(&self, word: &Word) -> Result<usize, SolverError> {
        self.index_of(word)
            .ok_or_else(|| SolverError::UnknownWord(word.text().to_string()))
    }

    /// Check that `index` refers to a word of this universe
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` otherwise.
    pub fn check_index(&self, index: usize) -> Result<(), SolverError> {
        if index < self.len() {
            Ok(())
        } else {
            Err(SolverError::IndexOutOfRange {
                index,
                len: self.len(),
            })
        }
    }
}

/// Subset of universe indices still consistent with observed feedback
///
/// Identity is the sorted, deduplicated index sequence, so two sets built from the
/// same indices in a different order compare equal. Sets are never mutated; a
/// partition produces fresh child sets and leaves the parent intact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidateSet(Vec<usize>);

impl CandidateSet {
    /// Build a set from arbitrary indices
    ///
    /// # Errors
    /// Returns an error if the set would be empty or an index is not below
    /// `universe_len`.
    pub fn new(
        indices: impl IntoIterator<Item = usize>,
        universe_len: usize,
    ) -> Result<Self, SolverError> {
        let mut indices: Vec<usize> = indices.into_iter().collect();
        indices.sort_unstable();
        indices.dedup();

        if indices.is_empty() {
            return Err(SolverError::EmptyCandidateSet);
        }
        if let Some(&last) = indices.last()
            && last >= universe_len
        {
            return Err(SolverError::IndexOutOfRange {
                index: last,
                len: universe_len,
            });
        }

        Ok(Self(indices))
    }

    /// Every word of the universe
    #[must_use]
    pub fn full(universe: &Universe) -> Self {
        Self((0..universe.len()).collect())
    }

    /// The set of `words`, looked up in `universe`
    ///
    /// # Errors
    /// Returns an error if a word is unknown or the list is empty.
    pub fn from_words(universe: &Universe, words: &[Word]) -> Result<Self, SolverError> {
        let indices = words
            .iter()
            .map(|w| universe.require(w))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(indices, universe.len())
    }

    /// Wrap indices already known to be sorted, unique, and in range
    pub(crate) fn from_sorted(indices: Vec<usize>) -> Self {
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        Self(indices)
    }

    /// The sorted indices
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Number of candidates
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty (only possible for internally built sets)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `index` is a member
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.0.binary_search(&index).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn universe_assigns_stable_indices() {
        let universe = Universe::from_strs(&["crane", "slate", "irate"]).unwrap();
        assert_eq!(universe.len(), 3);
        assert_eq!(universe.word_len(), 5);
        assert_eq!(universe.word(1).text(), "slate");
        assert_eq!(universe.index_of(&Word::new("irate").unwrap()), Some(2));
        assert_eq!(universe.index_of(&Word::new("plate").unwrap()), None);
    }

    #[test]
    fn universe_rejects_empty() {
        assert!(matches!(
            Universe::new(Vec::new()),
            Err(SolverError::EmptyUniverse)
        ));
    }

    #[test]
    fn universe_rejects_mixed_lengths() {
        let result = Universe::from_strs(&["crane", "cat"]);
        assert!(matches!(
            result,
            Err(SolverError::MixedLength { expected: 5, .. })
        ));
    }

    #[test]
    fn universe_rejects_duplicates() {
        let result = Universe::from_strs(&["crane", "slate", "CRANE"]);
        assert!(matches!(result, Err(SolverError::DuplicateWord(w)) if w == "crane"));
    }

    #[test]
    fn universe_check_index() {
        let universe = Universe::from_strs(&["crane", "slate"]).unwrap();
        assert!(universe.check_index(1).is_ok());
        assert!(matches!(
            universe.check_index(2),
            Err(SolverError::IndexOutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn candidate_set_identity_is_order_independent() {
        let a = CandidateSet::new([3, 1, 2], 5).unwrap();
        let b = CandidateSet::new([1, 2, 3, 3, 1], 5).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.indices(), &[1, 2, 3]);
        assert!(a.contains(2));
        assert!(!a.contains(0));
    }

    #[test]
    fn candidate_set_rejects_empty_and_out_of_range() {
        assert!(matches!(
            CandidateSet::new([], 5),
            Err(SolverError::EmptyCandidateSet)
        ));
        assert!(matches!(
            CandidateSet::new([0, 5], 5),
            Err(SolverError::IndexOutOfRange { index: 5, len: 5 })
        ));
    }

    #[test]
    fn candidate_set_from_words() {
        let universe = Universe::from_strs(&["crane", "slate", "irate"]).unwrap();
        let words = [Word::new("irate").unwrap(), Word::new("crane").unwrap()];
        let set = CandidateSet::from_words(&universe, &words).unwrap();
        assert_eq!(set.indices(), &[0, 2]);

        let unknown = [Word::new("plate").unwrap()];
        assert!(matches!(
            CandidateSet::from_words(&universe, &unknown),
            Err(SolverError::UnknownWord(_))
        ));
    }

    #[test]
    fn full_set_covers_universe() {
        let universe = Universe::from_strs(&["crane", "slate", "irate"]).unwrap();
        assert_eq!(CandidateSet::full(&universe).indices(), &[0, 1, 2]);
    }
}
