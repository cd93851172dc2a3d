//! Word representation
//!
//! A Word stores a fixed sequence of ASCII symbols. Length and alphabet are chosen
//! by the caller; a universe only requires that all of its words share one length.

use std::fmt;

/// Longest supported word; `3^20` feedback codes still fit in a `u32`.
pub const MAX_WORD_LEN: usize = 20;

/// A guessable word
///
/// Stores lowercase ASCII bytes; text is reconstructed on-demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    chars: Box<[u8]>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("Word must have between 1 and {MAX_WORD_LEN} letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII characters")]
    NonAscii,
    #[error("Word contains whitespace or control characters")]
    InvalidCharacters,
}

#[allow(clippy::len_without_is_empty)] // Words are never empty
impl Word {
    /// Create a new Word from a string
    ///
    /// Converts the input to lowercase and validates it.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is zero or exceeds [`MAX_WORD_LEN`]
    /// - Contains non-ASCII characters
    /// - Contains whitespace or control characters
    ///
    /// # Examples
    /// ```
    /// use wordle_expectimax::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("two words").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.is_empty() || text.len() > MAX_WORD_LEN {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            chars: text.into_bytes().into_boxed_slice(),
        })
    }

    /// Get the word as a string slice
    ///
    /// # Panics
    /// Never panics. Word validates ASCII at construction time.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.chars).expect("Word chars are always valid UTF-8")
    }

    /// Get the word as a byte slice
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        &self.chars
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.chars(), b"crane");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CrAnE").unwrap();
        assert_eq!(word.text(), "crane");
    }

    #[test]
    fn word_creation_other_lengths() {
        assert_eq!(Word::new("cat").unwrap().len(), 3);
        assert_eq!(Word::new("aardvarks").unwrap().len(), 9);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
        assert!(matches!(
            Word::new("a".repeat(MAX_WORD_LEN + 1)),
            Err(WordError::InvalidLength(21))
        ));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            Word::new("cran "),
            Err(WordError::InvalidCharacters)
        ));
        assert!(matches!(
            Word::new("cr\tne"),
            Err(WordError::InvalidCharacters)
        ));
        assert!(matches!(Word::new("crâne"), Err(WordError::NonAscii)));
    }

    #[test]
    fn word_symbols_beyond_letters() {
        // Equation-style alphabets are accepted as-is
        let word = Word::new("3+4=7").unwrap();
        assert_eq!(word.chars()[1], b'+');
    }

    #[test]
    fn word_ordering_is_lexicographic() {
        let mut words = vec![
            Word::new("slate").unwrap(),
            Word::new("crane").unwrap(),
            Word::new("crate").unwrap(),
        ];
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "crate", "slate"]);
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "crane".parse().unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
