//! Feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Gray (letter not in word)
//! - 1 = Yellow (letter in word, wrong position)
//! - 2 = Green (letter in correct position)
//!
//! The pattern is stored as a single u32 value, where each position
//! contributes digit × 3^position to the total. Words of up to
//! [`MAX_WORD_LEN`] letters fit.

use super::Word;
use super::word::MAX_WORD_LEN;

/// Feedback pattern for one guess against one secret
///
/// The word length is not stored; callers that need to decode a pattern
/// pass the length explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(u32);

impl Pattern {
    /// Create a new pattern from a raw value
    #[inline]
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw pattern value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// The all-green pattern for words of `len` letters
    ///
    /// # Examples
    /// ```
    /// use wordle_expectimax::core::Pattern;
    ///
    /// // 2 + 2×3 + 2×9 + 2×27 + 2×81
    /// assert_eq!(Pattern::all_correct(5).value(), 242);
    /// ```
    #[must_use]
    pub const fn all_correct(len: usize) -> Self {
        let mut value = 0u32;
        let mut multiplier = 1u32;
        let mut i = 0;
        while i < len {
            value += 2 * multiplier;
            multiplier *= 3;
            i += 1;
        }
        Self(value)
    }

    /// Number of distinct patterns for words of `len` letters (3^len)
    #[must_use]
    pub const fn count(len: usize) -> u64 {
        3u64.pow(len as u32)
    }

    /// Check if this is a perfect match for words of `len` letters
    #[inline]
    #[must_use]
    pub const fn is_perfect(self, len: usize) -> bool {
        self.0 == Self::all_correct(len).0
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the secret
    ///
    /// Handles repeated letters the standard way: a guess letter only earns a
    /// yellow while the secret still has an unmatched copy of it.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches (greens); count the secret's unmatched letters
    /// 2. Second pass, left to right: a remaining guess letter is yellow if an unmatched
    ///    copy is left (consuming it), gray otherwise
    /// 3. Encode as base-3 number
    ///
    /// # Panics
    /// Panics in debug builds if the two words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_expectimax::core::{Word, Pattern};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// // C(gray) R(gray) A(green) N(gray) E(green)
    /// // 0 + 0×3 + 2×9 + 0×27 + 2×81 = 180
    /// assert_eq!(pattern.value(), 180);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let guess = guess.chars();
        let answer = answer.chars();
        debug_assert_eq!(guess.len(), answer.len(), "words must share a length");

        let mut result = [0u8; MAX_WORD_LEN];
        let mut answer_available = [0u8; 256];

        for (i, (&g, &a)) in guess.iter().zip(answer).enumerate() {
            if g == a {
                result[i] = 2;
            } else {
                answer_available[a as usize] += 1;
            }
        }

        for (i, &g) in guess.iter().enumerate() {
            if result[i] == 0 {
                let count = &mut answer_available[g as usize];
                if *count > 0 {
                    result[i] = 1;
                    *count -= 1;
                }
            }
        }

        let mut pattern = 0u32;
        let mut multiplier = 1u32;
        for &digit in &result[..guess.len()] {
            pattern += u32::from(digit) * multiplier;
            multiplier *= 3;
        }

        Self(pattern)
    }

    /// Per-position digits (0 gray, 1 yellow, 2 green) for `len` letters
    #[must_use]
    pub fn digits(self, len: usize) -> Vec<u8> {
        let mut val = self.0;
        (0..len)
            .map(|_| {
                let digit = (val % 3) as u8;
                val /= 3;
                digit
            })
            .collect()
    }

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/⬜/⬛ for gray
    ///
    /// The pattern length is the number of symbols.
    ///
    /// # Examples
    /// ```
    /// use wordle_expectimax::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GY-GY").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.is_empty() || chars.len() > MAX_WORD_LEN {
            return None;
        }

        let mut pattern = 0u32;
        let mut multiplier = 1u32;

        for ch in chars {
            let digit = match ch {
                'G' | 'g' | '🟩' => 2,
                'Y' | 'y' | '🟨' => 1,
                '-' | '_' | '⬜' | '⬛' => 0,
                _ => return None,
            };
            pattern += digit * multiplier;
            multiplier *= 3;
        }

        Some(Self(pattern))
    }

    /// Convert pattern to emoji string for `len` letters
    ///
    /// # Examples
    /// ```
    /// use wordle_expectimax::core::Pattern;
    ///
    /// let p = Pattern::parse("GY-GY").unwrap();
    /// assert_eq!(p.to_emoji(5), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self, len: usize) -> String {
        self.digits(len)
            .into_iter()
            .map(|digit| match digit {
                2 => '🟩',
                1 => '🟨',
                _ => '⬜',
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern_of(guess: &str, answer: &str) -> Pattern {
        Pattern::calculate(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn all_correct_constant() {
        assert_eq!(Pattern::all_correct(5).value(), 242);
        assert_eq!(Pattern::all_correct(3).value(), 26);
        assert_eq!(Pattern::all_correct(1).value(), 2);
        assert!(Pattern::all_correct(5).is_perfect(5));
        assert_eq!(Pattern::all_correct(5).digits(5), vec![2; 5]);
        assert_eq!(Pattern::count(5), 243);
    }

    #[test]
    fn pattern_all_gray() {
        let pattern = pattern_of("abcde", "fghij");
        assert_eq!(pattern.value(), 0);
        assert_eq!(pattern.digits(5), vec![0; 5]);
    }

    #[test]
    fn pattern_self_is_all_correct() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa", "cat", "llama"] {
            let w = Word::new(word).unwrap();
            assert!(Pattern::calculate(&w, &w).is_perfect(w.len()));
        }
    }

    #[test]
    fn pattern_duplicate_letters_speed_erase() {
        // S(yellow) P(gray) E(yellow) E(yellow) D(gray)
        // 1 + 0×3 + 1×9 + 1×27 + 0×81 = 37
        let pattern = pattern_of("speed", "erase");
        assert_eq!(pattern.value(), 37);
        assert_eq!(pattern.digits(5), vec![1, 0, 1, 1, 0]);
    }

    #[test]
    fn pattern_duplicate_letters_robot_floor() {
        // R(yellow) O(yellow) B(gray) O(green) T(gray)
        // 1 + 1×3 + 0×9 + 2×27 + 0×81 = 58
        let pattern = pattern_of("robot", "floor");
        assert_eq!(pattern.value(), 58);
        assert_eq!(pattern.digits(5), vec![1, 1, 0, 2, 0]);
    }

    #[test]
    fn pattern_allow_llama() {
        // A(yellow) L(green) L(yellow) O(gray) W(gray)
        // 1 + 2×3 + 1×9 = 16
        let pattern = pattern_of("allow", "llama");
        assert_eq!(pattern.value(), 16);
        assert_eq!(pattern.digits(5), vec![1, 2, 1, 0, 0]);
    }

    #[test]
    fn repeated_guess_letter_single_in_secret() {
        // LEMON has one L: only the first unmatched L of ALLOW earns a yellow
        // A(gray) L(yellow) L(gray) O(green) W(gray)
        let pattern = pattern_of("allow", "lemon");
        assert_eq!(pattern.digits(5), vec![0, 1, 0, 2, 0]);
    }

    #[test]
    fn green_consumes_copy_before_yellows() {
        // The final E is green; the earlier E's find no copy left
        assert_eq!(pattern_of("eerie", "thine").digits(5), vec![0, 0, 0, 1, 2]);
        assert_eq!(pattern_of("geese", "those").digits(5), vec![0, 0, 0, 2, 2]);
    }

    #[test]
    fn pattern_is_asymmetric() {
        assert_ne!(pattern_of("speed", "erase"), pattern_of("erase", "speed"));
    }

    #[test]
    fn pattern_other_lengths() {
        // cat vs act: C(yellow) A(yellow) T(green) = 1 + 3 + 18
        assert_eq!(pattern_of("cat", "act").value(), 22);
        assert!(pattern_of("abcdefg", "abcdefg").is_perfect(7));
    }

    #[test]
    fn pattern_parse_valid() {
        let p1 = Pattern::parse("GYG--").unwrap();
        let p2 = Pattern::parse("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Pattern::parse("gyg__").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        // 2 + 1×3 + 2×9 = 23
        assert_eq!(p1.value(), 23);
    }

    #[test]
    fn pattern_parse_invalid() {
        assert!(Pattern::parse("GXGGY").is_none());
        assert!(Pattern::parse("").is_none());
        assert!(Pattern::parse(&"G".repeat(MAX_WORD_LEN + 1)).is_none());
    }

    #[test]
    fn pattern_emoji_matches_calculation() {
        let pattern = pattern_of("crane", "slate");
        assert_eq!(pattern.to_emoji(5), "⬜⬜🟩⬜🟩");
        assert_eq!(Pattern::parse(&pattern.to_emoji(5)), Some(pattern));
    }
}
