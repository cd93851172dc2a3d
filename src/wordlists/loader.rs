//! Word list loading utilities
//!
//! Files hold one word per line. Blank lines and lines starting with `#` are
//! ignored; lines that are not valid words are skipped with a warning.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances in file order, skipping any
/// invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_expectimax::wordlists::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .enumerate()
        .filter_map(|(number, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    log::warn!(
                        "{}:{}: skipping {trimmed:?}: {e}",
                        path.display(),
                        number + 1
                    );
                    None
                }
            }
        })
        .collect();

    Ok(words)
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_expectimax::wordlists::words_from_slice;
///
/// let words = words_from_slice(&["crane", "sl te", "irate"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Drop repeated words, keeping the first occurrence of each
#[must_use]
pub fn dedup_preserving_order(words: Vec<Word>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    words
        .into_iter()
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "", "café", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_slice_keeps_symbols_and_drops_whitespace() {
        let words = words_from_slice(&["crane", "sl@te", "sl te", "irate"]);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();

        assert_eq!(texts, ["crane", "sl@te", "irate"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let words = words_from_slice(&["slate", "crane", "SLATE", "irate", "crane"]);
        let unique = dedup_preserving_order(words);

        let texts: Vec<&str> = unique.iter().map(Word::text).collect();
        assert_eq!(texts, ["slate", "crane", "irate"]);
    }

    #[test]
    fn load_from_file_basic() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "crane").unwrap();
        writeln!(temp_file, "slate").unwrap();
        writeln!(temp_file, "irate").unwrap();
        temp_file.flush().unwrap();

        let words = load_from_file(temp_file.path()).unwrap();
        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn load_from_file_skips_invalid_blank_and_comments() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "# opening candidates").unwrap();
        writeln!(temp_file, "crane").unwrap();
        writeln!(temp_file, "thisiswaytoolongforaword").unwrap();
        writeln!(temp_file, "slate").unwrap();
        writeln!(temp_file).unwrap();
        writeln!(temp_file, "   ").unwrap();
        writeln!(temp_file, "  Irate  ").unwrap();
        temp_file.flush().unwrap();

        let words = load_from_file(temp_file.path()).unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate", "irate"]);
    }

    #[test]
    fn load_from_file_custom_word() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "crane").unwrap();
        writeln!(temp_file, "hoove").unwrap();
        writeln!(temp_file, "slate").unwrap();
        temp_file.flush().unwrap();

        let words = load_from_file(temp_file.path()).unwrap();
        assert_eq!(words.len(), 3);
        assert!(words.iter().any(|w| w.text() == "hoove"));
    }

    #[test]
    fn load_from_file_nonexistent_fails() {
        let result = load_from_file("/path/that/does/not/exist.txt");
        assert!(result.is_err());
    }
}
