//! Dictionary management for spelling suggestions.
//!
//! A [`Dictionary`] is an ordered sequence of candidate words. Ordering,
//! duplicates and empty entries are all preserved: tie-breaking during
//! ranking depends on original position, and every line of a loaded source
//! is a candidate, including blank ones. No trimming or case folding is
//! applied.

use std::fs;
use std::path::Path;

use log::info;

use crate::error::Result;

/// An ordered, read-only collection of candidate words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        Dictionary { words: Vec::new() }
    }

    /// Build a dictionary from raw text, one word per line.
    ///
    /// Lines are split on `\n` with a single trailing `\r` stripped, so both
    /// Unix and Windows line endings work. Empty lines become empty words and
    /// a trailing newline yields a final empty word.
    pub fn from_text(text: &str) -> Self {
        let words = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_owned())
            .collect();

        Dictionary { words }
    }

    /// Load a dictionary from a UTF-8 text file, one word per line.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let dictionary = Dictionary::from_text(&text);

        info!(
            "loaded dictionary from {} ({} words)",
            path.as_ref().display(),
            dictionary.len()
        );

        Ok(dictionary)
    }

    /// Get the words in original order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Get the word at the given position.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Iterate over the words in original order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Get the number of words, empty words included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the dictionary contains no words at all.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Count the empty words.
    pub fn empty_word_count(&self) -> usize {
        self.words.iter().filter(|word| word.is_empty()).count()
    }

    /// Count the distinct words.
    pub fn unique_word_count(&self) -> usize {
        let mut seen: Vec<&str> = self.words.iter().map(String::as_str).collect();
        seen.sort_unstable();
        seen.dedup();
        seen.len()
    }

    /// Length in code points of the longest word.
    pub fn longest_word_len(&self) -> usize {
        self.words
            .iter()
            .map(|word| word.chars().count())
            .max()
            .unwrap_or(0)
    }
}

impl From<Vec<String>> for Dictionary {
    fn from(words: Vec<String>) -> Self {
        Dictionary { words }
    }
}

impl FromIterator<String> for Dictionary {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Dictionary {
            words: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_text_preserves_order_and_duplicates() {
        let dict = Dictionary::from_text("beta\nalpha\nbeta\ngamma");

        assert_eq!(dict.len(), 4);
        assert_eq!(dict.get(0), Some("beta"));
        assert_eq!(dict.get(1), Some("alpha"));
        assert_eq!(dict.get(2), Some("beta"));
        assert_eq!(dict.get(3), Some("gamma"));
        assert_eq!(dict.unique_word_count(), 3);
    }

    #[test]
    fn test_from_text_preserves_empty_lines() {
        let dict = Dictionary::from_text("one\n\ntwo");

        assert_eq!(dict.len(), 3);
        assert_eq!(dict.get(1), Some(""));
        assert_eq!(dict.empty_word_count(), 1);
    }

    #[test]
    fn test_from_text_trailing_newline_yields_empty_word() {
        let dict = Dictionary::from_text("one\ntwo\n");

        assert_eq!(dict.len(), 3);
        assert_eq!(dict.get(2), Some(""));
    }

    #[test]
    fn test_from_text_windows_line_endings() {
        let dict = Dictionary::from_text("one\r\ntwo\r\nthree");

        assert_eq!(dict.len(), 3);
        assert_eq!(dict.get(0), Some("one"));
        assert_eq!(dict.get(1), Some("two"));
        assert_eq!(dict.get(2), Some("three"));
    }

    #[test]
    fn test_from_text_no_trimming_or_case_folding() {
        let dict = Dictionary::from_text("  Word \nUPPER");

        assert_eq!(dict.get(0), Some("  Word "));
        assert_eq!(dict.get(1), Some("UPPER"));
    }

    #[test]
    fn test_empty_text_yields_single_empty_word() {
        // "".split('\n') produces one empty segment; that segment is a
        // candidate like any other line.
        let dict = Dictionary::from_text("");

        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get(0), Some(""));
    }

    #[test]
    fn test_new_dictionary_is_empty() {
        let dict = Dictionary::new();

        assert!(dict.is_empty());
        assert_eq!(dict.len(), 0);
        assert_eq!(dict.longest_word_len(), 0);
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "hello").unwrap();
        writeln!(temp_file, "world").unwrap();
        temp_file.flush().unwrap();

        let dict = Dictionary::load_from_file(temp_file.path()).unwrap();

        // Two words plus the trailing-newline empty word.
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.get(0), Some("hello"));
        assert_eq!(dict.get(1), Some("world"));
        assert_eq!(dict.get(2), Some(""));
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = Dictionary::load_from_file("/nonexistent/dictionary.txt");
        assert!(result.is_err());
    }

    #[test]
    fn test_stats_helpers() {
        let dict = Dictionary::from_text("a\n\nabcdef\nabc\na");

        assert_eq!(dict.len(), 5);
        assert_eq!(dict.empty_word_count(), 1);
        assert_eq!(dict.unique_word_count(), 4);
        assert_eq!(dict.longest_word_len(), 6);
    }
}
