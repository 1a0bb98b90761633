//! Word representation
//!
//! A `Word` is an immutable, lowercase run of ASCII letters. Secret words and
//! submitted guesses are both `Word`s.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// A lowercase ASCII word
///
/// Case-insensitive on input, canonicalized to lowercase on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must contain at least one letter")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("FUNKY").unwrap();
    /// assert_eq!(word.text(), "funky");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let mut text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        text.make_ascii_lowercase();

        if !text.bytes().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Wrap text already known to be lowercase ASCII letters
    pub(crate) fn from_letters(text: String) -> Self {
        debug_assert!(!text.is_empty() && text.bytes().all(|c| c.is_ascii_lowercase()));
        Self { text }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as lowercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; a `Word` holds at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.chars()[position]
    }

    /// Get the count of each letter in the word
    ///
    /// Seeds the remaining-letter pool during evaluation.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in self.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
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
        let word = Word::new("funky").unwrap();
        assert_eq!(word.text(), "funky");
        assert_eq!(word.chars(), b"funky");
        assert_eq!(word.len(), 5);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("FUNKY").unwrap();
        assert_eq!(word.text(), "funky");

        let word2 = Word::new("FuNkY").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_other_lengths() {
        assert_eq!(Word::new("cat").unwrap().len(), 3);
        assert_eq!(Word::new("puzzles").unwrap().len(), 7);
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("funk3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("fun y"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("funk!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("fünky"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("funky").unwrap();
        assert_eq!(word.char_at(0), b'f');
        assert_eq!(word.char_at(4), b'y');
    }

    #[test]
    fn word_rejects_unicode_case_folding_to_ascii() {
        // Kelvin sign lowercases to 'k' under Unicode rules
        assert_eq!(Word::new("\u{212A}"), Err(WordError::NonAscii));
        assert_eq!(Word::new("fun\u{212A}y"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("speed").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&b's'), Some(&1));
        assert_eq!(counts.get(&b'p'), Some(&1));
        assert_eq!(counts.get(&b'e'), Some(&2));
        assert_eq!(counts.get(&b'd'), Some(&1));
        assert_eq!(counts.get(&b'z'), None);
    }

    #[test]
    fn word_char_counts_all_same() {
        let word = Word::new("aaaaa").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(&b'a'), Some(&5));
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "Crane".parse().unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
