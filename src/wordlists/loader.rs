//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Load words of exactly `length` letters from a file
///
/// One word per line. Blank lines are skipped silently. Invalid entries and
/// words of another length are skipped too, with a single warning giving
/// how many were dropped.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;

    Ok(parse_lines(content.lines(), length).0)
}

/// Convert embedded string slice to Word vector, keeping `length`-letter words
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS, 5);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], length: usize) -> Vec<Word> {
    parse_lines(slice.iter().copied(), length).0
}

/// Keep valid `length`-letter words, returning them with the number skipped
fn parse_lines<'a>(lines: impl Iterator<Item = &'a str>, length: usize) -> (Vec<Word>, usize) {
    let mut words = Vec::new();
    let mut skipped = 0;

    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match Word::new(trimmed) {
            Ok(word) if word.len() == length => words.push(word),
            Ok(word) => {
                debug!(%word, expected = length, "skipping word of wrong length");
                skipped += 1;
            }
            Err(err) => {
                debug!(entry = trimmed, %err, "skipping invalid word");
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        warn!(
            skipped,
            kept = words.len(),
            expected = length,
            "skipped word list entries"
        );
    }

    (words, skipped)
}
