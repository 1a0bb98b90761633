//! Guess evaluation against the secret word
//!
//! Each position of a guess receives one [`Classification`]:
//! - `Exact` = correct letter, correct position (green)
//! - `Present` = letter is in the word elsewhere (yellow)
//! - `Absent` = letter contributes nothing further (gray)
//!
//! Duplicate letters are resolved by consuming occurrences from a pool of the
//! secret's letters: exact matches claim first, then presents left to right.

use super::Word;
use std::fmt;
use std::ops::Index;

/// Feedback for a single letter position
///
/// Ordered from worst to best, so `max` picks the strongest hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Classification {
    Absent,
    Present,
    Exact,
}

impl Classification {
    /// Square emoji used when sharing results
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Per-position feedback for one submitted guess
///
/// Produced once by [`evaluate`] and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Evaluation(Box<[Classification]>);

impl Evaluation {
    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Classifications in position order
    #[inline]
    #[must_use]
    pub fn classifications(&self) -> &[Classification] {
        &self.0
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Classification> {
        self.0.iter()
    }

    /// Check if every position is an exact match
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&c| c == Classification::Exact)
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.count(Classification::Exact)
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(Classification::Present)
    }

    fn count(&self, kind: Classification) -> usize {
        self.0.iter().filter(|&&c| c == kind).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.to_emoji()).collect()
    }
}

impl From<Vec<Classification>> for Evaluation {
    fn from(classifications: Vec<Classification>) -> Self {
        Self(classifications.into_boxed_slice())
    }
}

impl Index<usize> for Evaluation {
    type Output = Classification;

    fn index(&self, position: usize) -> &Classification {
        &self.0[position]
    }
}

impl<'a> IntoIterator for &'a Evaluation {
    type Item = &'a Classification;
    type IntoIter = std::slice::Iter<'a, Classification>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

/// Classify `guess` against the secret `word`
///
/// # Algorithm
/// 1. First pass: mark exact matches and remove them from the available pool
/// 2. Second pass, left to right: mark present letters while the pool still
///    holds an unclaimed occurrence, otherwise absent
///
/// A letter is never credited (exact + present) more times than it occurs in
/// `word`.
///
/// # Panics
/// Panics if `guess` and `word` differ in length. Callers enforce the length
/// before evaluating.
///
/// # Examples
/// ```
/// use wordle_game::core::{Classification::*, Word, evaluate};
///
/// let guess = Word::new("robot").unwrap();
/// let word = Word::new("floor").unwrap();
///
/// // R(yellow) O(yellow) B(gray) O(green) T(gray)
/// let evaluation = evaluate(&guess, &word);
/// assert_eq!(evaluation.classifications(), &[Present, Present, Absent, Exact, Absent]);
/// ```
#[must_use]
pub fn evaluate(guess: &Word, word: &Word) -> Evaluation {
    assert_eq!(
        guess.len(),
        word.len(),
        "guess and word must have the same length"
    );

    let mut result = vec![Classification::Absent; word.len()];
    let mut available = word.char_counts();

    // First pass: exact position matches
    for (i, (&g, &w)) in guess.chars().iter().zip(word.chars()).enumerate() {
        if g == w {
            result[i] = Classification::Exact;
            if let Some(count) = available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: wrong position, but an occurrence is still unclaimed
    for (slot, &letter) in result.iter_mut().zip(guess.chars()) {
        if *slot == Classification::Exact {
            continue;
        }
        if let Some(count) = available.get_mut(&letter)
            && *count > 0
        {
            *slot = Classification::Present;
            *count -= 1;
        }
    }

    Evaluation::from(result)
}
