//! Letter hint aggregation for the on-screen keyboard
//!
//! Tracks the best classification seen for each letter across all submitted
//! guesses. Entries only ever move up the `Absent < Present < Exact` order.

use super::{Classification, Evaluation, Word};
use rustc_hash::FxHashMap;

/// Best-known classification per letter for the current game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterHints {
    letters: FxHashMap<u8, Classification>,
}

impl LetterHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one evaluated guess into a new aggregate
    ///
    /// Pure: `self` is left untouched. A letter keeps the stronger of its
    /// previous and new classification, so an `Exact` hint is never
    /// downgraded.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Classification, LetterHints, Word, evaluate};
    ///
    /// let word = Word::new("funky").unwrap();
    /// let first = Word::new("fjord").unwrap();
    /// let second = Word::new("offer").unwrap();
    ///
    /// let hints = LetterHints::new().fold(&first, &evaluate(&first, &word));
    /// let hints = hints.fold(&second, &evaluate(&second, &word));
    ///
    /// // F was exact in FJORD, only present in OFFER
    /// assert_eq!(hints.get(b'f'), Some(Classification::Exact));
    /// assert_eq!(hints.get(b'o'), Some(Classification::Absent));
    /// ```
    ///
    /// # Panics
    /// Panics if `guess` and `evaluation` differ in length
    #[must_use]
    pub fn fold(&self, guess: &Word, evaluation: &Evaluation) -> Self {
        assert_eq!(guess.len(), evaluation.len());

        let mut letters = self.letters.clone();
        for (&letter, &classification) in guess.chars().iter().zip(evaluation) {
            letters
                .entry(letter)
                .and_modify(|best| *best = (*best).max(classification))
                .or_insert(classification);
        }

        Self { letters }
    }

    /// Best classification recorded for `letter`, if it has been guessed
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<Classification> {
        self.letters.get(&letter.to_ascii_lowercase()).copied()
    }

    /// Number of distinct letters guessed so far
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}
