//! Secret word selection
//!
//! A [`Session`](super::Session) asks its selector for a word when it is
//! created and again on every reset.

use super::ConfigError;
use crate::core::Word;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of secret words
pub trait WordSelector {
    /// Pick the secret word for a new game
    fn select(&mut self) -> Word;
}

impl<F> WordSelector for F
where
    F: FnMut() -> Word,
{
    fn select(&mut self) -> Word {
        self()
    }
}

/// Always selects the same word
#[derive(Debug, Clone)]
pub struct FixedWord(Word);

impl FixedWord {
    #[must_use]
    pub const fn new(word: Word) -> Self {
        Self(word)
    }
}

impl WordSelector for FixedWord {
    fn select(&mut self) -> Word {
        self.0.clone()
    }
}

/// Uniform random pick from a word list
#[derive(Debug, Clone)]
pub struct RandomWord {
    words: Vec<Word>,
    rng: StdRng,
}

impl RandomWord {
    /// Select from `words` using OS entropy
    ///
    /// # Errors
    /// Returns `ConfigError::EmptyWordList` if `words` is empty
    pub fn new(words: Vec<Word>) -> Result<Self, ConfigError> {
        Self::with_rng(words, StdRng::from_os_rng())
    }

    /// Select from `words` with a reproducible sequence
    ///
    /// # Errors
    /// Returns `ConfigError::EmptyWordList` if `words` is empty
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{RandomWord, WordSelector};
    ///
    /// let words = vec![Word::new("funky").unwrap(), Word::new("crane").unwrap()];
    /// let mut a = RandomWord::seeded(words.clone(), 7).unwrap();
    /// let mut b = RandomWord::seeded(words, 7).unwrap();
    /// assert_eq!(a.select(), b.select());
    /// ```
    pub fn seeded(words: Vec<Word>, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }

    fn with_rng(words: Vec<Word>, rng: StdRng) -> Result<Self, ConfigError> {
        if words.is_empty() {
            return Err(ConfigError::EmptyWordList);
        }
        Ok(Self { words, rng })
    }
}

impl WordSelector for RandomWord {
    fn select(&mut self) -> Word {
        let index = self.rng.random_range(0..self.words.len());
        self.words[index].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn fixed_word_repeats() {
        let mut selector = FixedWord::new(Word::new("funky").unwrap());
        assert_eq!(selector.select().text(), "funky");
        assert_eq!(selector.select().text(), "funky");
    }

    #[test]
    fn closure_selector() {
        let mut pool = words(&["alpha", "bravo"]).into_iter().cycle();
        let mut selector = move || pool.next().unwrap();
        assert_eq!(selector.select().text(), "alpha");
        assert_eq!(selector.select().text(), "bravo");
        assert_eq!(selector.select().text(), "alpha");
    }

    #[test]
    fn random_word_rejects_empty_list() {
        assert!(matches!(
            RandomWord::new(Vec::new()),
            Err(ConfigError::EmptyWordList)
        ));
    }

    #[test]
    fn random_word_picks_from_list() {
        let list = words(&["crane", "slate", "funky"]);
        let mut selector = RandomWord::seeded(list.clone(), 42).unwrap();
        for _ in 0..20 {
            assert!(list.contains(&selector.select()));
        }
    }

    #[test]
    fn random_word_seed_is_reproducible() {
        let list = words(&["crane", "slate", "funky", "robot", "floor"]);
        let mut a = RandomWord::seeded(list.clone(), 1234).unwrap();
        let mut b = RandomWord::seeded(list, 1234).unwrap();
        let first: Vec<Word> = (0..10).map(|_| a.select()).collect();
        let second: Vec<Word> = (0..10).map(|_| b.select()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn random_word_single_entry() {
        let mut selector = RandomWord::new(words(&["funky"])).unwrap();
        assert_eq!(selector.select().text(), "funky");
    }
}
