//! Word lists for secret word selection
//!
//! Provides an embedded answer list compiled into the binary, plus loading
//! from custom files.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn answers_are_valid_words() {
        for &word in ANSWERS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn answers_have_no_duplicates() {
        let unique: std::collections::HashSet<_> = ANSWERS.iter().collect();
        assert_eq!(unique.len(), ANSWERS.len());
    }

    #[test]
    fn answers_include_classic_word() {
        assert!(ANSWERS.contains(&"funky"));
    }
}
