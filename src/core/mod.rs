//! Core domain types for Wordle
//!
//! Words, the guess evaluator and letter hint aggregation. Everything here is
//! pure: no I/O, no randomness, no game state.

mod evaluation;
mod hints;
mod word;

pub use evaluation::{Classification, Evaluation, evaluate};
pub use hints::LetterHints;
pub use word::{Word, WordError};
