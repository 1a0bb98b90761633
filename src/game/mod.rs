//! Game session and its collaborators
//!
//! The [`Session`] state machine drives a single game. It draws secret words
//! from a [`WordSelector`] and follows the rules in [`GameConfig`].

mod config;
mod selector;
mod session;

pub use config::{
    ConfigError, DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_LENGTH, GameConfig, MAX_ATTEMPTS_LIMIT,
};
pub use selector::{FixedWord, RandomWord, WordSelector};
pub use session::{GameState, Outcome, Rejection, Session, Turn};
