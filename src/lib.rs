//! Wordle Game
//!
//! A terminal Wordle clone: guess the secret word within a limited number of
//! attempts, with exact/present/absent feedback per letter.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Word, evaluate};
//! use wordle_game::game::{FixedWord, GameConfig, GameState, Session};
//!
//! // Evaluate a single guess
//! let guess = Word::new("erase").unwrap();
//! let secret = Word::new("spike").unwrap();
//! println!("{}", evaluate(&guess, &secret)); // ⬜⬜⬜🟨🟩
//!
//! // Play a session
//! let mut session = Session::new(FixedWord::new(secret), GameConfig::default());
//! for letter in "spike".chars() {
//!     session.compose_letter(letter);
//! }
//! session.submit_guess();
//! assert_eq!(session.state(), GameState::Won);
//! ```

// Core domain types
pub mod core;

// Session state machine and word selection
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
