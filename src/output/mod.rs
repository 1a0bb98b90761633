//! Terminal output formatting
//!
//! Coloured tiles and board printing for the line-based game.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_game_result, print_keyboard};
