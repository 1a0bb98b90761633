//! Interactive TUI interface
//!
//! A full-screen game: tile board, hinted keyboard and a game-over dialog.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Statistics, run_tui};
