//! Display functions for the line-based game

use super::formatters::{guess_row, keyboard_rows, pending_row};
use crate::game::{GameState, Session, WordSelector};
use colored::Colorize;

/// Print the board: submitted guesses, the row being composed, then blanks
pub fn print_board<S: WordSelector>(session: &Session<S>) {
    println!("\n{}", "─".repeat(40).cyan());

    for (i, turn) in session.history().iter().enumerate() {
        println!(
            "  {} {}",
            format!("{}.", i + 1).bright_black(),
            guess_row(turn.guess(), turn.evaluation())
        );
    }

    let used = session.history().len();
    for i in used..session.max_attempts() {
        let buffer = if i == used && session.state() == GameState::InProgress {
            session.buffer()
        } else {
            ""
        };
        println!(
            "  {} {}",
            format!("{}.", i + 1).bright_black(),
            pending_row(buffer, session.word_length())
        );
    }

    println!("{}", "─".repeat(40).cyan());
}

/// Print the keyboard coloured by the session's letter hints
pub fn print_keyboard<S: WordSelector>(session: &Session<S>) {
    for (indent, row) in keyboard_rows(session.hints()).iter().enumerate() {
        println!("  {}{row}", " ".repeat(indent * 2));
    }
}

/// Print the end-of-game banner
///
/// Does nothing while the game is still in progress.
pub fn print_game_result<S: WordSelector>(session: &Session<S>) {
    let attempts = session.history().len();
    match session.state() {
        GameState::InProgress => {}
        GameState::Won => {
            println!("\n{}", "═".repeat(40).bright_cyan());
            println!(
                "{}",
                format!(
                    "  🎉 Solved in {attempts} {}!",
                    if attempts == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            );
            println!("{}", "═".repeat(40).bright_cyan());
            print_share_grid(session);
        }
        GameState::Lost => {
            println!("\n{}", "═".repeat(40).bright_cyan());
            println!("{}", "  ❌ Out of guesses".red().bold());
            println!(
                "  The word was {}",
                session.secret().text().to_uppercase().bright_yellow().bold()
            );
            println!("{}", "═".repeat(40).bright_cyan());
            print_share_grid(session);
        }
    }
}

fn print_share_grid<S: WordSelector>(session: &Session<S>) {
    println!();
    for turn in session.history() {
        println!("  {}", turn.evaluation().to_emoji());
    }
    println!();
}
