//! Simple interactive CLI mode
//!
//! Text-based game without TUI: one guess per line.

use crate::game::{Outcome, Rejection, Session, WordSelector};
use crate::output::formatters::feedback_summary;
use crate::output::{print_board, print_game_result, print_keyboard};
use anyhow::{Context, Result};
use std::io::{self, Write};

/// What a line of player input did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineAction {
    Quit,
    NewGame,
    Submitted,
    WrongLength { expected: usize, actual: usize },
    Rejected(Rejection),
}

/// Feed one line of input to the session
///
/// `quit`/`exit` and `new` are commands; anything else is a guess. A guess
/// is typed letter by letter and then submitted, so every rule of the
/// session applies. A guess that is rejected leaves the buffer empty.
pub fn apply_line<S: WordSelector>(session: &mut Session<S>, line: &str) -> LineAction {
    let input = line.trim();

    match input.to_lowercase().as_str() {
        "quit" | "exit" => return LineAction::Quit,
        "new" => {
            session.reset();
            return LineAction::NewGame;
        }
        _ => {}
    }

    let actual = input.chars().count();
    if actual != session.word_length() {
        return LineAction::WrongLength {
            expected: session.word_length(),
            actual,
        };
    }

    for letter in input.chars() {
        if let Outcome::Rejected(reason) = session.compose_letter(letter) {
            clear_buffer(session);
            return LineAction::Rejected(reason);
        }
    }

    match session.submit_guess() {
        Outcome::Accepted => LineAction::Submitted,
        Outcome::Rejected(reason) => {
            clear_buffer(session);
            LineAction::Rejected(reason)
        }
    }
}

fn clear_buffer<S: WordSelector>(session: &mut Session<S>) {
    while session.backspace().is_accepted() {}
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: WordSelector>(session: &mut Session<S>) -> Result<()> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║         Wordle - Simple Mode         ║");
    println!("╚══════════════════════════════════════╝\n");

    println!(
        "Guess the {}-letter word in {} tries.",
        session.word_length(),
        session.max_attempts()
    );
    println!("Commands: 'new' for a new game, 'quit' to exit\n");

    loop {
        print_board(session);
        print_keyboard(session);

        if session.state().is_terminal() {
            print_game_result(session);
            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    session.reset();
                    println!("\n🔄 New game started!");
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        let line = get_user_input(&format!(
            "Guess {}/{}",
            session.history().len() + 1,
            session.max_attempts()
        ))?;

        match apply_line(session, &line) {
            LineAction::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            LineAction::NewGame => println!("\n🔄 New game started!"),
            LineAction::Submitted => {
                if let Some(turn) = session.history().last() {
                    println!("   {}", feedback_summary(turn.evaluation()));
                }
            }
            LineAction::WrongLength { expected, actual } => {
                println!("❌ Guess must be {expected} letters, got {actual}");
            }
            LineAction::Rejected(reason) => println!("❌ {reason}"),
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Failed to read from stdin")?;

    // EOF behaves like quit
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
