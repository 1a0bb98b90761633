//! Formatting utilities for terminal output

use crate::core::{Classification, Evaluation, LetterHints, Word};
use colored::{ColoredString, Colorize};

/// On-screen keyboard layout, top row first
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Render one letter as a coloured tile like " F "
///
/// `None` means the letter has not been evaluated yet.
#[must_use]
pub fn tile(letter: u8, classification: Option<Classification>) -> ColoredString {
    let text = format!(" {} ", char::from(letter.to_ascii_uppercase()));
    match classification {
        Some(Classification::Exact) => text.black().on_green().bold(),
        Some(Classification::Present) => text.black().on_yellow().bold(),
        Some(Classification::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// Render a submitted guess as a row of coloured tiles
#[must_use]
pub fn guess_row(guess: &Word, evaluation: &Evaluation) -> String {
    guess
        .chars()
        .iter()
        .zip(evaluation)
        .map(|(&letter, &classification)| tile(letter, Some(classification)).to_string())
        .collect()
}

/// Render the guess being composed, padded with blanks to `length`
#[must_use]
pub fn pending_row(buffer: &str, length: usize) -> String {
    let mut row: String = buffer.bytes().map(|l| tile(l, None).to_string()).collect();
    for _ in buffer.len()..length {
        row.push_str(&" _ ".bright_black().to_string());
    }
    row
}

/// One-line tally of a guess, e.g. "2 exact, 1 present"
#[must_use]
pub fn feedback_summary(evaluation: &Evaluation) -> String {
    format!(
        "{} exact, {} present",
        evaluation.count_exact(),
        evaluation.count_present()
    )
}

/// Render the keyboard rows coloured by letter hints
#[must_use]
pub fn keyboard_rows(hints: &LetterHints) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.bytes()
                .map(|letter| tile(letter, hints.get(letter)).to_string())
                .collect()
        })
        .collect()
}
