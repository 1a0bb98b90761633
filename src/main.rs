//! Wordle Game - CLI
//!
//! Play Wordle in the terminal, either full-screen (TUI) or line by line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle_game::{
    commands::run_simple,
    core::Word,
    game::{
        ConfigError, DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_LENGTH, FixedWord, GameConfig, RandomWord,
        Session, WordSelector,
    },
    interactive::{App, run_tui},
    wordlists::{ANSWERS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Fixed secret word (default: random pick from the word list)
    #[arg(long, global = true)]
    word: Option<String>,

    /// Wordlist: 'answers' (default, embedded) or path to file
    #[arg(short = 'w', long, global = true, default_value = "answers")]
    wordlist: String,

    /// Word length to play with
    #[arg(short, long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Guesses allowed per game (1 to 20)
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Seed for reproducible word selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file instead of stderr (filter with RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line)
    Simple,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let config = GameConfig::new(cli.max_attempts)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    if let Some(word) = &cli.word {
        let word = Word::new(word.as_str()).context("Invalid --word")?;
        if word.len() != cli.length {
            return Err(ConfigError::WrongLength {
                expected: cli.length,
                actual: word.len(),
            }
            .into());
        }
        run_command(command, FixedWord::new(word), config)
    } else {
        let words = load_wordlist(&cli.wordlist, cli.length)?;
        info!(count = words.len(), wordlist = %cli.wordlist, "word list loaded");
        let selector = match cli.seed {
            Some(seed) => RandomWord::seeded(words, seed),
            None => RandomWord::new(words),
        }
        .with_context(|| format!("No {}-letter words in '{}'", cli.length, cli.wordlist))?;
        run_command(command, selector, config)
    }
}

/// Set up the tracing subscriber
///
/// Level comes from `RUST_LOG`, defaulting to warnings only.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }

    Ok(())
}

/// Load the candidate secret words for the -w flag
fn load_wordlist(wordlist_mode: &str, length: usize) -> Result<Vec<Word>> {
    use wordle_game::wordlists::loader::load_from_file;

    match wordlist_mode {
        "answers" => Ok(words_from_slice(ANSWERS, length)),
        path => load_from_file(path, length),
    }
}

fn run_command<S: WordSelector>(command: Commands, selector: S, config: GameConfig) -> Result<()> {
    let mut session = Session::new(selector, config);

    match command {
        Commands::Play => run_tui(App::new(session)),
        Commands::Simple => run_simple(&mut session),
    }
}
