//! TUI application state and logic

use crate::game::{GameState, Outcome, Session, WordSelector};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App<S: WordSelector> {
    pub session: Session<S>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    recorded: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Results for every game finished since the program started
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index `n` counts games won on guess `n`
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    fn record(&mut self, state: GameState, attempts: usize) {
        self.total_games += 1;
        if state == GameState::Won {
            self.games_won += 1;
            if self.guess_distribution.len() <= attempts {
                self.guess_distribution.resize(attempts + 1, 0);
            }
            self.guess_distribution[attempts] += 1;
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<S: WordSelector> App<S> {
    #[must_use]
    pub fn new(session: Session<S>) -> Self {
        let mut app = Self {
            session,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            recorded: false,
        };
        app.add_message(
            &format!(
                "Guess the {}-letter word in {} tries.",
                app.session.word_length(),
                app.session.max_attempts()
            ),
            MessageStyle::Info,
        );
        app
    }

    /// Whether the game-over dialog is showing
    #[must_use]
    pub fn modal_open(&self) -> bool {
        self.session.state().is_terminal()
    }

    /// Route one key press to the session
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.modal_open() {
            match key.code {
                KeyCode::Enter | KeyCode::Esc => self.new_game(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => {
                self.session.compose_letter(c);
            }
            KeyCode::Backspace => {
                self.session.backspace();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn submit(&mut self) {
        if let Outcome::Rejected(reason) = self.session.submit_guess() {
            self.add_message(&reason.to_string(), MessageStyle::Error);
            return;
        }

        let state = self.session.state();
        if state.is_terminal() && !self.recorded {
            self.stats.record(state, self.session.history().len());
            self.recorded = true;
            debug!(
                games = self.stats.total_games,
                won = self.stats.games_won,
                "statistics updated"
            );
        }

        match state {
            GameState::Won => {
                let celebration = match self.session.history().len() {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            GameState::Lost => {
                let text = format!(
                    "The word was {}",
                    self.session.secret().text().to_uppercase()
                );
                self.add_message(&text, MessageStyle::Error);
            }
            GameState::InProgress => {}
        }
    }

    pub fn new_game(&mut self) {
        self.session.reset();
        self.recorded = false;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: WordSelector>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: WordSelector>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
