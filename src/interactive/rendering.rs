//! TUI rendering with ratatui
//!
//! Draws the board, the hinted keyboard and the game-over dialog from the
//! current session state.

use super::app::{App, MessageStyle, Statistics};
use crate::core::Classification;
use crate::game::{GameState, WordSelector};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<S: WordSelector>(f: &mut Frame, app: &App<S>) {
    let board_height = board_height(app.session.max_attempts());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                // Header
            Constraint::Length(board_height),     // Board
            Constraint::Length(8),                // Keyboard
            Constraint::Min(3),                   // Messages
            Constraint::Length(1),                // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);

    if app.modal_open() {
        render_game_over(f, app);
    }
}

/// Rows needed for the board: a tile row per attempt with gaps, plus borders
fn board_height(max_attempts: usize) -> u16 {
    u16::try_from(max_attempts)
        .unwrap_or(u16::MAX)
        .saturating_mul(2)
        .saturating_add(1)
        .saturating_add(2)
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Tile colours, matching the classic palette
fn tile_style(classification: Option<Classification>) -> Style {
    match classification {
        Some(Classification::Exact) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(Classification::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(Classification::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    }
}

fn tile(letter: Option<u8>, classification: Option<Classification>) -> Span<'static> {
    let text = letter.map_or_else(
        || " · ".to_string(),
        |l| format!(" {} ", char::from(l.to_ascii_uppercase())),
    );
    Span::styled(text, tile_style(classification))
}

fn render_board<S: WordSelector>(f: &mut Frame, app: &App<S>, area: Rect) {
    let session = &app.session;
    let length = session.word_length();
    let mut lines = Vec::with_capacity(session.max_attempts() * 2);

    for row in 0..session.max_attempts() {
        let mut spans = Vec::with_capacity(length * 2);
        if let Some(turn) = session.history().get(row) {
            for (&letter, &classification) in turn.guess().chars().iter().zip(turn.evaluation()) {
                spans.push(tile(Some(letter), Some(classification)));
                spans.push(Span::raw(" "));
            }
        } else {
            let composing =
                row == session.history().len() && session.state() == GameState::InProgress;
            let buffer: &[u8] = if composing {
                session.buffer().as_bytes()
            } else {
                &[]
            };
            for i in 0..length {
                spans.push(tile(buffer.get(i).copied(), None));
                spans.push(Span::raw(" "));
            }
        }
        spans.pop();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    lines.pop();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard<S: WordSelector>(f: &mut Frame, app: &App<S>, area: Rect) {
    let hints = app.session.hints();
    let mut lines = Vec::with_capacity(KEYBOARD_ROWS.len() * 2);

    for (i, row) in KEYBOARD_ROWS.iter().enumerate() {
        let mut spans = Vec::with_capacity(row.len() * 2 + 2);
        if i == KEYBOARD_ROWS.len() - 1 {
            spans.push(Span::styled(" ENTER ", tile_style(None)));
            spans.push(Span::raw(" "));
        }
        for letter in row.bytes() {
            spans.push(tile(Some(letter), hints.get(letter)));
            spans.push(Span::raw(" "));
        }
        if i == KEYBOARD_ROWS.len() - 1 {
            spans.push(Span::styled(" ⌫ ", tile_style(None)));
        } else {
            spans.pop();
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    lines.pop();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_messages<S: WordSelector>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<S: WordSelector>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let attempts_text = format!(
        "Attempts left: {}/{}",
        app.session.attempts_remaining(),
        app.session.max_attempts()
    );
    let attempts = Paragraph::new(attempts_text).alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.modal_open() {
        "Enter/Esc: New Game | q: Quit"
    } else {
        "Enter: Submit | ⌫: Delete | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

/// Buckets shown per line of the guess distribution
const DISTRIBUTION_PER_LINE: usize = 6;

/// Wins per guess count as rows like "1:0  2:3  3:1"
fn distribution_lines(stats: &Statistics, max_attempts: usize) -> Vec<String> {
    let buckets: Vec<String> = (1..=max_attempts)
        .map(|n| {
            let wins = stats.guess_distribution.get(n).copied().unwrap_or(0);
            format!("{n}:{wins}")
        })
        .collect();
    buckets
        .chunks(DISTRIBUTION_PER_LINE)
        .map(|row| row.join("  "))
        .collect()
}

fn render_game_over<S: WordSelector>(f: &mut Frame, app: &App<S>) {
    let session = &app.session;
    let distribution = distribution_lines(&app.stats, session.max_attempts());
    let height = u16::try_from(distribution.len())
        .unwrap_or(u16::MAX)
        .saturating_add(9);
    let area = centered_rect(40, height, f.area());

    let (title, color) = if session.state() == GameState::Won {
        (" 🎉 Solved! ", Color::Green)
    } else {
        (" Game Over ", Color::Red)
    };

    let mut content = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("The word was "),
            Span::styled(
                session.secret().text().to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!(
            "Guesses: {}/{}",
            session.history().len(),
            session.max_attempts()
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Wins by guess",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    content.extend(distribution.into_iter().map(Line::from));
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "Enter / Esc: Reset",
        Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD),
    )));

    let modal = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(Clear, area);
    f.render_widget(modal, area);
}

/// Fixed-size rectangle centred in `area`, clamped to fit
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{FixedWord, GameConfig, MAX_ATTEMPTS_LIMIT, Session};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App<FixedWord>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn app() -> App<FixedWord> {
        App::new(Session::new(
            FixedWord::new(Word::new("funky").unwrap()),
            GameConfig::default(),
        ))
    }

    #[test]
    fn centered_rect_fits_inside_area() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = centered_rect(40, 9, area);
        assert_eq!(rect, area);

        let rect = centered_rect(10, 3, Rect::new(0, 0, 20, 9));
        assert_eq!(rect, Rect::new(5, 3, 10, 3));
    }

    #[test]
    fn board_shows_submitted_guess() {
        let mut app = app();
        for c in "crane".chars() {
            app.session.compose_letter(c);
        }
        app.session.submit_guess();

        let screen = draw(&app);
        assert!(screen.contains(" C   R   A   N   E "));
        assert!(!screen.contains("Game Over"));
    }

    #[test]
    fn modal_shows_word_after_loss() {
        let mut app = app();
        for guess in ["crane", "slate", "robot", "floor", "speed", "erase"] {
            for c in guess.chars() {
                app.session.compose_letter(c);
            }
            app.session.submit_guess();
        }

        let screen = draw(&app);
        assert!(screen.contains("Game Over"));
        assert!(screen.contains("FUNKY"));
    }

    #[test]
    fn modal_shows_guess_distribution() {
        let mut app = app();
        for guess in ["crane", "funky"] {
            for c in guess.chars() {
                app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
            }
            app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        }

        let screen = draw(&app);
        assert!(screen.contains("Solved!"));
        assert!(screen.contains("Wins by guess"));
        assert!(screen.contains("1:0  2:1  3:0  4:0  5:0  6:0"));
        assert!(screen.contains("Enter / Esc: Reset"));
    }

    #[test]
    fn distribution_wraps_long_configs() {
        let stats = Statistics::default();
        let lines = distribution_lines(&stats, 14);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "13:0  14:0");
    }

    #[test]
    fn board_height_saturates() {
        assert_eq!(board_height(6), 15);
        assert_eq!(board_height(40_000), u16::MAX);
        assert_eq!(board_height(usize::MAX), u16::MAX);
    }

    #[test]
    fn largest_config_draws_on_small_terminal() {
        let app = App::new(Session::new(
            FixedWord::new(Word::new("funky").unwrap()),
            GameConfig::new(MAX_ATTEMPTS_LIMIT).unwrap(),
        ));
        let screen = draw(&app);
        assert!(screen.contains("Board"));
    }

    #[test]
    fn tile_styles_follow_classification() {
        assert_eq!(tile_style(Some(Classification::Exact)).bg, Some(Color::Green));
        assert_eq!(tile_style(Some(Classification::Present)).bg, Some(Color::Yellow));
        assert_eq!(tile_style(Some(Classification::Absent)).bg, Some(Color::DarkGray));
        assert_eq!(tile_style(None).bg, None);
    }
}
