//! Game session state machine
//!
//! A [`Session`] owns the secret word, the submitted guesses with their
//! evaluations, the letter being composed, and the keyboard hints. Input that
//! does not apply in the current state is ignored and reported as
//! [`Outcome::Rejected`]; a rejected operation never changes the session.

use super::{GameConfig, WordSelector};
use crate::core::{Evaluation, LetterHints, Word, evaluate};
use thiserror::Error;
use tracing::{debug, info, trace};

/// Where the current game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    /// `Won` and `Lost` accept no further input until reset
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A submitted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    guess: Word,
    evaluation: Evaluation,
}

impl Turn {
    #[inline]
    #[must_use]
    pub fn guess(&self) -> &Word {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }
}

/// Why an input was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("The game is over")]
    GameOver,
    #[error("The guess is already complete")]
    BufferFull,
    #[error("Nothing to delete")]
    BufferEmpty,
    #[error("Not enough letters")]
    IncompleteGuess,
    #[error("Only letters A-Z can be typed")]
    NotALetter,
}

/// Result of a session operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    Rejected(Rejection),
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// The rejection reason, if any
    #[inline]
    #[must_use]
    pub const fn rejection(self) -> Option<Rejection> {
        match self {
            Self::Accepted => None,
            Self::Rejected(reason) => Some(reason),
        }
    }
}

/// Everything that belongs to one game, replaced wholesale on reset
#[derive(Debug, Clone)]
struct Round {
    secret: Word,
    history: Vec<Turn>,
    buffer: String,
    hints: LetterHints,
    state: GameState,
}

impl Round {
    fn new(secret: Word) -> Self {
        Self {
            secret,
            history: Vec::new(),
            buffer: String::new(),
            hints: LetterHints::new(),
            state: GameState::InProgress,
        }
    }
}

/// One player's game, from word selection to win, loss or reset
///
/// # Examples
/// ```
/// use wordle_game::core::Word;
/// use wordle_game::game::{FixedWord, GameConfig, GameState, Session};
///
/// let selector = FixedWord::new(Word::new("funky").unwrap());
/// let mut session = Session::new(selector, GameConfig::default());
///
/// for letter in "funky".chars() {
///     session.compose_letter(letter);
/// }
/// assert!(session.submit_guess().is_accepted());
/// assert_eq!(session.state(), GameState::Won);
/// ```
#[derive(Debug)]
pub struct Session<S: WordSelector> {
    selector: S,
    config: GameConfig,
    round: Round,
}

impl<S: WordSelector> Session<S> {
    /// Start a session, drawing the first secret word from `selector`
    pub fn new(mut selector: S, config: GameConfig) -> Self {
        let secret = selector.select();
        debug!(length = secret.len(), "session started");
        Self {
            selector,
            config,
            round: Round::new(secret),
        }
    }

    /// Append a letter to the guess being composed
    ///
    /// Ignored after the game ends, when the guess is already full, or when
    /// `letter` is not an ASCII letter.
    pub fn compose_letter(&mut self, letter: char) -> Outcome {
        if self.round.state.is_terminal() {
            return reject(Rejection::GameOver);
        }
        if !letter.is_ascii_alphabetic() {
            return reject(Rejection::NotALetter);
        }
        if self.round.buffer.len() >= self.word_length() {
            return reject(Rejection::BufferFull);
        }

        self.round.buffer.push(letter.to_ascii_lowercase());
        Outcome::Accepted
    }

    /// Remove the last composed letter
    pub fn backspace(&mut self) -> Outcome {
        if self.round.state.is_terminal() {
            return reject(Rejection::GameOver);
        }
        if self.round.buffer.pop().is_none() {
            return reject(Rejection::BufferEmpty);
        }
        Outcome::Accepted
    }

    /// Evaluate the composed guess and advance the game
    ///
    /// Only a complete guess is accepted. The evaluation is stored with the
    /// guess, the hints are refolded, the buffer is cleared, and the state
    /// moves to `Won` on an all-exact result or `Lost` once every attempt has
    /// been used.
    pub fn submit_guess(&mut self) -> Outcome {
        if self.round.state.is_terminal() {
            return reject(Rejection::GameOver);
        }
        if self.round.buffer.len() != self.word_length() {
            return reject(Rejection::IncompleteGuess);
        }

        let round = &mut self.round;
        let guess = Word::from_letters(std::mem::take(&mut round.buffer));
        let evaluation = evaluate(&guess, &round.secret);

        round.hints = round.hints.fold(&guess, &evaluation);
        let won = evaluation.is_perfect();
        debug!(
            attempt = round.history.len() + 1,
            guess = %guess,
            feedback = %evaluation,
            "guess submitted"
        );
        round.history.push(Turn { guess, evaluation });

        if won {
            round.state = GameState::Won;
        } else if round.history.len() >= self.config.max_attempts() {
            round.state = GameState::Lost;
        }
        if round.state.is_terminal() {
            debug!(state = ?round.state, attempts = round.history.len(), "game finished");
        }

        Outcome::Accepted
    }

    /// Abandon the current game and start a fresh one
    ///
    /// Valid from any state. A new secret is drawn from the selector.
    pub fn reset(&mut self) {
        let secret = self.selector.select();
        self.round = Round::new(secret);
        info!("new game started");
    }

    /// Letters composed so far
    #[inline]
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.round.buffer
    }

    /// Submitted guesses in order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.round.history
    }

    /// Best classification per guessed letter
    #[inline]
    #[must_use]
    pub fn hints(&self) -> &LetterHints {
        &self.round.hints
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> GameState {
        self.round.state
    }

    /// The secret word, for revealing after the game ends
    #[inline]
    #[must_use]
    pub fn secret(&self) -> &Word {
        &self.round.secret
    }

    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.round.secret.len()
    }

    #[inline]
    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.config.max_attempts()
    }

    #[inline]
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.max_attempts().saturating_sub(self.round.history.len())
    }
}

fn reject(reason: Rejection) -> Outcome {
    trace!(%reason, "input ignored");
    Outcome::Rejected(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Classification;
    use crate::game::FixedWord;

    fn session(word: &str) -> Session<FixedWord> {
        Session::new(
            FixedWord::new(Word::new(word).unwrap()),
            GameConfig::default(),
        )
    }

    fn type_word<S: WordSelector>(session: &mut Session<S>, word: &str) {
        for letter in word.chars() {
            session.compose_letter(letter);
        }
    }

    fn play<S: WordSelector>(session: &mut Session<S>, word: &str) -> Outcome {
        type_word(session, word);
        session.submit_guess()
    }

    #[test]
    fn new_session_is_empty() {
        let session = session("funky");
        assert_eq!(session.state(), GameState::InProgress);
        assert!(session.history().is_empty());
        assert!(session.buffer().is_empty());
        assert!(session.hints().is_empty());
        assert_eq!(session.word_length(), 5);
        assert_eq!(session.attempts_remaining(), 6);
    }

    #[test]
    fn compose_lowercases_and_caps_length() {
        let mut session = session("funky");
        type_word(&mut session, "CRAN");
        assert_eq!(session.buffer(), "cran");

        assert!(session.compose_letter('e').is_accepted());
        assert_eq!(
            session.compose_letter('s'),
            Outcome::Rejected(Rejection::BufferFull)
        );
        assert_eq!(session.buffer(), "crane");
    }

    #[test]
    fn compose_rejects_non_letters() {
        let mut session = session("funky");
        assert_eq!(
            session.compose_letter('3'),
            Outcome::Rejected(Rejection::NotALetter)
        );
        assert_eq!(
            session.compose_letter('é'),
            Outcome::Rejected(Rejection::NotALetter)
        );
        assert!(session.buffer().is_empty());
    }

    #[test]
    fn backspace_removes_last_letter() {
        let mut session = session("funky");
        type_word(&mut session, "fun");
        assert!(session.backspace().is_accepted());
        assert_eq!(session.buffer(), "fu");
    }

    #[test]
    fn backspace_on_empty_buffer_is_ignored() {
        let mut session = session("funky");
        assert_eq!(
            session.backspace(),
            Outcome::Rejected(Rejection::BufferEmpty)
        );
    }

    #[test]
    fn incomplete_submission_changes_nothing() {
        let mut session = session("funky");
        type_word(&mut session, "fun");
        assert_eq!(
            session.submit_guess(),
            Outcome::Rejected(Rejection::IncompleteGuess)
        );
        assert_eq!(session.buffer(), "fun");
        assert!(session.history().is_empty());
        assert!(session.hints().is_empty());
    }

    #[test]
    fn submission_records_turn_and_clears_buffer() {
        let mut session = session("funky");
        assert!(play(&mut session, "fjord").is_accepted());

        assert!(session.buffer().is_empty());
        assert_eq!(session.history().len(), 1);
        let turn = &session.history()[0];
        assert_eq!(turn.guess().text(), "fjord");
        assert_eq!(turn.evaluation()[0], Classification::Exact);
        assert_eq!(session.hints().get(b'f'), Some(Classification::Exact));
        assert_eq!(session.state(), GameState::InProgress);
        assert_eq!(session.attempts_remaining(), 5);
    }

    #[test]
    fn exact_guess_wins_immediately() {
        let mut session = session("funky");
        play(&mut session, "crane");
        play(&mut session, "funky");
        assert_eq!(session.state(), GameState::Won);
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn sixth_miss_loses() {
        let mut session = session("funky");
        for guess in ["crane", "slate", "robot", "floor", "speed", "erase"] {
            assert_eq!(session.state(), GameState::InProgress);
            play(&mut session, guess);
        }
        assert_eq!(session.state(), GameState::Lost);
        assert_eq!(session.attempts_remaining(), 0);
    }

    #[test]
    fn win_on_last_attempt_is_a_win() {
        let mut session = session("funky");
        for guess in ["crane", "slate", "robot", "floor", "speed"] {
            play(&mut session, guess);
        }
        play(&mut session, "funky");
        assert_eq!(session.state(), GameState::Won);
    }

    #[test]
    fn terminal_state_ignores_input() {
        let mut session = session("funky");
        play(&mut session, "funky");

        assert_eq!(
            session.compose_letter('a'),
            Outcome::Rejected(Rejection::GameOver)
        );
        assert_eq!(session.backspace(), Outcome::Rejected(Rejection::GameOver));
        assert_eq!(
            session.submit_guess(),
            Outcome::Rejected(Rejection::GameOver)
        );
        assert!(session.buffer().is_empty());
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn reset_clears_everything() {
        let mut session = session("funky");
        play(&mut session, "crane");
        type_word(&mut session, "fu");

        session.reset();

        assert_eq!(session.state(), GameState::InProgress);
        assert!(session.history().is_empty());
        assert!(session.buffer().is_empty());
        assert!(session.hints().is_empty());
        assert_eq!(session.attempts_remaining(), 6);
    }

    #[test]
    fn reset_draws_a_new_word() {
        let mut words = ["alpha", "bravo"].into_iter().cycle();
        let selector = move || Word::new(words.next().unwrap()).unwrap();
        let mut session = Session::new(selector, GameConfig::default());
        assert_eq!(session.secret().text(), "alpha");

        session.reset();
        assert_eq!(session.secret().text(), "bravo");
    }

    #[test]
    fn custom_attempt_limit() {
        let config = GameConfig::new(2).unwrap();
        let mut session = Session::new(FixedWord::new(Word::new("funky").unwrap()), config);
        play(&mut session, "crane");
        assert_eq!(session.state(), GameState::InProgress);
        play(&mut session, "slate");
        assert_eq!(session.state(), GameState::Lost);
    }

    #[test]
    fn word_length_follows_secret() {
        let mut session = session("cat");
        type_word(&mut session, "cats");
        assert_eq!(session.buffer(), "cat");
        play(&mut session, "");
        assert_eq!(session.state(), GameState::Won);
    }

    #[test]
    fn outcome_accessors() {
        assert!(Outcome::Accepted.is_accepted());
        assert_eq!(Outcome::Accepted.rejection(), None);
        let rejected = Outcome::Rejected(Rejection::BufferEmpty);
        assert!(!rejected.is_accepted());
        assert_eq!(rejected.rejection(), Some(Rejection::BufferEmpty));
    }
}
