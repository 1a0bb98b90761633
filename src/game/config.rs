//! Game configuration

use thiserror::Error;

/// Attempts allowed per game in the classic rules
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Most attempts a game may allow; the board must still fit on a terminal
pub const MAX_ATTEMPTS_LIMIT: usize = 20;

/// Letters per word in the classic rules
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Errors raised while assembling a game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Maximum attempts must be at least 1")]
    ZeroAttempts,
    #[error("Maximum attempts must be at most {max}")]
    TooManyAttempts { max: usize },
    #[error("Word list contains no usable words")]
    EmptyWordList,
    #[error("Word must be exactly {expected} letters, got {actual}")]
    WrongLength { expected: usize, actual: usize },
}

/// Rules that stay fixed for the lifetime of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    max_attempts: usize,
}

impl GameConfig {
    /// Create a config allowing `max_attempts` guesses per game
    ///
    /// # Errors
    /// Returns `ConfigError::ZeroAttempts` if `max_attempts` is 0, or
    /// `ConfigError::TooManyAttempts` if it exceeds [`MAX_ATTEMPTS_LIMIT`]
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::GameConfig;
    ///
    /// let config = GameConfig::new(8).unwrap();
    /// assert_eq!(config.max_attempts(), 8);
    /// assert!(GameConfig::new(0).is_err());
    /// assert!(GameConfig::new(40_000).is_err());
    /// ```
    pub fn new(max_attempts: usize) -> Result<Self, ConfigError> {
        if max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        if max_attempts > MAX_ATTEMPTS_LIMIT {
            return Err(ConfigError::TooManyAttempts {
                max: MAX_ATTEMPTS_LIMIT,
            });
        }
        Ok(Self { max_attempts })
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}
