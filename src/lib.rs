#![doc = include_str!("../README.md")]

use thiserror::Error;

pub mod config;
pub use config::{ConfigManager, GameConfig};

pub mod dict;
pub use dict::{DictionaryApi, WordValidator};

pub mod narrow;
pub use narrow::{narrow, Narrowed};

pub mod score;
pub use score::{score, FeedbackRow, Grade, GradedLetter};

pub mod session;
pub use session::{GameMode, GameSession, GameStatus, PublicState};

pub mod store;
pub use store::SessionStore;

pub mod words;

/// Convenience alias used throughout the crate.
pub type Result<T, E = EngineError> = std::result::Result<T, E>;

/// The errors that `wordle_engine` can produce.
///
/// Every variant is an expected outcome of normal operation and is returned
/// to the caller as a typed value; none of them indicate a defect in the
/// engine itself.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("guess rejected")]
    Guess {
        #[from]
        kind: GuessError,
    },

    #[error("invalid game configuration")]
    Config {
        #[from]
        kind: ConfigError,
    },

    /// The session id is unknown, was evicted by the TTL sweep, or was
    /// explicitly removed.
    #[error("no session with id \"{0}\"")]
    SessionNotFound(String),

    /// A guess was submitted after the session reached a terminal state.
    #[error("the game has already ended")]
    GameOver,
}

/// Ways a submitted guess can be malformed.
///
/// Guesses are normalized (trimmed and lower-cased) before these checks run,
/// so surrounding whitespace and letter case never cause a rejection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuessError {
    #[error("guess must be exactly 5 letters, got {0}")]
    WrongLength(usize),

    #[error("guess must contain only English alphabet letters")]
    NotAlphabetic,
}

/// Ways a [`GameConfig`] can be unusable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("word list must contain at least one word")]
    EmptyWordList,

    #[error("max rounds must be between {min} and {max}, got {0}", min = config::MIN_ROUNDS, max = config::MAX_ROUNDS)]
    MaxRoundsOutOfRange(u32),
}
