//! Error types
//!
//! Recoverable guess rejections are not errors; they are returned by value from
//! [`Session::submit_guess`](crate::game::Session::submit_guess). Everything in
//! here is fatal to the current command.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Session contract violations and driver input failures
#[derive(Debug, Error)]
pub enum GameError {
    #[error("game is still in progress: the session is not terminal")]
    SessionNotTerminal,

    #[error("input closed before the game finished")]
    InputClosed,
}

/// Failure to obtain a secret answer or to read a dictionary
#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("word list contains no playable answers")]
    NoAnswers,

    #[error("could not read word list {}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure against the persistence boundary
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not open store at {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read key {key}")]
    Read {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("could not write key {key}")]
    Write {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("stored player data is malformed")]
    Serialization(#[from] serde_json::Error),
}

/// Statistics update rejected because the outcome is out of range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("a solved game must take 1 to 6 attempts, got {0}")]
    AttemptsOutOfRange(usize),
}

/// Any failure a command can end with
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    WordSource(#[from] WordSourceError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error("terminal I/O failed")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
