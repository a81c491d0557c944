//! Runtime configuration
//!
//! Resolved from command-line flags, which clap backs with environment
//! variables and defaults.

use crate::error::{StorageError, WordSourceError};
use crate::storage::FileStore;
use crate::wordlists::{ANSWERS, Dictionary, loader::words_from_slice};
use std::path::PathBuf;

/// Directory holding the player store when nothing else is configured
pub const DEFAULT_DB_DIR: &str = ".cliordle";

/// Where guesses and answers come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordlistSource {
    /// Embedded answers plus the extra allowed guesses
    Embedded,
    /// Embedded answers only, for both answers and guesses
    AnswersOnly,
    /// Custom word list file, for both answers and guesses
    File(PathBuf),
}

impl WordlistSource {
    /// Parse the `--wordlist` value: `all`, `answers`, or a file path
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "all" => Self::Embedded,
            "answers" => Self::AnswersOnly,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Build the dictionary
    ///
    /// # Errors
    /// Returns `WordSourceError::Unreadable` if a word list file cannot be read.
    pub fn load(&self) -> Result<Dictionary, WordSourceError> {
        match self {
            Self::Embedded => Ok(Dictionary::embedded()),
            Self::AnswersOnly => Ok(Dictionary::from_words(words_from_slice(ANSWERS))),
            Self::File(path) => Dictionary::from_file(path),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_dir: PathBuf,
    pub wordlist: WordlistSource,
}

impl Config {
    #[must_use]
    pub fn new(db_dir: impl Into<PathBuf>, wordlist: &str) -> Self {
        Self {
            db_dir: db_dir.into(),
            wordlist: WordlistSource::parse(wordlist),
        }
    }

    /// Open the file store at `db_dir`
    ///
    /// # Errors
    /// Returns `StorageError::Open` if the directory is unusable.
    pub fn open_store(&self) -> Result<FileStore, StorageError> {
        FileStore::open(&self.db_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_DB_DIR, "all")
    }
}
