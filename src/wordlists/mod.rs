//! Word sources for the game
//!
//! A [`WordSource`] picks secret answers and decides which guesses are
//! acceptable. [`Dictionary`] is the implementation used by the CLI, backed by
//! the embedded lists or a word list file.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

use crate::core::Word;
use crate::error::WordSourceError;
use log::debug;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Supplies answers and validates guesses
pub trait WordSource {
    /// Pick a secret answer for a new game
    ///
    /// # Errors
    /// Returns `WordSourceError` if no answer can be produced.
    fn random_answer(&self) -> Result<Word, WordSourceError>;

    /// Whether `guess` is an acceptable guess. Input is already normalized.
    fn is_valid_guess(&self, guess: &str) -> bool;
}

/// Answer list plus the set of accepted guesses
#[derive(Debug, Clone)]
pub struct Dictionary {
    answers: Vec<Word>,
    allowed: FxHashSet<String>,
}

impl Dictionary {
    /// Dictionary built from the lists compiled into the binary
    ///
    /// # Examples
    /// ```
    /// use cliordle::wordlists::{Dictionary, WordSource};
    ///
    /// let dictionary = Dictionary::embedded();
    /// assert!(dictionary.is_valid_guess("crane"));
    /// assert!(!dictionary.is_valid_guess("zzzzz"));
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        let answers = loader::words_from_slice(ANSWERS);
        let extra = loader::words_from_slice(ALLOWED);
        Self::new(answers, extra)
    }

    /// Dictionary where every word is both a possible answer and a valid guess
    #[must_use]
    pub fn from_words(words: Vec<Word>) -> Self {
        Self::new(words, Vec::new())
    }

    /// Load a custom word list file, used for both answers and guesses
    ///
    /// # Errors
    /// Returns `WordSourceError::Unreadable` if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordSourceError> {
        let path = path.as_ref();
        let words = loader::load_from_file(path).map_err(|source| WordSourceError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded {} words from {}", words.len(), path.display());
        Ok(Self::from_words(words))
    }

    fn new(answers: Vec<Word>, extra_guesses: Vec<Word>) -> Self {
        let allowed = answers
            .iter()
            .chain(&extra_guesses)
            .map(|w| w.text().to_string())
            .collect();
        Self { answers, allowed }
    }

    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn allowed_count(&self) -> usize {
        self.allowed.len()
    }
}

impl WordSource for Dictionary {
    fn random_answer(&self) -> Result<Word, WordSourceError> {
        self.answers
            .choose(&mut rand::rng())
            .cloned()
            .ok_or(WordSourceError::NoAnswers)
    }

    fn is_valid_guess(&self, guess: &str) -> bool {
        self.allowed.contains(guess)
    }
}
