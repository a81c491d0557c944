//! Six-guess session state machine
//!
//! ```text
//! AwaitingGuess(1) -> AwaitingGuess(2) -> ... -> AwaitingGuess(6)
//!        |                   |                        |
//!        +------ Solved <----+------------------------+--> Exhausted
//! ```
//!
//! A rejected guess never advances the state; the same attempt is retried.

use super::MAX_GUESSES;
use super::board::Board;
use crate::core::{DuplicateRule, Feedback, LetterFeedback, Word};
use crate::error::{GameError, WordSourceError};
use crate::stats::Player;
use crate::wordlists::WordSource;
use log::debug;
use thiserror::Error;

/// Where the session currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for guess number `attempt` (1-6)
    AwaitingGuess { attempt: usize },
    Solved,
    Exhausted,
}

impl SessionState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::AwaitingGuess { .. })
    }
}

/// A guess that was recorded on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    /// Attempt number this guess used (1-6)
    pub attempt: usize,
    pub guess: Word,
    pub feedback: Feedback,
    /// State after the guess
    pub state: SessionState,
}

/// Why a guess was turned away
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejected {
    #[error("{guess} is an invalid guess, try again")]
    InvalidGuess { guess: String },

    #[error("{guess} breaks hard mode: {reason}")]
    HardModeViolation {
        guess: String,
        reason: HardModeViolation,
    },

    #[error("the game is already over")]
    SessionOver,
}

/// The revealed hint a hard-mode guess failed to reuse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HardModeViolation {
    #[error("letter {} must be {}", .position + 1, .letter.to_ascii_uppercase())]
    MissingExact { letter: char, position: usize },

    #[error("guess must contain {}", .letter.to_ascii_uppercase())]
    MissingPresent { letter: char },
}

/// Result of a finished session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub solved: bool,
    /// Number of accepted guesses
    pub attempts: usize,
    pub answer: Word,
}

/// One game against a fixed answer
pub struct Session<'a, S: WordSource + ?Sized> {
    player: &'a Player,
    source: &'a S,
    answer: Word,
    guesses: Vec<(Word, Feedback)>,
    state: SessionState,
    rule: DuplicateRule,
}

impl<'a, S: WordSource + ?Sized> Session<'a, S> {
    /// Start a session against an answer picked by the caller
    #[must_use]
    pub fn new(player: &'a Player, source: &'a S, answer: Word) -> Self {
        Self {
            player,
            source,
            answer,
            guesses: Vec::with_capacity(MAX_GUESSES),
            state: SessionState::AwaitingGuess { attempt: 1 },
            rule: DuplicateRule::default(),
        }
    }

    /// Start a session with a fresh answer from the word source
    ///
    /// # Errors
    /// Returns `WordSourceError` if the source cannot supply an answer.
    pub fn start(player: &'a Player, source: &'a S) -> Result<Self, WordSourceError> {
        let answer = source.random_answer()?;
        Ok(Self::new(player, source, answer))
    }

    /// Use a different duplicate-letter rule for feedback
    #[must_use]
    pub fn with_rule(mut self, rule: DuplicateRule) -> Self {
        self.rule = rule;
        self
    }

    /// Submit one guess
    ///
    /// Input is trimmed and lowercased first. Invalid words and hard-mode
    /// violations are rejected without using up an attempt.
    ///
    /// # Errors
    /// Returns a [`Rejected`] reason when the guess is not recorded.
    pub fn submit_guess(&mut self, raw: &str) -> Result<Accepted, Rejected> {
        let SessionState::AwaitingGuess { attempt } = self.state else {
            return Err(Rejected::SessionOver);
        };

        let normalized = normalize(raw);
        let guess = match Word::new(normalized.as_str()) {
            Ok(word) if self.source.is_valid_guess(word.text()) => word,
            _ => {
                debug!("rejected guess {normalized:?} on attempt {attempt}");
                return Err(Rejected::InvalidGuess { guess: normalized });
            }
        };

        if self.player.hard_mode
            && let Some(reason) = self.hard_mode_violation(&guess)
        {
            debug!("hard mode rejected {guess}: {reason}");
            return Err(Rejected::HardModeViolation {
                guess: normalized,
                reason,
            });
        }

        let feedback = Feedback::classify(&guess, &self.answer, self.rule);
        self.guesses.push((guess.clone(), feedback));

        self.state = if guess == self.answer {
            SessionState::Solved
        } else if self.guesses.len() == MAX_GUESSES {
            SessionState::Exhausted
        } else {
            SessionState::AwaitingGuess {
                attempt: attempt + 1,
            }
        };
        debug!("accepted {guess} on attempt {attempt}, now {:?}", self.state);

        Ok(Accepted {
            attempt,
            guess,
            feedback,
            state: self.state,
        })
    }

    /// First revealed hint that `guess` ignores
    fn hard_mode_violation(&self, guess: &Word) -> Option<HardModeViolation> {
        for (word, feedback) in &self.guesses {
            for (position, hint) in feedback.iter().enumerate() {
                let letter = word.char_at(position);
                match hint {
                    LetterFeedback::Exact if guess.char_at(position) != letter => {
                        return Some(HardModeViolation::MissingExact {
                            letter: char::from(letter),
                            position,
                        });
                    }
                    LetterFeedback::Present if !guess.has_letter(letter) => {
                        return Some(HardModeViolation::MissingPresent {
                            letter: char::from(letter),
                        });
                    }
                    _ => {}
                }
            }
        }
        None
    }

    /// Snapshot of the board for rendering
    #[must_use]
    pub fn board(&self) -> Board {
        Board::from_guesses(&self.guesses)
    }

    /// Outcome of the finished game
    ///
    /// # Errors
    /// Returns `GameError::SessionNotTerminal` while guesses are still expected.
    pub fn finish(&self) -> Result<GameOutcome, GameError> {
        if !self.state.is_terminal() {
            return Err(GameError::SessionNotTerminal);
        }
        Ok(GameOutcome {
            solved: self.state == SessionState::Solved,
            attempts: self.guesses.len(),
            answer: self.answer.clone(),
        })
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    /// Accepted guesses with their feedback, oldest first
    #[must_use]
    pub fn guesses(&self) -> &[(Word, Feedback)] {
        &self.guesses
    }
}

fn normalize(raw: &str) -> String {
    raw.trim_end_matches(['\n', '\r']).trim().to_lowercase()
}
