//! Game session engine
//!
//! A [`Session`] accepts up to six guesses against one answer and produces a
//! [`GameOutcome`] once it reaches a terminal state.

mod board;
mod session;

pub use board::{Board, Cell, Row};
pub use session::{Accepted, GameOutcome, HardModeViolation, Rejected, Session, SessionState};

/// Guesses allowed per game
pub const MAX_GUESSES: usize = 6;
