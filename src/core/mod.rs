//! Core domain types for the game
//!
//! Pure value types with no I/O: words and the feedback computed from them.

mod feedback;
mod word;

pub use feedback::{DuplicateRule, Feedback, LetterFeedback};
pub use word::{WORD_LENGTH, Word, WordError};
