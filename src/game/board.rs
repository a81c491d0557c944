//! Board snapshot derived from a session's guesses

use super::MAX_GUESSES;
use crate::core::{Feedback, LetterFeedback, WORD_LENGTH, Word};

/// One square on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Exact(char),
    Present(char),
    Absent(char),
    Empty,
}

impl Cell {
    fn new(letter: u8, feedback: LetterFeedback) -> Self {
        let letter = char::from(letter);
        match feedback {
            LetterFeedback::Exact => Self::Exact(letter),
            LetterFeedback::Present => Self::Present(letter),
            LetterFeedback::Absent => Self::Absent(letter),
        }
    }

    #[must_use]
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Exact(c) | Self::Present(c) | Self::Absent(c) => Some(c),
            Self::Empty => None,
        }
    }
}

pub type Row = [Cell; WORD_LENGTH];

/// Six rows of five cells; rows past the last guess are empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [Row; MAX_GUESSES],
}

impl Board {
    pub(crate) fn from_guesses<'a>(guesses: impl IntoIterator<Item = &'a (Word, Feedback)>) -> Self {
        let mut rows = [[Cell::Empty; WORD_LENGTH]; MAX_GUESSES];

        for (row, (word, feedback)) in rows.iter_mut().zip(guesses) {
            for (i, cell) in row.iter_mut().enumerate() {
                *cell = Cell::new(word.char_at(i), feedback.at(i));
            }
        }

        Self { rows }
    }

    #[must_use]
    pub const fn rows(&self) -> &[Row; MAX_GUESSES] {
        &self.rows
    }

    /// Number of rows holding a guess
    #[must_use]
    pub fn filled_rows(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.iter().any(|c| *c != Cell::Empty))
            .count()
    }
}
