//! Board colour themes
//!
//! Maps a board cell and the player's contrast preference to how it is drawn,
//! keeping colour choices out of the game logic.

use crate::game::Cell;
use colored::Color;

/// xterm colour 202
const ORANGE: Color = Color::TrueColor {
    r: 255,
    g: 95,
    b: 0,
};

/// How a single cell is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    /// Letter on a coloured background
    Highlight(Color),
    /// Letter with no colour
    Plain,
    /// Unfilled cell
    Blank,
}

/// Background colours for the two highlighted feedback kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub exact: Color,
    pub present: Color,
}

impl Theme {
    pub const STANDARD: Self = Self {
        exact: Color::Green,
        present: Color::Yellow,
    };

    pub const HIGH_CONTRAST: Self = Self {
        exact: ORANGE,
        present: Color::Cyan,
    };

    #[must_use]
    pub const fn for_contrast(high_contrast: bool) -> Self {
        if high_contrast {
            Self::HIGH_CONTRAST
        } else {
            Self::STANDARD
        }
    }

    #[must_use]
    pub const fn style(&self, cell: Cell) -> CellStyle {
        match cell {
            Cell::Exact(_) => CellStyle::Highlight(self.exact),
            Cell::Present(_) => CellStyle::Highlight(self.present),
            Cell::Absent(_) => CellStyle::Plain,
            Cell::Empty => CellStyle::Blank,
        }
    }
}
