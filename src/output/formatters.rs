//! Formatting utilities for terminal output

use super::theme::{CellStyle, Theme};
use crate::game::{Board, Cell};
use colored::Colorize;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// "guess" or "guesses"
#[must_use]
pub const fn guess_noun(count: usize) -> &'static str {
    if count == 1 { "guess" } else { "guesses" }
}

fn format_cell(cell: Cell, theme: &Theme) -> String {
    let letter = cell.letter().unwrap_or(' ').to_string();
    let padded = format!(" {letter} ");
    let body = match theme.style(cell) {
        CellStyle::Highlight(color) => padded.on_color(color).to_string(),
        CellStyle::Plain | CellStyle::Blank => padded,
    };
    format!("|{body}|")
}

/// Render the six-row board, one bracketed cell per letter
#[must_use]
pub fn format_board(board: &Board, theme: &Theme) -> String {
    let mut out = String::from(" ___  ___  ___  ___  ___\n");
    for row in board.rows() {
        for &cell in row {
            out.push_str(&format_cell(cell, theme));
        }
        out.push_str("\n ---  ---  ---  ---  ---\n");
    }
    out
}
