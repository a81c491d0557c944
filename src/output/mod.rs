//! Terminal output formatting
//!
//! Display utilities for the board, results, statistics and settings.

pub mod display;
pub mod formatters;
pub mod theme;

pub use display::{print_board, print_result, print_settings, print_stats};
pub use theme::Theme;
