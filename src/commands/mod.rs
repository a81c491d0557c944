//! Command implementations

pub mod play;
pub mod settings;
pub mod stats;

pub use play::{play_game, run_play};
pub use settings::{SettingsUpdate, run_settings};
pub use stats::run_stats;
