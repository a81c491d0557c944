//! Player statistics model

mod player;

pub use player::Player;
