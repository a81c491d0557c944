//! cliordle
//!
//! A terminal word-guessing game: six tries to find a hidden five-letter word,
//! with per-letter feedback and lifetime statistics saved between runs.
//!
//! # Quick Start
//!
//! ```rust
//! use cliordle::core::Word;
//! use cliordle::game::{Session, SessionState};
//! use cliordle::stats::Player;
//! use cliordle::storage::{MemoryStore, PlayerRepository};
//! use cliordle::wordlists::Dictionary;
//!
//! let repo = PlayerRepository::new(MemoryStore::new());
//! let mut player = repo.load().unwrap();
//! let dictionary = Dictionary::embedded();
//!
//! let outcome = {
//!     let mut session = Session::new(&player, &dictionary, Word::new("crane").unwrap());
//!     session.submit_guess("train").unwrap();
//!     session.submit_guess("crane").unwrap();
//!     assert_eq!(session.state(), SessionState::Solved);
//!     session.finish().unwrap()
//! };
//!
//! player.apply_outcome(&outcome).unwrap();
//! repo.save(&player).unwrap();
//! assert_eq!(repo.load().unwrap().guess_distribution[1], 1);
//! ```

// Core domain types
pub mod core;

// Session state machine and board
pub mod game;

// Player statistics
pub mod stats;

// Persistence
pub mod storage;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub mod config;
pub mod error;
