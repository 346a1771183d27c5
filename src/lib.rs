//! Assembly: Endgame
//!
//! A hangman variant played against a roster of programming languages. Every
//! wrong guess loses a language; lose all but Assembly and the game is over.
//!
//! # Quick Start
//!
//! ```rust
//! use assembly_endgame::core::{LANGUAGES, SecretWord};
//! use assembly_endgame::game::{FixedWords, Game};
//! use assembly_endgame::presentation::{StatusMessage, status_message};
//!
//! let source = FixedWords::single(SecretWord::new("go").unwrap());
//! let mut game = Game::new(source, LANGUAGES);
//!
//! game.guess(b'g');
//! game.guess(b'o');
//!
//! assert!(game.facts().is_game_won);
//! assert_eq!(status_message(&game.snapshot()), Some(StatusMessage::Won));
//! ```

// Core domain types
pub mod core;

// Game state engine
pub mod game;

// Display decisions derived from game state
pub mod presentation;

// Word lists
pub mod wordlists;

// Automatic letter guessing
pub mod autoplay;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod logging;
