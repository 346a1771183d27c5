//! Automatic letter guessing
//!
//! Strategies that pick letters, and a player that drives a [`Game`](crate::game::Game)
//! to its end with one.

mod player;
pub mod strategy;

pub use player::{PlayedGame, Turn, play_out, revealed_pattern};
pub use strategy::{AlphabetStrategy, FrequencyStrategy, LetterStrategy, StrategyType};
