//! Game state engine
//!
//! Owns the secret word and guessed letters, and derives win/loss facts from
//! them on demand.

mod engine;
mod facts;
mod source;

pub use engine::{Game, GuessOutcome, Snapshot};
pub use facts::{GameFacts, GameStatus};
pub use source::{FixedWords, RandomWords, WordSource};
