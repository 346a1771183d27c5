//! Word lists for new games
//!
//! Provides the embedded word corpus compiled into the binary, plus loading
//! custom lists from disk.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
