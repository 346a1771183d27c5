//! Core domain types for the game
//!
//! Pure value types: the secret word, the guessed letters, the language roster
//! and the farewell phrases. Nothing here knows about rendering or input.

mod farewell;
mod guesses;
mod roster;
mod word;

pub use farewell::farewell_text;
pub use guesses::GuessedLetters;
pub use roster::{LANGUAGES, Language, max_wrong_guesses, parse_hex_color};
pub use word::{SecretWord, WordError};

/// Letters offered on the keyboard, in display order
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";
