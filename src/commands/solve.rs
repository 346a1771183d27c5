//! Word solving command
//!
//! Plays a specific secret word with a letter strategy and returns every step.

use crate::autoplay::{LetterStrategy, PlayedGame, play_out};
use crate::core::{Language, SecretWord};
use crate::game::{FixedWords, Game};
use anyhow::{Context, Result};
use log::info;

/// Configuration for solving a word
pub struct SolveConfig<'a> {
    pub target: String,
    pub roster: &'a [Language],
}

impl<'a> SolveConfig<'a> {
    #[must_use]
    pub const fn new(target: String, roster: &'a [Language]) -> Self {
        Self { target, roster }
    }
}

/// Play the target word to the end
///
/// # Errors
///
/// Returns an error if the target is not a valid secret word.
pub fn solve_word<S: LetterStrategy>(
    config: SolveConfig<'_>,
    strategy: &S,
    corpus: &[SecretWord],
) -> Result<PlayedGame> {
    let word = SecretWord::new(config.target.as_str())
        .with_context(|| format!("Invalid target word '{}'", config.target))?;

    let mut game = Game::new(FixedWords::single(word), config.roster);
    let played = play_out(&mut game, strategy, corpus);

    info!(
        "solved '{}': {:?} after {} guesses ({} wrong)",
        played.word,
        played.status,
        played.turns.len(),
        played.wrong_guesses
    );
    Ok(played)
}
