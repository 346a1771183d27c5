//! Plays a game to the end with a letter strategy

use super::strategy::LetterStrategy;
use crate::core::SecretWord;
use crate::game::{Game, GameStatus, GuessOutcome, Snapshot, WordSource};

/// A single guess made by the autoplayer
#[derive(Debug, Clone)]
pub struct Turn {
    pub letter: u8,
    pub outcome: GuessOutcome,
    pub candidates_before: usize,
    pub wrong_guess_count: usize,
}

/// Result of playing one game out
#[derive(Debug, Clone)]
pub struct PlayedGame {
    pub word: String,
    pub status: GameStatus,
    pub turns: Vec<Turn>,
    pub wrong_guesses: usize,
}

impl PlayedGame {
    #[must_use]
    pub fn won(&self) -> bool {
        self.status == GameStatus::Won
    }
}

/// The board as the player sees it: guessed letters shown, the rest hidden
#[must_use]
pub fn revealed_pattern(snapshot: &Snapshot<'_>) -> Vec<Option<u8>> {
    snapshot
        .word
        .letters()
        .map(|letter| snapshot.guessed.contains(letter).then_some(letter))
        .collect()
}

/// Keep guessing until the game is over
///
/// Stops early only if the strategy runs out of letters. Every accepted guess
/// adds a new letter, so this takes at most 26 turns.
pub fn play_out<S: LetterStrategy, W: WordSource>(
    game: &mut Game<'_, W>,
    strategy: &S,
    corpus: &[SecretWord],
) -> PlayedGame {
    let mut turns = Vec::new();

    while !game.facts().is_game_over() {
        let snapshot = game.snapshot();
        let pattern = revealed_pattern(&snapshot);
        let candidates_before = corpus
            .iter()
            .filter(|w| super::strategy::is_candidate(w, &pattern, snapshot.guessed))
            .count();

        let Some(letter) = strategy.select_letter(&pattern, snapshot.guessed, corpus) else {
            break;
        };
        let outcome = game.guess(letter);
        if outcome == GuessOutcome::Repeated {
            // A strategy returning guessed letters would loop forever
            break;
        }

        turns.push(Turn {
            letter,
            outcome,
            candidates_before,
            wrong_guess_count: game.facts().wrong_guess_count,
        });
    }

    let facts = game.facts();
    PlayedGame {
        word: game.word().text().to_string(),
        status: facts.status(),
        turns,
        wrong_guesses: facts.wrong_guess_count,
    }
}
