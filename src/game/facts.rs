//! Facts derived from the game state
//!
//! `GameFacts` is never stored alongside the primary state. It is recomputed
//! from the secret word, the guessed letters and the roster size every time it
//! is asked for, so it cannot drift out of sync.

use crate::core::{GuessedLetters, Language, SecretWord, max_wrong_guesses};

/// Overall state of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Everything the UI needs to know about a game, derived on demand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameFacts {
    pub wrong_guess_count: usize,
    pub max_wrong_guesses: usize,
    pub is_game_won: bool,
    pub is_game_lost: bool,
    pub last_guessed_letter: Option<u8>,
    pub is_last_guess_incorrect: bool,
}

impl GameFacts {
    /// Derive the facts for a word, its guesses and a roster
    ///
    /// # Examples
    /// ```
    /// use assembly_endgame::core::{GuessedLetters, LANGUAGES, SecretWord};
    /// use assembly_endgame::game::GameFacts;
    ///
    /// let word = SecretWord::new("go").unwrap();
    /// let mut guessed = GuessedLetters::new();
    /// guessed.insert(b'g');
    /// guessed.insert(b'x');
    ///
    /// let facts = GameFacts::derive(&word, &guessed, LANGUAGES);
    /// assert_eq!(facts.wrong_guess_count, 1);
    /// assert!(facts.is_last_guess_incorrect);
    /// assert!(!facts.is_game_over());
    /// ```
    #[must_use]
    pub fn derive(word: &SecretWord, guessed: &GuessedLetters, roster: &[Language]) -> Self {
        let wrong_guess_count = guessed.iter().filter(|&l| !word.contains(l)).count();
        let max_wrong_guesses = max_wrong_guesses(roster);
        // Vacuously true for an empty word
        let is_game_won = word.letters().all(|l| guessed.contains(l));
        let is_game_lost = wrong_guess_count >= max_wrong_guesses;
        let last_guessed_letter = guessed.last();
        let is_last_guess_incorrect = last_guessed_letter.is_some_and(|l| !word.contains(l));

        Self {
            wrong_guess_count,
            max_wrong_guesses,
            is_game_won,
            is_game_lost,
            last_guessed_letter,
            is_last_guess_incorrect,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.is_game_won || self.is_game_lost
    }

    /// Wrong guesses still allowed before the game is lost
    #[inline]
    #[must_use]
    pub const fn remaining_attempts(&self) -> usize {
        self.max_wrong_guesses.saturating_sub(self.wrong_guess_count)
    }

    /// Won takes priority if a caller kept guessing past the end
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        if self.is_game_won {
            GameStatus::Won
        } else if self.is_game_lost {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LANGUAGES;

    fn facts_for(word: &str, guesses: &[u8]) -> GameFacts {
        let word = SecretWord::new(word).unwrap();
        let mut guessed = GuessedLetters::new();
        for &letter in guesses {
            guessed.insert(letter);
        }
        GameFacts::derive(&word, &guessed, LANGUAGES)
    }

    #[test]
    fn fresh_game() {
        let facts = facts_for("go", b"");
        assert_eq!(facts.wrong_guess_count, 0);
        assert_eq!(facts.max_wrong_guesses, 8);
        assert!(!facts.is_game_won);
        assert!(!facts.is_game_lost);
        assert!(!facts.is_game_over());
        assert_eq!(facts.last_guessed_letter, None);
        assert!(!facts.is_last_guess_incorrect);
        assert_eq!(facts.status(), GameStatus::InProgress);
        assert_eq!(facts.remaining_attempts(), 8);
    }

    #[test]
    fn guessing_every_letter_wins() {
        let facts = facts_for("go", b"go");
        assert!(facts.is_game_won);
        assert_eq!(facts.wrong_guess_count, 0);
        assert_eq!(facts.status(), GameStatus::Won);
    }

    #[test]
    fn repeated_word_letters_need_one_guess() {
        let facts = facts_for("committee", b"comite");
        assert!(facts.is_game_won);
    }

    #[test]
    fn seven_wrong_is_not_lost() {
        // 'g' is correct, the other seven are wrong
        let facts = facts_for("go", b"abcdefgh");
        assert_eq!(facts.wrong_guess_count, 7);
        assert!(!facts.is_game_lost);
        assert_eq!(facts.remaining_attempts(), 1);
    }

    #[test]
    fn eighth_wrong_loses() {
        let facts = facts_for("go", b"abcdefghi");
        assert_eq!(facts.wrong_guess_count, 8);
        assert!(facts.is_game_lost);
        assert!(facts.is_game_over());
        assert_eq!(facts.status(), GameStatus::Lost);
        assert_eq!(facts.remaining_attempts(), 0);
    }

    #[test]
    fn last_guess_incorrect() {
        let facts = facts_for("go", b"x");
        assert_eq!(facts.last_guessed_letter, Some(b'x'));
        assert!(facts.is_last_guess_incorrect);
    }

    #[test]
    fn last_guess_correct_after_wrong() {
        let facts = facts_for("go", b"xg");
        assert_eq!(facts.wrong_guess_count, 1);
        assert!(!facts.is_last_guess_incorrect);
    }

    #[test]
    fn won_takes_priority_over_lost() {
        // Over-guessing past the loss and then completing the word
        let facts = facts_for("go", b"abcdefhijgo");
        assert!(facts.is_game_won);
        assert!(facts.is_game_lost);
        assert_eq!(facts.status(), GameStatus::Won);
    }

    #[test]
    fn remaining_attempts_saturates() {
        let facts = facts_for("go", b"abcdefhijklm");
        assert!(facts.wrong_guess_count > facts.max_wrong_guesses);
        assert_eq!(facts.remaining_attempts(), 0);
    }

    #[test]
    fn small_roster_changes_budget() {
        let word = SecretWord::new("go").unwrap();
        let mut guessed = GuessedLetters::new();
        guessed.insert(b'z');
        let facts = GameFacts::derive(&word, &guessed, &LANGUAGES[..2]);
        assert_eq!(facts.max_wrong_guesses, 1);
        assert!(facts.is_game_lost);
    }
}
