//! Game state engine

use super::facts::{GameFacts, GameStatus};
use super::source::WordSource;
use crate::core::{GuessedLetters, Language, SecretWord};
use log::{debug, info};

/// What a single call to [`Game::guess`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// New letter, present in the word
    Correct,
    /// New letter, not in the word
    Wrong,
    /// Letter was already guessed; nothing changed
    Repeated,
}

/// Everything needed to present one moment of a game
///
/// Borrowed from a [`Game`]; the facts are derived when the snapshot is taken.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'g> {
    pub word: &'g SecretWord,
    pub guessed: &'g GuessedLetters,
    pub roster: &'g [Language],
    pub facts: GameFacts,
}

/// A single game session
///
/// Owns the primary state (secret word and guessed letters). All other facts
/// are derived on demand through [`Game::facts`].
///
/// The engine does not refuse guesses once the game is over. Front ends must
/// stop sending them; see [`GameFacts::status`] for how an over-guessed game
/// is reported.
pub struct Game<'a, S: WordSource> {
    source: S,
    roster: &'a [Language],
    word: SecretWord,
    guessed: GuessedLetters,
}

impl<'a, S: WordSource> Game<'a, S> {
    /// Start a game with a word drawn from `source`
    ///
    /// # Examples
    /// ```
    /// use assembly_endgame::core::{LANGUAGES, SecretWord};
    /// use assembly_endgame::game::{FixedWords, Game, GuessOutcome};
    ///
    /// let source = FixedWords::single(SecretWord::new("go").unwrap());
    /// let mut game = Game::new(source, LANGUAGES);
    ///
    /// assert_eq!(game.guess(b'g'), GuessOutcome::Correct);
    /// assert_eq!(game.guess(b'g'), GuessOutcome::Repeated);
    /// assert_eq!(game.guess(b'o'), GuessOutcome::Correct);
    /// assert!(game.facts().is_game_won);
    /// ```
    pub fn new(mut source: S, roster: &'a [Language]) -> Self {
        let word = source.next_word();
        debug!("new game: {} letters", word.len());
        Self {
            source,
            roster,
            word,
            guessed: GuessedLetters::new(),
        }
    }

    /// Replace the secret word and forget every guess
    pub fn new_game(&mut self) {
        self.word = self.source.next_word();
        self.guessed.clear();
        debug!("new game: {} letters", self.word.len());
    }

    /// Record a guessed letter
    ///
    /// Guessing a letter twice is a no-op. `letter` must be a lowercase ASCII
    /// letter.
    pub fn guess(&mut self, letter: u8) -> GuessOutcome {
        debug_assert!(letter.is_ascii_lowercase(), "guess must be a-z");

        let was_over = self.facts().is_game_over();
        if !self.guessed.insert(letter) {
            return GuessOutcome::Repeated;
        }

        let outcome = if self.word.contains(letter) {
            GuessOutcome::Correct
        } else {
            GuessOutcome::Wrong
        };
        debug!("guess '{}': {outcome:?}", char::from(letter));

        let facts = self.facts();
        if !was_over && facts.is_game_over() {
            match facts.status() {
                GameStatus::Won => info!(
                    "game won with {} wrong guesses",
                    facts.wrong_guess_count
                ),
                GameStatus::Lost => info!("game lost, word was '{}'", self.word),
                GameStatus::InProgress => {}
            }
        }

        outcome
    }

    /// Derive the current facts
    #[must_use]
    pub fn facts(&self) -> GameFacts {
        GameFacts::derive(&self.word, &self.guessed, self.roster)
    }

    /// Borrow the state for presentation
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            word: &self.word,
            guessed: &self.guessed,
            roster: self.roster,
            facts: self.facts(),
        }
    }

    #[must_use]
    pub const fn word(&self) -> &SecretWord {
        &self.word
    }

    #[must_use]
    pub const fn guessed(&self) -> &GuessedLetters {
        &self.guessed
    }

    #[must_use]
    pub const fn roster(&self) -> &'a [Language] {
        self.roster
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LANGUAGES;
    use crate::game::FixedWords;

    fn game_with(words: &[&str]) -> Game<'static, FixedWords> {
        let words = words.iter().map(|w| SecretWord::new(*w).unwrap()).collect();
        Game::new(FixedWords::new(words).unwrap(), LANGUAGES)
    }

    #[test]
    fn starts_with_first_word_and_no_guesses() {
        let game = game_with(&["go"]);
        assert_eq!(game.word().text(), "go");
        assert!(game.guessed().is_empty());
        assert!(!game.facts().is_game_over());
    }

    #[test]
    fn guess_outcomes() {
        let mut game = game_with(&["go"]);
        assert_eq!(game.guess(b'x'), GuessOutcome::Wrong);
        assert_eq!(game.guess(b'g'), GuessOutcome::Correct);
        assert_eq!(game.guess(b'x'), GuessOutcome::Repeated);
        assert_eq!(game.guessed().as_slice(), b"xg");
    }

    #[test]
    fn repeated_guesses_never_duplicate() {
        let mut game = game_with(&["electric"]);
        for &letter in b"eeeelllxxxeelx" {
            game.guess(letter);
        }
        assert_eq!(game.guessed().as_slice(), b"elx");
    }

    #[test]
    fn wrong_count_is_monotonic() {
        let mut game = game_with(&["bridge"]);
        let mut previous = 0;
        for &letter in b"zbqrxiydgwe" {
            game.guess(letter);
            let wrong = game.facts().wrong_guess_count;
            assert!(wrong >= previous);
            previous = wrong;
        }
    }

    #[test]
    fn game_over_is_monotonic() {
        let mut game = game_with(&["go"]);
        let mut was_over = false;
        for &letter in b"abcdefhijklmnop" {
            game.guess(letter);
            let over = game.facts().is_game_over();
            assert!(!was_over || over, "game un-ended after '{}'", char::from(letter));
            was_over = over;
        }
        assert!(was_over);
    }

    #[test]
    fn win_scenario() {
        let mut game = game_with(&["go"]);
        game.guess(b'g');
        game.guess(b'o');
        let facts = game.facts();
        assert!(facts.is_game_won);
        assert_eq!(facts.wrong_guess_count, 0);
    }

    #[test]
    fn loss_scenario() {
        let mut game = game_with(&["go"]);
        for &letter in b"abcdefgh" {
            game.guess(letter);
        }
        assert_eq!(game.facts().wrong_guess_count, 7);
        assert!(!game.facts().is_game_lost);

        game.guess(b'i');
        assert_eq!(game.facts().wrong_guess_count, 8);
        assert!(game.facts().is_game_lost);
    }

    #[test]
    fn new_game_resets() {
        let mut game = game_with(&["go", "rust"]);
        for &letter in b"abcdefhij" {
            game.guess(letter);
        }
        assert!(game.facts().is_game_over());

        game.new_game();
        assert_eq!(game.word().text(), "rust");
        assert!(game.guessed().is_empty());
        let facts = game.facts();
        assert_eq!(facts.wrong_guess_count, 0);
        assert!(!facts.is_game_over());
    }

    #[test]
    fn snapshot_matches_facts() {
        let mut game = game_with(&["go"]);
        game.guess(b'x');
        let snapshot = game.snapshot();
        assert_eq!(snapshot.facts, game.facts());
        assert_eq!(snapshot.word.text(), "go");
        assert_eq!(snapshot.roster.len(), LANGUAGES.len());
    }
}
