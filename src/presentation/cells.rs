//! Per-element display decisions: word letters, roster tiles, keyboard keys

use crate::core::{ALPHABET, Language};
use crate::game::Snapshot;

/// One letter slot of the secret word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterCell {
    /// Uppercase letter to show, or `None` for a blank slot
    pub shown: Option<char>,
    /// Letter revealed only because the game was lost
    pub missed: bool,
}

/// One language tile of the roster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageTile {
    pub language: Language,
    pub lost: bool,
}

/// Feedback state of a keyboard key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStatus {
    Neutral,
    Correct,
    Wrong,
}

/// One key of the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCell {
    pub letter: u8,
    pub status: KeyStatus,
    /// No key accepts input once the game is over
    pub disabled: bool,
    pub already_guessed: bool,
}

impl KeyCell {
    #[must_use]
    pub fn label(&self) -> char {
        char::from(self.letter.to_ascii_uppercase())
    }
}

/// Word letters, revealed when guessed or when the game is lost
///
/// # Examples
/// ```
/// use assembly_endgame::core::{LANGUAGES, SecretWord};
/// use assembly_endgame::game::{FixedWords, Game};
/// use assembly_endgame::presentation::word_cells;
///
/// let mut game = Game::new(FixedWords::single(SecretWord::new("go").unwrap()), LANGUAGES);
/// game.guess(b'o');
///
/// let cells = word_cells(&game.snapshot());
/// assert_eq!(cells[0].shown, None);
/// assert_eq!(cells[1].shown, Some('O'));
/// ```
#[must_use]
pub fn word_cells(snapshot: &Snapshot<'_>) -> Vec<LetterCell> {
    let lost = snapshot.facts.is_game_lost;
    snapshot
        .word
        .letters()
        .map(|letter| {
            let guessed = snapshot.guessed.contains(letter);
            LetterCell {
                shown: (lost || guessed).then(|| char::from(letter.to_ascii_uppercase())),
                missed: lost && !guessed,
            }
        })
        .collect()
}

/// Roster tiles; the first `wrong_guess_count` languages are lost
#[must_use]
pub fn language_tiles(snapshot: &Snapshot<'_>) -> Vec<LanguageTile> {
    snapshot
        .roster
        .iter()
        .enumerate()
        .map(|(index, &language)| LanguageTile {
            language,
            lost: index < snapshot.facts.wrong_guess_count,
        })
        .collect()
}

/// All 26 keys in alphabet order
#[must_use]
pub fn keyboard(snapshot: &Snapshot<'_>) -> Vec<KeyCell> {
    let disabled = snapshot.facts.is_game_over();
    ALPHABET
        .iter()
        .map(|&letter| {
            let already_guessed = snapshot.guessed.contains(letter);
            let status = match (already_guessed, snapshot.word.contains(letter)) {
                (true, true) => KeyStatus::Correct,
                (true, false) => KeyStatus::Wrong,
                (false, _) => KeyStatus::Neutral,
            };
            KeyCell {
                letter,
                status,
                disabled,
                already_guessed,
            }
        })
        .collect()
}
