//! Status message and accessibility announcement

use crate::core::farewell_text;
use crate::game::Snapshot;
use std::fmt::Write as _;

/// Token read out for a letter that has not been guessed
pub const BLANK_TOKEN: &str = "blank";

/// The message shown in the status area
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    /// A language was just lost to a wrong guess
    Farewell(String),
    Won,
    Lost,
}

impl StatusMessage {
    #[must_use]
    pub fn headline(&self) -> Option<&str> {
        match self {
            Self::Farewell(_) => None,
            Self::Won => Some("You win!"),
            Self::Lost => Some("Game over!"),
        }
    }

    #[must_use]
    pub fn body(&self) -> &str {
        match self {
            Self::Farewell(text) => text,
            Self::Won => "Well done! 🎉",
            Self::Lost => "You lose! Better start learning Assembly language",
        }
    }
}

/// Pick the status message, first match wins:
/// farewell after a wrong guess, then win, then loss.
///
/// # Examples
/// ```
/// use assembly_endgame::core::{LANGUAGES, SecretWord};
/// use assembly_endgame::game::{FixedWords, Game};
/// use assembly_endgame::presentation::{StatusMessage, status_message};
///
/// let mut game = Game::new(FixedWords::single(SecretWord::new("go").unwrap()), LANGUAGES);
/// assert_eq!(status_message(&game.snapshot()), None);
///
/// game.guess(b'g');
/// game.guess(b'o');
/// assert_eq!(status_message(&game.snapshot()), Some(StatusMessage::Won));
/// ```
#[must_use]
pub fn status_message(snapshot: &Snapshot<'_>) -> Option<StatusMessage> {
    let facts = &snapshot.facts;

    if !facts.is_game_over() && facts.is_last_guess_incorrect {
        // An incorrect last guess means at least one wrong guess
        let lost_index = facts.wrong_guess_count.checked_sub(1)?;
        let language = snapshot.roster.get(lost_index)?;
        return Some(StatusMessage::Farewell(farewell_text(language.name)));
    }
    if facts.is_game_won {
        return Some(StatusMessage::Won);
    }
    if facts.is_game_lost {
        return Some(StatusMessage::Lost);
    }
    None
}

/// Text for assistive technology, independent of what is visually revealed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    /// Verdict on the last guess; `None` before the first guess
    pub last_guess: Option<String>,
    pub attempts_left: String,
    pub current_word: String,
}

impl Announcement {
    /// All parts joined into one line
    #[must_use]
    pub fn to_line(&self) -> String {
        let mut line = String::new();
        if let Some(verdict) = &self.last_guess {
            line.push_str(verdict);
            line.push(' ');
        }
        let _ = write!(line, "{} {}", self.attempts_left, self.current_word);
        line
    }
}

#[must_use]
pub fn announcement(snapshot: &Snapshot<'_>) -> Announcement {
    let last_guess = snapshot.facts.last_guessed_letter.map(|letter| {
        let letter = char::from(letter);
        if snapshot.facts.is_last_guess_incorrect {
            format!("Sorry, the letter {letter} is not in the word.")
        } else {
            format!("Correct! The letter {letter} is in the word.")
        }
    });

    let remaining = snapshot.facts.remaining_attempts();
    let attempts_left = format!(
        "You have {remaining} {} left.",
        if remaining == 1 { "attempt" } else { "attempts" }
    );

    let current_word = format!("Current word: {}", masked_word(snapshot));

    Announcement {
        last_guess,
        attempts_left,
        current_word,
    }
}

/// Each guessed letter as `letter.`, everything else as the blank token
#[must_use]
pub fn masked_word(snapshot: &Snapshot<'_>) -> String {
    snapshot
        .word
        .letters()
        .map(|letter| {
            if snapshot.guessed.contains(letter) {
                format!("{}.", char::from(letter))
            } else {
                BLANK_TOKEN.to_string()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LANGUAGES, SecretWord};
    use crate::game::{FixedWords, Game};

    fn play(word: &str, guesses: &[u8]) -> Game<'static, FixedWords> {
        let mut game = Game::new(
            FixedWords::single(SecretWord::new(word).unwrap()),
            LANGUAGES,
        );
        for &letter in guesses {
            game.guess(letter);
        }
        game
    }

    #[test]
    fn no_message_at_start() {
        let game = play("go", b"");
        assert_eq!(status_message(&game.snapshot()), None);
    }

    #[test]
    fn no_message_after_correct_guess() {
        let game = play("go", b"g");
        assert_eq!(status_message(&game.snapshot()), None);
    }

    #[test]
    fn farewell_after_wrong_guess() {
        let game = play("go", b"x");
        let message = status_message(&game.snapshot());
        assert_eq!(
            message,
            Some(StatusMessage::Farewell(farewell_text("HTML")))
        );
    }

    #[test]
    fn farewell_names_latest_lost_language() {
        let game = play("go", b"xyz");
        let Some(StatusMessage::Farewell(text)) = status_message(&game.snapshot()) else {
            panic!("expected a farewell");
        };
        assert_eq!(text, farewell_text("JavaScript"));
    }

    #[test]
    fn farewell_clears_after_correct_guess() {
        let game = play("go", b"xg");
        assert_eq!(status_message(&game.snapshot()), None);
    }

    #[test]
    fn loss_beats_farewell() {
        let game = play("go", b"abcdefhi");
        assert_eq!(status_message(&game.snapshot()), Some(StatusMessage::Lost));
    }

    #[test]
    fn win_beats_loss() {
        let game = play("go", b"abcdefhigo");
        assert_eq!(status_message(&game.snapshot()), Some(StatusMessage::Won));
    }

    #[test]
    fn message_texts() {
        assert_eq!(StatusMessage::Won.headline(), Some("You win!"));
        assert_eq!(StatusMessage::Lost.headline(), Some("Game over!"));
        assert_eq!(
            StatusMessage::Lost.body(),
            "You lose! Better start learning Assembly language"
        );
        let farewell = StatusMessage::Farewell("Adios, CSS".to_string());
        assert_eq!(farewell.headline(), None);
        assert_eq!(farewell.body(), "Adios, CSS");
    }

    #[test]
    fn masked_word_tokens() {
        let game = play("go", b"o");
        assert_eq!(masked_word(&game.snapshot()), "blanko.");
    }

    #[test]
    fn masked_word_ignores_loss_reveal() {
        let game = play("go", b"abcdefhi");
        assert_eq!(masked_word(&game.snapshot()), "blankblank");
    }

    #[test]
    fn announcement_before_first_guess() {
        let game = play("go", b"");
        let a = announcement(&game.snapshot());
        assert_eq!(a.last_guess, None);
        assert_eq!(a.attempts_left, "You have 8 attempts left.");
        assert_eq!(
            a.to_line(),
            "You have 8 attempts left. Current word: blankblank"
        );
    }

    #[test]
    fn announcement_after_guesses() {
        let game = play("go", b"gx");
        let a = announcement(&game.snapshot());
        assert_eq!(
            a.last_guess.as_deref(),
            Some("Sorry, the letter x is not in the word.")
        );
        assert_eq!(a.attempts_left, "You have 7 attempts left.");
        assert_eq!(a.current_word, "Current word: g.blank");

        let game = play("go", b"xg");
        let a = announcement(&game.snapshot());
        assert_eq!(
            a.last_guess.as_deref(),
            Some("Correct! The letter g is in the word.")
        );
    }

    #[test]
    fn announcement_singular_attempt() {
        let game = play("go", b"abcdefh");
        let a = announcement(&game.snapshot());
        assert_eq!(a.attempts_left, "You have 1 attempt left.");

        let game = play("go", b"abcdefhi");
        let a = announcement(&game.snapshot());
        assert_eq!(a.attempts_left, "You have 0 attempts left.");
    }
}
