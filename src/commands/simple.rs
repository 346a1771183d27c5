//! Simple interactive CLI mode
//!
//! Line-based game without the TUI.

use crate::game::{Game, GuessOutcome, WordSource};
use crate::output::write_board;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What a line of player input asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Guess(u8),
    NewGame,
    Quit,
    Invalid,
}

fn parse_command(input: &str) -> Command {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "quit" | "exit" => Command::Quit,
        "new" | "restart" => Command::NewGame,
        _ => match input.as_bytes() {
            [letter] if letter.is_ascii_lowercase() => Command::Guess(*letter),
            _ => Command::Invalid,
        },
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
pub fn run_simple<S: WordSource>(game: &mut Game<'_, S>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play_lines(game, stdin.lock(), &mut stdout)
}

/// Drive a game from line input until `quit` or end of input
///
/// Guesses are refused once the game is over; only `new` and `quit` work then.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `out` fails.
pub fn play_lines<S: WordSource, R: BufRead, W: Write>(
    game: &mut Game<'_, S>,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                     Assembly: Endgame                        ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the word within {} attempts to keep the programming world safe from Assembly!",
        game.facts().max_wrong_guesses
    )?;
    writeln!(out, "Type a letter to guess, 'new' for a new game, 'quit' to exit.\n")?;

    write_board(out, &game.snapshot())?;

    loop {
        let prompt = if game.facts().is_game_over() {
            "New game? ('new' or 'quit')"
        } else {
            "Guess a letter"
        };
        write!(out, "{prompt}: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        match parse_command(&line) {
            Command::Quit => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            Command::NewGame => {
                game.new_game();
                writeln!(out, "\n🔄 New game started!\n")?;
                write_board(out, &game.snapshot())?;
            }
            Command::Guess(_) if game.facts().is_game_over() => {
                writeln!(out, "{}", "The game is over. Type 'new' to play again.".yellow())?;
            }
            Command::Guess(letter) => {
                if game.guess(letter) == GuessOutcome::Repeated {
                    writeln!(
                        out,
                        "{}",
                        format!("You already guessed '{}'.", char::from(letter)).yellow()
                    )?;
                } else {
                    write_board(out, &game.snapshot())?;
                }
            }
            Command::Invalid => {
                writeln!(out, "{}", "❌ Enter a single letter a-z, 'new' or 'quit'.".red())?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LANGUAGES, SecretWord};
    use crate::game::FixedWords;

    fn game_with(words: &[&str]) -> Game<'static, FixedWords> {
        let words = words.iter().map(|w| SecretWord::new(*w).unwrap()).collect();
        Game::new(FixedWords::new(words).unwrap(), LANGUAGES)
    }

    fn run(game: &mut Game<'_, FixedWords>, script: &str) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        play_lines(game, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(parse_command("a\n"), Command::Guess(b'a'));
        assert_eq!(parse_command(" Q "), Command::Guess(b'q'));
        assert_eq!(parse_command("new"), Command::NewGame);
        assert_eq!(parse_command("QUIT"), Command::Quit);
        assert_eq!(parse_command("ab"), Command::Invalid);
        assert_eq!(parse_command("7"), Command::Invalid);
        assert_eq!(parse_command(""), Command::Invalid);
    }

    #[test]
    fn plays_to_a_win() {
        let mut game = game_with(&["go"]);
        let output = run(&mut game, "g\no\nquit\n");
        assert!(game.facts().is_game_won);
        assert!(output.contains("You win!"));
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn refuses_guesses_after_game_over() {
        let mut game = game_with(&["go"]);
        run(&mut game, "g\no\nx\n");
        assert_eq!(game.guessed().as_slice(), b"go");
        assert!(!game.facts().is_game_lost);
    }

    #[test]
    fn reports_repeated_guess() {
        let mut game = game_with(&["go"]);
        let output = run(&mut game, "x\nx\n");
        assert!(output.contains("already guessed 'x'"));
        assert_eq!(game.facts().wrong_guess_count, 1);
    }

    #[test]
    fn new_game_resets_board() {
        let mut game = game_with(&["go", "rust"]);
        run(&mut game, "g\nnew\n");
        assert_eq!(game.word().text(), "rust");
        assert!(game.guessed().is_empty());
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let mut game = game_with(&["go"]);
        let output = run(&mut game, "");
        assert!(output.contains("Assembly: Endgame"));
    }

    #[test]
    fn invalid_input_is_reported() {
        let mut game = game_with(&["go"]);
        let output = run(&mut game, "42\n");
        assert!(output.contains("Enter a single letter"));
        assert!(game.guessed().is_empty());
    }
}
