//! TUI application state and logic

use crate::game::{Game, GameStatus, WordSource};
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Which control receives Enter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Keyboard,
    NewGame,
}

/// Fires once when a boolean goes from false to true
#[derive(Debug, Default, Clone)]
pub struct EdgeTrigger {
    previous: bool,
}

impl EdgeTrigger {
    /// Feed the current level; true only on a false → true transition
    pub fn rising(&mut self, level: bool) -> bool {
        let fired = level && !self.previous;
        self.previous = level;
        fired
    }
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

/// Application state
///
/// Owns the game session. The game itself does not refuse post-game guesses,
/// so this is where input stops once the game is over.
pub struct App<'a, S: WordSource> {
    pub game: Game<'a, S>,
    pub focus: Focus,
    pub stats: Statistics,
    pub should_quit: bool,
    game_over: EdgeTrigger,
}

impl<'a, S: WordSource> App<'a, S> {
    #[must_use]
    pub fn new(game: Game<'a, S>) -> Self {
        Self {
            game,
            focus: Focus::Keyboard,
            stats: Statistics::default(),
            should_quit: false,
            game_over: EdgeTrigger::default(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c)
                if c.is_ascii_alphabetic()
                    && !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.guess(c.to_ascii_lowercase());
            }
            KeyCode::Tab | KeyCode::BackTab => {
                if self.game.facts().is_game_over() {
                    self.focus = match self.focus {
                        Focus::Keyboard => Focus::NewGame,
                        Focus::NewGame => Focus::Keyboard,
                    };
                }
            }
            KeyCode::Enter => {
                if self.focus == Focus::NewGame && self.game.facts().is_game_over() {
                    self.new_game();
                }
            }
            _ => {}
        }
    }

    /// Guess a letter; ignored once the game is over
    pub fn guess(&mut self, letter: char) {
        if self.game.facts().is_game_over() {
            return;
        }
        // Callers pass ASCII letters only
        if let Ok(letter) = u8::try_from(letter) {
            self.game.guess(letter);
        }
        self.on_state_change();
    }

    pub fn new_game(&mut self) {
        self.game.new_game();
        self.focus = Focus::Keyboard;
        self.on_state_change();
    }

    /// Edge-triggered effects of entering the game-over state
    fn on_state_change(&mut self) {
        let facts = self.game.facts();
        if self.game_over.rising(facts.is_game_over()) {
            debug!("game over, focusing new game control");
            self.focus = Focus::NewGame;
            self.stats.total_games += 1;
            if facts.status() == GameStatus::Won {
                self.stats.games_won += 1;
            }
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: WordSource>(app: App<'_, S>) -> Result<()> {
    enable_raw_mode()?;

    let res = run_in_alternate_screen(app);

    // Restore terminal even when setup or the app failed
    restore_first_error(res, restore_terminal())
}

fn run_in_alternate_screen<S: WordSource>(app: App<'_, S>) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    run_app(&mut terminal, app)
}

/// Undo raw mode and the alternate screen, attempting every step
fn restore_terminal() -> Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, Show);
    raw?;
    screen?;
    Ok(())
}

/// The app's own error wins over a failure to restore the terminal
fn restore_first_error(res: Result<()>, restored: Result<()>) -> Result<()> {
    res?;
    restored
}

fn run_app<B: ratatui::backend::Backend, S: WordSource>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LANGUAGES, SecretWord};
    use crate::game::FixedWords;

    fn app_with(words: &[&str]) -> App<'static, FixedWords> {
        let words = words.iter().map(|w| SecretWord::new(*w).unwrap()).collect();
        App::new(Game::new(FixedWords::new(words).unwrap(), LANGUAGES))
    }

    fn press(app: &mut App<'_, FixedWords>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_letters(app: &mut App<'_, FixedWords>, letters: &str) {
        for c in letters.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn edge_trigger_fires_once_per_rise() {
        let mut trigger = EdgeTrigger::default();
        assert!(!trigger.rising(false));
        assert!(trigger.rising(true));
        assert!(!trigger.rising(true));
        assert!(!trigger.rising(true));
        assert!(!trigger.rising(false));
        assert!(trigger.rising(true));
    }

    #[test]
    fn letters_are_guessed_case_insensitively() {
        let mut app = app_with(&["go"]);
        type_letters(&mut app, "G");
        assert_eq!(app.game.guessed().as_slice(), b"g");
    }

    #[test]
    fn focus_moves_to_new_game_on_win() {
        let mut app = app_with(&["go"]);
        type_letters(&mut app, "g");
        assert_eq!(app.focus, Focus::Keyboard);
        type_letters(&mut app, "o");
        assert_eq!(app.focus, Focus::NewGame);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
    }

    #[test]
    fn focus_is_not_stolen_back_while_over() {
        let mut app = app_with(&["go"]);
        type_letters(&mut app, "go");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Keyboard);

        // Further input while over must not re-trigger the focus shift
        type_letters(&mut app, "xyz");
        assert_eq!(app.focus, Focus::Keyboard);
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn guesses_ignored_after_game_over() {
        let mut app = app_with(&["go"]);
        type_letters(&mut app, "go");
        type_letters(&mut app, "abcdefhi");
        assert_eq!(app.game.guessed().as_slice(), b"go");
        let facts = app.game.facts();
        assert!(facts.is_game_won);
        assert!(!facts.is_game_lost);
    }

    #[test]
    fn loss_counts_as_game_played() {
        let mut app = app_with(&["go"]);
        type_letters(&mut app, "abcdefhi");
        assert!(app.game.facts().is_game_lost);
        assert_eq!(app.focus, Focus::NewGame);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
    }

    #[test]
    fn enter_on_new_game_starts_next_game() {
        let mut app = app_with(&["go", "rust"]);
        type_letters(&mut app, "go");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.game.word().text(), "rust");
        assert!(app.game.guessed().is_empty());
        assert_eq!(app.focus, Focus::Keyboard);

        // The next game over fires the trigger again
        type_letters(&mut app, "rust");
        assert_eq!(app.focus, Focus::NewGame);
        assert_eq!(app.stats.total_games, 2);
    }

    #[test]
    fn enter_does_nothing_mid_game() {
        let mut app = app_with(&["go", "rust"]);
        type_letters(&mut app, "g");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game.word().text(), "go");
    }

    #[test]
    fn tab_ignored_mid_game() {
        let mut app = app_with(&["go"]);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Keyboard);
    }

    #[test]
    fn quit_keys() {
        let mut app = app_with(&["go"]);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = app_with(&["go"]);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert!(app.game.guessed().is_empty());
    }

    #[test]
    fn modified_letters_are_not_guesses() {
        let mut app = app_with(&["go"]);
        app.handle_key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        assert!(app.game.guessed().is_empty());
        assert_eq!(app.game.facts().wrong_guess_count, 0);

        app.handle_key(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT));
        assert_eq!(app.game.guessed().as_slice(), b"g");
    }

    #[test]
    fn app_error_reported_before_restore_error() {
        let res = restore_first_error(
            Err(anyhow::anyhow!("draw failed")),
            Err(anyhow::anyhow!("restore failed")),
        );
        assert_eq!(res.unwrap_err().to_string(), "draw failed");

        let res = restore_first_error(Ok(()), Err(anyhow::anyhow!("restore failed")));
        assert_eq!(res.unwrap_err().to_string(), "restore failed");

        assert!(restore_first_error(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn win_rate() {
        let stats = Statistics {
            total_games: 4,
            games_won: 1,
        };
        assert!((stats.win_rate() - 25.0).abs() < f64::EPSILON);
        assert!(Statistics::default().win_rate().abs() < f64::EPSILON);
    }
}
