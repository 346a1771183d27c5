//! TUI rendering with ratatui
//!
//! Draws the roster, the word, the keyboard and the status area.

use super::app::{App, Focus};
use crate::core::Language;
use crate::game::WordSource;
use crate::presentation::{
    KeyCell, KeyStatus, LanguageTile, StatusMessage, announcement, keyboard, language_tiles,
    status_message, word_cells,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

const TEXT_LIGHT: Color = Color::Rgb(0xF9, 0xF4, 0xDA);
const KEY_NEUTRAL: Color = Color::Rgb(0xFC, 0xBA, 0x29);
const KEY_CORRECT: Color = Color::Rgb(0x10, 0xA9, 0x5B);
const KEY_WRONG: Color = Color::Rgb(0xEC, 0x5D, 0x49);
const FAREWELL_BG: Color = Color::Rgb(0x7A, 0x5E, 0xA7);
const WORD_CELL_BG: Color = Color::Rgb(0x32, 0x32, 0x32);

/// Keys per keyboard row
const KEYS_PER_ROW: usize = 13;

/// Main UI rendering function
pub fn ui<S: WordSource>(f: &mut Frame, app: &App<'_, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Length(4), // Game status
            Constraint::Length(3), // Languages
            Constraint::Length(3), // Word
            Constraint::Length(4), // Keyboard
            Constraint::Length(3), // New game
            Constraint::Min(2),    // Announcement
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_game_status(f, app, chunks[1]);
    render_languages(f, app, chunks[2]);
    render_word(f, app, chunks[3]);
    render_keyboard(f, app, chunks[4]);
    render_new_game(f, app, chunks[5]);
    render_announcement(f, app, chunks[6]);
    render_status_bar(f, app, chunks[7]);
}

fn render_header<S: WordSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let attempts = app.game.facts().max_wrong_guesses;
    let content = vec![
        Line::from(Span::styled(
            "Assembly: Endgame",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "Guess the word within {attempts} attempts to keep the programming world safe from Assembly!"
            ),
            Style::default().fg(Color::Gray),
        )),
    ];

    let header = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_game_status<S: WordSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let snapshot = app.game.snapshot();
    let Some(message) = status_message(&snapshot) else {
        f.render_widget(Paragraph::new(""), area);
        return;
    };

    let (bg, fg, title) = match &message {
        StatusMessage::Won => (KEY_CORRECT, TEXT_LIGHT, " 🎉 CONGRATULATIONS! 🎉 "),
        StatusMessage::Lost => (Color::Rgb(0xBA, 0x2A, 0x2A), TEXT_LIGHT, ""),
        StatusMessage::Farewell(_) => (FAREWELL_BG, TEXT_LIGHT, ""),
    };

    let mut lines = Vec::new();
    if let Some(headline) = message.headline() {
        lines.push(Line::from(Span::styled(
            headline.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
    }
    let body_style = if matches!(message, StatusMessage::Farewell(_)) {
        Style::default().add_modifier(Modifier::ITALIC)
    } else {
        Style::default()
    };
    lines.push(Line::from(Span::styled(message.body().to_string(), body_style)));

    let status = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(fg).bg(bg))
        .block(Block::default().title(title).borders(Borders::NONE))
        .wrap(Wrap { trim: true });
    f.render_widget(status, area);
}

fn tile_span(tile: &LanguageTile) -> Span<'static> {
    let Language { name, .. } = tile.language;
    if tile.lost {
        return Span::styled(
            format!(" 💀{name} "),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT | Modifier::DIM),
        );
    }

    let mut style = Style::default().add_modifier(Modifier::BOLD);
    if let Some((r, g, b)) = tile.language.background_rgb() {
        style = style.bg(Color::Rgb(r, g, b));
    }
    if let Some((r, g, b)) = tile.language.foreground_rgb() {
        style = style.fg(Color::Rgb(r, g, b));
    }
    Span::styled(format!(" {name} "), style)
}

fn render_languages<S: WordSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let snapshot = app.game.snapshot();
    let mut spans = Vec::new();
    for tile in language_tiles(&snapshot) {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        spans.push(tile_span(&tile));
    }

    let languages = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::NONE));
    f.render_widget(languages, area);
}

fn render_word<S: WordSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let snapshot = app.game.snapshot();
    let mut spans = Vec::new();
    for cell in word_cells(&snapshot) {
        let fg = if cell.missed { KEY_WRONG } else { TEXT_LIGHT };
        let text = format!(" {} ", cell.shown.unwrap_or(' '));
        spans.push(Span::styled(
            text,
            Style::default()
                .fg(fg)
                .bg(WORD_CELL_BG)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ));
        spans.push(Span::raw(" "));
    }

    let word = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));
    f.render_widget(word, area);
}

fn key_span(key: &KeyCell) -> Span<'static> {
    let bg = match key.status {
        KeyStatus::Neutral => KEY_NEUTRAL,
        KeyStatus::Correct => KEY_CORRECT,
        KeyStatus::Wrong => KEY_WRONG,
    };
    let mut style = Style::default()
        .fg(Color::Rgb(0x1E, 0x1E, 0x1E))
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    if key.disabled {
        style = style.add_modifier(Modifier::DIM);
    }
    Span::styled(format!(" {} ", key.label()), style)
}

fn render_keyboard<S: WordSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let snapshot = app.game.snapshot();
    let keys = keyboard(&snapshot);

    let lines: Vec<Line> = keys
        .chunks(KEYS_PER_ROW)
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for key in row {
                spans.push(key_span(key));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let border_color = if app.focus == Focus::Keyboard {
        Color::Yellow
    } else {
        Color::DarkGray
    };

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .style(Style::default().fg(border_color)),
    );
    f.render_widget(keyboard, area);
}

fn render_new_game<S: WordSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    if !app.game.facts().is_game_over() {
        f.render_widget(Paragraph::new(""), area);
        return;
    }

    let style = if app.focus == Focus::NewGame {
        Style::default()
            .fg(Color::Rgb(0x1E, 0x1E, 0x1E))
            .bg(Color::Rgb(0x11, 0xB5, 0xE5))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Rgb(0x11, 0xB5, 0xE5))
    };

    let button = Paragraph::new(Span::styled("  New Game  ", style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Rgb(0x11, 0xB5, 0xE5))),
        );

    // Keep the button narrow and centered
    let width = 20_u16.min(area.width);
    let button_area = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };
    f.render_widget(button, button_area);
}

fn render_announcement<S: WordSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let snapshot = app.game.snapshot();
    let text = announcement(&snapshot).to_line();

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_status_bar<S: WordSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Won: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.games_won,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = if app.game.facts().is_game_over() {
        "Enter: New Game | Tab: Focus | Esc: Quit"
    } else {
        "a-z: Guess | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
