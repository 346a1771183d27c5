//! Formatting utilities for terminal output

use crate::presentation::{KeyCell, KeyStatus, LetterCell};
use colored::{Color, Colorize};

/// Placeholder drawn for an unrevealed letter
pub const BLANK_CELL: char = '_';

/// Color of a word cell: letters revealed only by a loss stand out in red
#[must_use]
pub fn letter_color(cell: &LetterCell) -> Color {
    if cell.missed {
        Color::BrightRed
    } else {
        Color::BrightYellow
    }
}

/// Word cells as spaced text, e.g. `B _ _ D _ E`, each colored by
/// [`letter_color`]
#[must_use]
pub fn colored_word_line(cells: &[LetterCell]) -> String {
    cells
        .iter()
        .map(|cell| {
            cell.shown
                .unwrap_or(BLANK_CELL)
                .to_string()
                .color(letter_color(cell))
                .bold()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keyboard as plain text: correct keys in brackets, wrong keys between dashes
#[must_use]
pub fn keyboard_line(keys: &[KeyCell]) -> String {
    keys.iter()
        .map(|key| match key.status {
            KeyStatus::Neutral => format!(" {} ", key.label()),
            KeyStatus::Correct => format!("[{}]", key.label()),
            KeyStatus::Wrong => format!("-{}-", key.label()),
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Remaining lives as a bar
#[must_use]
pub fn lives_bar(remaining: usize, max: usize, width: usize) -> String {
    create_progress_bar(remaining as f64, max as f64, width)
}
