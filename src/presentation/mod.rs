//! Presentation mapping
//!
//! Pure projections from a game [`Snapshot`](crate::game::Snapshot) to display
//! decisions. No state lives here; front ends call these on every redraw.

mod cells;
mod status;

pub use cells::{KeyCell, KeyStatus, LanguageTile, LetterCell, keyboard, language_tiles, word_cells};
pub use status::{
    Announcement, BLANK_TOKEN, StatusMessage, announcement, masked_word, status_message,
};
