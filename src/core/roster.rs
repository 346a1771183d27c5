//! The language roster
//!
//! Each language is one life. Wrong guesses lose languages from the front of
//! the roster; the last entry is the one you end up stuck with.

/// One roster entry: a programming language and its tile colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub name: &'static str,
    /// Tile background as `#RRGGBB`
    pub background_color: &'static str,
    /// Tile foreground as `#RRGGBB`
    pub color: &'static str,
}

impl Language {
    #[must_use]
    pub const fn new(name: &'static str, background_color: &'static str, color: &'static str) -> Self {
        Self {
            name,
            background_color,
            color,
        }
    }

    /// Background color as RGB components, if the hex string is well formed
    #[must_use]
    pub fn background_rgb(&self) -> Option<(u8, u8, u8)> {
        parse_hex_color(self.background_color)
    }

    /// Foreground color as RGB components, if the hex string is well formed
    #[must_use]
    pub fn foreground_rgb(&self) -> Option<(u8, u8, u8)> {
        parse_hex_color(self.color)
    }
}

/// The default roster, nine languages with Assembly last
pub const LANGUAGES: &[Language] = &[
    Language::new("HTML", "#E2680F", "#F9F4DA"),
    Language::new("CSS", "#328AF1", "#F9F4DA"),
    Language::new("JavaScript", "#F4EB13", "#1E1E1E"),
    Language::new("React", "#2ED3E9", "#1E1E1E"),
    Language::new("TypeScript", "#298EC6", "#F9F4DA"),
    Language::new("Node.js", "#599137", "#F9F4DA"),
    Language::new("Python", "#FFD742", "#1E1E1E"),
    Language::new("Ruby", "#D02B2B", "#F9F4DA"),
    Language::new("Assembly", "#2D519F", "#F9F4DA"),
];

/// Maximum wrong guesses a roster allows: every entry but the last
#[inline]
#[must_use]
pub const fn max_wrong_guesses(roster: &[Language]) -> usize {
    roster.len().saturating_sub(1)
}

/// Parse a `#RRGGBB` color string
///
/// # Examples
/// ```
/// use assembly_endgame::core::parse_hex_color;
///
/// assert_eq!(parse_hex_color("#E2680F"), Some((0xE2, 0x68, 0x0F)));
/// assert_eq!(parse_hex_color("E2680F"), None);
/// ```
#[must_use]
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
