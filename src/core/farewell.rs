//! Farewell phrases for lost languages

/// Phrase templates; `{}` is replaced by the language name
const FAREWELL_TEMPLATES: &[&str] = &[
    "Farewell, {}",
    "Adios, {}",
    "R.I.P., {}",
    "We'll miss you, {}",
    "Oh no, not {}!",
    "{} bites the dust",
    "Gone but not forgotten, {}",
    "The end of {} as we know it",
    "Off into the sunset, {}",
    "{}, it's been real",
    "{}, your watch has ended",
    "{} has left the building",
];

/// Farewell phrase for a language
///
/// The phrase is a pure function of the name, so a given language always says
/// goodbye the same way.
///
/// # Examples
/// ```
/// use assembly_endgame::core::farewell_text;
///
/// let text = farewell_text("HTML");
/// assert!(text.contains("HTML"));
/// assert_eq!(text, farewell_text("HTML"));
/// ```
#[must_use]
pub fn farewell_text(language_name: &str) -> String {
    let index = template_index(language_name);
    FAREWELL_TEMPLATES[index].replace("{}", language_name)
}

fn template_index(language_name: &str) -> usize {
    let sum = language_name
        .bytes()
        .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(usize::from(b)));
    sum % FAREWELL_TEMPLATES.len()
}
