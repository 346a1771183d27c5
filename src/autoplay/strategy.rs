//! Letter selection strategies
//!
//! Defines the `LetterStrategy` trait and concrete implementations.

use crate::core::{ALPHABET, GuessedLetters, SecretWord};
use rustc_hash::FxHashMap;

/// Letters of English text from most to least common
pub const ENGLISH_FREQUENCY_ORDER: &[u8; 26] = b"etaoinshrdlcumwfgypbvkjxqz";

/// A strategy for choosing the next letter to guess
pub trait LetterStrategy {
    /// Choose an unguessed letter
    ///
    /// `pattern` has one entry per word position: the letter if it is revealed,
    /// `None` otherwise. Returns `None` once every letter has been guessed.
    fn select_letter(
        &self,
        pattern: &[Option<u8>],
        guessed: &GuessedLetters,
        corpus: &[SecretWord],
    ) -> Option<u8>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Most common letter among words still consistent with the board
    Frequency(FrequencyStrategy),
    /// Fixed English letter-frequency order
    Alphabet(AlphabetStrategy),
}

impl LetterStrategy for StrategyType {
    fn select_letter(
        &self,
        pattern: &[Option<u8>],
        guessed: &GuessedLetters,
        corpus: &[SecretWord],
    ) -> Option<u8> {
        match self {
            Self::Frequency(s) => s.select_letter(pattern, guessed, corpus),
            Self::Alphabet(s) => s.select_letter(pattern, guessed, corpus),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "alphabet".
    /// Defaults to frequency if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "alphabet" | "english" => Self::Alphabet(AlphabetStrategy),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }
}

/// Guess the letter that appears in the most remaining candidates
///
/// Candidates are corpus words matching the revealed pattern. Ties go to the
/// alphabetically first letter. If no candidate matches (the word is not in the
/// corpus), falls back to [`AlphabetStrategy`].
pub struct FrequencyStrategy;

impl LetterStrategy for FrequencyStrategy {
    fn select_letter(
        &self,
        pattern: &[Option<u8>],
        guessed: &GuessedLetters,
        corpus: &[SecretWord],
    ) -> Option<u8> {
        let mut counts: FxHashMap<u8, usize> = FxHashMap::default();

        for candidate in corpus.iter().filter(|w| is_candidate(w, pattern, guessed)) {
            let mut seen = [false; 26];
            for letter in candidate.letters() {
                let slot = usize::from(letter - b'a');
                if !seen[slot] && !guessed.contains(letter) {
                    seen[slot] = true;
                    *counts.entry(letter).or_insert(0) += 1;
                }
            }
        }

        ALPHABET
            .iter()
            .filter_map(|letter| counts.get(letter).map(|&count| (*letter, count)))
            // max_by_key keeps the last maximum, so walk the alphabet backwards
            .rev()
            .max_by_key(|&(_, count)| count)
            .map(|(letter, _)| letter)
            .or_else(|| AlphabetStrategy.select_letter(pattern, guessed, corpus))
    }
}

/// Guess letters in English frequency order, ignoring the board
pub struct AlphabetStrategy;

impl LetterStrategy for AlphabetStrategy {
    fn select_letter(
        &self,
        _pattern: &[Option<u8>],
        guessed: &GuessedLetters,
        _corpus: &[SecretWord],
    ) -> Option<u8> {
        ENGLISH_FREQUENCY_ORDER
            .iter()
            .copied()
            .find(|&letter| !guessed.contains(letter))
    }
}

/// Whether a word is consistent with the revealed pattern
///
/// Revealed positions must match. Hidden positions cannot hold any guessed
/// letter, since a guessed letter that is in the word is shown everywhere.
#[must_use]
pub fn is_candidate(word: &SecretWord, pattern: &[Option<u8>], guessed: &GuessedLetters) -> bool {
    word.len() == pattern.len()
        && word
            .letters()
            .zip(pattern)
            .all(|(letter, slot)| match slot {
                Some(shown) => letter == *shown,
                None => !guessed.contains(letter),
            })
}
