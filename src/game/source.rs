//! Secret word selection
//!
//! Defines the `WordSource` trait and concrete implementations. The engine
//! never reaches for a global random generator; it asks its source.

use crate::core::SecretWord;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// A strategy for picking the secret word of the next game
pub trait WordSource {
    /// Pick the word for a new game
    fn next_word(&mut self) -> SecretWord;
}

/// Uniform random choice from a word list
///
/// Each pick is independent of the previous one; repeats are allowed.
pub struct RandomWords {
    words: Vec<SecretWord>,
    rng: StdRng,
}

impl RandomWords {
    /// Random source seeded from the thread RNG
    ///
    /// Returns `None` if `words` is empty.
    #[must_use]
    pub fn new(words: Vec<SecretWord>) -> Option<Self> {
        let rng = StdRng::from_rng(&mut rand::rng());
        Self::with_rng(words, rng)
    }

    /// Reproducible source: the same seed yields the same sequence of words
    ///
    /// Returns `None` if `words` is empty.
    #[must_use]
    pub fn seeded(words: Vec<SecretWord>, seed: u64) -> Option<Self> {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }

    fn with_rng(words: Vec<SecretWord>, rng: StdRng) -> Option<Self> {
        if words.is_empty() {
            return None;
        }
        Some(Self { words, rng })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for RandomWords {
    fn next_word(&mut self) -> SecretWord {
        // `with_rng` rejects empty lists, so `choose` always succeeds
        self.words
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_else(|| self.words[0].clone())
    }
}

/// Cycles through a fixed sequence of words
///
/// Used to play a known word, and to make games deterministic in tests.
pub struct FixedWords {
    words: Vec<SecretWord>,
    next: usize,
}

impl FixedWords {
    /// Returns `None` if `words` is empty.
    #[must_use]
    pub fn new(words: Vec<SecretWord>) -> Option<Self> {
        if words.is_empty() {
            return None;
        }
        Some(Self { words, next: 0 })
    }

    /// A source that always yields the same word
    #[must_use]
    pub fn single(word: SecretWord) -> Self {
        Self {
            words: vec![word],
            next: 0,
        }
    }
}

impl WordSource for FixedWords {
    fn next_word(&mut self) -> SecretWord {
        let word = self.words[self.next].clone();
        self.next = (self.next + 1) % self.words.len();
        word
    }
}
