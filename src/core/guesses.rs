//! Ordered record of guessed letters

/// Letters the player has guessed, in the order they were guessed
///
/// Never holds the same letter twice. The order matters: the last element is
/// the most recent guess, which drives farewell messaging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessedLetters {
    letters: Vec<u8>,
}

impl GuessedLetters {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            letters: Vec::new(),
        }
    }

    /// Record a letter
    ///
    /// Returns `false` (and changes nothing) if the letter was already guessed.
    ///
    /// # Examples
    /// ```
    /// use assembly_endgame::core::GuessedLetters;
    ///
    /// let mut guessed = GuessedLetters::new();
    /// assert!(guessed.insert(b'a'));
    /// assert!(!guessed.insert(b'a'));
    /// assert_eq!(guessed.len(), 1);
    /// ```
    pub fn insert(&mut self, letter: u8) -> bool {
        if self.contains(letter) {
            return false;
        }
        self.letters.push(letter);
        true
    }

    /// At most 26 entries, so a linear scan is enough
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }

    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<u8> {
        self.letters.last().copied()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.letters
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.letters.iter().copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }
}
