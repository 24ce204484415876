//! Wordle word representation
//!
//! A Word stores a validated 5-letter word along with letter position indices
//! for pattern calculation.

use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::fmt;

/// A 5-letter uppercase word with letter position tracking
///
/// Equality and ordering follow the word text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: [u8; 5],
    char_positions: FxHashMap<u8, Vec<usize>>,
}

/// Error type for invalid words
///
/// Each variant carries the offending token as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(String),
    NonAlphabetic(String),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(token) => write!(f, "'{token}' is not a 5-letter word"),
            Self::NonAlphabetic(token) => write!(f, "'{token}' contains non-alphabetic chars"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string, normalized to uppercase
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 characters
    /// - Any character is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use wordle_groups::core::Word;
    ///
    /// let word = Word::new("guppy").unwrap();
    /// assert_eq!(word.text(), "GUPPY");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let token = text.as_ref();

        if token.chars().count() != 5 {
            return Err(WordError::InvalidLength(token.to_string()));
        }

        if !token.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::NonAlphabetic(token.to_string()));
        }

        let text = token.to_ascii_uppercase();
        let mut chars = [0u8; 5];
        chars.copy_from_slice(text.as_bytes());

        let mut char_positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in chars.iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            chars,
            char_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; 5] {
        &self.chars
    }

    /// Get all positions where a letter appears, ascending
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    #[must_use]
    pub fn positions_of(&self, letter: u8) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Iterate over each distinct letter with its ascending positions
    ///
    /// Letter order is unspecified.
    pub fn letter_positions(&self) -> impl Iterator<Item = (u8, &[usize])> {
        self.char_positions
            .iter()
            .map(|(&letter, positions)| (letter, positions.as_slice()))
    }
}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Word {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
