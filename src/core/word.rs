//! Word-ladder word representation
//!
//! A Word stores a fixed-length lowercase word as both text and a byte array
//! for cheap positional comparison.

use std::fmt;

/// Fixed word length for the whole crate
///
/// The reference domain uses four-letter ladders; every fixed-size buffer in
/// the engine is keyed off this constant.
pub const WORD_LEN: usize = 4;

/// A four-letter ladder word, normalized to lowercase
///
/// Equality, hashing and dictionary membership are all case-insensitive
/// because normalization happens once at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LEN} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly `WORD_LEN`
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("cold").unwrap();
    /// assert_eq!(word.text(), "cold");
    ///
    /// assert!(Word::new("toolong").is_err());
    /// assert!(Word::new("c0ld").is_err());
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length validation.
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.len() != WORD_LEN {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        // Convert to bytes - safe to unwrap as we validated the length
        let chars: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");

        Ok(Self { text, chars })
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
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if position >= `WORD_LEN`
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check whether `other` differs from this word in exactly one position
    ///
    /// This is the ladder adjacency rule. The mismatch count short-circuits
    /// once it exceeds one.
    #[must_use]
    pub fn is_single_letter_change(&self, other: &Self) -> bool {
        let mut diff = 0;
        for i in 0..WORD_LEN {
            if self.chars[i] != other.chars[i] {
                diff += 1;
                if diff > 1 {
                    return false;
                }
            }
        }
        diff == 1
    }

    /// Build a new word with the letter at `position` replaced by `letter`
    ///
    /// Used by the solver to enumerate neighbor candidates. The caller is
    /// responsible for checking dictionary membership of the result.
    ///
    /// # Panics
    /// Panics if position >= `WORD_LEN`
    #[must_use]
    pub fn with_char_at(&self, position: usize, letter: u8) -> Self {
        debug_assert!(letter.is_ascii_lowercase());
        let mut chars = self.chars;
        chars[position] = letter;
        let text = chars.iter().map(|&b| char::from(b)).collect();
        Self { text, chars }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
