//! Game error taxonomy
//!
//! Recoverable errors raised by session and engine operations. Dictionary
//! construction failures (the fatal configuration class) live in
//! [`crate::dictionary::DictionaryError`]; everything here leaves engine
//! invariants fully intact.

use crate::core::WordError;
use std::fmt;

/// Classification tag attached to every game error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// A word was rejected; retry with different input
    Validation,
    /// An operation was invoked in the wrong state; guard before calling
    State,
}

/// Error type for session and engine operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// An operation requiring a session was called before `initialize`
    NotInitialized,
    /// An attempt was submitted after the game was already won
    GameOver,
    /// The word is not well-formed (wrong length or characters)
    InvalidWord(WordError),
    /// The word is well-formed but not a dictionary member
    NotInDictionary(String),
    /// The attempt is identical to the current word
    SameAsCurrent(String),
    /// The attempt changes zero or more than one letter
    NotSingleLetterChange(String),
    /// A game cannot start with identical start and target words
    SameStartAndTarget,
    /// A random pair was requested from a dictionary with fewer than two words
    DictionaryTooSmall(usize),
}

impl GameError {
    /// The taxonomy class of this error
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::InvalidWord(_)
            | Self::NotInDictionary(_)
            | Self::SameAsCurrent(_)
            | Self::NotSingleLetterChange(_)
            | Self::SameStartAndTarget => ErrorClass::Validation,
            Self::NotInitialized | Self::GameOver | Self::DictionaryTooSmall(_) => {
                ErrorClass::State
            }
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "Game not initialized"),
            Self::GameOver => write!(f, "Game already won; reset to play again"),
            Self::InvalidWord(e) => write!(f, "{e}"),
            Self::NotInDictionary(word) => write!(f, "Not a dictionary word: {word}"),
            Self::SameAsCurrent(word) => write!(f, "Word is unchanged: {word}"),
            Self::NotSingleLetterChange(word) => {
                write!(f, "Must change exactly one letter: {word}")
            }
            Self::SameStartAndTarget => write!(f, "Start and target words must differ"),
            Self::DictionaryTooSmall(n) => {
                write!(f, "Need at least 2 dictionary words for a pair, have {n}")
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WordError> for GameError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_classified() {
        assert_eq!(
            GameError::NotInDictionary("zzzz".into()).class(),
            ErrorClass::Validation
        );
        assert_eq!(
            GameError::SameAsCurrent("cold".into()).class(),
            ErrorClass::Validation
        );
        assert_eq!(GameError::SameStartAndTarget.class(), ErrorClass::Validation);
    }

    #[test]
    fn state_errors_are_classified() {
        assert_eq!(GameError::NotInitialized.class(), ErrorClass::State);
        assert_eq!(GameError::GameOver.class(), ErrorClass::State);
        assert_eq!(GameError::DictionaryTooSmall(1).class(), ErrorClass::State);
    }

    #[test]
    fn word_error_converts() {
        let err: GameError = WordError::InvalidLength(7).into();
        assert!(matches!(err, GameError::InvalidWord(_)));
        assert_eq!(err.class(), ErrorClass::Validation);
    }
}
