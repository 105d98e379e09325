//! Core domain types for the word-ladder engine
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod feedback;
mod word;

pub use feedback::{CharacterStatus, score};
pub use word::{WORD_LEN, Word, WordError};
