//! Word Ladder
//!
//! A word-transformation puzzle engine: convert a start word into a target
//! word through successive single-letter substitutions, each intermediate
//! word a valid dictionary word.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::dictionary::Dictionary;
//! use word_ladder::game::{AttemptOutcome, Engine};
//!
//! let mut engine = Engine::new(Dictionary::bundled());
//!
//! engine.initialize("cold", "warm").unwrap();
//! assert_eq!(engine.submit_attempt("cord"), Ok(AttemptOutcome::Advanced));
//!
//! // The shortest ladder was computed when the game started
//! assert!(!engine.solution_path().is_empty());
//! ```

// Core domain types
pub mod core;

// Word list loading and membership
pub mod dictionary;

// Session state machine and engine facade
pub mod game;

// Terminal output formatting
pub mod output;

// Shortest-ladder search
pub mod solver;
