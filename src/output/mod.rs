//! Terminal output formatting
//!
//! Rendering helpers for the CLI front end. The engine itself never prints.

use crate::core::{CharacterStatus, WORD_LEN, Word};
use colored::Colorize;

/// Render a guess with per-letter feedback coloring
///
/// Correct-position letters are green, present-elsewhere letters yellow,
/// absent letters dimmed.
#[must_use]
pub fn format_feedback(word: &Word, statuses: &[CharacterStatus; WORD_LEN]) -> String {
    word.text()
        .chars()
        .zip(statuses)
        .map(|(c, status)| {
            let letter = c.to_uppercase().to_string();
            match status {
                CharacterStatus::CorrectPosition => letter.green().bold().to_string(),
                CharacterStatus::PresentInWord => letter.yellow().to_string(),
                CharacterStatus::NotPresent => letter.dimmed().to_string(),
            }
        })
        .collect()
}

/// Render a ladder as an arrow-joined line
#[must_use]
pub fn format_path(path: &[Word]) -> String {
    path.iter()
        .map(Word::text)
        .collect::<Vec<_>>()
        .join(" -> ")
}
