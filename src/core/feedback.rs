//! Per-letter feedback scoring
//!
//! Scores a guess against a target word, classifying each position as
//! correct-position, present-in-word or not-present. Duplicate letters are
//! handled with a two-pass multiset algorithm: a letter can only be credited
//! as many times as it occurs in the target.

use super::{WORD_LEN, Word};

/// Per-position classification of a guess letter against the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterStatus {
    /// Letter matches the target at this position
    CorrectPosition,
    /// Letter occurs elsewhere in the target (and is not already consumed)
    PresentInWord,
    /// Letter does not occur in the remaining target letters
    NotPresent,
}

/// Score `guess` against `target`, one status per position
///
/// # Algorithm
/// 1. First pass: mark exact matches and null out the consumed target slot so
///    it cannot be credited again.
/// 2. Second pass: for each non-exact position, scan the remaining target
///    slots left to right for the guessed letter; consume the first hit.
///
/// The first-remaining-slot convention guarantees that the combined count of
/// `CorrectPosition` and `PresentInWord` for a letter never exceeds that
/// letter's occurrence count in the target.
///
/// This is a pure function of two words: it can score any guess, not only
/// the next attempt in a session.
///
/// # Examples
/// ```
/// use word_ladder::core::{CharacterStatus, Word, score};
///
/// let guess = Word::new("tent").unwrap();
/// let target = Word::new("test").unwrap();
/// let statuses = score(&guess, &target);
///
/// assert_eq!(statuses[0], CharacterStatus::CorrectPosition);
/// assert_eq!(statuses[1], CharacterStatus::CorrectPosition);
/// assert_eq!(statuses[2], CharacterStatus::NotPresent);
/// assert_eq!(statuses[3], CharacterStatus::CorrectPosition);
/// ```
#[must_use]
pub fn score(guess: &Word, target: &Word) -> [CharacterStatus; WORD_LEN] {
    let mut statuses = [CharacterStatus::NotPresent; WORD_LEN];

    // Remaining target letters; None marks a consumed slot
    let mut remaining: [Option<u8>; WORD_LEN] = target.chars().map(Some);

    // First pass: exact position matches
    for i in 0..WORD_LEN {
        if guess.char_at(i) == target.char_at(i) {
            statuses[i] = CharacterStatus::CorrectPosition;
            remaining[i] = None;
        }
    }

    // Second pass: present-elsewhere, consuming the first remaining slot
    for i in 0..WORD_LEN {
        if statuses[i] == CharacterStatus::CorrectPosition {
            continue;
        }

        let letter = guess.char_at(i);
        if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(letter)) {
            statuses[i] = CharacterStatus::PresentInWord;
            *slot = None;
        }
    }

    statuses
}
