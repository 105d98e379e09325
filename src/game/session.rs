//! Game session state machine
//!
//! A session owns the start, target and current words plus the transformation
//! path, and validates attempts against the dictionary and the single-letter
//! adjacency rule. Mutating operations either fully succeed or leave the
//! session untouched.
//!
//! Invariants held between calls:
//! - `path[0] == start` and `path[last] == current`
//! - adjacent path entries differ in exactly one character position
//! - `attempt_count() == path.len() - 1`

use crate::core::{CharacterStatus, WORD_LEN, Word, score};
use crate::dictionary::Dictionary;
use crate::solver;

use super::GameError;

/// Result of a successfully applied attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The attempt was applied; the target is not yet reached
    Advanced,
    /// The attempt was applied and reached the target
    Won,
}

/// A game in progress: start, target, current word and the path so far
///
/// The optimal solution ladder is computed once at construction, since the
/// start/target pair is fixed for the session's lifetime.
#[derive(Debug, Clone)]
pub struct GameSession {
    start: Word,
    target: Word,
    current: Word,
    path: Vec<Word>,
    solution: Vec<Word>,
}

impl GameSession {
    /// Start a new session
    ///
    /// # Errors
    /// Returns a `Validation`-class error when either word is missing from
    /// the dictionary or the two words are equal.
    pub fn new(start: Word, target: Word, dictionary: &Dictionary) -> Result<Self, GameError> {
        if !dictionary.contains(&start) {
            return Err(GameError::NotInDictionary(start.text().to_string()));
        }
        if !dictionary.contains(&target) {
            return Err(GameError::NotInDictionary(target.text().to_string()));
        }
        if start == target {
            return Err(GameError::SameStartAndTarget);
        }

        let solution = solver::shortest_path(&start, &target, dictionary);

        Ok(Self {
            current: start.clone(),
            path: vec![start.clone()],
            start,
            target,
            solution,
        })
    }

    /// Validate and apply an attempt
    ///
    /// The attempt must be a dictionary word that differs from the current
    /// word in exactly one position. On success the word is appended to the
    /// path and becomes current; reaching the target yields
    /// [`AttemptOutcome::Won`].
    ///
    /// # Errors
    /// Rejection leaves `current`, `path` and the attempt count unchanged:
    /// - `GameOver` if the session is already won
    /// - `NotInDictionary` for unknown words
    /// - `SameAsCurrent` when nothing changed
    /// - `NotSingleLetterChange` when more than one letter changed
    pub fn submit_attempt(
        &mut self,
        word: &Word,
        dictionary: &Dictionary,
    ) -> Result<AttemptOutcome, GameError> {
        if self.is_won() {
            return Err(GameError::GameOver);
        }
        if !dictionary.contains(word) {
            return Err(GameError::NotInDictionary(word.text().to_string()));
        }
        if *word == self.current {
            return Err(GameError::SameAsCurrent(word.text().to_string()));
        }
        if !self.current.is_single_letter_change(word) {
            return Err(GameError::NotSingleLetterChange(word.text().to_string()));
        }

        self.path.push(word.clone());
        self.current = word.clone();

        if self.is_won() {
            Ok(AttemptOutcome::Won)
        } else {
            Ok(AttemptOutcome::Advanced)
        }
    }

    /// Clear all progress, restoring the path to `[start]`
    pub fn reset(&mut self) {
        self.current = self.start.clone();
        self.path.clear();
        self.path.push(self.start.clone());
    }

    /// The word the game started from
    #[inline]
    #[must_use]
    pub const fn start_word(&self) -> &Word {
        &self.start
    }

    /// The word the player is trying to reach
    #[inline]
    #[must_use]
    pub const fn target_word(&self) -> &Word {
        &self.target
    }

    /// The word the player is currently on
    #[inline]
    #[must_use]
    pub const fn current_word(&self) -> &Word {
        &self.current
    }

    /// Number of successful attempts so far
    #[inline]
    #[must_use]
    pub fn attempt_count(&self) -> usize {
        self.path.len() - 1
    }

    /// The transformation path from start to current, inclusive
    #[must_use]
    pub fn path(&self) -> &[Word] {
        &self.path
    }

    /// The precomputed minimal ladder from start to target
    ///
    /// Empty when the target is unreachable; manual play toward the target
    /// is still permitted in that case.
    #[must_use]
    pub fn solution_path(&self) -> &[Word] {
        &self.solution
    }

    /// Whether the current word equals the target
    #[inline]
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.current == self.target
    }

    /// Score any guess against this session's target
    ///
    /// Pure query; the guess does not have to be the next legal attempt.
    #[must_use]
    pub fn feedback(&self, word: &Word) -> [CharacterStatus; WORD_LEN] {
        score(word, &self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CharacterStatus::CorrectPosition;

    fn dict(words: &[&str]) -> Dictionary {
        Dictionary::from_words(words.iter().map(|&s| Word::new(s).unwrap())).unwrap()
    }

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn session(start: &str, target: &str, dictionary: &Dictionary) -> GameSession {
        GameSession::new(w(start), w(target), dictionary).unwrap()
    }

    #[test]
    fn new_session_postconditions() {
        let d = dict(&["cold", "warm"]);
        let s = session("cold", "warm", &d);

        assert_eq!(s.start_word(), &w("cold"));
        assert_eq!(s.current_word(), &w("cold"));
        assert_eq!(s.target_word(), &w("warm"));
        assert_eq!(s.path(), [w("cold")]);
        assert_eq!(s.attempt_count(), 0);
        assert!(!s.is_won());
    }

    #[test]
    fn new_session_rejects_non_dictionary_words() {
        let d = dict(&["cold", "warm"]);
        assert!(matches!(
            GameSession::new(w("zzzz"), w("warm"), &d),
            Err(GameError::NotInDictionary(_))
        ));
        assert!(matches!(
            GameSession::new(w("cold"), w("zzzz"), &d),
            Err(GameError::NotInDictionary(_))
        ));
    }

    #[test]
    fn new_session_rejects_equal_words() {
        let d = dict(&["cold", "warm"]);
        assert!(matches!(
            GameSession::new(w("cold"), w("cold"), &d),
            Err(GameError::SameStartAndTarget)
        ));
    }

    #[test]
    fn attempt_advances_path() {
        let d = dict(&["cold", "cord", "card", "ward", "warm"]);
        let mut s = session("cold", "warm", &d);

        assert_eq!(s.submit_attempt(&w("cord"), &d), Ok(AttemptOutcome::Advanced));
        assert_eq!(s.current_word(), &w("cord"));
        assert_eq!(s.attempt_count(), 1);

        assert_eq!(s.submit_attempt(&w("card"), &d), Ok(AttemptOutcome::Advanced));
        assert_eq!(s.path(), [w("cold"), w("cord"), w("card")]);
        assert_eq!(s.attempt_count(), 2);
    }

    #[test]
    fn attempt_reaching_target_wins() {
        let d = dict(&["test", "tent", "bear"]);
        let mut s = session("test", "tent", &d);

        assert_eq!(s.submit_attempt(&w("tent"), &d), Ok(AttemptOutcome::Won));
        assert!(s.is_won());
        assert_eq!(s.attempt_count(), 1);
    }

    #[test]
    fn rejection_leaves_state_unchanged() {
        let d = dict(&["cold", "cord", "ward", "warm"]);
        let mut s = session("cold", "warm", &d);

        // Not in dictionary
        assert!(matches!(
            s.submit_attempt(&w("gold"), &d),
            Err(GameError::NotInDictionary(_))
        ));
        // Identical to current
        assert!(matches!(
            s.submit_attempt(&w("cold"), &d),
            Err(GameError::SameAsCurrent(_))
        ));
        // More than one letter changed
        assert!(matches!(
            s.submit_attempt(&w("ward"), &d),
            Err(GameError::NotSingleLetterChange(_))
        ));

        assert_eq!(s.current_word(), &w("cold"));
        assert_eq!(s.path(), [w("cold")]);
        assert_eq!(s.attempt_count(), 0);
    }

    #[test]
    fn attempts_rejected_after_win() {
        let d = dict(&["test", "tent", "tend"]);
        let mut s = session("test", "tent", &d);

        s.submit_attempt(&w("tent"), &d).unwrap();
        assert!(matches!(
            s.submit_attempt(&w("tend"), &d),
            Err(GameError::GameOver)
        ));
        assert_eq!(s.path(), [w("test"), w("tent")]);
    }

    #[test]
    fn reset_restores_initial_state() {
        let d = dict(&["cold", "cord", "card", "ward", "warm"]);
        let mut s = session("cold", "warm", &d);

        s.submit_attempt(&w("cord"), &d).unwrap();
        s.submit_attempt(&w("card"), &d).unwrap();
        s.reset();

        assert_eq!(s.current_word(), &w("cold"));
        assert_eq!(s.path(), [w("cold")]);
        assert_eq!(s.attempt_count(), 0);
        assert!(!s.is_won());
    }

    #[test]
    fn reset_after_win_allows_replay() {
        let d = dict(&["test", "tent", "bear"]);
        let mut s = session("test", "tent", &d);

        s.submit_attempt(&w("tent"), &d).unwrap();
        assert!(s.is_won());

        s.reset();
        assert!(!s.is_won());
        assert_eq!(s.submit_attempt(&w("tent"), &d), Ok(AttemptOutcome::Won));
    }

    #[test]
    fn solution_is_cached_at_construction() {
        let d = dict(&["cold", "cord", "card", "ward", "warm"]);
        let s = session("cold", "warm", &d);

        let texts: Vec<&str> = s.solution_path().iter().map(Word::text).collect();
        assert_eq!(texts, ["cold", "cord", "card", "ward", "warm"]);
    }

    #[test]
    fn unreachable_target_still_playable() {
        let d = dict(&["star", "stay", "stir", "sear", "moon"]);
        let mut s = session("star", "moon", &d);

        assert!(s.solution_path().is_empty());
        // Free-form play toward the target is still allowed
        assert_eq!(s.submit_attempt(&w("stay"), &d), Ok(AttemptOutcome::Advanced));
    }

    #[test]
    fn feedback_scores_against_target() {
        let d = dict(&["test", "tent"]);
        let s = session("test", "tent", &d);

        assert_eq!(s.feedback(&w("tent")), [CorrectPosition; WORD_LEN]);
    }

    #[test]
    fn path_invariants_hold_after_attempts() {
        let d = dict(&["cold", "cord", "card", "ward", "warm"]);
        let mut s = session("cold", "warm", &d);

        for step in ["cord", "card", "ward", "warm"] {
            s.submit_attempt(&w(step), &d).unwrap();

            assert_eq!(s.path()[0], *s.start_word());
            assert_eq!(s.path().last().unwrap(), s.current_word());
            assert_eq!(s.attempt_count(), s.path().len() - 1);
            for pair in s.path().windows(2) {
                assert!(pair[0].is_single_letter_change(&pair[1]));
            }
        }
        assert!(s.is_won());
    }
}
