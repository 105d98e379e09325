//! Engine facade
//!
//! Owns the dictionary, configuration, the active session and the event
//! queue, and exposes the full query/command surface consumed by
//! presentation collaborators. All operations run to completion on the
//! caller's thread; exclusive `&mut self` access keeps attempts processed
//! strictly in submission order.

use crate::core::{CharacterStatus, WORD_LEN, Word};
use crate::dictionary::Dictionary;
use rand::Rng;
use std::collections::VecDeque;

use super::{AttemptOutcome, GameConfig, GameError, GameEvent, GameSession};

/// The word-ladder game engine
///
/// Lifecycle: construct once with a loaded dictionary, then `initialize`
/// a game, `submit_attempt` words, and `poll_event` for pull-style change
/// notifications.
#[derive(Debug)]
pub struct Engine {
    dictionary: Dictionary,
    config: GameConfig,
    session: Option<GameSession>,
    events: VecDeque<GameEvent>,
    last_error: Option<String>,
}

impl Engine {
    /// Create an engine around an already-loaded dictionary
    #[must_use]
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            config: GameConfig::default(),
            session: None,
            events: VecDeque::new(),
            last_error: None,
        }
    }

    /// Create an engine with explicit configuration
    #[must_use]
    pub fn with_config(dictionary: Dictionary, config: GameConfig) -> Self {
        Self {
            config,
            ..Self::new(dictionary)
        }
    }

    /// The shared read-only dictionary
    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Start a new game with the given start and target words
    ///
    /// On success the previous session (if any) is replaced and `GameReset`
    /// is emitted. On failure the previous session is untouched, the message
    /// is stored for `last_error` and `Error` is emitted; the caller may
    /// retry with different words.
    ///
    /// # Errors
    /// `Validation`-class errors for malformed words, non-dictionary words,
    /// or equal start and target.
    pub fn initialize(&mut self, start: &str, target: &str) -> Result<(), GameError> {
        let result = Word::new(start)
            .map_err(GameError::from)
            .and_then(|s| Ok((s, Word::new(target)?)))
            .and_then(|(s, t)| GameSession::new(s, t, &self.dictionary));

        match result {
            Ok(session) => {
                self.session = Some(session);
                self.events.push_back(GameEvent::GameReset);
                Ok(())
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                self.events.push_back(GameEvent::Error);
                Err(e)
            }
        }
    }

    /// Start a new game with a uniformly random distinct pair
    ///
    /// # Errors
    /// `DictionaryTooSmall` when the dictionary holds fewer than two words.
    pub fn initialize_random(&mut self, rng: &mut impl Rng) -> Result<(), GameError> {
        let (start, target) = self.random_pair_with(rng)?;
        self.initialize(start.text(), target.text())
    }

    /// Validate and apply an attempt against the active session
    ///
    /// Emits `StateUpdate` on success, plus `GameWon` when the attempt
    /// reaches the target. Rejections emit no event: the engine stores the
    /// message and the caller decides whether to surface it (the
    /// `show_errors` flag is a presentation concern).
    ///
    /// # Errors
    /// `NotInitialized` before the first `initialize`; otherwise the
    /// session's validation errors.
    pub fn submit_attempt(&mut self, word: &str) -> Result<AttemptOutcome, GameError> {
        let Some(session) = self.session.as_mut() else {
            let e = GameError::NotInitialized;
            self.last_error = Some(e.to_string());
            self.events.push_back(GameEvent::Error);
            return Err(e);
        };

        let attempt = Word::new(word).map_err(GameError::from);
        let outcome = attempt.and_then(|w| session.submit_attempt(&w, &self.dictionary));

        match outcome {
            Ok(outcome) => {
                self.events.push_back(GameEvent::StateUpdate);
                if outcome == AttemptOutcome::Won {
                    self.events.push_back(GameEvent::GameWon);
                }
                Ok(outcome)
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Reset the active session to its start word
    ///
    /// # Errors
    /// `NotInitialized` when no game has been started.
    pub fn reset(&mut self) -> Result<(), GameError> {
        let Some(session) = self.session.as_mut() else {
            let e = GameError::NotInitialized;
            self.last_error = Some(e.to_string());
            self.events.push_back(GameEvent::Error);
            return Err(e);
        };

        session.reset();
        self.events.push_back(GameEvent::GameReset);
        Ok(())
    }

    /// The start word of the active session
    #[must_use]
    pub fn start_word(&self) -> Option<&Word> {
        self.session.as_ref().map(GameSession::start_word)
    }

    /// The target word of the active session
    #[must_use]
    pub fn target_word(&self) -> Option<&Word> {
        self.session.as_ref().map(GameSession::target_word)
    }

    /// The current word of the active session
    #[must_use]
    pub fn current_word(&self) -> Option<&Word> {
        self.session.as_ref().map(GameSession::current_word)
    }

    /// Number of successful attempts in the active session, 0 before init
    #[must_use]
    pub fn attempt_count(&self) -> usize {
        self.session
            .as_ref()
            .map_or(0, GameSession::attempt_count)
    }

    /// Whether the active session has reached its target
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.session.as_ref().is_some_and(GameSession::is_won)
    }

    /// The transformation path so far
    ///
    /// `None` when no game is active or path display is disabled by
    /// configuration.
    #[must_use]
    pub fn path(&self) -> Option<&[Word]> {
        if !self.config.show_path() {
            return None;
        }
        self.session.as_ref().map(GameSession::path)
    }

    /// The precomputed minimal ladder for the active session
    ///
    /// Empty when no game is active or the target is unreachable.
    #[must_use]
    pub fn solution_path(&self) -> &[Word] {
        self.session
            .as_ref()
            .map_or(&[], GameSession::solution_path)
    }

    /// Score any guess against the active session's target
    ///
    /// # Errors
    /// `NotInitialized` before the first game, `InvalidWord` for malformed
    /// input.
    pub fn feedback(&self, word: &str) -> Result<[CharacterStatus; WORD_LEN], GameError> {
        let session = self.session.as_ref().ok_or(GameError::NotInitialized)?;
        let word = Word::new(word)?;
        Ok(session.feedback(&word))
    }

    /// Draw a uniformly random distinct word pair with the thread RNG
    ///
    /// # Errors
    /// `DictionaryTooSmall` when the dictionary holds fewer than two words.
    pub fn random_pair(&self) -> Result<(Word, Word), GameError> {
        self.random_pair_with(&mut rand::rng())
    }

    /// Draw a uniformly random distinct word pair with a caller-owned RNG
    ///
    /// # Errors
    /// `DictionaryTooSmall` when the dictionary holds fewer than two words.
    pub fn random_pair_with(&self, rng: &mut impl Rng) -> Result<(Word, Word), GameError> {
        let n = self.dictionary.len();
        self.dictionary
            .random_distinct_pair(rng)
            .map_err(|_| GameError::DictionaryTooSmall(n))
    }

    /// Current configuration flags
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn set_show_errors(&mut self, enabled: bool) {
        self.config.set_show_errors(enabled);
        self.events.push_back(GameEvent::ConfigChanged);
    }

    pub fn set_show_path(&mut self, enabled: bool) {
        self.config.set_show_path(enabled);
        self.events.push_back(GameEvent::ConfigChanged);
    }

    pub fn set_use_random_words(&mut self, enabled: bool) {
        self.config.set_use_random_words(enabled);
        self.events.push_back(GameEvent::ConfigChanged);
    }

    /// Message from the most recent rejected operation
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Pop the oldest pending event, FIFO
    pub fn poll_event(&mut self) -> Option<GameEvent> {
        self.events.pop_front()
    }
}
