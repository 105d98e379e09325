//! Engine events
//!
//! Pull-style notifications: an event names what changed and subscribers
//! re-query the engine for details. Delivered through the engine's FIFO
//! event queue rather than an observer broadcast.

/// Kind of engine state change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The current word or path changed
    StateUpdate,
    /// A configuration flag was toggled
    ConfigChanged,
    /// A game was started or reset to its start word
    GameReset,
    /// The current word reached the target
    GameWon,
    /// An operation was rejected; the message is available via `last_error`
    Error,
}
