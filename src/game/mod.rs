//! Game state machine and engine facade
//!
//! The session validates and applies attempts; the engine owns the
//! dictionary, configuration and event queue and exposes the surface
//! consumed by presentation collaborators.

mod config;
mod engine;
mod error;
mod event;
mod session;

pub use config::GameConfig;
pub use engine::Engine;
pub use error::{ErrorClass, GameError};
pub use event::GameEvent;
pub use session::{AttemptOutcome, GameSession};
