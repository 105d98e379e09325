//! Game configuration flags
//!
//! Three independent booleans with no cross-invariants. The engine reads
//! `show_path` to decide whether the transformation path is exposed; the
//! other two are consumed by presentation collaborators.

/// Configuration flag bag for a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    show_errors: bool,
    show_path: bool,
    use_random_words: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            show_errors: true,
            show_path: false,
            use_random_words: false,
        }
    }
}

impl GameConfig {
    /// Create a configuration with explicit flag values
    #[must_use]
    pub const fn new(show_errors: bool, show_path: bool, use_random_words: bool) -> Self {
        Self {
            show_errors,
            show_path,
            use_random_words,
        }
    }

    /// Whether rejection messages should be surfaced to the player
    #[inline]
    #[must_use]
    pub const fn show_errors(&self) -> bool {
        self.show_errors
    }

    pub const fn set_show_errors(&mut self, show: bool) {
        self.show_errors = show;
    }

    /// Whether the transformation path is exposed to callers
    #[inline]
    #[must_use]
    pub const fn show_path(&self) -> bool {
        self.show_path
    }

    pub const fn set_show_path(&mut self, show: bool) {
        self.show_path = show;
    }

    /// Whether new games should draw a random start/target pair
    #[inline]
    #[must_use]
    pub const fn use_random_words(&self) -> bool {
        self.use_random_words
    }

    pub const fn set_use_random_words(&mut self, enable: bool) {
        self.use_random_words = enable;
    }
}
