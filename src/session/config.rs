//! Session configuration.

use crate::board::DEFAULT_SEED;

/// Settings fixed when a session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Seed for the peg color source. Resets keep drawing from the same
    /// stream, so every reset re-rolls the colors.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { seed: DEFAULT_SEED }
    }
}
