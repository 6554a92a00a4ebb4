//! Game configuration.
//!
//! The board and session are configured at startup via [`GameConfig`] rather
//! than hardcoded constants. Defaults match the classic 4x6 concentration
//! layout: 12 pairs, a 1 second mismatch display, a 1.5 second hint reveal.

use serde::{Deserialize, Serialize};

/// Configuration for one game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of card pairs on the board.
    pub pair_count: u32,

    /// How long a mismatched pair stays face-up before flipping back,
    /// in milliseconds.
    pub mismatch_delay_ms: u64,

    /// How long a hinted pair stays revealed, in milliseconds.
    pub hint_reveal_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pair_count: 12,
            mismatch_delay_ms: 1000,
            hint_reveal_ms: 1500,
        }
    }
}

impl GameConfig {
    /// Create a config with the default delays and the given pair count.
    #[must_use]
    pub fn with_pair_count(pair_count: u32) -> Self {
        Self {
            pair_count,
            ..Self::default()
        }
    }

    /// Total number of card instances on the board.
    #[must_use]
    pub const fn card_count(&self) -> u32 {
        self.pair_count * 2
    }
}
