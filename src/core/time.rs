//! Session time model.
//!
//! The core never reads a wall clock. Every operation that depends on time
//! takes an explicit [`Millis`] argument supplied by the caller (the
//! presentation layer, a test, a benchmark). This keeps the whole game core
//! deterministic: the same inputs at the same timestamps produce the same
//! state and the same events.

use serde::{Deserialize, Serialize};

/// Milliseconds since some session-relative origin.
///
/// The origin is whatever the caller's clock says it is - typically "process
/// start" or "page load". The core only ever compares and adds these values,
/// so the origin never matters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Millis(pub u64);

impl Millis {
    /// Create a timestamp from a raw millisecond count.
    #[must_use]
    pub const fn new(ms: u64) -> Self {
        Self(ms)
    }

    /// Get the raw millisecond value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// This timestamp advanced by `ms` milliseconds.
    #[must_use]
    pub const fn plus(self, ms: u64) -> Self {
        Self(self.0 + ms)
    }

    /// Whole seconds elapsed since `earlier`.
    ///
    /// Saturates at zero if `earlier` is in the future (a caller handing us
    /// out-of-order timestamps gets a frozen display, not a panic).
    #[must_use]
    pub const fn seconds_since(self, earlier: Millis) -> u64 {
        self.0.saturating_sub(earlier.0) / 1000
    }
}

impl std::fmt::Display for Millis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
