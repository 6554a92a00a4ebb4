//! Session events and the end-of-game summary.
//!
//! Events are plain serializable data describing what just happened; the
//! presentation layer reacts to them (flip animations, sparkles, the
//! completion screen). The core never renders anything itself.

use serde::{Deserialize, Serialize};

use crate::cards::{PairKey, SlotId};

/// Terminal statistics, frozen at the moment of the win.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Whole seconds from first flip to win.
    pub elapsed_secs: u64,

    /// Completed two-card turns.
    pub moves: u32,

    /// `round(pair_count / moves * 100)` - 100% means no wasted turn.
    pub accuracy_pct: u32,
}

impl GameSummary {
    /// Compute a summary.
    ///
    /// Winning requires at least `pair_count` moves, so `moves == 0` is
    /// unreachable through play; the guard keeps the computation total.
    #[must_use]
    pub fn compute(pair_count: u32, moves: u32, elapsed_secs: u64) -> Self {
        let accuracy_pct = if moves == 0 {
            0
        } else {
            ((f64::from(pair_count) / f64::from(moves)) * 100.0).round() as u32
        };

        Self {
            elapsed_secs,
            moves,
            accuracy_pct,
        }
    }
}

/// A notification from the session to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// First card of a turn flipped face-up.
    Pending {
        /// The selected slot.
        slot: SlotId,
    },

    /// A pair was found and stays face-up.
    Matched {
        /// The matched pair.
        pair: PairKey,
    },

    /// Two differing cards are face-up; they flip back when the scheduled
    /// resolution fires.
    Mismatch {
        /// Pair key of the first card of the turn.
        first: PairKey,
        /// Pair key of the second.
        second: PairKey,
    },

    /// A mismatched turn's cards flipped back down; input is unlocked.
    MismatchResolved {
        /// The slots that reverted to hidden.
        slots: (SlotId, SlotId),
    },

    /// A hint pair is temporarily revealed.
    HintShown {
        /// The hinted pair.
        pair: PairKey,
        /// Where its two cards sit.
        slots: (SlotId, SlotId),
    },

    /// The hint display window ended; the renderer re-hides the pair.
    HintExpired {
        /// The previously hinted pair.
        pair: PairKey,
        /// Where its two cards sit.
        slots: (SlotId, SlotId),
    },

    /// All pairs found. Emitted instead of `Matched` for the final pair.
    Won {
        /// Frozen terminal statistics.
        summary: GameSummary,
    },

    /// Advisory once-a-second display update while the game runs.
    TimerTick {
        /// Whole seconds since the first flip.
        elapsed_secs: u64,
    },
}

/// Receives session events. Implemented by the presentation layer.
pub trait EventSink {
    /// Called once per event, in emission order.
    fn on_event(&mut self, event: &SessionEvent);
}

/// Sink that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn on_event(&mut self, _event: &SessionEvent) {}
}

/// Sink that keeps every event, for tests and debugging.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    /// Events in emission order.
    pub events: Vec<SessionEvent>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for RecordingSink {
    fn on_event(&mut self, event: &SessionEvent) {
        self.events.push(event.clone());
    }
}
