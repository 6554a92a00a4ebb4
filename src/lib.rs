//! # memory-match
//!
//! The core of a memory-matching (concentration) game: a board of face-down
//! cards revealed two at a time, matched pairs staying face-up, with move
//! counting, timing, hints, and win detection.
//!
//! ## Design Principles
//!
//! 1. **Clock-free core**: Every time-dependent operation takes an explicit
//!    timestamp. Delayed effects (mismatch flip-back, hint expiry) are
//!    scheduled tasks the caller pumps, not timers the core owns.
//!
//! 2. **No error taxonomy**: Misclicks are ordinary input. Selecting a
//!    face-up card, clicking while locked, or acting after the win are all
//!    silent no-ops, never failures.
//!
//! 3. **Deterministic**: Same seed deals the same board and picks the same
//!    feedback. Useful for tests, replays, and daily-challenge style seeds.
//!
//! 4. **Rendering is a collaborator**: The core emits [`SessionEvent`]s and
//!    exposes read-only snapshots; a presentation layer subscribes and
//!    forwards selections and keyboard commands back in.
//!
//! ## Modules
//!
//! - `core`: Configuration, deterministic RNG, the session time model
//! - `cards`: Card definitions, registry, instances, shuffled deck building
//! - `rules`: The turn-resolution state machine
//! - `session`: Timer/win bookkeeping, delayed-task scheduling, events
//! - `adapter`: Presentation seam - snapshots, key bindings, feedback copy
//!
//! ## Example
//!
//! ```
//! use memory_match::core::Millis;
//! use memory_match::cards::SlotId;
//! use memory_match::rules::SelectOutcome;
//! use memory_match::session::GameSession;
//!
//! let mut session = GameSession::new(42);
//!
//! // Flip the first two cards
//! assert_eq!(
//!     session.select_card(SlotId::new(0), Millis::new(0)),
//!     SelectOutcome::Pending
//! );
//! let outcome = session.select_card(SlotId::new(1), Millis::new(350));
//! assert!(outcome.ends_turn());
//!
//! // Mismatches flip back once the scheduled task comes due
//! if matches!(outcome, SelectOutcome::Mismatch { .. }) {
//!     session.run_due_tasks(Millis::new(1350));
//! }
//! assert!(!session.board().is_locked());
//! ```

pub mod adapter;
pub mod cards;
pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, GameRngState, Millis};

pub use crate::cards::{
    build_shuffled_deck, CardDefinition, CardFace, CardId, CardInstance, CardRegistry, PairKey,
    SlotId, Visibility,
};

pub use crate::rules::{Board, SelectOutcome};

pub use crate::session::{
    EventSink, GameSession, GameSummary, Generation, NullSink, RecordingSink, ScheduledTask,
    SessionEvent, TaskKind, TaskQueue,
};

pub use crate::adapter::{command_for_key, BoardSnapshot, KeyCommand, SlotView};
