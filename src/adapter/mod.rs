//! Presentation seam: the board snapshot renderers draw from, keyboard
//! bindings, and feedback copy.
//!
//! Nothing in here mutates game state. Rendering itself (cards, animations,
//! the progress bar) lives entirely in the host application; it consumes
//! [`SessionEvent`](crate::session::SessionEvent)s and snapshots and calls
//! back into [`GameSession`](crate::session::GameSession).

pub mod feedback;
pub mod input;
pub mod snapshot;

pub use input::{command_for_key, KeyCommand};
pub use snapshot::{BoardSnapshot, SlotView};
