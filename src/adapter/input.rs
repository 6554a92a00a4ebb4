//! Keyboard bindings.
//!
//! Two shortcuts are part of the game's contract: a reset key and a hint
//! key. The adapter maps raw key characters to [`KeyCommand`]s; the host
//! decides what a "key character" is (DOM `event.key`, terminal input, ...).

use serde::{Deserialize, Serialize};

/// A keyboard-triggered session command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyCommand {
    /// Start the game over.
    Reset,
    /// Briefly reveal a matchable pair.
    Hint,
}

/// Map a key character to its command, if it has one.
#[must_use]
pub fn command_for_key(key: char) -> Option<KeyCommand> {
    match key {
        'r' | 'R' => Some(KeyCommand::Reset),
        'h' | 'H' => Some(KeyCommand::Hint),
        _ => None,
    }
}
