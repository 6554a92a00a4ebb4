//! Feedback message strings.
//!
//! Cosmetic copy the renderer shows under the board. Match feedback is
//! picked at random so repeated matches don't read identically; everything
//! else is fixed.

use crate::core::GameRng;

/// Shown when a new game starts.
pub const START_FEEDBACK: &str = "Start matching our memories!";

/// Shown on a mismatch.
pub const MISMATCH_FEEDBACK: &str = "Not a match, try again!";

/// Shown while a hint pair is revealed.
pub const HINT_FEEDBACK: &str = "Here's a hint! Remember these two!";

/// Rotating messages for a successful match.
pub const MATCH_FEEDBACK: [&str; 6] = [
    "Perfect match! Just like us!",
    "You remember every detail!",
    "Our story in pictures!",
    "Another memory unlocked!",
    "That's our special moment!",
    "You know our story so well!",
];

/// Pick a match message.
#[must_use]
pub fn match_feedback(rng: &mut GameRng) -> &'static str {
    rng.choose(&MATCH_FEEDBACK).copied().unwrap_or(MATCH_FEEDBACK[0])
}
