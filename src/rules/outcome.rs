//! Selection outcomes.
//!
//! Every call into the turn machine returns a `SelectOutcome`. Invalid input
//! (clicking a matched card, clicking while the board is locked) is not an
//! error - it resolves to [`SelectOutcome::Ignored`] and changes nothing.

use serde::{Deserialize, Serialize};

use crate::cards::PairKey;

/// What a card selection did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// The selection had no effect: board locked, game already won, or the
    /// card was already face-up.
    Ignored,

    /// First card of a turn is now face-up; waiting for the second.
    Pending,

    /// Both cards matched and stay face-up.
    Matched(PairKey),

    /// The two cards differ. The board stays locked until
    /// `resolve_mismatch()` flips them back.
    Mismatch {
        /// Pair key of the first card flipped this turn.
        first: PairKey,
        /// Pair key of the second.
        second: PairKey,
    },

    /// The match completed the board. Takes precedence over `Matched`.
    Won(PairKey),
}

impl SelectOutcome {
    /// Did the selection change anything?
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, SelectOutcome::Ignored)
    }

    /// Did this selection complete a two-card turn?
    #[must_use]
    pub fn ends_turn(&self) -> bool {
        matches!(
            self,
            SelectOutcome::Matched(_) | SelectOutcome::Mismatch { .. } | SelectOutcome::Won(_)
        )
    }

    /// Did this selection win the game?
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, SelectOutcome::Won(_))
    }
}
