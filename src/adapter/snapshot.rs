//! Read-only board view for renderers.
//!
//! A renderer never reaches into [`Board`](crate::rules::Board) directly; it
//! captures a [`BoardSnapshot`] and draws that. Faces are only present for
//! face-up cards, so a renderer (or anything serializing the snapshot, e.g.
//! across a worker boundary) cannot leak hidden cards.

use serde::{Deserialize, Serialize};

use crate::cards::{CardFace, SlotId};
use crate::core::Millis;
use crate::session::GameSession;

/// One board slot as the renderer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotView {
    /// Board position.
    pub slot: SlotId,

    /// The face, present only while the card is face-up.
    pub face: Option<CardFace>,

    /// Is this card's pair found?
    pub matched: bool,
}

/// Complete display state for one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// All slots in board order.
    pub slots: Vec<SlotView>,

    /// Completed two-card turns.
    pub moves: u32,

    /// Pairs found.
    pub matches: u32,

    /// Total pairs.
    pub pair_count: u32,

    /// Completion percentage for the progress bar.
    pub progress_pct: u32,

    /// Whole seconds of play for the timer display.
    pub elapsed_secs: u64,

    /// Is the board refusing input right now?
    pub locked: bool,

    /// Is the game over?
    pub won: bool,
}

impl BoardSnapshot {
    /// Capture the session's display state at `now`.
    #[must_use]
    pub fn capture(session: &GameSession, now: Millis) -> Self {
        let board = session.board();
        let registry = session.registry();

        let slots = board
            .cards()
            .iter()
            .map(|card| SlotView {
                slot: card.slot,
                face: card
                    .visibility
                    .is_face_up()
                    .then(|| registry.get_unchecked(card.card_id).face.clone()),
                matched: card.is_matched(),
            })
            .collect();

        Self {
            slots,
            moves: board.move_count(),
            matches: board.match_count(),
            pair_count: board.pair_count(),
            progress_pct: board.progress_pct(),
            elapsed_secs: session.elapsed_secs(now),
            locked: board.is_locked(),
            won: board.is_won(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matching_slots(session: &GameSession) -> (SlotId, SlotId) {
        let key = session.board().cards()[0].pair_key;
        let slots: Vec<SlotId> = session
            .board()
            .cards()
            .iter()
            .filter(|c| c.pair_key == key)
            .map(|c| c.slot)
            .collect();
        (slots[0], slots[1])
    }

    #[test]
    fn test_fresh_snapshot_hides_all_faces() {
        let session = GameSession::new(42);
        let snapshot = BoardSnapshot::capture(&session, Millis::new(0));

        assert_eq!(snapshot.slots.len(), 24);
        assert!(snapshot.slots.iter().all(|s| s.face.is_none()));
        assert!(snapshot.slots.iter().all(|s| !s.matched));
        assert_eq!(snapshot.moves, 0);
        assert_eq!(snapshot.progress_pct, 0);
        assert!(!snapshot.won);
    }

    #[test]
    fn test_revealed_card_shows_face() {
        let mut session = GameSession::new(42);
        session.select_card(SlotId::new(3), Millis::new(0));

        let snapshot = BoardSnapshot::capture(&session, Millis::new(0));

        assert!(snapshot.slots[3].face.is_some());
        assert!(!snapshot.slots[3].matched);
        assert_eq!(
            snapshot.slots.iter().filter(|s| s.face.is_some()).count(),
            1
        );
    }

    #[test]
    fn test_matched_pair_in_snapshot() {
        let mut session = GameSession::new(42);
        let (a, b) = matching_slots(&session);

        session.select_card(a, Millis::new(0));
        session.select_card(b, Millis::new(0));

        let snapshot = BoardSnapshot::capture(&session, Millis::new(0));

        assert!(snapshot.slots[a.index()].matched);
        assert!(snapshot.slots[b.index()].matched);
        assert_eq!(snapshot.matches, 1);
        assert_eq!(snapshot.progress_pct, 8);
    }

    #[test]
    fn test_elapsed_in_snapshot() {
        let mut session = GameSession::new(42);
        session.select_card(SlotId::new(0), Millis::new(1000));

        let snapshot = BoardSnapshot::capture(&session, Millis::new(6400));
        assert_eq!(snapshot.elapsed_secs, 5);
    }

    #[test]
    fn test_snapshot_serialization() {
        let session = GameSession::new(42);
        let snapshot = BoardSnapshot::capture(&session, Millis::new(0));

        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: BoardSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(snapshot, deserialized);
    }
}
