//! The turn-resolution state machine.
//!
//! `Board` owns the card instances and the per-turn state: which cards are
//! pending, whether input is locked, how many moves and matches have
//! happened. It is deliberately clock-free - the mismatch flip-back is a
//! separate operation, [`Board::resolve_mismatch`], which the session
//! invokes when its scheduled task comes due.
//!
//! ## State machine
//!
//! ```text
//!            select (1st)            select (2nd, equal keys)
//!  idle ----------------> one-up ----------------------------> idle (+match)
//!                            |
//!                            | select (2nd, differing keys)
//!                            v
//!                         locked ---- resolve_mismatch ----> idle
//! ```
//!
//! Everything invalid (selecting face-up cards, selecting while locked,
//! selecting after the win) is a silent no-op: misclicks are ordinary input
//! here, not exceptional conditions.

use smallvec::SmallVec;
use tracing::debug;

use crate::cards::{build_shuffled_deck, CardInstance, CardRegistry, SlotId, Visibility};
use crate::core::GameRng;

use super::outcome::SelectOutcome;

/// The playing board and turn state.
#[derive(Clone, Debug)]
pub struct Board {
    /// Card instances in slot order.
    cards: Vec<CardInstance>,

    /// Face-up, unresolved cards of the current turn. Never exceeds two.
    pending: SmallVec<[SlotId; 2]>,

    /// Completed two-card turns.
    move_count: u32,

    /// Pairs found so far.
    match_count: u32,

    /// Total pairs on the board.
    pair_count: u32,

    /// Has the first card of the session been flipped?
    started: bool,

    /// Are all pairs found?
    won: bool,

    /// Selections rejected while a mismatched turn awaits resolution.
    input_locked: bool,
}

impl Board {
    /// Deal a fresh board from the registry.
    #[must_use]
    pub fn deal(registry: &CardRegistry, rng: &mut GameRng) -> Self {
        let cards = build_shuffled_deck(registry, rng);
        let pair_count = (cards.len() / 2) as u32;

        Self {
            cards,
            pending: SmallVec::new(),
            move_count: 0,
            match_count: 0,
            pair_count,
            started: false,
            won: false,
            input_locked: false,
        }
    }

    /// Select a card.
    ///
    /// Rejections (locked board, finished game, unknown slot, card already
    /// face-up) return [`SelectOutcome::Ignored`] and change nothing. A
    /// second accepted selection completes the turn: the move counter
    /// increments once and the pair keys are compared.
    pub fn select(&mut self, slot: SlotId) -> SelectOutcome {
        if self.input_locked || self.won {
            return SelectOutcome::Ignored;
        }
        let Some(card) = self.cards.get(slot.index()) else {
            return SelectOutcome::Ignored;
        };
        if card.visibility != Visibility::Hidden {
            return SelectOutcome::Ignored;
        }

        self.started = true;
        self.cards[slot.index()].visibility = Visibility::Revealed;
        self.pending.push(slot);

        if self.pending.len() < 2 {
            return SelectOutcome::Pending;
        }

        // Turn complete: one move, win or lose.
        self.move_count += 1;
        self.input_locked = true;

        let first = self.pending[0];
        let second = self.pending[1];
        let first_key = self.cards[first.index()].pair_key;
        let second_key = self.cards[second.index()].pair_key;

        let outcome = if first_key == second_key {
            self.cards[first.index()].visibility = Visibility::Matched;
            self.cards[second.index()].visibility = Visibility::Matched;
            self.match_count += 1;
            self.pending.clear();
            self.input_locked = false;

            if self.match_count == self.pair_count {
                self.won = true;
                SelectOutcome::Won(first_key)
            } else {
                SelectOutcome::Matched(first_key)
            }
        } else {
            // Board stays locked until resolve_mismatch().
            SelectOutcome::Mismatch {
                first: first_key,
                second: second_key,
            }
        };

        debug!(
            moves = self.move_count,
            matches = self.match_count,
            ?outcome,
            "turn resolved"
        );
        debug_assert!(self.pending.len() <= 2);
        debug_assert_eq!(self.input_locked, self.pending.len() == 2);

        outcome
    }

    /// Flip a mismatched turn's cards back down and unlock the board.
    ///
    /// Returns the two slots that reverted, or `None` if no mismatch was
    /// pending (in which case nothing changes).
    pub fn resolve_mismatch(&mut self) -> Option<(SlotId, SlotId)> {
        if !self.input_locked || self.pending.len() != 2 {
            return None;
        }

        let first = self.pending[0];
        let second = self.pending[1];
        self.cards[first.index()].visibility = Visibility::Hidden;
        self.cards[second.index()].visibility = Visibility::Hidden;
        self.pending.clear();
        self.input_locked = false;

        debug!(%first, %second, "mismatch resolved");
        Some((first, second))
    }

    /// Find a hintable pair: the first two not-yet-matched cards sharing a
    /// pair key, in board order.
    ///
    /// Purely advisory - no counters, no pending state, no lock are touched.
    /// Returns `None` while the board is locked or after the win.
    #[must_use]
    pub fn hint(&self) -> Option<(SlotId, SlotId)> {
        if self.input_locked || self.won {
            return None;
        }

        let first = self.cards.iter().find(|c| !c.is_matched())?;
        let partner = self
            .cards
            .iter()
            .find(|c| c.slot != first.slot && c.pair_key == first.pair_key && !c.is_matched())?;

        Some((first.slot, partner.slot))
    }

    /// Replace the board wholesale: fresh shuffle, counters and flags back
    /// to their initial values.
    pub fn reset(&mut self, registry: &CardRegistry, rng: &mut GameRng) {
        *self = Board::deal(registry, rng);
    }

    // === Accessors ===

    /// Completed two-card turns.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Pairs found so far.
    #[must_use]
    pub fn match_count(&self) -> u32 {
        self.match_count
    }

    /// Total pairs on this board.
    #[must_use]
    pub fn pair_count(&self) -> u32 {
        self.pair_count
    }

    /// Has any card been flipped since the last reset?
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Are all pairs found?
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Is the board refusing selections while a mismatch is displayed?
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.input_locked
    }

    /// Slots currently face-up and unresolved, in selection order.
    #[must_use]
    pub fn pending_slots(&self) -> &[SlotId] {
        &self.pending
    }

    /// All card instances in slot order.
    #[must_use]
    pub fn cards(&self) -> &[CardInstance] {
        &self.cards
    }

    /// The card at a slot, if the slot exists.
    #[must_use]
    pub fn card(&self, slot: SlotId) -> Option<&CardInstance> {
        self.cards.get(slot.index())
    }

    /// Completion percentage, rounded to the nearest whole percent.
    #[must_use]
    pub fn progress_pct(&self) -> u32 {
        if self.pair_count == 0 {
            return 0;
        }
        (self.match_count * 100 + self.pair_count / 2) / self.pair_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::PairKey;

    fn test_board() -> Board {
        let registry = CardRegistry::standard();
        let mut rng = GameRng::new(42);
        Board::deal(&registry, &mut rng)
    }

    /// Slots of both cards of every pair, keyed by pair key, in board order.
    fn pair_slots(board: &Board, key: PairKey) -> (SlotId, SlotId) {
        let slots: Vec<SlotId> = board
            .cards()
            .iter()
            .filter(|c| c.pair_key == key)
            .map(|c| c.slot)
            .collect();
        (slots[0], slots[1])
    }

    /// Two slots holding cards of different pairs.
    fn mismatched_slots(board: &Board) -> (SlotId, SlotId) {
        let first = &board.cards()[0];
        let other = board
            .cards()
            .iter()
            .find(|c| c.pair_key != first.pair_key)
            .unwrap();
        (first.slot, other.slot)
    }

    #[test]
    fn test_fresh_board() {
        let board = test_board();

        assert_eq!(board.move_count(), 0);
        assert_eq!(board.match_count(), 0);
        assert_eq!(board.pair_count(), 12);
        assert!(!board.is_started());
        assert!(!board.is_won());
        assert!(!board.is_locked());
        assert!(board.pending_slots().is_empty());
    }

    #[test]
    fn test_first_selection_pending() {
        let mut board = test_board();

        let outcome = board.select(SlotId::new(0));

        assert_eq!(outcome, SelectOutcome::Pending);
        assert!(board.is_started());
        assert_eq!(board.move_count(), 0); // not a completed turn yet
        assert_eq!(board.pending_slots(), &[SlotId::new(0)]);
        assert!(board.card(SlotId::new(0)).unwrap().is_revealed());
    }

    #[test]
    fn test_matching_pair() {
        let mut board = test_board();
        let key = board.cards()[0].pair_key;
        let (a, b) = pair_slots(&board, key);

        assert_eq!(board.select(a), SelectOutcome::Pending);
        assert_eq!(board.select(b), SelectOutcome::Matched(key));

        assert_eq!(board.move_count(), 1);
        assert_eq!(board.match_count(), 1);
        assert!(!board.is_locked());
        assert!(board.pending_slots().is_empty());
        assert!(board.card(a).unwrap().is_matched());
        assert!(board.card(b).unwrap().is_matched());
    }

    #[test]
    fn test_mismatch_locks_until_resolved() {
        let mut board = test_board();
        let (a, b) = mismatched_slots(&board);

        board.select(a);
        let outcome = board.select(b);

        assert!(matches!(outcome, SelectOutcome::Mismatch { .. }));
        assert_eq!(board.move_count(), 1);
        assert_eq!(board.match_count(), 0);
        assert!(board.is_locked());
        assert_eq!(board.pending_slots().len(), 2);

        // Locked: any further selection is ignored
        let hidden = board
            .cards()
            .iter()
            .find(|c| c.is_hidden())
            .unwrap()
            .slot;
        assert_eq!(board.select(hidden), SelectOutcome::Ignored);
        assert_eq!(board.move_count(), 1);

        let reverted = board.resolve_mismatch();
        assert_eq!(reverted, Some((a, b)));
        assert!(!board.is_locked());
        assert!(board.pending_slots().is_empty());
        assert!(board.card(a).unwrap().is_hidden());
        assert!(board.card(b).unwrap().is_hidden());
    }

    #[test]
    fn test_resolve_mismatch_noop_when_idle() {
        let mut board = test_board();

        assert_eq!(board.resolve_mismatch(), None);

        board.select(SlotId::new(0));
        assert_eq!(board.resolve_mismatch(), None);
        assert!(board.card(SlotId::new(0)).unwrap().is_revealed());
    }

    #[test]
    fn test_reselect_revealed_card_ignored() {
        let mut board = test_board();

        board.select(SlotId::new(0));
        let outcome = board.select(SlotId::new(0));

        assert_eq!(outcome, SelectOutcome::Ignored);
        assert_eq!(board.move_count(), 0);
        assert_eq!(board.pending_slots().len(), 1);
    }

    #[test]
    fn test_select_matched_card_ignored() {
        let mut board = test_board();
        let key = board.cards()[0].pair_key;
        let (a, b) = pair_slots(&board, key);

        board.select(a);
        board.select(b);

        assert_eq!(board.select(a), SelectOutcome::Ignored);
        assert_eq!(board.move_count(), 1);
        assert!(board.pending_slots().is_empty());
    }

    #[test]
    fn test_unknown_slot_ignored() {
        let mut board = test_board();

        assert_eq!(board.select(SlotId::new(200)), SelectOutcome::Ignored);
        assert!(!board.is_started());
    }

    #[test]
    fn test_win_on_last_pair() {
        let mut board = test_board();

        let keys: Vec<PairKey> = {
            let mut keys: Vec<PairKey> = board.cards().iter().map(|c| c.pair_key).collect();
            keys.sort();
            keys.dedup();
            keys
        };

        for (i, &key) in keys.iter().enumerate() {
            let (a, b) = pair_slots(&board, key);
            board.select(a);
            let outcome = board.select(b);

            if i + 1 < keys.len() {
                assert_eq!(outcome, SelectOutcome::Matched(key));
            } else {
                assert_eq!(outcome, SelectOutcome::Won(key));
            }
        }

        assert!(board.is_won());
        assert_eq!(board.move_count(), 12);
        assert_eq!(board.match_count(), 12);
        assert!(board.cards().iter().all(|c| c.is_matched()));

        // Finished board ignores everything
        assert_eq!(board.select(SlotId::new(0)), SelectOutcome::Ignored);
    }

    #[test]
    fn test_hint_finds_first_unmatched_pair() {
        let board = test_board();

        let (a, b) = board.hint().unwrap();

        assert_ne!(a, b);
        let first = board.card(a).unwrap();
        let second = board.card(b).unwrap();
        assert_eq!(first.pair_key, second.pair_key);
        // First card of the hint is the first unmatched card on the board
        assert_eq!(a, SlotId::new(0));
    }

    #[test]
    fn test_hint_skips_matched_pairs() {
        let mut board = test_board();
        let key = board.cards()[0].pair_key;
        let (a, b) = pair_slots(&board, key);
        board.select(a);
        board.select(b);

        let (h1, h2) = board.hint().unwrap();
        assert!(!board.card(h1).unwrap().is_matched());
        assert!(!board.card(h2).unwrap().is_matched());
        assert_ne!(board.card(h1).unwrap().pair_key, key);
    }

    #[test]
    fn test_hint_mutates_nothing() {
        let mut board = test_board();
        board.select(SlotId::new(0));

        let before_moves = board.move_count();
        let before_pending = board.pending_slots().to_vec();

        let _ = board.hint();

        assert_eq!(board.move_count(), before_moves);
        assert_eq!(board.pending_slots(), &before_pending[..]);
        assert!(!board.is_locked());
    }

    #[test]
    fn test_hint_none_while_locked_or_won() {
        let mut board = test_board();
        let (a, b) = mismatched_slots(&board);
        board.select(a);
        board.select(b);

        assert!(board.is_locked());
        assert!(board.hint().is_none());

        board.resolve_mismatch();
        assert!(board.hint().is_some());
    }

    #[test]
    fn test_reset_replaces_everything() {
        let registry = CardRegistry::standard();
        let mut rng = GameRng::new(42);
        let mut board = Board::deal(&registry, &mut rng);

        let (a, b) = mismatched_slots(&board);
        board.select(a);
        board.select(b);
        assert!(board.is_locked());

        board.reset(&registry, &mut rng);

        assert_eq!(board.move_count(), 0);
        assert_eq!(board.match_count(), 0);
        assert!(!board.is_started());
        assert!(!board.is_locked());
        assert!(board.pending_slots().is_empty());
        assert!(board.cards().iter().all(|c| c.is_hidden()));
    }

    #[test]
    fn test_progress_pct() {
        let mut board = test_board();
        assert_eq!(board.progress_pct(), 0);

        let key = board.cards()[0].pair_key;
        let (a, b) = pair_slots(&board, key);
        board.select(a);
        board.select(b);

        // 1/12 = 8.33% rounds to 8
        assert_eq!(board.progress_pct(), 8);
    }
}
