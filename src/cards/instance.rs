//! Card instances - runtime card state.
//!
//! `CardInstance` is a card definition placed at a board slot, carrying the
//! one piece of state this game mutates: visibility. Exactly one instance
//! exists per definition per session; a reset discards and rebuilds them all.

use serde::{Deserialize, Serialize};

use super::definition::{CardId, PairKey};

/// Board position of a card, `0..card_count` in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotId(pub u8);

impl SlotId {
    /// Create a new slot ID.
    #[must_use]
    pub const fn new(slot: u8) -> Self {
        Self(slot)
    }

    /// Get the raw slot index.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Slot index as a usize, for indexing the board vec.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

/// Visibility state of a card on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    /// Face-down.
    #[default]
    Hidden,
    /// Face-up, not yet resolved into a match.
    Revealed,
    /// Face-up permanently; its pair has been found.
    Matched,
}

impl Visibility {
    /// Is the card face-up (revealed or matched)?
    #[must_use]
    pub const fn is_face_up(self) -> bool {
        matches!(self, Visibility::Revealed | Visibility::Matched)
    }
}

/// A card placed on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Board position.
    pub slot: SlotId,

    /// Reference to the card definition.
    pub card_id: CardId,

    /// Pair key, copied from the definition for lock-step comparison
    /// without a registry lookup.
    pub pair_key: PairKey,

    /// Current visibility.
    pub visibility: Visibility,
}

impl CardInstance {
    /// Create a face-down instance at the given slot.
    #[must_use]
    pub fn new(slot: SlotId, card_id: CardId, pair_key: PairKey) -> Self {
        Self {
            slot,
            card_id,
            pair_key,
            visibility: Visibility::Hidden,
        }
    }

    /// Is this card hidden?
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.visibility == Visibility::Hidden
    }

    /// Is this card revealed but unresolved?
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.visibility == Visibility::Revealed
    }

    /// Has this card's pair been found?
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.visibility == Visibility::Matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_id() {
        let slot = SlotId::new(7);
        assert_eq!(slot.raw(), 7);
        assert_eq!(slot.index(), 7);
        assert_eq!(format!("{}", slot), "Slot(7)");
    }

    #[test]
    fn test_new_instance_is_hidden() {
        let card = CardInstance::new(SlotId::new(0), CardId::new(1), PairKey::new(1));

        assert!(card.is_hidden());
        assert!(!card.is_revealed());
        assert!(!card.is_matched());
        assert!(!card.visibility.is_face_up());
    }

    #[test]
    fn test_visibility_transitions() {
        let mut card = CardInstance::new(SlotId::new(0), CardId::new(1), PairKey::new(1));

        card.visibility = Visibility::Revealed;
        assert!(card.is_revealed());
        assert!(card.visibility.is_face_up());

        card.visibility = Visibility::Matched;
        assert!(card.is_matched());
        assert!(card.visibility.is_face_up());

        card.visibility = Visibility::Hidden;
        assert!(card.is_hidden());
    }

    #[test]
    fn test_serialization() {
        let card = CardInstance::new(SlotId::new(3), CardId::new(5), PairKey::new(3));

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: CardInstance = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
