//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: its identity,
//! the pair it belongs to, and the face shown when revealed. Runtime state
//! (where the card sits, whether it is face-up) lives in `CardInstance`.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Identifier shared by exactly two card definitions that form a matching
/// pair.
///
/// The turn machine compares pair keys, never card IDs: the two halves of a
/// pair are distinct cards (different faces) that match each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PairKey(pub u32);

impl PairKey {
    /// Create a new pair key.
    #[must_use]
    pub const fn new(key: u32) -> Self {
        Self(key)
    }

    /// Get the raw key value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PairKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pair({})", self.0)
    }
}

/// Display payload for a card face.
///
/// Opaque to the game rules - the core never inspects these strings, it only
/// hands them to the presentation layer through snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFace {
    /// Short glyph shown large on the card - typically a single emoji.
    pub glyph: String,

    /// Caption shown under the glyph.
    pub label: String,
}

impl CardFace {
    /// Create a new card face.
    #[must_use]
    pub fn new(glyph: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            glyph: glyph.into(),
            label: label.into(),
        }
    }
}

/// Static card definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card.
    pub id: CardId,

    /// The pair this card belongs to.
    pub pair_key: PairKey,

    /// What the card shows when face-up.
    pub face: CardFace,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(id: CardId, pair_key: PairKey, face: CardFace) -> Self {
        Self { id, pair_key, face }
    }
}
