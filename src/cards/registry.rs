//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores all card definitions for a game and provides
//! fast lookup by `CardId`. [`CardRegistry::standard`] builds the stock
//! 12-pair set the game ships with.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardFace, CardId, PairKey};

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use memory_match::cards::{CardRegistry, CardDefinition, CardFace, CardId, PairKey};
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardDefinition::new(
///     CardId::new(1),
///     PairKey::new(1),
///     CardFace::new("A", "Left half"),
/// ));
///
/// let found = registry.get(CardId::new(1)).unwrap();
/// assert_eq!(found.face.label, "Left half");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardDefinition>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock 24-card set: 12 pairs of shared-memory moments.
    #[must_use]
    pub fn standard() -> Self {
        let faces: [(&str, &str); 24] = [
            ("\u{1F4C5}", "First Date"),
            ("\u{1F60A}", "Nervous Smile"),
            ("\u{1F3B5}", "Favorite Song"),
            ("\u{1F483}", "Our Dance"),
            ("\u{1F92D}", "Inside Joke"),
            ("\u{1F602}", "Laughing Together"),
            ("\u{1F319}", "Late Night Calls"),
            ("\u{1F634}", "Sleepy Face"),
            ("\u{1F370}", "Shared Dessert"),
            ("\u{1F48B}", "Sweet Kiss"),
            ("\u{1F327}\u{FE0F}", "Rainy Day"),
            ("\u{1F917}", "Cozy Hug"),
            ("\u{1F436}", "Secret Nickname"),
            ("\u{1F60A}", "Blushing Face"),
            ("\u{1F9ED}", "Adventure Trip"),
            ("\u{1F929}", "Excited Face"),
            ("\u{1F3AC}", "Movie Night"),
            ("\u{1F970}", "Cuddle Time"),
            ("\u{2600}\u{FE0F}", "Morning Text"),
            ("\u{1F60D}", "Heart Eyes"),
            ("\u{1F4C6}", "Anniversary"),
            ("\u{1F48D}", "Ring Promise"),
            ("\u{1F4AB}", "Forever Promise"),
            ("\u{267E}\u{FE0F}", "Infinity Love"),
        ];

        let mut registry = Self::new();
        for (index, (glyph, label)) in faces.iter().enumerate() {
            // Cards come in consecutive pairs: ids 1&2 share pair key 1, etc.
            let id = CardId::new(index as u32 + 1);
            let pair_key = PairKey::new(index as u32 / 2 + 1);
            registry.register(CardDefinition::new(id, pair_key, CardFace::new(*glyph, *label)));
        }

        registry
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        self.cards.insert(card.id, card);
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Get a card definition by ID, panicking if not found.
    ///
    /// Use when you're certain the card exists (e.g. an ID that came out of
    /// a deck built from this registry).
    #[must_use]
    pub fn get_unchecked(&self, id: CardId) -> &CardDefinition {
        self.cards.get(&id).expect("Card not found in registry")
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of distinct pair keys.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        let mut keys: Vec<PairKey> = self.cards.values().map(|c| c.pair_key).collect();
        keys.sort();
        keys.dedup();
        keys.len()
    }

    /// Check that every pair key is carried by exactly two cards.
    #[must_use]
    pub fn validate_pairs(&self) -> bool {
        let mut counts: FxHashMap<PairKey, u32> = FxHashMap::default();
        for card in self.cards.values() {
            *counts.entry(card.pair_key).or_insert(0) += 1;
        }
        !counts.is_empty() && counts.values().all(|&n| n == 2)
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    /// Iterate over definitions in ID order.
    ///
    /// Registry iteration order is arbitrary; deck construction needs a
    /// stable base order so shuffles are reproducible per seed.
    pub fn iter_ordered(&self) -> impl Iterator<Item = &CardDefinition> {
        let mut defs: Vec<&CardDefinition> = self.cards.values().collect();
        defs.sort_by_key(|c| c.id);
        defs.into_iter()
    }
}
