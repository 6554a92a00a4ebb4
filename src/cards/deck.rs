//! Shuffled deck construction.
//!
//! `build_shuffled_deck` turns a registry of definitions into the playable
//! board: every definition becomes one face-down [`CardInstance`], slots are
//! assigned in uniformly shuffled order. Pure function of the definition set
//! and the RNG - no other inputs, no failure modes.

use crate::core::GameRng;

use super::definition::CardDefinition;
use super::instance::{CardInstance, SlotId};
use super::registry::CardRegistry;

/// Build a freshly shuffled, all-hidden deck from the registry.
///
/// The shuffle is a uniform permutation (Fisher-Yates through
/// [`GameRng::shuffle`]). Deck order is deterministic per RNG state, so a
/// seeded session always deals the same board.
#[must_use]
pub fn build_shuffled_deck(registry: &CardRegistry, rng: &mut GameRng) -> Vec<CardInstance> {
    debug_assert!(registry.validate_pairs(), "registry must hold complete pairs");

    // ID order first: registry iteration order is arbitrary and would defeat
    // seed reproducibility.
    let mut defs: Vec<&CardDefinition> = registry.iter_ordered().collect();
    rng.shuffle(&mut defs);

    defs.iter()
        .enumerate()
        .map(|(slot, def)| CardInstance::new(SlotId::new(slot as u8), def.id, def.pair_key))
        .collect()
}
