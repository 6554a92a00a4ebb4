//! Deck model: card definitions, the registry, placed instances, and
//! shuffled deck construction.

pub mod deck;
pub mod definition;
pub mod instance;
pub mod registry;

pub use deck::build_shuffled_deck;
pub use definition::{CardDefinition, CardFace, CardId, PairKey};
pub use instance::{CardInstance, SlotId, Visibility};
pub use registry::CardRegistry;
