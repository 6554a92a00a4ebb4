//! Core building blocks: configuration, RNG, the session time model.
//!
//! Everything in here is game-agnostic plumbing the rest of the crate is
//! built on. Nothing reads a wall clock or a global random source.

pub mod config;
pub mod rng;
pub mod time;

pub use config::GameConfig;
pub use rng::{GameRng, GameRngState};
pub use time::Millis;
