//! Core types: items, metadata, RNG, configuration, errors.
//!
//! Nothing here knows about any particular mini-game. Rounds in
//! `crate::rounds` are built from these pieces.

pub mod config;
pub mod error;
pub mod item;
pub mod metadata;
pub mod rng;

pub use config::{Difficulty, PairConfig, PairSettings, RecallDifficulty, RecallSettings};
pub use error::{RoundError, RoundResult};
pub use item::{Item, ItemId, MatchKey};
pub use metadata::{MetaKey, MetaValue, Metadata};
pub use rng::{RoundRng, RoundRngState};
