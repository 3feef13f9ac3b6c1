//! # minigame-rounds
//!
//! Headless round engine for classroom mini-games: memory pairs, picture
//! naming, "what's missing" and drag-to-category sorting.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: No rendering, tweening, audio or input.
//!    A scene calls into a round and draws whatever comes back.
//!
//! 2. **Explicit Phases**: Each round variant is a closed phase enum with a
//!    fixed transition table. Illegal calls return `RoundError`, never
//!    panic and never half-apply.
//!
//! 3. **Clock-Free**: Timers belong to presentation. When one expires it
//!    calls `forfeit`, `grade`, `begin_choice` or `time_out`.
//!
//! 4. **Reproducible**: Every random choice flows through a seeded
//!    `RoundRng`.
//!
//! ## Modules
//!
//! - `core`: Items, metadata, RNG, configuration, errors
//! - `pool`: Item pools and the static content catalog
//! - `rounds`: The four round variants behind the `Round` trait
//! - `session`: Cross-round tallies

pub mod core;
pub mod pool;
pub mod rounds;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Difficulty, Item, ItemId, MatchKey, PairConfig, RecallDifficulty, RecallSettings, RoundError,
    RoundResult, RoundRng,
};

pub use crate::pool::{Catalog, ItemPool};

pub use crate::rounds::{
    GradeReport, ItemOutcome, Level, PairPhase, PairRound, Placement, RecallPhase, RecallRound,
    Round, RoundOutcome, RoundStatus, ScoringPhase, ScoringRound, SelectResult, SortingPhase,
    SortingRound,
};

pub use crate::session::{Scoreboard, Tally};
