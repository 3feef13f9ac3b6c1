//! Round variants and the trait they share.
//!
//! - `pairs`: memory cards, two equal keys in a row score
//! - `scoring`: one answer per item, graded in bulk
//! - `recall`: spot the object that disappeared
//! - `sorting`: drop each object on its category
//!
//! Every round is owned by exactly one presentation session and driven one
//! call at a time. Nothing here blocks, spawns or keeps time.

pub mod pairs;
pub mod recall;
pub mod round;
pub mod scoring;
pub mod sorting;

pub use pairs::{Card, PairPhase, PairRound, SelectResult};
pub use recall::{RecallPhase, RecallRound};
pub use round::{Round, RoundOutcome, RoundStatus};
pub use scoring::{GradeReport, ItemOutcome, ScoringPhase, ScoringRound};
pub use sorting::{Level, Placement, SortingPhase, SortingRound};
