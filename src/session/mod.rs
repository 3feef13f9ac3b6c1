//! Session bookkeeping across rounds.

pub mod scoreboard;

pub use scoreboard::{Scoreboard, Tally};
