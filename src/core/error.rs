//! Errors raised by round construction and round operations.
//!
//! All of these are caller errors: asking for more than the pool holds,
//! acting in a phase that does not allow it, naming an item that is not in
//! play. A failed call never leaves a round partially mutated.

use thiserror::Error;

use super::item::ItemId;

/// Errors that can occur while building or playing a round.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    /// The pool cannot supply as many pairs (or objects) as requested.
    #[error("insufficient pool: need {required}, pool supplies {available}")]
    InsufficientPool {
        /// Pairs or objects asked for.
        required: usize,
        /// Pairs or objects the pool can supply.
        available: usize,
    },

    /// A round must contain at least one item.
    #[error("round has no items")]
    EmptyRound,

    /// The operation is not allowed in the current phase.
    #[error("cannot {operation} while round is {phase}")]
    InvalidState {
        /// Operation that was attempted.
        operation: &'static str,
        /// Phase the round was in.
        phase: &'static str,
    },

    /// The item is not part of this round.
    #[error("unknown item: {0}")]
    UnknownItem(ItemId),

    /// Two items in one pool or round share an id.
    #[error("duplicate item: {0}")]
    DuplicateItem(ItemId),

    /// The category is not offered by this level.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// No level with this key in the catalog.
    #[error("unknown level: {0}")]
    UnknownLevel(String),

    /// Configuration values or catalog data are unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for round operations.
pub type RoundResult<T> = Result<T, RoundError>;
