//! The trait every round variant implements.
//!
//! Presentation drives a round through its variant-specific operations
//! (`select`, `assign`, `answer`, `place`) and polls it through this trait.
//! The engine never calls back: everything it has to say comes out of a
//! return value or a status query.

use serde::{Deserialize, Serialize};

/// How a finished round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// All pairs found, the missing object named, every item sorted.
    Won,
    /// Out of lives, wrong answer, or forfeited on timeout.
    Lost,
    /// Bulk-graded with an integer percentage.
    Graded(u32),
}

impl RoundOutcome {
    /// Did the player win? A graded round counts as won only at 100%.
    #[must_use]
    pub fn is_win(self) -> bool {
        match self {
            RoundOutcome::Won => true,
            RoundOutcome::Lost => false,
            RoundOutcome::Graded(score) => score == 100,
        }
    }
}

/// Snapshot of a round's counters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStatus<P> {
    pub phase: P,
    /// `None` for variants without lives.
    pub remaining_lives: Option<u32>,
    /// Items still in play.
    pub remaining_items: usize,
    pub score: u32,
}

/// Common query surface of all round variants.
///
/// ## Implementation Notes
///
/// - `status` must be cheap; presentation calls it after every action.
/// - `outcome` returns `None` while the round is still being played.
pub trait Round {
    /// Variant-specific phase enum.
    type Phase: Copy + std::fmt::Debug + PartialEq;

    /// Current phase.
    fn phase(&self) -> Self::Phase;

    /// Current counters.
    fn status(&self) -> RoundStatus<Self::Phase>;

    /// Final outcome, once the round is over.
    fn outcome(&self) -> Option<RoundOutcome>;

    /// Is the round over?
    fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }
}
