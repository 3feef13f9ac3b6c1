//! Cross-round tallies for one play session.
//!
//! A session hands out a fresh, reproducible RNG stream for every round it
//! starts and records how each finished round ended. Nothing is persisted;
//! dropping the session forgets it.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{RoundError, RoundResult, RoundRng};
use crate::rounds::{Round, RoundOutcome};

/// Summary counters for a session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub rounds: u32,
    pub wins: u32,
    pub losses: u32,
    /// One star per won round.
    pub stars: u32,
    /// Best percentage among graded rounds.
    pub best_score: Option<u32>,
}

/// A play session: seed, round counter and results.
///
/// ```
/// use minigame_rounds::core::{Item, ItemId};
/// use minigame_rounds::rounds::ScoringRound;
/// use minigame_rounds::session::Scoreboard;
///
/// let mut board = Scoreboard::new(2024);
/// let mut round = ScoringRound::start(vec![Item::new(ItemId::new(0), "Cat")]).unwrap();
/// round.assign(ItemId::new(0), "Cat").unwrap();
/// round.grade().unwrap();
///
/// board.record(&round).unwrap();
/// assert_eq!(board.tally().best_score, Some(100));
/// assert_eq!(board.tally().stars, 1);
/// ```
#[derive(Clone, Debug)]
pub struct Scoreboard {
    rng: RoundRng,
    started: u32,
    history: Vec<RoundOutcome>,
    tally: Tally,
}

impl Scoreboard {
    /// Create a session from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: RoundRng::new(seed),
            started: 0,
            history: Vec::new(),
            tally: Tally::default(),
        }
    }

    /// RNG for the next round.
    ///
    /// Round `n` of a session always gets the same stream, whatever the
    /// earlier rounds consumed.
    pub fn next_round_rng(&mut self) -> RoundRng {
        self.started += 1;
        self.rng.for_context(&format!("round-{}", self.started))
    }

    /// Record a finished round.
    ///
    /// Fails with `InvalidState` if the round is still in play.
    pub fn record<R: Round>(&mut self, round: &R) -> RoundResult<RoundOutcome> {
        let outcome = round.outcome().ok_or(RoundError::InvalidState {
            operation: "record",
            phase: "in play",
        })?;

        self.tally.rounds += 1;
        if outcome.is_win() {
            self.tally.wins += 1;
            self.tally.stars += 1;
        } else {
            self.tally.losses += 1;
        }
        if let RoundOutcome::Graded(score) = outcome {
            self.tally.best_score = Some(self.tally.best_score.map_or(score, |best| best.max(score)));
        }
        self.history.push(outcome);

        info!(
            ?outcome,
            rounds = self.tally.rounds,
            wins = self.tally.wins,
            "round recorded"
        );
        Ok(outcome)
    }

    #[must_use]
    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// Outcomes in the order they were recorded.
    #[must_use]
    pub fn history(&self) -> &[RoundOutcome] {
        &self.history
    }

    /// Rounds handed an RNG so far.
    #[must_use]
    pub fn rounds_started(&self) -> u32 {
        self.started
    }
}
