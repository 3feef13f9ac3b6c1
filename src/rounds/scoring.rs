//! Bulk scoring: the picture-naming game.
//!
//! Every item gets one answer picked from a word list. Answers can be
//! changed freely until the player presses "check"; then the whole round is
//! graded at once into an integer percentage.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::round::{Round, RoundOutcome, RoundStatus};
use crate::core::{Item, ItemId, MatchKey, RoundError, RoundResult, RoundRng};
use crate::pool::ItemPool;

/// Phase of a scoring round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringPhase {
    /// Answers are being assigned.
    Presenting,
    /// Graded; no further changes.
    Graded,
}

impl ScoringPhase {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ScoringPhase::Presenting => "presenting",
            ScoringPhase::Graded => "graded",
        }
    }
}

/// Grading result for one item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemOutcome {
    pub item_id: ItemId,
    pub correct: bool,
    /// What the player picked, if anything.
    pub answer: Option<MatchKey>,
}

/// Result of `ScoringRound::grade`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeReport {
    /// `floor(100 * correct / total)`.
    pub score: u32,
    pub correct: usize,
    pub total: usize,
    /// One entry per item, in round order.
    pub per_item: Vec<ItemOutcome>,
}

impl GradeReport {
    /// Every answer right.
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.correct == self.total
    }
}

/// A bulk-scored round.
///
/// ```
/// use minigame_rounds::core::{Item, ItemId};
/// use minigame_rounds::rounds::ScoringRound;
///
/// let mut round = ScoringRound::start(vec![
///     Item::new(ItemId::new(1), "dog"),
///     Item::new(ItemId::new(2), "car"),
/// ])
/// .unwrap();
///
/// round.assign(ItemId::new(1), "dog").unwrap();
/// round.assign(ItemId::new(2), "dog").unwrap();
/// let report = round.grade().unwrap();
/// assert_eq!(report.score, 50);
/// ```
#[derive(Clone, Debug)]
pub struct ScoringRound {
    items: Vec<Item>,
    answers: Vec<Option<MatchKey>>,
    index: FxHashMap<ItemId, usize>,
    phase: ScoringPhase,
    score: u32,
}

impl ScoringRound {
    /// Fix the item set for a round. Display order is presentation's call.
    ///
    /// Fails with `EmptyRound` for an empty list and `DuplicateItem` if two
    /// items share an id.
    pub fn start(items: Vec<Item>) -> RoundResult<Self> {
        if items.is_empty() {
            return Err(RoundError::EmptyRound);
        }

        let mut index = FxHashMap::default();
        for (slot, item) in items.iter().enumerate() {
            if index.insert(item.id, slot).is_some() {
                return Err(RoundError::DuplicateItem(item.id));
            }
        }

        debug!(items = items.len(), "scoring round started");
        Ok(Self {
            answers: vec![None; items.len()],
            items,
            index,
            phase: ScoringPhase::Presenting,
            score: 0,
        })
    }

    /// Draw `count` items at random from a pool and start a round with them.
    pub fn from_pool(pool: &ItemPool, count: usize, rng: &mut RoundRng) -> RoundResult<Self> {
        if count == 0 {
            return Err(RoundError::EmptyRound);
        }
        Self::start(pool.sample(count, rng)?)
    }

    /// Record an answer for an item. The last answer wins.
    pub fn assign(&mut self, id: ItemId, answer: impl Into<MatchKey>) -> RoundResult<()> {
        if self.phase != ScoringPhase::Presenting {
            return Err(RoundError::InvalidState {
                operation: "assign",
                phase: self.phase.name(),
            });
        }
        let slot = self.slot(id)?;
        let answer = answer.into();
        trace!(item = %id, answer = %answer, "answer assigned");
        self.answers[slot] = Some(answer);
        Ok(())
    }

    /// Grade every item and close the round.
    ///
    /// Unanswered items count as wrong.
    pub fn grade(&mut self) -> RoundResult<GradeReport> {
        if self.phase != ScoringPhase::Presenting {
            return Err(RoundError::InvalidState {
                operation: "grade",
                phase: self.phase.name(),
            });
        }

        let per_item: Vec<ItemOutcome> = self
            .items
            .iter()
            .zip(&self.answers)
            .map(|(item, answer)| ItemOutcome {
                item_id: item.id,
                correct: answer.as_ref().is_some_and(|a| item.matches(a)),
                answer: answer.clone(),
            })
            .collect();

        let total = per_item.len();
        let correct = per_item.iter().filter(|o| o.correct).count();
        // total > 0 is guaranteed by `start`.
        let score = (100 * correct / total) as u32;

        self.score = score;
        self.phase = ScoringPhase::Graded;
        debug!(score, correct, total, "scoring round graded");

        Ok(GradeReport {
            score,
            correct,
            total,
            per_item,
        })
    }

    fn slot(&self, id: ItemId) -> RoundResult<usize> {
        self.index.get(&id).copied().ok_or(RoundError::UnknownItem(id))
    }

    /// Items in round order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The answer currently assigned to an item.
    #[must_use]
    pub fn answer_of(&self, id: ItemId) -> Option<&MatchKey> {
        self.index
            .get(&id)
            .and_then(|&slot| self.answers[slot].as_ref())
    }

    /// Items that still have no answer.
    pub fn unanswered(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items
            .iter()
            .zip(&self.answers)
            .filter(|(_, answer)| answer.is_none())
            .map(|(item, _)| item.id)
    }
}

impl Round for ScoringRound {
    type Phase = ScoringPhase;

    fn phase(&self) -> ScoringPhase {
        self.phase
    }

    fn status(&self) -> RoundStatus<ScoringPhase> {
        RoundStatus {
            phase: self.phase,
            remaining_lives: None,
            remaining_items: self.items.len(),
            score: self.score,
        }
    }

    fn outcome(&self) -> Option<RoundOutcome> {
        match self.phase {
            ScoringPhase::Graded => Some(RoundOutcome::Graded(self.score)),
            ScoringPhase::Presenting => None,
        }
    }
}
