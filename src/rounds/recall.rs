//! Recall: the "what's missing" game.
//!
//! A handful of objects is shown for a while, then one of them disappears
//! and the player must pick it out of the full object grid. Presentation
//! runs the memorize, reveal and choose clocks from `RecallSettings` and
//! calls `begin_choice` / `time_out` when they expire.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::round::{Round, RoundOutcome, RoundStatus};
use crate::core::{Item, ItemId, RecallSettings, RoundError, RoundResult, RoundRng};
use crate::pool::ItemPool;

/// Phase of a recall round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecallPhase {
    /// Full set on screen.
    Memorize,
    /// One object hidden; waiting for the player's pick.
    Choosing,
    Resolved { correct: bool },
}

impl RecallPhase {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            RecallPhase::Memorize => "memorizing",
            RecallPhase::Choosing => "choosing",
            RecallPhase::Resolved { .. } => "resolved",
        }
    }
}

/// A "what's missing" round.
#[derive(Clone, Debug)]
pub struct RecallRound {
    objects: Vec<Item>,
    missing: ItemId,
    choices: Vec<Item>,
    phase: RecallPhase,
    answer: Option<ItemId>,
    settings: RecallSettings,
}

impl RecallRound {
    /// Pick the objects for a round.
    ///
    /// The first `settings.available_count` pool items are in play; the
    /// round shows `settings.object_count` of them and hides one.
    pub fn start(pool: &ItemPool, settings: RecallSettings, rng: &mut RoundRng) -> RoundResult<Self> {
        if settings.object_count == 0 {
            return Err(RoundError::EmptyRound);
        }
        if settings.available_count > pool.len() {
            return Err(RoundError::InsufficientPool {
                required: settings.available_count,
                available: pool.len(),
            });
        }

        let mut choices: Vec<Item> = pool.iter().take(settings.available_count).cloned().collect();
        let picked = rng
            .sample_indices(choices.len(), settings.object_count)
            .ok_or(RoundError::InsufficientPool {
                required: settings.object_count,
                available: choices.len(),
            })?;
        let objects: Vec<Item> = picked.into_iter().map(|i| choices[i].clone()).collect();
        let missing = objects[rng.gen_range_usize(0..objects.len())].id;
        rng.shuffle(&mut choices);

        debug!(
            objects = objects.len(),
            choices = choices.len(),
            missing = %missing,
            "recall round started"
        );

        Ok(Self {
            objects,
            missing,
            choices,
            phase: RecallPhase::Memorize,
            answer: None,
            settings,
        })
    }

    /// Hide the missing object and open the choice grid.
    pub fn begin_choice(&mut self) -> RoundResult<()> {
        if self.phase != RecallPhase::Memorize {
            return Err(self.invalid("begin choosing"));
        }
        self.phase = RecallPhase::Choosing;
        Ok(())
    }

    /// Pick the object believed missing. Returns whether it was right.
    pub fn answer(&mut self, id: ItemId) -> RoundResult<bool> {
        if self.phase != RecallPhase::Choosing {
            return Err(self.invalid("answer"));
        }
        if !self.choices.iter().any(|item| item.id == id) {
            return Err(RoundError::UnknownItem(id));
        }

        let correct = id == self.missing;
        self.answer = Some(id);
        self.phase = RecallPhase::Resolved { correct };
        debug!(answer = %id, correct, "recall answered");
        Ok(correct)
    }

    /// The choose clock ran out: resolve as wrong.
    pub fn time_out(&mut self) -> RoundResult<()> {
        if self.phase != RecallPhase::Choosing {
            return Err(self.invalid("time out"));
        }
        self.phase = RecallPhase::Resolved { correct: false };
        debug!("recall timed out");
        Ok(())
    }

    fn invalid(&self, operation: &'static str) -> RoundError {
        RoundError::InvalidState {
            operation,
            phase: self.phase.name(),
        }
    }

    /// Objects currently on screen.
    #[must_use]
    pub fn shown(&self) -> Vec<&Item> {
        match self.phase {
            RecallPhase::Memorize => self.objects.iter().collect(),
            _ => self
                .objects
                .iter()
                .filter(|item| item.id != self.missing)
                .collect(),
        }
    }

    /// The answer grid: every object in play, shuffled.
    #[must_use]
    pub fn choices(&self) -> &[Item] {
        &self.choices
    }

    /// Every object of the memorize phase, in display order.
    #[must_use]
    pub fn objects(&self) -> &[Item] {
        &self.objects
    }

    #[must_use]
    pub fn missing(&self) -> ItemId {
        self.missing
    }

    /// The player's pick, if any.
    #[must_use]
    pub fn answered(&self) -> Option<ItemId> {
        self.answer
    }

    #[must_use]
    pub fn settings(&self) -> &RecallSettings {
        &self.settings
    }
}

impl Round for RecallRound {
    type Phase = RecallPhase;

    fn phase(&self) -> RecallPhase {
        self.phase
    }

    fn status(&self) -> RoundStatus<RecallPhase> {
        RoundStatus {
            phase: self.phase,
            remaining_lives: None,
            remaining_items: self.shown().len(),
            score: u32::from(matches!(self.phase, RecallPhase::Resolved { correct: true })),
        }
    }

    fn outcome(&self) -> Option<RoundOutcome> {
        match self.phase {
            RecallPhase::Resolved { correct: true } => Some(RoundOutcome::Won),
            RecallPhase::Resolved { correct: false } => Some(RoundOutcome::Lost),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RecallDifficulty;

    fn objects(n: u32) -> ItemPool {
        ItemPool::from_items(
            (1..=n).map(|i| Item::new(ItemId::new(i), format!("object{i}"))),
        )
        .unwrap()
    }

    fn medium_round(seed: u64) -> RecallRound {
        RecallRound::start(&objects(10), RecallDifficulty::Medium.settings(), &mut RoundRng::new(seed))
            .unwrap()
    }

    #[test]
    fn test_start_picks_objects_from_available() {
        let round = medium_round(3);
        assert_eq!(round.phase(), RecallPhase::Memorize);
        assert_eq!(round.objects().len(), 5);
        assert_eq!(round.choices().len(), 8);
        assert_eq!(round.shown().len(), 5);
        assert!(round.objects().iter().all(|item| item.id.raw() <= 8));
        assert!(round.objects().iter().any(|item| item.id == round.missing()));
    }

    #[test]
    fn test_correct_answer_wins() {
        let mut round = medium_round(11);
        round.begin_choice().unwrap();
        assert_eq!(round.shown().len(), 4);
        assert!(round.shown().iter().all(|item| item.id != round.missing()));

        let missing = round.missing();
        assert!(round.answer(missing).unwrap());
        assert_eq!(round.outcome(), Some(RoundOutcome::Won));
        assert_eq!(round.status().score, 1);
        assert_eq!(round.answered(), Some(missing));
    }

    #[test]
    fn test_wrong_answer_loses() {
        let mut round = medium_round(11);
        round.begin_choice().unwrap();

        let wrong = round
            .choices()
            .iter()
            .map(|item| item.id)
            .find(|&id| id != round.missing())
            .unwrap();
        assert!(!round.answer(wrong).unwrap());
        assert_eq!(round.outcome(), Some(RoundOutcome::Lost));
        assert!(round.answer(round.missing()).is_err());
    }

    #[test]
    fn test_phase_guards() {
        let mut round = medium_round(2);
        assert_eq!(
            round.answer(round.missing()),
            Err(RoundError::InvalidState {
                operation: "answer",
                phase: "memorizing"
            })
        );
        assert!(round.time_out().is_err());

        round.begin_choice().unwrap();
        assert!(round.begin_choice().is_err());
        assert_eq!(
            round.answer(ItemId::new(10)),
            Err(RoundError::UnknownItem(ItemId::new(10)))
        );

        round.time_out().unwrap();
        assert_eq!(round.phase(), RecallPhase::Resolved { correct: false });
        assert_eq!(round.answered(), None);
    }

    #[test]
    fn test_start_errors() {
        let mut rng = RoundRng::new(1);
        assert_eq!(
            RecallRound::start(&objects(10), RecallSettings::new(0, 5), &mut rng).unwrap_err(),
            RoundError::EmptyRound
        );
        assert_eq!(
            RecallRound::start(&objects(4), RecallSettings::new(3, 5), &mut rng).unwrap_err(),
            RoundError::InsufficientPool {
                required: 5,
                available: 4
            }
        );
        assert_eq!(
            RecallRound::start(&objects(10), RecallSettings::new(6, 5), &mut rng).unwrap_err(),
            RoundError::InsufficientPool {
                required: 6,
                available: 5
            }
        );
    }
}
