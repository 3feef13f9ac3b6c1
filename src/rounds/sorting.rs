//! Sorting: the drag-to-category game.
//!
//! Each object belongs to one category. Dropping it on the right category
//! locks it in place; dropping it anywhere else sends it back with no
//! penalty. The round completes when every object is placed.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::round::{Round, RoundOutcome, RoundStatus};
use crate::core::{Item, ItemId, MatchKey, RoundError, RoundResult};

/// A sorting level: the categories on offer and the objects to sort.
///
/// Each item's key is the category it belongs to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub key: String,
    pub categories: Vec<MatchKey>,
    pub items: Vec<Item>,
}

/// Phase of a sorting round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortingPhase {
    Sorting,
    Complete,
}

impl SortingPhase {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            SortingPhase::Sorting => "sorting",
            SortingPhase::Complete => "complete",
        }
    }
}

/// What a drop did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// Right category; the item is locked.
    Accepted,
    /// Wrong category; the item goes back.
    Rejected,
}

/// A drag-to-category round.
///
/// ```
/// use minigame_rounds::pool::Catalog;
/// use minigame_rounds::rounds::{Placement, SortingRound};
///
/// let level = Catalog::embedded().unwrap().level("level-01").unwrap();
/// let goat = level.items[0].id;
/// let mut round = SortingRound::start(level).unwrap();
///
/// assert_eq!(round.place(goat, "Φαγητό").unwrap(), Placement::Rejected);
/// assert_eq!(round.place(goat, "Ζώο").unwrap(), Placement::Accepted);
/// ```
#[derive(Clone, Debug)]
pub struct SortingRound {
    level: Level,
    placed: Vec<bool>,
    index: FxHashMap<ItemId, usize>,
    placed_count: usize,
    phase: SortingPhase,
}

impl SortingRound {
    /// Start sorting a level.
    ///
    /// Fails with `EmptyRound` for a level without items, `DuplicateItem`
    /// for repeated ids and `UnknownCategory` if an item belongs to a
    /// category the level does not offer.
    pub fn start(level: Level) -> RoundResult<Self> {
        if level.items.is_empty() {
            return Err(RoundError::EmptyRound);
        }

        let mut index = FxHashMap::default();
        for (slot, item) in level.items.iter().enumerate() {
            if !level.categories.contains(&item.key) {
                return Err(RoundError::UnknownCategory(item.key.to_string()));
            }
            if index.insert(item.id, slot).is_some() {
                return Err(RoundError::DuplicateItem(item.id));
            }
        }

        debug!(
            level = %level.key,
            categories = level.categories.len(),
            items = level.items.len(),
            "sorting round started"
        );

        Ok(Self {
            placed: vec![false; level.items.len()],
            level,
            index,
            placed_count: 0,
            phase: SortingPhase::Sorting,
        })
    }

    /// Drop an item on a category.
    pub fn place(&mut self, id: ItemId, category: impl Into<MatchKey>) -> RoundResult<Placement> {
        if self.phase != SortingPhase::Sorting {
            return Err(RoundError::InvalidState {
                operation: "place",
                phase: self.phase.name(),
            });
        }
        let slot = self.index.get(&id).copied().ok_or(RoundError::UnknownItem(id))?;
        let category = category.into();
        if !self.level.categories.contains(&category) {
            return Err(RoundError::UnknownCategory(category.to_string()));
        }
        if self.placed[slot] {
            return Err(RoundError::InvalidState {
                operation: "place an already placed item",
                phase: self.phase.name(),
            });
        }

        if !self.level.items[slot].matches(&category) {
            trace!(item = %id, category = %category, "rejected");
            return Ok(Placement::Rejected);
        }

        self.placed[slot] = true;
        self.placed_count += 1;
        trace!(item = %id, category = %category, "accepted");
        if self.placed_count == self.placed.len() {
            self.phase = SortingPhase::Complete;
            debug!(level = %self.level.key, "level complete");
        }
        Ok(Placement::Accepted)
    }

    #[must_use]
    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Has this item been locked into its category?
    #[must_use]
    pub fn is_placed(&self, id: ItemId) -> bool {
        self.index.get(&id).is_some_and(|&slot| self.placed[slot])
    }

    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.placed_count
    }

    #[must_use]
    pub fn remaining_items(&self) -> usize {
        self.placed.len() - self.placed_count
    }
}

impl Round for SortingRound {
    type Phase = SortingPhase;

    fn phase(&self) -> SortingPhase {
        self.phase
    }

    fn status(&self) -> RoundStatus<SortingPhase> {
        RoundStatus {
            phase: self.phase,
            remaining_lives: None,
            remaining_items: self.remaining_items(),
            score: self.placed_count as u32,
        }
    }

    fn outcome(&self) -> Option<RoundOutcome> {
        match self.phase {
            SortingPhase::Complete => Some(RoundOutcome::Won),
            SortingPhase::Sorting => None,
        }
    }
}
