//! Pair matching: the memory-card game.
//!
//! Cards are dealt face down. The player turns two over; equal keys leave
//! the table, unequal keys cost a life and flip back. Clearing the table
//! wins, running out of lives loses.
//!
//! ## Transitions
//!
//! ```text
//! Ready --select(a)--> AwaitingSecondPick(a)
//! AwaitingSecondPick(a) --select(a)--> AwaitingSecondPick(a)     (reselected same)
//! AwaitingSecondPick(a) --select(b), match--> Ready | Won
//! AwaitingSecondPick(a) --select(b), mismatch--> Ready | Lost
//! Ready | AwaitingSecondPick --forfeit--> Lost
//! ```
//!
//! The win check runs on the match path and the lives check on the mismatch
//! path, so clearing the table can never be reported as a loss.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::round::{Round, RoundOutcome, RoundStatus};
use crate::core::{Item, ItemId, PairConfig, RoundError, RoundResult, RoundRng};
use crate::pool::ItemPool;

/// Phase of a pairs round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairPhase {
    /// No card face up; waiting for the first pick.
    Ready,
    /// One card face up, waiting for its partner.
    AwaitingSecondPick { pending: ItemId },
    Won,
    Lost,
}

impl PairPhase {
    /// Short name used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PairPhase::Ready => "ready",
            PairPhase::AwaitingSecondPick { .. } => "awaiting second pick",
            PairPhase::Won => "won",
            PairPhase::Lost => "lost",
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, PairPhase::Won | PairPhase::Lost)
    }
}

/// What a `select` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectResult {
    /// First card of a pair turned over.
    First,
    /// The face-up card was clicked again; nothing changed.
    ReselectedSame,
    /// Both cards removed.
    Match,
    /// A life was lost; both cards flip back.
    Mismatch,
}

/// A dealt card.
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    pub item: Item,
    /// Matched and taken off the table.
    pub removed: bool,
}

/// A pair-matching round.
///
/// ## Example
///
/// ```
/// use minigame_rounds::core::{Item, ItemId, PairConfig, RoundRng};
/// use minigame_rounds::pool::ItemPool;
/// use minigame_rounds::rounds::{PairRound, SelectResult};
///
/// let pool = ItemPool::paired_from_faces([
///     Item::new(ItemId::new(0), "card-0"),
///     Item::new(ItemId::new(1), "card-1"),
/// ]);
/// let mut rng = RoundRng::new(42);
/// let mut round = PairRound::start(&pool, PairConfig::new(2, 3), &mut rng).unwrap();
///
/// // Ids 0 and 1 are the two copies of card-0.
/// assert_eq!(round.select(ItemId::new(0)).unwrap(), SelectResult::First);
/// assert_eq!(round.select(ItemId::new(1)).unwrap(), SelectResult::Match);
/// assert_eq!(round.remaining_items(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct PairRound {
    cards: Vec<Card>,
    index: FxHashMap<ItemId, usize>,
    phase: PairPhase,
    lives: u32,
    remaining: usize,
    matched_pairs: u32,
}

impl PairRound {
    /// Deal a new round.
    ///
    /// Picks `config.pair_count` distinct keys among the pool's pairable
    /// keys, takes two items for each, and shuffles the `2 * pair_count`
    /// cards into a uniform random layout.
    pub fn start(pool: &ItemPool, config: PairConfig, rng: &mut RoundRng) -> RoundResult<Self> {
        config.validate()?;

        let pairable = pool.pairable_keys();
        let insufficient = RoundError::InsufficientPool {
            required: config.pair_count,
            available: pairable.len(),
        };
        let chosen = rng
            .sample_indices(pairable.len(), config.pair_count)
            .ok_or(insufficient)?;

        let mut cards = Vec::with_capacity(config.pair_count * 2);
        for key_index in chosen {
            let candidates: Vec<&Item> = pool.find_by_key(&pairable[key_index]).collect();
            let picked = rng
                .sample_indices(candidates.len(), 2)
                .ok_or(RoundError::InsufficientPool {
                    required: 2,
                    available: candidates.len(),
                })?;
            for i in picked {
                cards.push(Card {
                    item: candidates[i].clone(),
                    removed: false,
                });
            }
        }
        rng.shuffle(&mut cards);

        let index = cards
            .iter()
            .enumerate()
            .map(|(slot, card)| (card.item.id, slot))
            .collect();

        debug!(
            pairs = config.pair_count,
            lives = config.lives,
            seed = rng.seed(),
            "pairs round dealt"
        );

        Ok(Self {
            remaining: cards.len(),
            cards,
            index,
            phase: PairPhase::Ready,
            lives: config.lives,
            matched_pairs: 0,
        })
    }

    /// Turn a card over.
    ///
    /// Fails with `InvalidState` once the round is over or when the card was
    /// already matched, and with `UnknownItem` for ids not on the table.
    /// A failed call changes nothing.
    pub fn select(&mut self, id: ItemId) -> RoundResult<SelectResult> {
        let pending = match self.phase {
            PairPhase::Ready => None,
            PairPhase::AwaitingSecondPick { pending } => Some(pending),
            phase => {
                return Err(RoundError::InvalidState {
                    operation: "select",
                    phase: phase.name(),
                })
            }
        };

        let slot = self.slot(id)?;
        if self.cards[slot].removed {
            return Err(RoundError::InvalidState {
                operation: "select a matched card",
                phase: self.phase.name(),
            });
        }

        let Some(pending) = pending else {
            trace!(card = %id, "first pick");
            self.phase = PairPhase::AwaitingSecondPick { pending: id };
            return Ok(SelectResult::First);
        };

        if pending == id {
            return Ok(SelectResult::ReselectedSame);
        }

        let first = self.slot(pending)?;
        if self.cards[first].item.key == self.cards[slot].item.key {
            self.cards[first].removed = true;
            self.cards[slot].removed = true;
            self.remaining -= 2;
            self.matched_pairs += 1;
            self.phase = if self.remaining == 0 {
                PairPhase::Won
            } else {
                PairPhase::Ready
            };
            debug!(first = %pending, second = %id, remaining = self.remaining, phase = self.phase.name(), "match");
            Ok(SelectResult::Match)
        } else {
            self.lives = self.lives.saturating_sub(1);
            self.phase = if self.lives == 0 {
                PairPhase::Lost
            } else {
                PairPhase::Ready
            };
            debug!(first = %pending, second = %id, lives = self.lives, phase = self.phase.name(), "mismatch");
            Ok(SelectResult::Mismatch)
        }
    }

    /// End the round as lost without touching the counters.
    ///
    /// Presentation calls this when its own timer runs out. It must not
    /// interleave with a `select` on the same round.
    pub fn forfeit(&mut self) -> RoundResult<()> {
        if self.phase.is_terminal() {
            return Err(RoundError::InvalidState {
                operation: "forfeit",
                phase: self.phase.name(),
            });
        }
        debug!(remaining = self.remaining, lives = self.lives, "pairs round forfeited");
        self.phase = PairPhase::Lost;
        Ok(())
    }

    fn slot(&self, id: ItemId) -> RoundResult<usize> {
        self.index.get(&id).copied().ok_or(RoundError::UnknownItem(id))
    }

    /// Cards in layout order, matched ones included.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: ItemId) -> Option<&Card> {
        self.index.get(&id).map(|&slot| &self.cards[slot])
    }

    /// The face-up card waiting for its partner.
    #[must_use]
    pub fn pending(&self) -> Option<ItemId> {
        match self.phase {
            PairPhase::AwaitingSecondPick { pending } => Some(pending),
            _ => None,
        }
    }

    #[must_use]
    pub fn remaining_lives(&self) -> u32 {
        self.lives
    }

    #[must_use]
    pub fn remaining_items(&self) -> usize {
        self.remaining
    }

    #[must_use]
    pub fn matched_pairs(&self) -> u32 {
        self.matched_pairs
    }
}

impl Round for PairRound {
    type Phase = PairPhase;

    fn phase(&self) -> PairPhase {
        self.phase
    }

    fn status(&self) -> RoundStatus<PairPhase> {
        RoundStatus {
            phase: self.phase,
            remaining_lives: Some(self.lives),
            remaining_items: self.remaining,
            score: self.matched_pairs,
        }
    }

    fn outcome(&self) -> Option<RoundOutcome> {
        match self.phase {
            PairPhase::Won => Some(RoundOutcome::Won),
            PairPhase::Lost => Some(RoundOutcome::Lost),
            _ => None,
        }
    }
}
