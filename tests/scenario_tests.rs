//! End-to-end round scenarios.
//!
//! These tests drive each round variant the way a scene would: deal or
//! start, feed it clicks, read back results and status.

use minigame_rounds::core::{
    Difficulty, Item, ItemId, PairConfig, RecallDifficulty, RoundError, RoundRng,
};
use minigame_rounds::pool::{Catalog, ItemPool};
use minigame_rounds::rounds::{
    PairPhase, PairRound, Placement, RecallRound, Round, RoundOutcome, ScoringRound, SelectResult,
    SortingRound,
};

/// A1=1, A2=2, B1=3, B2=4.
fn ab_pool() -> ItemPool {
    ItemPool::from_items([
        Item::new(ItemId::new(1), "A"),
        Item::new(ItemId::new(2), "A"),
        Item::new(ItemId::new(3), "B"),
        Item::new(ItemId::new(4), "B"),
    ])
    .unwrap()
}

/// Matching both pairs in order wins the round.
#[test]
fn test_two_pairs_matched_wins() {
    let mut round = PairRound::start(&ab_pool(), PairConfig::new(2, 3), &mut RoundRng::new(1)).unwrap();

    assert_eq!(round.select(ItemId::new(1)).unwrap(), SelectResult::First);
    assert_eq!(round.select(ItemId::new(2)).unwrap(), SelectResult::Match);
    assert_eq!(round.status().remaining_items, 2);

    assert_eq!(round.select(ItemId::new(3)).unwrap(), SelectResult::First);
    assert_eq!(round.select(ItemId::new(4)).unwrap(), SelectResult::Match);

    let status = round.status();
    assert_eq!(status.remaining_items, 0);
    assert_eq!(status.phase, PairPhase::Won);
    assert_eq!(status.remaining_lives, Some(3));
}

/// A mismatch costs one life and returns to Ready.
#[test]
fn test_mismatch_returns_to_ready() {
    let mut round = PairRound::start(&ab_pool(), PairConfig::new(2, 3), &mut RoundRng::new(1)).unwrap();

    round.select(ItemId::new(1)).unwrap();
    assert_eq!(round.select(ItemId::new(3)).unwrap(), SelectResult::Mismatch);

    let status = round.status();
    assert_eq!(status.remaining_lives, Some(2));
    assert_eq!(status.phase, PairPhase::Ready);
}

/// With one life a single mismatch loses, and the round stays closed.
#[test]
fn test_one_life_one_mistake() {
    let mut round = PairRound::start(&ab_pool(), PairConfig::new(2, 1), &mut RoundRng::new(1)).unwrap();

    round.select(ItemId::new(1)).unwrap();
    round.select(ItemId::new(3)).unwrap();
    assert_eq!(round.phase(), PairPhase::Lost);

    let err = round.select(ItemId::new(2)).unwrap_err();
    assert!(matches!(err, RoundError::InvalidState { .. }));
    assert_eq!(round.status().remaining_lives, Some(0));
    assert_eq!(round.status().remaining_items, 4);
}

/// Two items, one right answer: 50%.
#[test]
fn test_scoring_half() {
    let mut round = ScoringRound::start(vec![
        Item::new(ItemId::new(1), "dog"),
        Item::new(ItemId::new(2), "car"),
    ])
    .unwrap();

    round.assign(ItemId::new(1), "dog").unwrap();
    round.assign(ItemId::new(2), "dog").unwrap();
    let report = round.grade().unwrap();

    assert_eq!(report.score, 50);
    let per_item: Vec<_> = report
        .per_item
        .iter()
        .map(|o| (o.item_id, o.correct))
        .collect();
    assert_eq!(per_item, vec![(ItemId::new(1), true), (ItemId::new(2), false)]);
}

/// A pool with a single A cannot deal the A pair.
#[test]
fn test_single_item_pool_fails() {
    let pool = ItemPool::from_items([Item::new(ItemId::new(1), "A")]).unwrap();
    let err = PairRound::start(&pool, PairConfig::new(1, 3), &mut RoundRng::new(1)).unwrap_err();
    assert!(matches!(err, RoundError::InsufficientPool { required: 1, .. }));
}

/// A full memory game on the bundled deck, played with perfect recall.
#[test]
fn test_memory_game_from_catalog() {
    let catalog = Catalog::embedded().unwrap();
    let config = PairConfig::from_difficulty(Difficulty::Expert).unwrap();
    let mut round = PairRound::start(&catalog.pair_pool(), config, &mut RoundRng::new(2024)).unwrap();
    assert_eq!(round.cards().len(), 12);

    // Perfect memory: every first pick is followed by its partner.
    let ids: Vec<ItemId> = round.cards().iter().map(|c| c.item.id).collect();
    for &id in &ids {
        if round.is_terminal() {
            break;
        }
        if round.card(id).is_some_and(|c| c.removed) {
            continue;
        }
        let key = round.card(id).unwrap().item.key.clone();
        let partner = round
            .cards()
            .iter()
            .find(|c| c.item.id != id && c.item.key == key && !c.removed)
            .map(|c| c.item.id)
            .unwrap();
        round.select(id).unwrap();
        assert_eq!(round.select(partner).unwrap(), SelectResult::Match);
    }

    assert_eq!(round.outcome(), Some(RoundOutcome::Won));
    assert_eq!(round.remaining_lives(), 7);
    assert_eq!(round.matched_pairs(), 6);
}

/// Picture naming on the bundled table: everything right scores 100.
#[test]
fn test_picture_naming_from_catalog() {
    let catalog = Catalog::embedded().unwrap();
    let pool = catalog.picture_pool().unwrap();
    let mut rng = RoundRng::new(8);

    let words = pool.answer_choices(&mut rng);
    assert_eq!(words.len(), 10);

    let mut round = ScoringRound::from_pool(&pool, 4, &mut rng).unwrap();
    let answers: Vec<_> = round.items().iter().map(|i| (i.id, i.key.clone())).collect();
    for (id, key) in answers {
        assert!(words.contains(&key));
        round.assign(id, key).unwrap();
    }

    let report = round.grade().unwrap();
    assert!(report.is_perfect());
    assert_eq!(round.outcome(), Some(RoundOutcome::Graded(100)));
}

/// "What's missing" on the hard preset, answered correctly.
#[test]
fn test_recall_from_catalog() {
    let catalog = Catalog::embedded().unwrap();
    let settings = RecallDifficulty::Hard.settings();
    let pool = catalog.recall_pool(settings.available_count).unwrap();

    let mut round = RecallRound::start(&pool, settings, &mut RoundRng::new(99)).unwrap();
    assert_eq!(round.shown().len(), 7);
    round.begin_choice().unwrap();
    assert_eq!(round.shown().len(), 6);
    assert_eq!(round.choices().len(), 10);

    let missing = round.missing();
    assert!(round.answer(missing).unwrap());
    assert_eq!(round.outcome(), Some(RoundOutcome::Won));
}

/// Sorting every object of level 2 completes it; wrong drops never count.
#[test]
fn test_sorting_level_from_catalog() {
    let catalog = Catalog::embedded().unwrap();
    let level = catalog.level("level-02").unwrap();
    let categories = level.categories.clone();
    let items: Vec<_> = level.items.iter().map(|i| (i.id, i.key.clone())).collect();
    let mut round = SortingRound::start(level).unwrap();

    for (id, key) in items {
        let wrong = categories.iter().find(|c| **c != key).unwrap().clone();
        assert_eq!(round.place(id, wrong).unwrap(), Placement::Rejected);
        assert_eq!(round.place(id, key).unwrap(), Placement::Accepted);
    }

    assert_eq!(round.outcome(), Some(RoundOutcome::Won));
    assert_eq!(round.status().score, 14);
}
