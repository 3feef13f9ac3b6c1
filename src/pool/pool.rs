//! Item pool: the content a round draws from.
//!
//! An `ItemPool` holds items in insertion order with O(1) lookup by id.
//! Pools are built by presentation from static tables (see
//! `crate::pool::Catalog`) and handed to round constructors.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{Item, ItemId, MatchKey, RoundError, RoundResult, RoundRng};

/// Ordered collection of items with unique ids.
///
/// ## Example
///
/// ```
/// use minigame_rounds::core::{Item, ItemId};
/// use minigame_rounds::pool::ItemPool;
///
/// let mut pool = ItemPool::new();
/// pool.insert(Item::new(ItemId::new(0), "Dog")).unwrap();
/// let cat = pool.insert_auto("Cat").unwrap();
///
/// assert_eq!(pool.len(), 2);
/// assert_eq!(pool.get(cat).unwrap().key.as_str(), "Cat");
/// assert!(pool.insert(Item::new(ItemId::new(0), "Car")).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ItemPool {
    items: Vec<Item>,
    index: FxHashMap<ItemId, usize>,
    /// One past the highest id seen. Wider than `ItemId` so it can sit
    /// past `u32::MAX`.
    next_id: u64,
}

impl ItemPool {
    /// Create a new empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pool from items, rejecting duplicate ids.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> RoundResult<Self> {
        let mut pool = Self::new();
        for item in items {
            pool.insert(item)?;
        }
        Ok(pool)
    }

    /// Build a pair pool by dealing every face twice.
    ///
    /// Each face becomes two items with fresh ids (`2i` and `2i + 1`) that
    /// share its key and metadata. The ids the faces carried are ignored.
    #[must_use]
    pub fn paired_from_faces(faces: impl IntoIterator<Item = Item>) -> Self {
        let mut pool = Self::new();
        for (face, slot) in faces.into_iter().zip(0u32..) {
            pool.push(face.with_id(ItemId::new(2 * slot)));
            pool.push(face.with_id(ItemId::new(2 * slot + 1)));
        }
        pool
    }

    /// Add an item. Fails if its id is already taken.
    pub fn insert(&mut self, item: Item) -> RoundResult<()> {
        if self.index.contains_key(&item.id) {
            return Err(RoundError::DuplicateItem(item.id));
        }
        self.push(item);
        Ok(())
    }

    /// Add an item with an auto-assigned id and no metadata.
    ///
    /// The id is one past the highest id in the pool. Fails with
    /// `InvalidConfig` once `u32::MAX` is taken.
    pub fn insert_auto(&mut self, key: impl Into<MatchKey>) -> RoundResult<ItemId> {
        let raw = u32::try_from(self.next_id)
            .map_err(|_| RoundError::InvalidConfig("item ids exhausted".to_string()))?;
        let id = ItemId::new(raw);
        self.push(Item::new(id, key));
        Ok(id)
    }

    fn push(&mut self, item: Item) {
        self.next_id = self.next_id.max(u64::from(item.id.raw()) + 1);
        self.index.insert(item.id, self.items.len());
        self.items.push(item);
    }

    /// Get an item by id.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.index.get(&id).map(|&i| &self.items[i])
    }

    /// Check if an id is in the pool.
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.index.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Items carrying the given key, in insertion order.
    pub fn find_by_key<'a>(&'a self, key: &'a MatchKey) -> impl Iterator<Item = &'a Item> + 'a {
        self.items.iter().filter(move |item| item.matches(key))
    }

    /// Distinct keys in first-seen order.
    #[must_use]
    pub fn distinct_keys(&self) -> Vec<MatchKey> {
        let mut seen = FxHashSet::default();
        self.items
            .iter()
            .filter(|item| seen.insert(&item.key))
            .map(|item| item.key.clone())
            .collect()
    }

    /// Keys backed by at least two items, in first-seen order.
    ///
    /// Only these keys can be dealt as a pair.
    #[must_use]
    pub fn pairable_keys(&self) -> Vec<MatchKey> {
        let mut counts: FxHashMap<&MatchKey, usize> = FxHashMap::default();
        for item in &self.items {
            *counts.entry(&item.key).or_insert(0) += 1;
        }
        self.distinct_keys()
            .into_iter()
            .filter(|key| counts.get(key).copied().unwrap_or(0) >= 2)
            .collect()
    }

    /// The word list for an answer picker: every distinct key, shuffled.
    #[must_use]
    pub fn answer_choices(&self, rng: &mut RoundRng) -> Vec<MatchKey> {
        let mut keys = self.distinct_keys();
        rng.shuffle(&mut keys);
        keys
    }

    /// Draw `count` distinct items at random.
    pub fn sample(&self, count: usize, rng: &mut RoundRng) -> RoundResult<Vec<Item>> {
        let picked = rng
            .sample_indices(self.items.len(), count)
            .ok_or(RoundError::InsufficientPool {
                required: count,
                available: self.items.len(),
            })?;
        Ok(picked.into_iter().map(|i| self.items[i].clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animals() -> ItemPool {
        ItemPool::from_items([
            Item::new(ItemId::new(0), "Goat"),
            Item::new(ItemId::new(1), "Rabbit"),
            Item::new(ItemId::new(2), "Goat"),
            Item::new(ItemId::new(3), "Horse"),
        ])
        .unwrap()
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = ItemPool::from_items([
            Item::new(ItemId::new(5), "Dog"),
            Item::new(ItemId::new(5), "Cat"),
        ]);
        assert_eq!(result.unwrap_err(), RoundError::DuplicateItem(ItemId::new(5)));
    }

    #[test]
    fn test_insert_auto_skips_used_ids() {
        let mut pool = ItemPool::new();
        pool.insert(Item::new(ItemId::new(10), "Dog")).unwrap();
        let id = pool.insert_auto("Cat").unwrap();
        assert_eq!(id, ItemId::new(11));
        assert!(pool.contains(id));
    }

    #[test]
    fn test_insert_auto_after_max_id() {
        let mut pool = ItemPool::new();
        pool.insert(Item::new(ItemId::new(u32::MAX), "Dog")).unwrap();

        assert!(matches!(pool.insert_auto("Cat"), Err(RoundError::InvalidConfig(_))));
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.get(ItemId::new(u32::MAX)).unwrap().key.as_str(), "Dog");
    }

    #[test]
    fn test_keys() {
        let pool = animals();
        let distinct: Vec<_> = pool.distinct_keys().iter().map(|k| k.0.clone()).collect();
        assert_eq!(distinct, vec!["Goat", "Rabbit", "Horse"]);
        assert_eq!(pool.pairable_keys(), vec![MatchKey::from("Goat")]);
        assert_eq!(pool.find_by_key(&"Goat".into()).count(), 2);
    }

    #[test]
    fn test_paired_from_faces() {
        let faces = (0..3).map(|i| Item::new(ItemId::new(99), format!("card-{i}")));
        let pool = ItemPool::paired_from_faces(faces);

        assert_eq!(pool.len(), 6);
        assert_eq!(pool.pairable_keys().len(), 3);
        let ids: Vec<u32> = pool.iter().map(|item| item.id.raw()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(pool.get(ItemId::new(3)).unwrap().key.as_str(), "card-1");
    }

    #[test]
    fn test_answer_choices_deduplicated() {
        let pool = animals();
        let mut rng = RoundRng::new(1);
        let mut choices = pool.answer_choices(&mut rng);
        assert_eq!(choices.len(), 3);
        choices.sort();
        assert_eq!(
            choices,
            vec![MatchKey::from("Goat"), MatchKey::from("Horse"), MatchKey::from("Rabbit")]
        );
    }

    #[test]
    fn test_sample() {
        let pool = animals();
        let mut rng = RoundRng::new(3);

        let drawn = pool.sample(3, &mut rng).unwrap();
        assert_eq!(drawn.len(), 3);
        let mut ids: Vec<_> = drawn.iter().map(|item| item.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);

        assert_eq!(
            pool.sample(5, &mut rng).unwrap_err(),
            RoundError::InsufficientPool {
                required: 5,
                available: 4
            }
        );
    }
}
