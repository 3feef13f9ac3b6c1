//! Items: the unit of content a round is built from.
//!
//! An `Item` is a card face, a picture, or a sortable object. The engine
//! only ever looks at two things: its `ItemId` and its `MatchKey`. Anything
//! presentation needs (texture key, image path, caption) rides along in
//! `metadata` and is never interpreted here.

use serde::{Deserialize, Serialize};

use super::metadata::{MetaKey, MetaValue, Metadata};

/// Unique identifier for an item within a pool or round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl ItemId {
    /// Create a new item ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Item({})", self.0)
    }
}

/// Ground-truth label used for comparison.
///
/// Depending on the round this is a pair-group name ("card-3"), a category
/// ("Fruit") or the correct answer string ("Dog"). Comparison is exact.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MatchKey(pub String);

impl MatchKey {
    /// Create a new match key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Borrow the key text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MatchKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for MatchKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for MatchKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single piece of round content.
///
/// ```
/// use minigame_rounds::core::{Item, ItemId};
///
/// let dog = Item::new(ItemId::new(0), "Dog")
///     .with_meta("image", "name-the-picture/dog.jpg")
///     .with_meta("height", 100i64);
///
/// assert_eq!(dog.key.as_str(), "Dog");
/// assert_eq!(dog.meta_text("image"), Some("name-the-picture/dog.jpg"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub key: MatchKey,
    /// Display data, opaque to the engine.
    #[serde(default)]
    pub metadata: Metadata,
}

impl Item {
    /// Create an item with no display metadata.
    pub fn new(id: ItemId, key: impl Into<MatchKey>) -> Self {
        Self {
            id,
            key: key.into(),
            metadata: Metadata::default(),
        }
    }

    /// Attach a metadata entry (builder pattern).
    #[must_use]
    pub fn with_meta(mut self, key: impl Into<MetaKey>, value: impl Into<MetaValue>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Same item under a different id. Used when a face is dealt twice.
    #[must_use]
    pub fn with_id(&self, id: ItemId) -> Self {
        Self {
            id,
            key: self.key.clone(),
            metadata: self.metadata.clone(),
        }
    }

    /// Does this item carry the given key?
    #[must_use]
    pub fn matches(&self, key: &MatchKey) -> bool {
        &self.key == key
    }

    /// Look up a text metadata entry.
    #[must_use]
    pub fn meta_text(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(MetaValue::as_text)
    }

    /// Look up an integer metadata entry.
    #[must_use]
    pub fn meta_int(&self, key: &str) -> Option<i64> {
        self.metadata.get(key).and_then(MetaValue::as_int)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_display() {
        assert_eq!(ItemId::new(7).raw(), 7);
        assert_eq!(format!("{}", ItemId::new(7)), "Item(7)");
    }

    #[test]
    fn test_match_key_equality() {
        let a: MatchKey = "card-1".into();
        let b = MatchKey::new(String::from("card-1"));
        assert_eq!(a, b);
        assert_ne!(a, MatchKey::from("card-2"));
    }

    #[test]
    fn test_with_id_keeps_key_and_metadata() {
        let face = Item::new(ItemId::new(0), "card-4").with_meta("texture", "card-4");
        let twin = face.with_id(ItemId::new(1));

        assert_eq!(twin.id, ItemId::new(1));
        assert!(twin.matches(&face.key));
        assert_eq!(twin.meta_text("texture"), Some("card-4"));
    }

    #[test]
    fn test_meta_lookup_wrong_type() {
        let item = Item::new(ItemId::new(3), "Motorbike").with_meta("height", 100i64);
        assert_eq!(item.meta_int("height"), Some(100));
        assert_eq!(item.meta_text("height"), None);
        assert_eq!(item.meta_int("width"), None);
    }

    #[test]
    fn test_item_serialization() {
        let item = Item::new(ItemId::new(2), "Cat").with_meta("image", "cat.jpg");
        let json = serde_json::to_string(&item).unwrap();
        let restored: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(item, restored);
    }
}
