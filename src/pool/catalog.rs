//! Static content tables, loaded from TOML.
//!
//! The catalog carries the card faces for the pairs game, the picture table
//! for picture naming, the object list for "what's missing" and the
//! per-level category tables for sorting. A default catalog ships inside the
//! crate (`assets/catalog.toml`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::pool::ItemPool;
use crate::core::{Item, ItemId, MatchKey, RoundError, RoundResult};
use crate::rounds::Level;

const EMBEDDED: &str = include_str!("../../assets/catalog.toml");

/// Card faces for the pairs game.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PairFaces {
    /// Texture shown while a card is face down.
    pub back: String,
    /// One texture per face; each face is dealt twice.
    pub faces: Vec<String>,
}

/// One row of the picture-naming table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PictureEntry {
    pub id: u32,
    pub texture: String,
    pub image: String,
    /// Correct caption; the match key.
    pub answer: String,
    /// Fixed display height overriding the aspect-derived one.
    #[serde(default)]
    pub height: Option<i64>,
}

/// Objects for the "what's missing" game, easiest level first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecallObjects {
    pub objects: Vec<String>,
}

/// A sortable object inside a level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelItemEntry {
    pub name: String,
    pub image: String,
    pub category: String,
}

/// A drag-to-category level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelEntry {
    pub categories: Vec<String>,
    pub items: Vec<LevelItemEntry>,
}

/// All static content.
///
/// ```
/// use minigame_rounds::pool::Catalog;
///
/// let catalog = Catalog::embedded().unwrap();
/// assert_eq!(catalog.pair_pool().len(), 16);
/// assert!(catalog.level("level-02").is_ok());
/// assert!(catalog.level("level-99").is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub pairs: PairFaces,
    #[serde(default)]
    pub pictures: Vec<PictureEntry>,
    #[serde(default)]
    pub recall: RecallObjects,
    #[serde(default)]
    pub levels: BTreeMap<String, LevelEntry>,
}

impl Catalog {
    /// Parse a catalog from TOML text.
    pub fn from_toml(text: &str) -> RoundResult<Self> {
        let catalog: Catalog =
            toml::from_str(text).map_err(|e| RoundError::InvalidConfig(e.to_string()))?;
        debug!(
            faces = catalog.pairs.faces.len(),
            pictures = catalog.pictures.len(),
            objects = catalog.recall.objects.len(),
            levels = catalog.levels.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// The catalog bundled with the crate.
    pub fn embedded() -> RoundResult<Self> {
        Self::from_toml(EMBEDDED)
    }

    /// Card faces as items, one per face.
    #[must_use]
    pub fn card_faces(&self) -> Vec<Item> {
        self.pairs
            .faces
            .iter()
            .zip(0u32..)
            .map(|(face, id)| {
                Item::new(ItemId::new(id), face.as_str())
                    .with_meta("texture", face.as_str())
                    .with_meta("back", self.pairs.back.as_str())
            })
            .collect()
    }

    /// Every face dealt twice, ready for `PairRound::start`.
    #[must_use]
    pub fn pair_pool(&self) -> ItemPool {
        ItemPool::paired_from_faces(self.card_faces())
    }

    /// The picture-naming table as a pool keyed by correct answer.
    pub fn picture_pool(&self) -> RoundResult<ItemPool> {
        ItemPool::from_items(self.pictures.iter().map(|entry| {
            let item = Item::new(ItemId::new(entry.id), entry.answer.as_str())
                .with_meta("texture", entry.texture.as_str())
                .with_meta("image", entry.image.as_str());
            match entry.height {
                Some(height) => item.with_meta("height", height),
                None => item,
            }
        }))
    }

    /// The first `available_count` recall objects, with ids starting at 1.
    ///
    /// Each object is its own key: the answer to "what's missing" is the
    /// object itself.
    pub fn recall_pool(&self, available_count: usize) -> RoundResult<ItemPool> {
        let objects = &self.recall.objects;
        if available_count > objects.len() {
            return Err(RoundError::InsufficientPool {
                required: available_count,
                available: objects.len(),
            });
        }
        ItemPool::from_items(objects.iter().take(available_count).zip(1u32..).map(
            |(name, id)| Item::new(ItemId::new(id), name.as_str()).with_meta("texture", name.as_str()),
        ))
    }

    /// Level keys in sorted order.
    pub fn level_keys(&self) -> impl Iterator<Item = &str> {
        self.levels.keys().map(String::as_str)
    }

    /// Build a sorting level by key.
    pub fn level(&self, key: &str) -> RoundResult<Level> {
        let Some(entry) = self.levels.get(key) else {
            warn!(level = key, "level data not found");
            return Err(RoundError::UnknownLevel(key.to_string()));
        };

        let items = entry
            .items
            .iter()
            .zip(0u32..)
            .map(|(row, id)| {
                Item::new(ItemId::new(id), row.category.as_str())
                    .with_meta("name", row.name.as_str())
                    .with_meta("image", row.image.as_str())
            })
            .collect();

        Ok(Level {
            key: key.to_string(),
            categories: entry.categories.iter().map(|c| MatchKey::new(c.as_str())).collect(),
            items,
        })
    }
}
