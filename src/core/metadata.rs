//! Display metadata carried by items.
//!
//! The catalog writes texture keys, image paths, captions and the odd fixed
//! display height. The engine copies these along with the item and never
//! reads them itself.

use std::borrow::Borrow;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Metadata entry name, e.g. `"texture"` or `"height"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetaKey(pub String);

impl MetaKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

// Lets `Metadata::get` take a plain `&str`.
impl Borrow<str> for MetaKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MetaKey {
    fn from(key: &str) -> Self {
        Self(key.to_owned())
    }
}

impl From<String> for MetaKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// A metadata value: text or a pixel size.
///
/// Untagged, so a catalog dump reads `"texture": "card-3"` rather than a
/// wrapped variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Int(i64),
    Text(String),
}

impl MetaValue {
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        if let MetaValue::Int(v) = self {
            Some(*v)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        if let MetaValue::Text(s) = self {
            Some(s)
        } else {
            None
        }
    }
}

impl From<i64> for MetaValue {
    fn from(v: i64) -> Self {
        MetaValue::Int(v)
    }
}

impl From<&str> for MetaValue {
    fn from(v: &str) -> Self {
        MetaValue::Text(v.to_owned())
    }
}

impl From<String> for MetaValue {
    fn from(v: String) -> Self {
        MetaValue::Text(v)
    }
}

/// Display metadata of one item.
pub type Metadata = FxHashMap<MetaKey, MetaValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_str() {
        let mut meta = Metadata::default();
        meta.insert("texture".into(), "card-0".into());
        meta.insert("height".into(), 204i64.into());

        assert_eq!(meta.get("texture").and_then(MetaValue::as_text), Some("card-0"));
        assert_eq!(meta.get("height").and_then(MetaValue::as_int), Some(204));
        assert_eq!(meta.get("height").and_then(MetaValue::as_text), None);
        assert!(meta.get("image").is_none());
    }

    #[test]
    fn test_untagged_json() {
        let mut meta = Metadata::default();
        meta.insert("image".into(), "dog.jpg".into());
        meta.insert("height".into(), 100i64.into());

        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["image"], "dog.jpg");
        assert_eq!(json["height"], 100);

        let restored: Metadata = serde_json::from_value(json).unwrap();
        assert_eq!(restored, meta);
    }
}
