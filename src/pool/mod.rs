//! Item sources: pools and the static content catalog.

pub mod catalog;
#[allow(clippy::module_inception)]
pub mod pool;

pub use catalog::{Catalog, LevelEntry, LevelItemEntry, PairFaces, PictureEntry, RecallObjects};
pub use pool::ItemPool;
