//! Interface definitions for item types, items and backing collections.
//!
//! These traits are the extension points of the registry: integrations
//! implement `ItemType` (or configure a `ModelItemType`), results implement
//! `Item`, and storage backends implement `ModelCollection`.

mod item;
mod item_type;
mod model_collection;

pub use item::{Item, CANONICAL_LINK_NAME, CANONICAL_LINK_VERBOSE_NAME};
pub use item_type::ItemType;
pub use model_collection::ModelCollection;
