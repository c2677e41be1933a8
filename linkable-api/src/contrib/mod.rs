//! Example item type integrations.
//!
//! Each integration configures a `ModelItemType` over an in-memory
//! collection. They are registered by the composition root during startup.

pub mod files;
pub mod pages;

use std::sync::Arc;

use linkable_registry::{LinkableError, MemoryCollection, Record, Registry};

use crate::fixtures::Fixtures;

/// Seed the example collections from `fixtures` and register their item types.
pub fn register_all(registry: &Registry, fixtures: Fixtures) -> Result<(), LinkableError> {
    let page_collection = Arc::new(MemoryCollection::with_records(
        pages::page_meta(),
        fixtures.pages.into_iter().map(Record::from),
    ));
    registry.register(Arc::new(pages::page_item_type(page_collection)))?;

    let file_collection = Arc::new(MemoryCollection::with_records(
        files::file_meta(),
        fixtures.files.into_iter().map(Record::from),
    ));
    registry.register(Arc::new(files::file_item_type(file_collection)))?;

    Ok(())
}
