//! # Linkable Registry
//!
//! This crate provides the contracts for pluggable content search: item
//! types that can search a category of content, items that describe a
//! single result, a model-backed default item type, and the registry that
//! fans a query out to every registered item type.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod memory;
pub mod model;
pub mod object_item;
pub mod registry;
pub mod types;
pub mod utils;

pub use config::{FailureMode, RegistryConfig, DEFAULT_SEARCH_LIMIT};
pub use errors::LinkableError;
pub use interfaces::{Item, ItemType, ModelCollection};
pub use memory::MemoryCollection;
pub use model::{ItemDisplay, ModelItemType};
pub use object_item::{Linkable, ObjectItem};
pub use registry::Registry;
pub use types::{
    AggregateResults, Deferred, Filter, ModelMeta, ModelQuery, Predicate, ProviderOutcome, Record,
    SearchPage,
};

pub use linkable_shared::{
    Actor, ImageHandle, ItemSummary, ItemTypeSummary, Link, SearchRequest, Thumbnail, UrlSummary,
};
