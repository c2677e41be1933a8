//! Backing collection trait definition.
//!
//! This module defines the storage contract consumed by `ModelItemType`,
//! allowing different backends (in-memory, SQL, search engines) to serve
//! model-backed searches.

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::LinkableError;
use crate::types::{ModelMeta, ModelQuery, Record};

/// A filterable, orderable and sliceable collection of records of one model.
///
/// Backends must evaluate `query.filter` as a disjunction of case-insensitive
/// substring predicates, apply `query.order_by` (a leading `-` means
/// descending) and only then skip `query.offset` records and take at most
/// `query.limit`.
#[async_trait]
pub trait ModelCollection: Send + Sync {
    /// Metadata of the model stored in this collection.
    fn meta(&self) -> &ModelMeta;

    /// Fetch the records selected by `query`.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Arc<Record>>)` - Matching records in query order
    /// * `Err(LinkableError)` - If the backend is unavailable
    async fn fetch(&self, query: &ModelQuery) -> Result<Vec<Arc<Record>>, LinkableError>;
}
