//! The item type registry and aggregate search.
//!
//! The registry is the catalog of all item types known to the process and
//! the single entry point for searching across them.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use futures::future::FutureExt;
use futures::stream::{self, BoxStream, StreamExt};
use indexmap::IndexMap;
use linkable_shared::{Actor, SearchRequest};
use tracing::{debug, error, info, instrument, warn};

use crate::config::{FailureMode, RegistryConfig};
use crate::errors::LinkableError;
use crate::interfaces::{Item, ItemType};
use crate::types::{AggregateResults, ProviderOutcome, SearchPage};

/// Catalog mapping identifiers to item types.
///
/// A registry is created once by the application's composition root, filled
/// during initialization and shared (usually behind an `Arc`) with whatever
/// needs to search. Registration takes a write lock; searches snapshot the
/// registered item types under a read lock and release it before querying,
/// so late registrations never race with a running search.
///
/// Item types are iterated in first-registration order. Re-registering an
/// identifier replaces the item type in place.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use linkable_registry::{MemoryCollection, ModelItemType, ModelMeta, Registry};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let registry = Registry::new();
/// let pages = Arc::new(MemoryCollection::new(ModelMeta::new("cms.models", "Page", "page")));
/// registry.register(Arc::new(ModelItemType::new(pages).with_search_fields(["title"])))?;
///
/// let items = registry.search("contact", 100).await?;
/// # Ok(())
/// # }
/// ```
pub struct Registry {
    item_types: RwLock<IndexMap<String, Arc<dyn ItemType>>>,
    config: RegistryConfig,
}

impl Registry {
    /// Create an empty registry with default configuration.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry with custom configuration.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            item_types: RwLock::new(IndexMap::new()),
            config,
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    fn read(&self) -> RwLockReadGuard<'_, IndexMap<String, Arc<dyn ItemType>>> {
        self.item_types.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, IndexMap<String, Arc<dyn ItemType>>> {
        self.item_types.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register an item type under its `get_identifier()`.
    ///
    /// An item type already registered under the same identifier is
    /// replaced; this is not an error.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the item type was registered
    /// * `Err(LinkableError::NotImplemented)` - If the item type has no identifier
    pub fn register(&self, item_type: Arc<dyn ItemType>) -> Result<(), LinkableError> {
        let identifier = item_type.get_identifier()?;
        let replaced = self.write().insert(identifier.clone(), item_type);

        if replaced.is_some() {
            warn!(identifier = %identifier, "Item type already registered, replacing it");
        } else {
            info!(identifier = %identifier, "Registered item type");
        }

        Ok(())
    }

    /// Lookup an item type by identifier.
    pub fn get(&self, identifier: &str) -> Option<Arc<dyn ItemType>> {
        self.read().get(identifier).cloned()
    }

    /// Returns `true` if an item type is registered under `identifier`.
    pub fn contains(&self, identifier: &str) -> bool {
        self.read().contains_key(identifier)
    }

    /// Registered identifiers in iteration order.
    pub fn identifiers(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    /// Snapshot of the registered item types in iteration order.
    pub fn item_types(&self) -> Vec<(String, Arc<dyn ItemType>)> {
        self.read()
            .iter()
            .map(|(identifier, item_type)| (identifier.clone(), Arc::clone(item_type)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Search every item type for `query` and flatten the results.
    ///
    /// Each item type returns its first page of at most `limit` items, so the
    /// total is bounded by `limit` times the number of item types. Results
    /// are neither deduplicated nor ranked; they follow registry order.
    pub async fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Box<dyn Item>>, LinkableError> {
        self.search_as(query, limit, None).await
    }

    /// Like [`search`](Self::search), handing `actor` to every item type.
    pub async fn search_as(
        &self,
        query: &str,
        limit: usize,
        actor: Option<&Actor>,
    ) -> Result<Vec<Box<dyn Item>>, LinkableError> {
        let request = SearchRequest::new(query)
            .with_items_per_page(limit)
            .with_actor(actor.cloned());
        Ok(self.search_detailed(&request).await?.items)
    }

    /// Search every item type with `request` and report per item type
    /// outcomes alongside the flattened items.
    ///
    /// Invalid pagination parameters are rejected before any item type is
    /// queried.
    ///
    /// Up to `max_concurrency` item types are queried at once; results are
    /// still assembled in registry order. With [`FailureMode::FailFast`] the
    /// first failure aborts the search, with [`FailureMode::Isolate`] the
    /// failing item type is skipped and its error recorded. A
    /// `NotImplemented` error aborts the search in either mode.
    #[instrument(
        skip(self, request),
        fields(query = %request.query, page = request.page, items_per_page = request.items_per_page)
    )]
    pub async fn search_detailed(
        &self,
        request: &SearchRequest,
    ) -> Result<AggregateResults, LinkableError> {
        request.validate().map_err(LinkableError::validation)?;

        let snapshot = self.item_types();
        let provider_count = snapshot.len();

        let mut pages: BoxStream<'_, (String, Result<SearchPage, LinkableError>)> = stream::iter(snapshot)
            .map(|(identifier, item_type)| {
                async move {
                    let result = self.search_one(&identifier, item_type.as_ref(), request).await;
                    (identifier, result)
                }
                .boxed()
            })
            .buffered(self.config.concurrency())
            .boxed();

        let mut items: Vec<Box<dyn Item>> = Vec::new();
        let mut outcomes = Vec::with_capacity(provider_count);

        while let Some((identifier, result)) = pages.next().await {
            match result {
                Ok(page) => {
                    outcomes.push(ProviderOutcome {
                        identifier,
                        count: page.len(),
                        has_more: page.has_more,
                        error: None,
                    });
                    items.extend(page.results);
                }
                Err(err) => {
                    let err = LinkableError::provider(identifier.as_str(), err);
                    if err.is_not_implemented() {
                        error!(identifier = %identifier, error = %err, "Item type violates its contract");
                        return Err(err);
                    }
                    match self.config.failure_mode {
                        FailureMode::FailFast => {
                            error!(identifier = %identifier, error = %err, "Item type search failed");
                            return Err(err);
                        }
                        FailureMode::Isolate => {
                            warn!(identifier = %identifier, error = %err, "Skipping failed item type");
                            outcomes.push(ProviderOutcome {
                                identifier,
                                count: 0,
                                has_more: false,
                                error: Some(err),
                            });
                        }
                    }
                }
            }
        }

        debug!(
            providers = provider_count,
            results = items.len(),
            "Aggregate search completed"
        );

        Ok(AggregateResults { items, outcomes })
    }

    async fn search_one(
        &self,
        identifier: &str,
        item_type: &dyn ItemType,
        request: &SearchRequest,
    ) -> Result<SearchPage, LinkableError> {
        debug!(identifier = %identifier, "Searching item type");

        match self.config.provider_timeout {
            Some(timeout) => tokio::time::timeout(timeout, item_type.search(request))
                .await
                .map_err(|_| {
                    let timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
                    LinkableError::timeout(identifier, timeout_ms)
                })?,
            None => item_type.search(request).await,
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
