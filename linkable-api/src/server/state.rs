// App state for Axum server
use std::sync::Arc;

use linkable_registry::Registry;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
    /// Per item type page size when a search request has no `limit`.
    pub search_limit: usize,
}

impl AppState {
    /// State using the registry's configured default limit.
    pub fn new(registry: Arc<Registry>) -> Self {
        let search_limit = registry.config().default_limit;
        Self {
            registry,
            search_limit,
        }
    }
}
