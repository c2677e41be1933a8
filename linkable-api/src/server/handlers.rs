// HTTP request handlers
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use linkable_shared::{ItemSummary, ItemTypeSummary, SearchParams, SearchRequest};
use tracing::{debug, info, warn};

use crate::errors::ApiError;
use crate::server::state::AppState;

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "Linkable server is running")
}

/// List every registered item type in registry order
pub async fn list_item_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<ItemTypeSummary>>, ApiError> {
    let summaries = state
        .registry
        .item_types()
        .iter()
        .map(|(_, item_type)| item_type.summary())
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = summaries.len(), "Listed item types");
    Ok(Json(summaries))
}

/// Describe a single item type
pub async fn get_item_type(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> Result<Json<ItemTypeSummary>, ApiError> {
    let item_type = state
        .registry
        .get(&identifier)
        .ok_or_else(|| ApiError::not_found(format!("item type '{}'", identifier)))?;

    Ok(Json(item_type.summary()?))
}

/// Aggregate search across every item type.
///
/// `q` is read from the query string; `limit` caps each item type's page.
/// Items without a thumbnail of their own get their item type's default.
pub async fn search_items(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<ItemSummary>>, ApiError> {
    let limit = params.limit.unwrap_or(state.search_limit);
    let request = SearchRequest::new(params.q.as_str()).with_items_per_page(limit);

    let results = state.registry.search_detailed(&request).await?;

    let mut summaries = Vec::with_capacity(results.items.len());
    for (outcome, items) in results.by_item_type() {
        let item_type = state.registry.get(&outcome.identifier);
        for item in items {
            let mut summary = item.summary()?;
            if let Some(item_type) = &item_type {
                summary.thumbnail = item_type.thumbnail_for(item.as_ref());
            }
            summaries.push(summary);
        }
    }

    let failed = results.failures().count();
    if failed > 0 {
        warn!(query = %params.q, failed = failed, "Search skipped failing item types");
    }

    info!(
        query = %params.q,
        limit = limit,
        results = summaries.len(),
        "Search completed"
    );

    Ok(Json(summaries))
}
