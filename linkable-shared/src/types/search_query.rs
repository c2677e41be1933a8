//! Search request types.
//!
//! This module defines the parameters handed to an item type's `search` and
//! the query string accepted by the HTTP search endpoint.

use serde::{Deserialize, Serialize};

/// Default page size for a single item type search.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// The principal on whose behalf a search runs.
///
/// The registry never inspects the actor; it is handed to item types so that
/// they can apply their own permission filtering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Actor {
    /// Stable identifier of the user.
    pub id: String,

    /// Groups or roles the user belongs to.
    #[serde(default)]
    pub groups: Vec<String>,
}

impl Actor {
    /// Create an actor without any groups.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            groups: Vec::new(),
        }
    }

    /// Add a group membership.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.groups.push(group.into());
        self
    }

    /// Returns true if the actor belongs to `group`.
    pub fn in_group(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g == group)
    }
}

/// Parameters of a single item type search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchRequest {
    /// Free-text query. An empty query is valid.
    #[serde(default)]
    pub query: String,

    /// Optional actor for provider-side permission checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<Actor>,

    /// 1-indexed page number.
    #[serde(default = "default_page")]
    pub page: usize,

    /// Maximum number of results on a page.
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
}

fn default_page() -> usize {
    1
}

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

impl SearchRequest {
    /// Create a request for the first page with the default page size.
    ///
    /// # Example
    ///
    /// ```
    /// use linkable_shared::SearchRequest;
    ///
    /// let request = SearchRequest::new("annual report").with_items_per_page(25);
    /// assert_eq!(request.page, 1);
    /// ```
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            actor: None,
            page: default_page(),
            items_per_page: default_items_per_page(),
        }
    }

    /// Set the page number.
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Set the page size.
    pub fn with_items_per_page(mut self, items_per_page: usize) -> Self {
        self.items_per_page = items_per_page;
        self
    }

    /// Attach an actor.
    pub fn with_actor(mut self, actor: Option<Actor>) -> Self {
        self.actor = actor;
        self
    }

    /// Whitespace-separated terms of the query.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.query.split_whitespace()
    }

    /// Index of the first record on the requested page.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.items_per_page)
    }

    /// Validate the pagination parameters.
    ///
    /// Returns an error message if validation fails.
    pub fn validate(&self) -> Result<(), String> {
        if self.page == 0 {
            return Err("page is 1-indexed and must be at least 1".to_string());
        }

        if self.items_per_page == 0 {
            return Err("items_per_page must be at least 1".to_string());
        }

        Ok(())
    }
}

/// Query string of the aggregate search endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchParams {
    /// Free-text query, empty when omitted.
    #[serde(default)]
    pub q: String,

    /// Per item type page size; the server default applies when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}
