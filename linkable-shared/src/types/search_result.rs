//! Summaries returned by the HTTP boundary.
//!
//! These are plain data snapshots of the item type and item contracts,
//! built once per request and serialized as JSON.

use serde::{Deserialize, Serialize};

use super::link::UrlSummary;
use super::thumbnail::Thumbnail;

/// Listing entry for a registered item type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemTypeSummary {
    /// Registry key of the item type.
    pub identifier: String,
    /// Human readable name.
    pub verbose_name: String,
    /// Short name for menus and filters.
    pub short_name: String,
}

/// A single aggregate search hit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemSummary {
    pub identifier: String,
    pub verbose_name: String,
    pub short_name: String,
    /// Plain text description, possibly empty.
    pub description: String,
    /// Link targets of the item.
    pub urls: Vec<UrlSummary>,
    /// The item's own thumbnail, else its item type's default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Thumbnail>,
}
