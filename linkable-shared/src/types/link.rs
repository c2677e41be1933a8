//! Link descriptors attached to search results.

use serde::{Deserialize, Serialize};

/// A named, navigable link target for an item.
///
/// `name` is machine readable (e.g. `public_profile`), `verbose_name` is the
/// human readable label and `url` is the target itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Link {
    /// Machine readable name of the link.
    pub name: String,
    /// Human readable label.
    pub verbose_name: String,
    /// The link target.
    pub url: String,
}

impl Link {
    /// Create a new link.
    pub fn new(
        name: impl Into<String>,
        verbose_name: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            verbose_name: verbose_name.into(),
            url: url.into(),
        }
    }
}

/// The reduced `{name, url}` form of a link returned by the search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UrlSummary {
    pub name: String,
    pub url: String,
}

impl From<Link> for UrlSummary {
    fn from(link: Link) -> Self {
        Self {
            name: link.name,
            url: link.url,
        }
    }
}
