//! The item contract.
//!
//! Every search result is a read-only view over exactly one wrapped object.
//! Implementations supply whatever they know through the hook methods
//! (`identifier`, `urls`, ...) and inherit the `get_*` accessors, which apply
//! the fallback chains and report missing required capabilities.

use std::fmt;

use linkable_shared::{ItemSummary, Link, Thumbnail, UrlSummary};

use crate::errors::LinkableError;
use crate::types::Deferred;

/// Machine readable name of the link derived from a canonical URL.
pub const CANONICAL_LINK_NAME: &str = "canonical";

/// Human readable label of the link derived from a canonical URL.
pub const CANONICAL_LINK_VERBOSE_NAME: &str = "Canonical URL";

/// A single search result.
pub trait Item: Send + Sync {
    /// Identifier of the individual result (display truncates to ~30 chars).
    fn identifier(&self) -> Option<String> {
        None
    }

    /// Title of the result (display truncates to ~30 chars).
    fn verbose_name(&self) -> Option<String> {
        None
    }

    /// Very short name used for menus and filters.
    fn short_name(&self) -> Option<String> {
        None
    }

    /// Plain text description (~200 chars in lists, ~1000 in detail views).
    fn description(&self) -> Option<String> {
        None
    }

    /// Thumbnail of the individual result.
    fn thumbnail(&self) -> Option<Deferred<Thumbnail>> {
        None
    }

    /// Explicit link targets.
    fn urls(&self) -> Option<Deferred<Vec<Link>>> {
        None
    }

    /// Canonical URL accessor of the wrapped object.
    fn canonical_url(&self) -> Option<Deferred<String>> {
        None
    }

    fn get_identifier(&self) -> Result<String, LinkableError> {
        self.identifier().ok_or_else(|| {
            LinkableError::not_implemented("provide an item identifier or override get_identifier")
        })
    }

    fn get_verbose_name(&self) -> Result<String, LinkableError> {
        self.verbose_name().ok_or_else(|| {
            LinkableError::not_implemented(
                "provide an item verbose_name or override get_verbose_name",
            )
        })
    }

    /// Falls back to the verbose name.
    fn get_short_name(&self) -> Result<String, LinkableError> {
        match self.short_name() {
            Some(short_name) => Ok(short_name),
            None => self.get_verbose_name(),
        }
    }

    /// Empty when no description is supplied.
    fn get_description(&self) -> String {
        self.description().unwrap_or_default()
    }

    fn get_thumbnail(&self) -> Option<Thumbnail> {
        self.thumbnail().map(|thumbnail| thumbnail.resolve())
    }

    /// Explicit urls, else a single link to the wrapped object's canonical
    /// URL. Fails when neither exists, since the item cannot be linked to.
    fn get_urls(&self) -> Result<Vec<Link>, LinkableError> {
        if let Some(urls) = self.urls() {
            return Ok(urls.resolve());
        }
        if let Some(url) = self.canonical_url() {
            return Ok(vec![Link::new(
                CANONICAL_LINK_NAME,
                CANONICAL_LINK_VERBOSE_NAME,
                url.resolve(),
            )]);
        }
        Err(LinkableError::not_implemented(
            "get_urls is not implemented, so url selection is not possible",
        ))
    }

    /// Snapshot of the item as returned by the search endpoint.
    fn summary(&self) -> Result<ItemSummary, LinkableError> {
        Ok(ItemSummary {
            identifier: self.get_identifier()?,
            verbose_name: self.get_verbose_name()?,
            short_name: self.get_short_name()?,
            description: self.get_description(),
            urls: self
                .get_urls()?
                .into_iter()
                .map(UrlSummary::from)
                .collect(),
            thumbnail: self.get_thumbnail(),
        })
    }
}

impl fmt::Debug for dyn Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("identifier", &self.identifier())
            .field("verbose_name", &self.verbose_name())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bare;

    impl Item for Bare {}

    struct Titled;

    impl Item for Titled {
        fn identifier(&self) -> Option<String> {
            Some("7".to_string())
        }

        fn verbose_name(&self) -> Option<String> {
            Some("Team".to_string())
        }

        fn canonical_url(&self) -> Option<Deferred<String>> {
            Some(Deferred::thunk(|| "/team/".to_string()))
        }
    }

    #[test]
    fn test_bare_item_reports_missing_capabilities() {
        let item = Bare;
        assert!(item.get_identifier().unwrap_err().is_not_implemented());
        assert!(item.get_verbose_name().unwrap_err().is_not_implemented());
        assert!(item.get_short_name().unwrap_err().is_not_implemented());
        assert!(item.get_urls().unwrap_err().is_not_implemented());
        assert_eq!(item.get_description(), "");
        assert!(item.get_thumbnail().is_none());
    }

    #[test]
    fn test_short_name_falls_back_to_verbose_name() {
        assert_eq!(Titled.get_short_name().unwrap(), "Team");
    }

    #[test]
    fn test_urls_fall_back_to_canonical_url() {
        let urls = Titled.get_urls().unwrap();
        assert_eq!(
            urls,
            vec![Link::new(CANONICAL_LINK_NAME, CANONICAL_LINK_VERBOSE_NAME, "/team/")]
        );
    }

    #[test]
    fn test_summary() {
        let summary = Titled.summary().unwrap();
        assert_eq!(summary.identifier, "7");
        assert_eq!(summary.short_name, "Team");
        assert_eq!(summary.description, "");
        assert_eq!(summary.urls.len(), 1);
        assert_eq!(summary.urls[0].url, "/team/");
    }

    #[test]
    fn test_summary_of_unlinkable_item_fails() {
        assert!(Bare.summary().is_err());
    }

    #[test]
    fn test_debug_shows_identifier() {
        let items: Vec<Box<dyn Item>> = vec![Box::new(Titled)];
        let debug = format!("{:?}", items);
        assert!(debug.contains("Item"));
        assert!(debug.contains("Some(\"7\")"));
    }
}
