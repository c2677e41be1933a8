//! The item type contract.
//!
//! An item type is a search provider for one category of object. `search` is
//! the only method an implementation has to write; the descriptive
//! attributes are optional hooks read through the `get_*` accessors.

use async_trait::async_trait;
use linkable_shared::{ItemTypeSummary, SearchRequest, Thumbnail};

use crate::errors::LinkableError;
use crate::interfaces::Item;
use crate::types::{Deferred, SearchPage};

/// A registered search source for one category of searchable object.
///
/// Implementations are shared across request handlers and must be
/// `Send + Sync`. They are stored as `Arc<dyn ItemType>` by the
/// [`Registry`](crate::Registry).
#[async_trait]
pub trait ItemType: Send + Sync {
    /// Search for anything that matches `request.query`.
    ///
    /// An empty query must not fail; what it returns is up to the provider.
    /// `request.actor` is passed through for the provider's own permission
    /// filtering.
    ///
    /// # Returns
    ///
    /// * `Ok(SearchPage)` - The requested page and whether more pages exist
    /// * `Err(LinkableError)` - If the parameters are invalid or the backend fails
    async fn search(&self, request: &SearchRequest) -> Result<SearchPage, LinkableError>;

    /// Explicit registry key.
    fn identifier(&self) -> Option<String> {
        None
    }

    /// Unique provider name, used to tell providers apart.
    fn name(&self) -> Option<String> {
        None
    }

    /// Human readable name of up to about 15 characters.
    fn verbose_name(&self) -> Option<String> {
        None
    }

    /// Very short name used for menus and filters.
    fn short_name(&self) -> Option<String> {
        None
    }

    /// Thumbnail of the item type itself.
    fn thumbnail(&self) -> Option<Deferred<Thumbnail>> {
        None
    }

    /// Thumbnail for items that do not provide their own.
    fn default_item_thumbnail(&self) -> Option<Deferred<Thumbnail>> {
        None
    }

    /// Registry key of the item type.
    fn get_identifier(&self) -> Result<String, LinkableError> {
        self.identifier().ok_or_else(|| {
            LinkableError::not_implemented("provide an identifier or override get_identifier")
        })
    }

    fn get_name(&self) -> Result<String, LinkableError> {
        self.name()
            .ok_or_else(|| LinkableError::not_implemented("please provide a unique name"))
    }

    fn get_verbose_name(&self) -> Result<String, LinkableError> {
        self.verbose_name().ok_or_else(|| {
            LinkableError::not_implemented(
                "either provide a verbose_name or override get_verbose_name",
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

    fn get_thumbnail(&self) -> Option<Thumbnail> {
        self.thumbnail().map(|thumbnail| thumbnail.resolve())
    }

    /// Falls back to the item type's own thumbnail.
    fn get_default_item_thumbnail(&self) -> Option<Thumbnail> {
        match self.default_item_thumbnail() {
            Some(thumbnail) => Some(thumbnail.resolve()),
            None => self.get_thumbnail(),
        }
    }

    /// Thumbnail to display for `item`: its own, else the default item
    /// thumbnail of this type.
    fn thumbnail_for(&self, item: &dyn Item) -> Option<Thumbnail> {
        item.get_thumbnail()
            .or_else(|| self.get_default_item_thumbnail())
    }

    /// Listing entry as returned by the item type endpoint.
    fn summary(&self) -> Result<ItemTypeSummary, LinkableError> {
        Ok(ItemTypeSummary {
            identifier: self.get_identifier()?,
            verbose_name: self.get_verbose_name()?,
            short_name: self.get_short_name()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Unnamed;

    #[async_trait]
    impl ItemType for Unnamed {
        async fn search(&self, _request: &SearchRequest) -> Result<SearchPage, LinkableError> {
            Ok(SearchPage::empty())
        }
    }

    struct Person;

    #[async_trait]
    impl ItemType for Person {
        async fn search(&self, _request: &SearchRequest) -> Result<SearchPage, LinkableError> {
            Ok(SearchPage::empty())
        }

        fn identifier(&self) -> Option<String> {
            Some("people.Person".to_string())
        }

        fn name(&self) -> Option<String> {
            Some("person".to_string())
        }

        fn verbose_name(&self) -> Option<String> {
            Some("Person".to_string())
        }

        fn thumbnail(&self) -> Option<Deferred<Thumbnail>> {
            Some(Thumbnail::url("/static/person.png").into())
        }
    }

    struct Avatar;

    impl Item for Avatar {
        fn thumbnail(&self) -> Option<Deferred<Thumbnail>> {
            Some(Thumbnail::image("avatars/1.jpg").into())
        }
    }

    struct Faceless;

    impl Item for Faceless {}

    #[test]
    fn test_get_name_without_name_is_not_implemented() {
        let err = Unnamed.get_name().unwrap_err();
        assert!(err.is_not_implemented());
    }

    #[test]
    fn test_unnamed_defaults() {
        assert!(Unnamed.get_identifier().unwrap_err().is_not_implemented());
        assert!(Unnamed.get_verbose_name().unwrap_err().is_not_implemented());
        assert!(Unnamed.get_short_name().unwrap_err().is_not_implemented());
        assert!(Unnamed.get_thumbnail().is_none());
        assert!(Unnamed.get_default_item_thumbnail().is_none());
    }

    #[test]
    fn test_fallback_chains() {
        assert_eq!(Person.get_name().unwrap(), "person");
        assert_eq!(Person.get_short_name().unwrap(), "Person");
        assert_eq!(
            Person.get_default_item_thumbnail(),
            Some(Thumbnail::url("/static/person.png"))
        );
    }

    #[test]
    fn test_thumbnail_for_prefers_the_item() {
        assert_eq!(
            Person.thumbnail_for(&Avatar),
            Some(Thumbnail::image("avatars/1.jpg"))
        );
        assert_eq!(
            Person.thumbnail_for(&Faceless),
            Some(Thumbnail::url("/static/person.png"))
        );
    }

    #[test]
    fn test_summary() {
        let summary = Person.summary().unwrap();
        assert_eq!(summary.identifier, "people.Person");
        assert_eq!(summary.verbose_name, "Person");
        assert_eq!(summary.short_name, "Person");
    }
}
