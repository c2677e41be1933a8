//! A reusable [`Item`] implementation wrapping a shared domain object.

use std::sync::Arc;

use linkable_shared::{Link, Thumbnail};

use crate::interfaces::Item;
use crate::types::{Deferred, Record};

/// Domain objects that may expose a canonical URL.
pub trait Linkable: Send + Sync {
    /// The object's own canonical URL accessor.
    fn absolute_url(&self) -> Option<Deferred<String>> {
        None
    }
}

impl Linkable for Record {
    fn absolute_url(&self) -> Option<Deferred<String>> {
        self.absolute_url.clone()
    }
}

/// An item holding a shared reference to its object plus whatever display
/// attributes were supplied.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use linkable_registry::{Item, ObjectItem, Record};
///
/// let record = Arc::new(Record::new("3").with_absolute_url("/files/3/".to_string()));
/// let item = ObjectItem::new(record)
///     .with_identifier("3")
///     .with_verbose_name("report.pdf");
///
/// assert_eq!(item.get_urls().unwrap()[0].url, "/files/3/");
/// ```
pub struct ObjectItem<T: ?Sized> {
    obj: Arc<T>,
    identifier: Option<String>,
    verbose_name: Option<String>,
    short_name: Option<String>,
    description: Option<String>,
    thumbnail: Option<Deferred<Thumbnail>>,
    urls: Option<Deferred<Vec<Link>>>,
}

impl<T: Linkable + ?Sized> ObjectItem<T> {
    /// Wrap `obj` without any display attributes.
    pub fn new(obj: Arc<T>) -> Self {
        Self {
            obj,
            identifier: None,
            verbose_name: None,
            short_name: None,
            description: None,
            thumbnail: None,
            urls: None,
        }
    }

    /// The wrapped object.
    pub fn obj(&self) -> &Arc<T> {
        &self.obj
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn with_verbose_name(mut self, verbose_name: impl Into<String>) -> Self {
        self.verbose_name = Some(verbose_name.into());
        self
    }

    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = Some(short_name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: impl Into<Deferred<Thumbnail>>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    /// Explicit link targets; these take precedence over the object's
    /// canonical URL.
    pub fn with_urls(mut self, urls: impl Into<Deferred<Vec<Link>>>) -> Self {
        self.urls = Some(urls.into());
        self
    }
}

impl<T: Linkable + ?Sized> Item for ObjectItem<T> {
    fn identifier(&self) -> Option<String> {
        self.identifier.clone()
    }

    fn verbose_name(&self) -> Option<String> {
        self.verbose_name.clone()
    }

    fn short_name(&self) -> Option<String> {
        self.short_name.clone()
    }

    fn description(&self) -> Option<String> {
        self.description.clone()
    }

    fn thumbnail(&self) -> Option<Deferred<Thumbnail>> {
        self.thumbnail.clone()
    }

    fn urls(&self) -> Option<Deferred<Vec<Link>>> {
        self.urls.clone()
    }

    fn canonical_url(&self) -> Option<Deferred<String>> {
        self.obj.absolute_url()
    }
}
