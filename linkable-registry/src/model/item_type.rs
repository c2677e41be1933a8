//! Model-backed item type.
//!
//! `ModelItemType` is the default provider: it matches every whitespace
//! separated query term against every configured search field and pages
//! through the backing collection.

use std::sync::Arc;

use async_trait::async_trait;
use linkable_shared::{SearchRequest, Thumbnail};
use tracing::debug;

use crate::errors::LinkableError;
use crate::interfaces::{Item, ItemType, ModelCollection};
use crate::object_item::ObjectItem;
use crate::types::{Deferred, Filter, ModelQuery, Predicate, Record, SearchPage};
use crate::utils::title_case;

/// Record fields used to describe the items of a [`ModelItemType`].
///
/// A missing verbose name field falls back to the record's primary key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDisplay {
    pub verbose_name_field: Option<String>,
    pub short_name_field: Option<String>,
    pub description_field: Option<String>,
    /// Field holding a thumbnail URL.
    pub thumbnail_field: Option<String>,
}

impl ItemDisplay {
    /// Describe items by the given title field.
    pub fn titled(field: impl Into<String>) -> Self {
        Self {
            verbose_name_field: Some(field.into()),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, field: impl Into<String>) -> Self {
        self.description_field = Some(field.into());
        self
    }

    pub fn with_short_name(mut self, field: impl Into<String>) -> Self {
        self.short_name_field = Some(field.into());
        self
    }

    pub fn with_thumbnail(mut self, field: impl Into<String>) -> Self {
        self.thumbnail_field = Some(field.into());
        self
    }
}

/// An item type searching a [`ModelCollection`] by substring.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use linkable_registry::{ItemDisplay, MemoryCollection, ModelItemType, ModelMeta};
///
/// let files = Arc::new(MemoryCollection::new(ModelMeta::new("filer.models", "File", "file")));
/// let item_type = ModelItemType::new(files)
///     .with_search_fields(["name", "description", "original_filename", "sha1"])
///     .with_name("Filer File")
///     .with_identifier("filer_file")
///     .with_display(ItemDisplay::titled("name").with_description("description"));
/// ```
pub struct ModelItemType {
    model: Arc<dyn ModelCollection>,
    search_fields: Vec<String>,
    order_by: Option<String>,
    identifier: Option<String>,
    name: Option<String>,
    verbose_name: Option<String>,
    short_name: Option<String>,
    thumbnail: Option<Deferred<Thumbnail>>,
    default_item_thumbnail: Option<Deferred<Thumbnail>>,
    display: ItemDisplay,
}

impl ModelItemType {
    /// Create an item type over `model` without search fields.
    ///
    /// Without search fields every query matches every record.
    pub fn new(model: Arc<dyn ModelCollection>) -> Self {
        Self {
            model,
            search_fields: Vec::new(),
            order_by: None,
            identifier: None,
            name: None,
            verbose_name: None,
            short_name: None,
            thumbnail: None,
            default_item_thumbnail: None,
            display: ItemDisplay::default(),
        }
    }

    pub fn with_search_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Order results by `field`; prefix with `-` for descending order.
    pub fn with_order_by(mut self, field: impl Into<String>) -> Self {
        self.order_by = Some(field.into());
        self
    }

    /// Use an explicit registry key instead of the model's qualified name.
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
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

    pub fn with_thumbnail(mut self, thumbnail: impl Into<Deferred<Thumbnail>>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    pub fn with_default_item_thumbnail(
        mut self,
        thumbnail: impl Into<Deferred<Thumbnail>>,
    ) -> Self {
        self.default_item_thumbnail = Some(thumbnail.into());
        self
    }

    pub fn with_display(mut self, display: ItemDisplay) -> Self {
        self.display = display;
        self
    }

    /// The backing collection.
    pub fn get_model(&self) -> &Arc<dyn ModelCollection> {
        &self.model
    }

    pub fn search_fields(&self) -> &[String] {
        &self.search_fields
    }

    /// OR of one case-insensitive substring predicate per (field, term).
    pub fn build_filter(&self, request: &SearchRequest) -> Filter {
        let mut filter = Filter::all();
        for field in &self.search_fields {
            for term in request.terms() {
                filter = filter.or(Predicate::icontains(field.as_str(), term));
            }
        }
        filter
    }

    /// Query for the requested page plus one look-ahead record used to
    /// compute `has_more`.
    pub fn build_query(&self, request: &SearchRequest) -> ModelQuery {
        let start = request.offset();
        let end = start
            .saturating_add(request.items_per_page)
            .saturating_add(1);
        ModelQuery::new(self.build_filter(request))
            .order_by(self.order_by.clone())
            .slice(start, end)
    }

    fn field_value(record: &Record, field: &Option<String>) -> Option<String> {
        field
            .as_deref()
            .and_then(|name| record.field(name))
            .map(str::to_string)
    }

    fn to_item(&self, record: Arc<Record>) -> Box<dyn Item> {
        let verbose_name = Self::field_value(&record, &self.display.verbose_name_field)
            .unwrap_or_else(|| record.pk.clone());
        let mut item = ObjectItem::new(Arc::clone(&record))
            .with_identifier(record.pk.clone())
            .with_verbose_name(verbose_name);

        if let Some(short_name) = Self::field_value(&record, &self.display.short_name_field) {
            item = item.with_short_name(short_name);
        }
        if let Some(description) = Self::field_value(&record, &self.display.description_field) {
            item = item.with_description(description);
        }
        if let Some(url) = Self::field_value(&record, &self.display.thumbnail_field) {
            item = item.with_thumbnail(Thumbnail::url(url));
        }

        Box::new(item)
    }
}

#[async_trait]
impl ItemType for ModelItemType {
    async fn search(&self, request: &SearchRequest) -> Result<SearchPage, LinkableError> {
        request.validate().map_err(LinkableError::validation)?;

        let query = self.build_query(request);
        let mut records = self.model.fetch(&query).await?;

        let has_more = records.len() > request.items_per_page;
        records.truncate(request.items_per_page);

        debug!(
            model = %self.model.meta().qualified_name(),
            page = request.page,
            items_per_page = request.items_per_page,
            predicates = query.filter.predicates().len(),
            results = records.len(),
            has_more,
            "Model search completed"
        );

        let results = records
            .into_iter()
            .map(|record| self.to_item(record))
            .collect();
        Ok(SearchPage::new(results, has_more))
    }

    fn identifier(&self) -> Option<String> {
        self.identifier.clone()
    }

    fn name(&self) -> Option<String> {
        self.name.clone()
    }

    fn verbose_name(&self) -> Option<String> {
        self.verbose_name.clone()
    }

    fn short_name(&self) -> Option<String> {
        self.short_name.clone()
    }

    fn thumbnail(&self) -> Option<Deferred<Thumbnail>> {
        self.thumbnail.clone()
    }

    fn default_item_thumbnail(&self) -> Option<Deferred<Thumbnail>> {
        self.default_item_thumbnail.clone()
    }

    /// The explicit identifier, else `<model module path>.<model type name>`.
    fn get_identifier(&self) -> Result<String, LinkableError> {
        Ok(self
            .identifier
            .clone()
            .unwrap_or_else(|| self.model.meta().qualified_name()))
    }

    /// The explicit verbose name, else the model's title-cased verbose name.
    fn get_verbose_name(&self) -> Result<String, LinkableError> {
        Ok(self
            .verbose_name
            .clone()
            .unwrap_or_else(|| title_case(&self.model.meta().verbose_name)))
    }
}
