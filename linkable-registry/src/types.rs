//! Value types shared by item types, backing collections and the registry.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::errors::LinkableError;
use crate::interfaces::Item;
use crate::utils::icontains;

/// A value that is either available now or produced on demand.
///
/// Link lists, canonical URLs and thumbnails can be expensive to compute, so
/// they may be supplied as a thunk that is evaluated every time the value is
/// read.
#[derive(Clone)]
pub enum Deferred<T> {
    /// A concrete value.
    Value(T),
    /// A zero-argument function producing the value.
    Thunk(Arc<dyn Fn() -> T + Send + Sync>),
}

impl<T> Deferred<T> {
    /// Wrap a function evaluated at read time.
    pub fn thunk<F>(f: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::Thunk(Arc::new(f))
    }
}

impl<T: Clone> Deferred<T> {
    /// Produce the value, calling the thunk if there is one.
    pub fn resolve(&self) -> T {
        match self {
            Self::Value(value) => value.clone(),
            Self::Thunk(f) => f(),
        }
    }
}

impl<T> From<T> for Deferred<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Thunk(_) => f.write_str("Thunk(..)"),
        }
    }
}

/// One page of results from a single item type.
pub struct SearchPage {
    /// Items on the requested page, never more than `items_per_page`.
    pub results: Vec<Box<dyn Item>>,
    /// Whether at least one more page exists.
    pub has_more: bool,
}

impl SearchPage {
    /// Create an empty page.
    pub fn empty() -> Self {
        Self {
            results: Vec::new(),
            has_more: false,
        }
    }

    /// Create a new page.
    pub fn new(results: Vec<Box<dyn Item>>, has_more: bool) -> Self {
        Self { results, has_more }
    }

    /// Returns true if the page holds no results.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns the number of results on this page.
    pub fn len(&self) -> usize {
        self.results.len()
    }
}

impl fmt::Debug for SearchPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchPage")
            .field("results", &self.results.len())
            .field("has_more", &self.has_more)
            .finish()
    }
}

/// Outcome of one item type during an aggregate search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderOutcome {
    /// Registry key of the item type.
    pub identifier: String,
    /// Number of items contributed to the aggregate.
    pub count: usize,
    /// The item type's own pagination flag.
    pub has_more: bool,
    /// Set when the item type failed and was skipped.
    pub error: Option<LinkableError>,
}

/// Flattened results of an aggregate search plus per item type metadata.
pub struct AggregateResults {
    /// Items of every item type, in registry order.
    pub items: Vec<Box<dyn Item>>,
    /// One entry per item type that was queried, in registry order.
    pub outcomes: Vec<ProviderOutcome>,
}

impl AggregateResults {
    /// Items grouped by the item type that produced them, in registry order.
    ///
    /// Failed item types yield an empty slice.
    pub fn by_item_type(&self) -> impl Iterator<Item = (&ProviderOutcome, &[Box<dyn Item>])> {
        let mut start = 0;
        self.outcomes.iter().map(move |outcome| {
            let end = (start + outcome.count).min(self.items.len());
            let items = &self.items[start..end];
            start = end;
            (outcome, items)
        })
    }

    /// Outcomes of item types that failed.
    pub fn failures(&self) -> impl Iterator<Item = &ProviderOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.error.is_some())
    }
}

impl fmt::Debug for AggregateResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AggregateResults")
            .field("items", &self.items.len())
            .field("outcomes", &self.outcomes)
            .finish()
    }
}

/// Descriptive metadata of a backing model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelMeta {
    /// Module the model is declared in (e.g. `filer.models`).
    pub module_path: String,
    /// Type name of the model (e.g. `File`).
    pub type_name: String,
    /// Singular human readable name (e.g. `file`).
    pub verbose_name: String,
}

impl ModelMeta {
    pub fn new(
        module_path: impl Into<String>,
        type_name: impl Into<String>,
        verbose_name: impl Into<String>,
    ) -> Self {
        Self {
            module_path: module_path.into(),
            type_name: type_name.into(),
            verbose_name: verbose_name.into(),
        }
    }

    /// Fully qualified type name, `<module_path>.<type_name>`.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.module_path, self.type_name)
    }
}

/// A stored record of a backing model.
#[derive(Debug, Clone)]
pub struct Record {
    /// Primary key.
    pub pk: String,
    /// Named text fields.
    pub fields: BTreeMap<String, String>,
    /// Canonical URL accessor, if the model has one.
    pub absolute_url: Option<Deferred<String>>,
}

impl Record {
    /// Create a record without fields.
    pub fn new(pk: impl Into<String>) -> Self {
        Self {
            pk: pk.into(),
            fields: BTreeMap::new(),
            absolute_url: None,
        }
    }

    /// Set a field value.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Set the canonical URL accessor.
    pub fn with_absolute_url(mut self, url: impl Into<Deferred<String>>) -> Self {
        self.absolute_url = Some(url.into());
        self
    }

    /// Value of the named field.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// A single filter predicate on a named field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Case-insensitive substring match.
    IContains { field: String, term: String },
}

impl Predicate {
    pub fn icontains(field: impl Into<String>, term: impl Into<String>) -> Self {
        Self::IContains {
            field: field.into(),
            term: term.into(),
        }
    }

    /// Evaluate the predicate. Missing fields never match.
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Self::IContains { field, term } => record
                .field(field)
                .is_some_and(|value| icontains(value, term)),
        }
    }
}

/// Disjunction of predicates. An empty filter matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    predicates: Vec<Predicate>,
}

impl Filter {
    /// A filter matching every record.
    pub fn all() -> Self {
        Self::default()
    }

    /// A filter matching records that satisfy any of `predicates`.
    pub fn any(predicates: impl IntoIterator<Item = Predicate>) -> Self {
        Self {
            predicates: predicates.into_iter().collect(),
        }
    }

    /// OR another predicate into the filter.
    pub fn or(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.predicates.is_empty() || self.predicates.iter().any(|p| p.matches(record))
    }
}

/// A filtered, ordered and sliced fetch against a backing collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelQuery {
    pub filter: Filter,
    /// Field to order by; a leading `-` sorts descending.
    pub order_by: Option<String>,
    /// Number of matching records to skip.
    pub offset: usize,
    /// Maximum number of records to return; unbounded when `None`.
    pub limit: Option<usize>,
}

impl ModelQuery {
    pub fn new(filter: Filter) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    pub fn order_by(mut self, field: Option<String>) -> Self {
        self.order_by = field;
        self
    }

    /// Restrict the query to the half-open range `[start, end)`.
    pub fn slice(mut self, start: usize, end: usize) -> Self {
        self.offset = start;
        self.limit = Some(end.saturating_sub(start));
        self
    }
}
