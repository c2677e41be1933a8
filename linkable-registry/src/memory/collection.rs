//! In-memory collection.

use std::cmp::Ordering;
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use tracing::debug;

use crate::errors::LinkableError;
use crate::interfaces::ModelCollection;
use crate::types::{ModelMeta, ModelQuery, Record};

/// A collection of records held in memory.
///
/// Records keep their insertion order unless the query asks for an ordering.
/// Ordering is stable and compares field values as strings; records missing
/// the field sort first in ascending order.
pub struct MemoryCollection {
    meta: ModelMeta,
    records: RwLock<Vec<Arc<Record>>>,
}

impl MemoryCollection {
    /// Create an empty collection for the given model.
    pub fn new(meta: ModelMeta) -> Self {
        Self {
            meta,
            records: RwLock::new(Vec::new()),
        }
    }

    /// Create a collection pre-populated with `records`.
    pub fn with_records(meta: ModelMeta, records: impl IntoIterator<Item = Record>) -> Self {
        let collection = Self::new(meta);
        collection.extend(records);
        collection
    }

    /// Append a record.
    pub fn insert(&self, record: Record) {
        self.write().push(Arc::new(record));
    }

    /// Append several records.
    pub fn extend(&self, records: impl IntoIterator<Item = Record>) {
        self.write().extend(records.into_iter().map(Arc::new));
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Arc<Record>>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Arc<Record>>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Split an `order_by` expression into field name and direction.
    fn parse_order_by(order_by: &str) -> (&str, bool) {
        match order_by.strip_prefix('-') {
            Some(field) => (field, true),
            None => (order_by, false),
        }
    }

    fn compare(a: &Record, b: &Record, field: &str) -> Ordering {
        a.field(field).cmp(&b.field(field))
    }
}

#[async_trait]
impl ModelCollection for MemoryCollection {
    fn meta(&self) -> &ModelMeta {
        &self.meta
    }

    async fn fetch(&self, query: &ModelQuery) -> Result<Vec<Arc<Record>>, LinkableError> {
        let mut matched: Vec<Arc<Record>> = self
            .read()
            .iter()
            .filter(|record| query.filter.matches(record))
            .cloned()
            .collect();

        if let Some(order_by) = query.order_by.as_deref() {
            let (field, descending) = Self::parse_order_by(order_by);
            if field.is_empty() {
                return Err(LinkableError::validation("order_by must name a field"));
            }
            matched.sort_by(|a, b| {
                let ordering = Self::compare(a, b, field);
                if descending {
                    ordering.reverse()
                } else {
                    ordering
                }
            });
        }

        let total = matched.len();
        let page: Vec<Arc<Record>> = matched
            .into_iter()
            .skip(query.offset)
            .take(query.limit.unwrap_or(usize::MAX))
            .collect();

        debug!(
            model = %self.meta.qualified_name(),
            matched = total,
            returned = page.len(),
            offset = query.offset,
            "Fetched records from memory collection"
        );

        Ok(page)
    }
}
