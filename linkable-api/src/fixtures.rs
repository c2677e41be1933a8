//! Fixture files seeding the example collections.
//!
//! A fixture file is a JSON object with optional `pages` and `files` arrays:
//!
//! ```json
//! {
//!   "pages": [{ "pk": "1", "fields": { "title": "About us" }, "url": "/en/about/" }],
//!   "files": [{ "pk": "7", "fields": { "name": "report.pdf" }, "url": "/media/report.pdf" }]
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use linkable_registry::Record;
use serde::Deserialize;
use tracing::info;

use crate::ServerError;

/// A single fixture record.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FixtureRecord {
    pub pk: String,
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
    /// Canonical URL of the record.
    pub url: String,
}

impl From<FixtureRecord> for Record {
    fn from(fixture: FixtureRecord) -> Self {
        let mut record = Record::new(fixture.pk).with_absolute_url(fixture.url);
        record.fields = fixture.fields;
        record
    }
}

/// Records for every example collection.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Fixtures {
    #[serde(default)]
    pub pages: Vec<FixtureRecord>,
    #[serde(default)]
    pub files: Vec<FixtureRecord>,
}

impl Fixtures {
    /// Parse fixtures from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ServerError> {
        serde_json::from_str(json)
            .map_err(|e| ServerError::fixture(format!("Invalid fixture JSON: {}", e)))
    }

    /// Read and parse a fixture file.
    pub fn load(path: &Path) -> Result<Self, ServerError> {
        let json = fs::read_to_string(path).map_err(|e| {
            ServerError::fixture(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let fixtures = Self::from_json(&json)?;

        info!(
            path = %path.display(),
            pages = fixtures.pages.len(),
            files = fixtures.files.len(),
            "Loaded fixtures"
        );

        Ok(fixtures)
    }
}
