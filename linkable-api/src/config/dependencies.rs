//! Dependency initialization and wiring for the linkable server.

use std::sync::Arc;

use linkable_registry::Registry;
use tracing::info;

use crate::config::Settings;
use crate::contrib;
use crate::fixtures::Fixtures;
use crate::ServerError;

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The registry with every example item type registered.
    pub registry: Arc<Registry>,
}

impl Dependencies {
    /// Build the registry described by `settings` and register the example
    /// item types.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(ServerError)` - If the fixture file cannot be loaded or an item
    ///   type cannot be registered
    pub fn new(settings: &Settings) -> Result<Self, ServerError> {
        let config = settings.registry_config();

        info!(
            search_limit = config.default_limit,
            max_concurrency = config.concurrency(),
            provider_timeout_ms = ?config.provider_timeout.map(|t| t.as_millis()),
            failure_mode = ?config.failure_mode,
            fixtures = ?settings.fixtures,
            "Initializing dependencies"
        );

        let fixtures = match &settings.fixtures {
            Some(path) => Fixtures::load(path)?,
            None => Fixtures::default(),
        };

        let registry = Registry::with_config(config);
        contrib::register_all(&registry, fixtures)?;

        info!(
            item_types = registry.len(),
            "Registry initialized"
        );

        Ok(Self {
            registry: Arc::new(registry),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_without_fixtures() {
        let deps = Dependencies::new(&Settings::default()).unwrap();
        assert_eq!(deps.registry.len(), 2);
        assert!(deps.registry.contains("cms_page"));
        assert!(deps.registry.contains("filer_file"));
    }

    #[test]
    fn test_missing_fixture_file_fails() {
        let settings = Settings {
            fixtures: Some(PathBuf::from("/nonexistent/fixtures.json")),
            ..Settings::default()
        };

        assert!(matches!(
            Dependencies::new(&settings),
            Err(ServerError::FixtureError(_))
        ));
    }
}
