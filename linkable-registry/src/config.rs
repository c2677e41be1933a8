//! Configuration types for the Registry.

use std::time::Duration;

/// Default per item type page size of the aggregate search.
pub const DEFAULT_SEARCH_LIMIT: usize = 100;

/// What the aggregate search does when an item type fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureMode {
    /// Abort the whole aggregate search with the first error.
    #[default]
    FailFast,
    /// Skip the failing item type and report it in the per item type outcomes.
    Isolate,
}

/// Configuration for the Registry.
///
/// The default configuration queries item types one after another, without
/// deadline, and aborts on the first failure.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Page size used by `Registry::search` when the caller passes none.
    pub default_limit: usize,

    /// Maximum number of item types queried at the same time.
    ///
    /// `1` means sequential fan-out. Values of `0` are treated as `1`.
    pub max_concurrency: usize,

    /// Deadline for a single item type search. `None` waits indefinitely.
    pub provider_timeout: Option<Duration>,

    pub failure_mode: FailureMode,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_SEARCH_LIMIT,
            max_concurrency: 1,
            provider_timeout: None,
            failure_mode: FailureMode::FailFast,
        }
    }
}

impl RegistryConfig {
    /// Query up to `max_concurrency` item types at once.
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency;
        self
    }

    /// Fail an item type that does not answer within `timeout`.
    pub fn with_provider_timeout(mut self, timeout: Duration) -> Self {
        self.provider_timeout = Some(timeout);
        self
    }

    pub fn with_failure_mode(mut self, failure_mode: FailureMode) -> Self {
        self.failure_mode = failure_mode;
        self
    }

    pub fn with_default_limit(mut self, default_limit: usize) -> Self {
        self.default_limit = default_limit;
        self
    }

    /// Effective concurrency bound, at least 1.
    pub fn concurrency(&self) -> usize {
        self.max_concurrency.max(1)
    }
}
