//! Registry error types.
//!
//! Contract violations (`NotImplemented`) are programmer errors surfaced at
//! call time. Everything else describes a failing search.

use thiserror::Error;

/// Unified errors from item types, items, backing collections and the registry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LinkableError {
    /// A required capability was invoked without being supplied by the
    /// concrete item type or item.
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// Invalid search parameters (e.g. page 0).
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The backing collection could not serve the query.
    #[error("Backend error: {0}")]
    BackendError(String),

    /// A provider did not answer within the configured deadline.
    #[error("Item type '{identifier}' timed out after {timeout_ms}ms")]
    Timeout { identifier: String, timeout_ms: u64 },

    /// A provider failed during an aggregate search.
    #[error("Item type '{identifier}' failed: {message}")]
    ProviderError { identifier: String, message: String },
}

impl LinkableError {
    /// Create a not implemented error for the named capability.
    pub fn not_implemented(msg: impl Into<String>) -> Self {
        Self::NotImplemented(msg.into())
    }

    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create a backend error.
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::BackendError(msg.into())
    }

    /// Create a timeout error.
    pub fn timeout(identifier: impl Into<String>, timeout_ms: u64) -> Self {
        Self::Timeout {
            identifier: identifier.into(),
            timeout_ms,
        }
    }

    /// Wrap an error raised by the item type registered under `identifier`.
    ///
    /// Contract violations, timeouts and already wrapped errors are passed
    /// through unchanged.
    pub fn provider(identifier: impl Into<String>, err: LinkableError) -> Self {
        match err {
            err @ (Self::NotImplemented(_) | Self::Timeout { .. } | Self::ProviderError { .. }) => {
                err
            }
            other => Self::ProviderError {
                identifier: identifier.into(),
                message: other.to_string(),
            },
        }
    }

    /// Returns true for contract violations.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented(_))
    }
}
