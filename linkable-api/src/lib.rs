//! # Linkable API
//!
//! HTTP boundary of the linkable content-search registry.
//!
//! ## Architecture
//!
//! 1. **Config**: Reads settings from the environment and wires the registry
//! 2. **Contrib**: Example item types (CMS pages, filer files) over in-memory
//!    collections seeded from a fixture file
//! 3. **Server**: axum routes listing item types and running aggregate searches
//!
//! ## Modules
//!
//! - [`config`]: Settings and dependency initialization
//! - [`contrib`]: Example item type integrations
//! - [`fixtures`]: Fixture file loading
//! - [`server`]: Router, handlers and shared state
//! - [`errors`]: Error types for request handling

pub mod config;
pub mod contrib;
pub mod errors;
pub mod fixtures;
pub mod server;

pub use config::{Dependencies, Settings};
pub use errors::ApiError;

use linkable_registry::LinkableError;
use thiserror::Error;

/// Errors that can occur during server initialization or execution.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The fixture file could not be read or parsed.
    #[error("Fixture error: {0}")]
    FixtureError(String),

    /// Registering an item type failed.
    #[error("Registry error: {0}")]
    RegistryError(#[from] LinkableError),

    /// Binding or serving the listener failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ServerError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a fixture error.
    pub fn fixture(msg: impl Into<String>) -> Self {
        Self::FixtureError(msg.into())
    }
}
