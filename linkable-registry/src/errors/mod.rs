//! Error types for the linkable registry.
//!
//! This module provides a unified error type for item type contracts,
//! backing collections and the aggregate search.

mod linkable_error;

pub use linkable_error::LinkableError;
