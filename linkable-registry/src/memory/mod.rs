//! In-memory implementation of the backing collection.
//!
//! This module provides a concrete implementation of `ModelCollection`
//! holding records in process memory, used by the example integrations and
//! in tests.

mod collection;

pub use collection::MemoryCollection;
