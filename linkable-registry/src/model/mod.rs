//! Model-backed item types.
//!
//! This module provides the default provider implementation that searches a
//! `ModelCollection` by substring across a configurable set of fields.

mod item_type;

pub use item_type::{ItemDisplay, ModelItemType};
