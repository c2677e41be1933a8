//! This module defines the core data structures used across the registry and
//! its HTTP boundary.

pub mod link;
pub mod search_query;
pub mod search_result;
pub mod thumbnail;
