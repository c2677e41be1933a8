//! # Linkable Shared
//!
//! This crate defines shared data structures used across the linkable
//! ecosystem: link descriptors, thumbnails, search requests and the summaries
//! exposed over HTTP.

pub mod types;

pub use types::link::{Link, UrlSummary};
pub use types::search_query::{Actor, SearchParams, SearchRequest};
pub use types::search_result::{ItemSummary, ItemTypeSummary};
pub use types::thumbnail::{ImageHandle, Thumbnail};
