//! Search implementation - query translation and execution
//!
//! The SearchEngine is responsible for:
//! - Validating the page window against configured limits
//! - Translating the query expression against the entity's schema
//! - Resolving the sort (once per request)
//! - Running the count and page fetch against the document store
//! - Mapping stored documents into response records

use crate::config::SearchConfig;
use crate::db::traits::DocumentStore;
use quarry_query::SchemaRegistry;
use std::sync::Arc;

pub use sort::resolve_sort;

mod api;
mod execute;
mod filter;
mod sort;

/// Search engine executes collection searches against a [`DocumentStore`].
///
/// Cheap to clone; every request is independent and shares nothing but the store.
#[derive(Clone)]
pub struct SearchEngine {
    store: Arc<dyn DocumentStore>,
    registry: Arc<SchemaRegistry>,
    search_config: SearchConfig,
}
