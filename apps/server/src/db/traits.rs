//! Storage trait the search engine runs against

use crate::db::search::request::{PageWindow, SortSpec};
use crate::Result;
use async_trait::async_trait;
use quarry_query::FilterPredicate;
use serde_json::Value as JsonValue;

/// Document storage backend.
///
/// Any backend (PostgreSQL, in-memory, a remote document store, ...) can serve
/// searches by implementing these two reads. Failures must surface as
/// [`crate::Error::StoreUnavailable`]; the engine does not retry.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Count documents in `collection` matching `filter`. Sorting and paging do not apply.
    async fn count(&self, collection: &str, filter: &FilterPredicate) -> Result<u64>;

    /// Fetch the documents in `collection` matching `filter`, ordered by `sort`
    /// (ties broken by ascending `id`), restricted to `window`.
    async fn find(
        &self,
        collection: &str,
        filter: &FilterPredicate,
        sort: &SortSpec,
        window: PageWindow,
    ) -> Result<Vec<JsonValue>>;
}
