use super::SearchEngine;
use crate::db::search::request::{PageWindow, SortSpec};
use crate::Result;
use quarry_query::FilterPredicate;
use serde_json::Value as JsonValue;

impl SearchEngine {
    /// Count the filtered set, then fetch one sorted page of it.
    ///
    /// The two reads run sequentially without a shared snapshot; under concurrent
    /// writes the total and the page may disagree.
    pub(super) async fn execute_page(
        &self,
        collection: &str,
        filter: &FilterPredicate,
        sort: &SortSpec,
        window: PageWindow,
    ) -> Result<(Vec<JsonValue>, u64)> {
        let total = self
            .store
            .count(collection, filter)
            .await
            .inspect_err(|e| tracing::warn!(collection, error = %e, "Count failed"))?;

        let rows = self
            .store
            .find(collection, filter, sort, window)
            .await
            .inspect_err(|e| tracing::warn!(collection, error = %e, "Page fetch failed"))?;

        tracing::debug!(
            collection,
            total,
            returned = rows.len(),
            offset = window.offset(),
            limit = window.limit(),
            "Executed search page"
        );
        Ok((rows, total))
    }
}
