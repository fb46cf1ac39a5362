use super::SearchEngine;
use crate::{Error, Result};
use quarry_query::FilterPredicate;

impl SearchEngine {
    /// Translate the query expression for `collection` against its registered schema.
    pub(super) fn build_filter(
        &self,
        collection: &str,
        query: Option<&str>,
    ) -> Result<FilterPredicate> {
        let schema = self.registry.get(collection).ok_or_else(|| {
            Error::Internal(format!("No schema registered for collection '{collection}'"))
        })?;

        let filter = quarry_query::translate(query, schema)?;
        tracing::debug!(collection, filter = %filter, "Translated search query");
        Ok(filter)
    }
}
