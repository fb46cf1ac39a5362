use super::{resolve_sort, SearchEngine};
use crate::config::SearchConfig;
use crate::db::search::mapper::{map_page, ResultMapper};
use crate::db::search::page::PageResult;
use crate::db::search::request::{PageWindow, SearchRequest};
use crate::db::traits::DocumentStore;
use crate::models::Entity;
use crate::Result;
use quarry_query::SchemaRegistry;
use std::sync::Arc;

impl SearchEngine {
    /// Create a new search engine.
    pub fn new(
        store: Arc<dyn DocumentStore>,
        registry: SchemaRegistry,
        search_config: SearchConfig,
    ) -> Self {
        Self {
            store,
            registry: Arc::new(registry),
            search_config,
        }
    }

    pub fn search_config(&self) -> &SearchConfig {
        &self.search_config
    }

    /// Search the collection of `M::Entity` and map the page through `mapper`.
    ///
    /// Steps: validate the page window, translate the query, resolve the sort,
    /// count + fetch, deserialize, map. Any failure aborts the whole search; an
    /// invalid query is never downgraded to an unfiltered one.
    pub async fn search<M>(
        &self,
        mapper: &M,
        request: &SearchRequest,
    ) -> Result<PageResult<M::Response>>
    where
        M: ResultMapper,
        M::Entity: Entity,
    {
        let collection = <M::Entity as Entity>::COLLECTION;

        let window = PageWindow::new(
            request.page_size,
            request.page_number,
            self.search_config.max_page_size,
        )?;
        let filter = self.build_filter(collection, request.query.as_deref())?;
        let sort = resolve_sort(
            request.sort_field.as_deref(),
            request.sort_direction.as_deref(),
        )?;
        tracing::debug!(
            collection,
            sort_field = %sort.field,
            sort_direction = %sort.direction,
            page = window.page_number,
            size = window.page_size,
            "Resolved search request"
        );

        let (rows, total) = self.execute_page(collection, &filter, &sort, window).await?;

        let entities = rows
            .into_iter()
            .map(serde_json::from_value::<M::Entity>)
            .collect::<std::result::Result<Vec<_>, _>>()
            .inspect_err(|e| {
                tracing::error!(collection, error = %e, "Stored document failed to decode")
            })?;

        Ok(map_page(mapper, entities, total, window))
    }
}
