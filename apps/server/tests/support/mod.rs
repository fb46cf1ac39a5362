pub mod assertions;
pub mod fixtures;

use anyhow::Context as _;
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use quarry::{
    api::create_router,
    db::{search::PageWindow, search::SortSpec, DocumentStore, MemoryStore},
    AppState, Config, Error,
};
use quarry_query::FilterPredicate;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt as _;

pub use assertions::*;
pub use fixtures::*;

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    /// App over a memory store seeded with [`fixtures::seed`].
    pub fn new() -> anyhow::Result<Self> {
        Self::new_with_config(|_| {})
    }

    pub fn new_with_config(configure: impl FnOnce(&mut Config)) -> anyhow::Result<Self> {
        let store = MemoryStore::new();
        for (collection, docs) in seed() {
            store
                .insert_many(collection, docs)
                .context("seed memory store")?;
        }
        Ok(Self::with_store(Arc::new(store), configure))
    }

    pub fn with_store(store: Arc<dyn DocumentStore>, configure: impl FnOnce(&mut Config)) -> Self {
        let mut config = Config::default();
        configure(&mut config);
        let state = AppState::with_store(config, store);
        let router = create_router(state.clone());
        Self { router, state }
    }

    pub async fn get(&self, path_and_query: &str) -> anyhow::Result<(StatusCode, Value)> {
        let request = Request::builder()
            .method(Method::GET)
            .uri(path_and_query)
            .body(Body::empty())
            .context("build request")?;

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .context("dispatch request")?;

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .context("read response body")?;
        let json = serde_json::from_slice(&body)
            .with_context(|| format!("parse response body: {}", String::from_utf8_lossy(&body)))?;
        Ok((status, json))
    }
}

/// Store whose every call fails, as a dropped database connection would.
pub struct UnavailableStore;

#[async_trait]
impl DocumentStore for UnavailableStore {
    async fn count(&self, _collection: &str, _filter: &FilterPredicate) -> quarry::Result<u64> {
        Err(Error::store_unavailable("connection refused"))
    }

    async fn find(
        &self,
        _collection: &str,
        _filter: &FilterPredicate,
        _sort: &SortSpec,
        _window: PageWindow,
    ) -> quarry::Result<Vec<Value>> {
        Err(Error::store_unavailable("connection refused"))
    }
}

/// Build `/api/v1/{collection}/search?...` with percent-encoded parameter values.
pub fn search_uri(collection: &str, params: &[(&str, &str)]) -> String {
    let query: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect();
    format!("/api/v1/{collection}/search?{}", query.join("&"))
}
