//! Shared application state

use crate::config::{Config, StoreBackend};
use crate::db::{DocumentStore, MemoryStore, PostgresStore, SearchEngine};
use crate::models::default_registry;
use anyhow::Context;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub search_engine: SearchEngine,
}

impl AppState {
    /// Build the configured store and wire the search engine over it.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store: Arc<dyn DocumentStore> = match config.store.backend {
            StoreBackend::Memory => {
                let store = match &config.store.seed_path {
                    Some(path) => MemoryStore::load_seed(path)?,
                    None => MemoryStore::new(),
                };
                tracing::info!("Using in-memory document store");
                Arc::new(store)
            }
            StoreBackend::Postgres => {
                let store = PostgresStore::connect(&config.store.database)
                    .await
                    .context("Failed to connect to PostgreSQL")?;
                tracing::info!(
                    pool_max_size = config.store.database.pool_max_size,
                    "Using PostgreSQL document store"
                );
                Arc::new(store)
            }
        };

        Ok(Self::with_store(config, store))
    }

    /// Wire the state over an already constructed store.
    pub fn with_store(config: Config, store: Arc<dyn DocumentStore>) -> Self {
        let search_engine = SearchEngine::new(store, default_registry(), config.search.clone());
        Self {
            config: Arc::new(config),
            search_engine,
        }
    }
}
