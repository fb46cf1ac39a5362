//! PostgreSQL document store over a JSONB `documents` table

use crate::config::DatabaseConfig;
use crate::db::search::query_builder::{BindValue, QueryBuilder};
use crate::db::search::request::{PageWindow, SortSpec};
use crate::db::traits::DocumentStore;
use crate::Result;
use async_trait::async_trait;
use quarry_query::FilterPredicate;
use serde_json::Value as JsonValue;
use sqlx::postgres::{PgArguments, PgPoolOptions};
use sqlx::query::QueryScalar;
use sqlx::{PgPool, Postgres};
use std::time::Duration;

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool against `config.url` and apply migrations when enabled.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .min_connections(config.pool_min_size)
            .max_connections(config.pool_max_size)
            .acquire_timeout(Duration::from_secs(config.pool_timeout_seconds))
            .connect(&config.url)
            .await?;

        let store = Self::new(pool);
        if config.run_migrations {
            store.migrate().await?;
        }
        Ok(store)
    }

    pub async fn migrate(&self) -> Result<()> {
        MIGRATOR.run(&self.pool).await?;
        tracing::info!("Database migrations applied");
        Ok(())
    }
}

fn bind_all<'q, O>(
    mut query: QueryScalar<'q, Postgres, O, PgArguments>,
    bind_values: Vec<BindValue>,
) -> QueryScalar<'q, Postgres, O, PgArguments> {
    for value in bind_values {
        query = match value {
            BindValue::Text(v) => query.bind(v),
            BindValue::TextArray(vs) => query.bind(vs),
        };
    }
    query
}

#[async_trait]
impl DocumentStore for PostgresStore {
    async fn count(&self, collection: &str, filter: &FilterPredicate) -> Result<u64> {
        let (sql, bind_values) = QueryBuilder::new(collection)
            .with_filter(filter.clone())
            .build_count_sql();
        tracing::debug!(%sql, binds = bind_values.len(), "Executing count query");

        let total = bind_all(sqlx::query_scalar::<_, i64>(&sql), bind_values)
            .fetch_one(&self.pool)
            .await?;
        Ok(u64::try_from(total).unwrap_or(0))
    }

    async fn find(
        &self,
        collection: &str,
        filter: &FilterPredicate,
        sort: &SortSpec,
        window: PageWindow,
    ) -> Result<Vec<JsonValue>> {
        let (sql, bind_values) = QueryBuilder::new(collection)
            .with_filter(filter.clone())
            .with_sort(sort.clone())
            .with_window(window)
            .build_sql();
        tracing::debug!(%sql, binds = bind_values.len(), "Executing search query");

        let rows = bind_all(sqlx::query_scalar::<_, JsonValue>(&sql), bind_values)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
