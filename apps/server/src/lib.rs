//! Quarry - schema-bound document search service
//!
//! Serves paginated, sorted and filtered searches over document collections:
//! - A small query language translated against per-entity schemas (`quarry-query`)
//! - Pluggable document stores (in-memory, PostgreSQL JSONB)
//! - Page results with derived paging metadata
//! - An axum HTTP surface for the user and blog collections

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;
