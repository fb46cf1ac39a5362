//! Database layer - document stores and search

pub mod memory;
pub mod postgres;
pub mod search;
pub mod traits;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;
pub use search::SearchEngine;
pub use traits::DocumentStore;
