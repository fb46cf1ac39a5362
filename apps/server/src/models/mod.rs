//! Searchable entities and their response projections

pub mod blog;
pub mod user;

pub use blog::{BlogEntity, BlogMapper, BlogResponse};
pub use user::{UserEntity, UserMapper, UserResponse};

use quarry_query::{EntitySchema, SchemaRegistry};
use serde::de::DeserializeOwned;

/// A stored document type that can be searched.
pub trait Entity: DeserializeOwned + Send + 'static {
    /// Collection (and schema) name the documents live under.
    const COLLECTION: &'static str;

    /// Fields a query may filter on. Fields left out here cannot be queried.
    fn schema() -> EntitySchema;
}

/// Registry of every entity type the service exposes.
pub fn default_registry() -> SchemaRegistry {
    SchemaRegistry::new()
        .with_schema(UserEntity::schema())
        .with_schema(BlogEntity::schema())
}
