use super::Entity;
use crate::db::search::mapper::ResultMapper;
use chrono::{DateTime, Utc};
use quarry_query::{EntitySchema, FieldType};
use serde::{Deserialize, Serialize};

/// Stored blog post document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogEntity {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub views: u64,
    pub published: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl Entity for BlogEntity {
    const COLLECTION: &'static str = "blogs";

    fn schema() -> EntitySchema {
        EntitySchema::new(Self::COLLECTION)
            .field("id", FieldType::String)
            .field("title", FieldType::String)
            .field("content", FieldType::String)
            .field("author", FieldType::String)
            .field("category", FieldType::String)
            .field("views", FieldType::Number)
            .field("published", FieldType::Boolean)
            .field("created_at", FieldType::DateTime)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub views: u64,
    pub published: bool,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BlogMapper;

impl ResultMapper for BlogMapper {
    type Entity = BlogEntity;
    type Response = BlogResponse;

    fn map_entity(&self, entity: BlogEntity) -> BlogResponse {
        BlogResponse {
            id: entity.id,
            title: entity.title,
            content: entity.content,
            author: entity.author,
            category: entity.category,
            tags: entity.tags,
            views: entity.views,
            published: entity.published,
            created_at: entity.created_at,
        }
    }
}
