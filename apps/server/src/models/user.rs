use super::Entity;
use crate::db::search::mapper::ResultMapper;
use chrono::{DateTime, Utc};
use quarry_query::{EntitySchema, FieldType};
use serde::{Deserialize, Serialize};

/// Stored user document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserEntity {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    /// Password hash. Never searchable, never projected.
    pub password: String,
    pub roles: Vec<String>,
    pub age: Option<u32>,
    pub active: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl Entity for UserEntity {
    const COLLECTION: &'static str = "users";

    fn schema() -> EntitySchema {
        EntitySchema::new(Self::COLLECTION)
            .field("id", FieldType::String)
            .field("name", FieldType::String)
            .field("username", FieldType::String)
            .field("email", FieldType::String)
            .field("age", FieldType::Number)
            .field("active", FieldType::Boolean)
            .field("created_at", FieldType::DateTime)
    }
}

/// Externally visible user fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub roles: Vec<String>,
    pub age: Option<u32>,
    pub active: bool,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UserMapper;

impl ResultMapper for UserMapper {
    type Entity = UserEntity;
    type Response = UserResponse;

    fn map_entity(&self, entity: UserEntity) -> UserResponse {
        UserResponse {
            id: entity.id,
            name: entity.name,
            username: entity.username,
            email: entity.email,
            roles: entity.roles,
            age: entity.age,
            active: entity.active,
            created_at: entity.created_at,
        }
    }
}
