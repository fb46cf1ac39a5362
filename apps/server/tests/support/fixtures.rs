use serde_json::{json, Value};

pub fn users() -> Vec<Value> {
    vec![
        json!({
            "id": "2",
            "name": "Bob",
            "username": "bob",
            "email": "bob@example.com",
            "password": "$2b$10$bob",
            "roles": ["user"],
            "age": 27,
            "active": false,
            "created_at": "2024-06-15T09:30:00Z"
        }),
        json!({
            "id": "3",
            "name": "Carol",
            "username": "carol",
            "email": "carol@example.org",
            "password": "$2b$10$carol",
            "roles": ["user", "editor"],
            "age": 45,
            "active": true,
            "created_at": "2024-07-20T08:30:00+02:00"
        }),
        json!({
            "id": "1",
            "name": "Alice",
            "username": "alice",
            "email": "alice@example.com",
            "password": "$2b$10$alice",
            "roles": ["admin"],
            "age": 31,
            "active": true,
            "created_at": "2024-05-01T12:00:00Z"
        }),
    ]
}

pub fn blogs() -> Vec<Value> {
    vec![
        json!({
            "id": "b1",
            "title": "Getting started with Rust",
            "content": "Ownership first.",
            "author": "alice",
            "category": "programming",
            "tags": ["rust"],
            "views": 1200,
            "published": true,
            "created_at": "2024-02-01T10:00:00Z"
        }),
        json!({
            "id": "b2",
            "title": "Sourdough notes",
            "content": "Feed the starter.",
            "author": "bob",
            "category": "cooking",
            "tags": [],
            "views": 85,
            "published": true,
            "created_at": "2024-03-10T18:45:00Z"
        }),
        json!({
            "id": "b3",
            "title": "Draft: async Rust",
            "content": "",
            "author": "alice",
            "category": "programming",
            "tags": ["rust", "async"],
            "views": 0,
            "published": false
        }),
    ]
}

/// `count` users with ids `u000`, `u001`, ... and repeating names and ages.
pub fn numbered_users(count: usize) -> Vec<Value> {
    const NAMES: [&str; 4] = ["Dana", "Eve", "Frank", "Grace"];
    (0..count)
        .map(|i| {
            json!({
                "id": format!("u{i:03}"),
                "name": NAMES[i % NAMES.len()],
                "age": 20 + (i % 7),
                "active": i % 2 == 0
            })
        })
        .collect()
}

pub fn seed() -> Vec<(&'static str, Vec<Value>)> {
    vec![("users", users()), ("blogs", blogs())]
}
