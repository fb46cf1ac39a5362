use crate::support::*;
use axum::http::StatusCode;
use quarry::db::{search::SearchRequest, MemoryStore};
use quarry::models::UserMapper;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn default_sort_is_id_ascending() -> anyhow::Result<()> {
    let app = TestApp::new()?;
    let (status, page) = app.get("/api/v1/users/search").await?;
    assert_status(status, StatusCode::OK, "default sort");
    assert_eq!(content_field(&page, "id")?, vec!["1", "2", "3"]);
    Ok(())
}

#[tokio::test]
async fn direction_without_field_is_ignored() -> anyhow::Result<()> {
    let app = TestApp::new()?;
    for uri in [
        "/api/v1/users/search?sortDir=DESC",
        "/api/v1/users/search?sortDir=nonsense",
        "/api/v1/users/search?sortBy=&sortDir=DESC",
    ] {
        let (status, page) = app.get(uri).await?;
        assert_status(status, StatusCode::OK, uri);
        assert_eq!(content_field(&page, "id")?, vec!["1", "2", "3"], "{uri}");
    }
    Ok(())
}

#[tokio::test]
async fn name_orders_follow_direction() -> anyhow::Result<()> {
    let app = TestApp::new()?;
    let engine = &app.state.search_engine;

    let asc = engine
        .search(&UserMapper, &SearchRequest::new(10, 0).with_sort("name", "ASC"))
        .await?;
    let names: Vec<_> = asc.content.iter().map(|u| u.name.as_str()).collect();
    assert!(names.windows(2).all(|w| w[0] <= w[1]), "{names:?}");

    let desc = engine
        .search(&UserMapper, &SearchRequest::new(10, 0).with_sort("name", "desc"))
        .await?;
    let names: Vec<_> = desc.content.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Carol", "Bob", "Alice"]);

    let by_field_only = engine
        .search(&UserMapper, &SearchRequest::new(10, 0).with_sort_field("age"))
        .await?;
    let ages: Vec<_> = by_field_only.content.iter().map(|u| u.age).collect();
    assert_eq!(ages, vec![Some(27), Some(31), Some(45)]);
    Ok(())
}

#[tokio::test]
async fn equal_keys_and_missing_values_are_stable_across_pages() -> anyhow::Result<()> {
    let store = MemoryStore::new();
    store.insert_many(
        "users",
        vec![
            json!({"id": "d", "name": "Same"}),
            json!({"id": "b", "name": "Same"}),
            json!({"id": "c"}),
            json!({"id": "a", "name": "Same"}),
            json!({"id": "e", "name": "Other"}),
        ],
    )?;
    let app = TestApp::with_store(Arc::new(store), |_| {});

    let mut seen = Vec::new();
    for page in 0..3 {
        let (status, body) = app
            .get(&format!(
                "/api/v1/users/search?size=2&page={page}&sortBy=name&sortDir=DESC"
            ))
            .await?;
        assert_status(status, StatusCode::OK, "sorted page");
        seen.extend(content_field(&body, "id")?.into_iter().map(str::to_string));
    }
    assert_eq!(seen, vec!["a", "b", "d", "e", "c"]);
    Ok(())
}

#[tokio::test]
async fn unknown_sort_field_sorts_as_all_missing() -> anyhow::Result<()> {
    let app = TestApp::new()?;
    let (status, page) = app
        .get("/api/v1/users/search?sortBy=nickname&sortDir=DESC")
        .await?;
    assert_status(status, StatusCode::OK, "unknown sort field");
    assert_eq!(content_field(&page, "id")?, vec!["1", "2", "3"]);
    Ok(())
}
