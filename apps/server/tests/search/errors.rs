use crate::support::*;
use axum::http::StatusCode;
use quarry::db::{search::SearchRequest, MemoryStore};
use quarry::models::UserMapper;
use quarry::Error;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn malformed_queries_are_client_errors() -> anyhow::Result<()> {
    let app = TestApp::new()?;
    for query in [
        "unknownField = 5",
        "password = 'secret'",
        "name = ",
        "(age > 3",
        "age > 'old'",
        "name > 'B'",
        "active contains 'tr'",
        "name = 'unterminated",
    ] {
        let (status, body) = app.get(&search_uri("users", &[("query", query)])).await?;
        assert_status(status, StatusCode::BAD_REQUEST, query);
        assert_error_kind(&body, "malformed_query");
    }
    Ok(())
}

#[tokio::test]
async fn deeply_nested_query_is_a_client_error() -> anyhow::Result<()> {
    let app = TestApp::new()?;
    let depth = 10_000;
    let query = format!("{}name = 'x'{}", "(".repeat(depth), ")".repeat(depth));
    let (status, body) = app.get(&search_uri("users", &[("query", query.as_str())])).await?;
    assert_status(status, StatusCode::BAD_REQUEST, "deep nesting");
    assert_error_kind(&body, "malformed_query");

    let query = vec!["age > 1"; 1_000].join(" and ");
    let (status, body) = app.get(&search_uri("users", &[("query", query.as_str())])).await?;
    assert_status(status, StatusCode::BAD_REQUEST, "long chain");
    assert_error_kind(&body, "malformed_query");
    Ok(())
}

#[tokio::test]
async fn malformed_query_names_the_offending_token() -> anyhow::Result<()> {
    let app = TestApp::new()?;
    let err = app
        .state
        .search_engine
        .search(
            &UserMapper,
            &SearchRequest::new(10, 0).with_query("unknownField = 5"),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MalformedQuery(_)));
    assert!(err.to_string().contains("unknownField"), "{err}");
    Ok(())
}

#[tokio::test]
async fn invalid_sort_direction_is_rejected() -> anyhow::Result<()> {
    let app = TestApp::new()?;
    let (status, body) = app
        .get("/api/v1/users/search?sortBy=name&sortDir=sideways")
        .await?;
    assert_status(status, StatusCode::BAD_REQUEST, "bad direction");
    assert_error_kind(&body, "invalid_sort_direction");
    Ok(())
}

#[tokio::test]
async fn invalid_pagination_is_rejected() -> anyhow::Result<()> {
    let app = TestApp::new_with_config(|config| config.search.max_page_size = 50)?;
    for uri in [
        "/api/v1/users/search?size=0",
        "/api/v1/users/search?size=-3",
        "/api/v1/users/search?size=51",
        "/api/v1/users/search?page=-1",
        "/api/v1/users/search?size=ten",
        "/api/v1/users/search?size=2&page=9223372036854775807",
    ] {
        let (status, body) = app.get(uri).await?;
        assert_status(status, StatusCode::BAD_REQUEST, uri);
        assert_error_kind(&body, "invalid_pagination");
    }

    let err = app
        .state
        .search_engine
        .search(&UserMapper, &SearchRequest::new(0, 0))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidPagination(_)));
    Ok(())
}

#[tokio::test]
async fn store_failure_is_service_unavailable() -> anyhow::Result<()> {
    let app = TestApp::with_store(Arc::new(UnavailableStore), |_| {});
    let (status, body) = app.get("/api/v1/users/search").await?;
    assert_status(status, StatusCode::SERVICE_UNAVAILABLE, "store down");
    assert_error_kind(&body, "store_unavailable");

    let err = app
        .state
        .search_engine
        .search(&UserMapper, &SearchRequest::new(5, 0))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::StoreUnavailable { .. }));
    Ok(())
}

#[tokio::test]
async fn validation_happens_before_the_store_is_touched() -> anyhow::Result<()> {
    let app = TestApp::with_store(Arc::new(UnavailableStore), |_| {});
    let (status, body) = app
        .get(&search_uri("users", &[("query", "nope = 1")]))
        .await?;
    assert_status(status, StatusCode::BAD_REQUEST, "bad query, store down");
    assert_error_kind(&body, "malformed_query");
    Ok(())
}

#[tokio::test]
async fn undecodable_document_is_an_internal_error() -> anyhow::Result<()> {
    let store = MemoryStore::new();
    store.insert("users", json!({"id": "x", "name": "Broken", "age": "forty"}))?;
    let app = TestApp::with_store(Arc::new(store), |_| {});

    let (status, body) = app.get("/api/v1/users/search").await?;
    assert_status(status, StatusCode::INTERNAL_SERVER_ERROR, "decode failure");
    assert_error_kind(&body, "internal");
    assert_eq!(body["message"], "Internal server error");
    Ok(())
}

#[tokio::test]
async fn health_reports_ok() -> anyhow::Result<()> {
    let app = TestApp::new()?;
    let (status, body) = app.get("/health").await?;
    assert_status(status, StatusCode::OK, "health");
    assert_eq!(body["status"], "ok");
    Ok(())
}
