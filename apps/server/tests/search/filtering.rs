use crate::support::*;
use axum::http::StatusCode;
use quarry::db::search::SearchRequest;
use quarry::models::{BlogMapper, UserMapper};

async fn user_names(app: &TestApp, query: &str) -> anyhow::Result<Vec<String>> {
    let (status, page) = app
        .get(&search_uri("users", &[("query", query), ("sortBy", "name")]))
        .await?;
    assert_status(status, StatusCode::OK, query);
    Ok(content_field(&page, "name")?
        .into_iter()
        .map(str::to_string)
        .collect())
}

#[tokio::test]
async fn blank_query_matches_everything() -> anyhow::Result<()> {
    let app = TestApp::new()?;
    let engine = &app.state.search_engine;

    let unfiltered = engine
        .search(&UserMapper, &SearchRequest::new(10, 0))
        .await?;
    for query in ["", "   "] {
        let page = engine
            .search(&UserMapper, &SearchRequest::new(10, 0).with_query(query))
            .await?;
        assert_eq!(page, unfiltered, "query {query:?}");
    }
    assert_eq!(unfiltered.total_elements, 3);
    Ok(())
}

#[tokio::test]
async fn contains_is_case_insensitive() -> anyhow::Result<()> {
    let app = TestApp::new()?;
    let (status, page) = app
        .get(&search_uri(
            "users",
            &[("query", "name contains 'a'"), ("sortBy", "name"), ("sortDir", "ASC")],
        ))
        .await?;
    assert_status(status, StatusCode::OK, "contains");
    assert_eq!(content_field(&page, "name")?, vec!["Alice", "Carol"]);
    assert_eq!(total_elements(&page)?, 2);
    Ok(())
}

#[tokio::test]
async fn string_equality_is_exact() -> anyhow::Result<()> {
    let app = TestApp::new()?;
    assert_eq!(user_names(&app, "name = 'Bob'").await?, vec!["Bob"]);
    assert!(user_names(&app, "name = 'bob'").await?.is_empty());
    assert_eq!(user_names(&app, "email endswith '.ORG'").await?, vec!["Carol"]);
    assert_eq!(user_names(&app, "username sw \"al\"").await?, vec!["Alice"]);
    Ok(())
}

#[tokio::test]
async fn numbers_booleans_and_dates() -> anyhow::Result<()> {
    let app = TestApp::new()?;
    assert_eq!(user_names(&app, "age > 30").await?, vec!["Alice", "Carol"]);
    assert_eq!(user_names(&app, "age le 27").await?, vec!["Bob"]);
    assert_eq!(user_names(&app, "active eq false").await?, vec!["Bob"]);
    assert_eq!(
        user_names(&app, "created_at >= '2024-06-01'").await?,
        vec!["Bob", "Carol"]
    );
    Ok(())
}

#[tokio::test]
async fn boolean_operators_and_grouping() -> anyhow::Result<()> {
    let app = TestApp::new()?;
    // and binds tighter than or
    assert_eq!(
        user_names(&app, "name = 'Bob' or age > 40 and active = true").await?,
        vec!["Bob", "Carol"]
    );
    assert_eq!(
        user_names(&app, "(name = 'Bob' or age > 40) and active = false").await?,
        vec!["Bob"]
    );
    assert_eq!(
        user_names(&app, "not(name contains 'o') AND age != 45").await?,
        vec!["Alice"]
    );
    Ok(())
}

#[tokio::test]
async fn ne_and_not_match_missing_fields() -> anyhow::Result<()> {
    let app = TestApp::new()?;
    let engine = &app.state.search_engine;

    // b3 has no created_at.
    let page = engine
        .search(
            &BlogMapper,
            &SearchRequest::new(10, 0).with_query("not(created_at < '2030-01-01')"),
        )
        .await?;
    let ids: Vec<_> = page.content.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["b3"]);

    let page = engine
        .search(
            &BlogMapper,
            &SearchRequest::new(10, 0).with_query("category ne 'cooking'"),
        )
        .await?;
    assert_eq!(page.total_elements, 2);
    Ok(())
}

#[tokio::test]
async fn blogs_filter_on_their_own_schema() -> anyhow::Result<()> {
    let app = TestApp::new()?;
    let (status, page) = app
        .get(&search_uri(
            "blogs",
            &[
                ("query", "category = 'programming' and published = true"),
                ("sortBy", "views"),
                ("sortDir", "desc"),
            ],
        ))
        .await?;
    assert_status(status, StatusCode::OK, "blog search");
    assert_eq!(content_field(&page, "id")?, vec!["b1"]);

    // A users-only field is unknown to blogs.
    let (status, body) = app
        .get(&search_uri("blogs", &[("query", "age > 3")]))
        .await?;
    assert_status(status, StatusCode::BAD_REQUEST, "unknown blog field");
    assert_error_kind(&body, "malformed_query");
    Ok(())
}
