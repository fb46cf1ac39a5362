use crate::support::*;
use axum::http::StatusCode;
use quarry::db::{search::SearchRequest, MemoryStore};
use quarry::models::UserMapper;
use quickcheck::{quickcheck, TestResult};
use std::sync::Arc;

#[tokio::test]
async fn pages_split_the_sorted_set() -> anyhow::Result<()> {
    let app = TestApp::new()?;

    let (status, page) = app
        .get("/api/v1/users/search?size=2&page=0&sortBy=name&sortDir=ASC")
        .await?;
    assert_status(status, StatusCode::OK, "first page");
    assert_eq!(content_field(&page, "name")?, vec!["Alice", "Bob"]);
    assert_eq!(total_elements(&page)?, 3);
    assert_eq!(page["totalPages"], 2);
    assert_eq!(page["first"], true);
    assert_eq!(page["hasNext"], true);

    let (status, page) = app
        .get("/api/v1/users/search?size=2&page=1&sortBy=name&sortDir=ASC")
        .await?;
    assert_status(status, StatusCode::OK, "second page");
    assert_eq!(content_field(&page, "name")?, vec!["Carol"]);
    assert_eq!(total_elements(&page)?, 3);
    assert_eq!(page["last"], true);
    assert_eq!(page["hasPrevious"], true);
    assert_eq!(page["numberOfElements"], 1);
    Ok(())
}

#[tokio::test]
async fn page_past_the_end_is_empty_but_counted() -> anyhow::Result<()> {
    let app = TestApp::new()?;
    let (status, page) = app.get("/api/v1/users/search?size=2&page=5").await?;
    assert_status(status, StatusCode::OK, "page past the end");
    assert!(content_field(&page, "id")?.is_empty());
    assert_eq!(total_elements(&page)?, 3);
    assert_eq!(page["pageNumber"], 5);
    Ok(())
}

#[tokio::test]
async fn omitted_size_uses_configured_default() -> anyhow::Result<()> {
    let app = TestApp::new_with_config(|config| config.search.default_page_size = 2)?;
    let (status, page) = app.get("/api/v1/users/search").await?;
    assert_status(status, StatusCode::OK, "default size");
    assert_eq!(page["pageSize"], 2);
    assert_eq!(content_field(&page, "id")?, vec!["1", "2"]);
    Ok(())
}

#[tokio::test]
async fn response_omits_password() -> anyhow::Result<()> {
    let app = TestApp::new()?;
    let (_, page) = app.get("/api/v1/users/search?size=1").await?;
    let user = &page["content"][0];
    assert_eq!(user["username"], "alice");
    assert!(user.get("password").is_none());
    assert_eq!(user["createdAt"], "2024-05-01T12:00:00Z");
    Ok(())
}

fn numbered_app(count: usize) -> TestApp {
    let store = MemoryStore::new();
    store
        .insert_many("users", numbered_users(count))
        .expect("seed users");
    TestApp::with_store(Arc::new(store), |_| {})
}

#[test]
fn page_content_never_exceeds_page_size() {
    fn prop(count: u8, size: u8, page: u8) -> TestResult {
        if size == 0 {
            return TestResult::discard();
        }
        let (count, size, page) = (count as usize, size as i64, (page % 16) as i64);
        let app = numbered_app(count);
        let request = SearchRequest::new(size, page).with_query("age ge 22");
        let result = tokio_test::block_on(app.state.search_engine.search(&UserMapper, &request))
            .expect("search succeeds");

        let len = result.content.len() as u64;
        let full_page_expected = ((page + 1) * size) as u64 <= result.total_elements;
        TestResult::from_bool(
            len <= size as u64 && (!full_page_expected || len == size as u64),
        )
    }
    quickcheck(prop as fn(u8, u8, u8) -> TestResult);
}

#[test]
fn total_is_independent_of_the_window() {
    fn prop(count: u8, sizes: Vec<(u8, u8)>) -> bool {
        let app = numbered_app(count as usize);
        let engine = &app.state.search_engine;
        let unpaged = SearchRequest::new(1000, 0).with_query("active eq true or age lt 23");
        let expected = tokio_test::block_on(engine.search(&UserMapper, &unpaged))
            .expect("search succeeds")
            .total_elements;

        sizes.into_iter().all(|(size, page)| {
            let request = SearchRequest::new(i64::from(size.max(1)), i64::from(page))
                .with_query("active eq true or age lt 23")
                .with_sort("name", "DESC");
            tokio_test::block_on(engine.search(&UserMapper, &request))
                .map(|result| result.total_elements == expected)
                .unwrap_or(false)
        })
    }
    quickcheck(prop as fn(u8, Vec<(u8, u8)>) -> bool);
}
