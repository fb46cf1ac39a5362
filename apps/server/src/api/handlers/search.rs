//! Search operation handlers
//!
//! Handles collection searches:
//! - GET /api/v1/users/search
//! - GET /api/v1/blogs/search
//!
//! Query parameters (all optional):
//! - `size`: page size, defaults to `search.default_page_size`
//! - `page`: zero-based page number, defaults to 0
//! - `sortBy` / `sortDir`: sort field and `ASC`/`DESC`
//! - `query`: filter expression, e.g. `age >= 30 and name contains 'a'`

use crate::{
    db::search::{PageResult, ResultMapper, SearchRequest},
    models::{BlogMapper, BlogResponse, Entity, UserMapper, UserResponse},
    state::AppState,
    Error, Result,
};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

/// Raw query parameters. Paging values stay strings so that bad numbers surface
/// as pagination errors rather than extractor rejections.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub size: Option<String>,
    pub page: Option<String>,
    pub sort_dir: Option<String>,
    pub query: Option<String>,
    pub sort_by: Option<String>,
}

impl SearchParams {
    pub fn into_request(self, default_page_size: u64) -> Result<SearchRequest> {
        let page_size = match self.size.as_deref().map(str::trim) {
            None | Some("") => i64::try_from(default_page_size).unwrap_or(i64::MAX),
            Some(raw) => parse_int("size", raw)?,
        };
        let page_number = match self.page.as_deref().map(str::trim) {
            None | Some("") => 0,
            Some(raw) => parse_int("page", raw)?,
        };

        Ok(SearchRequest {
            page_size,
            page_number,
            sort_direction: self.sort_dir,
            query: self.query,
            sort_field: self.sort_by,
        })
    }
}

fn parse_int(name: &str, raw: &str) -> Result<i64> {
    raw.parse().map_err(|_| {
        Error::InvalidPagination(format!("{name} must be an integer (got '{raw}')"))
    })
}

async fn run_search<M>(
    state: &AppState,
    mapper: &M,
    params: SearchParams,
) -> Result<Json<PageResult<M::Response>>>
where
    M: ResultMapper,
    M::Entity: Entity,
{
    let engine = &state.search_engine;
    let request = params.into_request(engine.search_config().default_page_size)?;
    let page = engine.search(mapper, &request).await?;
    tracing::debug!(
        collection = <M::Entity as Entity>::COLLECTION,
        total = page.total_elements,
        returned = page.number_of_elements,
        "Search completed"
    );
    Ok(Json(page))
}

/// GET /api/v1/users/search
pub async fn search_users(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<PageResult<UserResponse>>> {
    run_search(&state, &UserMapper, params).await
}

/// GET /api/v1/blogs/search
pub async fn search_blogs(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<PageResult<BlogResponse>>> {
    run_search(&state, &BlogMapper, params).await
}
