//! Search routes
//!
//! - `GET /users/search?size=&page=&sortDir=&query=&sortBy=`
//! - `GET /blogs/search?...` (same parameters)

use crate::api::handlers::search;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn search_routes() -> Router<AppState> {
    Router::new()
        .route("/users/search", get(search::search_users))
        .route("/blogs/search", get(search::search_blogs))
}
