//! Error types for the search service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum Error {
    /// The query expression failed to parse or referenced something outside the schema.
    #[error("Malformed query: {0}")]
    MalformedQuery(#[from] quarry_query::Error),

    #[error("Invalid sort direction '{0}', expected ASC or DESC")]
    InvalidSortDirection(String),

    #[error("Invalid pagination: {0}")]
    InvalidPagination(String),

    /// The persistence store could not serve the request. Never retried here.
    #[error("Store unavailable: {message}")]
    StoreUnavailable {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// A stored document does not deserialize into its entity type.
    #[error("Failed to decode stored document: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl Error {
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Error::StoreUnavailable {
            message: message.into(),
            source: None,
        }
    }

    /// True for errors caused by the request itself (bad query, sort or paging input).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::MalformedQuery(_) | Error::InvalidSortDirection(_) | Error::InvalidPagination(_)
        )
    }

    /// Short machine-readable kind used in error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::MalformedQuery(_) => "malformed_query",
            Error::InvalidSortDirection(_) => "invalid_sort_direction",
            Error::InvalidPagination(_) => "invalid_pagination",
            Error::StoreUnavailable { .. } => "store_unavailable",
            Error::Decode(_) | Error::Internal(_) => "internal",
        }
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        Error::StoreUnavailable {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for Error {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        Error::StoreUnavailable {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Error::MalformedQuery(_)
            | Error::InvalidSortDirection(_)
            | Error::InvalidPagination(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            Error::StoreUnavailable { .. } => {
                tracing::warn!(error = %self, "Search store unavailable");
                (StatusCode::SERVICE_UNAVAILABLE, self.to_string())
            }
            Error::Decode(_) | Error::Internal(_) => {
                tracing::error!("Internal error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": self.kind(),
            "message": message,
        }));

        (status, body).into_response()
    }
}
