//! Search request, sort and page-window types

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw search input as received from a caller.
///
/// Page numbers are zero-based. Signed integers are kept so that negative input
/// reaches validation instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub page_size: i64,
    pub page_number: i64,
    pub sort_direction: Option<String>,
    pub query: Option<String>,
    pub sort_field: Option<String>,
}

impl SearchRequest {
    pub fn new(page_size: i64, page_number: i64) -> Self {
        Self {
            page_size,
            page_number,
            ..Default::default()
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_sort(mut self, field: impl Into<String>, direction: impl Into<String>) -> Self {
        self.sort_field = Some(field.into());
        self.sort_direction = Some(direction.into());
        self
    }

    pub fn with_sort_field(mut self, field: impl Into<String>) -> Self {
        self.sort_field = Some(field.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse `ASC`/`DESC`, ignoring case and surrounding whitespace.
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "ASC" => Ok(Self::Asc),
            "DESC" => Ok(Self::Desc),
            _ => Err(Error::InvalidSortDirection(raw.to_string())),
        }
    }

    pub fn is_ascending(self) -> bool {
        self == Self::Asc
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Field used when a request names no sort field.
pub const DEFAULT_SORT_FIELD: &str = "id";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn is_id(&self) -> bool {
        self.field == DEFAULT_SORT_FIELD
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::new(DEFAULT_SORT_FIELD, SortDirection::Asc)
    }
}

/// Validated page window: which slice of the sorted, filtered set to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page_number: u64,
    pub page_size: u64,
}

impl PageWindow {
    /// Validate raw paging input. `page_size` must be in `1..=max_page_size`,
    /// `page_number` non-negative, and the offset must fit in an `i64` (the
    /// range of a PostgreSQL `OFFSET`).
    pub fn new(page_size: i64, page_number: i64, max_page_size: u64) -> Result<Self> {
        if page_size <= 0 {
            return Err(Error::InvalidPagination(format!(
                "pageSize must be greater than 0 (got {page_size})"
            )));
        }
        if page_number < 0 {
            return Err(Error::InvalidPagination(format!(
                "pageNumber must not be negative (got {page_number})"
            )));
        }
        if (page_size as u64) > max_page_size {
            return Err(Error::InvalidPagination(format!(
                "pageSize must not exceed {max_page_size} (got {page_size})"
            )));
        }
        if page_number.checked_mul(page_size).is_none() {
            return Err(Error::InvalidPagination(format!(
                "pageNumber {page_number} is out of range for pageSize {page_size}"
            )));
        }
        Ok(Self {
            page_number: page_number as u64,
            page_size: page_size as u64,
        })
    }

    pub fn offset(&self) -> u64 {
        // Checked in `new`.
        self.page_number * self.page_size
    }

    pub fn limit(&self) -> u64 {
        self.page_size
    }
}
