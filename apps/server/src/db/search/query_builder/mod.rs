//! SQL query builder for collection searches.
//!
//! Documents live in a single `documents(collection, id, body JSONB)` table.
//! The builder renders:
//! - the collection restriction
//! - the filter predicate over `body`
//! - ordering (nulls last, `id` tie-break) and the page window
//!
//! Every caller-supplied string (collection, field paths, operands) is bound as a
//! parameter; only operators, casts and the numeric window are formatted into SQL.

use super::request::{PageWindow, SortSpec};
use quarry_query::FilterPredicate;

mod bind;
mod filter;

use bind::{push_path, push_text};
pub(crate) use filter::build_predicate_sql;

/// Bind values for `sqlx` queries.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    TextArray(Vec<String>),
}

/// Query builder for one collection search.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    collection: String,
    filter: FilterPredicate,
    sort: SortSpec,
    window: Option<PageWindow>,
}

impl QueryBuilder {
    pub fn new(collection: &str) -> Self {
        Self {
            collection: collection.to_string(),
            filter: FilterPredicate::MatchAll,
            sort: SortSpec::default(),
            window: None,
        }
    }

    pub fn with_filter(mut self, filter: FilterPredicate) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_window(mut self, window: PageWindow) -> Self {
        self.window = Some(window);
        self
    }

    pub fn build_sql(&self) -> (String, Vec<BindValue>) {
        let mut sql = String::from("SELECT d.body FROM documents d WHERE ");
        let mut bind_params = Vec::new();

        self.push_where(&mut sql, &mut bind_params);
        self.push_order_by(&mut sql, &mut bind_params);

        if let Some(window) = self.window {
            sql.push_str(&format!(
                " LIMIT {} OFFSET {}",
                window.limit(),
                window.offset()
            ));
        }

        (sql, bind_params)
    }

    pub fn build_count_sql(&self) -> (String, Vec<BindValue>) {
        let mut sql = String::from("SELECT COUNT(*) FROM documents d WHERE ");
        let mut bind_params = Vec::new();
        self.push_where(&mut sql, &mut bind_params);
        (sql, bind_params)
    }

    fn push_where(&self, sql: &mut String, bind_params: &mut Vec<BindValue>) {
        let idx = push_text(bind_params, self.collection.clone());
        sql.push_str(&format!("d.collection = ${idx}"));

        if !self.filter.is_match_all() {
            let clause = build_predicate_sql(&self.filter, bind_params, "d");
            sql.push_str(" AND ");
            sql.push_str(&clause);
        }
    }

    fn push_order_by(&self, sql: &mut String, bind_params: &mut Vec<BindValue>) {
        let dir = self.sort.direction.as_sql();
        if self.sort.is_id() {
            sql.push_str(&format!(" ORDER BY d.id {dir}"));
            return;
        }

        let segments = self.sort.field.split('.').map(str::to_string).collect();
        let path_idx = push_path(bind_params, segments);
        // JSON null sorts with missing values.
        sql.push_str(&format!(
            " ORDER BY NULLIF(d.body #> ${path_idx}, 'null'::jsonb) {dir} NULLS LAST, d.id ASC"
        ));
    }
}
