//! In-process document store
//!
//! Evaluates filter predicates directly against JSON documents. Used for local
//! runs and tests; ordering mirrors the PostgreSQL store (nulls last, `id` tie-break).

use crate::db::search::request::{PageWindow, SortSpec, DEFAULT_SORT_FIELD};
use crate::db::traits::DocumentStore;
use crate::{Error, Result};
use anyhow::Context as _;
use async_trait::async_trait;
use quarry_query::predicate::{json_number_to_decimal, lookup};
use quarry_query::FilterPredicate;
use serde_json::Value as JsonValue;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{RwLock, RwLockReadGuard};

#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<JsonValue>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_collections(collections: HashMap<String, Vec<JsonValue>>) -> Self {
        Self {
            collections: RwLock::new(collections),
        }
    }

    /// Load a seed file of the shape `{ "<collection>": [ {...}, ... ] }`.
    pub fn load_seed(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        let collections: HashMap<String, Vec<JsonValue>> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse seed file {}", path.display()))?;
        for (name, docs) in &collections {
            tracing::info!(collection = %name, documents = docs.len(), "Seeded collection");
        }
        Ok(Self::from_collections(collections))
    }

    /// Append documents to a collection.
    pub fn insert_many(
        &self,
        collection: &str,
        docs: impl IntoIterator<Item = JsonValue>,
    ) -> Result<()> {
        let mut guard = self
            .collections
            .write()
            .map_err(|_| Error::store_unavailable("memory store lock poisoned"))?;
        guard.entry(collection.to_string()).or_default().extend(docs);
        Ok(())
    }

    pub fn insert(&self, collection: &str, doc: JsonValue) -> Result<()> {
        self.insert_many(collection, std::iter::once(doc))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, Vec<JsonValue>>>> {
        self.collections
            .read()
            .map_err(|_| Error::store_unavailable("memory store lock poisoned"))
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn count(&self, collection: &str, filter: &FilterPredicate) -> Result<u64> {
        let guard = self.read()?;
        let count = guard
            .get(collection)
            .map(|docs| docs.iter().filter(|doc| filter.matches(doc)).count())
            .unwrap_or(0);
        Ok(count as u64)
    }

    async fn find(
        &self,
        collection: &str,
        filter: &FilterPredicate,
        sort: &SortSpec,
        window: PageWindow,
    ) -> Result<Vec<JsonValue>> {
        let guard = self.read()?;
        let Some(docs) = guard.get(collection) else {
            return Ok(Vec::new());
        };

        let mut matched: Vec<&JsonValue> = docs.iter().filter(|doc| filter.matches(doc)).collect();
        matched.sort_by(|a, b| compare_documents(a, b, sort));

        let offset = usize::try_from(window.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(window.limit()).unwrap_or(usize::MAX);
        Ok(matched
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }
}

fn compare_documents(a: &JsonValue, b: &JsonValue, sort: &SortSpec) -> Ordering {
    let primary = compare_sort_values(lookup(a, &sort.field), lookup(b, &sort.field));
    let primary = if sort.direction.is_ascending() {
        primary
    } else {
        primary.reverse()
    };
    // Missing values stay last whatever the direction.
    let primary = match (lookup(a, &sort.field), lookup(b, &sort.field)) {
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        _ => primary,
    };
    if primary != Ordering::Equal || sort.is_id() {
        return primary;
    }
    compare_sort_values(
        lookup(a, DEFAULT_SORT_FIELD),
        lookup(b, DEFAULT_SORT_FIELD),
    )
}

/// Rank of a JSON type in sort order, matching PostgreSQL `jsonb` ordering.
fn type_rank(value: &JsonValue) -> u8 {
    match value {
        JsonValue::Null => 0,
        JsonValue::String(_) => 1,
        JsonValue::Number(_) => 2,
        JsonValue::Bool(_) => 3,
        JsonValue::Array(_) => 4,
        JsonValue::Object(_) => 5,
    }
}

fn compare_sort_values(a: Option<&JsonValue>, b: Option<&JsonValue>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => match (a, b) {
            (JsonValue::String(x), JsonValue::String(y)) => x.cmp(y),
            (JsonValue::Number(x), JsonValue::Number(y)) => compare_numbers(x, y),
            (JsonValue::Bool(x), JsonValue::Bool(y)) => x.cmp(y),
            _ => type_rank(a).cmp(&type_rank(b)),
        },
    }
}

/// Total order over JSON numbers: by `f64`, then exactly by decimal where the
/// `f64` values collide. Numbers outside the decimal range sort after
/// representable numbers with the same `f64` value.
fn compare_numbers(x: &serde_json::Number, y: &serde_json::Number) -> Ordering {
    let fx = x.as_f64().unwrap_or(f64::NAN);
    let fy = y.as_f64().unwrap_or(f64::NAN);
    fx.total_cmp(&fy).then_with(|| {
        match (json_number_to_decimal(x), json_number_to_decimal(y)) {
            (Some(dx), Some(dy)) => dx.cmp(&dy),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    })
}
