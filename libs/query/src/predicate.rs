//! Schema-validated filter predicates
//!
//! A [`FilterPredicate`] is the storage-independent form of a search filter.
//! Stores either compile it to their native query language or evaluate it
//! directly against JSON documents with [`FilterPredicate::matches`].

use crate::ast::CompareOp;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde_json::Value as JsonValue;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Typed comparison operand
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    String(String),
    Number(Decimal),
    Boolean(bool),
    DateTime(DateTime<Utc>),
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::String(s) => write!(f, "{s:?}"),
            FilterValue::Number(n) => write!(f, "{n}"),
            FilterValue::Boolean(b) => write!(f, "{b}"),
            FilterValue::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
        }
    }
}

/// One `field op value` test against a whitelisted field
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub field: String,
    pub op: CompareOp,
    pub value: FilterValue,
}

impl Condition {
    /// Path segments of the (possibly dotted) field name.
    pub fn path(&self) -> Vec<String> {
        self.field.split('.').map(str::to_string).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FilterPredicate {
    /// Admits every document.
    #[default]
    MatchAll,
    Condition(Condition),
    And(Box<FilterPredicate>, Box<FilterPredicate>),
    Or(Box<FilterPredicate>, Box<FilterPredicate>),
    Not(Box<FilterPredicate>),
}

impl FilterPredicate {
    pub fn is_match_all(&self) -> bool {
        matches!(self, FilterPredicate::MatchAll)
    }

    /// Evaluate the predicate against a JSON document.
    pub fn matches(&self, doc: &JsonValue) -> bool {
        match self {
            FilterPredicate::MatchAll => true,
            FilterPredicate::Condition(c) => condition_matches(c, doc),
            FilterPredicate::And(a, b) => a.matches(doc) && b.matches(doc),
            FilterPredicate::Or(a, b) => a.matches(doc) || b.matches(doc),
            FilterPredicate::Not(inner) => !inner.matches(doc),
        }
    }
}

impl fmt::Display for FilterPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterPredicate::MatchAll => f.write_str("*"),
            FilterPredicate::Condition(c) => write!(f, "{} {} {}", c.field, c.op, c.value),
            FilterPredicate::And(a, b) => write!(f, "({a} and {b})"),
            FilterPredicate::Or(a, b) => write!(f, "({a} or {b})"),
            FilterPredicate::Not(inner) => write!(f, "not({inner})"),
        }
    }
}

/// Resolve a field path inside a document. Missing members and JSON `null` both
/// resolve to `None`.
pub fn lookup<'a>(doc: &'a JsonValue, field: &str) -> Option<&'a JsonValue> {
    let mut current = doc;
    for segment in field.split('.') {
        current = current.get(segment)?;
    }
    if current.is_null() {
        None
    } else {
        Some(current)
    }
}

/// Parse an RFC 3339 timestamp or a plain `YYYY-MM-DD` date (UTC midnight).
pub fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Convert a JSON number to a decimal for exact comparison.
pub fn json_number_to_decimal(n: &serde_json::Number) -> Option<Decimal> {
    if let Some(i) = n.as_i64() {
        return Some(Decimal::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Some(Decimal::from(u));
    }
    n.as_f64()
        .and_then(Decimal::from_f64)
        .or_else(|| Decimal::from_str(&n.to_string()).ok())
}

fn condition_matches(c: &Condition, doc: &JsonValue) -> bool {
    let actual = lookup(doc, &c.field);
    if c.op == CompareOp::Ne {
        return !actual.is_some_and(|a| compare(a, &c.value) == Some(Ordering::Equal));
    }
    let Some(actual) = actual else {
        return false;
    };

    match (&c.value, c.op) {
        (FilterValue::String(expected), CompareOp::Contains) => {
            fold(actual).is_some_and(|s| s.contains(&expected.to_lowercase()))
        }
        (FilterValue::String(expected), CompareOp::StartsWith) => {
            fold(actual).is_some_and(|s| s.starts_with(&expected.to_lowercase()))
        }
        (FilterValue::String(expected), CompareOp::EndsWith) => {
            fold(actual).is_some_and(|s| s.ends_with(&expected.to_lowercase()))
        }
        (value, op) => {
            let Some(ord) = compare(actual, value) else {
                return false;
            };
            match op {
                CompareOp::Eq => ord == Ordering::Equal,
                CompareOp::Gt => ord == Ordering::Greater,
                CompareOp::Ge => ord != Ordering::Less,
                CompareOp::Lt => ord == Ordering::Less,
                CompareOp::Le => ord != Ordering::Greater,
                _ => false,
            }
        }
    }
}

fn fold(actual: &JsonValue) -> Option<String> {
    actual.as_str().map(str::to_lowercase)
}

/// Order a stored value against a typed operand; `None` when the stored value
/// does not have the operand's type.
fn compare(actual: &JsonValue, expected: &FilterValue) -> Option<Ordering> {
    match expected {
        FilterValue::String(s) => actual.as_str().map(|a| a.cmp(s.as_str())),
        FilterValue::Number(n) => match actual {
            JsonValue::Number(a) => json_number_to_decimal(a).map(|a| a.cmp(n)),
            _ => None,
        },
        FilterValue::Boolean(b) => actual.as_bool().map(|a| a.cmp(b)),
        FilterValue::DateTime(dt) => actual
            .as_str()
            .and_then(parse_datetime)
            .map(|a| a.cmp(dt)),
    }
}
