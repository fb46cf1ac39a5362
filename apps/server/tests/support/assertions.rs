use anyhow::Context as _;
use axum::http::StatusCode;
use serde_json::Value;

pub fn assert_status(actual: StatusCode, expected: StatusCode, context: &str) {
    assert_eq!(actual, expected, "{context}: unexpected status");
}

/// Values of `field` across `page.content`, in order.
pub fn content_field<'a>(page: &'a Value, field: &str) -> anyhow::Result<Vec<&'a str>> {
    page.get("content")
        .and_then(Value::as_array)
        .context("page.content is array")?
        .iter()
        .map(|item| {
            item.get(field)
                .and_then(Value::as_str)
                .with_context(|| format!("content item has string {field}"))
        })
        .collect()
}

pub fn total_elements(page: &Value) -> anyhow::Result<u64> {
    page.get("totalElements")
        .and_then(Value::as_u64)
        .context("page.totalElements is a number")
}

pub fn assert_error_kind(body: &Value, kind: &str) {
    assert_eq!(
        body.get("error").and_then(Value::as_str),
        Some(kind),
        "unexpected error body: {body}"
    );
}
