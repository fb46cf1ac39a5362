use super::BindValue;
use quarry_query::FilterValue;

/// Push a bind value and return its 1-based placeholder index.
pub(super) fn push_text(bind_params: &mut Vec<BindValue>, value: String) -> usize {
    bind_params.push(BindValue::Text(value));
    bind_params.len()
}

/// Bind field path segments as a `text[]` for the `#>` / `#>>` operators.
pub(super) fn push_path(bind_params: &mut Vec<BindValue>, segments: Vec<String>) -> usize {
    bind_params.push(BindValue::TextArray(segments));
    bind_params.len()
}

/// Bind a typed operand as text and return the placeholder with its SQL cast.
pub(super) fn push_operand(bind_params: &mut Vec<BindValue>, value: &FilterValue) -> String {
    match value {
        FilterValue::String(s) => format!("${}", push_text(bind_params, s.clone())),
        FilterValue::Number(n) => format!("${}::numeric", push_text(bind_params, n.to_string())),
        FilterValue::Boolean(b) => format!("${}::boolean", push_text(bind_params, b.to_string())),
        FilterValue::DateTime(dt) => {
            format!("${}::timestamptz", push_text(bind_params, dt.to_rfc3339()))
        }
    }
}
