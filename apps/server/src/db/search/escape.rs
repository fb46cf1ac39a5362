//! Escaping for SQL `LIKE` patterns.
//!
//! Search values are bound as parameters, but `%`, `_` and `\` still carry meaning
//! inside a `LIKE` pattern and must be escaped with `\` (the clause uses `ESCAPE '\'`).

pub(crate) fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Build a lower-cased `LIKE` pattern for a textual operator.
pub(crate) fn like_pattern(value: &str, leading_wildcard: bool, trailing_wildcard: bool) -> String {
    let mut pattern = String::new();
    if leading_wildcard {
        pattern.push('%');
    }
    pattern.push_str(&escape_like(&value.to_lowercase()));
    if trailing_wildcard {
        pattern.push('%');
    }
    pattern
}
