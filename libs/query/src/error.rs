//! Error types for query parsing and translation

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// A query expression that could not be parsed or does not fit the entity schema.
///
/// Every variant names the offending token so callers can report it back to the client.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Unexpected token '{token}' at position {position}, expected {expected}")]
    UnexpectedToken {
        token: String,
        position: usize,
        expected: String,
    },

    #[error("Unexpected end of query, expected {expected}")]
    UnexpectedEnd { expected: String },

    #[error("Unterminated string literal starting at position {position}")]
    UnterminatedString { position: usize },

    #[error("Invalid escape sequence '\\{escape}' at position {position}")]
    InvalidEscape { escape: char, position: usize },

    #[error("Expression nested too deeply at position {position} (limit {limit})")]
    NestingTooDeep { position: usize, limit: usize },

    #[error("Too many conditions at position {position} (limit {limit})")]
    TooManyConditions {
        token: String,
        position: usize,
        limit: usize,
    },

    #[error("Unknown field '{field}'")]
    UnknownField { field: String },

    #[error("Operator '{operator}' is not supported for {field_type} field '{field}'")]
    UnsupportedOperator {
        operator: String,
        field: String,
        field_type: String,
    },

    #[error("Invalid {field_type} value '{value}' for field '{field}'")]
    InvalidValue {
        value: String,
        field: String,
        field_type: String,
    },
}

impl Error {
    /// The token that caused the failure (`"end of input"` when the query ran out).
    pub fn token(&self) -> &str {
        match self {
            Error::UnexpectedToken { token, .. } => token,
            Error::UnexpectedEnd { .. } => "end of input",
            Error::UnterminatedString { .. } => "'",
            Error::InvalidEscape { .. } => "\\",
            Error::NestingTooDeep { .. } => "(",
            Error::TooManyConditions { token, .. } => token,
            Error::UnknownField { field } => field,
            Error::UnsupportedOperator { operator, .. } => operator,
            Error::InvalidValue { value, .. } => value,
        }
    }
}
