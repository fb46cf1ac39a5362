//! Schema-bound search query language.
//!
//! ```text
//! query string ──Lexer──▶ tokens ──Parser──▶ Expr ──translate(schema)──▶ FilterPredicate
//! ```
//!
//! The grammar is small on purpose: comparisons (`=`, `!=`, `<`, `<=`, `>`, `>=`
//! and the word forms `eq`, `ne`, `lt`, `le`, `gt`, `ge`, `contains`, `startswith`,
//! `endswith`), `and`/`or`, `not(...)` and parentheses. Field names are checked
//! against an [`EntitySchema`] and values are converted to the field's type, so
//! the resulting predicate can be handed to any store without further checks.
//!
//! ```
//! use quarry_query::{translate, EntitySchema, FieldType};
//!
//! let schema = EntitySchema::new("users").field("name", FieldType::String);
//! let filter = translate(Some("name contains 'a'"), &schema).unwrap();
//! assert!(filter.matches(&serde_json::json!({ "name": "Carol" })));
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod predicate;
pub mod schema;
pub mod token;
pub mod translate;

pub use ast::CompareOp;
pub use error::{Error, Result};
pub use predicate::{Condition, FilterPredicate, FilterValue};
pub use schema::{EntitySchema, FieldType, SchemaRegistry};
pub use translate::translate;
