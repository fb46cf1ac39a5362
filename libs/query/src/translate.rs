//! Query translation: query text + entity schema → [`FilterPredicate`]

use crate::ast::{CompareOp, Comparison, Expr};
use crate::error::{Error, Result};
use crate::parser;
use crate::predicate::{parse_datetime, Condition, FilterPredicate, FilterValue};
use crate::schema::{EntitySchema, FieldType};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Translate an optional query expression into a filter predicate.
///
/// Blank or absent input yields [`FilterPredicate::MatchAll`]. Every field
/// reference is checked against `schema` and every value is converted to the
/// field's type; nothing from the query text reaches a store unvalidated.
pub fn translate(query: Option<&str>, schema: &EntitySchema) -> Result<FilterPredicate> {
    let Some(query) = query.map(str::trim).filter(|q| !q.is_empty()) else {
        return Ok(FilterPredicate::MatchAll);
    };
    let expr = parser::parse(query)?;
    bind(expr, schema)
}

fn bind(expr: Expr, schema: &EntitySchema) -> Result<FilterPredicate> {
    Ok(match expr {
        Expr::And(a, b) => {
            FilterPredicate::And(Box::new(bind(*a, schema)?), Box::new(bind(*b, schema)?))
        }
        Expr::Or(a, b) => {
            FilterPredicate::Or(Box::new(bind(*a, schema)?), Box::new(bind(*b, schema)?))
        }
        Expr::Not(inner) => FilterPredicate::Not(Box::new(bind(*inner, schema)?)),
        Expr::Comparison(c) => FilterPredicate::Condition(bind_comparison(c, schema)?),
    })
}

fn bind_comparison(c: Comparison, schema: &EntitySchema) -> Result<Condition> {
    let Some(field_type) = schema.field_type(&c.field) else {
        return Err(Error::UnknownField { field: c.field });
    };

    let supported = match field_type {
        FieldType::String => !c.op.is_relational(),
        FieldType::Number | FieldType::DateTime => !c.op.is_textual(),
        FieldType::Boolean => matches!(c.op, CompareOp::Eq | CompareOp::Ne),
    };
    if !supported {
        return Err(Error::UnsupportedOperator {
            operator: c.op_token,
            field: c.field,
            field_type: field_type.to_string(),
        });
    }

    let raw = c.value.text();
    let value = match field_type {
        FieldType::String => Some(FilterValue::String(raw.to_string())),
        FieldType::Number => Decimal::from_str(raw).ok().map(FilterValue::Number),
        FieldType::Boolean => match raw.to_ascii_lowercase().as_str() {
            "true" => Some(FilterValue::Boolean(true)),
            "false" => Some(FilterValue::Boolean(false)),
            _ => None,
        },
        FieldType::DateTime => parse_datetime(raw).map(FilterValue::DateTime),
    };
    let Some(value) = value else {
        return Err(Error::InvalidValue {
            value: raw.to_string(),
            field: c.field,
            field_type: field_type.to_string(),
        });
    };

    Ok(Condition {
        field: c.field,
        op: c.op,
        value,
    })
}
