use super::bind::{push_operand, push_path, push_text};
use super::BindValue;
use crate::db::search::escape::like_pattern;
use quarry_query::{CompareOp, Condition, FilterPredicate, FilterValue};

/// Render a predicate as a boolean SQL expression over `{alias}.body`.
///
/// Every condition renders to a non-null boolean, so `NOT` keeps two-valued
/// logic: a document lacking the field (or holding a value of another type)
/// fails the comparison and passes its negation.
pub(crate) fn build_predicate_sql(
    predicate: &FilterPredicate,
    bind_params: &mut Vec<BindValue>,
    alias: &str,
) -> String {
    match predicate {
        FilterPredicate::MatchAll => "TRUE".to_string(),
        FilterPredicate::Condition(c) => build_condition_sql(c, bind_params, alias),
        FilterPredicate::And(a, b) => format!(
            "({} AND {})",
            build_predicate_sql(a, bind_params, alias),
            build_predicate_sql(b, bind_params, alias)
        ),
        FilterPredicate::Or(a, b) => format!(
            "({} OR {})",
            build_predicate_sql(a, bind_params, alias),
            build_predicate_sql(b, bind_params, alias)
        ),
        FilterPredicate::Not(inner) => {
            format!("NOT ({})", build_predicate_sql(inner, bind_params, alias))
        }
    }
}

fn build_condition_sql(c: &Condition, bind_params: &mut Vec<BindValue>, alias: &str) -> String {
    let path_idx = push_path(bind_params, c.path());
    let typed = typed_value_expr(alias, path_idx, &c.value);

    match (c.op, &c.value) {
        (
            CompareOp::Contains | CompareOp::StartsWith | CompareOp::EndsWith,
            FilterValue::String(s),
        ) => {
            let pattern = match c.op {
                CompareOp::Contains => like_pattern(s, true, true),
                CompareOp::StartsWith => like_pattern(s, false, true),
                _ => like_pattern(s, true, false),
            };
            let idx = push_text(bind_params, pattern);
            format!("COALESCE(lower({typed}) LIKE ${idx} ESCAPE '\\', FALSE)")
        }
        (CompareOp::Ne, value) => {
            let operand = push_operand(bind_params, value);
            format!("NOT COALESCE({typed} = {operand}, FALSE)")
        }
        (op, value) => {
            let operand = push_operand(bind_params, value);
            format!("COALESCE({typed} {} {operand}, FALSE)", sql_operator(op))
        }
    }
}

/// Extract the field as the operand's SQL type, or NULL when the stored JSON
/// value is missing or of another type.
fn typed_value_expr(alias: &str, path_idx: usize, value: &FilterValue) -> String {
    let node = format!("{alias}.body #> ${path_idx}");
    let text = format!("{alias}.body #>> ${path_idx}");
    match value {
        FilterValue::String(_) => {
            format!("(CASE WHEN jsonb_typeof({node}) = 'string' THEN {text} END)")
        }
        FilterValue::Number(_) => {
            format!("(CASE WHEN jsonb_typeof({node}) = 'number' THEN ({text})::numeric END)")
        }
        FilterValue::Boolean(_) => {
            format!("(CASE WHEN jsonb_typeof({node}) = 'boolean' THEN ({text})::boolean END)")
        }
        FilterValue::DateTime(_) => format!(
            "(CASE WHEN jsonb_typeof({node}) = 'string' THEN quarry_try_timestamptz({text}) END)"
        ),
    }
}

fn sql_operator(op: CompareOp) -> &'static str {
    match op {
        CompareOp::Eq => "=",
        CompareOp::Ne => "<>",
        CompareOp::Gt => ">",
        CompareOp::Ge => ">=",
        CompareOp::Lt => "<",
        CompareOp::Le => "<=",
        // Rendered as LIKE patterns above.
        CompareOp::Contains | CompareOp::StartsWith | CompareOp::EndsWith => "=",
    }
}
