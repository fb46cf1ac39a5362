use crate::db::search::request::{SortDirection, SortSpec};
use crate::Result;

/// Resolve the requested sort into a [`SortSpec`].
///
/// - blank or absent field: `id ASC`, whatever the direction says
/// - field without a direction: ascending
/// - otherwise the direction must parse as `ASC`/`DESC`
pub fn resolve_sort(sort_field: Option<&str>, sort_direction: Option<&str>) -> Result<SortSpec> {
    let Some(field) = sort_field.filter(|f| !f.trim().is_empty()) else {
        return Ok(SortSpec::default());
    };

    let direction = match sort_direction.filter(|d| !d.trim().is_empty()) {
        Some(raw) => SortDirection::parse(raw)?,
        None => SortDirection::Asc,
    };

    Ok(SortSpec::new(field, direction))
}
