// src/address.rs
//! Synthesizes the `Address` column from house number, direction, street
//! name and street type. Zip is never part of the address.

use crate::config::consts::NULL_PLACEHOLDERS;
use crate::config::options::ZipPolicy;
use crate::schema::{DIR, HOUSE_NR, ST_TYPE, STREET_NAME, ZIP};
use crate::table::{ColumnData, Table, Value};

pub const ADDRESS: &str = "Address";

/// Address parts, in output order.
pub const COMPONENTS: [&str; 4] = [HOUSE_NR, DIR, STREET_NAME, ST_TYPE];

/// Placeholder text or a missing value → empty string.
pub fn clean_component(raw: Option<&str>) -> &str {
    match raw {
        Some(s) if !NULL_PLACEHOLDERS.contains(&s.trim()) => s,
        _ => "",
    }
}

/// Join already-cleaned parts with single spaces. Whitespace inside a part
/// collapses too, and empty parts leave no gap.
pub fn join_address<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render any typed cell as address text.
fn cell_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Text(s) => Some(s),
        Value::Int(v) => Some(v.to_string()),
        Value::Float(v) => Some(v.to_string()),
        Value::Bool(v) => Some(v.to_string()),
        Value::DateTime(v) => Some(v.to_string()),
    }
}

/// Add (or replace) the `Address` column and apply `zip_policy` to `Zip`.
/// A missing component column counts as empty for every row.
pub fn build_address(table: &mut Table, zip_policy: ZipPolicy) {
    let nrows = table.nrows();
    let parts: Vec<Option<&ColumnData>> = COMPONENTS.iter().map(|c| table.column(c)).collect();

    let addresses: Vec<Option<String>> = (0..nrows)
        .map(|row| {
            let cells: Vec<Option<String>> = parts
                .iter()
                .map(|col| col.and_then(|c| cell_text(c.value(row))))
                .collect();
            Some(join_address(cells.iter().map(|c| clean_component(c.as_deref()))))
        })
        .collect();

    table.set_column(ADDRESS, ColumnData::Text(addresses));

    if zip_policy == ZipPolicy::ZeroFill {
        if let Some(ColumnData::Int(zips)) = table.column_mut(ZIP) {
            for z in zips.iter_mut() {
                z.get_or_insert(0);
            }
        }
    }
}
