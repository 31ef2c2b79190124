// src/coerce.rs
//! Raw text → typed columns.
//!
//! Int, float, date-time and text conversions never fail: a value that does
//! not parse becomes null. Bool is a strict cast and the only per-value
//! failure. Structural problems (bad column reference, unknown type tag) are
//! reported before any column is touched.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::CoercionError;
use crate::schema::{ColumnKind, ColumnTypes};
use crate::table::{Column, ColumnData, RawTable, Table};

/// Convert every column of `raw` to the kind `types` assigns it. Columns
/// without an assignment stay text. Either the whole table converts or the
/// first failing column is reported.
pub fn coerce(raw: RawTable, types: &ColumnTypes) -> Result<Table, CoercionError> {
    let RawTable { headers, columns } = raw;

    let mut kinds: Vec<ColumnKind> = vec![ColumnKind::Text; headers.len()];
    for (index, kind) in types.resolve(&headers)? {
        kinds[index] = kind;
    }

    let mut out = Vec::with_capacity(headers.len());
    for (index, ((name, cells), kind)) in headers.into_iter().zip(columns).zip(kinds).enumerate() {
        let data = coerce_column(cells, kind).map_err(|(row, value)| CoercionError::ColumnCoercion {
            index,
            name: name.clone(),
            kind,
            row,
            value,
        })?;
        out.push(Column { name, data });
    }

    Ok(Table::new(out))
}

/// Err carries the offending row and value.
fn coerce_column(cells: Vec<Option<String>>, kind: ColumnKind) -> Result<ColumnData, (usize, String)> {
    let data = match kind {
        ColumnKind::Int => ColumnData::Int(cells.iter().map(|c| c.as_deref().and_then(parse_int)).collect()),
        ColumnKind::Float => ColumnData::Float(cells.iter().map(|c| c.as_deref().and_then(parse_float)).collect()),
        ColumnKind::DateTime => {
            ColumnData::DateTime(cells.iter().map(|c| c.as_deref().and_then(parse_datetime)).collect())
        }
        ColumnKind::Text => ColumnData::Text(cells),
        ColumnKind::Bool => {
            let mut out = Vec::with_capacity(cells.len());
            for (row, cell) in cells.into_iter().enumerate() {
                match cell {
                    None => out.push(None),
                    Some(v) => match cast_bool(&v) {
                        Some(b) => out.push(Some(b)),
                        None => return Err((row, v)),
                    },
                }
            }
            ColumnData::Bool(out)
        }
    };
    Ok(data)
}

/// Integer parse that also takes integral floats (`"12.0"`, `"1e3"`).
pub fn parse_int(s: &str) -> Option<i64> {
    let t = s.trim();
    if let Ok(v) = t.parse::<i64>() {
        return Some(v);
    }
    let f = parse_float(t)?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// Float parse; NaN and infinities read as null.
pub fn parse_float(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S%.f",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%m/%d/%y", "%Y%m%d"];

/// Permissive date-time parse. Offsets are dropped, never applied: the wall
/// clock reading is kept as-is.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(t) {
        return Some(dt.naive_local());
    }

    // ArcGIS exports write "2019/01/07 00:00:00+00"
    let t = strip_offset(t);

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(t, fmt) {
            return Some(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(t, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Drop a trailing `Z`, `+HH`, `+HHMM` or `+HH:MM` after a time of day.
fn strip_offset(t: &str) -> &str {
    if let Some(rest) = t.strip_suffix('Z') {
        return rest;
    }
    let Some(colon) = t.rfind(':') else { return t };
    // Search for the sign only after the time's first colon so date dashes are left alone.
    let time_start = t[..colon].rfind(' ').or_else(|| t[..colon].rfind('T')).unwrap_or(0);
    match t[time_start..].rfind(['+', '-']) {
        Some(rel) => {
            let at = time_start + rel;
            let tail = &t[at + 1..];
            if !tail.is_empty() && tail.chars().all(|c| c.is_ascii_digit() || c == ':') && tail.len() <= 5 {
                &t[..at]
            } else {
                t
            }
        }
        None => t,
    }
}

fn cast_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" | "y" => Some(true),
        "false" | "f" | "0" | "no" | "n" => Some(false),
        _ => None,
    }
}
