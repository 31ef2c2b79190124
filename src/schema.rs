// src/schema.rs
//! Column typing for the foreclosure export.
//!
//! `ColumnKind` is the target representation of one column, `ColumnTypes`
//! assigns kinds to a table (by name or by position) and `ColumnSchema` is
//! the fixed layout of the source file, checked against its header.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{CoercionError, LoadError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// Nullable integer; unparsable → null.
    Int,
    /// Nullable float; unparsable → null.
    Float,
    /// Naive date-time; unparsable → null.
    DateTime,
    /// Nullable string; never fails.
    Text,
    /// Strict cast; an unrecognised value fails the whole column.
    Bool,
}

impl ColumnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Int => "int",
            ColumnKind::Float => "float",
            ColumnKind::DateTime => "datetime",
            ColumnKind::Text => "str",
            ColumnKind::Bool => "bool",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnKind {
    type Err = CoercionError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "int" | "int64" | "integer" => Ok(ColumnKind::Int),
            "float" | "float64" | "double" => Ok(ColumnKind::Float),
            "datetime" | "datetime64[ns]" | "date" => Ok(ColumnKind::DateTime),
            "str" | "string" | "text" => Ok(ColumnKind::Text),
            "bool" | "boolean" => Ok(ColumnKind::Bool),
            _ => Err(CoercionError::UnsupportedType { tag: s!(tag) }),
        }
    }
}

/// Target kinds for a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColumnTypes {
    /// Column name → kind. Columns not listed stay text.
    Named(BTreeMap<String, ColumnKind>),
    /// Kind `i` applies to the `i`-th column of the table being converted.
    Positional(Vec<ColumnKind>),
}

impl ColumnTypes {
    /// Build a positional assignment from textual tags (`"int"`, `"str"`, ...).
    pub fn from_tags<S: AsRef<str>>(tags: &[S]) -> Result<Self, CoercionError> {
        let kinds = tags
            .iter()
            .map(|t| t.as_ref().parse::<ColumnKind>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ColumnTypes::Positional(kinds))
    }

    /// Resolve against concrete headers into `(index, kind)` pairs, in
    /// assignment order.
    pub fn resolve(&self, headers: &[String]) -> Result<Vec<(usize, ColumnKind)>, CoercionError> {
        match self {
            ColumnTypes::Positional(kinds) => kinds
                .iter()
                .enumerate()
                .map(|(i, &k)| {
                    if i < headers.len() {
                        Ok((i, k))
                    } else {
                        Err(CoercionError::ColumnOutOfRange { index: i, width: headers.len() })
                    }
                })
                .collect(),
            ColumnTypes::Named(map) => map
                .iter()
                .map(|(name, &k)| {
                    headers
                        .iter()
                        .position(|h| h == name)
                        .map(|i| (i, k))
                        .ok_or_else(|| CoercionError::UnknownColumn { name: name.clone() })
                })
                .collect(),
        }
    }
}

/// One column of the source layout. `name` is `None` for positions whose
/// header is not relied on downstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: Option<&'static str>,
    pub kind: ColumnKind,
}

const fn named(name: &'static str, kind: ColumnKind) -> ColumnSpec {
    ColumnSpec { name: Some(name), kind }
}

const fn unnamed(kind: ColumnKind) -> ColumnSpec {
    ColumnSpec { name: None, kind }
}

pub const HOUSE_NR: &str = "House_Nr";
pub const DIR: &str = "Dir";
pub const STREET_NAME: &str = "Street_Name";
pub const ST_TYPE: &str = "St_Type";
pub const ZIP: &str = "Zip";
pub const NEIGHBORHOOD: &str = "Neighborhood";
pub const CASE_STYLE: &str = "Case_Style";
pub const ACTION_FILED: &str = "Action_Filed";
pub const SALE_DATE: &str = "Sale_Date";
pub const PURCHASER: &str = "Purchaser";

/// Column positions in the foreclosure export.
pub mod col {
    pub const ID: usize = 0;
    pub const HOUSE_NR: usize = 1;
    pub const DIR: usize = 2;
    pub const STREET_NAME: usize = 3;
    pub const ZIP: usize = 4;
    pub const ST_TYPE: usize = 6;
    pub const NEIGHBORHOOD: usize = 8;
    pub const CASE_STYLE: usize = 9;
    pub const ACTION_FILED: usize = 11;
    pub const SALE_DATE: usize = 14;
    pub const PURCHASER: usize = 16;
}

use self::ColumnKind::{DateTime, Int, Text};

static FORECLOSURES: [ColumnSpec; 18] = [
    unnamed(Int),
    named(HOUSE_NR, Text),
    named(DIR, Text),
    named(STREET_NAME, Text),
    named(ZIP, Int),
    unnamed(Int),
    named(ST_TYPE, Text),
    unnamed(Int),
    named(NEIGHBORHOOD, Text),
    named(CASE_STYLE, Text),
    unnamed(Int),
    named(ACTION_FILED, DateTime),
    unnamed(Text),
    unnamed(Text),
    named(SALE_DATE, DateTime),
    unnamed(Int),
    named(PURCHASER, Text),
    unnamed(Int),
];

/// Fixed, ordered layout of a source file.
#[derive(Clone, Copy, Debug)]
pub struct ColumnSchema {
    columns: &'static [ColumnSpec],
}

impl ColumnSchema {
    pub const fn new(columns: &'static [ColumnSpec]) -> Self {
        Self { columns }
    }

    /// The 18-column Louisville Metro foreclosure export.
    pub fn foreclosures() -> Self {
        Self::new(&FORECLOSURES)
    }

    pub fn columns(&self) -> &'static [ColumnSpec] { self.columns }
    pub fn len(&self) -> usize { self.columns.len() }
    pub fn is_empty(&self) -> bool { self.columns.is_empty() }

    /// Positional type assignment for `coerce`.
    pub fn types(&self) -> ColumnTypes {
        ColumnTypes::Positional(self.columns.iter().map(|c| c.kind).collect())
    }

    /// Header must have exactly our width, and every named position must
    /// carry that name (surrounding whitespace ignored).
    pub fn validate(&self, headers: &[String]) -> Result<(), LoadError> {
        if headers.len() != self.columns.len() {
            return Err(LoadError::ColumnCount {
                expected: self.columns.len(),
                found: headers.len(),
            });
        }
        for (index, (spec, found)) in self.columns.iter().zip(headers).enumerate() {
            if let Some(expected) = spec.name {
                if found.trim() != expected {
                    return Err(LoadError::ColumnName { index, expected, found: found.clone() });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_row() -> Vec<String> {
        [
            "", "House_Nr", "Dir", "Street_Name", "Zip", "L_S", "St_Type", "CD",
            "Neighborhood", "Case_Style", "Census_Tract", "Action_Filed", "Case_",
            "Post_Dir", "Sale_Date", "Sale_Price", "Purchaser", "ObjectId",
        ]
        .iter()
        .map(|s| s!(*s))
        .collect()
    }

    #[test]
    fn named_columns_line_up_with_positions() {
        let cols = ColumnSchema::foreclosures().columns();
        assert_eq!(cols[col::HOUSE_NR].name, Some(HOUSE_NR));
        assert_eq!(cols[col::ZIP].name, Some(ZIP));
        assert_eq!(cols[col::ST_TYPE].name, Some(ST_TYPE));
        assert_eq!(cols[col::ACTION_FILED].kind, ColumnKind::DateTime);
        assert_eq!(cols[col::SALE_DATE].kind, ColumnKind::DateTime);
        assert_eq!(cols[col::PURCHASER].name, Some(PURCHASER));
        assert_eq!(cols[col::ID].name, None);
    }

    #[test]
    fn validate_accepts_any_header_at_unnamed_positions() {
        let schema = ColumnSchema::foreclosures();
        let mut headers = header_row();
        assert!(schema.validate(&headers).is_ok());
        headers[5] = s!("whatever");
        assert!(schema.validate(&headers).is_ok());
    }

    #[test]
    fn validate_rejects_renamed_or_short_header() {
        let schema = ColumnSchema::foreclosures();
        let mut headers = header_row();
        headers[8] = s!("Hood");
        match schema.validate(&headers) {
            Err(LoadError::ColumnName { index, expected, .. }) => {
                assert_eq!(index, 8);
                assert_eq!(expected, NEIGHBORHOOD);
            }
            other => panic!("unexpected: {other:?}"),
        }

        headers.truncate(17);
        assert!(matches!(
            schema.validate(&headers),
            Err(LoadError::ColumnCount { expected: 18, found: 17 })
        ));
    }

    #[test]
    fn tags_parse_and_reject_unknown() {
        let types = ColumnTypes::from_tags(&["int", "str", "datetime64[ns]"]).unwrap();
        assert_eq!(
            types,
            ColumnTypes::Positional(vec![ColumnKind::Int, ColumnKind::Text, ColumnKind::DateTime])
        );
        assert_eq!(
            ColumnTypes::from_tags(&["int", "complex"]),
            Err(CoercionError::UnsupportedType { tag: s!("complex") })
        );
    }

    #[test]
    fn resolve_positional_and_named() {
        let headers = vec![s!("a"), s!("b")];
        let pos = ColumnTypes::Positional(vec![ColumnKind::Int, ColumnKind::Text, ColumnKind::Int]);
        assert_eq!(
            pos.resolve(&headers),
            Err(CoercionError::ColumnOutOfRange { index: 2, width: 2 })
        );

        let mut map = BTreeMap::new();
        map.insert(s!("b"), ColumnKind::Float);
        assert_eq!(ColumnTypes::Named(map.clone()).resolve(&headers), Ok(vec![(1, ColumnKind::Float)]));
        map.insert(s!("c"), ColumnKind::Int);
        assert_eq!(
            ColumnTypes::Named(map).resolve(&headers),
            Err(CoercionError::UnknownColumn { name: s!("c") })
        );
    }
}
