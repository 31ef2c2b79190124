// src/error.rs
//! Error types for loading and coercing the foreclosure dataset.
//!
//! Value-level parse failures never show up here; they become nulls inside
//! the coerced columns. Only structural problems are errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::schema::ColumnKind;

pub type Result<T, E = LoadError> = std::result::Result<T, E>;

/// A column could not be converted to its declared type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoercionError {
    /// The direct-cast path rejected a value.
    #[error("Error converting column {index} ({name}) to {kind}: row {row}: cannot cast {value:?}")]
    ColumnCoercion {
        index: usize,
        name: String,
        kind: ColumnKind,
        row: usize,
        value: String,
    },

    /// A named type assignment refers to a column the table does not have.
    #[error("Error converting column {name}: no such column")]
    UnknownColumn { name: String },

    /// A positional type assignment is longer than the table is wide.
    #[error("Error converting column {index}: only {width} columns present")]
    ColumnOutOfRange { index: usize, width: usize },

    /// A textual type tag did not name any supported kind.
    #[error("Unsupported column type {tag:?}")]
    UnsupportedType { tag: String },
}

impl CoercionError {
    /// Column index when the failure is attributable to one.
    pub fn column_index(&self) -> Option<usize> {
        match self {
            CoercionError::ColumnCoercion { index, .. }
            | CoercionError::ColumnOutOfRange { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Resolved column name when known.
    pub fn column_name(&self) -> Option<&str> {
        match self {
            CoercionError::ColumnCoercion { name, .. }
            | CoercionError::UnknownColumn { name } => Some(name),
            _ => None,
        }
    }
}

/// The source could not be turned into a record set.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} has no header row", .0.display())]
    Empty(PathBuf),

    #[error("Expected {expected} columns, found {found}")]
    ColumnCount { expected: usize, found: usize },

    #[error("Column {index} should be {expected:?}, found {found:?}")]
    ColumnName {
        index: usize,
        expected: &'static str,
        found: String,
    },

    #[error(transparent)]
    Coercion(#[from] CoercionError),
}
