// src/table.rs
//! Column-major tables: the raw textual form read from CSV and the typed
//! form produced by coercion.

use chrono::NaiveDateTime;

use crate::schema::ColumnKind;

/// Header names plus all-text columns. An empty cell is stored as `None`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub columns: Vec<Vec<Option<String>>>,
}

impl RawTable {
    /// Build from a header and row-major cells. Short rows are padded with
    /// missing cells; cells past the header width are dropped.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let mut columns: Vec<Vec<Option<String>>> =
            (0..width).map(|_| Vec::with_capacity(rows.len())).collect();

        for row in rows {
            let mut cells = row.into_iter();
            for column in columns.iter_mut() {
                let cell = cells.next().filter(|c| !c.is_empty());
                column.push(cell);
            }
        }
        Self { headers, columns }
    }

    pub fn ncols(&self) -> usize { self.headers.len() }

    pub fn nrows(&self) -> usize {
        self.columns.first().map(|c| c.len()).unwrap_or(0)
    }
}

/// One typed column.
#[derive(Clone, Debug, PartialEq)]
pub enum ColumnData {
    Int(Vec<Option<i64>>),
    Float(Vec<Option<f64>>),
    DateTime(Vec<Option<NaiveDateTime>>),
    Text(Vec<Option<String>>),
    Bool(Vec<Option<bool>>),
}

impl ColumnData {
    pub fn kind(&self) -> ColumnKind {
        match self {
            ColumnData::Int(_) => ColumnKind::Int,
            ColumnData::Float(_) => ColumnKind::Float,
            ColumnData::DateTime(_) => ColumnKind::DateTime,
            ColumnData::Text(_) => ColumnKind::Text,
            ColumnData::Bool(_) => ColumnKind::Bool,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ColumnData::Int(v) => v.len(),
            ColumnData::Float(v) => v.len(),
            ColumnData::DateTime(v) => v.len(),
            ColumnData::Text(v) => v.len(),
            ColumnData::Bool(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Number of null cells.
    pub fn null_count(&self) -> usize {
        match self {
            ColumnData::Int(v) => v.iter().filter(|x| x.is_none()).count(),
            ColumnData::Float(v) => v.iter().filter(|x| x.is_none()).count(),
            ColumnData::DateTime(v) => v.iter().filter(|x| x.is_none()).count(),
            ColumnData::Text(v) => v.iter().filter(|x| x.is_none()).count(),
            ColumnData::Bool(v) => v.iter().filter(|x| x.is_none()).count(),
        }
    }

    /// Owned cell value at `row`; out of range reads as null.
    pub fn value(&self, row: usize) -> Value {
        match self {
            ColumnData::Int(v) => v.get(row).copied().flatten().map_or(Value::Null, Value::Int),
            ColumnData::Float(v) => v.get(row).copied().flatten().map_or(Value::Null, Value::Float),
            ColumnData::DateTime(v) => v.get(row).copied().flatten().map_or(Value::Null, Value::DateTime),
            ColumnData::Text(v) => v.get(row).cloned().flatten().map_or(Value::Null, Value::Text),
            ColumnData::Bool(v) => v.get(row).copied().flatten().map_or(Value::Null, Value::Bool),
        }
    }
}

/// A single typed cell.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Int(i64),
    Float(f64),
    DateTime(NaiveDateTime),
    Text(String),
    Bool(bool),
}

impl Value {
    pub fn is_null(&self) -> bool { matches!(self, Value::Null) }

    pub fn as_int(&self) -> Option<i64> {
        match self { Value::Int(v) => Some(*v), _ => None }
    }

    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self { Value::DateTime(v) => Some(*v), _ => None }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

/// Typed, column-major table. All columns have the same length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        debug_assert!(columns.windows(2).all(|w| w[0].data.len() == w[1].data.len()));
        Self { columns }
    }

    pub fn columns(&self) -> &[Column] { &self.columns }
    pub fn ncols(&self) -> usize { self.columns.len() }

    pub fn nrows(&self) -> usize {
        self.columns.first().map(|c| c.data.len()).unwrap_or(0)
    }

    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&ColumnData> {
        self.columns.iter().find(|c| c.name == name).map(|c| &c.data)
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut ColumnData> {
        self.columns.iter_mut().find(|c| c.name == name).map(|c| &mut c.data)
    }

    pub fn column_at(&self, index: usize) -> Option<&ColumnData> {
        self.columns.get(index).map(|c| &c.data)
    }

    /// Append a column, or replace the existing one of the same name.
    pub fn set_column(&mut self, name: &str, data: ColumnData) {
        debug_assert!(self.columns.is_empty() || data.len() == self.nrows());
        match self.columns.iter_mut().find(|c| c.name == name) {
            Some(col) => col.data = data,
            None => self.columns.push(Column { name: s!(name), data }),
        }
    }

    /// Text cells of a column, or `None` if it is missing or not text.
    pub fn text(&self, name: &str) -> Option<&[Option<String>]> {
        match self.column(name)? {
            ColumnData::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Owned copy of one row.
    pub fn row(&self, row: usize) -> Vec<Value> {
        self.columns.iter().map(|c| c.data.value(row)).collect()
    }
}
