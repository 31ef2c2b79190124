// src/record.rs
//! Typed foreclosure records and the record set handed to the dashboard.

use std::sync::Arc;

use chrono::{Datelike, Month, NaiveDateTime};

use crate::address::ADDRESS;
use crate::schema::{self, col};
use crate::table::{ColumnData, Table, Value};

pub const ACTION_YEAR: &str = "Action_Year";

/// One foreclosure case.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    pub id: Option<i64>,
    pub house_nr: Option<String>,
    pub dir: Option<String>,
    pub street_name: Option<String>,
    pub st_type: Option<String>,
    pub zip: Option<i64>,
    pub neighborhood: Option<String>,
    pub case_style: Option<String>,
    pub action_filed: Option<NaiveDateTime>,
    pub sale_date: Option<NaiveDateTime>,
    pub purchaser: Option<String>,

    /// Always present; empty when every component is missing.
    pub address: String,
    /// Calendar year of `action_filed`.
    pub action_year: Option<i32>,

    /// Remaining source columns, aligned with `RecordSet::extra_headers`.
    pub extras: Vec<Value>,
}

fn month_name(dt: Option<NaiveDateTime>) -> Option<&'static str> {
    let m = u8::try_from(dt?.month()).ok()?;
    Month::try_from(m).ok().map(|m| m.name())
}

impl Record {
    /// Full English month name of the filing date.
    pub fn filing_month(&self) -> Option<&'static str> {
        month_name(self.action_filed)
    }

    /// Full English month name of the sale date.
    pub fn sale_month(&self) -> Option<&'static str> {
        month_name(self.sale_date)
    }
}

/// Ordered, immutable collection of records sharing the canonical schema.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordSet {
    extra_headers: Arc<[String]>,
    records: Vec<Record>,
}

/// Positions that become typed `Record` fields rather than extras.
const TYPED: [usize; 11] = [
    col::ID, col::HOUSE_NR, col::DIR, col::STREET_NAME, col::ZIP, col::ST_TYPE,
    col::NEIGHBORHOOD, col::CASE_STYLE, col::ACTION_FILED, col::SALE_DATE, col::PURCHASER,
];

impl RecordSet {
    pub fn new(extra_headers: Arc<[String]>, records: Vec<Record>) -> Self {
        Self { extra_headers, records }
    }

    /// Records with no extra columns. Handy for tests and synthetic data.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { extra_headers: Arc::from(Vec::new()), records }
    }

    /// Read a fully prepared table (schema layout, then `Address` and
    /// `Action_Year`) into records.
    pub fn from_table(table: &Table) -> Self {
        let width = schema::ColumnSchema::foreclosures().len();
        let extra_ix: Vec<usize> = (0..table.ncols())
            .filter(|i| !(TYPED.contains(i) || (*i >= width && is_derived(table, *i))))
            .collect();
        let extra_headers: Arc<[String]> = extra_ix
            .iter()
            .map(|&i| table.columns()[i].name.clone())
            .collect::<Vec<_>>()
            .into();

        let at = |i: usize, row: usize| table.column_at(i).map_or(Value::Null, |c| c.value(row));
        let named = |name: &str, row: usize| table.column(name).map_or(Value::Null, |c| c.value(row));
        let text = |v: Value| match v {
            Value::Text(s) => Some(s),
            _ => None,
        };

        let records = (0..table.nrows())
            .map(|row| Record {
                id: at(col::ID, row).as_int(),
                house_nr: text(at(col::HOUSE_NR, row)),
                dir: text(at(col::DIR, row)),
                street_name: text(at(col::STREET_NAME, row)),
                st_type: text(at(col::ST_TYPE, row)),
                zip: at(col::ZIP, row).as_int(),
                neighborhood: text(at(col::NEIGHBORHOOD, row)),
                case_style: text(at(col::CASE_STYLE, row)),
                action_filed: at(col::ACTION_FILED, row).as_datetime(),
                sale_date: at(col::SALE_DATE, row).as_datetime(),
                purchaser: text(at(col::PURCHASER, row)),
                address: text(named(ADDRESS, row)).unwrap_or_default(),
                action_year: named(ACTION_YEAR, row).as_int().and_then(|y| i32::try_from(y).ok()),
                extras: extra_ix.iter().map(|&i| at(i, row)).collect(),
            })
            .collect();

        Self { extra_headers, records }
    }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn records(&self) -> &[Record] { &self.records }
    pub fn iter(&self) -> std::slice::Iter<'_, Record> { self.records.iter() }
    pub fn extra_headers(&self) -> &[String] { &self.extra_headers }

    /// Owned copy of the records matching `keep`, same extra headers.
    pub fn retain_copy<F>(&self, keep: F) -> Self
    where
        F: Fn(&Record) -> bool,
    {
        Self {
            extra_headers: Arc::clone(&self.extra_headers),
            records: self.records.iter().filter(|r| keep(r)).cloned().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn is_derived(table: &Table, i: usize) -> bool {
    matches!(table.columns()[i].name.as_str(), ADDRESS | ACTION_YEAR)
}

/// Add `Action_Year` from `Action_Filed`: null exactly when the date is null.
pub fn derive_filing_year(table: &mut Table) {
    let years: Vec<Option<i64>> = match table.column(schema::ACTION_FILED) {
        Some(ColumnData::DateTime(dates)) => dates.iter().map(|d| d.map(|d| i64::from(d.year()))).collect(),
        _ => vec![None; table.nrows()],
    };
    table.set_column(ACTION_YEAR, ColumnData::Int(years));
}
