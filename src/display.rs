// src/display.rs
//! Detail-table projection: seven preformatted string columns per record,
//! plus CSV/TSV rendering of those rows for copy/export.

use chrono::NaiveDateTime;

use crate::config::consts::DISPLAY_DATE_FMT;
use crate::csv::{write_row, Delim};
use crate::record::{Record, RecordSet};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayRow {
    pub address: String,
    pub zip: String,
    pub neighborhood: String,
    pub action_filed: String,
    pub case_style: String,
    pub sale_date: String,
    pub purchaser: String,
}

impl DisplayRow {
    pub const HEADERS: [&'static str; 7] = [
        "Address", "Zip", "Neighborhood", "Action_Filed", "Case_Style", "Sale_Date", "Purchaser",
    ];

    /// Cells in `HEADERS` order.
    pub fn cells(&self) -> [&str; 7] {
        [
            &self.address,
            &self.zip,
            &self.neighborhood,
            &self.action_filed,
            &self.case_style,
            &self.sale_date,
            &self.purchaser,
        ]
    }
}

/// `MM/DD/YYYY`, or empty for a missing date.
pub fn format_date(dt: Option<NaiveDateTime>) -> String {
    dt.map(|d| d.format(DISPLAY_DATE_FMT).to_string()).unwrap_or_default()
}

impl From<&Record> for DisplayRow {
    fn from(r: &Record) -> Self {
        Self {
            address: r.address.clone(),
            // Missing zips show as 0
            zip: r.zip.unwrap_or(0).to_string(),
            neighborhood: r.neighborhood.clone().unwrap_or_default(),
            action_filed: format_date(r.action_filed),
            case_style: r.case_style.clone().unwrap_or_default(),
            sale_date: format_date(r.sale_date),
            purchaser: r.purchaser.clone().unwrap_or_default(),
        }
    }
}

pub fn for_display(records: &RecordSet) -> Vec<DisplayRow> {
    records.iter().map(DisplayRow::from).collect()
}

/// Render display rows as delimited text, optionally with a header line.
pub fn display_to_string(rows: &[DisplayRow], include_headers: bool, delim: Delim) -> String {
    let sep = delim.ch();
    let mut buf: Vec<u8> = Vec::new();

    // Writes into a Vec cannot fail.
    if include_headers {
        let _ = write_row(&mut buf, &DisplayRow::HEADERS, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, &r.cells(), sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
