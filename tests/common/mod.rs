// tests/common/mod.rs
//
// Shared fixtures: a small foreclosure export in the real 18-column layout.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use foreclosures::csv::write_row;
use foreclosures::record::Record;

pub const HEADER: [&str; 18] = [
    "", "House_Nr", "Dir", "Street_Name", "Zip", "L_S", "St_Type", "CD",
    "Neighborhood", "Case_Style", "Census_Tract", "Action_Filed", "Case_",
    "Post_Dir", "Sale_Date", "Sale_Price", "Purchaser", "ObjectId",
];

pub const ROWS: [[&str; 18]; 4] = [
    ["0", "123", "<NA>", "Main", "40202", "1", "St", "4", "Downtown", "Bank v. Doe, John", "49",
     "2020/01/05 00:00:00+00", "20CI001", "", "2020/09/30 00:00:00+00", "150000", "First Bank", "1"],
    ["1", "45", "N", "  Fourth ", "", "2", "", "4", "Downtown", "Bank v. Roe", "49",
     "2020-06-01", "20CI002", "", "", "", "", "2"],
    ["2", "9", "nan", "Oak", "40205", "x", "Ave", "6", "Highlands", "Trust v. Poe", "12",
     "03/03/2021", "21CI003", "", "2021/10/01 00:00:00+00", "99000.0", "First Bank", "3"],
    ["3", "", "", "", "", "", "", "", "", "", "",
     "not a date", "", "", "", "", "", "4"],
];

pub fn csv_text(header: &[&str], rows: &[[&str; 18]]) -> String {
    let mut buf = Vec::new();
    write_row(&mut buf, header, ',').unwrap();
    for r in rows {
        write_row(&mut buf, r, ',').unwrap();
    }
    String::from_utf8(buf).unwrap()
}

pub fn write_fixture(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, csv_text(&HEADER, &ROWS)).unwrap();
    path
}

pub fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(y, m, d).and_then(|d| d.and_hms_opt(0, 0, 0))
}

pub fn rec(hood: Option<&str>, filed: Option<NaiveDateTime>) -> Record {
    use chrono::Datelike;
    Record {
        neighborhood: hood.map(String::from),
        action_filed: filed,
        action_year: filed.map(|d| d.year()),
        ..Record::default()
    }
}
