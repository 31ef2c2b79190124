// src/metrics.rs
//! Summary cards: record count and the most common zip, filing month, sale
//! month and purchaser.
//!
//! Ties go to the smallest value in the column's natural order: numeric for
//! zip codes, byte-wise for month names and purchaser names (an April/March
//! tie reports April). A column with no non-null value reports `"N/A"`.

use std::collections::BTreeMap;

use crate::config::consts::NOT_AVAILABLE;
use crate::record::RecordSet;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metrics {
    pub count: usize,
    pub modal_zip: String,
    pub modal_filing_month: String,
    pub modal_sale_month: String,
    pub modal_purchaser: String,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            count: 0,
            modal_zip: s!(NOT_AVAILABLE),
            modal_filing_month: s!(NOT_AVAILABLE),
            modal_sale_month: s!(NOT_AVAILABLE),
            modal_purchaser: s!(NOT_AVAILABLE),
        }
    }
}

/// Most frequent value; ties resolve to the smallest. `None` for no input.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }

    let mut best: Option<(T, usize)> = None;
    for (v, n) in counts {
        // Ascending iteration + strict `>` keeps the first (smallest) of equals.
        if best.as_ref().is_none_or(|(_, m)| n > *m) {
            best = Some((v, n));
        }
    }
    best.map(|(v, _)| v)
}

fn or_na(value: Option<String>) -> String {
    value.unwrap_or_else(|| s!(NOT_AVAILABLE))
}

pub fn metrics(records: &RecordSet) -> Metrics {
    let zip = mode(records.iter().filter_map(|r| r.zip));
    let filed = mode(records.iter().filter_map(|r| r.filing_month()));
    let sold = mode(records.iter().filter_map(|r| r.sale_month()));
    let purchaser = mode(records.iter().filter_map(|r| r.purchaser.as_deref()));

    Metrics {
        count: records.len(),
        modal_zip: or_na(zip.map(|z| z.to_string())),
        modal_filing_month: or_na(filed.map(String::from)),
        modal_sale_month: or_na(sold.map(String::from)),
        modal_purchaser: or_na(purchaser.map(String::from)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    #[test]
    fn mode_breaks_ties_low() {
        assert_eq!(mode([3, 1, 3, 1, 2]), Some(1));
        assert_eq!(mode(["b", "a", "b"]), Some("b"));
        assert_eq!(mode(Vec::<i64>::new()), None);
    }

    fn on(y: i32, m: u32, d: u32) -> Option<chrono::NaiveDateTime> {
        chrono::NaiveDate::from_ymd_opt(y, m, d).and_then(|d| d.and_hms_opt(0, 0, 0))
    }

    #[test]
    fn month_ties_go_to_the_first_name_alphabetically() {
        let set = RecordSet::from_records(vec![
            Record { action_filed: on(2020, 3, 1), sale_date: on(2020, 1, 9), ..Record::default() },
            Record { action_filed: on(2020, 4, 1), sale_date: on(2020, 2, 9), ..Record::default() },
        ]);
        let m = metrics(&set);
        assert_eq!(m.modal_filing_month, "April");
        assert_eq!(m.modal_sale_month, "February");
    }

    #[test]
    fn purchaser_ties_are_byte_wise() {
        let buyer = |p: &str| Record { purchaser: Some(s!(p)), ..Record::default() };
        let set = RecordSet::from_records(vec![buyer("bank"), buyer("Trust"), buyer("bank"), buyer("Trust")]);
        assert_eq!(metrics(&set).modal_purchaser, "Trust");
    }

    #[test]
    fn default_is_the_empty_answer() {
        assert_eq!(metrics(&RecordSet::default()), Metrics::default());
    }
}
