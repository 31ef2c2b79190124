// src/filter.rs
//! Neighborhood/year selection over a record set.
//!
//! Empty selections select nothing. Defaulting to "everything" is the
//! caller's job (see `config::state::Selection::all_of`).

use std::collections::{BTreeSet, HashSet};

use crate::record::RecordSet;

/// Values offered by the sidebar filters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Distinct, non-null, ascending.
    pub neighborhoods: Vec<String>,
    /// Distinct, non-null, most recent first.
    pub years: Vec<i32>,
}

pub fn filter_options(records: &RecordSet) -> FilterOptions {
    let neighborhoods: BTreeSet<&str> = records.iter().filter_map(|r| r.neighborhood.as_deref()).collect();
    let years: BTreeSet<i32> = records.iter().filter_map(|r| r.action_year).collect();

    FilterOptions {
        neighborhoods: neighborhoods.into_iter().map(String::from).collect(),
        years: years.into_iter().rev().collect(),
    }
}

/// Records whose neighborhood is in `neighborhoods` and whose filing year
/// is in `years`. Records with a null in either field never match. The
/// result is an independent copy.
pub fn filter<'a, N, Y>(records: &RecordSet, neighborhoods: N, years: Y) -> RecordSet
where
    N: IntoIterator<Item = &'a str>,
    Y: IntoIterator<Item = i32>,
{
    let hoods: HashSet<&str> = neighborhoods.into_iter().collect();
    let years: HashSet<i32> = years.into_iter().collect();

    if hoods.is_empty() || years.is_empty() {
        return records.retain_copy(|_| false);
    }

    records.retain_copy(|r| {
        r.neighborhood.as_deref().is_some_and(|n| hoods.contains(n))
            && r.action_year.is_some_and(|y| years.contains(&y))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    fn rec(hood: Option<&str>, year: Option<i32>) -> Record {
        Record { neighborhood: hood.map(String::from), action_year: year, ..Record::default() }
    }

    #[test]
    fn options_skip_nulls_and_sort() {
        let set = RecordSet::from_records(vec![
            rec(Some("Portland"), Some(2019)),
            rec(Some("Beechmont"), Some(2021)),
            rec(None, Some(2020)),
            rec(Some("Portland"), None),
        ]);
        let opts = filter_options(&set);
        assert_eq!(opts.neighborhoods, vec!["Beechmont", "Portland"]);
        assert_eq!(opts.years, vec![2021, 2020, 2019]);
    }

    #[test]
    fn nulls_never_match() {
        let set = RecordSet::from_records(vec![rec(None, Some(2020)), rec(Some("A"), None)]);
        let out = filter(&set, ["A"], [2020]);
        assert!(out.is_empty());
    }

    #[test]
    fn empty_selection_is_empty_result() {
        let set = RecordSet::from_records(vec![rec(Some("A"), Some(2020))]);
        assert!(filter(&set, Vec::<&str>::new(), [2020]).is_empty());
        assert!(filter(&set, ["A"], Vec::<i32>::new()).is_empty());
    }
}
