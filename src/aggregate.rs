// src/aggregate.rs
use std::collections::BTreeMap;

use crate::record::RecordSet;

/// One bar of the neighborhood chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighborhoodCount {
    pub neighborhood: String,
    pub count: usize,
}

/// Records per non-null neighborhood, largest first; equal counts in name order.
pub fn counts_by_neighborhood(records: &RecordSet) -> Vec<NeighborhoodCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for hood in records.iter().filter_map(|r| r.neighborhood.as_deref()) {
        *counts.entry(hood).or_insert(0) += 1;
    }

    let mut out: Vec<NeighborhoodCount> = counts
        .into_iter()
        .map(|(n, count)| NeighborhoodCount { neighborhood: s!(n), count })
        .collect();
    // Stable sort on name-ordered input keeps ties alphabetical.
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out
}
