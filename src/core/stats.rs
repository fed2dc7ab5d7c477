//! Citation and publication-count statistics

use std::collections::BTreeMap;

/// Years averaged by the trailing moving average
pub const MOVING_AVERAGE_WINDOW: usize = 5;

/// h-index of a set of citation counts.
///
/// Largest `h` such that at least `h` values are `>= h`.
pub fn h_index<I>(citations: I) -> u32
where
    I: IntoIterator<Item = u32>,
{
    let mut counts: Vec<u32> = citations.into_iter().collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));

    let mut h = 0u32;
    // counts is descending: values above h are exactly the first
    // partition_point entries
    while (h as usize + 1) <= counts.partition_point(|&c| c > h) {
        h += 1;
    }
    h
}

/// Per-year counts with every year between the first and last present.
///
/// Missing years are filled with zero.
pub fn dense_year_counts<I>(years: I) -> BTreeMap<i32, usize>
where
    I: IntoIterator<Item = i32>,
{
    let mut counts = BTreeMap::new();
    for year in years {
        *counts.entry(year).or_insert(0) += 1;
    }

    if let (Some(&first), Some(&last)) = (counts.keys().next(), counts.keys().next_back()) {
        for year in first..=last {
            counts.entry(year).or_insert(0);
        }
    }
    counts
}

/// Trailing moving average over consecutive years.
///
/// For each year `Y` from the earliest to the latest key of `counts`, the sum
/// of counts for `Y - window + 1 ..= Y` (absent years count zero) divided by
/// `window`.
pub fn trailing_moving_average(counts: &BTreeMap<i32, usize>, window: usize) -> Vec<(i32, f64)> {
    let (Some(&first), Some(&last)) = (counts.keys().next(), counts.keys().next_back()) else {
        return Vec::new();
    };
    if window == 0 {
        return (first..=last).map(|year| (year, 0.0)).collect();
    }

    let span = i32::try_from(window - 1).unwrap_or(i32::MAX);
    (first..=last)
        .map(|year| {
            let sum: usize = counts.range(year.saturating_sub(span)..=year).map(|(_, c)| c).sum();
            (year, sum as f64 / window as f64)
        })
        .collect()
}

/// Running total of records up to and including each year, ascending
pub fn cumulative_counts<I>(years: I) -> Vec<(i32, usize)>
where
    I: IntoIterator<Item = i32>,
{
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for year in years {
        *counts.entry(year).or_insert(0) += 1;
    }

    let mut running = 0;
    counts
        .into_iter()
        .map(|(year, count)| {
            running += count;
            (year, running)
        })
        .collect()
}
