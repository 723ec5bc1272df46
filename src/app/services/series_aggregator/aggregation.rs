//! Per-year aggregation of cleaned temperature records
//!
//! Aggregation reduces record-level observations to one mean value per
//! calendar year for a chosen set of countries and an inclusive year
//! window. Years with no matching records produce no point, so derived
//! series may contain gaps.

use std::collections::{BTreeMap, BTreeSet};

use crate::app::models::{CleanRecord, Series, SeriesPoint};
use crate::{Error, Result};

/// Smallest and largest observation year in the records
///
/// Fails with [`Error::EmptyDataset`] when there are no records to
/// inspect.
pub fn year_range(records: &[CleanRecord]) -> Result<(i32, i32)> {
    let mut years = records.iter().map(|record| record.year);

    let first = years.next().ok_or(Error::EmptyDataset)?;
    let range = years.fold((first, first), |(lowest, highest), year| {
        (lowest.min(year), highest.max(year))
    });

    Ok(range)
}

/// Build a per-year mean series for a set of countries
///
/// A record contributes when its country is in `countries` and its year
/// lies in `start_year..=end_year`. All matching records of a year are
/// averaged together regardless of country, so multi-country selections
/// weight by record count. An empty country set yields an empty series.
pub fn aggregate_by_year(
    records: &[CleanRecord],
    countries: &BTreeSet<String>,
    start_year: i32,
    end_year: i32,
) -> Series {
    let mut totals: BTreeMap<i32, (f64, usize)> = BTreeMap::new();

    for record in records {
        if record.year < start_year || record.year > end_year {
            continue;
        }
        if !countries.contains(&record.country) {
            continue;
        }

        let entry = totals.entry(record.year).or_insert((0.0, 0));
        entry.0 += record.temperature;
        entry.1 += 1;
    }

    // BTreeMap iteration is ascending by year
    let points = totals
        .into_iter()
        .map(|(year, (sum, count))| SeriesPoint::new(year, sum / count as f64))
        .collect();

    Series::new(points)
}
