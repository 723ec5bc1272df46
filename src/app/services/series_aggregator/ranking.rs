//! Country ranking by average temperature
//!
//! Ranking compares countries by the mean of their individual records over
//! a year window, not by the mean of their yearly series. Years with many
//! observations therefore weigh more, matching the record-level averages
//! used elsewhere.

use std::collections::{BTreeMap, BTreeSet};

use crate::app::models::{CleanRecord, CountryAverage};

/// Rank countries by record-level mean temperature over a year window
///
/// Only countries in `countries` are considered, and a country with no
/// records inside `start_year..=end_year` is omitted rather than reported
/// as zero. Results are sorted coldest first; ties are broken by country
/// name.
pub fn rank_by_average(
    records: &[CleanRecord],
    countries: &BTreeSet<String>,
    start_year: i32,
    end_year: i32,
) -> Vec<CountryAverage> {
    let mut totals: BTreeMap<&str, (f64, usize)> = BTreeMap::new();

    for record in records {
        if record.year < start_year || record.year > end_year {
            continue;
        }
        if !countries.contains(&record.country) {
            continue;
        }

        let entry = totals.entry(record.country.as_str()).or_insert((0.0, 0));
        entry.0 += record.temperature;
        entry.1 += 1;
    }

    let mut ranking: Vec<CountryAverage> = totals
        .into_iter()
        .map(|(country, (sum, count))| CountryAverage::new(country, sum / count as f64))
        .collect();

    ranking.sort_by(|a, b| {
        a.average
            .total_cmp(&b.average)
            .then_with(|| a.country.cmp(&b.country))
    });

    ranking
}
