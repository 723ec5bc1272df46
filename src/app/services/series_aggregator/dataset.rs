//! Immutable dataset handle over cleaned temperature records
//!
//! [`TemperatureDataset`] owns the cleaned records and the set of country
//! names that occur in them. All queries borrow the handle immutably and
//! return fresh values; nothing an operation produces can change the
//! records another query sees.

use std::collections::BTreeSet;

use super::{aggregation, cleaning, ranking};
use crate::Result;
use crate::app::models::{CleanRecord, CountryAverage, RawRecord, Series};

/// Cleaned temperature records with a precomputed country index
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureDataset {
    records: Vec<CleanRecord>,
    countries: BTreeSet<String>,
}

impl TemperatureDataset {
    /// Build a dataset by cleaning raw records
    pub fn from_raw(records: &[RawRecord]) -> Self {
        Self::from_clean(cleaning::clean(records))
    }

    /// Build a dataset by cleaning raw records, keeping the cleaning stats
    pub fn from_raw_with_stats(records: &[RawRecord]) -> (Self, cleaning::CleaningStats) {
        let (cleaned, stats) = cleaning::clean_with_stats(records);
        (Self::from_clean(cleaned), stats)
    }

    /// Build a dataset from records that are already cleaned
    pub fn from_clean(records: Vec<CleanRecord>) -> Self {
        let countries = records
            .iter()
            .map(|record| record.country.clone())
            .collect();

        Self { records, countries }
    }

    /// Cleaned records in their original order
    pub fn records(&self) -> &[CleanRecord] {
        &self.records
    }

    /// Distinct country names, sorted
    pub fn countries(&self) -> &BTreeSet<String> {
        &self.countries
    }

    /// Check whether any record belongs to the named country
    pub fn contains_country(&self, name: &str) -> bool {
        self.countries.contains(name)
    }

    /// Number of cleaned records
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Check whether the dataset has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Smallest and largest observation year
    pub fn year_range(&self) -> Result<(i32, i32)> {
        aggregation::year_range(&self.records)
    }

    /// Per-year mean series over a set of countries
    pub fn series_for(
        &self,
        countries: &BTreeSet<String>,
        start_year: i32,
        end_year: i32,
    ) -> Series {
        aggregation::aggregate_by_year(&self.records, countries, start_year, end_year)
    }

    /// Per-year mean series for a single country
    pub fn series_for_country(&self, country: &str, start_year: i32, end_year: i32) -> Series {
        let filter = BTreeSet::from([country.to_string()]);
        aggregation::aggregate_by_year(&self.records, &filter, start_year, end_year)
    }

    /// Per-year mean series over every country in the dataset
    pub fn global_series(&self, start_year: i32, end_year: i32) -> Series {
        aggregation::aggregate_by_year(&self.records, &self.countries, start_year, end_year)
    }

    /// Rank countries by record-level mean temperature
    pub fn rank_by_average(
        &self,
        countries: &BTreeSet<String>,
        start_year: i32,
        end_year: i32,
    ) -> Vec<CountryAverage> {
        ranking::rank_by_average(&self.records, countries, start_year, end_year)
    }
}
