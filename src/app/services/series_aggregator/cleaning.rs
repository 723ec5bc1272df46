//! Record cleaning for raw temperature observations
//!
//! Cleaning turns raw records into analyzable ones: the date string must
//! parse to a calendar date and the temperature must be a present, finite
//! number. Records that fail either check are dropped without failing the
//! dataset, and the relative order of survivors matches the input.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::app::models::{CleanRecord, RawRecord};
use crate::constants::{DATETIME_FORMAT, DATE_FORMAT};

/// Statistics describing one cleaning pass
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CleaningStats {
    /// Number of raw records examined
    pub total_input: usize,

    /// Number of records that survived cleaning
    pub cleaned: usize,

    /// Records dropped because the date did not parse
    pub dropped_invalid_date: usize,

    /// Records dropped because the temperature was absent
    pub dropped_missing_temperature: usize,

    /// Records dropped because the temperature was NaN or infinite
    pub dropped_non_finite: usize,
}

impl CleaningStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_input: 0,
            cleaned: 0,
            dropped_invalid_date: 0,
            dropped_missing_temperature: 0,
            dropped_non_finite: 0,
        }
    }

    /// Total number of records dropped
    pub fn dropped(&self) -> usize {
        self.dropped_invalid_date + self.dropped_missing_temperature + self.dropped_non_finite
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "{} records in, {} cleaned, {} dropped ({} invalid date, {} missing temperature, {} non-finite)",
            self.total_input,
            self.cleaned,
            self.dropped(),
            self.dropped_invalid_date,
            self.dropped_missing_temperature,
            self.dropped_non_finite
        )
    }
}

impl Default for CleaningStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an observation date string
///
/// Accepts plain dates (`1900-01-01`) and the datetime form some exports
/// use (`1900-01-01 00:00:00`). Returns `None` when neither format matches.
pub fn parse_observation_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, DATETIME_FORMAT).map(|dt| dt.date()))
        .ok()
}

/// Clean raw records, returning the survivors in input order
pub fn clean(records: &[RawRecord]) -> Vec<CleanRecord> {
    clean_with_stats(records).0
}

/// Clean raw records and report what was dropped
///
/// A record with both an invalid date and a missing temperature is counted
/// once, under the invalid date bucket.
pub fn clean_with_stats(records: &[RawRecord]) -> (Vec<CleanRecord>, CleaningStats) {
    let mut stats = CleaningStats::new();
    stats.total_input = records.len();

    let mut cleaned = Vec::with_capacity(records.len());

    for record in records {
        let date = match parse_observation_date(&record.date) {
            Some(date) => date,
            None => {
                stats.dropped_invalid_date += 1;
                continue;
            }
        };

        let temperature = match record.average_temperature {
            Some(value) if value.is_finite() => value,
            Some(_) => {
                stats.dropped_non_finite += 1;
                continue;
            }
            None => {
                stats.dropped_missing_temperature += 1;
                continue;
            }
        };

        cleaned.push(CleanRecord::new(record.country.clone(), date, temperature));
    }

    stats.cleaned = cleaned.len();
    debug!("Cleaning finished: {}", stats.summary());

    (cleaned, stats)
}
