//! Data models for temperature series exploration
//!
//! This module contains the core data structures for representing raw and
//! cleaned temperature observations and the per-year series derived from
//! them. Records are fixed-shape typed entities; all null handling is
//! explicit in the types.

use crate::constants::GLOBAL_SERIES_LABEL;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

// =============================================================================
// Observation Records
// =============================================================================

/// Raw temperature observation as read from the input file
///
/// The date is kept unparsed and the temperature may be absent; both are
/// resolved during cleaning. Raw records are the source of truth and are
/// never mutated after loading.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    /// Country the observation belongs to
    pub country: String,

    /// Observation date as it appeared in the file
    pub date: String,

    /// Average temperature in degrees Celsius, absent when the field was empty
    pub average_temperature: Option<f64>,
}

impl RawRecord {
    /// Create a raw record
    pub fn new(
        country: impl Into<String>,
        date: impl Into<String>,
        average_temperature: Option<f64>,
    ) -> Self {
        Self {
            country: country.into(),
            date: date.into(),
            average_temperature,
        }
    }
}

/// Observation that survived cleaning
///
/// The date parsed to a valid calendar date and the temperature is present.
/// The year is derived from the date at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanRecord {
    /// Country the observation belongs to
    pub country: String,

    /// Parsed observation date
    pub date: NaiveDate,

    /// Calendar year of the observation date
    pub year: i32,

    /// Average temperature in degrees Celsius
    pub temperature: f64,
}

impl CleanRecord {
    /// Create a cleaned record, deriving the year from the date
    pub fn new(country: String, date: NaiveDate, temperature: f64) -> Self {
        Self {
            year: date.year(),
            country,
            date,
            temperature,
        }
    }
}

// =============================================================================
// Series Structures
// =============================================================================

/// A single aggregated point: one value for one year
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    /// Calendar year the value belongs to
    pub year: i32,

    /// Aggregated temperature value
    pub value: f64,
}

impl SeriesPoint {
    /// Create a series point
    pub fn new(year: i32, value: f64) -> Self {
        Self { year, value }
    }
}

/// Ordered sequence of yearly points for one label
///
/// Points are strictly ascending by year with at most one point per year.
/// Years with no data produce no point, so the sequence may have gaps.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Series {
    points: Vec<SeriesPoint>,
}

impl Series {
    /// Create a series from points already ordered ascending by year
    pub fn new(points: Vec<SeriesPoint>) -> Self {
        debug_assert!(
            points.windows(2).all(|pair| pair[0].year < pair[1].year),
            "series points must be strictly ascending by year"
        );
        Self { points }
    }

    /// Points in ascending year order
    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    /// Number of points in the series
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check whether the series has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First point (lowest year), if any
    pub fn first(&self) -> Option<&SeriesPoint> {
        self.points.first()
    }

    /// Iterate over points in ascending year order
    pub fn iter(&self) -> std::slice::Iter<'_, SeriesPoint> {
        self.points.iter()
    }

    /// Years of all points, in order
    pub fn years(&self) -> Vec<i32> {
        self.points.iter().map(|p| p.year).collect()
    }

    /// Values of all points, in order
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }
}

/// A labelled series for display
///
/// The label is a country name or the global average sentinel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedSeries {
    /// Country name or the global average label
    pub label: String,

    /// The aggregated series for that label
    pub series: Series,
}

impl NamedSeries {
    /// Create a named series for a country
    pub fn country(label: impl Into<String>, series: Series) -> Self {
        Self {
            label: label.into(),
            series,
        }
    }

    /// Create the global average series
    pub fn global(series: Series) -> Self {
        Self {
            label: GLOBAL_SERIES_LABEL.to_string(),
            series,
        }
    }

    /// Check whether this is the global average series
    pub fn is_global(&self) -> bool {
        self.label == GLOBAL_SERIES_LABEL
    }
}

/// One row of a country ranking: the country and its average temperature
/// over the queried window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryAverage {
    /// Country name
    pub country: String,

    /// Arithmetic mean temperature over all matching records
    pub average: f64,
}

impl CountryAverage {
    /// Create a ranking row
    pub fn new(country: impl Into<String>, average: f64) -> Self {
        Self {
            country: country.into(),
            average,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod record_tests {
        use super::*;

        #[test]
        fn test_clean_record_derives_year() {
            let date = NaiveDate::from_ymd_opt(1975, 6, 15).unwrap();
            let record = CleanRecord::new("Kenya".to_string(), date, 21.5);

            assert_eq!(record.year, 1975);
            assert_eq!(record.country, "Kenya");
            assert_eq!(record.temperature, 21.5);
        }

        #[test]
        fn test_raw_record_missing_temperature() {
            let record = RawRecord::new("Kenya", "1975-06-15", None);
            assert!(record.average_temperature.is_none());
        }
    }

    mod series_tests {
        use super::*;

        #[test]
        fn test_series_accessors() {
            let series = Series::new(vec![
                SeriesPoint::new(1900, 18.0),
                SeriesPoint::new(1902, 19.0),
            ]);

            assert_eq!(series.len(), 2);
            assert!(!series.is_empty());
            assert_eq!(series.years(), vec![1900, 1902]);
            assert_eq!(series.values(), vec![18.0, 19.0]);
            assert_eq!(series.first().unwrap().year, 1900);
        }

        #[test]
        fn test_empty_series() {
            let series = Series::default();
            assert!(series.is_empty());
            assert_eq!(series.len(), 0);
            assert!(series.first().is_none());
        }

        #[test]
        fn test_named_series_global_label() {
            let global = NamedSeries::global(Series::default());
            assert!(global.is_global());
            assert_eq!(global.label, GLOBAL_SERIES_LABEL);

            let country = NamedSeries::country("Kenya", Series::default());
            assert!(!country.is_global());
        }
    }
}
