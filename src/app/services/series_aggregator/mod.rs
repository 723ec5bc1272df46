//! Series derivation pipeline for temperature records
//!
//! This module turns raw observations into the yearly series the CLI
//! displays. Every function is pure: inputs are borrowed immutably and
//! results are newly built values.
//!
//! ## Architecture
//!
//! The pipeline is organized into logical components:
//! - [`cleaning`] - Raw record validation and date parsing
//! - [`aggregation`] - Year range and per-year mean series
//! - [`smoothing`] - Centered moving-average smoothing
//! - [`normalization`] - First-value baseline normalization
//! - [`ranking`] - Country ranking by average temperature
//! - [`dataset`] - Immutable [`TemperatureDataset`] handle tying it together
//!
//! ## Usage
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use climate_explorer::app::models::RawRecord;
//! use climate_explorer::app::services::series_aggregator::{smooth, TemperatureDataset};
//!
//! # fn example() -> climate_explorer::Result<()> {
//! let records = vec![
//!     RawRecord::new("Kenya", "1901-06-01", Some(24.4)),
//!     RawRecord::new("Kenya", "1902-06-01", Some(24.9)),
//! ];
//!
//! let dataset = TemperatureDataset::from_raw(&records);
//! let (first_year, last_year) = dataset.year_range()?;
//! let series = dataset.series_for_country("Kenya", first_year, last_year);
//! let smoothed = smooth(&series, 5);
//!
//! assert_eq!(smoothed.len(), series.len());
//! # Ok(())
//! # }
//! ```

pub mod aggregation;
pub mod cleaning;
pub mod dataset;
pub mod normalization;
pub mod ranking;
pub mod smoothing;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use aggregation::{aggregate_by_year, year_range};
pub use cleaning::{CleaningStats, clean, clean_with_stats, parse_observation_date};
pub use dataset::TemperatureDataset;
pub use normalization::normalize;
pub use ranking::rank_by_average;
pub use smoothing::smooth;
