//! Test utilities for series aggregator testing
//!
//! This module provides fixture builders shared across the aggregator test
//! modules. Temperatures in fixtures are chosen so expected means are exact
//! in floating point.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::app::models::{CleanRecord, RawRecord, Series, SeriesPoint};

mod dataset_tests;
mod normalization_tests;
mod ranking_tests;

/// Helper to create a raw record
pub fn raw(country: &str, date: &str, temperature: Option<f64>) -> RawRecord {
    RawRecord::new(country, date, temperature)
}

/// Helper to create a cleaned record on the first day of a month
pub fn clean_record(country: &str, year: i32, month: u32, temperature: f64) -> CleanRecord {
    let date = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    CleanRecord::new(country.to_string(), date, temperature)
}

/// Helper to create a series from (year, value) pairs
pub fn series_of(points: &[(i32, f64)]) -> Series {
    Series::new(
        points
            .iter()
            .map(|&(year, value)| SeriesPoint::new(year, value))
            .collect(),
    )
}

/// Helper to create a country filter set
pub fn country_set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

/// Small multi-country dataset used across aggregation and ranking tests
///
/// Yearly means: Kenya 1900 = 24.5, 1901 = 26.0; United States 1900 = 2.0,
/// 1901 = 4.0; India 1900 = 27.0. Record-level means over both years:
/// Kenya 25.0, United States 3.0, India 27.0.
pub fn sample_records() -> Vec<CleanRecord> {
    vec![
        clean_record("Kenya", 1900, 1, 24.0),
        clean_record("Kenya", 1900, 2, 25.0),
        clean_record("Kenya", 1901, 6, 26.0),
        clean_record("United States", 1900, 1, 2.0),
        clean_record("United States", 1901, 6, 4.0),
        clean_record("India", 1900, 1, 27.0),
    ]
}
