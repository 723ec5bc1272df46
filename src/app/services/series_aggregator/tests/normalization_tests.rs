//! Tests for baseline normalization

use super::*;
use crate::app::services::series_aggregator::{normalize, smooth};

#[test]
fn test_first_value_becomes_zero() {
    let series = series_of(&[(1900, 10.0), (1901, 12.0), (1902, 9.0)]);

    let normalized = normalize(&series);

    assert_eq!(normalized.values(), vec![0.0, 2.0, -1.0]);
}

#[test]
fn test_years_preserved() {
    let series = series_of(&[(1900, 10.0), (1905, 12.0)]);

    let normalized = normalize(&series);

    assert_eq!(normalized.years(), vec![1900, 1905]);
}

#[test]
fn test_single_point_normalizes_to_zero() {
    let series = series_of(&[(1900, 24.5)]);

    let normalized = normalize(&series);

    assert_eq!(normalized.values(), vec![0.0]);
}

#[test]
fn test_empty_series_unchanged() {
    let series = series_of(&[]);

    assert!(normalize(&series).is_empty());
}

#[test]
fn test_normalize_after_smoothing_rebaselines() {
    let series = series_of(&[(1900, 1.0), (1901, 2.0), (1902, 3.0)]);

    // Smoothing moves the first value to 1.5; normalization zeroes that
    let normalized = normalize(&smooth(&series, 3));

    assert_eq!(normalized.values(), vec![0.0, 0.5, 1.0]);
}

#[test]
fn test_input_series_unchanged() {
    let series = series_of(&[(1900, 10.0), (1901, 12.0)]);
    let original = series.clone();

    let _ = normalize(&series);

    assert_eq!(series, original);
}
