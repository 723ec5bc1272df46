//! Tests for the immutable dataset handle

use super::*;
use crate::Error;
use crate::app::services::series_aggregator::{TemperatureDataset, normalize, smooth};

#[test]
fn test_from_raw_cleans_records() {
    let records = vec![
        raw("Kenya", "1900-01-01", Some(24.0)),
        raw("Kenya", "bad-date", Some(24.0)),
        raw("India", "1900-01-01", None),
        raw("India", "1901-01-01", Some(27.0)),
    ];

    let dataset = TemperatureDataset::from_raw(&records);

    assert_eq!(dataset.record_count(), 2);
    assert!(!dataset.is_empty());
}

#[test]
fn test_from_raw_with_stats_reports_drops() {
    let records = vec![
        raw("Kenya", "1900-01-01", Some(24.0)),
        raw("Kenya", "1900-02-01", None),
    ];

    let (dataset, stats) = TemperatureDataset::from_raw_with_stats(&records);

    assert_eq!(dataset.record_count(), 1);
    assert_eq!(stats.dropped_missing_temperature, 1);
}

#[test]
fn test_countries_sorted_and_distinct() {
    let dataset = TemperatureDataset::from_clean(sample_records());

    let countries: Vec<&str> = dataset.countries().iter().map(String::as_str).collect();
    assert_eq!(countries, vec!["India", "Kenya", "United States"]);
    assert!(dataset.contains_country("Kenya"));
    assert!(!dataset.contains_country("Norway"));
}

#[test]
fn test_year_range_of_empty_dataset_fails() {
    let dataset = TemperatureDataset::from_clean(vec![]);

    assert!(matches!(dataset.year_range(), Err(Error::EmptyDataset)));
}

#[test]
fn test_single_country_series_matches_singleton_filter() {
    let dataset = TemperatureDataset::from_clean(sample_records());

    let by_name = dataset.series_for_country("Kenya", 1900, 1901);
    let by_filter = dataset.series_for(&country_set(&["Kenya"]), 1900, 1901);

    assert_eq!(by_name, by_filter);
    assert_eq!(by_name.values(), vec![24.5, 26.0]);
}

#[test]
fn test_global_series_averages_all_records() {
    let dataset = TemperatureDataset::from_clean(vec![
        clean_record("Kenya", 1900, 1, 10.0),
        clean_record("India", 1900, 1, 20.0),
        clean_record("India", 1900, 7, 30.0),
    ]);

    let global = dataset.global_series(1900, 1900);

    assert_eq!(global.values(), vec![20.0]);
}

#[test]
fn test_queries_leave_dataset_unchanged() {
    let dataset = TemperatureDataset::from_clean(sample_records());
    let before = dataset.clone();

    let _ = dataset.global_series(1900, 1901);
    let _ = dataset.rank_by_average(&country_set(&["Kenya"]), 1900, 1901);

    assert_eq!(dataset, before);
}

#[test]
fn test_full_derivation_pipeline() {
    let records = vec![
        raw("Kenya", "1900-06-01", Some(1.0)),
        raw("Kenya", "1901-06-01", Some(2.0)),
        raw("Kenya", "1902-06-01", Some(3.0)),
        raw("Kenya", "1903-06-01", None),
    ];

    let dataset = TemperatureDataset::from_raw(&records);
    let (first_year, last_year) = dataset.year_range().unwrap();
    let series = dataset.series_for_country("Kenya", first_year, last_year);
    let displayed = normalize(&smooth(&series, 3));

    assert_eq!((first_year, last_year), (1900, 1902));
    assert_eq!(displayed.years(), vec![1900, 1901, 1902]);
    assert_eq!(displayed.values(), vec![0.0, 0.5, 1.0]);
}
