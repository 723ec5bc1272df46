//! Tests for country ranking by average temperature

use super::*;
use crate::app::services::series_aggregator::rank_by_average;
use std::collections::BTreeSet;

#[test]
fn test_ranking_is_coldest_first() {
    let records = sample_records();
    let filter = country_set(&["Kenya", "United States", "India"]);

    let ranking = rank_by_average(&records, &filter, 1900, 1901);

    let countries: Vec<&str> = ranking.iter().map(|row| row.country.as_str()).collect();
    assert_eq!(countries, vec!["United States", "Kenya", "India"]);
    assert_eq!(ranking[0].average, 3.0);
    assert_eq!(ranking[1].average, 25.0);
    assert_eq!(ranking[2].average, 27.0);
}

#[test]
fn test_average_is_record_level_not_yearly() {
    let records = vec![
        clean_record("Kenya", 2000, 1, 0.0),
        clean_record("Kenya", 2000, 7, 0.0),
        clean_record("Kenya", 2001, 1, 3.0),
    ];

    let ranking = rank_by_average(&records, &country_set(&["Kenya"]), 2000, 2001);

    // Mean over three records, not over the two yearly means
    assert_eq!(ranking[0].average, 1.0);
}

#[test]
fn test_countries_without_records_omitted() {
    let records = sample_records();
    let filter = country_set(&["Kenya", "Norway"]);

    let ranking = rank_by_average(&records, &filter, 1900, 1901);

    assert_eq!(ranking.len(), 1);
    assert_eq!(ranking[0].country, "Kenya");
}

#[test]
fn test_window_restricts_which_records_count() {
    let records = vec![
        clean_record("Kenya", 1900, 1, 10.0),
        clean_record("Kenya", 1950, 1, 30.0),
    ];

    let full = rank_by_average(&records, &country_set(&["Kenya"]), 1900, 1950);
    let early = rank_by_average(&records, &country_set(&["Kenya"]), 1900, 1910);

    assert_eq!(full[0].average, 20.0);
    assert_eq!(early[0].average, 10.0);
}

#[test]
fn test_empty_filter_yields_empty_ranking() {
    let records = sample_records();

    let ranking = rank_by_average(&records, &BTreeSet::new(), 1900, 1901);

    assert!(ranking.is_empty());
}

#[test]
fn test_ties_broken_by_country_name() {
    let records = vec![
        clean_record("Uganda", 1900, 1, 24.0),
        clean_record("Tanzania", 1900, 1, 24.0),
    ];

    let ranking = rank_by_average(&records, &country_set(&["Uganda", "Tanzania"]), 1900, 1900);

    assert_eq!(ranking[0].country, "Tanzania");
    assert_eq!(ranking[1].country, "Uganda");
}

#[test]
fn test_no_matching_window_yields_empty_ranking() {
    let records = sample_records();
    let filter = country_set(&["Kenya"]);

    let ranking = rank_by_average(&records, &filter, 1990, 2000);

    assert!(ranking.is_empty());
}
