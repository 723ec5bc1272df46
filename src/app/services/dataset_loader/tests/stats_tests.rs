//! Tests for loading statistics functionality

use crate::app::services::dataset_loader::LoadStats;

#[test]
fn test_load_stats_calculation() {
    let stats = LoadStats {
        rows_read: 100,
        rows_loaded: 95,
        rows_malformed: 5,
        errors: vec!["row 7: bad".to_string(), "row 9: bad".to_string()],
    };

    assert_eq!(stats.success_rate(), 95.0);
    assert!(stats.is_successful());

    let poor_stats = LoadStats {
        rows_read: 100,
        rows_loaded: 80,
        rows_malformed: 20,
        errors: vec![],
    };

    assert_eq!(poor_stats.success_rate(), 80.0);
    assert!(!poor_stats.is_successful());
}

#[test]
fn test_load_stats_empty() {
    let empty_stats = LoadStats::new();

    assert_eq!(empty_stats.rows_read, 0);
    assert_eq!(empty_stats.rows_loaded, 0);
    assert_eq!(empty_stats.rows_malformed, 0);
    assert!(empty_stats.errors.is_empty());
    assert_eq!(empty_stats.success_rate(), 0.0);
    assert!(!empty_stats.is_successful());
}

#[test]
fn test_load_stats_summary() {
    let stats = LoadStats {
        rows_read: 4,
        rows_loaded: 3,
        rows_malformed: 1,
        errors: vec![],
    };

    assert_eq!(stats.summary(), "4 rows read, 3 loaded, 1 malformed (75.0% success)");
}
