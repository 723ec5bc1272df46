//! Test utilities for dataset loader testing
//!
//! This module provides common fixture content and helper functions used
//! across the loader test modules.

use std::io::Write;
use tempfile::NamedTempFile;

mod stats_tests;

/// Helper to create CSV content in the real-world column order
pub fn sample_csv() -> String {
    r#"dt,AverageTemperature,AverageTemperatureUncertainty,Country
1900-01-01,24.396,0.293,Kenya
1900-02-01,25.014,0.329,Kenya
1900-03-01,,0.653,Kenya
1900-01-01,-0.073,0.243,United States
1900-02-01,1.768,0.281,United States"#
        .to_string()
}

/// Helper to create a temporary file with given content
pub fn write_temp_csv(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", content).unwrap();
    temp_file
}
