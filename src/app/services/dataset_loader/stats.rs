//! Loading statistics and result structures for dataset ingestion
//!
//! This module provides types for tracking how many rows were read, how many
//! produced usable raw records, and what went wrong with the rest.

use crate::app::models::RawRecord;

/// Loading result with raw records and basic statistics
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// Raw records extracted from the file, in file order
    pub records: Vec<RawRecord>,

    /// Basic loading statistics
    pub stats: LoadStats,
}

/// Simple loading statistics
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LoadStats {
    /// Total number of data rows encountered
    pub rows_read: usize,

    /// Number of rows converted into raw records
    pub rows_loaded: usize,

    /// Number of rows skipped because they could not be read
    pub rows_malformed: usize,

    /// List of row-level errors for debugging
    pub errors: Vec<String>,
}

impl LoadStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            rows_read: 0,
            rows_loaded: 0,
            rows_malformed: 0,
            errors: Vec::new(),
        }
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.rows_read == 0 {
            0.0
        } else {
            (self.rows_loaded as f64 / self.rows_read as f64) * 100.0
        }
    }

    /// Check if loading was mostly successful (>90% success rate)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > 90.0
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "{} rows read, {} loaded, {} malformed ({:.1}% success)",
            self.rows_read,
            self.rows_loaded,
            self.rows_malformed,
            self.success_rate()
        )
    }
}

impl Default for LoadStats {
    fn default() -> Self {
        Self::new()
    }
}
