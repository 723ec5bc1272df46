//! Climate Explorer Library
//!
//! A Rust library for exploring country-level average temperature time series
//! loaded from CSV data.
//!
//! This library provides tools for:
//! - Loading temperature observations from CSV files with header-based column resolution
//! - Cleaning raw records by date parsing and missing-value removal
//! - Aggregating per-year mean temperature series for country selections and year windows
//! - Centered moving-average smoothing and baseline normalization of series
//! - Ranking countries by average temperature over a year window
//! - Load and cleaning statistics for reporting

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod dataset_loader;
        pub mod series_aggregator;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{CleanRecord, CountryAverage, NamedSeries, RawRecord, Series, SeriesPoint};
pub use app::services::series_aggregator::TemperatureDataset;
pub use config::ViewDefaults;

/// Result type alias for climate explorer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for dataset loading and series derivation
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Required column missing from the CSV header row
    #[error("missing column '{column}' in file '{file}'")]
    MissingColumn { file: String, column: String },

    /// No cleaned records are available to analyze
    #[error("no usable data: the dataset contains no cleaned records")]
    EmptyDataset,

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a missing column error
    pub fn missing_column(file: impl Into<String>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            file: file.into(),
            column: column.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
