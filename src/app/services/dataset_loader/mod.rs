//! CSV dataset loader for country temperature data
//!
//! This module reads CSV files with `dt`, `Country`, and
//! `AverageTemperature` columns into raw observation records. Columns are
//! resolved by header name, so column order does not matter and extra
//! columns are ignored.
//!
//! ## Architecture
//!
//! The loader is organized into logical components:
//! - [`loader`] - File and reader ingestion with row-level error recovery
//! - [`columns`] - Header analysis and required-column resolution
//! - [`stats`] - Loading statistics and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use climate_explorer::app::services::dataset_loader;
//!
//! # fn example() -> climate_explorer::Result<()> {
//! let result = dataset_loader::load_csv_file(std::path::Path::new("data.csv"))?;
//!
//! println!(
//!     "Loaded {} records from {} rows",
//!     result.stats.rows_loaded, result.stats.rows_read
//! );
//! # Ok(())
//! # }
//! ```

pub mod columns;
pub mod loader;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use columns::ColumnLayout;
pub use loader::{load_csv_file, load_csv_file_with_progress, load_csv_reader};
pub use stats::{LoadResult, LoadStats};
