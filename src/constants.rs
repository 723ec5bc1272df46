//! Application constants for climate explorer
//!
//! This module contains the input file column names, date formats, and
//! default view parameters used throughout the application.

// =============================================================================
// Input Column Names
// =============================================================================

/// Column names expected in the input CSV header row
///
/// Columns are resolved by name, not position, so files may carry the
/// columns in any order and may include additional columns.
pub mod columns {
    /// Observation date column
    pub const DATE: &str = "dt";

    /// Country name column
    pub const COUNTRY: &str = "Country";

    /// Average temperature column (degrees Celsius, may be empty)
    pub const AVERAGE_TEMPERATURE: &str = "AverageTemperature";

    /// All columns a usable input file must carry
    pub const REQUIRED: &[&str] = &[DATE, COUNTRY, AVERAGE_TEMPERATURE];
}

// =============================================================================
// Date Formats
// =============================================================================

/// Date format for plain calendar dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Datetime format some exports use for the date column
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// Series Labels
// =============================================================================

/// Label for the series aggregated over every country in the dataset
pub const GLOBAL_SERIES_LABEL: &str = "Global Average";

// =============================================================================
// Default View Parameters
// =============================================================================

/// Default display-layer parameters
pub mod defaults {
    /// Countries selected when none are specified
    pub const COUNTRIES: &[&str] = &["Kenya", "United States", "India"];

    /// Default start of the year window
    pub const YEAR_START: i32 = 1900;

    /// Default end of the year window, capped to the dataset maximum
    pub const YEAR_END_CAP: i32 = 2013;

    /// Default smoothing window width in years
    pub const SMOOTHING_WINDOW: usize = 5;

    /// Smallest accepted smoothing window (1 disables smoothing)
    pub const SMOOTHING_WINDOW_MIN: usize = 1;

    /// Largest accepted smoothing window
    pub const SMOOTHING_WINDOW_MAX: usize = 21;

    /// Whether the global average series is included by default
    pub const SHOW_GLOBAL: bool = true;
}

// =============================================================================
// Progress Reporting
// =============================================================================

/// Progress message update interval (number of processed rows)
pub const PROGRESS_UPDATE_INTERVAL: usize = 10_000;
