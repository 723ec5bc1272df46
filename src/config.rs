//! Configuration management and validation.
//!
//! Provides the default view parameters the display layer applies when the
//! user does not specify them: country selection, year window, smoothing
//! window, and the global-average toggle.

use crate::constants::defaults;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Default parameters for trend and ranking views
///
/// These defaults belong to the display layer; the series operations
/// themselves always receive explicit parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewDefaults {
    /// Countries plotted when no selection is given
    pub countries: Vec<String>,

    /// Start of the default year window
    pub year_start: i32,

    /// End of the default year window, capped to the dataset maximum
    pub year_end_cap: i32,

    /// Smoothing window width in years (1 disables smoothing)
    pub smoothing_window: usize,

    /// Include the all-country global average series
    pub show_global: bool,
}

impl Default for ViewDefaults {
    fn default() -> Self {
        Self {
            countries: defaults::COUNTRIES.iter().map(|s| s.to_string()).collect(),
            year_start: defaults::YEAR_START,
            year_end_cap: defaults::YEAR_END_CAP,
            smoothing_window: defaults::SMOOTHING_WINDOW,
            show_global: defaults::SHOW_GLOBAL,
        }
    }
}

impl ViewDefaults {
    /// Load view defaults from a JSON configuration file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = serde_json::from_str(&content).map_err(|e| {
            Error::configuration(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        debug!("Loaded view defaults from {}", path.display());
        Ok(config)
    }

    /// Create defaults with a custom country selection
    pub fn with_countries(mut self, countries: Vec<String>) -> Self {
        self.countries = countries;
        self
    }

    /// Create defaults with a custom year window
    pub fn with_year_window(mut self, year_start: i32, year_end_cap: i32) -> Self {
        self.year_start = year_start;
        self.year_end_cap = year_end_cap;
        self
    }

    /// Create defaults with a custom smoothing window
    pub fn with_smoothing_window(mut self, window: usize) -> Self {
        self.smoothing_window = window;
        self
    }

    /// Create defaults without the global average series
    pub fn without_global(mut self) -> Self {
        self.show_global = false;
        self
    }

    /// Validate the defaults for consistency
    pub fn validate(&self) -> Result<()> {
        if self.smoothing_window < defaults::SMOOTHING_WINDOW_MIN
            || self.smoothing_window > defaults::SMOOTHING_WINDOW_MAX
        {
            return Err(Error::configuration(format!(
                "Smoothing window must be between {} and {}, got {}",
                defaults::SMOOTHING_WINDOW_MIN,
                defaults::SMOOTHING_WINDOW_MAX,
                self.smoothing_window
            )));
        }

        if self.year_start > self.year_end_cap {
            return Err(Error::configuration(format!(
                "Default year start {} is after year end cap {}",
                self.year_start, self.year_end_cap
            )));
        }

        Ok(())
    }

    /// Resolve the default year window for a dataset's actual year range
    ///
    /// Both bounds are clamped into the dataset's range, so the window is
    /// always valid for `data_min <= data_max`.
    pub fn default_window(&self, data_min: i32, data_max: i32) -> (i32, i32) {
        let start = self.year_start.clamp(data_min, data_max);
        let end = self.year_end_cap.min(data_max).max(start);
        (start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = ViewDefaults::default();
        assert_eq!(config.countries, vec!["Kenya", "United States", "India"]);
        assert_eq!(config.year_start, 1900);
        assert_eq!(config.year_end_cap, 2013);
        assert_eq!(config.smoothing_window, 5);
        assert!(config.show_global);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_smoothing_window() {
        let config = ViewDefaults::default().with_smoothing_window(0);
        assert!(config.validate().is_err());

        let config = ViewDefaults::default().with_smoothing_window(22);
        assert!(config.validate().is_err());

        let config = ViewDefaults::default().with_smoothing_window(21);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_year_window() {
        let config = ViewDefaults::default().with_year_window(2000, 1900);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_window_clamps_to_dataset_range() {
        let config = ViewDefaults::default();

        // Wide dataset: defaults apply unchanged
        assert_eq!(config.default_window(1743, 2013), (1900, 2013));

        // Dataset starting after the default start
        assert_eq!(config.default_window(1990, 2020), (1990, 2013));

        // Dataset entirely before the default start
        assert_eq!(config.default_window(1800, 1850), (1850, 1850));

        // Dataset entirely after the default cap
        assert_eq!(config.default_window(2015, 2020), (2015, 2015));
    }

    #[test]
    fn test_builder_methods() {
        let config = ViewDefaults::default()
            .with_countries(vec!["France".to_string()])
            .with_year_window(1950, 2000)
            .with_smoothing_window(9)
            .without_global();

        assert_eq!(config.countries, vec!["France"]);
        assert_eq!(config.year_start, 1950);
        assert_eq!(config.year_end_cap, 2000);
        assert_eq!(config.smoothing_window, 9);
        assert!(!config.show_global);
        assert!(config.validate().is_ok());
    }
}
