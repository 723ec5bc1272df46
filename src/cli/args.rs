//! Command-line argument definitions for the climate explorer
//!
//! This module defines the complete CLI interface using the clap derive
//! API. Each subcommand validates its own arguments before the command
//! runs.

use crate::constants::defaults::{SMOOTHING_WINDOW_MAX, SMOOTHING_WINDOW_MIN};
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the climate explorer
///
/// Explores country-level average temperature series from CSV data:
/// per-year trends with optional smoothing and normalization, country
/// rankings, and dataset summaries.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "climate-explorer",
    version,
    about = "Explore country-level average temperature series from CSV data",
    long_about = "A command-line tool for exploring country-level average temperature data. \
                  Loads observation CSV files, aggregates them into per-year mean series for \
                  chosen countries and year windows, and displays trends, rankings, and \
                  dataset summaries in human, JSON, or CSV form."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the climate explorer
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Show per-year temperature trends for selected countries (default command)
    Trends(TrendsArgs),
    /// Rank countries by average temperature over a year window
    Rank(RankArgs),
    /// Summarize a temperature CSV file
    Info(InfoArgs),
}

/// Arguments for the trends command (main series display)
#[derive(Debug, Clone, Parser)]
pub struct TrendsArgs {
    /// Input temperature CSV file
    ///
    /// Must contain `dt`, `Country`, and `AverageTemperature` columns.
    /// Extra columns are ignored and column order does not matter.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Path to the temperature CSV file"
    )]
    pub input_file: PathBuf,

    /// Countries to display (comma-separated list)
    ///
    /// If not specified, uses the configured defaults: Kenya, United States, India.
    /// Countries missing from the dataset produce empty series and a warning.
    #[arg(
        short = 'c',
        long = "countries",
        value_name = "LIST",
        help = "Comma-separated list of countries to display"
    )]
    pub countries: Option<CountryList>,

    /// First year of the display window (inclusive)
    ///
    /// If not specified, uses the configured default start year clamped
    /// to the years actually present in the dataset.
    #[arg(
        long = "start-year",
        value_name = "YEAR",
        help = "First year of the display window"
    )]
    pub start_year: Option<i32>,

    /// Last year of the display window (inclusive)
    ///
    /// If not specified, uses the configured default end year clamped
    /// to the years actually present in the dataset.
    #[arg(
        long = "end-year",
        value_name = "YEAR",
        help = "Last year of the display window"
    )]
    pub end_year: Option<i32>,

    /// Smoothing window in years
    ///
    /// Applies a centered moving average over this many series positions.
    /// A window of 1 disables smoothing.
    #[arg(
        short = 's',
        long = "smoothing",
        value_name = "WINDOW",
        help = "Centered moving-average window (1 disables smoothing)"
    )]
    pub smoothing: Option<usize>,

    /// Normalize each series to its first displayed value
    ///
    /// Subtracts the first value of each series from all of its points,
    /// turning absolute temperatures into deltas against the window start.
    #[arg(long = "normalize", help = "Show series relative to their first value")]
    pub normalize: bool,

    /// Skip the all-country global average series
    ///
    /// By default a "Global Average" series over every country in the
    /// dataset is shown alongside the selection.
    #[arg(
        long = "no-global-average",
        help = "Do not show the all-country global average series"
    )]
    pub no_global_average: bool,

    /// Output format for the trend series
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub format: OutputFormat,

    /// Path to configuration file
    ///
    /// JSON configuration file overriding the built-in view defaults
    /// (countries, year window, smoothing, global average).
    #[arg(
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the rank command (country comparison)
#[derive(Debug, Clone, Parser)]
pub struct RankArgs {
    /// Input temperature CSV file
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Path to the temperature CSV file"
    )]
    pub input_file: PathBuf,

    /// Countries to rank (comma-separated list)
    ///
    /// If not specified, ranks every country present in the dataset.
    #[arg(
        short = 'c',
        long = "countries",
        value_name = "LIST",
        help = "Comma-separated list of countries to rank"
    )]
    pub countries: Option<CountryList>,

    /// First year of the ranking window (inclusive)
    #[arg(
        long = "start-year",
        value_name = "YEAR",
        help = "First year of the ranking window"
    )]
    pub start_year: Option<i32>,

    /// Last year of the ranking window (inclusive)
    #[arg(
        long = "end-year",
        value_name = "YEAR",
        help = "Last year of the ranking window"
    )]
    pub end_year: Option<i32>,

    /// Output format for the ranking
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the info command (dataset summary)
#[derive(Debug, Clone, Parser)]
pub struct InfoArgs {
    /// Input temperature CSV file
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Path to the temperature CSV file"
    )]
    pub input_file: PathBuf,

    /// Output format for the summary
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

/// Wrapper for parsing comma-separated country lists
#[derive(Debug, Clone, PartialEq)]
pub struct CountryList {
    pub countries: Vec<String>,
}

impl FromStr for CountryList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let countries: Vec<String> = s
            .split(',')
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        if countries.is_empty() {
            return Err(Error::configuration(
                "Country list cannot be empty".to_string(),
            ));
        }

        Ok(CountryList { countries })
    }
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

/// Shared argument checks used by every subcommand
fn validate_input_file(input_file: &PathBuf) -> Result<()> {
    if !input_file.exists() {
        return Err(Error::configuration(format!(
            "Input file does not exist: {}",
            input_file.display()
        )));
    }

    if !input_file.is_file() {
        return Err(Error::configuration(format!(
            "Input path is not a file: {}",
            input_file.display()
        )));
    }

    Ok(())
}

fn validate_year_window(start_year: Option<i32>, end_year: Option<i32>) -> Result<()> {
    if let (Some(start), Some(end)) = (start_year, end_year) {
        if start > end {
            return Err(Error::configuration(format!(
                "Start year {} is after end year {}",
                start, end
            )));
        }
    }

    Ok(())
}

fn validate_config_file(config_file: Option<&PathBuf>) -> Result<()> {
    if let Some(config_file) = config_file {
        if !config_file.exists() {
            return Err(Error::configuration(format!(
                "Config file does not exist: {}",
                config_file.display()
            )));
        }
    }

    Ok(())
}

impl TrendsArgs {
    /// Validate the trends command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input_file(&self.input_file)?;
        validate_year_window(self.start_year, self.end_year)?;
        validate_config_file(self.config_file.as_ref())?;

        if let Some(window) = self.smoothing {
            if !(SMOOTHING_WINDOW_MIN..=SMOOTHING_WINDOW_MAX).contains(&window) {
                return Err(Error::configuration(format!(
                    "Smoothing window must be between {} and {}, got {}",
                    SMOOTHING_WINDOW_MIN, SMOOTHING_WINDOW_MAX, window
                )));
            }
        }

        Ok(())
    }

    /// Get the explicitly requested countries, if any
    pub fn get_countries(&self) -> Option<Vec<String>> {
        self.countries.as_ref().map(|list| list.countries.clone())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.quiet, self.verbose)
    }

    /// Check if we should show progress spinners (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl RankArgs {
    /// Validate the rank command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input_file(&self.input_file)?;
        validate_year_window(self.start_year, self.end_year)?;
        validate_config_file(self.config_file.as_ref())
    }

    /// Get the explicitly requested countries, if any
    pub fn get_countries(&self) -> Option<Vec<String>> {
        self.countries.as_ref().map(|list| list.countries.clone())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.quiet, self.verbose)
    }

    /// Check if we should show progress spinners (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl InfoArgs {
    /// Validate the info command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input_file(&self.input_file)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.quiet, self.verbose)
    }

    /// Check if we should show progress spinners (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

fn log_level(quiet: bool, verbose: u8) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl Default for TrendsArgs {
    fn default() -> Self {
        Self {
            input_file: PathBuf::new(),
            countries: None,
            start_year: None,
            end_year: None,
            smoothing: None,
            normalize: false,
            no_global_average: false,
            format: OutputFormat::Human,
            config_file: None,
            verbose: 0,
            quiet: false,
        }
    }
}

impl Default for RankArgs {
    fn default() -> Self {
        Self {
            input_file: PathBuf::new(),
            countries: None,
            start_year: None,
            end_year: None,
            format: OutputFormat::Human,
            config_file: None,
            verbose: 0,
            quiet: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn existing_csv() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "dt,Country,AverageTemperature").unwrap();
        file
    }

    #[test]
    fn test_country_list_parsing() {
        // Valid single country
        let result = CountryList::from_str("Kenya").unwrap();
        assert_eq!(result.countries, vec!["Kenya"]);

        // Valid multiple countries
        let result = CountryList::from_str("Kenya,United States,India").unwrap();
        assert_eq!(result.countries, vec!["Kenya", "United States", "India"]);

        // Valid with spaces
        let result = CountryList::from_str(" Kenya , India ").unwrap();
        assert_eq!(result.countries, vec!["Kenya", "India"]);

        // Empty string
        assert!(CountryList::from_str("").is_err());

        // Only commas
        assert!(CountryList::from_str(",,,").is_err());
    }

    #[test]
    fn test_trends_args_validation() {
        let file = existing_csv();

        let args = TrendsArgs {
            input_file: file.path().to_path_buf(),
            ..Default::default()
        };
        assert!(args.validate().is_ok());

        let missing = TrendsArgs {
            input_file: PathBuf::from("/nonexistent/data.csv"),
            ..Default::default()
        };
        assert!(missing.validate().is_err());
    }

    #[test]
    fn test_trends_args_rejects_bad_smoothing() {
        let file = existing_csv();

        for window in [0, 22, 100] {
            let args = TrendsArgs {
                input_file: file.path().to_path_buf(),
                smoothing: Some(window),
                ..Default::default()
            };
            assert!(args.validate().is_err(), "window {} should fail", window);
        }

        let args = TrendsArgs {
            input_file: file.path().to_path_buf(),
            smoothing: Some(21),
            ..Default::default()
        };
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_trends_args_rejects_inverted_window() {
        let file = existing_csv();

        let args = TrendsArgs {
            input_file: file.path().to_path_buf(),
            start_year: Some(2000),
            end_year: Some(1990),
            ..Default::default()
        };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_rank_args_validation() {
        let file = existing_csv();

        let args = RankArgs {
            input_file: file.path().to_path_buf(),
            ..Default::default()
        };
        assert!(args.validate().is_ok());

        let inverted = RankArgs {
            input_file: file.path().to_path_buf(),
            start_year: Some(1990),
            end_year: Some(1900),
            ..Default::default()
        };
        assert!(inverted.validate().is_err());
    }

    #[test]
    fn test_log_level_mapping() {
        let file = existing_csv();

        let mut args = TrendsArgs {
            input_file: file.path().to_path_buf(),
            ..Default::default()
        };
        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");
        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");
        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.verbose = 0;
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
        assert!(!args.show_progress());
    }
}
