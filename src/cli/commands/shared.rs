//! Shared components for CLI commands
//!
//! This module contains common utilities and functions used across
//! multiple CLI command implementations: logging setup, configuration
//! loading, dataset loading with progress reporting, and window
//! resolution.

use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use crate::app::services::dataset_loader::{self, LoadStats};
use crate::app::services::series_aggregator::{CleaningStats, TemperatureDataset};
use crate::config::ViewDefaults;
use crate::{Error, Result};

/// Set up structured logging for a command
///
/// The `RUST_LOG` environment variable overrides the CLI verbosity flags
/// when set. Log output goes to stderr so it never mixes with command
/// results on stdout.
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("climate_explorer={}", log_level)));

    // Set up subscriber based on output format preference
    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load view defaults, from a config file when one is given
pub fn load_view_defaults(config_file: Option<&Path>) -> Result<ViewDefaults> {
    match config_file {
        Some(path) => {
            info!("Using config file: {}", path.display());
            ViewDefaults::load_from_file(path)
        }
        None => {
            info!("No config file given, using built-in view defaults");
            Ok(ViewDefaults::default())
        }
    }
}

/// Create a progress spinner with appropriate styling
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Load and clean a temperature CSV file
///
/// Returns the dataset handle together with the loading and cleaning
/// statistics so commands can report what was kept and dropped.
pub fn load_dataset(
    input_file: &Path,
    show_progress: bool,
) -> Result<(TemperatureDataset, LoadStats, CleaningStats)> {
    let progress_bar = if show_progress {
        Some(create_spinner(&format!(
            "Loading {}...",
            input_file.display()
        )))
    } else {
        None
    };

    let load_result =
        dataset_loader::load_csv_file_with_progress(input_file, progress_bar.as_ref())?;

    if let Some(pb) = &progress_bar {
        pb.finish_with_message(format!("Loaded {} rows", load_result.stats.rows_read));
    }

    if load_result.stats.rows_read > 0 && !load_result.stats.is_successful() {
        warn!(
            "High malformed row rate: {}",
            load_result.stats.summary()
        );
    }

    let (dataset, cleaning_stats) = TemperatureDataset::from_raw_with_stats(&load_result.records);
    info!(
        "Dataset ready: {} records across {} countries",
        dataset.record_count(),
        dataset.countries().len()
    );

    Ok((dataset, load_result.stats, cleaning_stats))
}

/// Resolve the display window from CLI flags, defaults, and the data
///
/// Explicit `--start-year`/`--end-year` flags are taken as given; missing
/// flags fall back to the configured defaults clamped to the years the
/// dataset actually covers.
pub fn resolve_window(
    start_flag: Option<i32>,
    end_flag: Option<i32>,
    defaults: &ViewDefaults,
    data_range: (i32, i32),
) -> Result<(i32, i32)> {
    let (data_min, data_max) = data_range;
    let (default_start, default_end) = defaults.default_window(data_min, data_max);

    let start_year = start_flag.unwrap_or(default_start);
    let end_year = end_flag.unwrap_or(default_end);

    if start_year > end_year {
        return Err(Error::configuration(format!(
            "Start year {} is after end year {}",
            start_year, end_year
        )));
    }

    debug!("Resolved year window: {} to {}", start_year, end_year);
    Ok((start_year, end_year))
}

/// Escape CSV field values
pub fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
