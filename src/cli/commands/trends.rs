//! Trends command implementation
//!
//! Derives per-year mean temperature series for the selected countries,
//! applies smoothing and optional normalization, and renders the result
//! in human, JSON, or CSV form.

use std::path::Path;

use colored::*;
use tracing::{info, warn};

use super::shared::{self, csv_escape};
use crate::app::models::NamedSeries;
use crate::app::services::series_aggregator::{normalize, smooth};
use crate::cli::args::{OutputFormat, TrendsArgs};
use crate::{Error, Result};

/// Execute the trends command
pub fn run_trends(args: TrendsArgs) -> Result<()> {
    shared::setup_logging(args.get_log_level(), args.quiet)?;
    args.validate()?;

    let defaults = shared::load_view_defaults(args.config_file.as_deref())?;
    let (dataset, _load_stats, _cleaning_stats) =
        shared::load_dataset(&args.input_file, args.show_progress())?;

    let data_range = dataset.year_range()?;
    let (start_year, end_year) =
        shared::resolve_window(args.start_year, args.end_year, &defaults, data_range)?;

    let countries = args
        .get_countries()
        .unwrap_or_else(|| defaults.countries.clone());
    for country in &countries {
        if !dataset.contains_country(country) {
            warn!("Country '{}' has no records in the dataset", country);
        }
    }

    let smoothing_window = args.smoothing.unwrap_or(defaults.smoothing_window);
    let show_global = defaults.show_global && !args.no_global_average;

    info!(
        "Deriving series for {} countries from {} to {} (smoothing window {})",
        countries.len(),
        start_year,
        end_year,
        smoothing_window
    );

    let mut series_list: Vec<NamedSeries> = countries
        .iter()
        .map(|country| {
            NamedSeries::country(
                country.clone(),
                dataset.series_for_country(country, start_year, end_year),
            )
        })
        .collect();

    if show_global {
        series_list.push(NamedSeries::global(
            dataset.global_series(start_year, end_year),
        ));
    }

    for named in &mut series_list {
        let mut series = smooth(&named.series, smoothing_window);
        if args.normalize {
            series = normalize(&series);
        }
        named.series = series;
    }

    match args.format {
        OutputFormat::Human => render_human(
            &args.input_file,
            &series_list,
            (start_year, end_year),
            smoothing_window,
            args.normalize,
        ),
        OutputFormat::Json => render_json(
            &series_list,
            (start_year, end_year),
            smoothing_window,
            args.normalize,
        )?,
        OutputFormat::Csv => render_csv(&series_list),
    }

    Ok(())
}

/// Render trend series as a human-readable listing
fn render_human(
    input_file: &Path,
    series_list: &[NamedSeries],
    window: (i32, i32),
    smoothing_window: usize,
    normalized: bool,
) {
    println!("{}", "Temperature Trends".bright_green().bold());
    println!("  {} {}", "Input:".bright_cyan(), input_file.display());
    println!("  {} {} to {}", "Window:".bright_cyan(), window.0, window.1);
    println!(
        "  {} {} positions",
        "Smoothing:".bright_cyan(),
        smoothing_window
    );
    if normalized {
        println!(
            "  {} relative to first displayed value",
            "Values:".bright_cyan()
        );
    }

    for named in series_list {
        println!("\n{}", named.label.bright_yellow().bold());

        if named.series.is_empty() {
            println!("  (no data in window)");
            continue;
        }

        for point in named.series.iter() {
            println!("  {:>6}  {:>8.3}", point.year, point.value);
        }

        let points = named.series.points();
        let first = points[0];
        let last = points[points.len() - 1];
        println!(
            "  {} {:+.3} °C across {} points",
            "Change:".bright_cyan(),
            last.value - first.value,
            points.len()
        );
    }
}

/// Render trend series as pretty-printed JSON
fn render_json(
    series_list: &[NamedSeries],
    window: (i32, i32),
    smoothing_window: usize,
    normalized: bool,
) -> Result<()> {
    use serde_json::json;

    let report = json!({
        "window": {
            "start_year": window.0,
            "end_year": window.1
        },
        "smoothing_window": smoothing_window,
        "normalized": normalized,
        "series": series_list
    });

    let json_string = serde_json::to_string_pretty(&report)
        .map_err(|e| Error::configuration(format!("Failed to serialize trend report: {}", e)))?;
    println!("{}", json_string);

    Ok(())
}

/// Render trend series as CSV rows on stdout
fn render_csv(series_list: &[NamedSeries]) {
    let mut csv = String::new();
    csv.push_str("label,year,value\n");

    for named in series_list {
        for point in named.series.iter() {
            csv.push_str(&format!(
                "{},{},{}\n",
                csv_escape(&named.label),
                point.year,
                point.value
            ));
        }
    }

    println!("{}", csv);
}
