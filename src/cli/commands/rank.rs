//! Rank command implementation
//!
//! Ranks countries by their record-level average temperature over a year
//! window, coldest first. With no explicit country list the whole dataset
//! is ranked.

use std::collections::BTreeSet;
use std::path::Path;

use colored::*;
use tracing::{info, warn};

use super::shared::{self, csv_escape};
use crate::app::models::CountryAverage;
use crate::cli::args::{OutputFormat, RankArgs};
use crate::{Error, Result};

const BAR_WIDTH: usize = 30;

/// Execute the rank command
pub fn run_rank(args: RankArgs) -> Result<()> {
    shared::setup_logging(args.get_log_level(), args.quiet)?;
    args.validate()?;

    let defaults = shared::load_view_defaults(args.config_file.as_deref())?;
    let (dataset, _load_stats, _cleaning_stats) =
        shared::load_dataset(&args.input_file, args.show_progress())?;

    let data_range = dataset.year_range()?;
    let (start_year, end_year) =
        shared::resolve_window(args.start_year, args.end_year, &defaults, data_range)?;

    let filter: BTreeSet<String> = match args.get_countries() {
        Some(countries) => countries.into_iter().collect(),
        None => dataset.countries().clone(),
    };

    info!(
        "Ranking {} countries from {} to {}",
        filter.len(),
        start_year,
        end_year
    );

    let ranking = dataset.rank_by_average(&filter, start_year, end_year);
    if ranking.is_empty() {
        warn!(
            "No selected country has records between {} and {}",
            start_year, end_year
        );
    }

    match args.format {
        OutputFormat::Human => {
            render_human(&args.input_file, &ranking, (start_year, end_year));
        }
        OutputFormat::Json => render_json(&ranking, (start_year, end_year))?,
        OutputFormat::Csv => render_csv(&ranking),
    }

    Ok(())
}

/// Render the ranking as a bar list, coldest country first
fn render_human(input_file: &Path, ranking: &[CountryAverage], window: (i32, i32)) {
    println!(
        "{}",
        "Country Ranking by Average Temperature"
            .bright_green()
            .bold()
    );
    println!("  {} {}", "Input:".bright_cyan(), input_file.display());
    println!("  {} {} to {}", "Window:".bright_cyan(), window.0, window.1);
    println!();

    if ranking.is_empty() {
        println!("No countries have records in this window.");
        return;
    }

    let coldest = ranking[0].average;
    let warmest = ranking[ranking.len() - 1].average;
    let span = warmest - coldest;

    for (index, row) in ranking.iter().enumerate() {
        // Scale bars between the coldest and warmest entries
        let width = if span > 0.0 {
            let scaled = (row.average - coldest) / span * BAR_WIDTH as f64;
            (scaled.round() as usize).max(1)
        } else {
            BAR_WIDTH
        };
        let bar = "█".repeat(width);

        println!(
            "{:>3}. {:<28} {:>8.2} °C  {}",
            index + 1,
            row.country,
            row.average,
            bar.red()
        );
    }
}

/// Render the ranking as pretty-printed JSON
fn render_json(ranking: &[CountryAverage], window: (i32, i32)) -> Result<()> {
    use serde_json::json;

    let report = json!({
        "window": {
            "start_year": window.0,
            "end_year": window.1
        },
        "ranking": ranking
    });

    let json_string = serde_json::to_string_pretty(&report)
        .map_err(|e| Error::configuration(format!("Failed to serialize ranking: {}", e)))?;
    println!("{}", json_string);

    Ok(())
}

/// Render the ranking as CSV rows on stdout
fn render_csv(ranking: &[CountryAverage]) {
    let mut csv = String::new();
    csv.push_str("country,average\n");

    for row in ranking {
        csv.push_str(&format!("{},{}\n", csv_escape(&row.country), row.average));
    }

    println!("{}", csv);
}
