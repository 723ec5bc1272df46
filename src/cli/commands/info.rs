//! Info command implementation
//!
//! Summarizes a temperature CSV file: how many rows loaded, what cleaning
//! dropped, and which countries and years the cleaned dataset covers.

use std::path::Path;

use super::shared::{self, csv_escape};
use crate::app::services::dataset_loader::LoadStats;
use crate::app::services::series_aggregator::{CleaningStats, TemperatureDataset};
use crate::cli::args::{InfoArgs, OutputFormat};
use crate::{Error, Result};

const COUNTRY_LISTING_LIMIT: usize = 10;

/// Execute the info command
pub fn run_info(args: InfoArgs) -> Result<()> {
    shared::setup_logging(args.get_log_level(), args.quiet)?;
    args.validate()?;

    let (dataset, load_stats, cleaning_stats) =
        shared::load_dataset(&args.input_file, args.show_progress())?;

    match args.format {
        OutputFormat::Human => {
            render_human(&args.input_file, &dataset, &load_stats, &cleaning_stats);
        }
        OutputFormat::Json => {
            render_json(&args.input_file, &dataset, &load_stats, &cleaning_stats)?;
        }
        OutputFormat::Csv => render_csv(&dataset, &load_stats, &cleaning_stats),
    }

    Ok(())
}

/// Render the dataset summary as a human-readable report
fn render_human(
    input_file: &Path,
    dataset: &TemperatureDataset,
    load_stats: &LoadStats,
    cleaning_stats: &CleaningStats,
) {
    let mut output = format!(
        "📊 Temperature Dataset Report\n\
         =============================\n\
         📁 Input File: {}\n\
         📄 Rows Read: {}\n\
         ✅ Records Loaded: {}\n",
        input_file.display(),
        load_stats.rows_read,
        load_stats.rows_loaded
    );

    if load_stats.rows_malformed > 0 {
        output.push_str(&format!(
            "⚠️  Malformed Rows: {} (see log for details)\n",
            load_stats.rows_malformed
        ));
    }
    output.push('\n');

    output.push_str("🧹 Cleaning:\n");
    output.push_str(&format!(
        "   • Cleaned records: {}\n",
        cleaning_stats.cleaned
    ));
    output.push_str(&format!(
        "   • Dropped (invalid date): {}\n",
        cleaning_stats.dropped_invalid_date
    ));
    output.push_str(&format!(
        "   • Dropped (missing temperature): {}\n",
        cleaning_stats.dropped_missing_temperature
    ));
    output.push_str(&format!(
        "   • Dropped (non-finite temperature): {}\n",
        cleaning_stats.dropped_non_finite
    ));
    output.push('\n');

    output.push_str("🌍 Coverage:\n");
    match dataset.year_range() {
        Ok((first_year, last_year)) => {
            output.push_str(&format!("   • Years: {} to {}\n", first_year, last_year));
        }
        Err(_) => {
            output.push_str("   • No usable data after cleaning\n");
        }
    }
    output.push_str(&format!(
        "   • Countries: {}\n",
        dataset.countries().len()
    ));
    output.push('\n');

    if !dataset.countries().is_empty() {
        output.push_str("🗺️  Countries:\n");
        for country in dataset.countries().iter().take(COUNTRY_LISTING_LIMIT) {
            output.push_str(&format!("   • {}\n", country));
        }
        if dataset.countries().len() > COUNTRY_LISTING_LIMIT {
            output.push_str(&format!(
                "   • ... and {} more countries\n",
                dataset.countries().len() - COUNTRY_LISTING_LIMIT
            ));
        }
    }

    println!("{}", output);
}

/// Render the dataset summary as pretty-printed JSON
fn render_json(
    input_file: &Path,
    dataset: &TemperatureDataset,
    load_stats: &LoadStats,
    cleaning_stats: &CleaningStats,
) -> Result<()> {
    use serde_json::json;

    let year_range = dataset.year_range().ok();

    let json_report = json!({
        "input_file": input_file.display().to_string(),
        "loading": {
            "rows_read": load_stats.rows_read,
            "rows_loaded": load_stats.rows_loaded,
            "rows_malformed": load_stats.rows_malformed,
            "row_errors": load_stats.errors.len()
        },
        "cleaning": {
            "cleaned": cleaning_stats.cleaned,
            "dropped_invalid_date": cleaning_stats.dropped_invalid_date,
            "dropped_missing_temperature": cleaning_stats.dropped_missing_temperature,
            "dropped_non_finite": cleaning_stats.dropped_non_finite
        },
        "coverage": {
            "records": dataset.record_count(),
            "countries": dataset.countries().len(),
            "year_range": year_range.map(|(first, last)| json!({
                "first": first,
                "last": last
            }))
        },
        "countries": dataset.countries().iter().collect::<Vec<_>>(),
        "generated_at": chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
    });

    let json_string = serde_json::to_string_pretty(&json_report)
        .map_err(|e| Error::configuration(format!("Failed to serialize dataset report: {}", e)))?;
    println!("{}", json_string);

    Ok(())
}

/// Render the dataset summary as metric,value CSV rows
fn render_csv(dataset: &TemperatureDataset, load_stats: &LoadStats, cleaning_stats: &CleaningStats) {
    let mut csv = String::new();
    csv.push_str("metric,value\n");
    csv.push_str(&format!("rows_read,{}\n", load_stats.rows_read));
    csv.push_str(&format!("rows_loaded,{}\n", load_stats.rows_loaded));
    csv.push_str(&format!("rows_malformed,{}\n", load_stats.rows_malformed));
    csv.push_str(&format!("cleaned_records,{}\n", cleaning_stats.cleaned));
    csv.push_str(&format!(
        "dropped_invalid_date,{}\n",
        cleaning_stats.dropped_invalid_date
    ));
    csv.push_str(&format!(
        "dropped_missing_temperature,{}\n",
        cleaning_stats.dropped_missing_temperature
    ));
    csv.push_str(&format!(
        "dropped_non_finite,{}\n",
        cleaning_stats.dropped_non_finite
    ));
    csv.push_str(&format!("countries,{}\n", dataset.countries().len()));

    if let Ok((first_year, last_year)) = dataset.year_range() {
        csv.push_str(&format!("first_year,{}\n", first_year));
        csv.push_str(&format!("last_year,{}\n", last_year));
    }

    for country in dataset.countries() {
        csv.push_str(&format!("country,{}\n", csv_escape(country)));
    }

    println!("{}", csv);
}
