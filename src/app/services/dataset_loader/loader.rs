//! Core CSV loading implementation
//!
//! This module reads country temperature CSV files into raw records. Loading
//! is deliberately forgiving at the row level: a row that cannot be read or
//! whose temperature field is not a number is counted and skipped, never
//! failing the whole file. File-level problems (missing file, unreadable
//! content, missing required columns) do fail.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::StringRecord;
use indicatif::ProgressBar;
use tracing::{debug, info};

use super::columns::ColumnLayout;
use super::stats::{LoadResult, LoadStats};
use crate::app::models::RawRecord;
use crate::constants::PROGRESS_UPDATE_INTERVAL;
use crate::{Error, Result};

/// Load a temperature CSV file into raw records
pub fn load_csv_file(path: &Path) -> Result<LoadResult> {
    load_csv_file_with_progress(path, None)
}

/// Load a temperature CSV file, reporting row counts to a progress bar
pub fn load_csv_file_with_progress(
    path: &Path,
    progress: Option<&ProgressBar>,
) -> Result<LoadResult> {
    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }

    info!("Loading temperature data from {}", path.display());

    let file = File::open(path)
        .map_err(|e| Error::io(format!("failed to open {}", path.display()), e))?;
    let source = path.display().to_string();

    read_records(BufReader::new(file), &source, progress)
}

/// Load temperature CSV content from any reader
///
/// The `source` string names the input in errors and logs.
pub fn load_csv_reader<R: Read>(reader: R, source: &str) -> Result<LoadResult> {
    read_records(reader, source, None)
}

fn read_records<R: Read>(
    reader: R,
    source: &str,
    progress: Option<&ProgressBar>,
) -> Result<LoadResult> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| Error::csv_parsing(source, "failed to read header row", Some(e)))?
        .clone();
    let layout = ColumnLayout::analyze(&headers, source)?;
    debug!(
        "Resolved columns in {}: date={}, country={}, temperature={}",
        source, layout.date, layout.country, layout.average_temperature
    );

    let mut stats = LoadStats::new();
    let mut records = Vec::new();

    for (row_index, result) in csv_reader.records().enumerate() {
        stats.rows_read += 1;

        if let Some(bar) = progress {
            if stats.rows_read % PROGRESS_UPDATE_INTERVAL == 0 {
                bar.set_message(format!("{} rows read", stats.rows_read));
            }
        }

        // Row numbers are 1-based and include the header row
        let row_number = row_index + 2;

        match result {
            Ok(row) => match extract_record(&row, layout) {
                Ok(record) => {
                    records.push(record);
                    stats.rows_loaded += 1;
                }
                Err(message) => {
                    stats.rows_malformed += 1;
                    debug!("Skipping row {} in {}: {}", row_number, source, message);
                    stats.errors.push(format!("row {}: {}", row_number, message));
                }
            },
            Err(e) => {
                stats.rows_malformed += 1;
                debug!("Skipping unreadable row {} in {}: {}", row_number, source, e);
                stats.errors.push(format!("row {}: {}", row_number, e));
            }
        }
    }

    info!("Loaded {}: {}", source, stats.summary());

    Ok(LoadResult { records, stats })
}

/// Extract a raw record from one CSV row
///
/// An empty temperature field is a missing value, not an error; it is
/// preserved as `None` for the cleaning stage to drop. A non-empty
/// temperature that does not parse as a number makes the row malformed.
fn extract_record(
    row: &StringRecord,
    layout: ColumnLayout,
) -> std::result::Result<RawRecord, String> {
    let field = |index: usize| row.get(index).map(str::trim);

    let country = field(layout.country).ok_or_else(|| "missing country field".to_string())?;
    if country.is_empty() {
        return Err("empty country field".to_string());
    }

    let date = field(layout.date).ok_or_else(|| "missing date field".to_string())?;

    let raw_temperature = field(layout.average_temperature)
        .ok_or_else(|| "missing temperature field".to_string())?;
    let average_temperature = if raw_temperature.is_empty() {
        None
    } else {
        Some(
            raw_temperature
                .parse::<f64>()
                .map_err(|_| format!("unparseable temperature '{}'", raw_temperature))?,
        )
    };

    Ok(RawRecord::new(country, date, average_temperature))
}
