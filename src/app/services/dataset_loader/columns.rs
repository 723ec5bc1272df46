//! Column layout resolution for temperature CSV files
//!
//! This module locates the required columns in a header row by name. Columns
//! may appear in any order and extra columns are ignored.

use crate::constants::columns;
use crate::{Error, Result};
use csv::StringRecord;

/// Resolved indices of the columns the loader reads
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnLayout {
    /// Index of the observation date column
    pub date: usize,

    /// Index of the country column
    pub country: usize,

    /// Index of the average temperature column
    pub average_temperature: usize,
}

impl ColumnLayout {
    /// Resolve required column indices from a header row
    ///
    /// Header names are matched exactly after trimming surrounding
    /// whitespace. A missing required column fails the whole file.
    pub fn analyze(headers: &StringRecord, file: &str) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|header| header.trim() == name)
                .ok_or_else(|| Error::missing_column(file, name))
        };

        Ok(Self {
            date: find(columns::DATE)?,
            country: find(columns::COUNTRY)?,
            average_temperature: find(columns::AVERAGE_TEMPERATURE)?,
        })
    }
}
