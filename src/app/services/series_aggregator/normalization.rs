//! Baseline normalization for yearly series
//!
//! Normalization re-expresses a series relative to its first value, which
//! turns absolute temperatures into deltas against the start of the
//! window. Display code applies it after smoothing, so the baseline is
//! the first smoothed value.

use crate::app::models::{Series, SeriesPoint};

/// Subtract the first value from every point
///
/// The first point of the result is always zero. An empty series is
/// returned unchanged.
pub fn normalize(series: &Series) -> Series {
    let baseline = match series.first() {
        Some(point) => point.value,
        None => return series.clone(),
    };

    let points = series
        .iter()
        .map(|point| SeriesPoint::new(point.year, point.value - baseline))
        .collect();

    Series::new(points)
}
