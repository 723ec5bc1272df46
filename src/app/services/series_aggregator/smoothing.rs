//! Centered moving-average smoothing for yearly series
//!
//! Smoothing averages each point with its positional neighbors in the
//! series, not with calendar-year neighbors: across a gap the adjacent
//! points are still adjacent positions. The output has the same length
//! and the same years as the input.

use crate::app::models::{Series, SeriesPoint};

/// Smooth a series with a centered moving average
///
/// For a window of size `w`, each point is averaged with up to
/// `(w - 1) / 2` positions to its left and `w / 2` positions to its
/// right. Near the edges the window shrinks to the points that exist,
/// so the first and last values are means over fewer positions. A
/// window of zero or one returns the series unchanged.
pub fn smooth(series: &Series, window_size: usize) -> Series {
    if window_size <= 1 || series.is_empty() {
        return series.clone();
    }

    let points = series.points();
    let reach_left = (window_size - 1) / 2;
    let reach_right = window_size / 2;

    let smoothed = points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let start = index.saturating_sub(reach_left);
            let end = (index + reach_right).min(points.len() - 1);
            let window = &points[start..=end];

            let mean = window.iter().map(|p| p.value).sum::<f64>() / window.len() as f64;
            SeriesPoint::new(point.year, mean)
        })
        .collect();

    Series::new(smoothed)
}
