//! Geometry helpers: series extrema + terminal size plumbing.

use terminal_size::{Height, Width, terminal_size};

use crate::core::{error::InvalidInputError, format::TickFormat};

/// Inclusive `(min, max)` of a series in one linear scan.
///
/// `NaN` samples are skipped unless every sample is `NaN`.
///
/// # Errors
/// [`InvalidInputError::EmptySeries`] when `series` has no samples.
pub fn min_and_max(series: &[f64]) -> Result<(f64, f64), InvalidInputError> {
    let (&first, rest) = series
        .split_first()
        .ok_or(InvalidInputError::EmptySeries)?;

    let (mut low, mut high) = (first, first);
    for &v in rest {
        low = low.min(v);
        high = high.max(v);
    }
    Ok((low, high))
}

/// Current terminal geometry (80×30 fallback).
#[inline]
#[must_use]
pub fn terminal_geometry() -> (Width, Height) {
    terminal_size().unwrap_or((Width(80), Height(30)))
}

/// How wide will the tick labels be for the given min/max?
#[inline]
#[must_use]
pub fn tick_label_width(y_range: (f64, f64), format: &TickFormat) -> usize {
    let (low, high) = y_range;
    let lo = format.format(low).chars().count();
    let hi = format.format(high).chars().count();
    lo.max(hi)
}
