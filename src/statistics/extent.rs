//! Circular extent detection
//!
//! Finds the longest contiguous band of longitudes whose envelope value exceeds
//! a cutoff. The caller passes the longitude-doubled slice and axis (length 2N,
//! second half identical to the first), so a band crossing the seam between the
//! last and first native longitude shows up as one unbroken run.

use crate::axis::SPACING_TOLERANCE;
use crate::errors::{Result, WaveStatsError};
use ndarray::ArrayView1;

/// Degrees in a full revolution of the longitude axis.
pub const FULL_CIRCLE: f64 = 360.0;

/// Location and angular width of the widest band above the cutoff
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtentResult {
    pub start_longitude: f64,
    pub end_longitude: f64,
    /// Angular width in the axis' own units
    pub extent_degrees: f64,
}

impl ExtentResult {
    /// Result reported when no longitude exceeds the cutoff
    pub const NONE: Self = Self {
        start_longitude: 0.0,
        end_longitude: 0.0,
        extent_degrees: 0.0,
    };
}

/// Finds the longest run of longitudes whose value strictly exceeds `cutoff`.
///
/// `values` and `longitudes` must be the doubled slice and axis. Consecutive
/// selected longitudes belong to the same run when their circular distance is
/// no larger than `spacing`. The widest run wins; on a tie the first one in
/// longitude order is kept. The extent is the run's point count times
/// `spacing`.
///
/// If every doubled point exceeds the cutoff the result is
/// `(0.0, last longitude, N / 2 * spacing)` with N the native length. This
/// saturated-domain convention is kept for compatibility with existing output
/// and is not the true 360 degree width.
///
/// # Errors
///
/// - [`WaveStatsError::EmptySlice`] if `values` is empty
/// - [`WaveStatsError::ShapeMismatch`] if the lengths differ or are odd
/// - [`WaveStatsError::ExtentExceedsDomain`] if the widest run is longer than
///   the native domain, which means the input was not a true doubling
pub fn find_extent(
    values: ArrayView1<'_, f64>,
    longitudes: ArrayView1<'_, f64>,
    cutoff: f64,
    spacing: f64,
) -> Result<ExtentResult> {
    if values.is_empty() {
        return Err(WaveStatsError::EmptySlice);
    }
    if values.len() != longitudes.len() || values.len() % 2 != 0 {
        return Err(WaveStatsError::ShapeMismatch {
            message: format!(
                "doubled slice has {} values and {} longitudes",
                values.len(),
                longitudes.len()
            ),
        });
    }
    let native_len = values.len() / 2;

    let selected: Vec<f64> = values
        .iter()
        .zip(longitudes.iter())
        .filter(|(&value, _)| value > cutoff)
        .map(|(_, &lon)| lon)
        .collect();

    if selected.is_empty() {
        return Ok(ExtentResult::NONE);
    }
    if selected.len() == longitudes.len() {
        #[allow(clippy::cast_precision_loss)]
        let extent_degrees = native_len as f64 / 2.0 * spacing;
        return Ok(ExtentResult {
            start_longitude: 0.0,
            end_longitude: longitudes[longitudes.len() - 1],
            extent_degrees,
        });
    }

    // (first index into `selected`, number of points)
    let mut best = (0_usize, 1_usize);
    let mut current = (0_usize, 1_usize);
    for (i, pair) in selected.windows(2).enumerate() {
        if circular_step(pair[0], pair[1]) > spacing + SPACING_TOLERANCE {
            current = (i + 1, 1);
        } else {
            current.1 += 1;
        }
        if current.1 > best.1 {
            best = current;
        }
    }

    let (start, length) = best;
    if length > native_len {
        return Err(WaveStatsError::ExtentExceedsDomain {
            run_length: length,
            domain_length: native_len,
        });
    }

    #[allow(clippy::cast_precision_loss)]
    let extent_degrees = length as f64 * spacing;
    Ok(ExtentResult {
        start_longitude: selected[start],
        end_longitude: selected[start + length - 1],
        extent_degrees,
    })
}

/// Distance from `from` to `to` moving eastward, wrapping negative steps.
fn circular_step(from: f64, to: f64) -> f64 {
    let step = to - from;
    if step < 0.0 {
        step + FULL_CIRCLE
    } else {
        step
    }
}
