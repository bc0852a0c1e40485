//! Mean amplitude of the wave envelope for a single time step

use crate::errors::{Result, WaveStatsError};
use ndarray::ArrayView1;

/// Computes the arithmetic mean of one native (non-doubled) time-step slice.
///
/// NaN and infinite values are skipped. A slice with no finite values yields
/// NaN rather than an error.
///
/// # Errors
///
/// Returns [`WaveStatsError::EmptySlice`] if `values` has no elements.
pub fn mean_amplitude(values: ArrayView1<'_, f64>) -> Result<f64> {
    if values.is_empty() {
        return Err(WaveStatsError::EmptySlice);
    }

    let (sum, count) = values
        .iter()
        .filter(|value| value.is_finite())
        .fold((0.0_f64, 0_usize), |(sum, count), &value| {
            (sum + value, count + 1)
        });

    if count == 0 {
        return Ok(f64::NAN);
    }

    #[allow(clippy::cast_precision_loss)]
    let mean = sum / count as f64;
    Ok(mean)
}
