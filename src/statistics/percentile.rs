//! Percentile computation with linear interpolation between ranked samples

use crate::errors::{Result, WaveStatsError};

/// Returns the `pct`-th percentile (0-100) of the finite values in `values`.
///
/// The rank is `pct / 100 * (n - 1)` over the sorted sample, interpolating
/// linearly between the two neighbouring samples. Non-finite values are
/// ignored.
///
/// # Errors
///
/// Returns [`WaveStatsError::NoFiniteData`] if no finite values remain.
pub fn percentile<'a, I>(values: I, pct: f64) -> Result<f64>
where
    I: IntoIterator<Item = &'a f64>,
{
    let mut sorted: Vec<f64> = values
        .into_iter()
        .copied()
        .filter(|value| value.is_finite())
        .collect();
    if sorted.is_empty() {
        return Err(WaveStatsError::NoFiniteData { percentile: pct });
    }
    sorted.sort_by(f64::total_cmp);

    let q = pct.clamp(0.0, 100.0) / 100.0;
    #[allow(clippy::cast_precision_loss)]
    let rank = q * (sorted.len() - 1) as f64;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let lower = rank.floor() as usize;
    let upper = (lower + 1).min(sorted.len() - 1);
    #[allow(clippy::cast_precision_loss)]
    let fraction = rank - lower as f64;

    let (low, high) = (sorted[lower], sorted[upper]);
    Ok((low + (high - low) * fraction).clamp(low, high))
}
