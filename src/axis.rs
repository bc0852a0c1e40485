//! Longitude axis handling
//!
//! The axis must be uniformly spaced. The spacing is derived once at
//! construction and reused by every extent computation.

use crate::errors::{Result, WaveStatsError};

/// Absolute tolerance used when comparing neighbouring spacings.
pub const SPACING_TOLERANCE: f64 = 1.0e-6;

/// Ordered, uniformly spaced longitude coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct LongitudeAxis {
    values: Vec<f64>,
    spacing: f64,
}

impl LongitudeAxis {
    /// Validate `values` and derive the uniform spacing.
    ///
    /// A single-point axis has a spacing of zero.
    ///
    /// # Errors
    ///
    /// Returns [`WaveStatsError::EmptyAxis`] for an empty input and
    /// [`WaveStatsError::NonUniformAxis`] when any consecutive difference departs
    /// from the first one, or when the axis is not strictly increasing.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(WaveStatsError::EmptyAxis);
        }
        if values.len() == 1 {
            return Ok(Self {
                values,
                spacing: 0.0,
            });
        }

        let spacing = values[1] - values[0];
        for (index, pair) in values.windows(2).enumerate() {
            let step = pair[1] - pair[0];
            if step.is_nan() || step <= 0.0 || (step - spacing).abs() > SPACING_TOLERANCE {
                return Err(WaveStatsError::NonUniformAxis {
                    expected: spacing,
                    found: step,
                    index,
                });
            }
        }

        Ok(Self { values, spacing })
    }

    /// Uniform spacing between neighbouring longitudes
    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Number of native longitude points
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Last native longitude
    #[must_use]
    pub fn last(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// The axis concatenated with itself (length 2N).
    #[must_use]
    pub fn doubled(&self) -> Vec<f64> {
        self.values.iter().chain(self.values.iter()).copied().collect()
    }
}
