//! Threshold policy for extent detection
//!
//! A threshold is either an absolute envelope value or a percentile of the
//! whole field. It is parsed once from its configuration string and resolved
//! once per run into a single numeric cutoff.

use crate::errors::{Result, WaveStatsError};
use crate::statistics::percentile;
use std::fmt;
use std::str::FromStr;

/// Suffix marking a percentile threshold, e.g. `75pct`
pub const PERCENTILE_MARKER: &str = "pct";

/// Threshold specification
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Threshold {
    /// Literal cutoff value
    Absolute(f64),
    /// Percentile (0-100) of the reference data
    Percentile(f64),
}

impl Threshold {
    /// Resolves the threshold into a numeric cutoff.
    ///
    /// An absolute threshold is returned unchanged and `reference` is not read.
    /// A percentile threshold is evaluated over every value in `reference`.
    ///
    /// # Errors
    ///
    /// Returns [`WaveStatsError::NoFiniteData`] if a percentile is requested and
    /// `reference` holds no finite values.
    pub fn resolve<'a, I>(&self, reference: I) -> Result<f64>
    where
        I: IntoIterator<Item = &'a f64>,
    {
        match *self {
            Self::Absolute(value) => Ok(value),
            Self::Percentile(pct) => percentile(reference, pct),
        }
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::Percentile(75.0)
    }
}

impl FromStr for Threshold {
    type Err = WaveStatsError;

    fn from_str(s: &str) -> Result<Self> {
        let spec = s.trim();
        let invalid = |reason: &str| WaveStatsError::InvalidThreshold {
            spec: s.to_string(),
            reason: reason.to_string(),
        };

        if let Some(number) = spec.strip_suffix(PERCENTILE_MARKER) {
            let pct: f64 = number
                .trim()
                .parse()
                .map_err(|_| invalid("percentile value is not a number"))?;
            if !(0.0..=100.0).contains(&pct) {
                return Err(invalid("percentile must lie between 0 and 100"));
            }
            return Ok(Self::Percentile(pct));
        }

        let value: f64 = spec
            .parse()
            .map_err(|_| invalid("expected a number or a percentile such as '75pct'"))?;
        if !value.is_finite() {
            return Err(invalid("threshold must be finite"));
        }
        Ok(Self::Absolute(value))
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absolute(value) => write!(f, "{value}"),
            Self::Percentile(pct) => write!(f, "{pct}{PERCENTILE_MARKER}"),
        }
    }
}
