//! Per-time-step wave statistics
//!
//! [`WaveStatsEngine`] resolves the threshold once for the whole field, builds
//! the longitude-doubled view, and then computes amplitude and extent for every
//! time step independently. Time steps are processed in parallel with Rayon by
//! default; the output always follows the input time order.

use crate::errors::Result;
use crate::field::{DoubledField, WaveField};
use crate::statistics::{find_extent, mean_amplitude, ExtentResult};
use crate::threshold::Threshold;
use chrono::NaiveDateTime;
use rayon::prelude::*;
use tracing::{debug, info};

/// Column names of the tabular output, in order
pub const STATS_COLUMNS: [&str; 5] = ["date", "amp-mean", "start-lon", "end-lon", "extent"];

/// Statistics for one time step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsRecord {
    pub timestamp: NaiveDateTime,
    pub amplitude_mean: f64,
    pub start_longitude: f64,
    pub end_longitude: f64,
    pub extent_degrees: f64,
}

impl StatsRecord {
    #[must_use]
    pub fn new(timestamp: NaiveDateTime, amplitude_mean: f64, extent: ExtentResult) -> Self {
        Self {
            timestamp,
            amplitude_mean,
            start_longitude: extent.start_longitude,
            end_longitude: extent.end_longitude,
            extent_degrees: extent.extent_degrees,
        }
    }

    /// Numeric columns following the date, in [`STATS_COLUMNS`] order
    #[must_use]
    pub fn values(&self) -> [f64; 4] {
        [
            self.amplitude_mean,
            self.start_longitude,
            self.end_longitude,
            self.extent_degrees,
        ]
    }
}

/// Drives amplitude and extent computation across a whole field
#[derive(Debug, Clone)]
pub struct WaveStatsEngine {
    threshold: Threshold,
    parallel: bool,
}

impl WaveStatsEngine {
    #[must_use]
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            parallel: true,
        }
    }

    /// Enable or disable parallel processing of time steps
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Resolves the configured threshold against every value of `field`.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Threshold::resolve`].
    pub fn resolve_cutoff(&self, field: &WaveField) -> Result<f64> {
        self.threshold.resolve(field.data().iter())
    }

    /// Computes one [`StatsRecord`] per time step of `field`, in time order.
    ///
    /// # Errors
    ///
    /// Fails before producing any record if the threshold cannot be resolved,
    /// and fails as a whole if any time step hits an internal-consistency
    /// error.
    pub fn run(&self, field: &WaveField) -> Result<Vec<StatsRecord>> {
        let cutoff = self.resolve_cutoff(field)?;
        info!(
            threshold = %self.threshold,
            cutoff,
            "Resolved extent threshold"
        );

        let doubled = field.doubled()?;
        let spacing = field.longitudes().spacing();
        let n_times = field.n_times();

        info!(
            n_times,
            n_longitudes = field.n_longitudes(),
            spacing,
            parallel = self.parallel,
            "Computing wave statistics"
        );

        let process = |step: usize| compute_step(field, &doubled, step, cutoff, spacing);
        let records: Vec<StatsRecord> = if self.parallel {
            debug!(threads = rayon::current_num_threads(), "Using parallel time loop");
            (0..n_times).into_par_iter().map(process).collect::<Result<Vec<_>>>()?
        } else {
            (0..n_times).map(process).collect::<Result<Vec<_>>>()?
        };

        Ok(records)
    }
}

fn compute_step(
    field: &WaveField,
    doubled: &DoubledField,
    step: usize,
    cutoff: f64,
    spacing: f64,
) -> Result<StatsRecord> {
    let amplitude_mean = mean_amplitude(field.row(step))?;
    let extent = find_extent(doubled.row(step), doubled.longitudes(), cutoff, spacing)?;
    Ok(StatsRecord::new(
        field.timestamps()[step],
        amplitude_mean,
        extent,
    ))
}
