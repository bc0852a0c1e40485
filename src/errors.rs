//! Centralized error handling for wave_stats
//!
//! Every failure is fatal for a run: configuration problems are reported before
//! the first time step is processed, and internal-consistency problems abort the
//! run without producing partial output.

use thiserror::Error;

/// Main error type for wave_stats operations
#[derive(Debug, Error)]
pub enum WaveStatsError {
    /// NetCDF file operation errors
    #[error("NetCDF error: {0}")]
    NetCDFError(#[from] netcdf::Error),

    /// I/O operation errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Array shape or dimension error
    #[error("Array error: {0}")]
    ArrayError(#[from] ndarray::ShapeError),

    /// Variable not found in NetCDF file
    #[error("Variable '{var}' not found in file")]
    VariableNotFound { var: String },

    /// Longitude axis without any points
    #[error("Longitude axis is empty")]
    EmptyAxis,

    /// Longitude axis spacing differs between neighbouring points
    #[error("Must be a uniformly spaced longitude axis (spacing {expected} at index 0, {found} at index {index})")]
    NonUniformAxis {
        expected: f64,
        found: f64,
        index: usize,
    },

    /// Threshold specification is neither a percentile nor a number
    #[error("Invalid threshold '{spec}': {reason}")]
    InvalidThreshold { spec: String, reason: String },

    /// Input data is not laid out as (time, longitude)
    #[error("Input data must be time, longitude (found {found})")]
    AxisOrder { found: String },

    /// Field, axis and timestamps disagree on their lengths
    #[error("Shape mismatch: {message}")]
    ShapeMismatch { message: String },

    /// Time period filter is malformed or selects nothing
    #[error("Invalid time period: {message}")]
    InvalidTimePeriod { message: String },

    /// CF time axis could not be decoded
    #[error("Cannot decode time axis: {message}")]
    TimeUnits { message: String },

    /// Percentile requested over a sample with no finite values
    #[error("No finite values available to compute the {percentile}th percentile")]
    NoFiniteData { percentile: f64 },

    /// A time-step slice without any longitude points
    #[error("Empty time-step slice")]
    EmptySlice,

    /// Extent run longer than the native longitude domain
    #[error("Extent run of {run_length} points exceeds native domain of {domain_length} points")]
    ExtentExceedsDomain {
        run_length: usize,
        domain_length: usize,
    },

    /// Thread pool configuration error
    #[error("Thread pool error: {0}")]
    ThreadPoolError(String),
}

/// Result type alias for wave_stats operations
pub type Result<T> = std::result::Result<T, WaveStatsError>;
