//! wave_stats: statistics for wave envelope data in Hovmoller format
//!
//! Computes, for every time step of a (time, longitude) wave envelope field,
//! the mean amplitude and the zonal extent of the widest band of longitudes
//! whose envelope exceeds a threshold. The longitude axis is treated as
//! circular, so a band may straddle the Greenwich meridian.
//!
//! ## Key Features
//!
//! - **Circular Extent Detection**: Longest contiguous run above a cutoff on a periodic axis
//! - **Threshold Policy**: Absolute cutoffs or percentiles of the whole field, resolved once per run
//! - **Parallel Processing**: Independent time steps processed with Rayon, output in time order
//! - **NetCDF Input & CSV Output**: Thin adapters behind the [`data_source`] traits
//!
//! ## Module Organization
//!
//! - [`axis`]: Uniformly spaced longitude axis
//! - [`field`]: (time, longitude) wave field and its longitude-doubled view
//! - [`threshold`]: Threshold specification and resolution
//! - [`statistics`]: Amplitude, extent and percentile computations
//! - [`engine`]: Per-time-step orchestration producing [`StatsRecord`]s
//! - [`time_filter`]: Optional time period selection
//! - [`data_source`]: Input/output collaborator traits
//! - [`netcdf_io`]: NetCDF field loading
//! - [`csv_output`]: CSV statistics writer
//! - [`parallel`]: Parallel processing configuration
//! - [`errors`]: Centralized error handling
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use wave_stats::prelude::*;
//!
//! let file = netcdf::open("envelope.nc").unwrap();
//! let field = NetCDFSource::new(&file, "env").load().unwrap();
//!
//! let engine = WaveStatsEngine::new("75pct".parse().unwrap());
//! let records = engine.run(&field).unwrap();
//!
//! CsvStatsWriter::new("stats.csv").write_records(&records).unwrap();
//! ```

// Core modules
pub mod axis;
pub mod csv_output;
pub mod data_source;
pub mod engine;
pub mod errors;
pub mod field;
pub mod logging;
pub mod netcdf_io;
pub mod parallel;
pub mod statistics;
pub mod threshold;
pub mod time_filter;

// Direct re-exports for the public API
pub use axis::LongitudeAxis;
pub use engine::{StatsRecord, WaveStatsEngine, STATS_COLUMNS};
pub use errors::{Result, WaveStatsError};
pub use field::{DoubledField, WaveField};
pub use statistics::{find_extent, mean_amplitude, ExtentResult};
pub use threshold::Threshold;

// High-level convenience API
pub mod prelude {
    //! Commonly used imports for convenience
    pub use crate::axis::LongitudeAxis;
    pub use crate::csv_output::CsvStatsWriter;
    pub use crate::data_source::{StatsSink, WaveFieldSource};
    pub use crate::engine::{StatsRecord, WaveStatsEngine};
    pub use crate::errors::{Result, WaveStatsError};
    pub use crate::field::WaveField;
    pub use crate::netcdf_io::NetCDFSource;
    pub use crate::parallel::ParallelConfig;
    pub use crate::threshold::Threshold;
    pub use crate::time_filter::{TimePeriod, TimeSelector};
}
