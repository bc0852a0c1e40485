//! Per-time-step statistics for wave envelope data
//!
//! # Organization
//!
//! This module is organized into submodules:
//! - [`amplitude`]: Mean envelope amplitude across the zonal domain
//! - [`extent`]: Longest contiguous band above a cutoff on a circular longitude axis
//! - [`percentile`]: Linearly interpolated percentiles used for threshold resolution

pub mod amplitude;
pub mod extent;
pub mod percentile;

// Re-export the main types and functions for convenience
pub use amplitude::mean_amplitude;
pub use extent::{find_extent, ExtentResult};
pub use percentile::percentile;
