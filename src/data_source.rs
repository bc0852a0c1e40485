//! Data source abstraction for loading fields and storing results
//!
//! The statistics engine never touches a file format directly. Inputs arrive
//! through a [`WaveFieldSource`] and results leave through a [`StatsSink`].

use crate::engine::StatsRecord;
use crate::errors::Result;
use crate::field::WaveField;

/// Supplies a validated (time, longitude) wave field
pub trait WaveFieldSource {
    /// Load the field, its longitude axis and timestamps.
    ///
    /// # Errors
    ///
    /// Implementations report missing variables, a non-(time, longitude)
    /// layout, a non-uniform longitude axis and undecodable time axes.
    fn load(&self) -> Result<WaveField>;
}

/// Receives the ordered statistics records of a run
pub trait StatsSink {
    /// Store all records, in the order given.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be written.
    fn write_records(&mut self, records: &[StatsRecord]) -> Result<()>;
}

/// In-memory field source, mainly for callers that build fields themselves
impl WaveFieldSource for WaveField {
    fn load(&self) -> Result<WaveField> {
        Ok(self.clone())
    }
}

/// Collects records in memory
impl StatsSink for Vec<StatsRecord> {
    fn write_records(&mut self, records: &[StatsRecord]) -> Result<()> {
        self.extend_from_slice(records);
        Ok(())
    }
}
