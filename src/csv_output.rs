//! Comma-separated output of wave statistics
//!
//! The file starts with a `#` history line, followed by the column header
//! `date,amp-mean,start-lon,end-lon,extent` and one row per time step.

use crate::data_source::StatsSink;
use crate::engine::{StatsRecord, STATS_COLUMNS};
use crate::errors::Result;
use chrono::Utc;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Date format used in the `date` column
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Writes statistics records to a CSV file
pub struct CsvStatsWriter {
    output_path: PathBuf,
    command_line: Option<String>,
}

impl CsvStatsWriter {
    /// Create a new CSV writer targeting `output_path`
    pub fn new(output_path: impl AsRef<Path>) -> Self {
        Self {
            output_path: output_path.as_ref().to_path_buf(),
            command_line: None,
        }
    }

    /// Record the invoking command line in the history line
    #[must_use]
    pub fn with_command_line(mut self, command_line: impl Into<String>) -> Self {
        self.command_line = Some(command_line.into());
        self
    }

    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn history(&self) -> String {
        let created = format!("Created by wave_stats on {}", Utc::now().to_rfc3339());
        match &self.command_line {
            Some(command) => format!("{created}: {command}"),
            None => created,
        }
    }
}

/// Formats one record as a CSV row (without line terminator).
#[must_use]
pub fn format_record(record: &StatsRecord) -> String {
    let mut row = record.timestamp.format(DATE_FORMAT).to_string();
    for value in record.values() {
        row.push(',');
        row.push_str(&value.to_string());
    }
    row
}

impl StatsSink for CsvStatsWriter {
    fn write_records(&mut self, records: &[StatsRecord]) -> Result<()> {
        if self.output_path.exists() {
            fs::remove_file(&self.output_path)?;
        }

        let mut out = BufWriter::new(File::create(&self.output_path)?);
        writeln!(out, "# {}", self.history())?;
        writeln!(out, "{}", STATS_COLUMNS.join(","))?;
        for record in records {
            writeln!(out, "{}", format_record(record))?;
        }
        out.flush()?;

        info!(
            rows = records.len(),
            path = %self.output_path.display(),
            "Wrote statistics"
        );
        Ok(())
    }
}
