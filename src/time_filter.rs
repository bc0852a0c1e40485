//! Time period selection applied before statistics are computed
//!
//! A [`TimePeriod`] bounds the processed time steps by calendar date
//! (inclusive) and optionally keeps only a season or every n-th step.

use crate::errors::{Result, WaveStatsError};
use crate::field::WaveField;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use std::str::FromStr;
use tracing::info;

const MONTH_INITIALS: &str = "JFMAMJJASONDJFMAMJJASOND";

/// Which time steps inside the date bounds are kept
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeSelector {
    /// Every time step
    All,
    /// Only time steps whose month (1-12) is listed
    Season(Vec<u32>),
    /// Every n-th time step, starting with the first one in bounds
    Stride(usize),
}

impl TimeSelector {
    /// Months covered by a season code of consecutive month initials
    fn season_months(code: &str) -> Option<Vec<u32>> {
        if code.len() < 2 || code.len() > 12 {
            return None;
        }
        let start = MONTH_INITIALS.find(code)?;
        #[allow(clippy::cast_possible_truncation)]
        let months = (start..start + code.len())
            .map(|i| (i % 12) as u32 + 1)
            .collect();
        Some(months)
    }
}

impl FromStr for TimeSelector {
    type Err = WaveStatsError;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim();
        if code.eq_ignore_ascii_case("none") || code.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        if let Ok(stride) = code.parse::<usize>() {
            if stride == 0 {
                return Err(WaveStatsError::InvalidTimePeriod {
                    message: "stride must be at least 1".to_string(),
                });
            }
            return Ok(Self::Stride(stride));
        }
        Self::season_months(&code.to_ascii_uppercase())
            .map(Self::Season)
            .ok_or_else(|| WaveStatsError::InvalidTimePeriod {
                message: format!(
                    "'{s}' is neither 'none', a stride, nor a season such as 'DJF'"
                ),
            })
    }
}

/// Inclusive date range plus a selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimePeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub selector: TimeSelector,
}

impl TimePeriod {
    /// # Errors
    ///
    /// Returns [`WaveStatsError::InvalidTimePeriod`] if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate, selector: TimeSelector) -> Result<Self> {
        if start > end {
            return Err(WaveStatsError::InvalidTimePeriod {
                message: format!("start date {start} is after end date {end}"),
            });
        }
        Ok(Self {
            start,
            end,
            selector,
        })
    }

    /// Parses `START END SELECTOR` as given on the command line.
    ///
    /// # Errors
    ///
    /// Returns [`WaveStatsError::InvalidTimePeriod`] for unparseable dates or
    /// selectors, or an inverted range.
    pub fn parse(start: &str, end: &str, selector: &str) -> Result<Self> {
        let parse_date = |s: &str| {
            NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|e| {
                WaveStatsError::InvalidTimePeriod {
                    message: format!("invalid date '{s}': {e}"),
                }
            })
        };
        Self::new(parse_date(start)?, parse_date(end)?, selector.parse()?)
    }

    /// Indices of the time steps selected from `timestamps`.
    #[must_use]
    pub fn select(&self, timestamps: &[NaiveDateTime]) -> Vec<usize> {
        let in_bounds = timestamps.iter().enumerate().filter(|(_, ts)| {
            let date = ts.date();
            date >= self.start && date <= self.end
        });

        match &self.selector {
            TimeSelector::All => in_bounds.map(|(i, _)| i).collect(),
            TimeSelector::Season(months) => in_bounds
                .filter(|(_, ts)| months.contains(&ts.month()))
                .map(|(i, _)| i)
                .collect(),
            TimeSelector::Stride(stride) => in_bounds.step_by(*stride).map(|(i, _)| i).collect(),
        }
    }

    /// Restricts `field` to the selected time steps.
    ///
    /// # Errors
    ///
    /// Returns [`WaveStatsError::InvalidTimePeriod`] if nothing is selected.
    pub fn apply(&self, field: &WaveField) -> Result<WaveField> {
        let steps = self.select(field.timestamps());
        if steps.is_empty() {
            return Err(WaveStatsError::InvalidTimePeriod {
                message: format!(
                    "no time steps between {} and {} match the selection",
                    self.start, self.end
                ),
            });
        }
        info!(
            selected = steps.len(),
            available = field.n_times(),
            "Applied time period filter"
        );
        field.select_steps(&steps)
    }
}
