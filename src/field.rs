//! Hovmoller wave field storage
//!
//! A [`WaveField`] holds envelope values indexed by (time step, longitude index)
//! together with its longitude axis and one timestamp per time step.
//! [`DoubledField`] is the read-only, longitude-doubled copy used to let an
//! extent run cross the seam between the last and first longitude.

use crate::axis::LongitudeAxis;
use crate::errors::{Result, WaveStatsError};
use chrono::NaiveDateTime;
use ndarray::{concatenate, Array2, ArrayD, ArrayView1, ArrayView2, Axis, Ix2};

const TIME_NAMES: [&str; 4] = ["time", "t", "Time", "TIME"];
const LONGITUDE_NAMES: [&str; 5] = ["lon", "longitude", "x", "Longitude", "LONGITUDE"];

/// Whether a dimension name denotes the time axis
#[must_use]
pub fn is_time_dimension(name: &str) -> bool {
    TIME_NAMES.contains(&name)
}

/// Whether a dimension name denotes the longitude axis
#[must_use]
pub fn is_longitude_dimension(name: &str) -> bool {
    LONGITUDE_NAMES.contains(&name) || name.starts_with("lon")
}

/// Checks that `dim_names` describes a (time, longitude) layout.
///
/// # Errors
///
/// Returns [`WaveStatsError::AxisOrder`] for any other order or rank.
pub fn check_axis_order(dim_names: &[String]) -> Result<()> {
    match dim_names {
        [time, lon] if is_time_dimension(time) && is_longitude_dimension(lon) => Ok(()),
        _ => Err(WaveStatsError::AxisOrder {
            found: format!("({})", dim_names.join(", ")),
        }),
    }
}

/// Envelope values laid out as (time, longitude)
#[derive(Debug, Clone)]
pub struct WaveField {
    data: Array2<f64>,
    longitudes: LongitudeAxis,
    timestamps: Vec<NaiveDateTime>,
}

impl WaveField {
    /// Create a field from a (time, longitude) array.
    ///
    /// # Errors
    ///
    /// Returns [`WaveStatsError::ShapeMismatch`] if the number of columns differs
    /// from the axis length or the number of rows differs from the number of
    /// timestamps.
    pub fn new(
        data: Array2<f64>,
        longitudes: LongitudeAxis,
        timestamps: Vec<NaiveDateTime>,
    ) -> Result<Self> {
        let (n_time, n_lon) = data.dim();
        if n_lon != longitudes.len() {
            return Err(WaveStatsError::ShapeMismatch {
                message: format!(
                    "field has {n_lon} longitude points but the axis has {}",
                    longitudes.len()
                ),
            });
        }
        if n_time != timestamps.len() {
            return Err(WaveStatsError::ShapeMismatch {
                message: format!(
                    "field has {n_time} time steps but {} timestamps were supplied",
                    timestamps.len()
                ),
            });
        }

        Ok(Self {
            data,
            longitudes,
            timestamps,
        })
    }

    /// Create a field from a dynamically shaped array and its dimension names.
    ///
    /// # Errors
    ///
    /// Returns [`WaveStatsError::AxisOrder`] unless the dimensions are
    /// (time, longitude), plus any error from [`WaveField::new`].
    pub fn from_dyn(
        data: ArrayD<f64>,
        dim_names: &[String],
        longitudes: LongitudeAxis,
        timestamps: Vec<NaiveDateTime>,
    ) -> Result<Self> {
        check_axis_order(dim_names)?;
        let data = data.into_dimensionality::<Ix2>()?;
        Self::new(data, longitudes, timestamps)
    }

    #[must_use]
    pub fn n_times(&self) -> usize {
        self.data.nrows()
    }

    #[must_use]
    pub fn n_longitudes(&self) -> usize {
        self.data.ncols()
    }

    #[must_use]
    pub fn data(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    /// Native slice for a single time step
    #[must_use]
    pub fn row(&self, step: usize) -> ArrayView1<'_, f64> {
        self.data.row(step)
    }

    #[must_use]
    pub fn longitudes(&self) -> &LongitudeAxis {
        &self.longitudes
    }

    #[must_use]
    pub fn timestamps(&self) -> &[NaiveDateTime] {
        &self.timestamps
    }

    /// Keep only the given time steps, in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`WaveStatsError::InvalidTimePeriod`] if `steps` is empty or
    /// refers to a time step outside the field.
    pub fn select_steps(&self, steps: &[usize]) -> Result<Self> {
        if steps.is_empty() {
            return Err(WaveStatsError::InvalidTimePeriod {
                message: "no time steps selected".to_string(),
            });
        }
        if let Some(&bad) = steps.iter().find(|&&s| s >= self.n_times()) {
            return Err(WaveStatsError::InvalidTimePeriod {
                message: format!("time step {bad} is out of range (0..{})", self.n_times()),
            });
        }

        Ok(Self {
            data: self.data.select(Axis(0), steps),
            longitudes: self.longitudes.clone(),
            timestamps: steps.iter().map(|&s| self.timestamps[s]).collect(),
        })
    }

    /// Build the longitude-doubled view of this field.
    ///
    /// # Errors
    ///
    /// Propagates shape errors from the concatenation.
    pub fn doubled(&self) -> Result<DoubledField> {
        let values = concatenate(Axis(1), &[self.data.view(), self.data.view()])?;
        Ok(DoubledField {
            values,
            longitudes: self.longitudes.doubled(),
            native_len: self.n_longitudes(),
        })
    }
}

/// Field and axis concatenated with themselves along longitude (length 2N)
#[derive(Debug, Clone)]
pub struct DoubledField {
    values: Array2<f64>,
    longitudes: Vec<f64>,
    native_len: usize,
}

impl DoubledField {
    /// Doubled slice for a single time step
    #[must_use]
    pub fn row(&self, step: usize) -> ArrayView1<'_, f64> {
        self.values.row(step)
    }

    #[must_use]
    pub fn longitudes(&self) -> ArrayView1<'_, f64> {
        ArrayView1::from(self.longitudes.as_slice())
    }

    /// Number of native (non-doubled) longitude points
    #[must_use]
    pub fn native_len(&self) -> usize {
        self.native_len
    }
}
