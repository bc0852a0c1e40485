//! NetCDF input for Hovmoller wave envelope data
//!
//! Reads a 2-D (time, longitude) variable together with its longitude
//! coordinate and CF-encoded time coordinate, and turns them into a
//! validated [`WaveField`].

use crate::axis::LongitudeAxis;
use crate::data_source::WaveFieldSource;
use crate::errors::{Result, WaveStatsError};
use crate::field::{check_axis_order, WaveField};
use crate::time_filter::TimePeriod;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use ndarray::ArrayD;
use netcdf::{AttributeValue, File, Variable};
use tracing::{debug, info};

const REFERENCE_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Loads a wave field from an open NetCDF file
pub struct NetCDFSource<'a> {
    file: &'a File,
    var_name: String,
    period: Option<TimePeriod>,
}

impl<'a> NetCDFSource<'a> {
    /// Create a new NetCDF source for `var_name`
    pub fn new(file: &'a File, var_name: impl Into<String>) -> Self {
        Self {
            file,
            var_name: var_name.into(),
            period: None,
        }
    }

    /// Restrict the loaded time steps to `period`
    #[must_use]
    pub fn with_period(mut self, period: Option<TimePeriod>) -> Self {
        self.period = period;
        self
    }

    fn variable(&self, name: &str) -> Result<Variable<'a>> {
        self.file
            .variable(name)
            .ok_or_else(|| WaveStatsError::VariableNotFound {
                var: name.to_string(),
            })
    }
}

impl WaveFieldSource for NetCDFSource<'_> {
    fn load(&self) -> Result<WaveField> {
        let var = self.variable(&self.var_name)?;

        let dim_names: Vec<String> = var
            .dimensions()
            .iter()
            .map(|d| d.name().to_string())
            .collect();
        check_axis_order(&dim_names)?;

        let shape: Vec<usize> = var
            .dimensions()
            .iter()
            .map(netcdf::Dimension::len)
            .collect();
        info!(
            variable = %self.var_name,
            ?shape,
            "Loading wave envelope data"
        );

        let longitudes = LongitudeAxis::new(read_values(&self.variable(&dim_names[1])?)?)?;
        let timestamps = read_times(&self.variable(&dim_names[0])?)?;
        let data = ArrayD::from_shape_vec(shape, read_masked(&var)?)?;
        let field = WaveField::from_dyn(data, &dim_names, longitudes, timestamps)?;

        match &self.period {
            Some(period) => period.apply(&field),
            None => Ok(field),
        }
    }
}

/// Reads every value of `var` as f64, converting from f32 storage if needed.
fn read_values(var: &Variable) -> Result<Vec<f64>> {
    match var.get_values::<f64, _>(..) {
        Ok(values) => Ok(values),
        Err(_) => {
            let values: Vec<f32> = var.get_values::<f32, _>(..)?;
            Ok(values.into_iter().map(f64::from).collect())
        }
    }
}

/// Reads `var` applying `scale_factor`/`add_offset` and masking fill values as NaN.
fn read_masked(var: &Variable) -> Result<Vec<f64>> {
    let scale = attr_f64(var, "scale_factor").unwrap_or(1.0);
    let offset = attr_f64(var, "add_offset").unwrap_or(0.0);
    let fill = attr_f64(var, "_FillValue").or_else(|| attr_f64(var, "missing_value"));
    debug!(scale, offset, ?fill, "Unpacking variable");

    Ok(read_values(var)?
        .into_iter()
        .map(|v| {
            if !v.is_finite() || fill.is_some_and(|f| v == f) {
                f64::NAN
            } else {
                v * scale + offset
            }
        })
        .collect())
}

fn attr_f64(var: &Variable, name: &str) -> Option<f64> {
    var.attribute(name)
        .and_then(|attr| match attr.value().ok()? {
            AttributeValue::Double(v) => Some(v),
            AttributeValue::Float(v) => Some(f64::from(v)),
            AttributeValue::Int(v) => Some(f64::from(v)),
            AttributeValue::Short(v) => Some(f64::from(v)),
            _ => None,
        })
}

fn read_times(var: &Variable) -> Result<Vec<NaiveDateTime>> {
    let units = match var.attribute("units").map(|attr| attr.value()) {
        Some(Ok(AttributeValue::Str(units))) => units,
        _ => {
            return Err(WaveStatsError::TimeUnits {
                message: format!("time variable '{}' has no string 'units' attribute", var.name()),
            })
        }
    };
    decode_cf_times(&read_values(var)?, &units)
}

/// Decodes CF time offsets such as `days since 1979-01-01 00:00:00`.
///
/// Supported units are days, hours, minutes and seconds on the standard
/// calendar.
///
/// # Errors
///
/// Returns [`WaveStatsError::TimeUnits`] for unknown units, an unparseable
/// reference date, or offsets that fall outside the representable range.
pub fn decode_cf_times(offsets: &[f64], units: &str) -> Result<Vec<NaiveDateTime>> {
    let invalid = |message: String| WaveStatsError::TimeUnits { message };

    let (unit, reference) = units
        .split_once(" since ")
        .ok_or_else(|| invalid(format!("expected '<unit> since <date>', found '{units}'")))?;

    let seconds_per_unit = match unit.trim().to_ascii_lowercase().as_str() {
        "days" | "day" | "d" => 86_400.0,
        "hours" | "hour" | "hrs" | "hr" | "h" => 3_600.0,
        "minutes" | "minute" | "mins" | "min" => 60.0,
        "seconds" | "second" | "secs" | "sec" | "s" => 1.0,
        other => return Err(invalid(format!("unsupported time unit '{other}'"))),
    };
    let origin = parse_reference(reference)
        .ok_or_else(|| invalid(format!("cannot parse reference date '{reference}'")))?;

    offsets
        .iter()
        .map(|&offset| {
            #[allow(clippy::cast_possible_truncation)]
            let millis = (offset * seconds_per_unit * 1000.0).round() as i64;
            Duration::try_milliseconds(millis)
                .and_then(|delta| origin.checked_add_signed(delta))
                .ok_or_else(|| invalid(format!("time offset {offset} {unit} is out of range")))
        })
        .collect()
}

fn parse_reference(reference: &str) -> Option<NaiveDateTime> {
    let trimmed = reference.trim();
    let trimmed = trimmed
        .strip_suffix("UTC")
        .or_else(|| trimmed.strip_suffix('Z'))
        .unwrap_or(trimmed)
        .trim();

    REFERENCE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
