use approx::assert_relative_eq;
use ndarray::{aview1, Array2};
use netcdf::{create, open};
use std::fs;
use std::path::Path;
use tempfile::tempdir;
use wave_stats::prelude::*;

const N_LON: usize = 36;

/// Writes a Hovmoller file with daily time steps and a 10 degree global axis.
fn create_hovmoller_file(
    path: &Path,
    dims: [&str; 2],
    lons: &[f64],
    data: &Array2<f64>,
) -> std::result::Result<(), netcdf::Error> {
    let n_time = data.nrows();
    let times: Vec<f64> = (0..n_time).map(|i| i as f64).collect();

    let mut file = create(path)?;
    file.add_dimension("time", n_time)?;
    file.add_dimension("lon", lons.len())?;

    {
        let mut time_var = file.add_variable::<f64>("time", &["time"])?;
        time_var.put_attribute("units", "days since 2000-01-01 00:00:00")?;
        time_var.put_attribute("calendar", "standard")?;
        time_var.put(aview1(&times), ..)?;
    }
    {
        let mut lon_var = file.add_variable::<f64>("lon", &["lon"])?;
        lon_var.put_attribute("units", "degrees_east")?;
        lon_var.put(aview1(lons), ..)?;
    }
    {
        let mut env_var = file.add_variable::<f64>("env", &dims)?;
        env_var.put_attribute("long_name", "wave envelope")?;
        if dims[0] == "time" {
            env_var.put(data.view(), ..)?;
        } else {
            let transposed = data.t().as_standard_layout().into_owned();
            env_var.put(transposed.view(), ..)?;
        }
    }
    Ok(())
}

fn envelope() -> Array2<f64> {
    let mut data = Array2::<f64>::zeros((4, N_LON));
    // Band straddling Greenwich: 340, 350, 0, 10
    for i in [34, 35, 0, 1] {
        data[[0, i]] = 8.0;
    }
    // Two equal bands, the first one wins
    for i in [5, 6, 7, 20, 21, 22] {
        data[[1, i]] = 9.0;
    }
    // Nothing above the cutoff
    data.row_mut(2).fill(1.0);
    // Whole domain above the cutoff
    data.row_mut(3).fill(10.0);
    data
}

fn global_axis() -> Vec<f64> {
    (0..N_LON).map(|i| i as f64 * 10.0).collect()
}

#[test]
fn test_netcdf_to_csv_pipeline() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let nc_path = temp_dir.path().join("hov.nc");
    let csv_path = temp_dir.path().join("stats.csv");
    create_hovmoller_file(&nc_path, ["time", "lon"], &global_axis(), &envelope())?;

    let file = open(&nc_path)?;
    let field = NetCDFSource::new(&file, "env").load()?;
    assert_eq!(field.n_times(), 4);
    assert_eq!(field.n_longitudes(), N_LON);
    assert_relative_eq!(field.longitudes().spacing(), 10.0);

    let records = WaveStatsEngine::new("7".parse()?).run(&field)?;
    assert_eq!(records.len(), 4);

    assert_relative_eq!(records[0].start_longitude, 340.0);
    assert_relative_eq!(records[0].end_longitude, 10.0);
    assert_relative_eq!(records[0].extent_degrees, 40.0);
    assert_relative_eq!(records[0].amplitude_mean, 32.0 / 36.0);

    assert_relative_eq!(records[1].start_longitude, 50.0);
    assert_relative_eq!(records[1].end_longitude, 70.0);
    assert_relative_eq!(records[1].extent_degrees, 30.0);

    assert_relative_eq!(records[2].extent_degrees, 0.0);
    assert_relative_eq!(records[2].amplitude_mean, 1.0);

    assert_relative_eq!(records[3].start_longitude, 0.0);
    assert_relative_eq!(records[3].end_longitude, 350.0);
    assert_relative_eq!(records[3].extent_degrees, 180.0);

    CsvStatsWriter::new(&csv_path).write_records(&records)?;
    let contents = fs::read_to_string(&csv_path)?;
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[1], "date,amp-mean,start-lon,end-lon,extent");
    assert!(lines[2].starts_with("2000-01-01,"));
    assert!(lines[2].ends_with(",340,10,40"));
    assert_eq!(lines[4], "2000-01-03,1,0,0,0");
    assert_eq!(lines[5], "2000-01-04,10,0,350,180");

    Ok(())
}

#[test]
fn test_netcdf_time_period_filter() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let nc_path = temp_dir.path().join("hov.nc");
    create_hovmoller_file(&nc_path, ["time", "lon"], &global_axis(), &envelope())?;

    let file = open(&nc_path)?;
    let period = TimePeriod::parse("2000-01-02", "2000-01-04", "2")?;
    let field = NetCDFSource::new(&file, "env")
        .with_period(Some(period))
        .load()?;

    let records = WaveStatsEngine::new(Threshold::Absolute(7.0))
        .with_parallel(false)
        .run(&field)?;
    let dates: Vec<String> = records
        .iter()
        .map(|r| r.timestamp.format("%Y-%m-%d").to_string())
        .collect();
    assert_eq!(dates, vec!["2000-01-02", "2000-01-04"]);
    Ok(())
}

#[test]
fn test_netcdf_rejects_longitude_first_layout() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let nc_path = temp_dir.path().join("hov_lon_time.nc");
    create_hovmoller_file(&nc_path, ["lon", "time"], &global_axis(), &envelope())?;

    let file = open(&nc_path)?;
    match NetCDFSource::new(&file, "env").load() {
        Err(WaveStatsError::AxisOrder { found }) => assert_eq!(found, "(lon, time)"),
        other => panic!("Expected AxisOrder error, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_netcdf_rejects_non_uniform_longitudes() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let nc_path = temp_dir.path().join("hov_irregular.nc");
    let mut lons = global_axis();
    lons[10] = 101.5;
    create_hovmoller_file(&nc_path, ["time", "lon"], &lons, &envelope())?;

    let file = open(&nc_path)?;
    assert!(matches!(
        NetCDFSource::new(&file, "env").load(),
        Err(WaveStatsError::NonUniformAxis { .. })
    ));
    Ok(())
}

#[test]
fn test_netcdf_missing_variable() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let nc_path = temp_dir.path().join("hov.nc");
    create_hovmoller_file(&nc_path, ["time", "lon"], &global_axis(), &envelope())?;

    let file = open(&nc_path)?;
    match NetCDFSource::new(&file, "va").load() {
        Err(WaveStatsError::VariableNotFound { var }) => assert_eq!(var, "va"),
        other => panic!("Expected VariableNotFound error, got {other:?}"),
    }
    Ok(())
}
