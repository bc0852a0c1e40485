//! Entry point for calc_wave_stats.
//! Handles CLI parsing, loads the wave envelope from NetCDF, computes the
//! per-time-step statistics and writes them to CSV.

use clap::Parser;
use tracing::info;
use wave_stats::logging::init_logging;
use wave_stats::prelude::*;

mod cli;

use cli::Args;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args = Args::parse();
    init_logging(args.verbose);

    println!(
        r#"
------------------------------------------------------------------
              Wave envelope statistics (time, longitude)
------------------------------------------------------------------
        "#
    );
    println!("Input file:  {}", args.infile.display());
    println!("Output file: {}", args.outfile.display());

    // Validate configuration before touching any data
    let period = args.time_period()?;
    let parallel = ParallelConfig::new(args.threads);
    parallel.setup_global_pool()?;

    let file = netcdf::open(&args.infile)?;
    info!(path = %args.infile.display(), "Opened NetCDF file");

    let field = NetCDFSource::new(&file, &args.var)
        .with_period(period)
        .load()?;

    let records = WaveStatsEngine::new(args.threshold)
        .with_parallel(parallel.is_parallel())
        .run(&field)?;

    let command_line = std::env::args().collect::<Vec<_>>().join(" ");
    let mut writer = CsvStatsWriter::new(&args.outfile).with_command_line(command_line);
    writer.write_records(&records)?;

    println!("✅ Saved {} records to {}", records.len(), args.outfile.display());
    Ok(())
}
