//! Defines command-line interface options using `clap` for calc_wave_stats.

use clap::Parser;
use std::path::PathBuf;
use wave_stats::threshold::Threshold;
use wave_stats::time_filter::TimePeriod;

/// Calculate statistics for wave envelope data presented in Hovmoller format (time, longitude)
#[derive(Parser, Debug)]
#[command(
    name = "calc_wave_stats",
    version,
    about = "Calculate statistics for wave envelope data presented in Hovmoller format (time, longitude)"
)]
pub struct Args {
    /// Input wave envelope file
    pub infile: PathBuf,

    /// Input wave envelope variable
    pub var: String,

    /// Output file name
    pub outfile: PathBuf,

    /// Time period [default = entire]. SELECTOR is 'none', a season such as 'DJF', or a stride
    #[arg(long, num_args = 3, value_names = ["START_DATE", "END_DATE", "SELECTOR"])]
    pub time: Option<Vec<String>>,

    /// Threshold used in extent calculation. Enter a raw number or a percentile
    #[arg(long, default_value = "75pct", value_parser = parse_threshold)]
    pub threshold: Threshold,

    /// Number of threads to use for parallel processing. Defaults to number of CPU cores.
    #[arg(short = 't', long)]
    pub threads: Option<usize>,

    /// Enable verbose output.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Parsed `--time` option, if given
    pub fn time_period(&self) -> wave_stats::Result<Option<TimePeriod>> {
        match self.time.as_deref() {
            Some([start, end, selector]) => TimePeriod::parse(start, end, selector).map(Some),
            _ => Ok(None),
        }
    }
}

fn parse_threshold(s: &str) -> Result<Threshold, String> {
    s.parse().map_err(|e: wave_stats::WaveStatsError| e.to_string())
}
