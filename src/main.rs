use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use inmet_eto::{export_tables, read_station_csv, Pipeline, StationClock, TableFormat};
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Parquet,
}

impl From<Format> for TableFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Csv => TableFormat::Csv,
            Format::Parquet => TableFormat::Parquet,
        }
    }
}

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Cleans an INMET hourly station export and computes daily ETo
struct Cli {
    /// Semicolon separated station export
    input: PathBuf,

    /// Directory for the hourly, daily and monthly tables
    #[arg(short, long, default_value = "output")]
    out_dir: PathBuf,

    /// Table file format
    #[arg(short, long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Hours subtracted from UTC to get station local time
    #[arg(long, default_value_t = 3)]
    utc_offset: i64,

    /// Extra hours subtracted from local time before taking the day
    #[arg(long, default_value_t = 1)]
    day_shift: i64,

    /// Print statistics and the monthly summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let rows = read_station_csv(&cli.input)
        .with_context(|| format!("Could not load {}", cli.input.display()))?;

    let pipeline = Pipeline::configured()
        .clock(
            StationClock::builder()
                .utc_offset_hours(cli.utc_offset)
                .day_boundary_shift_hours(cli.day_shift)
                .build(),
        )
        .call();
    let output = pipeline.run(&rows);

    let exported = export_tables(&output, &cli.out_dir, cli.format.into())?;

    if cli.json {
        let report = json!({
            "statistics": output.statistics,
            "monthly": output.monthly,
            "ingest": output.report,
            "files": {
                "hourly": exported.hourly,
                "daily": exported.daily,
                "monthly": exported.monthly,
            },
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{}", output.statistics);
    if !output.report.is_clean() {
        println!(
            "Data quality: {} rows dropped, {} unparsable values treated as missing",
            output.report.dropped.len(),
            output.report.invalid_total()
        );
    }
    println!("Hourly table saved to `{}`", exported.hourly.display());
    println!("Daily table saved to `{}`", exported.daily.display());
    println!("Monthly table saved to `{}`", exported.monthly.display());

    Ok(())
}
