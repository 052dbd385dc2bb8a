use crate::export::error::ExportError;
use crate::export::frames::{daily_frame, hourly_frame, monthly_frame};
use crate::pipeline::PipelineOutput;
use log::info;
use polars::prelude::*;
use std::fmt;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// File format for exported tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableFormat {
    /// Semicolon separated, opens directly in spreadsheet tools.
    #[default]
    Csv,
    Parquet,
}

impl TableFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            TableFormat::Csv => "csv",
            TableFormat::Parquet => "parquet",
        }
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Paths of the files written by [`export_tables`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedTables {
    pub hourly: PathBuf,
    pub daily: PathBuf,
    pub monthly: PathBuf,
}

/// Writes one frame to `path`.
pub fn write_table(
    df: &mut DataFrame,
    path: &Path,
    format: TableFormat,
) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|e| ExportError::FileCreation(path.to_path_buf(), e))?;
    match format {
        TableFormat::Csv => CsvWriter::new(file)
            .include_header(true)
            .with_separator(b';')
            .finish(df)
            .map_err(|e| ExportError::Write(path.to_path_buf(), e)),
        TableFormat::Parquet => ParquetWriter::new(file)
            .with_compression(ParquetCompression::Snappy)
            .finish(df)
            .map(|_| ())
            .map_err(|e| ExportError::Write(path.to_path_buf(), e)),
    }
}

/// Writes the hourly, daily and monthly tables into `dir`, creating it if needed.
pub fn export_tables(
    output: &PipelineOutput,
    dir: &Path,
    format: TableFormat,
) -> Result<ExportedTables, ExportError> {
    fs::create_dir_all(dir).map_err(|e| ExportError::OutputDirCreation(dir.to_path_buf(), e))?;

    let build_error =
        |table: &'static str| move |source: PolarsError| ExportError::FrameBuild { table, source };
    let mut hourly = hourly_frame(&output.hourly).map_err(build_error("hourly"))?;
    let mut daily = daily_frame(&output.daily).map_err(build_error("daily"))?;
    let mut monthly = monthly_frame(&output.monthly).map_err(build_error("monthly"))?;

    let exported = ExportedTables {
        hourly: dir.join(format!("hourly.{}", format.extension())),
        daily: dir.join(format!("daily.{}", format.extension())),
        monthly: dir.join(format!("monthly.{}", format.extension())),
    };
    write_table(&mut hourly, &exported.hourly, format)?;
    write_table(&mut daily, &exported.daily, format)?;
    write_table(&mut monthly, &exported.monthly, format)?;

    info!("Exported {} tables to {}", format, dir.display());
    Ok(exported)
}
