//! Reads an INMET station export into [`RawHourlyRow`]s.
//!
//! Every column is read as text: decimal commas and blank cells are the
//! normalizer's business, not the CSV reader's.

use crate::intake::error::IntakeError;
use crate::types::field::HourlyField;
use crate::types::raw_row::RawHourlyRow;
use log::{debug, info};
use polars::prelude::*;
use std::path::{Path, PathBuf};

const DATE_HEADERS: &[&str] = &["Data", "Data Medicao"];
const HOUR_HEADERS: &[&str] = &["Hora (UTC)", "Hora Medicao"];

/// Loads the semicolon separated station file at `path`.
pub fn read_station_csv(path: &Path) -> Result<Vec<RawHourlyRow>, IntakeError> {
    if !path.is_file() {
        return Err(IntakeError::FileNotFound(path.to_path_buf()));
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|parse_options| {
            parse_options
                .with_separator(b';')
                .with_encoding(CsvEncoding::LossyUtf8)
                .with_truncate_ragged_lines(true)
        })
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .map_err(|e| IntakeError::CsvRead {
            path: path.to_path_buf(),
            source: e,
        })?;

    info!("Read {} rows from {}", df.height(), path.display());
    rows_from_frame(&df, path)
}

/// Converts a text frame with station headers into raw rows.
pub(crate) fn rows_from_frame(
    df: &DataFrame,
    path: &Path,
) -> Result<Vec<RawHourlyRow>, IntakeError> {
    let columns = FrameColumns { df, path };

    let dates = columns.text(DATE_HEADERS)?;
    let hours = columns.text(HOUR_HEADERS)?;
    let mut rows: Vec<RawHourlyRow> = dates
        .into_iter()
        .zip(hours)
        .enumerate()
        // Header is line 1.
        .map(|(i, (date, hour))| RawHourlyRow::new(i + 2, date, hour))
        .collect();

    for field in HourlyField::ALL {
        let values = columns.text(field.source_headers())?;
        for (row, value) in rows.iter_mut().zip(values) {
            *row.cell_mut(field) = value;
        }
    }

    Ok(rows)
}

struct FrameColumns<'a> {
    df: &'a DataFrame,
    path: &'a Path,
}

impl FrameColumns<'_> {
    /// Finds the first of `candidates` among the headers, ignoring surrounding
    /// whitespace, and returns its cells as text with nulls as empty strings.
    fn text(&self, candidates: &[&str]) -> Result<Vec<String>, IntakeError> {
        let name = self.find(candidates)?;
        let column_error = |source: PolarsError| IntakeError::ColumnAsText {
            path: self.path.to_path_buf(),
            column: name.to_string(),
            source,
        };

        let column = self
            .df
            .column(name.as_str())
            .and_then(|c| c.cast(&DataType::String))
            .map_err(column_error)?;
        let values = column
            .str()
            .map_err(column_error)?
            .into_iter()
            .map(|cell| cell.unwrap_or_default().to_string())
            .collect();
        Ok(values)
    }

    fn find(&self, candidates: &[&str]) -> Result<PlSmallStr, IntakeError> {
        let headers = self.df.get_column_names();
        candidates
            .iter()
            .find_map(|wanted| {
                headers
                    .iter()
                    .find(|header| header.as_str().trim() == *wanted)
                    .map(|header| (*header).clone())
            })
            .inspect(|header| debug!("Using column '{}' for {:?}", header, candidates))
            .ok_or_else(|| IntakeError::MissingColumn {
                path: PathBuf::from(self.path),
                column: candidates[0].to_string(),
                candidates: candidates.join(", "),
            })
    }
}
