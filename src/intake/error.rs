use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("Station file '{0}' does not exist")]
    FileNotFound(PathBuf),

    #[error("Failed to read station CSV '{path}'")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("Station CSV '{path}' has no '{column}' column (expected one of: {candidates})")]
    MissingColumn {
        path: PathBuf,
        column: String,
        candidates: String,
    },

    #[error("Failed reading column '{column}' of '{path}' as text")]
    ColumnAsText {
        path: PathBuf,
        column: String,
        #[source]
        source: PolarsError,
    },
}
