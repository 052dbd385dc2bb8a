use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to build the {table} table")]
    FrameBuild {
        table: &'static str,
        #[source]
        source: PolarsError,
    },

    #[error("Failed to create output directory '{0}'")]
    OutputDirCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to create output file '{0}'")]
    FileCreation(PathBuf, #[source] std::io::Error),

    #[error("Encoding error writing '{0}'")]
    Write(PathBuf, #[source] PolarsError),
}
