//! Errors raised while loading reports and handing results to a sink.

use std::path::PathBuf;

use thiserror::Error;

/// A TCK report could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The report file could not be read.
    #[error("failed to read report {}", .path.display())]
    Io {
        /// Path of the report.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The report is not JSON or does not have the report shape.
    #[error("invalid report: {source}")]
    Decode {
        /// Underlying decoding error, including line and column.
        #[from]
        source: serde_json::Error,
    },
}

/// A report run failed as a whole.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A report could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// The sink rejected a document.
    #[error(transparent)]
    Sink(anyhow::Error),
}
