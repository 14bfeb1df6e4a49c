//! Exporter errors

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors raised while writing result streams
#[derive(Debug, Error)]
pub enum ExportError {
    /// Output file could not be created or written
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// CSV writer error
    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    /// Output extension is neither `.csv` nor `.json`
    #[error("Unsupported output format for {0}: expected .csv or .json")]
    UnsupportedFormat(PathBuf),
}

impl From<io::Error> for ExportError {
    fn from(source: io::Error) -> Self {
        ExportError::Io {
            path: PathBuf::new(),
            source,
        }
    }
}
