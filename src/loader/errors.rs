//! Loader errors

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::model::ModelError;

/// Result type for loader operations
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors raised while reading NEO or close approach files
#[derive(Debug, Error)]
pub enum LoadError {
    /// File could not be opened or read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// CSV structure error
    #[error("Invalid CSV in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// JSON syntax or structure error
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Well-formed JSON with an unexpected shape
    #[error("Malformed approach data in {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    /// A record was read but rejected by the entity model
    #[error("Record {row} in {path}: {source}")]
    Record {
        path: PathBuf,
        row: usize,
        #[source]
        source: ModelError,
    },
}

impl LoadError {
    /// Returns the file the error refers to
    pub fn path(&self) -> &PathBuf {
        match self {
            LoadError::Io { path, .. }
            | LoadError::Csv { path, .. }
            | LoadError::Json { path, .. }
            | LoadError::Malformed { path, .. }
            | LoadError::Record { path, .. } => path,
        }
    }
}
