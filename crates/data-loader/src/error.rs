//! Error types for the data-loader crate.
//!
//! Every variant here means the dataset is unavailable: the session cannot
//! start without it, so callers treat all of them as fatal before any prompt
//! is shown.

use thiserror::Error;

/// Errors that can occur while loading the movie dataset
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// Dataset file does not exist at the configured path
    #[error("Dataset not found: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while opening or reading the file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The file is not well-formed CSV (bad quoting, ragged rows, invalid UTF-8)
    #[error("Malformed dataset at line {line}: {reason}")]
    Malformed { line: u64, reason: String },

    /// A column the pipeline cannot work without is missing from the header
    #[error("Dataset is missing required column: {column}")]
    MissingColumn { column: &'static str },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;

impl From<csv::Error> for DataLoadError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|pos| pos.line()).unwrap_or(0);
        let reason = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io) => DataLoadError::IoError(io),
            _ => DataLoadError::Malformed { line, reason },
        }
    }
}
