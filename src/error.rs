//! Error types for loading and analysing track record exports.
//!
//! Library code returns [`TrackRecordError`]; the binary wraps it with
//! `anyhow` context for user-facing messages.

use std::path::PathBuf;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, TrackRecordError>;

#[derive(Debug, thiserror::Error)]
pub enum TrackRecordError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Source file could not be opened
    #[error("Cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A column named by the column map is absent from the header row
    #[error("Column '{column}' not found in header")]
    MissingColumn { column: String },

    #[error("Line {line}: invalid year '{value}'")]
    InvalidYear { line: usize, value: String },

    #[error("Line {line}: unrecognised date '{value}'")]
    InvalidDate { line: usize, value: String },

    #[error("Line {line}: invalid citation count '{value}'")]
    InvalidCitationCount { line: usize, value: String },

    /// Author field does not follow the configured layout
    #[error("Line {line}: malformed author list '{value}' ({reason})")]
    MalformedAuthors {
        line: usize,
        value: String,
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Chart could not be drawn from the given series
    #[error("Chart error: {0}")]
    Chart(String),

    /// Nothing to chart: no record has a year
    #[error("No dated records to plot")]
    EmptyDataset,
}
