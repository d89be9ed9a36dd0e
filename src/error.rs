//! Error types for the ranking extraction library.

use thiserror::Error;

/// Result type alias for ranking operations
pub type Result<T> = std::result::Result<T, RankingError>;

/// Errors that can surface from a pipeline call or an output sink.
///
/// Per-record problems (a bad rank token, a missing name) never show up here:
/// those records are dropped and extraction continues.
#[derive(Error, Debug)]
pub enum RankingError {
    /// The block sequence was empty or every block was blank
    #[error("No source data: the block sequence is empty or blank")]
    NoSourceData,

    /// Options failed validation
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// CSV serialization failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
