// src/error.rs

use std::io;
use thiserror::Error;

/// Result type for log parsing, reconciliation and trajectory output.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

#[derive(Error, Debug)]
pub enum AnalysisError {
    /// A column required by the analysis is absent from the CSV header.
    #[error("missing expected CSV column '{0}'")]
    MissingColumn(String),

    /// Per-axis input arrays that must be sample-aligned have different lengths.
    #[error("{what} length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("log contains no samples")]
    EmptyLog,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
