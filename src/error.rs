//! Error types for the kreol-truth crate.

use thiserror::Error;

/// Failures that can surface at the analysis boundary.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The cube of the word value does not fit the 128-bit power type.
    #[error("value {value} is too large: its cube overflows 128 bits")]
    PowerOverflow { value: u64 },

    /// Reading from or writing to the console failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The JSON report could not be produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
