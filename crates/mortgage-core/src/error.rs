use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the mortgage crates.
///
/// A zero monthly rate or period count is not an error: the calculator
/// defines the payment as 0 in that case.
#[derive(Debug, Error)]
pub enum MortgageError {
    #[error("Could not write to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for MortgageError {
    fn from(e: serde_json::Error) -> Self {
        MortgageError::SerializationError(e.to_string())
    }
}
