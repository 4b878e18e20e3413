//! Error types for lyric document ingestion
//!
//! Ingestion is all-or-nothing: either error leaves any previously loaded
//! lyric set in place.

use thiserror::Error;

/// Lyric document ingestion failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    /// Input is not a well-formed JSON document
    #[error("Malformed lyric document: {0}")]
    MalformedDocument(String),

    /// Input parsed, but is not an array of `{ time: number, text: string }` objects
    #[error("Invalid lyric document shape: {0}")]
    InvalidShape(String),
}

impl IngestError {
    /// Short machine-readable kind, used by the JavaScript side to pick a message
    pub fn kind(&self) -> &'static str {
        match self {
            IngestError::MalformedDocument(_) => "malformedDocument",
            IngestError::InvalidShape(_) => "invalidShape",
        }
    }
}
