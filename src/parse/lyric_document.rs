//! Lyric document ingestion
//!
//! Turns the raw text of a lyric JSON file into a sorted `LyricSet`:
//!
//! ```json
//! [
//!   { "time": 12.5, "text": "first line" },
//!   { "time": 3.0,  "text": "intro" }
//! ]
//! ```
//!
//! Syntax errors are reported as `MalformedDocument`; anything that parses but
//! is not an array of `{ time, text }` objects is `InvalidShape`. Extra fields on
//! an entry are ignored. A `time` that is valid JSON but not a usable number of
//! seconds (negative, or outside the `f64` range like `1e400`) is a shape error.
//!
//! Documents are read twice: a syntax-only pass that never converts numbers,
//! then the typed pass. Every failure of the typed pass is a shape failure.

use serde::de::IgnoredAny;
use serde::Deserialize;

use super::errors::IngestError;
use crate::models::{LyricLine, LyricSet};

/// Wire shape of one document entry
#[derive(Deserialize)]
struct RawLine {
    time: f64,
    text: String,
}

/// Parse, validate, and sort a lyric document
pub fn ingest(raw_text: &str) -> Result<LyricSet, IngestError> {
    log::debug!("Ingesting lyric document ({} bytes)", raw_text.len());

    serde_json::from_str::<IgnoredAny>(raw_text).map_err(malformed)?;
    let raw: Vec<RawLine> = serde_json::from_str(raw_text).map_err(invalid_shape)?;
    finish(raw)
}

/// Same as [`ingest`], for raw file bytes
///
/// Bytes that are not valid UTF-8 count as a malformed document.
pub fn ingest_bytes(bytes: &[u8]) -> Result<LyricSet, IngestError> {
    log::debug!("Ingesting lyric document ({} bytes)", bytes.len());

    serde_json::from_slice::<IgnoredAny>(bytes).map_err(malformed)?;
    let raw: Vec<RawLine> = serde_json::from_slice(bytes).map_err(invalid_shape)?;
    finish(raw)
}

fn finish(raw: Vec<RawLine>) -> Result<LyricSet, IngestError> {
    let mut lines = Vec::with_capacity(raw.len());

    for (index, entry) in raw.into_iter().enumerate() {
        if !entry.time.is_finite() || entry.time < 0.0 {
            let err = IngestError::InvalidShape(format!(
                "entry {} has negative or non-finite time {}",
                index, entry.time
            ));
            log::warn!("{}", err);
            return Err(err);
        }
        lines.push(LyricLine {
            time: entry.time,
            text: entry.text,
        });
    }

    let set = LyricSet::from_lines(lines);
    log::info!("Loaded {} lyric lines", set.len());
    Ok(set)
}

fn malformed(err: serde_json::Error) -> IngestError {
    let err = IngestError::MalformedDocument(err.to_string());
    log::warn!("{}", err);
    err
}

fn invalid_shape(err: serde_json::Error) -> IngestError {
    let err = IngestError::InvalidShape(err.to_string());
    log::warn!("{}", err);
    err
}
