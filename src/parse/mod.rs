//! Parsing module for the lyric sync engine
//!
//! This module contains the ingestion logic for converting
//! a lyric JSON document into a sorted `LyricSet`.

pub mod errors;
pub mod lyric_document;

// Re-export commonly used types
pub use errors::*;
pub use lyric_document::*;
