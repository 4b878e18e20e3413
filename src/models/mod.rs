//! Models module for the lyric sync engine
//!
//! This module contains the data models shared by ingestion,
//! lookup, and session state.

pub mod lyric;
pub mod active_line;

// Re-export commonly used types
pub use lyric::*;
pub use active_line::*;
