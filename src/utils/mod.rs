//! Utility modules for the lyric sync engine

pub mod time_format;

// Re-export commonly used types
pub use time_format::*;
