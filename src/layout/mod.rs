//! Card layout
//!
//! Sizing of the lyric card that displays the active line.

pub mod card;
pub mod config;

pub use card::{CardSizer, CardWidthCache, TextMeasurer};
pub use config::{CardConfig, FontDescriptor, MaxWidth};
