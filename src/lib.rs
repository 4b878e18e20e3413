//! Lyric Sync WASM Module
//!
//! Synchronized lyric display for a locally selected video: given a lyric
//! document and the video's playback position, resolves the line to show and
//! the width of the card that shows it.

pub mod api;
pub mod config;
pub mod layout;
pub mod models;
pub mod parse;
pub mod renderers;
pub mod session;
pub mod sync;
pub mod utils;

// Re-export commonly used types
pub use config::{ConfigError, SyncConfig};
pub use layout::{CardConfig, CardSizer, FontDescriptor, MaxWidth, TextMeasurer};
pub use models::*;
pub use parse::{ingest, ingest_bytes, IngestError};
pub use session::{AutoplayScheduler, SessionEvent, SyncSession, ViewState};
pub use sync::{resolve, resolve_index};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"[WASM] Logger already initialized".into());
    }

    log::info!("Lyric sync WASM module initialized");
}
