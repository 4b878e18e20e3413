//! Lyric Sync WASM API
//!
//! This module provides the JavaScript-facing API for the lyric display page.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, validation, error handling, and logging
//! - `types`: Result structures returned to JavaScript
//! - `core`: Session operations over the page-wide sync session

pub mod helpers;
pub mod types;
pub mod core;

pub use core::*;
