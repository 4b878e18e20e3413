//! Shared types for the WASM API
//!
//! This module contains the result types returned to JavaScript by the
//! session operations.

use crate::session::{SessionEvent, ViewState};

/// Result of a session update
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    /// Derived values that changed with this update
    pub events: Vec<SessionEvent>,
    /// Full view state after the update
    pub view: ViewState,
    /// Whether an autoplay is armed and waiting for `pollAutoplay`
    pub autoplay_pending: bool,
}

/// Ingestion failure, shaped for the page's error alert
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct IngestFailure {
    /// `malformedDocument` or `invalidShape`
    pub kind: String,
    pub message: String,
}
