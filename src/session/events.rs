//! Change notifications emitted by session mutators

use serde::{Deserialize, Serialize};

/// A derived value changed as the result of a session update
///
/// Ready transitions are edge-triggered: `BecameReady` is only emitted when the
/// session was not ready before the update, never on every update while ready.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SessionEvent {
    /// Video present and lyrics non-empty, and it was not so before
    BecameReady,

    /// Readiness was lost (video cleared or lyrics replaced by an empty set)
    BecameUnready,

    /// The displayed line changed
    #[serde(rename_all = "camelCase")]
    ActiveLineChanged {
        /// Index into the sorted lyric set; `None` for the placeholder
        index: Option<usize>,
        text: String,
    },

    /// Play/pause state changed
    PlayingChanged { playing: bool },
}

impl SessionEvent {
    pub fn is_ready_transition(&self) -> bool {
        matches!(self, SessionEvent::BecameReady | SessionEvent::BecameUnready)
    }
}
