//! Session state wiring
//!
//! Connects ingestion, lookup, and card sizing for one playback stream and
//! reports derived-value changes as events.

pub mod autoplay;
pub mod events;
pub mod state;

pub use autoplay::AutoplayScheduler;
pub use events::SessionEvent;
pub use state::{SyncSession, ViewState};
