//! Sync session state
//!
//! `SyncSession` holds the inputs of one playback stream (lyrics, video handle,
//! playback position) and derives everything else from them: the active line,
//! readiness, and the card width. Derived values are never stored as
//! independently settable state; the session only remembers what it last
//! reported so that mutators can return change events.

use serde::{Deserialize, Serialize};

use super::events::SessionEvent;
use crate::config::SyncConfig;
use crate::layout::{CardSizer, CardWidthCache, TextMeasurer};
use crate::models::{ActiveLine, LyricSet};
use crate::parse::{ingest, IngestError};
use crate::sync::resolve;
use crate::utils::format_time;

/// Everything the UI needs to render one frame
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub active_line: String,
    pub active_index: Option<usize>,
    pub card_width: u32,
    pub is_ready: bool,
    pub is_playing: bool,
    pub current_time: f64,
    pub duration: f64,
    pub current_time_label: String,
    pub duration_label: String,
    pub lyric_file_name: Option<String>,
    pub line_count: usize,
}

/// Lyric sync state for one playback stream
#[derive(Clone, Debug)]
pub struct SyncSession {
    sizer: CardSizer,
    card_cache: CardWidthCache,

    lyrics: LyricSet,
    lyric_file_name: Option<String>,

    /// Opaque handle to the video (an object URL in the browser)
    video_source: Option<String>,

    position: f64,
    duration: f64,
    playing: bool,

    // Last reported derived values
    reported_ready: bool,
    reported_index: Option<usize>,
    reported_text: String,
}

impl SyncSession {
    pub fn new(config: &SyncConfig) -> Self {
        Self {
            sizer: CardSizer::new(config.card.clone()),
            card_cache: CardWidthCache::new(),
            lyrics: LyricSet::default(),
            lyric_file_name: None,
            video_source: None,
            position: 0.0,
            duration: 0.0,
            playing: false,
            reported_ready: false,
            reported_index: None,
            reported_text: ActiveLine::Pending.text().to_string(),
        }
    }

    /// Replace the card configuration
    pub fn set_config(&mut self, config: &SyncConfig) {
        self.sizer = CardSizer::new(config.card.clone());
        self.card_cache.invalidate();
    }

    // ------------------------------------------------------------------
    // Inputs
    // ------------------------------------------------------------------

    /// Ingest a lyric document and swap it in
    ///
    /// On error nothing changes: the previous lyrics, file name, and active line
    /// stay as they were.
    pub fn load_lyrics(
        &mut self,
        raw_text: &str,
        file_name: Option<&str>,
    ) -> Result<Vec<SessionEvent>, IngestError> {
        let lyrics = ingest(raw_text)?;
        Ok(self.replace_lyrics(lyrics, file_name))
    }

    /// Swap in an already-built lyric set
    pub fn replace_lyrics(&mut self, lyrics: LyricSet, file_name: Option<&str>) -> Vec<SessionEvent> {
        self.lyrics = lyrics;
        self.lyric_file_name = file_name.map(str::to_string);
        self.collect_events()
    }

    /// A new video was picked; playback starts paused
    pub fn set_video_source(&mut self, handle: impl Into<String>) -> Vec<SessionEvent> {
        self.video_source = Some(handle.into());
        let mut events = self.set_playing_flag(false);
        events.extend(self.collect_events());
        events
    }

    pub fn clear_video_source(&mut self) -> Vec<SessionEvent> {
        self.video_source = None;
        let mut events = self.set_playing_flag(false);
        events.extend(self.collect_events());
        events
    }

    /// Playback position pushed by the media element (seconds)
    pub fn set_position(&mut self, seconds: f64) -> Vec<SessionEvent> {
        self.position = seconds;
        self.collect_events()
    }

    /// User moved the scrubber
    pub fn seek(&mut self, seconds: f64) -> Vec<SessionEvent> {
        log::debug!("Seek to {}", seconds);
        self.set_position(seconds)
    }

    /// Media duration from the loaded metadata (seconds)
    pub fn set_duration(&mut self, seconds: f64) {
        self.duration = seconds;
    }

    /// Set play/pause; ignored while no video is loaded
    pub fn set_playing(&mut self, playing: bool) -> Vec<SessionEvent> {
        if playing && self.video_source.is_none() {
            log::warn!("Ignoring play request: no video loaded");
            return Vec::new();
        }
        self.set_playing_flag(playing)
    }

    pub fn toggle_playing(&mut self) -> Vec<SessionEvent> {
        self.set_playing(!self.playing)
    }

    // ------------------------------------------------------------------
    // Derived values
    // ------------------------------------------------------------------

    pub fn active_line(&self) -> ActiveLine<'_> {
        resolve(&self.lyrics, self.position)
    }

    /// Video present and at least one lyric line loaded
    pub fn is_ready(&self) -> bool {
        self.video_source.is_some() && !self.lyrics.is_empty()
    }

    /// Card width for the active line, re-measured only when the text changes
    pub fn card_width(&mut self, measurer: Option<&dyn TextMeasurer>) -> u32 {
        let text = resolve(&self.lyrics, self.position).text();
        self.card_cache.width_for(&self.sizer, text, measurer)
    }

    pub fn snapshot(&mut self, measurer: Option<&dyn TextMeasurer>) -> ViewState {
        let card_width = self.card_width(measurer);
        let active = self.active_line();
        ViewState {
            active_line: active.text().to_string(),
            active_index: active.index(),
            card_width,
            is_ready: self.is_ready(),
            is_playing: self.playing,
            current_time: self.position,
            duration: self.duration,
            current_time_label: format_time(self.position),
            duration_label: format_time(self.duration),
            lyric_file_name: self.lyric_file_name.clone(),
            line_count: self.lyrics.len(),
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn lyrics(&self) -> &LyricSet {
        &self.lyrics
    }

    pub fn lyric_file_name(&self) -> Option<&str> {
        self.lyric_file_name.as_deref()
    }

    pub fn video_source(&self) -> Option<&str> {
        self.video_source.as_deref()
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn sizer(&self) -> &CardSizer {
        &self.sizer
    }

    // ------------------------------------------------------------------
    // Change detection
    // ------------------------------------------------------------------

    fn set_playing_flag(&mut self, playing: bool) -> Vec<SessionEvent> {
        if self.playing == playing {
            return Vec::new();
        }
        self.playing = playing;
        vec![SessionEvent::PlayingChanged { playing }]
    }

    /// Compare derived values against what was last reported
    fn collect_events(&mut self) -> Vec<SessionEvent> {
        let mut events = Vec::new();

        let active = resolve(&self.lyrics, self.position);
        let index = active.index();
        let text = active.text();
        if index != self.reported_index || text != self.reported_text {
            events.push(SessionEvent::ActiveLineChanged {
                index,
                text: text.to_string(),
            });
            self.reported_index = index;
            self.reported_text = text.to_string();
        }

        let ready = self.is_ready();
        if ready != self.reported_ready {
            self.reported_ready = ready;
            log::info!("Ready state changed: {}", ready);
            events.push(if ready {
                SessionEvent::BecameReady
            } else {
                SessionEvent::BecameUnready
            });
        }

        events
    }
}

impl Default for SyncSession {
    fn default() -> Self {
        Self::new(&SyncConfig::default())
    }
}
