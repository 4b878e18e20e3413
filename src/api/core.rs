//! WASM API for the lyric sync session
//!
//! The page owns the `<video>` element and the file pickers; it forwards their
//! events here and renders whatever view state comes back. One sync session is
//! kept per page.

use wasm_bindgen::prelude::*;
use std::sync::Mutex;
use lazy_static::lazy_static;

use super::helpers::{deserialize, serialize, validate_time, validation_error};
use super::types::{IngestFailure, UpdateResult};
use crate::config::SyncConfig;
use crate::renderers::with_canvas_measurer;
use crate::session::{AutoplayScheduler, SessionEvent, SyncSession, ViewState};
use crate::utils;
use crate::{wasm_error, wasm_info, wasm_log, wasm_warn};

/// Page-wide state behind the API
#[derive(Default)]
struct HostState {
    session: SyncSession,
    autoplay: AutoplayScheduler,
}

impl HostState {
    /// Feed events to the autoplay scheduler and build the JS result
    fn finish_update(&mut self, events: Vec<SessionEvent>) -> UpdateResult {
        let now = js_sys::Date::now();
        for event in &events {
            self.autoplay.observe(event, now);
        }
        UpdateResult {
            events,
            view: self.view(),
            autoplay_pending: self.autoplay.is_pending(),
        }
    }

    fn view(&mut self) -> ViewState {
        let session = &mut self.session;
        with_canvas_measurer(|measurer| session.snapshot(measurer))
    }
}

// WASM-owned session storage (canonical source of truth)
lazy_static! {
    static ref HOST: Mutex<HostState> = Mutex::new(HostState::default());
}

fn with_host<R>(f: impl FnOnce(&mut HostState) -> Result<R, JsValue>) -> Result<R, JsValue> {
    let mut guard = HOST
        .lock()
        .map_err(|e| validation_error(format!("Failed to lock session: {}", e)))?;
    f(&mut guard)
}

// ============================================================================
// Configuration
// ============================================================================

/// Apply layout/autoplay configuration from a JS object
///
/// # Parameters
/// - `config_js`: `{ card?: { font?, horizontalPadding?, buffer?, maxWidth?, fallbackWidth? }, autoplayDelayMs? }`
#[wasm_bindgen(js_name = configure)]
pub fn configure(config_js: JsValue) -> Result<(), JsValue> {
    let config: SyncConfig = deserialize(config_js, "Config deserialization error")?;
    apply_config(config)
}

/// Apply configuration from a JSON string
#[wasm_bindgen(js_name = configureJson)]
pub fn configure_json(json: &str) -> Result<(), JsValue> {
    let config = SyncConfig::from_json(json).map_err(|e| validation_error(e.to_string()))?;
    apply_config(config)
}

fn apply_config(config: SyncConfig) -> Result<(), JsValue> {
    config.validate().map_err(|e| validation_error(e.to_string()))?;
    wasm_info!(
        "configure: padding={}, buffer={}, maxWidth={:?}, autoplay={:?}",
        config.card.horizontal_padding,
        config.card.buffer,
        config.card.max_width,
        config.autoplay_delay_ms
    );

    with_host(|host| {
        host.session.set_config(&config);
        host.autoplay.set_delay(config.autoplay_delay_ms);
        Ok(())
    })
}

// ============================================================================
// Inputs
// ============================================================================

/// Load a lyric JSON document read from the file picker
///
/// # Returns
/// `UpdateResult` on success. On failure, rejects with `{ kind, message }` and
/// leaves the previously loaded lyrics in place.
#[wasm_bindgen(js_name = loadLyrics)]
pub fn load_lyrics(raw_text: &str, file_name: Option<String>) -> Result<JsValue, JsValue> {
    wasm_info!(
        "loadLyrics called: file={:?}, {} bytes",
        file_name,
        raw_text.len()
    );

    let result = with_host(|host| {
        match host.session.load_lyrics(raw_text, file_name.as_deref()) {
            Ok(events) => Ok(Ok(host.finish_update(events))),
            Err(err) => Ok(Err(err)),
        }
    })?;

    match result {
        Ok(update) => {
            wasm_info!("loadLyrics completed: {} lines", update.view.line_count);
            serialize(&update, "Update serialization error")
        }
        Err(err) => {
            wasm_error!("loadLyrics failed: {}", err);
            let failure = IngestFailure {
                kind: err.kind().to_string(),
                message: err.to_string(),
            };
            Err(serialize(&failure, "Error serialization error")?)
        }
    }
}

/// A video file was picked
///
/// # Parameters
/// - `url`: object URL created for the file; stored as an opaque handle
#[wasm_bindgen(js_name = setVideoSource)]
pub fn set_video_source(url: String) -> Result<JsValue, JsValue> {
    wasm_info!("setVideoSource called");
    let update = with_host(|host| {
        let events = host.session.set_video_source(url);
        Ok(host.finish_update(events))
    })?;
    serialize(&update, "Update serialization error")
}

#[wasm_bindgen(js_name = clearVideoSource)]
pub fn clear_video_source() -> Result<JsValue, JsValue> {
    wasm_info!("clearVideoSource called");
    let update = with_host(|host| {
        let events = host.session.clear_video_source();
        Ok(host.finish_update(events))
    })?;
    serialize(&update, "Update serialization error")
}

/// Forward `timeupdate` (or a per-frame `currentTime` read) from the video
#[wasm_bindgen(js_name = updatePlaybackTime)]
pub fn update_playback_time(seconds: f64) -> Result<JsValue, JsValue> {
    validate_time(seconds, "playback time").map_err(validation_error)?;
    let update = with_host(|host| {
        let events = host.session.set_position(seconds);
        Ok(host.finish_update(events))
    })?;
    serialize(&update, "Update serialization error")
}

/// The user moved the scrubber; the page also sets `video.currentTime`
#[wasm_bindgen(js_name = seek)]
pub fn seek(seconds: f64) -> Result<JsValue, JsValue> {
    validate_time(seconds, "seek time").map_err(validation_error)?;
    wasm_log!("seek called: {}", seconds);
    let update = with_host(|host| {
        let events = host.session.seek(seconds);
        Ok(host.finish_update(events))
    })?;
    serialize(&update, "Update serialization error")
}

/// Forward `loadedmetadata` duration
///
/// Streams report an infinite or NaN duration; those are stored as 0.
#[wasm_bindgen(js_name = setDuration)]
pub fn set_duration(seconds: f64) -> Result<(), JsValue> {
    let seconds = if seconds.is_finite() && seconds >= 0.0 {
        seconds
    } else {
        wasm_warn!("setDuration: unusable duration {}, using 0", seconds);
        0.0
    };
    with_host(|host| {
        host.session.set_duration(seconds);
        Ok(())
    })
}

#[wasm_bindgen(js_name = setPlaying)]
pub fn set_playing(playing: bool) -> Result<JsValue, JsValue> {
    let update = with_host(|host| {
        let events = host.session.set_playing(playing);
        Ok(host.finish_update(events))
    })?;
    serialize(&update, "Update serialization error")
}

/// Flip play/pause
///
/// # Returns
/// `UpdateResult`; the page calls `video.play()` / `video.pause()` to match
/// `view.isPlaying`. A manual toggle cancels any pending autoplay.
#[wasm_bindgen(js_name = togglePlay)]
pub fn toggle_play() -> Result<JsValue, JsValue> {
    let update = with_host(|host| {
        let events = host.session.toggle_playing();
        Ok(host.finish_update(events))
    })?;
    serialize(&update, "Update serialization error")
}

// ============================================================================
// Derived values
// ============================================================================

#[wasm_bindgen(js_name = getViewState)]
pub fn get_view_state() -> Result<JsValue, JsValue> {
    let view = with_host(|host| Ok(host.view()))?;
    serialize(&view, "View serialization error")
}

#[wasm_bindgen(js_name = isReady)]
pub fn is_ready() -> Result<bool, JsValue> {
    with_host(|host| Ok(host.session.is_ready()))
}

#[wasm_bindgen(js_name = getActiveLine)]
pub fn get_active_line() -> Result<String, JsValue> {
    with_host(|host| Ok(host.session.active_line().text().to_string()))
}

/// Card width for arbitrary text with the current configuration (uncached)
#[wasm_bindgen(js_name = measureCardWidth)]
pub fn measure_card_width(text: &str) -> Result<u32, JsValue> {
    with_host(|host| {
        let sizer = host.session.sizer();
        Ok(with_canvas_measurer(|measurer| sizer.measure(text, measurer)))
    })
}

/// Check the autoplay deadline; call from `requestAnimationFrame`
///
/// # Returns
/// `true` once when playback should start. The session is marked playing; the
/// page calls `video.play()`.
#[wasm_bindgen(js_name = pollAutoplay)]
pub fn poll_autoplay() -> Result<bool, JsValue> {
    with_host(|host| {
        if !host.autoplay.poll(js_sys::Date::now()) {
            return Ok(false);
        }
        if !host.session.is_ready() {
            return Ok(false);
        }
        wasm_info!("Autoplay starting playback");
        let now = js_sys::Date::now();
        for event in host.session.set_playing(true) {
            host.autoplay.observe(&event, now);
        }
        Ok(true)
    })
}

/// The loaded lyrics as a sorted JSON document
#[wasm_bindgen(js_name = exportLyrics)]
pub fn export_lyrics() -> Result<String, JsValue> {
    with_host(|host| {
        host.session
            .lyrics()
            .to_json()
            .map_err(|e| validation_error(format!("Lyric serialization error: {}", e)))
    })
}

/// `m:ss` label for the time display
#[wasm_bindgen(js_name = formatTime)]
pub fn format_time(seconds: f64) -> String {
    utils::format_time(seconds)
}
