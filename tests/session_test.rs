// Session wiring: readiness, change events, card width caching, autoplay

use std::cell::Cell;

use lyric_sync_wasm::{
    AutoplayScheduler, FontDescriptor, SessionEvent, SyncConfig, SyncSession,
};

const SONG: &str = r#"[
    {"time": 0.0, "text": "Intro"},
    {"time": 4.0, "text": "Hello darkness"},
    {"time": 8.5, "text": "my old friend"}
]"#;

fn ready_session() -> SyncSession {
    let mut session = SyncSession::new(&SyncConfig::default());
    session.load_lyrics(SONG, Some("song.json")).unwrap();
    session.set_video_source("blob:http://localhost/1234");
    session
}

#[test]
fn test_playback_walkthrough() {
    let mut session = ready_session();
    assert!(session.is_ready());
    assert_eq!(session.active_line().text(), "Intro");

    let mut changes = Vec::new();
    let mut t = 0.0;
    while t < 12.0 {
        for event in session.set_position(t) {
            if let SessionEvent::ActiveLineChanged { text, .. } = event {
                changes.push(text);
            }
        }
        t += 0.25;
    }
    assert_eq!(changes, vec!["Hello darkness", "my old friend"]);

    // Seeking back re-emits the earlier line
    let events = session.seek(1.0);
    assert_eq!(
        events,
        vec![SessionEvent::ActiveLineChanged { index: Some(0), text: "Intro".to_string() }]
    );
}

#[test]
fn test_clearing_video_becomes_unready_once() {
    let mut session = ready_session();

    let events = session.clear_video_source();
    assert!(events.contains(&SessionEvent::BecameUnready));
    assert!(session.clear_video_source().iter().all(|e| !e.is_ready_transition()));
}

#[test]
fn test_replacing_lyrics_updates_active_line() {
    let mut session = ready_session();
    session.set_position(5.0);
    assert_eq!(session.active_line().text(), "Hello darkness");

    let events = session
        .load_lyrics(r#"[{"time":1,"text":"new song"}]"#, Some("other.json"))
        .unwrap();
    assert_eq!(
        events,
        vec![SessionEvent::ActiveLineChanged { index: Some(0), text: "new song".to_string() }]
    );
    assert_eq!(session.lyric_file_name(), Some("other.json"));
}

#[test]
fn test_card_width_measured_only_on_text_change() {
    let mut session = ready_session();
    let calls = Cell::new(0);
    let measurer = |text: &str, _: &FontDescriptor| {
        calls.set(calls.get() + 1);
        text.chars().count() as f64 * 20.0
    };

    let mut t = 0.0;
    while t < 12.0 {
        session.set_position(t);
        session.card_width(Some(&measurer));
        t += 0.1;
    }
    assert_eq!(calls.get(), 3);

    // "my old friend" = 13 chars * 20 + 22 + 20
    assert_eq!(session.card_width(Some(&measurer)), 302);
}

#[test]
fn test_config_change_invalidates_card_width() {
    let mut session = ready_session();
    let measurer = |_: &str, _: &FontDescriptor| 100.0;
    assert_eq!(session.card_width(Some(&measurer)), 142);

    let config = SyncConfig::from_json(r#"{"card": {"horizontalPadding": 0, "buffer": 0, "maxWidth": 90}}"#)
        .unwrap();
    session.set_config(&config);
    assert_eq!(session.card_width(Some(&measurer)), 90);
}

#[test]
fn test_autoplay_follows_ready_transitions() {
    let mut session = SyncSession::default();
    let mut autoplay = AutoplayScheduler::new(Some(300.0));

    for event in session.load_lyrics(SONG, None).unwrap() {
        autoplay.observe(&event, 0.0);
    }
    assert!(!autoplay.is_pending());

    for event in session.set_video_source("blob:a") {
        autoplay.observe(&event, 100.0);
    }
    assert!(autoplay.is_pending());

    // Lyrics reloaded while ready: no new transition, deadline unchanged
    for event in session.load_lyrics(SONG, None).unwrap() {
        autoplay.observe(&event, 250.0);
    }
    assert!(!autoplay.poll(399.0));
    assert!(autoplay.poll(400.0));
    assert!(!autoplay.poll(500.0));
}

#[test]
fn test_manual_play_then_pause_cancels_autoplay() {
    let mut session = SyncSession::default();
    let mut autoplay = AutoplayScheduler::new(Some(300.0));

    session.load_lyrics(SONG, None).unwrap();
    for event in session.set_video_source("blob:a") {
        autoplay.observe(&event, 0.0);
    }
    assert!(autoplay.is_pending());

    for event in session.toggle_playing() {
        autoplay.observe(&event, 50.0);
    }
    for event in session.toggle_playing() {
        autoplay.observe(&event, 100.0);
    }

    assert!(!session.is_playing());
    assert!(!autoplay.poll(1000.0));
}
