use crate::common::mocks::{CountingListener, MockEngine, RecordingDisplay};
use playkit::config::PlayerConfig;
use playkit::models::PlayIntent;
use playkit::engine::MediaEngine;
use playkit::overlay::{Gesture, TapRegion};
use playkit::session::{PlaybackListener, PlayerDisplay, PlayerSession};
use std::sync::Arc;
use std::time::Duration;

struct Harness {
    engine: Arc<MockEngine>,
    display: Arc<RecordingDisplay>,
    listener: Arc<CountingListener>,
    session: PlayerSession,
}

fn harness(engine: MockEngine) -> Harness {
    let engine = Arc::new(engine);
    let display = Arc::new(RecordingDisplay::new());
    let listener = Arc::new(CountingListener::new());
    let session = PlayerSession::new(
        Arc::clone(&engine) as Arc<dyn MediaEngine>,
        Arc::clone(&display) as Arc<dyn PlayerDisplay>,
        PlayerConfig::default(),
    );
    session.add_listener(Arc::clone(&listener) as Arc<dyn PlaybackListener>);
    Harness {
        engine,
        display,
        listener,
        session,
    }
}

/// Let spawned timer tasks run their next due ticks on the paused clock.
async fn settle(d: Duration) {
    tokio::time::sleep(d).await;
}

#[tokio::test(start_paused = true)]
async fn test_load_starts_playback_from_a_blank_slate() {
    let h = harness(MockEngine::new().with_duration(3600.0));

    h.session.load("movie.mp4").await.unwrap();
    settle(Duration::from_millis(50)).await;

    let commands = h.engine.commands();
    assert_eq!(commands[0], "load:movie.mp4");
    assert_eq!(commands[1], "play");

    let state = h.session.state();
    assert_eq!(state.intent, PlayIntent::Playing);
    assert_eq!(state.total_duration_secs, 3600);

    // The display saw the zeroed slate before the first poll filled it in.
    assert_eq!(h.display.events()[0], "position:0:00:00");
    assert!(h.display.event_count("playing:true") >= 1);
    assert!(h.listener.progress_count() >= 1);

    h.session.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_toggle_pauses_and_resumes() {
    let h = harness(MockEngine::new().with_duration(3600.0));
    h.session.load("movie.mp4").await.unwrap();
    settle(Duration::from_millis(50)).await;

    h.session.toggle_play_pause().await.unwrap();
    assert_eq!(h.session.state().intent, PlayIntent::Paused);
    assert_eq!(h.engine.command_count("pause"), 1);
    assert!(h.display.event_count("playing:false") >= 1);
    assert!(!h.session.tracker().is_polling());

    let progress_while_paused = h.listener.progress_count();
    settle(Duration::from_secs(2)).await;
    assert_eq!(h.listener.progress_count(), progress_while_paused);

    h.session.toggle_play_pause().await.unwrap();
    assert_eq!(h.session.state().intent, PlayIntent::Playing);
    assert!(h.session.tracker().is_polling());

    h.session.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_restarting_completed_item_rewinds_first() {
    let h = harness(MockEngine::new().with_duration(120.0).with_position(120.0));
    h.session.load("movie.mp4").await.unwrap();
    settle(Duration::from_millis(50)).await;

    assert_eq!(h.session.state().intent, PlayIntent::Complete);
    assert_eq!(h.listener.complete_count(), 1);
    assert!(!h.session.tracker().is_polling());

    h.engine.set_position(0.0);
    h.session.toggle_play_pause().await.unwrap();

    let commands = h.engine.commands();
    let seek_at = commands.iter().position(|c| c == "seek:0").unwrap();
    assert_eq!(commands[seek_at + 1], "play");
    assert_eq!(h.session.state().intent, PlayIntent::Playing);
    assert_eq!(h.session.state().current_position_secs, 0);

    h.session.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_overlay_hides_after_idle_playback_and_tap_reshows() {
    let h = harness(MockEngine::new().with_duration(3600.0));
    h.session.load("movie.mp4").await.unwrap();
    settle(Duration::from_millis(50)).await;
    assert!(h.session.overlay_visible());

    // Five one-second countdown ticks of uninterrupted playback.
    settle(Duration::from_millis(5500)).await;
    assert!(!h.session.overlay_visible());
    assert_eq!(h.display.event_count("hide_chrome"), 1);

    // A background single tap resolves after the double-tap window.
    assert_eq!(h.session.tap(TapRegion::Background), None);
    let shows_before = h.display.event_count("show_chrome");
    settle(Duration::from_millis(300)).await;
    assert!(h.session.overlay_visible());
    assert_eq!(h.display.event_count("show_chrome"), shows_before + 1);

    h.session.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_overlay_stays_visible_while_paused() {
    let h = harness(MockEngine::new().with_duration(3600.0));
    h.session.load("movie.mp4").await.unwrap();
    settle(Duration::from_millis(50)).await;

    h.session.pause().await.unwrap();
    settle(Duration::from_secs(10)).await;
    assert!(h.session.overlay_visible());
    assert_eq!(h.display.event_count("hide_chrome"), 0);

    h.session.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_double_tap_suppresses_single_tap_action() {
    let h = harness(MockEngine::new().with_duration(3600.0));
    h.session.load("movie.mp4").await.unwrap();
    settle(Duration::from_millis(50)).await;

    assert_eq!(h.session.tap(TapRegion::Background), None);
    settle(Duration::from_millis(100)).await;
    assert_eq!(
        h.session.tap(TapRegion::Background),
        Some(Gesture::DoubleTap)
    );
    assert_eq!(h.listener.double_tap_count(), 1);

    // The held single tap was cancelled; no extra chrome show fires later.
    let shows_before = h.display.event_count("show_chrome");
    settle(Duration::from_millis(500)).await;
    assert_eq!(h.display.event_count("show_chrome"), shows_before);

    h.session.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_taps_on_controls_are_ignored() {
    let h = harness(MockEngine::new().with_duration(3600.0));
    h.session.load("movie.mp4").await.unwrap();
    settle(Duration::from_millis(50)).await;

    let shows_before = h.display.event_count("show_chrome");
    assert_eq!(h.session.tap(TapRegion::Controls), None);
    settle(Duration::from_millis(500)).await;
    assert_eq!(h.display.event_count("show_chrome"), shows_before);

    h.session.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_engine_failure_reaches_display_and_listeners() {
    let h = harness(MockEngine::new().with_duration(3600.0));
    h.session.load("movie.mp4").await.unwrap();
    settle(Duration::from_millis(50)).await;

    h.engine.set_status(playkit::engine::EngineStatus::Failed);
    settle(Duration::from_secs(1)).await;

    assert_eq!(h.session.state().intent, PlayIntent::Failed);
    assert_eq!(h.listener.failure_count(), 1);
    assert!(h.display.last_event_starting_with("failure:").is_some());
    assert!(!h.session.tracker().is_polling());

    h.session.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_seek_and_chrome_passthrough() {
    let h = harness(MockEngine::new().with_duration(3600.0));
    h.session.load("movie.mp4").await.unwrap();

    h.session.seek(90).await.unwrap();
    assert_eq!(h.engine.command_count("seek:90"), 1);

    h.session.set_title("Big Buck Bunny");
    assert_eq!(h.display.event_count("title:Big Buck Bunny"), 1);

    assert!(h.session.toggle_fullscreen());
    assert!(h.session.is_fullscreen());
    assert!(!h.session.toggle_fullscreen());
    assert_eq!(h.display.event_count("fullscreen:true"), 1);
    assert_eq!(h.display.event_count("fullscreen:false"), 1);

    h.session.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_is_idempotent_and_stops_timers() {
    crate::common::init_test_logging();

    let h = harness(MockEngine::new().with_duration(3600.0));
    h.session.load("movie.mp4").await.unwrap();
    settle(Duration::from_millis(50)).await;

    h.session.shutdown().await;
    h.session.shutdown().await;

    let events_before = h.display.events().len();
    settle(Duration::from_secs(5)).await;
    assert_eq!(h.display.events().len(), events_before);
}
