pub mod display;
pub mod tracker;

pub use display::{PlaybackListener, PlayerDisplay};
pub use tracker::{ProgressTracker, TickOutcome};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use anyhow::Result;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

use crate::config::PlayerConfig;
use crate::engine::MediaEngine;
use crate::models::{PlayIntent, PlaybackState};
use crate::overlay::{Gesture, OverlayController, TapDebouncer, TapRegion, VisibilityChange};
use tracker::ListenerSet;

struct TimerTask {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

/// The playback session behind a player widget.
///
/// Owns the injected engine and display, the progress tracker and the
/// overlay controller, and wires user actions (transport buttons, scrubber,
/// taps) between them. One session per widget instance; nothing here is
/// process-global.
pub struct PlayerSession {
    engine: Arc<dyn MediaEngine>,
    display: Arc<dyn PlayerDisplay>,
    config: PlayerConfig,
    tracker: ProgressTracker,
    listeners: ListenerSet,
    overlay: Arc<Mutex<OverlayController>>,
    taps: Arc<Mutex<TapDebouncer>>,
    overlay_task: Mutex<Option<TimerTask>>,
    tap_task: Mutex<Option<TimerTask>>,
    fullscreen: AtomicBool,
}

impl PlayerSession {
    pub fn new(
        engine: Arc<dyn MediaEngine>,
        display: Arc<dyn PlayerDisplay>,
        config: PlayerConfig,
    ) -> Self {
        let listeners: ListenerSet = Arc::new(RwLock::new(Vec::new()));
        let tracker = ProgressTracker::with_listeners(
            Arc::clone(&engine),
            Arc::clone(&display),
            Arc::clone(&listeners),
            config.poll_interval(),
        );
        let overlay = Arc::new(Mutex::new(OverlayController::new(config.overlay_hide_ticks)));
        let taps = Arc::new(Mutex::new(TapDebouncer::new(config.double_tap_window())));

        Self {
            engine,
            display,
            config,
            tracker,
            listeners,
            overlay,
            taps,
            overlay_task: Mutex::new(None),
            tap_task: Mutex::new(None),
            fullscreen: AtomicBool::new(false),
        }
    }

    pub fn add_listener(&self, listener: Arc<dyn PlaybackListener>) {
        self.listeners.write().unwrap().push(listener);
    }

    /// Snapshot of the current playback state.
    pub fn state(&self) -> PlaybackState {
        self.tracker.state()
    }

    pub fn tracker(&self) -> &ProgressTracker {
        &self.tracker
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay.lock().unwrap().is_visible()
    }

    /// Load a new media source and start playing it.
    ///
    /// Per-item state (duration, position, cache) is zeroed; the display is
    /// told about the blank slate before the first poll fills it in.
    pub async fn load(&self, source: &str) -> Result<()> {
        debug!(source, "loading media source");
        self.engine.load(source).await?;
        self.tracker.reset();
        self.display
            .set_position(0, &self.tracker.state().current_position_text());
        self.display.set_cache_fraction(0.0);
        self.start_overlay_ticker();
        self.play().await
    }

    /// Start or resume playback.
    pub async fn play(&self) -> Result<()> {
        self.tracker.set_intent(PlayIntent::Playing);
        self.engine.play().await?;
        self.tracker.start();
        self.display.set_playing(true);
        self.overlay_interaction();
        Ok(())
    }

    /// Pause playback. Polling is suspended; accumulated state is kept.
    pub async fn pause(&self) -> Result<()> {
        self.tracker.set_intent(PlayIntent::Paused);
        self.engine.pause().await?;
        self.tracker.stop().await;
        self.display.set_playing(false);
        Ok(())
    }

    /// Play/pause button behavior. Restarting a completed item rewinds to
    /// the start first.
    pub async fn toggle_play_pause(&self) -> Result<()> {
        match self.tracker.state().intent {
            PlayIntent::Playing => self.pause().await,
            PlayIntent::Complete => {
                self.tracker.zero_position();
                self.engine.seek(0).await?;
                self.play().await
            }
            _ => self.play().await,
        }
    }

    /// Scrubber drag; the next poll picks up the new position.
    pub async fn seek(&self, to_seconds: u64) -> Result<()> {
        trace!(to_seconds, "seeking");
        self.engine.seek(to_seconds).await?;
        Ok(())
    }

    pub fn set_title(&self, title: &str) {
        self.display.set_title(title);
    }

    pub fn toggle_fullscreen(&self) -> bool {
        let fullscreen = !self.fullscreen.load(Ordering::Relaxed);
        self.fullscreen.store(fullscreen, Ordering::Relaxed);
        self.display.set_fullscreen(fullscreen);
        fullscreen
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.load(Ordering::Relaxed)
    }

    /// Route a tap on the player surface.
    ///
    /// Taps on child controls never reach the overlay logic. Background taps
    /// go through the double-tap debounce: the single-tap action (show
    /// chrome, restart the countdown) is deferred by the recognition window
    /// and cancelled when a second tap lands inside it. Returns the gesture
    /// that resolved immediately, if any.
    pub fn tap(&self, region: TapRegion) -> Option<Gesture> {
        if region == TapRegion::Controls {
            return None;
        }

        match self.taps.lock().unwrap().on_tap(Instant::now()) {
            Some(Gesture::DoubleTap) => {
                self.cancel_tap_resolver();
                self.overlay.lock().unwrap().suppress_countdown();
                self.for_each_listener(|listener| listener.on_double_tap());
                Some(Gesture::DoubleTap)
            }
            _ => {
                self.spawn_tap_resolver();
                None
            }
        }
    }

    /// Stop all timers. Safe from teardown paths, repeatedly.
    pub async fn shutdown(&self) {
        self.tracker.stop().await;

        let overlay_task = self.overlay_task.lock().unwrap().take();
        if let Some(task) = overlay_task {
            task.cancel.cancel();
            if let Err(e) = task.handle.await {
                warn!("overlay tick task panicked: {e}");
            }
        }

        let tap_task = self.tap_task.lock().unwrap().take();
        if let Some(task) = tap_task {
            task.cancel.cancel();
            if let Err(e) = task.handle.await {
                warn!("tap resolver task panicked: {e}");
            }
        }
        debug!("player session shut down");
    }

    fn overlay_interaction(&self) {
        self.overlay.lock().unwrap().on_user_interaction();
        self.display.show_chrome();
    }

    fn start_overlay_ticker(&self) {
        let mut guard = self.overlay_task.lock().unwrap();
        if guard.as_ref().is_some_and(|task| !task.handle.is_finished()) {
            return;
        }

        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let period = self.config.overlay_tick();
        let overlay = Arc::clone(&self.overlay);
        let display = Arc::clone(&self.display);
        let state = self.tracker.shared_state();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first interval tick completes immediately; the countdown
            // must not lose a tick at t=0.
            ticker.tick().await;
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {
                        let playing = state.lock().unwrap().is_actively_playing();
                        let change = overlay.lock().unwrap().on_tick(playing);
                        match change {
                            Some(VisibilityChange::Hidden) => display.hide_chrome(),
                            Some(VisibilityChange::Shown) => display.show_chrome(),
                            None => {}
                        }
                    }
                }
            }
            trace!("overlay tick task exited");
        });

        *guard = Some(TimerTask { cancel, handle });
    }

    fn cancel_tap_resolver(&self) {
        if let Some(task) = self.tap_task.lock().unwrap().take() {
            task.cancel.cancel();
        }
    }

    fn spawn_tap_resolver(&self) {
        let mut guard = self.tap_task.lock().unwrap();
        if let Some(stale) = guard.take() {
            stale.cancel.cancel();
        }

        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let window = self.config.double_tap_window();
        let taps = Arc::clone(&self.taps);
        let overlay = Arc::clone(&self.overlay);
        let display = Arc::clone(&self.display);

        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                // Sleep just past the window so the held tap is resolvable.
                _ = tokio::time::sleep(window + Duration::from_millis(1)) => {
                    let gesture = taps.lock().unwrap().poll_pending(Instant::now());
                    if gesture == Some(Gesture::SingleTap) {
                        overlay.lock().unwrap().on_user_interaction();
                        display.show_chrome();
                    }
                }
            }
        });

        *guard = Some(TimerTask { cancel, handle });
    }

    fn for_each_listener(&self, f: impl Fn(&dyn PlaybackListener)) {
        for listener in self.listeners.read().unwrap().iter() {
            f(listener.as_ref());
        }
    }
}
