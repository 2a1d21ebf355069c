use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

use super::display::{PlaybackListener, PlayerDisplay};
use crate::engine::{EngineStatus, MediaEngine};
use crate::models::{BufferingStatus, PlayIntent, PlaybackState};

pub(crate) type ListenerSet = Arc<RwLock<Vec<Arc<dyn PlaybackListener>>>>;

/// Whether the poll loop keeps running after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// Terminal transition (complete or failed); polling stops until the
    /// user restarts playback.
    Stop,
}

struct PollTask {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

/// Bridges the engine's pull-based item state into the push-based
/// [`PlaybackState`]/display model by polling on a fixed cadence.
///
/// All state mutation and display callbacks happen on the single poll task,
/// so the tick body needs no coordination beyond short state locks.
pub struct ProgressTracker {
    inner: Arc<TrackerInner>,
    poll_interval: Duration,
    poll_task: Mutex<Option<PollTask>>,
}

impl ProgressTracker {
    pub fn new(
        engine: Arc<dyn MediaEngine>,
        display: Arc<dyn PlayerDisplay>,
        poll_interval: Duration,
    ) -> Self {
        Self::with_listeners(
            engine,
            display,
            Arc::new(RwLock::new(Vec::new())),
            poll_interval,
        )
    }

    pub(crate) fn with_listeners(
        engine: Arc<dyn MediaEngine>,
        display: Arc<dyn PlayerDisplay>,
        listeners: ListenerSet,
        poll_interval: Duration,
    ) -> Self {
        Self {
            inner: Arc::new(TrackerInner {
                engine,
                display,
                listeners,
                state: Arc::new(Mutex::new(PlaybackState::default())),
            }),
            poll_interval,
            poll_task: Mutex::new(None),
        }
    }

    pub fn add_listener(&self, listener: Arc<dyn PlaybackListener>) {
        self.inner.listeners.write().unwrap().push(listener);
    }

    /// Snapshot of the current playback state.
    pub fn state(&self) -> PlaybackState {
        self.inner.state.lock().unwrap().clone()
    }

    pub(crate) fn shared_state(&self) -> Arc<Mutex<PlaybackState>> {
        Arc::clone(&self.inner.state)
    }

    pub(crate) fn set_intent(&self, intent: PlayIntent) {
        self.inner.state.lock().unwrap().intent = intent;
    }

    pub(crate) fn zero_position(&self) {
        self.inner.state.lock().unwrap().current_position_secs = 0;
    }

    /// Zero the per-item state when a new media source is loaded.
    pub fn reset(&self) {
        self.inner.state.lock().unwrap().reset_for_new_source();
    }

    /// Run one poll step. The poll task calls this on every cadence
    /// interval; tests call it directly.
    pub async fn tick(&self) -> TickOutcome {
        self.inner.tick().await
    }

    pub fn is_polling(&self) -> bool {
        self.poll_task
            .lock()
            .unwrap()
            .as_ref()
            .is_some_and(|task| !task.handle.is_finished())
    }

    /// Begin polling. No-op while a poll task is already live.
    pub fn start(&self) {
        let mut guard = self.poll_task.lock().unwrap();
        if guard.as_ref().is_some_and(|task| !task.handle.is_finished()) {
            trace!("progress tracker already polling");
            return;
        }

        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let inner = Arc::clone(&self.inner);
        let period = self.poll_interval;

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {
                        if inner.tick().await == TickOutcome::Stop {
                            break;
                        }
                    }
                }
            }
            trace!("progress poll task exited");
        });

        *guard = Some(PollTask { cancel, handle });
        debug!(
            interval_ms = period.as_millis() as u64,
            "progress tracker started"
        );
    }

    /// Suspend polling without losing accumulated state.
    ///
    /// Waits for an in-flight tick to finish rather than interrupting it.
    /// Safe to call repeatedly and from teardown paths.
    pub async fn stop(&self) {
        let task = self.poll_task.lock().unwrap().take();
        if let Some(task) = task {
            task.cancel.cancel();
            if let Err(e) = task.handle.await {
                warn!("progress poll task panicked: {e}");
            }
            debug!("progress tracker stopped");
        }
    }
}

struct TrackerInner {
    engine: Arc<dyn MediaEngine>,
    display: Arc<dyn PlayerDisplay>,
    listeners: ListenerSet,
    state: Arc<Mutex<PlaybackState>>,
}

impl TrackerInner {
    async fn tick(&self) -> TickOutcome {
        let status = self.engine.status().await;

        if status == EngineStatus::Failed {
            let message = "media engine reported a failed item";
            self.state.lock().unwrap().intent = PlayIntent::Failed;
            warn!("{message}; polling stops");
            self.display.show_failure(message);
            self.for_each_listener(|listener| listener.on_failed(message));
            return TickOutcome::Stop;
        }

        if status == EngineStatus::ReadyToPlay {
            let needs_duration = self.state.lock().unwrap().total_duration_secs == 0;
            if needs_duration
                && let Some(duration) = self.engine.duration_seconds().await
            {
                let secs = duration.max(0.0) as u64;
                if secs > 0 {
                    let text = {
                        let mut state = self.state.lock().unwrap();
                        state.total_duration_secs = secs;
                        state.total_duration_text()
                    };
                    debug!(total_secs = secs, "media duration resolved");
                    self.display.set_total_duration(secs, &text);
                }
            }

            let position = self.engine.position_seconds().await.max(0.0) as u64;
            self.state.lock().unwrap().current_position_secs = position;
        }

        if self.engine.buffer_empty().await {
            let entered = {
                let mut state = self.state.lock().unwrap();
                if state.buffering != BufferingStatus::Buffering {
                    state.buffering = BufferingStatus::Buffering;
                    true
                } else {
                    false
                }
            };
            if entered {
                trace!("buffer drained, showing loading indicator");
                self.display.show_loading();
                self.for_each_listener(|listener| {
                    listener.on_buffering_changed(BufferingStatus::Buffering)
                });
            }
        }

        if self.engine.likely_to_keep_up().await {
            let recovered = {
                let mut state = self.state.lock().unwrap();
                if state.buffering != BufferingStatus::ReadyToPlay {
                    state.buffering = BufferingStatus::ReadyToPlay;
                    true
                } else {
                    false
                }
            };
            if recovered {
                trace!("buffer healthy, hiding loading indicator");
                self.display.hide_loading();
                self.for_each_listener(|listener| {
                    listener.on_buffering_changed(BufferingStatus::ReadyToPlay)
                });
            }
        }

        // The first buffered range drives the cache high-water mark; an
        // empty list keeps the previous value.
        if let Some(first) = self.engine.buffered_ranges().await.first() {
            self.state.lock().unwrap().cached_up_to_secs = first.end_seconds().max(0.0) as u64;
        }

        let snapshot = self.state.lock().unwrap().clone();
        self.display
            .set_position(snapshot.current_position_secs, &snapshot.current_position_text());
        self.display.set_cache_fraction(snapshot.cache_fraction());
        self.for_each_listener(|listener| listener.on_progress(&snapshot));

        if snapshot.is_complete() {
            self.state.lock().unwrap().intent = PlayIntent::Complete;
            if let Err(e) = self.engine.pause().await {
                warn!("failed to pause engine at end of media: {e}");
            }
            debug!("playback complete");
            self.display.set_playing(false);
            self.for_each_listener(|listener| listener.on_complete());
            return TickOutcome::Stop;
        }

        TickOutcome::Continue
    }

    fn for_each_listener(&self, f: impl Fn(&dyn PlaybackListener)) {
        for listener in self.listeners.read().unwrap().iter() {
            f(listener.as_ref());
        }
    }
}
