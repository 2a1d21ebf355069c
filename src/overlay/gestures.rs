use std::time::Duration;
use tokio::time::Instant;

/// Where a tap landed on the player surface. Taps on child controls (progress
/// bar, buttons, top bar) are handled by those controls and never count as
/// background taps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapRegion {
    Background,
    Controls,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    SingleTap,
    DoubleTap,
}

/// Single/double tap disambiguation as an explicit debounce.
///
/// A first tap is held for the double-tap window. A second tap inside the
/// window resolves immediately to [`Gesture::DoubleTap`] and cancels the held
/// tap; otherwise [`TapDebouncer::poll_pending`] resolves it to
/// [`Gesture::SingleTap`] once the window has elapsed. A double tap therefore
/// never also fires the single-tap action.
#[derive(Debug)]
pub struct TapDebouncer {
    window: Duration,
    pending_since: Option<Instant>,
}

impl TapDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending_since: None,
        }
    }

    /// Register a tap at `now`.
    pub fn on_tap(&mut self, now: Instant) -> Option<Gesture> {
        match self.pending_since {
            Some(first) if now.duration_since(first) <= self.window => {
                self.pending_since = None;
                Some(Gesture::DoubleTap)
            }
            _ => {
                // Either no tap held, or a stale one the driver never
                // resolved; start a fresh window.
                self.pending_since = Some(now);
                None
            }
        }
    }

    /// Resolve a held tap once its window has elapsed with no second tap.
    pub fn poll_pending(&mut self, now: Instant) -> Option<Gesture> {
        match self.pending_since {
            Some(first) if now.duration_since(first) > self.window => {
                self.pending_since = None;
                Some(Gesture::SingleTap)
            }
            _ => None,
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending_since.is_some()
    }

    pub fn window(&self) -> Duration {
        self.window
    }
}
