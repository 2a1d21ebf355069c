use tracing::debug;

/// Overlay chrome visibility state machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlState {
    /// Chrome is completely hidden.
    Hidden,
    /// Chrome is visible with the inactivity countdown running.
    VisibleCounting { remaining: u32 },
    /// Chrome is visible and pinned because playback is not running
    /// (paused, buffering, complete or failed).
    VisiblePinned,
}

/// Visibility transition produced by a tick or interaction. The driver maps
/// these to show/hide side effects, so each hide fires exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityChange {
    Shown,
    Hidden,
}

/// Countdown-based auto-hide for the overlay chrome (scrubber, buttons,
/// title bar). Shown on interaction or playback start, hidden after an idle
/// period of uninterrupted playback, never hidden while playback is not
/// actively running.
#[derive(Debug)]
pub struct OverlayController {
    state: ControlState,
    hide_ticks: u32,
}

impl OverlayController {
    pub fn new(hide_ticks: u32) -> Self {
        Self {
            state: ControlState::VisibleCounting {
                remaining: hide_ticks.max(1),
            },
            hide_ticks: hide_ticks.max(1),
        }
    }

    pub fn state(&self) -> ControlState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self.state, ControlState::Hidden)
    }

    /// Advance the countdown by one tick.
    ///
    /// While playback is not actively running the chrome is pinned visible
    /// regardless of how many ticks elapse.
    pub fn on_tick(&mut self, playing: bool) -> Option<VisibilityChange> {
        if !playing {
            let was_hidden = self.state == ControlState::Hidden;
            self.state = ControlState::VisiblePinned;
            return was_hidden.then_some(VisibilityChange::Shown);
        }

        match self.state {
            ControlState::VisibleCounting { remaining } => {
                let remaining = remaining.saturating_sub(1);
                if remaining == 0 {
                    debug!("overlay countdown expired, hiding chrome");
                    self.state = ControlState::Hidden;
                    Some(VisibilityChange::Hidden)
                } else {
                    self.state = ControlState::VisibleCounting { remaining };
                    None
                }
            }
            // Playback resumed under pinned chrome: restart the countdown.
            ControlState::VisiblePinned => {
                self.state = ControlState::VisibleCounting {
                    remaining: self.hide_ticks,
                };
                None
            }
            ControlState::Hidden => None,
        }
    }

    /// Qualifying user interaction (background tap, playback start): show the
    /// chrome and restart the countdown from the top.
    pub fn on_user_interaction(&mut self) -> Option<VisibilityChange> {
        let was_hidden = !self.is_visible();
        self.state = ControlState::VisibleCounting {
            remaining: self.hide_ticks,
        };
        was_hidden.then_some(VisibilityChange::Shown)
    }

    /// Double tap holds the chrome where it is but restarts the countdown if
    /// one is running, so the gesture never races a hide.
    pub fn suppress_countdown(&mut self) {
        if let ControlState::VisibleCounting { .. } = self.state {
            self.state = ControlState::VisibleCounting {
                remaining: self.hide_ticks,
            };
        }
    }
}
