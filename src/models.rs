use crate::utils::time::format_clock;

/// Network/buffer health, as last observed from the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BufferingStatus {
    #[default]
    Unknown,
    Buffering,
    ReadyToPlay,
}

/// What the user asked playback to do, reconciled with completion and
/// engine failure by the progress tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayIntent {
    #[default]
    Unknown,
    Playing,
    Paused,
    Complete,
    Failed,
}

/// Playback state for the current media item.
///
/// Mutated only by the progress tracker and the session's user-action
/// handlers; everything else observes snapshots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaybackState {
    /// Total duration in whole seconds. Set once when the engine first
    /// reports ready; never decreases after becoming positive.
    pub total_duration_secs: u64,
    /// Position in whole seconds. Reset to 0 only on restart-from-complete
    /// or a new source.
    pub current_position_secs: u64,
    /// High-water mark of the engine's first buffered range. Sticky: an
    /// empty range list leaves the previous value in place.
    pub cached_up_to_secs: u64,
    pub buffering: BufferingStatus,
    pub intent: PlayIntent,
}

impl PlaybackState {
    /// Zero the per-item fields when a new source is loaded.
    pub fn reset_for_new_source(&mut self) {
        self.total_duration_secs = 0;
        self.current_position_secs = 0;
        self.cached_up_to_secs = 0;
        self.buffering = BufferingStatus::Unknown;
        self.intent = PlayIntent::Playing;
    }

    pub fn total_duration_text(&self) -> String {
        format_clock(self.total_duration_secs, self.total_duration_secs)
    }

    pub fn current_position_text(&self) -> String {
        format_clock(self.total_duration_secs, self.current_position_secs)
    }

    pub fn is_complete(&self) -> bool {
        self.total_duration_secs > 0 && self.current_position_secs == self.total_duration_secs
    }

    /// True while the overlay countdown is allowed to hide the chrome:
    /// the user wants playback and the engine is not stalled.
    pub fn is_actively_playing(&self) -> bool {
        self.intent == PlayIntent::Playing && self.buffering != BufferingStatus::Buffering
    }

    /// Fraction of the media already cached, in 0.0..=1.0. Short-circuits
    /// instead of dividing when the duration is still unknown.
    pub fn cache_fraction(&self) -> f64 {
        if self.total_duration_secs == 0 {
            return 0.0;
        }
        (self.cached_up_to_secs as f64 / self.total_duration_secs as f64).clamp(0.0, 1.0)
    }
}
