use crate::models::{BufferingStatus, PlaybackState};

/// Sink for everything the player widget renders.
///
/// Implemented by the view layer. Methods are plain setters invoked from the
/// session's timer tasks and user-action handlers; implementations forward to
/// their toolkit's main thread if it requires one.
pub trait PlayerDisplay: Send + Sync {
    /// Total duration resolved: slider maximum plus its label text.
    fn set_total_duration(&self, secs: u64, text: &str);
    /// Playback position: slider value plus its label text.
    fn set_position(&self, secs: u64, text: &str);
    /// Cached fraction of the media, 0.0..=1.0.
    fn set_cache_fraction(&self, fraction: f64);
    /// Play/pause button icon state.
    fn set_playing(&self, playing: bool);
    /// Loading spinner while the buffer is drained.
    fn show_loading(&self);
    fn hide_loading(&self);
    /// Overlay chrome: scrubber, transport buttons, top bar.
    fn show_chrome(&self);
    fn hide_chrome(&self);
    /// Terminal engine failure; polling has stopped.
    fn show_failure(&self, message: &str);
    /// Title shown in the top bar.
    fn set_title(&self, title: &str) {
        let _ = title;
    }
    /// Full-screen toggle state.
    fn set_fullscreen(&self, fullscreen: bool) {
        let _ = fullscreen;
    }
}

/// Observer interface for playback changes.
///
/// Registration is explicit via the session; there are no reassignable
/// callback fields. All methods default to no-ops so listeners implement
/// only what they care about.
pub trait PlaybackListener: Send + Sync {
    fn on_progress(&self, state: &PlaybackState) {
        let _ = state;
    }
    fn on_buffering_changed(&self, status: BufferingStatus) {
        let _ = status;
    }
    fn on_complete(&self) {}
    fn on_failed(&self, message: &str) {
        let _ = message;
    }
    /// Double tap on the player background, surfaced to the embedding widget.
    fn on_double_tap(&self) {}
}
