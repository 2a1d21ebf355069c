// Headless playback-session core for video player widgets.
//
// The view layer implements `PlayerDisplay` and hands the session a
// `MediaEngine`; everything between them (progress polling, buffering
// indicators, overlay auto-hide, tap gestures) lives here.

pub mod config;
pub mod constants;
pub mod engine;
pub mod models;
pub mod overlay;
pub mod session;
pub mod utils;

pub use config::PlayerConfig;
pub use engine::{BufferedRange, EngineStatus, MediaEngine};
pub use models::{BufferingStatus, PlayIntent, PlaybackState};
pub use overlay::{ControlState, Gesture, OverlayController, TapDebouncer, TapRegion, VisibilityChange};
pub use session::{PlaybackListener, PlayerDisplay, PlayerSession, ProgressTracker, TickOutcome};
pub use utils::errors::PlayerError;
pub use utils::time::format_clock;
