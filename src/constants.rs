// Timing defaults for the polling and overlay timers.
// All timer tuning in one place.

use std::time::Duration;

/// Engine poll cadence. Published values are integer-second granularity, so
/// anything much finer than this buys nothing.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);
/// Lower/upper bounds applied to configured poll intervals.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(200);
pub const MAX_POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// Overlay chrome hides after this many countdown ticks without interaction.
pub const DEFAULT_OVERLAY_HIDE_TICKS: u32 = 5;
/// One overlay countdown tick.
pub const DEFAULT_OVERLAY_TICK: Duration = Duration::from_secs(1);

/// Window inside which a second tap counts as a double tap.
pub const DEFAULT_DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(250);
