use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::constants::{
    DEFAULT_DOUBLE_TAP_WINDOW, DEFAULT_OVERLAY_HIDE_TICKS, DEFAULT_OVERLAY_TICK,
    DEFAULT_POLL_INTERVAL, MAX_POLL_INTERVAL, MIN_POLL_INTERVAL,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Engine poll cadence in milliseconds. Clamped to 200..=1000.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Countdown ticks before overlay chrome auto-hides.
    #[serde(default = "default_overlay_hide_ticks")]
    pub overlay_hide_ticks: u32,

    /// Length of one overlay countdown tick in milliseconds.
    #[serde(default = "default_overlay_tick_ms")]
    pub overlay_tick_ms: u64,

    /// Double-tap recognition window in milliseconds.
    #[serde(default = "default_double_tap_window_ms")]
    pub double_tap_window_ms: u64,
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL.as_millis() as u64
}

fn default_overlay_hide_ticks() -> u32 {
    DEFAULT_OVERLAY_HIDE_TICKS
}

fn default_overlay_tick_ms() -> u64 {
    DEFAULT_OVERLAY_TICK.as_millis() as u64
}

fn default_double_tap_window_ms() -> u64 {
    DEFAULT_DOUBLE_TAP_WINDOW.as_millis() as u64
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            overlay_hide_ticks: default_overlay_hide_ticks(),
            overlay_tick_ms: default_overlay_tick_ms(),
            double_tap_window_ms: default_double_tap_window_ms(),
        }
    }
}

impl PlayerConfig {
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse player config")
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize player config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&contents)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file {}", path.display()))
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms).clamp(MIN_POLL_INTERVAL, MAX_POLL_INTERVAL)
    }

    pub fn overlay_tick(&self) -> Duration {
        Duration::from_millis(self.overlay_tick_ms.max(1))
    }

    pub fn double_tap_window(&self) -> Duration {
        Duration::from_millis(self.double_tap_window_ms)
    }
}
