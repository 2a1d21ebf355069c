//! Common types reported by media engine backends.

/// Readiness of the engine's current item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineStatus {
    Unknown,
    ReadyToPlay,
    Failed,
}

/// A contiguous span of media data the engine has already downloaded,
/// expressed as start offset plus duration in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BufferedRange {
    pub start_seconds: f64,
    pub duration_seconds: f64,
}

impl BufferedRange {
    pub fn new(start_seconds: f64, duration_seconds: f64) -> Self {
        Self {
            start_seconds,
            duration_seconds,
        }
    }

    pub fn end_seconds(&self) -> f64 {
        self.start_seconds + self.duration_seconds
    }
}
