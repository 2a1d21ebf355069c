use async_trait::async_trait;

use super::types::{BufferedRange, EngineStatus};
use crate::utils::errors::PlayerError;

/// The platform playback engine behind the player widget.
///
/// Decoding, network buffering and rendering all live behind this seam; the
/// session only issues transport commands and polls item state. Implementors
/// wrap their backend's native errors in [`PlayerError::Engine`].
#[async_trait]
pub trait MediaEngine: Send + Sync {
    async fn load(&self, source: &str) -> Result<(), PlayerError>;
    async fn play(&self) -> Result<(), PlayerError>;
    async fn pause(&self) -> Result<(), PlayerError>;
    async fn seek(&self, to_seconds: u64) -> Result<(), PlayerError>;

    /// Readiness of the current item.
    async fn status(&self) -> EngineStatus;
    /// Reported duration of the current item, once the engine knows it.
    async fn duration_seconds(&self) -> Option<f64>;
    /// Current playback position.
    async fn position_seconds(&self) -> f64;
    /// The engine has run out of buffered data.
    async fn buffer_empty(&self) -> bool;
    /// Engine heuristic: enough data buffered to sustain playback.
    async fn likely_to_keep_up(&self) -> bool;
    /// Ordered buffered spans; may be empty while probing.
    async fn buffered_ranges(&self) -> Vec<BufferedRange>;
}
