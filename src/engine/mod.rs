pub mod traits;
pub mod types;

pub use traits::MediaEngine;
pub use types::{BufferedRange, EngineStatus};
