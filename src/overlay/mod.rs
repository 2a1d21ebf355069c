pub mod controller;
pub mod gestures;

pub use controller::{ControlState, OverlayController, VisibilityChange};
pub use gestures::{Gesture, TapDebouncer, TapRegion};
