//! Pointer telemetry
//!
//! - `gaze`: bounded pupil offset toward the pointer, two-anchor handoff
//! - `motion`: zone / speed / action readout with debounced revert

pub mod gaze;
pub mod motion;

pub use gaze::{DecorativeEye, GazeClamp, GazeOffset, GazeTracker};
pub use motion::{Action, MotionClassifier, MotionState, Speed, Zone};
