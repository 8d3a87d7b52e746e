//! Time-driven text and number effects.

pub mod counter;
pub mod easing;
pub mod pulse;
pub mod rotator;
pub mod scramble;
pub mod typewriter;

pub use counter::{group_thousands, CounterPhase, EasedCounter};
pub use pulse::IndustryPulse;
pub use rotator::FeatureRotator;
pub use scramble::{scramble_frame, ScrambleHeadline, ScrambleLine, ScramblePhase};
pub use typewriter::Typewriter;
