pub mod config;
pub mod geometry;
pub mod event;
pub mod schedule;
pub mod host;

// Pointer telemetry: eye gaze + motion HUD
pub mod tracking;

// One-shot entrance gating
pub mod reveal;

// Time-driven text and number effects
pub mod anim;

// Landing page composition (header, hero, sections)
pub mod page;

pub use config::{ConfigError, HudConfig};
pub use event::InputEvent;
pub use host::{AnchorSlot, LayoutHost, StaticLayout};
pub use page::Page;
pub use schedule::Millis;
