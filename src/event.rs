//! Input events consumed by the HUD engine, in host delivery order.
//!
//! Geometry is not carried on scroll/resize events: the engine asks the
//! [`LayoutHost`](crate::host::LayoutHost) for the current viewport and
//! anchor boxes when it handles them.

use crate::geometry::PointerSample;
use crate::page::sections::RevealTarget;
use crate::schedule::Millis;

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerMove(PointerSample),
    PointerDown { at: Millis },
    PointerUp { at: Millis },
    Click { at: Millis },
    Scroll { at: Millis },
    Resize { at: Millis },
    /// Visible fraction of an observed element changed.
    Visibility { target: RevealTarget, ratio: f32 },
}

impl InputEvent {
    pub fn pointer_move(x: f32, y: f32, at: Millis) -> Self {
        Self::PointerMove(PointerSample::new(x, y, at))
    }

    /// Timestamp of the event, when it carries one.
    pub fn at(&self) -> Option<Millis> {
        match self {
            Self::PointerMove(s) => Some(s.timestamp_ms),
            Self::PointerDown { at }
            | Self::PointerUp { at }
            | Self::Click { at }
            | Self::Scroll { at }
            | Self::Resize { at } => Some(*at),
            Self::Visibility { .. } => None,
        }
    }
}
