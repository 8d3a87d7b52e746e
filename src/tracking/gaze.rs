//! Eye gaze tracking.
//!
//! Maps the pointer position onto a bounded pupil offset relative to the
//! active anchor's centre. Direction always equals the angle from anchor
//! centre to pointer; only the magnitude is clamped.
//!
//! Two anchors take turns: the hero eye while the hero is on screen, and
//! the corner eye once `scroll_y > viewport_height * 0.7`. The active
//! anchor is re-measured on every pointer move, scroll and resize, before
//! any offset is computed from it, so a switch is never more than one
//! event stale.

use crate::config::HudConfig;
use crate::geometry::{AnchorGeometry, Point, Viewport};
use crate::host::{AnchorSlot, LayoutHost};

/// Pupil displacement in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GazeOffset {
    pub dx: f32,
    pub dy: f32,
}

impl GazeOffset {
    pub fn magnitude(&self) -> f32 {
        self.dx.hypot(self.dy)
    }
}

/// How far the pupil may travel for a given pointer distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GazeClamp {
    /// `min(distance / divisor, max)`: the hero and corner eyes.
    Scaled { divisor: f32, max: f32 },
    /// `min(distance, radius * fraction)`: decorative eyes.
    Proportional { fraction: f32 },
}

impl GazeClamp {
    pub fn from_config(cfg: &HudConfig) -> Self {
        Self::Scaled {
            divisor: cfg.gaze_distance_divisor,
            max: cfg.gaze_max_offset,
        }
    }

    pub fn max_radius(&self, anchor: &AnchorGeometry) -> f32 {
        match *self {
            Self::Scaled { max, .. } => max,
            Self::Proportional { fraction } => anchor.radius() * fraction,
        }
    }

    fn magnitude(&self, distance: f32, anchor: &AnchorGeometry) -> f32 {
        match *self {
            Self::Scaled { divisor, max } => (distance / divisor).min(max),
            Self::Proportional { .. } => distance.min(self.max_radius(anchor)),
        }
    }
}

/// Pure gaze computation for one pointer position.
pub fn gaze_offset(pointer: Point, anchor: &AnchorGeometry, clamp: GazeClamp) -> GazeOffset {
    let dx = pointer.x - anchor.center_x;
    let dy = pointer.y - anchor.center_y;
    let angle = dy.atan2(dx);
    let distance = clamp.magnitude(dx.hypot(dy), anchor);
    GazeOffset {
        dx: angle.cos() * distance,
        dy: angle.sin() * distance,
    }
}

/// Which anchor should be live for this scroll position.
pub fn select_anchor(viewport: &Viewport, corner_fraction: f32) -> AnchorSlot {
    if viewport.scroll_y > viewport.height * corner_fraction {
        AnchorSlot::Corner
    } else {
        AnchorSlot::Primary
    }
}

/// Hero/corner eye tracker.
#[derive(Debug, Clone)]
pub struct GazeTracker {
    clamp: GazeClamp,
    corner_fraction: f32,
    active: AnchorSlot,
    anchor: Option<AnchorGeometry>,
    offset: GazeOffset,
    cursor: Option<Point>,
}

impl GazeTracker {
    pub fn new(clamp: GazeClamp, corner_fraction: f32) -> Self {
        Self {
            clamp,
            corner_fraction,
            active: AnchorSlot::Primary,
            anchor: None,
            offset: GazeOffset::default(),
            cursor: None,
        }
    }

    pub fn from_config(cfg: &HudConfig) -> Self {
        Self::new(GazeClamp::from_config(cfg), cfg.corner_anchor_fraction)
    }

    /// Recompute the pupil offset for a pointer move.
    ///
    /// Returns `None` (offset unchanged) when the active anchor is not mounted.
    pub fn on_pointer_move<H: LayoutHost + ?Sized>(
        &mut self,
        host: &H,
        pointer: Point,
    ) -> Option<GazeOffset> {
        let anchor = self.remeasure(host)?;
        self.offset = gaze_offset(pointer, &anchor, self.clamp);
        self.cursor = Some(pointer);
        log::trace!("gaze {:?} -> ({:.2}, {:.2})", self.active, self.offset.dx, self.offset.dy);
        Some(self.offset)
    }

    /// Scroll may switch anchors and always moves the hero eye.
    /// Returns `true` if the active anchor changed.
    pub fn on_scroll<H: LayoutHost + ?Sized>(&mut self, host: &H) -> bool {
        let before = self.active;
        self.remeasure(host);
        before != self.active
    }

    pub fn on_resize<H: LayoutHost + ?Sized>(&mut self, host: &H) {
        self.remeasure(host);
    }

    /// Select the anchor for the current scroll position and measure it.
    fn remeasure<H: LayoutHost + ?Sized>(&mut self, host: &H) -> Option<AnchorGeometry> {
        let slot = select_anchor(&host.viewport(), self.corner_fraction);
        if slot != self.active {
            log::debug!("gaze anchor {:?} -> {:?}", self.active, slot);
            self.active = slot;
        }
        self.anchor = host.anchor_rect(slot).map(AnchorGeometry::from);
        self.anchor
    }

    pub fn offset(&self) -> GazeOffset {
        self.offset
    }

    pub fn active_anchor(&self) -> AnchorSlot {
        self.active
    }

    pub fn anchor(&self) -> Option<AnchorGeometry> {
        self.anchor
    }

    pub fn max_radius(&self) -> Option<f32> {
        self.anchor.map(|a| self.clamp.max_radius(&a))
    }

    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    /// Endpoints of the cursor-to-eye tracking line.
    pub fn tracking_line(&self) -> Option<(Point, Point)> {
        Some((self.cursor?, self.anchor?.center()))
    }
}

/// A decorative eye bound to one fixed anchor (the logo).
#[derive(Debug, Clone)]
pub struct DecorativeEye {
    slot: AnchorSlot,
    clamp: GazeClamp,
    offset: GazeOffset,
}

impl DecorativeEye {
    pub fn new(slot: AnchorSlot, fraction: f32) -> Self {
        Self {
            slot,
            clamp: GazeClamp::Proportional { fraction },
            offset: GazeOffset::default(),
        }
    }

    pub fn on_pointer_move<H: LayoutHost + ?Sized>(
        &mut self,
        host: &H,
        pointer: Point,
    ) -> Option<GazeOffset> {
        let anchor = AnchorGeometry::from(host.anchor_rect(self.slot)?);
        self.offset = gaze_offset(pointer, &anchor, self.clamp);
        Some(self.offset)
    }

    pub fn offset(&self) -> GazeOffset {
        self.offset
    }
}
