//! Viewport reveal scheduler.
//!
//! One flag per observed element. It flips false → true the first time the
//! element's visible fraction reaches the threshold and then latches:
//! leaving and re-entering the viewport never resets it. The flag is what
//! gates counters, typewriters, rotators and entrance transitions.

use crate::config::{validate_threshold, ConfigError};
use crate::geometry::Rect;

/// Visible fraction of `element` inside `viewport` (both client rects).
///
/// Degenerate (zero-area) elements count as fully visible while they sit
/// inside the viewport.
pub fn intersection_ratio(element: &Rect, viewport: &Rect) -> f32 {
    let Some(overlap) = element.intersect(viewport) else {
        return 0.0;
    };
    let area = element.area();
    if area <= 0.0 {
        return 1.0;
    }
    (overlap.area() / area).clamp(0.0, 1.0)
}

/// One-shot "has become visible" latch for a single observed element.
#[derive(Debug, Clone)]
pub struct RevealFlag {
    threshold: f32,
    visible: bool,
    observing: bool,
}

impl RevealFlag {
    /// Unobserved flag; call [`RevealFlag::observe`] on mount.
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(f32::MIN_POSITIVE, 1.0),
            visible: false,
            observing: false,
        }
    }

    /// Checked constructor for host-supplied thresholds.
    pub fn try_new(name: &'static str, threshold: f32) -> Result<Self, ConfigError> {
        Ok(Self::new(validate_threshold(name, threshold)?))
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Start observing. A flag that already fired stays fired.
    pub fn observe(&mut self) {
        self.observing = true;
    }

    /// Stop observing; later reports are ignored.
    pub fn disconnect(&mut self) {
        self.observing = false;
    }

    pub fn is_observing(&self) -> bool {
        self.observing
    }

    /// Feed a visibility reading. Returns `true` only on the call that flips
    /// the flag.
    pub fn report(&mut self, ratio: f32) -> bool {
        if !self.observing || self.visible {
            return false;
        }
        if ratio > 0.0 && ratio >= self.threshold {
            self.visible = true;
            // Nothing left to watch once latched.
            self.observing = false;
            return true;
        }
        false
    }

    /// Geometry flavour of [`RevealFlag::report`].
    pub fn report_rect(&mut self, element: &Rect, viewport: &Rect) -> bool {
        self.report(intersection_ratio(element, viewport))
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
