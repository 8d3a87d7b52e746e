//! Screen-space geometry shared by the trackers and the reveal scheduler.
//!
//! All coordinates are client (viewport-relative) pixels, matching what a
//! bounding-box query returns for a mounted element.

use crate::schedule::Millis;

/// A point in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Axis-aligned box: left, top, width, height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self { left: self.left + dx, top: self.top + dy, ..*self }
    }

    /// Overlapping region, or `None` when the boxes are disjoint.
    /// Touching edges count as a zero-area overlap.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right < left || bottom < top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }
}

/// Geometry of the element the eye is anchored to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorGeometry {
    pub center_x: f32,
    pub center_y: f32,
    pub width: f32,
    pub height: f32,
}

impl AnchorGeometry {
    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    /// Visual radius used by the proportional clamp (half the width).
    pub fn radius(&self) -> f32 {
        self.width * 0.5
    }
}

impl From<Rect> for AnchorGeometry {
    fn from(r: Rect) -> Self {
        let c = r.center();
        Self {
            center_x: c.x,
            center_y: c.y,
            width: r.width,
            height: r.height,
        }
    }
}

/// One pointer-move reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    pub timestamp_ms: Millis,
}

impl PointerSample {
    pub fn new(x: f32, y: f32, timestamp_ms: Millis) -> Self {
        Self { x, y, timestamp_ms }
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Window size plus document scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub scroll_y: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, scroll_y: 0.0 }
    }

    /// The viewport as a client-space rectangle.
    pub fn client_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_center_and_edges() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.center(), Point::new(60.0, 45.0));
        assert!((r.right() - 110.0).abs() < 1e-6);
        assert!((r.bottom() - 70.0).abs() < 1e-6);
    }

    #[test]
    fn test_intersect_partial() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 80.0, 100.0, 100.0);
        let i = a.intersect(&b).unwrap();
        assert_eq!(i, Rect::new(50.0, 80.0, 50.0, 20.0));
    }

    #[test]
    fn test_intersect_disjoint() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(0.0, 20.0, 10.0, 10.0);
        assert!(a.intersect(&b).is_none());
    }

    #[test]
    fn test_anchor_from_rect() {
        let a = AnchorGeometry::from(Rect::new(100.0, 200.0, 112.0, 80.0));
        assert!((a.center_x - 156.0).abs() < 1e-6);
        assert!((a.center_y - 240.0).abs() < 1e-6);
        assert!((a.radius() - 56.0).abs() < 1e-6);
    }
}
