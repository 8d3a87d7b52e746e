//! Host geometry seam.
//!
//! The engine never owns layout. It asks the host, synchronously, where
//! the anchor elements are right now and how big the window is. Answers
//! are used for one recomputation and never cached across events.

use crate::geometry::{Rect, Viewport};

/// Elements the gaze trackers can anchor to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorSlot {
    /// The large eye inside the hero section (scrolls with the page).
    Primary,
    /// The small eye pinned to the bottom-right corner.
    Corner,
    /// The decorative logo eye in the call-to-action section.
    Logo,
}

/// Synchronous layout queries answered by the rendering host.
pub trait LayoutHost {
    fn viewport(&self) -> Viewport;

    /// Client-space bounding box of an anchor, `None` while it is not mounted.
    fn anchor_rect(&self, slot: AnchorSlot) -> Option<Rect>;
}

/// Plain-data host: fixed rectangles the caller moves by hand.
///
/// `primary` and `logo` live in the document flow, so [`StaticLayout::scroll_to`]
/// shifts them; `corner` is pinned to the window and never moves.
#[derive(Debug, Clone, Default)]
pub struct StaticLayout {
    pub viewport: Viewport,
    pub primary: Option<Rect>,
    pub corner: Option<Rect>,
    pub logo: Option<Rect>,
}

impl StaticLayout {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            ..Default::default()
        }
    }

    pub fn with_anchor(mut self, slot: AnchorSlot, rect: Rect) -> Self {
        *self.slot_mut(slot) = Some(rect);
        self
    }

    pub fn unmount(&mut self, slot: AnchorSlot) {
        *self.slot_mut(slot) = None;
    }

    /// Scroll the document, moving in-flow anchors by the delta.
    pub fn scroll_to(&mut self, scroll_y: f32) {
        let dy = self.viewport.scroll_y - scroll_y;
        self.viewport.scroll_y = scroll_y;
        for r in [&mut self.primary, &mut self.logo].into_iter().flatten() {
            *r = r.translate(0.0, dy);
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport.width = width;
        self.viewport.height = height;
    }

    fn slot_mut(&mut self, slot: AnchorSlot) -> &mut Option<Rect> {
        match slot {
            AnchorSlot::Primary => &mut self.primary,
            AnchorSlot::Corner => &mut self.corner,
            AnchorSlot::Logo => &mut self.logo,
        }
    }
}

impl LayoutHost for StaticLayout {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn anchor_rect(&self, slot: AnchorSlot) -> Option<Rect> {
        match slot {
            AnchorSlot::Primary => self.primary,
            AnchorSlot::Corner => self.corner,
            AnchorSlot::Logo => self.logo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_moves_in_flow_anchors_only() {
        let mut host = StaticLayout::new(1000.0, 800.0)
            .with_anchor(AnchorSlot::Primary, Rect::new(440.0, 500.0, 112.0, 80.0))
            .with_anchor(AnchorSlot::Corner, Rect::new(896.0, 720.0, 80.0, 56.0));
        host.scroll_to(300.0);
        assert_eq!(host.anchor_rect(AnchorSlot::Primary).unwrap().top, 200.0);
        assert_eq!(host.anchor_rect(AnchorSlot::Corner).unwrap().top, 720.0);
        assert!((host.viewport().scroll_y - 300.0).abs() < 1e-6);
    }

    #[test]
    fn test_unmounted_anchor_is_none() {
        let mut host = StaticLayout::new(1000.0, 800.0)
            .with_anchor(AnchorSlot::Logo, Rect::new(0.0, 0.0, 80.0, 80.0));
        host.unmount(AnchorSlot::Logo);
        assert!(host.anchor_rect(AnchorSlot::Logo).is_none());
    }
}
