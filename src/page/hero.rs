//! Hero section: eye, telemetry HUD and the decoding headline.
//!
//! Pointer moves go to the gaze tracker before the motion classifier, so
//! both see samples in delivery order. The headline waits for the entrance
//! flag, which turns on a fixed delay after mount.

use crate::anim::ScrambleHeadline;
use crate::config::HudConfig;
use crate::event::InputEvent;
use crate::host::{AnchorSlot, LayoutHost};
use crate::schedule::{Deadline, Millis};
use crate::tracking::{GazeTracker, MotionClassifier, MotionState};

pub const HEADLINE: [&str; 3] = ["86,400 Seconds In A Day.", "Every Day.", "No Human Can Keep Up."];
/// Line drawn in the accent colour.
pub const HIGHLIGHT_LINE: usize = 2;

#[derive(Debug, Clone)]
pub struct Hero {
    gaze: GazeTracker,
    motion: MotionClassifier,
    headline: ScrambleHeadline,
    entrance: Deadline<Millis>,
    entrance_delay_ms: Millis,
    loaded: bool,
    mounted: bool,
}

impl Hero {
    pub fn new(cfg: &HudConfig, headline: ScrambleHeadline) -> Self {
        Self {
            gaze: GazeTracker::from_config(cfg),
            motion: MotionClassifier::new(cfg),
            headline,
            entrance: Deadline::new(),
            entrance_delay_ms: cfg.entrance_delay_ms,
            loaded: false,
            mounted: false,
        }
    }

    pub fn mount<H: LayoutHost + ?Sized>(&mut self, now: Millis, host: &H) {
        let due = now + self.entrance_delay_ms;
        self.entrance.schedule(due, due);
        self.motion.mount(now);
        self.gaze.on_resize(host);
        self.loaded = false;
        self.mounted = true;
    }

    /// Cancel every timer the hero owns.
    pub fn unmount(&mut self) {
        self.entrance.cancel();
        self.motion.unmount();
        self.headline.cancel();
        self.mounted = false;
    }

    /// Route one input event. Returns `true` if hero output changed.
    pub fn handle<H: LayoutHost + ?Sized>(&mut self, event: &InputEvent, host: &H) -> bool {
        if !self.mounted {
            return false;
        }
        match *event {
            InputEvent::PointerMove(sample) => {
                self.gaze.on_pointer_move(host, sample.point());
                self.motion.on_pointer_move(sample, &host.viewport());
                true
            }
            InputEvent::PointerDown { at } => {
                self.motion.on_pointer_down(at);
                true
            }
            InputEvent::PointerUp { at } => {
                self.motion.on_pointer_up(at);
                true
            }
            InputEvent::Click { at } => {
                self.motion.on_click(at);
                true
            }
            InputEvent::Scroll { at } => {
                self.gaze.on_scroll(host);
                self.motion.on_scroll(at);
                true
            }
            InputEvent::Resize { .. } => {
                self.gaze.on_resize(host);
                true
            }
            InputEvent::Visibility { .. } => false,
        }
    }

    /// Fire due timers and scramble ticks.
    pub fn advance(&mut self, now: Millis) -> bool {
        if !self.mounted {
            return false;
        }
        let mut changed = false;
        if let Some(at) = self.entrance.poll(now) {
            self.loaded = true;
            self.headline.start(at);
            log::debug!("hero loaded at {}ms", at);
            changed = true;
        }
        changed |= self.motion.advance(now);
        changed |= self.headline.advance(now);
        changed
    }

    /// Mark a headline line's element as (un)available.
    pub fn set_line_attached(&mut self, index: usize, attached: bool) {
        if let Some(line) = self.headline.line_mut(index) {
            line.set_attached(attached);
        }
    }

    pub fn gaze(&self) -> &GazeTracker {
        &self.gaze
    }

    pub fn motion(&self) -> &MotionState {
        self.motion.state()
    }

    pub fn headline(&self) -> &ScrambleHeadline {
        &self.headline
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Scrolled far enough that the corner eye has taken over.
    pub fn is_past_hero(&self) -> bool {
        self.gaze.active_anchor() == AnchorSlot::Corner
    }

    /// Whether a timer is still pending or a line is still decoding.
    pub fn is_animating(&self) -> bool {
        self.entrance.is_pending() || self.motion_pending() || self.headline.is_running()
    }

    fn motion_pending(&self) -> bool {
        self.motion.next_due().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::host::StaticLayout;
    use crate::tracking::Action;

    fn hero() -> Hero {
        let cfg = HudConfig::default();
        Hero::new(&cfg, ScrambleHeadline::with_seed(&HEADLINE, &cfg, 42))
    }

    fn layout() -> StaticLayout {
        StaticLayout::new(1000.0, 800.0)
            .with_anchor(AnchorSlot::Primary, Rect::new(450.0, 350.0, 100.0, 100.0))
            .with_anchor(AnchorSlot::Corner, Rect::new(920.0, 720.0, 48.0, 48.0))
    }

    #[test]
    fn test_entrance_gates_headline() {
        let mut h = hero();
        let host = layout();
        h.mount(0, &host);
        h.advance(99);
        assert!(!h.is_loaded());
        assert_eq!(h.headline().lines()[0].iteration(), 0);
        h.advance(100);
        assert!(h.is_loaded());
        assert!(h.headline().is_running());
        // 24 chars × 3 ticks × 30ms after the 100ms entrance.
        h.advance(2_259);
        assert!(!h.headline().lines()[0].is_done());
        h.advance(2_260);
        assert_eq!(h.headline().lines()[0].rendered(), HEADLINE[0]);
    }

    #[test]
    fn test_headline_settles_exactly() {
        let mut h = hero();
        h.mount(0, &layout());
        h.advance(100);
        h.advance(60_000);
        assert!(h.headline().is_done());
        for (line, text) in h.headline().lines().iter().zip(HEADLINE) {
            assert_eq!(line.rendered(), text);
        }
        assert!(!h.advance(70_000));
    }

    #[test]
    fn test_pointer_move_feeds_both_trackers() {
        let mut h = hero();
        let host = layout();
        h.mount(0, &host);
        h.advance(500);
        assert!(h.handle(&InputEvent::pointer_move(900.0, 400.0, 600), &host));
        let off = h.gaze().offset();
        assert!((off.dx - 8.0).abs() < 1e-4);
        assert!(off.dy.abs() < 1e-4);
        assert_eq!(h.motion().coords, "0900:0400");
        assert_eq!(h.motion().action, Action::Tracking);
    }

    #[test]
    fn test_scroll_switches_to_corner() {
        let mut h = hero();
        let mut host = layout();
        h.mount(0, &host);
        assert!(!h.is_past_hero());
        host.scroll_to(600.0);
        h.handle(&InputEvent::Scroll { at: 10 }, &host);
        assert!(h.is_past_hero());
        assert_eq!(h.motion().action, Action::Scrolling);
        h.handle(&InputEvent::pointer_move(0.0, 0.0, 20), &host);
        let (_, eye) = h.gaze().tracking_line().unwrap();
        assert_eq!(eye.x, 944.0);
        assert_eq!(eye.y, 744.0);
    }

    #[test]
    fn test_unmount_stops_everything() {
        let mut h = hero();
        let host = layout();
        h.mount(0, &host);
        h.advance(100);
        h.handle(&InputEvent::Click { at: 150 }, &host);
        h.unmount();
        assert!(!h.is_animating());
        assert!(!h.advance(10_000));
        assert!(!h.handle(&InputEvent::Click { at: 10_001 }, &host));
        assert_eq!(h.motion().action, Action::ClickDetected);
    }

    #[test]
    fn test_detached_line_does_not_progress() {
        let mut h = hero();
        h.mount(0, &layout());
        h.set_line_attached(0, false);
        h.advance(100);
        h.advance(1_000);
        assert_eq!(h.headline().lines()[0].iteration(), 0);
        h.set_line_attached(0, true);
        h.advance(1_030);
        assert_eq!(h.headline().lines()[0].iteration(), 1);
    }
}
