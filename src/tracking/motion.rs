//! Motion telemetry readout.
//!
//! Buckets the live pointer stream into the HUD's categorical readout:
//!
//! ```text
//! ZONE: UPPER-LEFT   VEL: MODERATE
//! POS:  0100:0100    ACT: CLICK_DETECTED
//! ```
//!
//! Action changes are debounced through a single revert timer: every
//! action event cancels the outstanding revert and schedules its own
//! (last writer wins), so at most one revert is ever pending.

use std::fmt;

use crate::config::HudConfig;
use crate::geometry::{PointerSample, Viewport};
use crate::schedule::{Deadline, Millis};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalZone {
    Upper,
    Mid,
    Lower,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalZone {
    Left,
    Center,
    Right,
}

/// One cell of the 3×3 screen grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zone {
    pub vertical: VerticalZone,
    pub horizontal: HorizontalZone,
}

impl Zone {
    pub const fn new(vertical: VerticalZone, horizontal: HorizontalZone) -> Self {
        Self { vertical, horizontal }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = match self.vertical {
            VerticalZone::Upper => "UPPER",
            VerticalZone::Mid => "MID",
            VerticalZone::Lower => "LOWER",
        };
        let h = match self.horizontal {
            HorizontalZone::Left => "LEFT",
            HorizontalZone::Center => "CENTER",
            HorizontalZone::Right => "RIGHT",
        };
        write!(f, "{}-{}", v, h)
    }
}

/// Zone readout including the start-up sentinels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneReading {
    Initializing,
    Scanning,
    At(Zone),
}

impl fmt::Display for ZoneReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initializing => f.write_str("INITIALIZING"),
            Self::Scanning => f.write_str("SCANNING"),
            Self::At(zone) => fmt::Display::fmt(zone, f),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Speed {
    Idle,
    Slow,
    Moderate,
    Fast,
    Rapid,
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "IDLE",
            Self::Slow => "SLOW",
            Self::Moderate => "MODERATE",
            Self::Fast => "FAST",
            Self::Rapid => "RAPID",
        })
    }
}

/// Speed readout including the start-up sentinels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedReading {
    Calibrating,
    Ready,
    At(Speed),
}

impl fmt::Display for SpeedReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Calibrating => f.write_str("CALIBRATING"),
            Self::Ready => f.write_str("READY"),
            Self::At(speed) => fmt::Display::fmt(speed, f),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Standby,
    Tracking,
    Scanning,
    Pressing,
    Released,
    ClickDetected,
    Scrolling,
}

impl Action {
    /// Actions the HUD paints in the alert colour.
    pub fn is_alert(&self) -> bool {
        matches!(self, Self::Pressing | Self::ClickDetected)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Standby => "STANDBY",
            Self::Tracking => "TRACKING",
            Self::Scanning => "SCANNING",
            Self::Pressing => "PRESSING",
            Self::Released => "RELEASED",
            Self::ClickDetected => "CLICK_DETECTED",
            Self::Scrolling => "SCROLLING",
        })
    }
}

/// Full telemetry readout consumed by the HUD renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionState {
    pub zone: ZoneReading,
    pub speed: SpeedReading,
    pub action: Action,
    pub coords: String,
}

impl Default for MotionState {
    fn default() -> Self {
        Self {
            zone: ZoneReading::Initializing,
            speed: SpeedReading::Calibrating,
            action: Action::Standby,
            coords: format_coords(0.0, 0.0),
        }
    }
}

/// Grid cell for a client position. Upper/left win at the low split,
/// lower/right past the high split, everything else is MID/CENTER.
pub fn classify_zone(x: f32, y: f32, viewport: &Viewport, low: f32, high: f32) -> Zone {
    let horizontal = if x < viewport.width * low {
        HorizontalZone::Left
    } else if x > viewport.width * high {
        HorizontalZone::Right
    } else {
        HorizontalZone::Center
    };
    let vertical = if y < viewport.height * low {
        VerticalZone::Upper
    } else if y > viewport.height * high {
        VerticalZone::Lower
    } else {
        VerticalZone::Mid
    };
    Zone::new(vertical, horizontal)
}

/// Bucket a speed in px/ms. `thresholds` = `[rapid, fast, moderate, slow]`;
/// a value exactly on a boundary stays in the lower bucket.
pub fn classify_speed(px_per_ms: f32, thresholds: [f32; 4]) -> Speed {
    let [rapid, fast, moderate, slow] = thresholds;
    if px_per_ms > rapid {
        Speed::Rapid
    } else if px_per_ms > fast {
        Speed::Fast
    } else if px_per_ms > moderate {
        Speed::Moderate
    } else if px_per_ms > slow {
        Speed::Slow
    } else {
        Speed::Idle
    }
}

/// `NNNN:NNNN`, floored and zero padded. Off-screen negatives pin to 0.
pub fn format_coords(x: f32, y: f32) -> String {
    format!("{:04}:{:04}", x.max(0.0).floor() as u32, y.max(0.0).floor() as u32)
}

/// Pointer distance over elapsed time between consecutive samples.
pub fn sample_speed(prev: &PointerSample, cur: &PointerSample) -> f32 {
    let elapsed = cur.timestamp_ms.saturating_sub(prev.timestamp_ms);
    if elapsed == 0 {
        return 0.0;
    }
    prev.point().distance(cur.point()) / elapsed as f32
}

/// Motion classifier state machine.
#[derive(Debug, Clone)]
pub struct MotionClassifier {
    state: MotionState,
    last: PointerSample,
    revert: Deadline<()>,
    settle: Deadline<()>,
    mounted: bool,
    zone_split: (f32, f32),
    speed_thresholds: [f32; 4],
    release_revert_ms: Millis,
    click_revert_ms: Millis,
    scroll_revert_ms: Millis,
    settle_delay_ms: Millis,
}

impl MotionClassifier {
    pub fn new(cfg: &HudConfig) -> Self {
        Self {
            state: MotionState::default(),
            last: PointerSample::new(0.0, 0.0, 0),
            revert: Deadline::new(),
            settle: Deadline::new(),
            mounted: false,
            zone_split: (cfg.zone_split_low, cfg.zone_split_high),
            speed_thresholds: cfg.speed_thresholds,
            release_revert_ms: cfg.release_revert_ms,
            click_revert_ms: cfg.click_revert_ms,
            scroll_revert_ms: cfg.scroll_revert_ms,
            settle_delay_ms: cfg.settle_delay_ms,
        }
    }

    /// Reset to STANDBY/INITIALIZING and arm the settle timer.
    /// The speed baseline starts at the origin at mount time.
    pub fn mount(&mut self, now: Millis) {
        self.state = MotionState::default();
        self.last = PointerSample::new(0.0, 0.0, now);
        self.revert.cancel();
        self.settle.schedule(now + self.settle_delay_ms, ());
        self.mounted = true;
        log::debug!("motion classifier mounted at {}ms", now);
    }

    /// Clear every pending timer; later events are ignored.
    pub fn unmount(&mut self) {
        self.revert.cancel();
        self.settle.cancel();
        self.mounted = false;
        log::debug!("motion classifier unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn on_pointer_move(&mut self, sample: PointerSample, viewport: &Viewport) {
        if !self.mounted {
            return;
        }
        let speed = classify_speed(sample_speed(&self.last, &sample), self.speed_thresholds);
        let (low, high) = self.zone_split;
        let zone = classify_zone(sample.x, sample.y, viewport, low, high);
        self.state.zone = ZoneReading::At(zone);
        self.state.speed = SpeedReading::At(speed);
        self.state.coords = format_coords(sample.x, sample.y);
        self.last = sample;
        log::trace!("motion {} {} {}", self.state.zone, self.state.speed, self.state.coords);
    }

    /// Press: immediate, and no revert is left pending.
    pub fn on_pointer_down(&mut self, _now: Millis) {
        if !self.mounted {
            return;
        }
        self.revert.cancel();
        self.state.action = Action::Pressing;
    }

    pub fn on_pointer_up(&mut self, now: Millis) {
        self.act(Action::Released, now, self.release_revert_ms);
    }

    pub fn on_click(&mut self, now: Millis) {
        self.act(Action::ClickDetected, now, self.click_revert_ms);
    }

    pub fn on_scroll(&mut self, now: Millis) {
        self.act(Action::Scrolling, now, self.scroll_revert_ms);
    }

    fn act(&mut self, action: Action, now: Millis, hold_ms: Millis) {
        if !self.mounted {
            return;
        }
        self.state.action = action;
        if self.revert.schedule(now + hold_ms, ()) {
            log::trace!("{} superseded pending revert", action);
        }
    }

    /// Fire due timers. Returns `true` if the readout changed.
    pub fn advance(&mut self, now: Millis) -> bool {
        if !self.mounted {
            return false;
        }
        let mut changed = false;
        if self.settle.poll(now).is_some() {
            self.state.action = Action::Tracking;
            self.state.zone = ZoneReading::Scanning;
            self.state.speed = SpeedReading::Ready;
            changed = true;
        }
        if self.revert.poll(now).is_some() {
            self.state.action = Action::Tracking;
            changed = true;
        }
        changed
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    pub fn has_pending_revert(&self) -> bool {
        self.revert.is_pending()
    }

    /// Earliest pending timer, so hosts can sleep until it.
    pub fn next_due(&self) -> Option<Millis> {
        match (self.settle.due(), self.revert.due()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mounted() -> MotionClassifier {
        let mut m = MotionClassifier::new(&HudConfig::default());
        m.mount(0);
        m
    }

    fn viewport() -> Viewport {
        Viewport::new(1000.0, 1000.0)
    }

    fn speed(v: f32) -> Speed {
        classify_speed(v, HudConfig::default().speed_thresholds)
    }

    #[test]
    fn test_speed_buckets() {
        assert_eq!(speed(0.04), Speed::Idle);
        assert_eq!(speed(0.31), Speed::Moderate);
        assert_eq!(speed(0.9), Speed::Fast);
        assert_eq!(speed(2.1), Speed::Rapid);
        assert_eq!(speed(0.06), Speed::Slow);
    }

    #[test]
    fn test_speed_boundaries_use_strict_comparison() {
        assert_eq!(speed(0.05), Speed::Idle);
        assert_eq!(speed(0.3), Speed::Slow);
        assert_eq!(speed(0.8), Speed::Moderate);
        assert_eq!(speed(2.0), Speed::Fast);
        assert_eq!(speed(2.000_001), Speed::Rapid);
    }

    #[test]
    fn test_zone_grid() {
        let vp = viewport();
        let zone = |x, y| classify_zone(x, y, &vp, 0.33, 0.66).to_string();
        assert_eq!(zone(100.0, 100.0), "UPPER-LEFT");
        assert_eq!(zone(500.0, 500.0), "MID-CENTER");
        assert_eq!(zone(900.0, 900.0), "LOWER-RIGHT");
        assert_eq!(zone(900.0, 100.0), "UPPER-RIGHT");
        assert_eq!(zone(340.0, 650.0), "MID-CENTER");
    }

    #[test]
    fn test_coords_format() {
        assert_eq!(format_coords(7.9, 1234.2), "0007:1234");
        assert_eq!(format_coords(-3.0, 12.0), "0000:0012");
        assert_eq!(format_coords(12345.0, 0.0), "12345:0000");
    }

    #[test]
    fn test_initial_and_settled_readout() {
        let mut m = mounted();
        assert_eq!(m.state().zone.to_string(), "INITIALIZING");
        assert_eq!(m.state().speed.to_string(), "CALIBRATING");
        assert_eq!(m.state().action, Action::Standby);
        assert_eq!(m.state().coords, "0000:0000");
        assert!(!m.advance(499));
        assert!(m.advance(500));
        assert_eq!(m.state().zone, ZoneReading::Scanning);
        assert_eq!(m.state().speed, SpeedReading::Ready);
        assert_eq!(m.state().action, Action::Tracking);
        assert!(!m.advance(5_000));
    }

    #[test]
    fn test_pointer_move_classification() {
        let mut m = mounted();
        m.advance(600);
        m.on_pointer_move(PointerSample::new(100.0, 100.0, 1_000), &viewport());
        m.on_pointer_move(PointerSample::new(130.0, 140.0, 1_100), &viewport());
        let s = m.state();
        assert_eq!(s.zone.to_string(), "UPPER-LEFT");
        // 50px in 100ms = 0.5 px/ms
        assert_eq!(s.speed, SpeedReading::At(Speed::Moderate));
        assert_eq!(s.coords, "0130:0140");
        assert_eq!(s.action, Action::Tracking);
    }

    #[test]
    fn test_same_timestamp_is_idle() {
        let mut m = mounted();
        m.on_pointer_move(PointerSample::new(10.0, 10.0, 0), &viewport());
        assert_eq!(m.state().speed, SpeedReading::At(Speed::Idle));
    }

    #[test]
    fn test_two_clicks_one_revert() {
        let mut m = mounted();
        m.advance(500);
        m.on_click(1_000);
        m.on_click(1_100);
        assert!(m.has_pending_revert());

        let mut reverts = 0;
        for now in 1_000..=3_000 {
            if m.advance(now) && m.state().action == Action::Tracking {
                reverts += 1;
                assert_eq!(now, 1_900);
            }
        }
        assert_eq!(reverts, 1);
        assert!(!m.has_pending_revert());
    }

    #[test]
    fn test_release_then_scroll_supersedes() {
        let mut m = mounted();
        m.advance(500);
        m.on_pointer_up(1_000);
        assert_eq!(m.state().action, Action::Released);
        m.on_scroll(1_100);
        assert_eq!(m.state().action, Action::Scrolling);
        assert!(!m.advance(1_399));
        assert_eq!(m.state().action, Action::Scrolling);
        assert!(m.advance(1_400));
        assert_eq!(m.state().action, Action::Tracking);
        // The release timer (due 1500) was replaced, not queued.
        assert!(!m.advance(1_500));
    }

    #[test]
    fn test_press_cancels_pending_revert() {
        let mut m = mounted();
        m.advance(500);
        m.on_click(1_000);
        m.on_pointer_down(1_050);
        assert_eq!(m.state().action, Action::Pressing);
        assert!(!m.has_pending_revert());
        assert!(!m.advance(10_000));
        assert_eq!(m.state().action, Action::Pressing);
    }

    #[test]
    fn test_unmount_clears_timers_and_ignores_events() {
        let mut m = mounted();
        m.on_click(100);
        m.unmount();
        assert!(!m.has_pending_revert());
        assert_eq!(m.next_due(), None);
        assert!(!m.advance(10_000));
        m.on_scroll(10_001);
        m.on_pointer_move(PointerSample::new(900.0, 900.0, 10_002), &viewport());
        assert_eq!(m.state().action, Action::ClickDetected);
        assert_eq!(m.state().coords, "0000:0000");
    }

    #[test]
    fn test_next_due_is_earliest() {
        let mut m = mounted();
        m.on_scroll(100);
        assert_eq!(m.next_due(), Some(400));
    }
}
