//! Industry hub pulses.
//!
//! `n` lanes radiate from the hub centre, lane `i` at angle
//! `i/n · 2π − π/2` (first lane straight up). A dot travels each lane at
//! fraction `(progress + i · lane_offset) mod 1`; `progress` advances a
//! fixed step per display frame.

use std::f32::consts::{FRAC_PI_2, TAU};

use crate::config::{PULSE_LANE_OFFSET, PULSE_RADIUS_FRACTION};
use crate::geometry::Point;
use crate::schedule::{FrameDriven, Millis};

#[derive(Debug, Clone)]
pub struct IndustryPulse {
    lanes: usize,
    step: f32,
    progress: f32,
    running: bool,
    revealed: bool,
}

impl IndustryPulse {
    pub fn new(lanes: usize, step: f32) -> Self {
        Self {
            lanes,
            step,
            progress: 0.0,
            running: false,
            revealed: false,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Dots are only drawn after the section has been revealed.
    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    fn radius(width: f32, height: f32) -> f32 {
        (width * 0.5).min(height * 0.5) * PULSE_RADIUS_FRACTION
    }

    fn lane_angle(&self, i: usize) -> f32 {
        i as f32 / self.lanes as f32 * TAU - FRAC_PI_2
    }

    /// Hub-to-rim segment for every lane, in canvas coordinates.
    pub fn lanes(&self, width: f32, height: f32) -> Vec<(Point, Point)> {
        let c = Point::new(width * 0.5, height * 0.5);
        let r = Self::radius(width, height);
        (0..self.lanes)
            .map(|i| {
                let a = self.lane_angle(i);
                (c, Point::new(c.x + a.cos() * r, c.y + a.sin() * r))
            })
            .collect()
    }

    /// Current dot positions; empty until revealed.
    pub fn dots(&self, width: f32, height: f32) -> Vec<Point> {
        if !self.revealed {
            return Vec::new();
        }
        let c = Point::new(width * 0.5, height * 0.5);
        let r = Self::radius(width, height);
        (0..self.lanes)
            .map(|i| {
                let a = self.lane_angle(i);
                let f = (self.progress + i as f32 * PULSE_LANE_OFFSET).rem_euclid(1.0);
                Point::new(c.x + a.cos() * r * f, c.y + a.sin() * r * f)
            })
            .collect()
    }
}

impl FrameDriven for IndustryPulse {
    fn on_frame(&mut self, _now: Millis) -> bool {
        if !self.running {
            return false;
        }
        self.progress = (self.progress + self.step).rem_euclid(1.0);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_first_lane_points_up() {
        let p = IndustryPulse::new(6, 0.005);
        let lanes = p.lanes(400.0, 300.0);
        assert_eq!(lanes.len(), 6);
        let (hub, rim) = lanes[0];
        assert_eq!(hub, Point::new(200.0, 150.0));
        assert!((rim.x - 200.0).abs() < EPS);
        assert!((rim.y - (150.0 - 105.0)).abs() < EPS);
    }

    #[test]
    fn test_dots_hidden_until_revealed() {
        let mut p = IndustryPulse::new(6, 0.005);
        p.start();
        p.on_frame(0);
        assert!(p.dots(400.0, 400.0).is_empty());
        p.reveal();
        assert_eq!(p.dots(400.0, 400.0).len(), 6);
    }

    #[test]
    fn test_progress_wraps() {
        let mut p = IndustryPulse::new(1, 0.25);
        p.start();
        for _ in 0..5 {
            p.on_frame(0);
        }
        assert!((p.progress() - 0.25).abs() < EPS);
        p.stop();
        assert!(!p.on_frame(0));
    }

    #[test]
    fn test_dot_offsets_per_lane() {
        let mut p = IndustryPulse::new(2, 0.005);
        p.reveal();
        let dots = p.dots(200.0, 200.0);
        // lane 0 at fraction 0 sits on the hub, lane 1 at 0.15 along.
        assert!((dots[0].x - 100.0).abs() < EPS && (dots[0].y - 100.0).abs() < EPS);
        let r = 70.0 * 0.15;
        assert!((dots[1].y - (100.0 + r)).abs() < EPS);
    }
}
