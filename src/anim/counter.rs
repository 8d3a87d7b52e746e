//! Eased statistic counter (0 → target with quartic ease-out).
//!
//! Runs once per mount: [`EasedCounter::trigger`] arms it (normally when the
//! counter's reveal flag flips), the first frame after that fixes the start
//! time, and the frame at `t >= 1` lands exactly on the target.

use crate::anim::easing::{ease_out_quart, progress};
use crate::config::COUNTER_DURATION_MS;
use crate::schedule::{FrameDriven, Millis};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterPhase {
    Idle,
    Armed,
    Running,
    Done,
}

#[derive(Debug, Clone)]
pub struct EasedCounter {
    target: f64,
    decimals: u8,
    duration_ms: Millis,
    prefix: String,
    suffix: String,
    current: f64,
    start: Option<Millis>,
    phase: CounterPhase,
}

impl EasedCounter {
    pub fn new(target: f64) -> Self {
        Self {
            target,
            decimals: 0,
            duration_ms: COUNTER_DURATION_MS,
            prefix: String::new(),
            suffix: String::new(),
            current: 0.0,
            start: None,
            phase: CounterPhase::Idle,
        }
    }

    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn with_duration(mut self, duration_ms: Millis) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Arm the animation. Only the first trigger counts.
    pub fn trigger(&mut self) -> bool {
        if self.phase != CounterPhase::Idle {
            return false;
        }
        self.phase = CounterPhase::Armed;
        true
    }

    /// Drop back to idle without animating (teardown before completion).
    pub fn stop(&mut self) {
        if matches!(self.phase, CounterPhase::Armed | CounterPhase::Running) {
            self.phase = CounterPhase::Idle;
            self.start = None;
        }
    }

    fn quantize(&self, value: f64) -> f64 {
        if self.decimals > 0 {
            let scale = 10f64.powi(self.decimals as i32);
            (value * scale).round() / scale
        } else {
            value.floor()
        }
    }

    pub fn value(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == CounterPhase::Done
    }

    /// Display string: prefix, value, suffix. Whole numbers get thousands
    /// separators, fractional counters keep exactly `decimals` places.
    pub fn display(&self) -> String {
        let body = if self.decimals > 0 {
            format!("{:.*}", self.decimals as usize, self.current)
        } else {
            group_thousands(self.current as i64)
        };
        format!("{}{}{}", self.prefix, body, self.suffix)
    }
}

impl FrameDriven for EasedCounter {
    fn on_frame(&mut self, now: Millis) -> bool {
        match self.phase {
            CounterPhase::Idle | CounterPhase::Done => return false,
            CounterPhase::Armed => self.phase = CounterPhase::Running,
            CounterPhase::Running => {}
        }
        let start = *self.start.get_or_insert(now);
        let t = progress(now.saturating_sub(start), self.duration_ms);
        if t >= 1.0 {
            self.current = self.target;
            self.phase = CounterPhase::Done;
            log::debug!("counter reached {}", self.display());
            return false;
        }
        self.current = self.quantize(self.target * ease_out_quart(t));
        true
    }
}

/// `86400` → `"86,400"`.
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
