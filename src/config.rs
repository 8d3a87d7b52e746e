//! HUD tuning constants.
//!
//! Every threshold and duration the engine uses lives here. There is no
//! config file and no environment lookup: `HudConfig::default()` is the
//! shipped landing page, and hosts that want a different feel build a
//! `HudConfig` in code and run it through [`HudConfig::validate`].

use thiserror::Error;

use crate::schedule::Millis;

// ─── Lifecycle ───────────────────────────────────────────────────────────────

/// Delay between hero mount and the "loaded" entrance flag.
pub const ENTRANCE_DELAY_MS: Millis = 100;
/// Delay between mount and the first TRACKING readout.
pub const SETTLE_DELAY_MS: Millis = 500;

// ─── Motion classifier ───────────────────────────────────────────────────────

pub const RELEASE_REVERT_MS: Millis = 500;
pub const CLICK_REVERT_MS: Millis = 800;
pub const SCROLL_REVERT_MS: Millis = 300;

/// Viewport fractions splitting the 3×3 zone grid.
pub const ZONE_SPLIT_LOW: f32 = 0.33;
pub const ZONE_SPLIT_HIGH: f32 = 0.66;

/// Speed bucket lower bounds in px/ms (strict `>` comparisons).
pub const SPEED_RAPID: f32 = 2.0;
pub const SPEED_FAST: f32 = 0.8;
pub const SPEED_MODERATE: f32 = 0.3;
pub const SPEED_SLOW: f32 = 0.05;

// ─── Gaze tracker ────────────────────────────────────────────────────────────

/// The corner eye takes over once `scroll_y > viewport_height * this`.
pub const CORNER_ANCHOR_FRACTION: f32 = 0.7;
/// Hero eye: pupil travel = min(distance / divisor, max).
pub const GAZE_DISTANCE_DIVISOR: f32 = 10.0;
pub const GAZE_MAX_OFFSET: f32 = 8.0;
/// Decorative logo eye: pupil travel capped at this share of the radius.
pub const LOGO_RADIUS_FRACTION: f32 = 0.35;

// ─── Text effects ────────────────────────────────────────────────────────────

pub const SCRAMBLE_TICK_MS: Millis = 30;
pub const SCRAMBLE_TICKS_PER_CHAR: u32 = 3;
pub const SCRAMBLE_STAGGER_MS: Millis = 400;
pub const SCRAMBLE_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub const TYPEWRITER_TICK_MS: Millis = 50;

// ─── Counters & section effects ──────────────────────────────────────────────

pub const COUNTER_DURATION_MS: Millis = 2000;
pub const FEATURE_ROTATE_MS: Millis = 5000;
pub const PULSE_STEP: f32 = 0.005;
pub const PULSE_LANE_OFFSET: f32 = 0.15;
pub const PULSE_RADIUS_FRACTION: f32 = 0.7;

/// Header switches to its solid background past this scroll offset.
pub const HEADER_SCROLLED_PX: f32 = 50.0;

// ─── Reveal thresholds ───────────────────────────────────────────────────────

pub const REVEAL_PROBLEM: f32 = 0.1;
pub const REVEAL_CONCLUSION: f32 = 0.8;
pub const REVEAL_COUNTER: f32 = 0.5;
pub const REVEAL_SOLUTION: f32 = 0.2;
pub const REVEAL_CAPABILITIES: f32 = 0.15;
pub const REVEAL_FEATURES: f32 = 0.2;
pub const REVEAL_INDUSTRIES: f32 = 0.2;
pub const REVEAL_TRUST: f32 = 0.3;
pub const REVEAL_CTA: f32 = 0.3;

/// Invalid tuning rejected by [`HudConfig::validate`].
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be > 0 ms")]
    ZeroDuration { name: &'static str },
    #[error("{name} = {value} is outside (0, 1]")]
    FractionOutOfRange { name: &'static str, value: f32 },
    #[error("zone splits must satisfy 0 < low < high < 1 (got {low}, {high})")]
    ZoneSplits { low: f32, high: f32 },
    #[error("speed thresholds must be strictly descending from rapid to slow")]
    SpeedThresholds,
    #[error("gaze clamp must be positive (divisor {divisor}, max {max})")]
    GazeClamp { divisor: f32, max: f32 },
    #[error("scramble alphabet is empty")]
    EmptyAlphabet,
    #[error("scramble needs at least one tick per character")]
    ZeroTicksPerChar,
}

/// Runtime view of the constants above.
#[derive(Debug, Clone, PartialEq)]
pub struct HudConfig {
    pub entrance_delay_ms: Millis,
    pub settle_delay_ms: Millis,
    pub release_revert_ms: Millis,
    pub click_revert_ms: Millis,
    pub scroll_revert_ms: Millis,
    pub zone_split_low: f32,
    pub zone_split_high: f32,
    /// `[rapid, fast, moderate, slow]` in px/ms.
    pub speed_thresholds: [f32; 4],
    pub corner_anchor_fraction: f32,
    pub gaze_distance_divisor: f32,
    pub gaze_max_offset: f32,
    pub logo_radius_fraction: f32,
    pub scramble_tick_ms: Millis,
    pub scramble_ticks_per_char: u32,
    pub scramble_stagger_ms: Millis,
    pub scramble_alphabet: Vec<char>,
    pub typewriter_tick_ms: Millis,
    pub counter_duration_ms: Millis,
    pub feature_rotate_ms: Millis,
    pub pulse_step: f32,
    pub header_scrolled_px: f32,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            entrance_delay_ms: ENTRANCE_DELAY_MS,
            settle_delay_ms: SETTLE_DELAY_MS,
            release_revert_ms: RELEASE_REVERT_MS,
            click_revert_ms: CLICK_REVERT_MS,
            scroll_revert_ms: SCROLL_REVERT_MS,
            zone_split_low: ZONE_SPLIT_LOW,
            zone_split_high: ZONE_SPLIT_HIGH,
            speed_thresholds: [SPEED_RAPID, SPEED_FAST, SPEED_MODERATE, SPEED_SLOW],
            corner_anchor_fraction: CORNER_ANCHOR_FRACTION,
            gaze_distance_divisor: GAZE_DISTANCE_DIVISOR,
            gaze_max_offset: GAZE_MAX_OFFSET,
            logo_radius_fraction: LOGO_RADIUS_FRACTION,
            scramble_tick_ms: SCRAMBLE_TICK_MS,
            scramble_ticks_per_char: SCRAMBLE_TICKS_PER_CHAR,
            scramble_stagger_ms: SCRAMBLE_STAGGER_MS,
            scramble_alphabet: SCRAMBLE_ALPHABET.chars().collect(),
            typewriter_tick_ms: TYPEWRITER_TICK_MS,
            counter_duration_ms: COUNTER_DURATION_MS,
            feature_rotate_ms: FEATURE_ROTATE_MS,
            pulse_step: PULSE_STEP,
            header_scrolled_px: HEADER_SCROLLED_PX,
        }
    }
}

impl HudConfig {
    /// Reject settings that would stall a timer or break a classifier.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, ms) in [
            ("release_revert_ms", self.release_revert_ms),
            ("click_revert_ms", self.click_revert_ms),
            ("scroll_revert_ms", self.scroll_revert_ms),
            ("scramble_tick_ms", self.scramble_tick_ms),
            ("typewriter_tick_ms", self.typewriter_tick_ms),
            ("counter_duration_ms", self.counter_duration_ms),
            ("feature_rotate_ms", self.feature_rotate_ms),
        ] {
            if ms == 0 {
                return Err(ConfigError::ZeroDuration { name });
            }
        }

        for (name, value) in [
            ("corner_anchor_fraction", self.corner_anchor_fraction),
            ("logo_radius_fraction", self.logo_radius_fraction),
            ("pulse_step", self.pulse_step),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::FractionOutOfRange { name, value });
            }
        }

        let (low, high) = (self.zone_split_low, self.zone_split_high);
        if !(0.0 < low && low < high && high < 1.0) {
            return Err(ConfigError::ZoneSplits { low, high });
        }

        let [rapid, fast, moderate, slow] = self.speed_thresholds;
        if !(rapid > fast && fast > moderate && moderate > slow && slow >= 0.0) {
            return Err(ConfigError::SpeedThresholds);
        }

        if !(self.gaze_distance_divisor > 0.0 && self.gaze_max_offset > 0.0) {
            return Err(ConfigError::GazeClamp {
                divisor: self.gaze_distance_divisor,
                max: self.gaze_max_offset,
            });
        }

        if self.scramble_alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        if self.scramble_ticks_per_char == 0 {
            return Err(ConfigError::ZeroTicksPerChar);
        }
        Ok(())
    }
}

/// Check a reveal threshold. Thresholds are a visible-area fraction.
pub fn validate_threshold(name: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        Err(ConfigError::FractionOutOfRange { name, value })
    }
}
