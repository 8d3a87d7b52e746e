use crate::schedule::Millis;

/// Linear progress through a fixed-duration animation, clamped to `[0, 1]`.
pub fn progress(elapsed: Millis, duration: Millis) -> f64 {
    if duration == 0 {
        return 1.0;
    }
    (elapsed as f64 / duration as f64).min(1.0)
}

/// Quartic ease-out: fast start, gentle landing, never overshoots.
pub fn ease_out_quart(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}
