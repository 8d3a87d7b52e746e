//! Character-scramble text reveal.
//!
//! A line "decodes" left to right: at tick `k` the `i`-th non-space glyph
//! shows its final value once `i < k / ticks_per_char`, every other glyph
//! is a random alphabet character re-drawn each tick, and spaces stay
//! spaces. After `ticks_per_char × len` ticks the exact target is emitted
//! and the line's timer stops for good.
//!
//! [`scramble_frame`] is the pure renderer; [`ScrambleLine`] only drives
//! the tick counter from a [`Ticker`]; [`ScrambleHeadline`] staggers
//! several lines that run independently.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::HudConfig;
use crate::schedule::{Millis, Ticker};

/// Render one scramble frame of `target` at tick `tick`.
pub fn scramble_frame<R: Rng + ?Sized>(
    target: &str,
    tick: u32,
    ticks_per_char: u32,
    alphabet: &[char],
    rng: &mut R,
) -> String {
    let mut glyph = 0u32;
    target
        .chars()
        .map(|c| {
            if c == ' ' {
                return ' ';
            }
            let settled = glyph.saturating_mul(ticks_per_char) < tick;
            glyph += 1;
            if settled || alphabet.is_empty() {
                c
            } else {
                alphabet[rng.gen_range(0..alphabet.len())]
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScramblePhase {
    /// Waiting for start (or for the stagger delay).
    Idle,
    Running,
    Done,
    Cancelled,
}

/// One independently-timed scrambling line.
#[derive(Debug, Clone)]
pub struct ScrambleLine {
    target: String,
    start_delay: Millis,
    iteration: u32,
    max_iterations: u32,
    ticks_per_char: u32,
    ticker: Ticker,
    rendered: String,
    phase: ScramblePhase,
    attached: bool,
}

impl ScrambleLine {
    pub fn new(target: impl Into<String>, start_delay: Millis, tick_ms: Millis, ticks_per_char: u32) -> Self {
        let target = target.into();
        let max_iterations = target.chars().count() as u32 * ticks_per_char;
        Self {
            rendered: target.clone(),
            target,
            start_delay,
            iteration: 0,
            max_iterations,
            ticks_per_char,
            ticker: Ticker::new(tick_ms),
            phase: ScramblePhase::Idle,
            attached: true,
        }
    }

    /// Arm the line: first tick one period after `now + start_delay`.
    /// A line runs once; starting a finished or cancelled line does nothing.
    pub fn start(&mut self, now: Millis) {
        if self.phase != ScramblePhase::Idle {
            return;
        }
        if self.max_iterations == 0 {
            self.phase = ScramblePhase::Done;
            return;
        }
        self.ticker.start(now + self.start_delay);
        self.phase = ScramblePhase::Running;
    }

    /// Whether the element showing this line is mounted. Ticks that land
    /// while detached are skipped without progress.
    pub fn set_attached(&mut self, attached: bool) {
        self.attached = attached;
    }

    /// Apply every tick due by `now`. Returns `true` if the text changed.
    pub fn advance<R: Rng + ?Sized>(&mut self, now: Millis, alphabet: &[char], rng: &mut R) -> bool {
        if self.phase != ScramblePhase::Running {
            return false;
        }
        let due = self.ticker.poll(now);
        let mut changed = false;
        for _ in 0..due {
            if !self.attached {
                continue;
            }
            self.step(alphabet, rng);
            changed = true;
            if self.phase == ScramblePhase::Done {
                break;
            }
        }
        changed
    }

    fn step<R: Rng + ?Sized>(&mut self, alphabet: &[char], rng: &mut R) {
        self.rendered = scramble_frame(&self.target, self.iteration, self.ticks_per_char, alphabet, rng);
        self.iteration += 1;
        if self.iteration >= self.max_iterations {
            self.ticker.stop();
            self.rendered.clone_from(&self.target);
            self.phase = ScramblePhase::Done;
            log::debug!("scramble settled: {:?}", self.target);
        }
    }

    /// Stop the line's timer. Idempotent; a finished line stays finished.
    pub fn cancel(&mut self) {
        self.ticker.stop();
        if self.phase != ScramblePhase::Done {
            self.phase = ScramblePhase::Cancelled;
        }
    }

    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn phase(&self) -> ScramblePhase {
        self.phase
    }

    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    pub fn is_done(&self) -> bool {
        self.phase == ScramblePhase::Done
    }
}

/// A multi-line headline; line `i` starts `i × stagger` after the headline.
#[derive(Debug, Clone)]
pub struct ScrambleHeadline {
    lines: Vec<ScrambleLine>,
    alphabet: Vec<char>,
    rng: StdRng,
}

impl ScrambleHeadline {
    pub fn new(lines: &[&str], cfg: &HudConfig) -> Self {
        Self::with_rng(lines, cfg, StdRng::from_entropy())
    }

    /// Deterministic variant for tests and recordings.
    pub fn with_seed(lines: &[&str], cfg: &HudConfig, seed: u64) -> Self {
        Self::with_rng(lines, cfg, StdRng::seed_from_u64(seed))
    }

    fn with_rng(lines: &[&str], cfg: &HudConfig, rng: StdRng) -> Self {
        let lines = lines
            .iter()
            .enumerate()
            .map(|(i, text)| {
                ScrambleLine::new(
                    *text,
                    i as Millis * cfg.scramble_stagger_ms,
                    cfg.scramble_tick_ms,
                    cfg.scramble_ticks_per_char,
                )
            })
            .collect();
        Self {
            lines,
            alphabet: cfg.scramble_alphabet.clone(),
            rng,
        }
    }

    pub fn start(&mut self, now: Millis) {
        for line in &mut self.lines {
            line.start(now);
        }
    }

    pub fn advance(&mut self, now: Millis) -> bool {
        let mut changed = false;
        for line in &mut self.lines {
            changed |= line.advance(now, &self.alphabet, &mut self.rng);
        }
        changed
    }

    pub fn cancel(&mut self) {
        for line in &mut self.lines {
            line.cancel();
        }
    }

    pub fn lines(&self) -> &[ScrambleLine] {
        &self.lines
    }

    pub fn line_mut(&mut self, index: usize) -> Option<&mut ScrambleLine> {
        self.lines.get_mut(index)
    }

    pub fn is_running(&self) -> bool {
        self.lines.iter().any(|l| l.phase() == ScramblePhase::Running)
    }

    pub fn is_done(&self) -> bool {
        self.lines.iter().all(ScrambleLine::is_done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabet() -> Vec<char> {
        HudConfig::default().scramble_alphabet
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_frame_keeps_spaces_and_settles_prefix() {
        let target = "NO HUMAN";
        let mut rng = rng();
        // tick 7: glyphs 0..=2 settled (3 * 2 = 6 < 7)
        let frame = scramble_frame(target, 7, 3, &alphabet(), &mut rng);
        assert_eq!(frame.chars().count(), target.chars().count());
        assert!(frame.starts_with("NO H"));
        assert_eq!(frame.chars().nth(2), Some(' '));
        for c in frame.chars().filter(|c| *c != ' ') {
            assert!(c.is_ascii_uppercase() || c.is_ascii_digit());
        }
    }

    #[test]
    fn test_frame_at_tick_zero_has_nothing_settled() {
        let mut rng = rng();
        let alpha = ['#'];
        assert_eq!(scramble_frame("AB C", 0, 3, &alpha, &mut rng), "## #");
        assert_eq!(scramble_frame("AB C", 1, 3, &alpha, &mut rng), "A# #");
        assert_eq!(scramble_frame("AB C", 4, 3, &alpha, &mut rng), "AB #");
        assert_eq!(scramble_frame("AB C", 7, 3, &alpha, &mut rng), "AB C");
    }

    #[test]
    fn test_two_glyph_line_settles_after_six_ticks() {
        let mut line = ScrambleLine::new("AI", 0, 30, 3);
        let mut rng = rng();
        line.start(0);
        for k in 1..=5 {
            line.advance(k * 30, &alphabet(), &mut rng);
            assert!(!line.is_done(), "tick {}", k);
        }
        line.advance(180, &alphabet(), &mut rng);
        assert!(line.is_done());
        assert_eq!(line.rendered(), "AI");
        assert_eq!(line.iteration(), 6);

        // Terminal: later ticks never touch the text again.
        assert!(!line.advance(10_000, &alphabet(), &mut rng));
        assert_eq!(line.rendered(), "AI");
    }

    #[test]
    fn test_catch_up_after_long_gap() {
        let mut line = ScrambleLine::new("Every Day.", 0, 30, 3);
        let mut rng = rng();
        line.start(0);
        assert!(line.advance(60_000, &alphabet(), &mut rng));
        assert!(line.is_done());
        assert_eq!(line.rendered(), "Every Day.");
        assert_eq!(line.iteration(), 30);
    }

    #[test]
    fn test_detached_ticks_are_skipped() {
        let mut line = ScrambleLine::new("AI", 0, 30, 3);
        let mut rng = rng();
        line.start(0);
        line.set_attached(false);
        assert!(!line.advance(90, &alphabet(), &mut rng));
        assert_eq!(line.iteration(), 0);
        line.set_attached(true);
        line.advance(120, &alphabet(), &mut rng);
        assert_eq!(line.iteration(), 1);
    }

    #[test]
    fn test_cancel_is_idempotent_and_final() {
        let mut line = ScrambleLine::new("AI", 0, 30, 3);
        let mut rng = rng();
        line.start(0);
        line.advance(30, &alphabet(), &mut rng);
        line.cancel();
        line.cancel();
        assert_eq!(line.phase(), ScramblePhase::Cancelled);
        assert!(!line.advance(1_000, &alphabet(), &mut rng));
        line.start(2_000);
        assert_eq!(line.phase(), ScramblePhase::Cancelled);
    }

    #[test]
    fn test_empty_line_is_done_on_start() {
        let mut line = ScrambleLine::new("", 0, 30, 3);
        line.start(0);
        assert!(line.is_done());
        assert_eq!(line.rendered(), "");
    }

    #[test]
    fn test_headline_stagger() {
        let cfg = HudConfig::default();
        let mut h = ScrambleHeadline::with_seed(&["AI", "AI", "AI"], &cfg, 1);
        h.start(0);
        // Line 0 done at 180ms; line 1 starts at 400 and is done at 580.
        h.advance(180);
        assert!(h.lines()[0].is_done());
        assert_eq!(h.lines()[1].iteration(), 0);
        h.advance(579);
        assert!(!h.lines()[1].is_done());
        h.advance(580);
        assert!(h.lines()[1].is_done());
        assert_eq!(h.lines()[2].iteration(), 0);
        h.advance(980);
        assert!(h.is_done());
        assert!(!h.is_running());
        for line in h.lines() {
            assert_eq!(line.rendered(), "AI");
        }
    }
}
