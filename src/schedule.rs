//! Timer primitives for the single-threaded HUD loop.
//!
//! Nothing here reads a clock. The host passes a monotonically
//! non-decreasing `now` (milliseconds) into `poll`, so the same code runs
//! under a GUI frame loop and under simulated time in tests.
//!
//! - [`Deadline`]: at most one pending one-shot. Scheduling replaces the
//!   previous one (last writer wins); cancelling is idempotent.
//! - [`Ticker`]: fixed-period repeating timer, reports how many periods
//!   elapsed since the last poll.
//! - [`FrameDriven`]: "resume me on the next display refresh".
//! - [`FrameClock`]: frame timestamps as seen by the host loop.

/// Milliseconds on the host's monotonic clock.
pub type Millis = u64;

/// A single pending one-shot timer carrying a payload.
#[derive(Debug, Clone)]
pub struct Deadline<T> {
    pending: Option<(Millis, T)>,
}

impl<T> Default for Deadline<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> Deadline<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer for `due`, replacing any outstanding one.
    /// Returns `true` if a pending timer was superseded.
    pub fn schedule(&mut self, due: Millis, payload: T) -> bool {
        self.pending.replace((due, payload)).is_some()
    }

    /// Drop the pending timer. Cancelling nothing is a no-op.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn due(&self) -> Option<Millis> {
        self.pending.as_ref().map(|(due, _)| *due)
    }

    /// Fire the timer if it is due. Fires at most once.
    pub fn poll(&mut self, now: Millis) -> Option<T> {
        match self.pending {
            Some((due, _)) if due <= now => self.pending.take().map(|(_, p)| p),
            _ => None,
        }
    }
}

/// Fixed-period repeating timer (interval semantics: first tick one
/// period after the start point).
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Millis,
    next_due: Option<Millis>,
}

impl Ticker {
    pub fn new(period: Millis) -> Self {
        Self {
            period: period.max(1),
            next_due: None,
        }
    }

    pub fn period(&self) -> Millis {
        self.period
    }

    /// Start ticking; the first tick lands at `origin + period`.
    /// Restarting a running ticker re-bases it.
    pub fn start(&mut self, origin: Millis) {
        self.next_due = Some(origin + self.period);
    }

    /// Stop ticking. Idempotent.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Number of ticks due at or before `now`, consuming them.
    pub fn poll(&mut self, now: Millis) -> u64 {
        let Some(next) = self.next_due else {
            return 0;
        };
        if now < next {
            return 0;
        }
        let ticks = (now - next) / self.period + 1;
        self.next_due = Some(next + ticks * self.period);
        ticks
    }
}

/// Work that wants to be resumed on every display refresh.
pub trait FrameDriven {
    /// Advance one frame at time `now`. Returns `true` while more frames
    /// are wanted.
    fn on_frame(&mut self, now: Millis) -> bool;
}

/// Records display-refresh timestamps.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<Millis>,
    frames: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a frame at `now`; returns the time since the previous one.
    /// A timestamp older than the last frame counts as zero elapsed.
    pub fn tick(&mut self, now: Millis) -> Millis {
        let delta = self.last.map_or(0, |last| now.saturating_sub(last));
        self.last = Some(self.last.map_or(now, |last| last.max(now)));
        self.frames += 1;
        delta
    }

    pub fn last(&self) -> Option<Millis> {
        self.last
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
