use crate::schedule::{Millis, Ticker};

/// Cycles the highlighted feature card on a fixed period while running.
#[derive(Debug, Clone)]
pub struct FeatureRotator {
    count: usize,
    active: usize,
    ticker: Ticker,
}

impl FeatureRotator {
    pub fn new(count: usize, period_ms: Millis) -> Self {
        Self {
            count,
            active: 0,
            ticker: Ticker::new(period_ms),
        }
    }

    pub fn start(&mut self, now: Millis) {
        if self.count > 1 && !self.ticker.is_running() {
            self.ticker.start(now);
        }
    }

    pub fn stop(&mut self) {
        self.ticker.stop();
    }

    pub fn advance(&mut self, now: Millis) -> bool {
        let due = self.ticker.poll(now) as usize;
        if due == 0 || self.count == 0 {
            return false;
        }
        self.active = (self.active + due) % self.count;
        true
    }

    /// Manual selection (hover/click). Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.count {
            self.active = index;
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }
}
