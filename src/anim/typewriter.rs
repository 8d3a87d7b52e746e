use crate::schedule::{Millis, Ticker};

/// Types `text` one character per tick once started. Stops by itself on the
/// last character; `cancel` is idempotent.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    typed: usize,
    total: usize,
    ticker: Ticker,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, tick_ms: Millis) -> Self {
        let text = text.into();
        Self {
            total: text.chars().count(),
            text,
            typed: 0,
            ticker: Ticker::new(tick_ms),
        }
    }

    /// Begin typing; the first character appears one tick after `now`.
    pub fn start(&mut self, now: Millis) {
        if self.typed == 0 && self.total > 0 && !self.ticker.is_running() {
            self.ticker.start(now);
        }
    }

    pub fn advance(&mut self, now: Millis) -> bool {
        let due = self.ticker.poll(now) as usize;
        if due == 0 {
            return false;
        }
        let before = self.typed;
        self.typed = (self.typed + due).min(self.total);
        if self.typed == self.total {
            self.ticker.stop();
        }
        self.typed != before
    }

    pub fn cancel(&mut self) {
        self.ticker.stop();
    }

    /// The prefix typed so far.
    pub fn typed_text(&self) -> &str {
        match self.text.char_indices().nth(self.typed) {
            Some((byte, _)) => &self.text[..byte],
            None => &self.text,
        }
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    pub fn is_started(&self) -> bool {
        self.typed > 0 || self.ticker.is_running()
    }

    pub fn is_done(&self) -> bool {
        self.typed == self.total
    }
}
