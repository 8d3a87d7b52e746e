//! Page sections below the hero and their reveal gates.

use crate::anim::EasedCounter;
use crate::config::{
    REVEAL_CAPABILITIES, REVEAL_CONCLUSION, REVEAL_COUNTER, REVEAL_CTA, REVEAL_FEATURES,
    REVEAL_INDUSTRIES, REVEAL_PROBLEM, REVEAL_SOLUTION, REVEAL_TRUST,
};
use crate::reveal::RevealFlag;
use crate::schedule::{FrameDriven, Millis};

/// Observed page regions, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Problem,
    /// The typed conclusion box at the end of the problem section.
    ProblemConclusion,
    Solution,
    Capabilities,
    Features,
    Industries,
    Trust,
    Cta,
}

impl SectionId {
    pub const ALL: [SectionId; 8] = [
        SectionId::Problem,
        SectionId::ProblemConclusion,
        SectionId::Solution,
        SectionId::Capabilities,
        SectionId::Features,
        SectionId::Industries,
        SectionId::Trust,
        SectionId::Cta,
    ];

    /// Visible fraction required before the section reveals.
    pub fn threshold(&self) -> f32 {
        match self {
            SectionId::Problem => REVEAL_PROBLEM,
            SectionId::ProblemConclusion => REVEAL_CONCLUSION,
            SectionId::Solution => REVEAL_SOLUTION,
            SectionId::Capabilities => REVEAL_CAPABILITIES,
            SectionId::Features => REVEAL_FEATURES,
            SectionId::Industries => REVEAL_INDUSTRIES,
            SectionId::Trust => REVEAL_TRUST,
            SectionId::Cta => REVEAL_CTA,
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn title(&self) -> &'static str {
        match self {
            SectionId::Problem => "The Reality",
            SectionId::ProblemConclusion => "The Conclusion",
            SectionId::Solution => "The Solution",
            SectionId::Capabilities => "Capabilities",
            SectionId::Features => "Smart Features",
            SectionId::Industries => "Industries",
            SectionId::Trust => "Trust",
            SectionId::Cta => "Get Started",
        }
    }
}

/// What a visibility reading refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealTarget {
    Section(SectionId),
    /// Statistic counter by position in [`stat_counters`].
    Counter(usize),
}

/// One reveal flag per section, indexed by [`SectionId::index`].
#[derive(Debug, Clone)]
pub struct SectionReveals {
    flags: Vec<RevealFlag>,
}

impl Default for SectionReveals {
    fn default() -> Self {
        Self {
            flags: SectionId::ALL
                .iter()
                .map(|id| RevealFlag::new(id.threshold()))
                .collect(),
        }
    }
}

impl SectionReveals {
    pub fn observe_all(&mut self) {
        for f in &mut self.flags {
            f.observe();
        }
    }

    pub fn disconnect_all(&mut self) {
        for f in &mut self.flags {
            f.disconnect();
        }
    }

    /// Feed a reading. Returns `true` if this reading revealed the section.
    pub fn report(&mut self, id: SectionId, ratio: f32) -> bool {
        let flipped = self.flags[id.index()].report(ratio);
        if flipped {
            log::debug!("section {:?} revealed at {:.2}", id, ratio);
        }
        flipped
    }

    pub fn is_visible(&self, id: SectionId) -> bool {
        self.flags[id.index()].is_visible()
    }

    pub fn flag(&self, id: SectionId) -> &RevealFlag {
        &self.flags[id.index()]
    }
}

/// A statistic with its own reveal gate.
#[derive(Debug, Clone)]
pub struct StatCounter {
    pub caption: &'static str,
    flag: RevealFlag,
    counter: EasedCounter,
}

impl StatCounter {
    pub fn new(caption: &'static str, counter: EasedCounter) -> Self {
        Self {
            caption,
            flag: RevealFlag::new(REVEAL_COUNTER),
            counter,
        }
    }

    pub fn observe(&mut self) {
        self.flag.observe();
    }

    /// Tear down observer and animation.
    pub fn disconnect(&mut self) {
        self.flag.disconnect();
        self.counter.stop();
    }

    /// The first qualifying reading arms the counter.
    pub fn report(&mut self, ratio: f32) -> bool {
        if self.flag.report(ratio) {
            self.counter.trigger();
            return true;
        }
        false
    }

    pub fn is_visible(&self) -> bool {
        self.flag.is_visible()
    }

    pub fn counter(&self) -> &EasedCounter {
        &self.counter
    }

    pub fn display(&self) -> String {
        self.counter.display()
    }
}

impl FrameDriven for StatCounter {
    fn on_frame(&mut self, now: Millis) -> bool {
        self.counter.on_frame(now)
    }
}

/// The three problem-section statistics.
pub fn stat_counters(duration_ms: Millis) -> Vec<StatCounter> {
    vec![
        StatCounter::new(
            "Cameras in typical enterprise",
            EasedCounter::new(400.0).with_suffix("+").with_duration(duration_ms),
        ),
        StatCounter::new(
            "Seconds per camera, per day",
            EasedCounter::new(86_400.0).with_duration(duration_ms),
        ),
        StatCounter::new(
            "Total seconds to monitor daily",
            EasedCounter::new(34.5)
                .with_decimals(1)
                .with_suffix("M")
                .with_duration(duration_ms),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_in_range() {
        for id in SectionId::ALL {
            let t = id.threshold();
            assert!(t > 0.0 && t <= 1.0, "{:?}", id);
        }
        assert_eq!(SectionId::ProblemConclusion.threshold(), 0.8);
        assert_eq!(SectionId::Capabilities.threshold(), 0.15);
    }

    #[test]
    fn test_index_matches_order() {
        for (i, id) in SectionId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn test_reveal_latches() {
        let mut r = SectionReveals::default();
        r.observe_all();
        assert!(!r.report(SectionId::Trust, 0.2));
        assert!(r.report(SectionId::Trust, 0.35));
        assert!(!r.report(SectionId::Trust, 0.0));
        assert!(!r.report(SectionId::Trust, 0.9));
        assert!(r.is_visible(SectionId::Trust));
        assert!(!r.is_visible(SectionId::Cta));
    }

    #[test]
    fn test_unobserved_reports_ignored() {
        let mut r = SectionReveals::default();
        assert!(!r.report(SectionId::Problem, 1.0));
        r.observe_all();
        r.disconnect_all();
        assert!(!r.report(SectionId::Problem, 1.0));
    }

    #[test]
    fn test_stat_counter_gated_by_reveal() {
        let mut stats = stat_counters(2_000);
        let s = &mut stats[2];
        s.observe();
        assert!(!s.on_frame(0));
        assert!(!s.report(0.4));
        assert!(s.report(0.5));
        s.on_frame(100);
        s.on_frame(2_100);
        assert_eq!(s.display(), "34.5M");
    }

    #[test]
    fn test_stat_captions_and_initial_display() {
        let stats = stat_counters(2_000);
        let shown: Vec<String> = stats.iter().map(StatCounter::display).collect();
        assert_eq!(shown, ["0+", "0", "0.0M"]);
    }
}
