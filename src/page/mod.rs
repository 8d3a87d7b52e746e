//! The landing page as one unit.
//!
//! `Page` owns every stateful piece the page needs and is the only thing a
//! host talks to: `mount` once the layout exists, `handle` each input event
//! in delivery order, `advance` once per display refresh, `unmount` on
//! teardown. After `unmount` the page ignores input and fires nothing.

pub mod header;
pub mod hero;
pub mod sections;

use crate::anim::{FeatureRotator, IndustryPulse, ScrambleHeadline, Typewriter};
use crate::config::{ConfigError, HudConfig};
use crate::event::InputEvent;
use crate::host::{AnchorSlot, LayoutHost};
use crate::schedule::{FrameClock, FrameDriven, Millis};
use crate::tracking::{DecorativeEye, GazeOffset};

pub use header::{Header, NavTarget};
pub use hero::{Hero, HEADLINE, HIGHLIGHT_LINE};
pub use sections::{stat_counters, RevealTarget, SectionId, SectionReveals, StatCounter};

pub const CONCLUSION_TEXT: &str = "It's that humans were never built for this.";

pub const FEATURES: [&str; 3] = [
    "Video Search & Summarization",
    "Face Detection & Forensics",
    "Operational Dashboards",
];

pub const INDUSTRIES: [&str; 6] = [
    "Government",
    "Oil & Gas",
    "Retail",
    "Healthcare",
    "Banking",
    "Logistics",
];

#[derive(Debug)]
pub struct Page {
    config: HudConfig,
    seed: Option<u64>,
    header: Header,
    hero: Hero,
    reveals: SectionReveals,
    stats: Vec<StatCounter>,
    conclusion: Typewriter,
    features: FeatureRotator,
    pulse: IndustryPulse,
    logo: DecorativeEye,
    frames: FrameClock,
    mounted: bool,
}

impl Default for Page {
    fn default() -> Self {
        Self::build(HudConfig::default(), None)
    }
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: HudConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, None))
    }

    /// Same as [`Page::with_config`] with a fixed scramble seed.
    pub fn with_seed(config: HudConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, Some(seed)))
    }

    fn build(config: HudConfig, seed: Option<u64>) -> Self {
        let headline = match seed {
            Some(seed) => ScrambleHeadline::with_seed(&HEADLINE, &config, seed),
            None => ScrambleHeadline::new(&HEADLINE, &config),
        };
        Self {
            header: Header::new(config.header_scrolled_px),
            hero: Hero::new(&config, headline),
            reveals: SectionReveals::default(),
            stats: stat_counters(config.counter_duration_ms),
            conclusion: Typewriter::new(CONCLUSION_TEXT, config.typewriter_tick_ms),
            features: FeatureRotator::new(FEATURES.len(), config.feature_rotate_ms),
            pulse: IndustryPulse::new(INDUSTRIES.len(), config.pulse_step),
            logo: DecorativeEye::new(AnchorSlot::Logo, config.logo_radius_fraction),
            frames: FrameClock::new(),
            mounted: false,
            config,
            seed,
        }
    }

    /// Start observing and arm the entrance timers. Mounting again starts
    /// from fresh state: reveal flags and one-shot animations re-arm.
    pub fn mount<H: LayoutHost + ?Sized>(&mut self, now: Millis, host: &H) {
        if self.mounted {
            self.unmount();
        }
        *self = Self::build(self.config.clone(), self.seed);

        self.hero.mount(now, host);
        self.reveals.observe_all();
        for s in &mut self.stats {
            s.observe();
        }
        self.pulse.start();
        self.header.on_scroll(host.viewport().scroll_y);
        self.mounted = true;
        log::debug!("page mounted at {}ms", now);
    }

    /// Disconnect every observer and cancel every timer.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.hero.unmount();
        self.reveals.disconnect_all();
        for s in &mut self.stats {
            s.disconnect();
        }
        self.conclusion.cancel();
        self.features.stop();
        self.pulse.stop();
        self.frames.reset();
        self.mounted = false;
        log::debug!("page unmounted");
    }

    /// Route one input event. Returns `true` if anything visible changed.
    pub fn handle<H: LayoutHost + ?Sized>(&mut self, event: &InputEvent, host: &H) -> bool {
        if !self.mounted {
            return false;
        }
        let mut changed = self.hero.handle(event, host);
        match *event {
            InputEvent::PointerMove(sample) => {
                changed |= self.logo.on_pointer_move(host, sample.point()).is_some();
            }
            InputEvent::Scroll { .. } => {
                changed |= self.header.on_scroll(host.viewport().scroll_y);
            }
            InputEvent::Visibility { target, ratio } => {
                changed |= self.report_visibility(target, ratio);
            }
            _ => {}
        }
        changed
    }

    fn report_visibility(&mut self, target: RevealTarget, ratio: f32) -> bool {
        match target {
            RevealTarget::Section(id) => {
                let flipped = self.reveals.report(id, ratio);
                if flipped && id == SectionId::Industries {
                    self.pulse.reveal();
                }
                flipped
            }
            RevealTarget::Counter(i) => self.stats.get_mut(i).is_some_and(|s| s.report(ratio)),
        }
    }

    /// Drive timers and frame callbacks up to `now`. Returns `true` while
    /// the host should keep repainting.
    pub fn advance(&mut self, now: Millis) -> bool {
        if !self.mounted {
            return false;
        }
        self.frames.tick(now);

        // Reveal-gated timers start on the first frame after their flag flips.
        if self.reveals.is_visible(SectionId::ProblemConclusion) && !self.conclusion.is_started() {
            self.conclusion.start(now);
        }
        if self.reveals.is_visible(SectionId::Features) && !self.features.is_running() {
            self.features.start(now);
        }

        let mut changed = self.hero.advance(now);
        changed |= self.conclusion.advance(now);
        changed |= self.features.advance(now);
        for s in &mut self.stats {
            changed |= s.on_frame(now);
        }
        changed |= self.pulse.on_frame(now);
        changed || self.hero.is_animating() || self.conclusion.is_running()
    }

    /// Manual feature pick (hover or click on a card).
    pub fn select_feature(&mut self, index: usize) {
        if self.mounted {
            self.features.select(index);
        }
    }

    pub fn toggle_menu(&mut self) {
        if self.mounted {
            self.header.toggle_menu();
        }
    }

    /// Close the menu and return the fragment to scroll to.
    pub fn navigate(&mut self, target: NavTarget) -> &'static str {
        self.header.navigate(target)
    }

    /// Mark a headline line's element as (un)available.
    pub fn set_headline_attached(&mut self, index: usize, attached: bool) {
        self.hero.set_line_attached(index, attached);
    }

    pub fn config(&self) -> &HudConfig {
        &self.config
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.reveals.is_visible(id)
    }

    pub fn stats(&self) -> &[StatCounter] {
        &self.stats
    }

    pub fn conclusion(&self) -> &str {
        self.conclusion.typed_text()
    }

    pub fn conclusion_done(&self) -> bool {
        self.conclusion.is_done()
    }

    pub fn active_feature(&self) -> usize {
        self.features.active()
    }

    pub fn pulse(&self) -> &IndustryPulse {
        &self.pulse
    }

    pub fn logo_offset(&self) -> GazeOffset {
        self.logo.offset()
    }

    pub fn frame_count(&self) -> u64 {
        self.frames.frames()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::CounterPhase;
    use crate::geometry::Rect;
    use crate::host::StaticLayout;
    use crate::tracking::Action;

    fn layout() -> StaticLayout {
        StaticLayout::new(1000.0, 800.0)
            .with_anchor(AnchorSlot::Primary, Rect::new(450.0, 350.0, 100.0, 100.0))
            .with_anchor(AnchorSlot::Corner, Rect::new(920.0, 720.0, 48.0, 48.0))
            .with_anchor(AnchorSlot::Logo, Rect::new(400.0, 3_000.0, 200.0, 200.0))
    }

    fn mounted(host: &StaticLayout) -> Page {
        let mut page = Page::with_seed(HudConfig::default(), 9).unwrap();
        page.mount(0, host);
        page
    }

    fn visibility(target: RevealTarget, ratio: f32) -> InputEvent {
        InputEvent::Visibility { target, ratio }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let cfg = HudConfig {
            scramble_alphabet: Vec::new(),
            ..HudConfig::default()
        };
        assert_eq!(Page::with_config(cfg).err(), Some(ConfigError::EmptyAlphabet));
    }

    #[test]
    fn test_two_clicks_one_revert() {
        let host = layout();
        let mut page = mounted(&host);
        page.advance(500);
        page.handle(&InputEvent::Click { at: 1_000 }, &host);
        page.handle(&InputEvent::Click { at: 1_100 }, &host);
        page.advance(1_800);
        assert_eq!(page.hero().motion().action, Action::ClickDetected);
        page.advance(1_900);
        assert_eq!(page.hero().motion().action, Action::Tracking);
    }

    #[test]
    fn test_counter_runs_after_reveal() {
        let host = layout();
        let mut page = mounted(&host);
        page.advance(16);
        assert_eq!(page.stats()[1].display(), "0");
        page.handle(&visibility(RevealTarget::Counter(1), 0.6), &host);
        page.advance(100);
        page.advance(2_100);
        assert_eq!(page.stats()[1].display(), "86,400");
        assert_eq!(page.stats()[0].counter().phase(), CounterPhase::Idle);
    }

    #[test]
    fn test_unknown_counter_ignored() {
        let host = layout();
        let mut page = mounted(&host);
        assert!(!page.handle(&visibility(RevealTarget::Counter(7), 1.0), &host));
    }

    #[test]
    fn test_conclusion_types_after_reveal() {
        let host = layout();
        let mut page = mounted(&host);
        page.handle(&visibility(RevealTarget::Section(SectionId::ProblemConclusion), 0.5), &host);
        page.advance(1_000);
        assert_eq!(page.conclusion(), "");
        page.handle(&visibility(RevealTarget::Section(SectionId::ProblemConclusion), 0.85), &host);
        page.advance(2_000);
        page.advance(2_100);
        assert_eq!(page.conclusion(), "It");
        page.advance(60_000);
        assert_eq!(page.conclusion(), CONCLUSION_TEXT);
        assert!(page.conclusion_done());
    }

    #[test]
    fn test_features_rotate_only_once_revealed() {
        let host = layout();
        let mut page = mounted(&host);
        page.advance(20_000);
        assert_eq!(page.active_feature(), 0);
        page.handle(&visibility(RevealTarget::Section(SectionId::Features), 0.3), &host);
        page.advance(20_016);
        page.advance(25_016);
        assert_eq!(page.active_feature(), 1);
        page.select_feature(0);
        assert_eq!(page.active_feature(), 0);
    }

    #[test]
    fn test_pulse_dots_after_industries_reveal() {
        let host = layout();
        let mut page = mounted(&host);
        page.advance(16);
        assert!(page.pulse().dots(400.0, 400.0).is_empty());
        page.handle(&visibility(RevealTarget::Section(SectionId::Industries), 0.25), &host);
        assert_eq!(page.pulse().dots(400.0, 400.0).len(), INDUSTRIES.len());
    }

    #[test]
    fn test_reveal_never_reverts() {
        let host = layout();
        let mut page = mounted(&host);
        page.handle(&visibility(RevealTarget::Section(SectionId::Solution), 0.5), &host);
        page.handle(&visibility(RevealTarget::Section(SectionId::Solution), 0.0), &host);
        assert!(page.is_revealed(SectionId::Solution));
    }

    #[test]
    fn test_header_and_corner_eye_follow_scroll() {
        let mut host = layout();
        let mut page = mounted(&host);
        host.scroll_to(100.0);
        page.handle(&InputEvent::Scroll { at: 10 }, &host);
        assert!(page.header().is_scrolled());
        assert!(!page.hero().is_past_hero());
        host.scroll_to(700.0);
        page.handle(&InputEvent::Scroll { at: 20 }, &host);
        assert!(page.hero().is_past_hero());
    }

    #[test]
    fn test_menu_closes_on_navigate() {
        let host = layout();
        let mut page = mounted(&host);
        page.toggle_menu();
        assert!(page.header().is_menu_open());
        assert_eq!(page.navigate(NavTarget::Solution), "#solution");
        assert!(!page.header().is_menu_open());
    }

    #[test]
    fn test_logo_eye_proportional_clamp() {
        let host = layout();
        let mut page = mounted(&host);
        page.handle(&InputEvent::pointer_move(0.0, 0.0, 10), &host);
        // Logo radius 100, clamp 35%.
        assert!((page.logo_offset().magnitude() - 35.0).abs() < 1e-3);
    }

    #[test]
    fn test_unmount_silences_page() {
        let host = layout();
        let mut page = mounted(&host);
        page.handle(&visibility(RevealTarget::Counter(0), 1.0), &host);
        page.handle(&InputEvent::Click { at: 50 }, &host);
        page.unmount();
        page.unmount();
        assert!(!page.advance(5_000));
        assert!(!page.handle(&InputEvent::Click { at: 5_001 }, &host));
        assert!(!page.hero().is_loaded());
        assert_eq!(page.stats()[0].display(), "0+");
        assert_eq!(page.hero().motion().action, Action::ClickDetected);
    }

    #[test]
    fn test_remount_starts_fresh() {
        let host = layout();
        let mut page = mounted(&host);
        page.handle(&visibility(RevealTarget::Section(SectionId::Trust), 1.0), &host);
        page.unmount();
        page.mount(10_000, &host);
        assert!(!page.is_revealed(SectionId::Trust));
        page.advance(10_100);
        assert!(page.hero().is_loaded());
    }
}
