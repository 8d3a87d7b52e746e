//! Sticky header: solid background past a scroll offset, plus the mobile
//! menu that closes whenever a destination is picked.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Top,
    Problem,
    Solution,
    Capabilities,
    Industries,
    Contact,
}

impl NavTarget {
    pub const ALL: [NavTarget; 6] = [
        NavTarget::Top,
        NavTarget::Problem,
        NavTarget::Solution,
        NavTarget::Capabilities,
        NavTarget::Industries,
        NavTarget::Contact,
    ];

    /// In-page fragment the host scrolls to.
    pub fn anchor(&self) -> &'static str {
        match self {
            NavTarget::Top => "#top",
            NavTarget::Problem => "#problem",
            NavTarget::Solution => "#solution",
            NavTarget::Capabilities => "#capabilities",
            NavTarget::Industries => "#industries",
            NavTarget::Contact => "#contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavTarget::Top => "SAVIA",
            NavTarget::Problem => "Problem",
            NavTarget::Solution => "Solution",
            NavTarget::Capabilities => "Capabilities",
            NavTarget::Industries => "Industries",
            NavTarget::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Header {
    threshold: f32,
    scrolled: bool,
    menu_open: bool,
}

impl Header {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            scrolled: false,
            menu_open: false,
        }
    }

    /// Returns `true` if the scrolled flag changed.
    pub fn on_scroll(&mut self, scroll_y: f32) -> bool {
        let scrolled = scroll_y > self.threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Pick a destination; the mobile menu closes either way.
    pub fn navigate(&mut self, target: NavTarget) -> &'static str {
        self.menu_open = false;
        log::debug!("navigate {}", target.anchor());
        target.anchor()
    }

    pub fn reset(&mut self) {
        self.scrolled = false;
        self.menu_open = false;
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }
}
