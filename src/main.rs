use eframe::egui;
use std::time::Instant;

use savia_hud::geometry::{Point, Rect, Viewport};
use savia_hud::page::{
    NavTarget, RevealTarget, SectionId, FEATURES, HEADLINE, HIGHLIGHT_LINE, INDUSTRIES,
};
use savia_hud::reveal::intersection_ratio;
use savia_hud::tracking::GazeOffset;
use savia_hud::{AnchorSlot, InputEvent, LayoutHost, Millis, Page};

const BG: egui::Color32 = egui::Color32::from_rgb(10, 14, 23);
const ACCENT: egui::Color32 = egui::Color32::from_rgb(0, 229, 255);
const ALERT: egui::Color32 = egui::Color32::from_rgb(255, 107, 107);
const MUTED: egui::Color32 = egui::Color32::from_rgb(148, 163, 184);

/// Document order; the hero occupies slot 0.
const SECTIONS: [SectionId; 7] = [
    SectionId::Problem,
    SectionId::Solution,
    SectionId::Capabilities,
    SectionId::Features,
    SectionId::Industries,
    SectionId::Trust,
    SectionId::Cta,
];

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("SAVIA"),
        ..Default::default()
    };

    eframe::run_native(
        "SAVIA Video Intelligence",
        options,
        Box::new(|_cc| Ok(Box::new(HudApp::new()))),
    )
}

// ─── Layout ──────────────────────────────────────────────────────────────────

/// A stack of viewport-tall sections scrolled by `scroll_y`. Everything is
/// in client coordinates relative to the central panel.
#[derive(Debug, Clone, Copy, Default)]
struct DocLayout {
    width: f32,
    height: f32,
    scroll_y: f32,
}

impl DocLayout {
    fn slots() -> usize {
        SECTIONS.len() + 1
    }

    fn doc_height(&self) -> f32 {
        Self::slots() as f32 * self.height
    }

    fn max_scroll(&self) -> f32 {
        (self.doc_height() - self.height).max(0.0)
    }

    fn slot(&self, index: usize) -> Rect {
        Rect::new(0.0, index as f32 * self.height - self.scroll_y, self.width, self.height)
    }

    fn section(&self, id: SectionId) -> Rect {
        match id {
            SectionId::ProblemConclusion => {
                let p = self.section(SectionId::Problem);
                Rect::new(p.width * 0.25, p.top + p.height * 0.72, p.width * 0.5, p.height * 0.18)
            }
            _ => {
                let index = SECTIONS.iter().position(|s| *s == id).unwrap_or(0);
                self.slot(index + 1)
            }
        }
    }

    fn counter(&self, i: usize) -> Rect {
        let p = self.section(SectionId::Problem);
        let w = p.width / 3.0;
        Rect::new(i as f32 * w, p.top + p.height * 0.3, w, p.height * 0.25)
    }

    fn feature_card(&self, i: usize) -> Rect {
        let s = self.section(SectionId::Features);
        let w = (s.width - 160.0) / 3.0;
        Rect::new(40.0 + i as f32 * (w + 40.0), s.top + s.height * 0.35, w, s.height * 0.35)
    }

    fn hub(&self) -> Rect {
        let s = self.section(SectionId::Industries);
        let side = s.height * 0.7;
        Rect::new((s.width - side) * 0.5, s.top + s.height * 0.2, side, side)
    }

    fn nav_top(&self, target: NavTarget) -> f32 {
        let slot = match target {
            NavTarget::Top => 0,
            NavTarget::Problem => 1,
            NavTarget::Solution => 2,
            NavTarget::Capabilities => 3,
            NavTarget::Industries => 5,
            NavTarget::Contact => 7,
        };
        (slot as f32 * self.height).min(self.max_scroll())
    }
}

impl LayoutHost for DocLayout {
    fn viewport(&self) -> Viewport {
        Viewport {
            width: self.width,
            height: self.height,
            scroll_y: self.scroll_y,
        }
    }

    fn anchor_rect(&self, slot: AnchorSlot) -> Option<Rect> {
        match slot {
            AnchorSlot::Primary => {
                let hero = self.slot(0);
                Some(Rect::new(hero.width * 0.5 - 70.0, hero.top + hero.height * 0.62, 140.0, 140.0))
            }
            AnchorSlot::Corner => Some(Rect::new(self.width - 88.0, self.height - 88.0, 56.0, 56.0)),
            AnchorSlot::Logo => {
                let cta = self.section(SectionId::Cta);
                Some(Rect::new(cta.width * 0.5 - 60.0, cta.top + cta.height * 0.2, 120.0, 120.0))
            }
        }
    }
}

// ─── App ─────────────────────────────────────────────────────────────────────

struct HudApp {
    page: Page,
    layout: DocLayout,
    start: Instant,
    last_pointer: Option<egui::Pos2>,
    last_size: egui::Vec2,
    mounted: bool,
}

impl HudApp {
    fn new() -> Self {
        Self {
            page: Page::new(),
            layout: DocLayout::default(),
            start: Instant::now(),
            last_pointer: None,
            last_size: egui::Vec2::ZERO,
            mounted: false,
        }
    }

    fn now(&self) -> Millis {
        self.start.elapsed().as_millis() as Millis
    }

    /// Translate this frame's egui input into engine events.
    fn collect_input(&mut self, ctx: &egui::Context, origin: egui::Pos2) -> Vec<InputEvent> {
        let now = self.now();
        let mut events = Vec::new();

        let (pos, pressed, released, clicked, scroll) = ctx.input(|i| {
            (
                i.pointer.latest_pos(),
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.primary_clicked(),
                i.smooth_scroll_delta.y,
            )
        });

        if let Some(p) = pos {
            if self.last_pointer != Some(p) {
                self.last_pointer = Some(p);
                let local = p - origin;
                events.push(InputEvent::pointer_move(local.x, local.y, now));
            }
        }
        if pressed {
            events.push(InputEvent::PointerDown { at: now });
        }
        if released {
            events.push(InputEvent::PointerUp { at: now });
        }
        if clicked {
            events.push(InputEvent::Click { at: now });
            if let Some(p) = pos {
                let local = p - origin;
                self.pick_feature(Point::new(local.x, local.y));
            }
        }
        if scroll != 0.0 {
            let target = (self.layout.scroll_y - scroll).clamp(0.0, self.layout.max_scroll());
            if target != self.layout.scroll_y {
                self.layout.scroll_y = target;
                events.push(InputEvent::Scroll { at: now });
            }
        }
        events
    }

    fn pick_feature(&mut self, p: Point) {
        for i in 0..FEATURES.len() {
            let r = self.layout.feature_card(i);
            if p.x >= r.left && p.x <= r.right() && p.y >= r.top && p.y <= r.bottom() {
                self.page.select_feature(i);
            }
        }
    }

    /// Visibility readings for every observed element.
    fn visibility_events(&self) -> Vec<InputEvent> {
        let client = self.layout.viewport().client_rect();
        let mut events: Vec<InputEvent> = SectionId::ALL
            .iter()
            .map(|id| InputEvent::Visibility {
                target: RevealTarget::Section(*id),
                ratio: intersection_ratio(&self.layout.section(*id), &client),
            })
            .collect();
        for i in 0..self.page.stats().len() {
            events.push(InputEvent::Visibility {
                target: RevealTarget::Counter(i),
                ratio: intersection_ratio(&self.layout.counter(i), &client),
            });
        }
        events
    }

    fn header(&mut self, ctx: &egui::Context) -> Option<NavTarget> {
        let mut picked = None;
        let fill = if self.page.header().is_scrolled() {
            egui::Color32::from_rgba_unmultiplied(10, 14, 23, 240)
        } else {
            BG
        };
        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::none().fill(fill).inner_margin(egui::Margin::symmetric(16.0, 10.0)))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("SAVIA").color(ACCENT).strong().size(18.0));
                    ui.add_space(24.0);
                    for target in NavTarget::ALL.iter().skip(1) {
                        if ui.link(egui::RichText::new(target.label()).color(MUTED)).clicked() {
                            picked = Some(*target);
                        }
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("☰").clicked() {
                            self.page.toggle_menu();
                        }
                    });
                });
                if self.page.header().is_menu_open() {
                    ui.separator();
                    for target in NavTarget::ALL {
                        if ui.button(target.label()).clicked() {
                            picked = Some(target);
                        }
                    }
                }
            });
        picked
    }
}

impl eframe::App for HudApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = self.now();
        let mut events = Vec::new();

        if let Some(target) = self.header(ctx) {
            let anchor = self.page.navigate(target);
            log::info!("jump to {}", anchor);
            self.layout.scroll_y = self.layout.nav_top(target);
            events.push(InputEvent::Scroll { at: now });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BG))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let origin = rect.min;
                let size = rect.size();

                self.layout.width = size.x;
                self.layout.height = size.y;
                self.layout.scroll_y = self.layout.scroll_y.clamp(0.0, self.layout.max_scroll());

                if !self.mounted {
                    self.page.mount(now, &self.layout);
                    self.mounted = true;
                    self.last_size = size;
                } else if size != self.last_size {
                    self.last_size = size;
                    events.push(InputEvent::Resize { at: now });
                }

                events.extend(self.collect_input(ctx, origin));
                events.extend(self.visibility_events());

                let client = self.layout.viewport().client_rect();
                let hero_visible = intersection_ratio(&self.layout.slot(0), &client) > 0.0;
                for i in 0..HEADLINE.len() {
                    self.page.set_headline_attached(i, hero_visible);
                }

                for event in &events {
                    self.page.handle(event, &self.layout);
                }
                let animating = self.page.advance(now);

                let painter = ui.painter_at(rect);
                paint_page(&painter, origin, &self.layout, &self.page);

                if animating {
                    ctx.request_repaint();
                }
            });
    }

}

impl Drop for HudApp {
    fn drop(&mut self) {
        self.page.unmount();
    }
}

// ─── Painting ────────────────────────────────────────────────────────────────

fn pos(origin: egui::Pos2, p: Point) -> egui::Pos2 {
    origin + egui::vec2(p.x, p.y)
}

fn rect(origin: egui::Pos2, r: Rect) -> egui::Rect {
    egui::Rect::from_min_size(origin + egui::vec2(r.left, r.top), egui::vec2(r.width, r.height))
}

fn fade(color: egui::Color32, on: bool) -> egui::Color32 {
    if on {
        color
    } else {
        color.gamma_multiply(0.15)
    }
}

fn paint_page(painter: &egui::Painter, origin: egui::Pos2, layout: &DocLayout, page: &Page) {
    paint_hero(painter, origin, layout, page);

    for id in SECTIONS {
        let r = rect(origin, layout.section(id));
        let shown = page.is_revealed(id);
        painter.line_segment(
            [r.left_top(), r.right_top()],
            egui::Stroke::new(0.5, MUTED.gamma_multiply(0.3)),
        );
        painter.text(
            r.left_top() + egui::vec2(40.0, 40.0),
            egui::Align2::LEFT_TOP,
            id.title(),
            egui::FontId::proportional(28.0),
            fade(egui::Color32::WHITE, shown),
        );
    }

    paint_problem(painter, origin, layout, page);
    paint_features(painter, origin, layout, page);
    paint_industries(painter, origin, layout, page);

    if let Some(logo) = layout.anchor_rect(AnchorSlot::Logo) {
        paint_eye(painter, origin, logo, page.logo_offset(), page.is_revealed(SectionId::Cta));
    }

    if page.hero().is_past_hero() {
        if let Some(corner) = layout.anchor_rect(AnchorSlot::Corner) {
            paint_eye(painter, origin, corner, page.hero().gaze().offset(), true);
        }
    }
}

fn paint_eye(
    painter: &egui::Painter,
    origin: egui::Pos2,
    anchor: Rect,
    offset: GazeOffset,
    on: bool,
) {
    let c = pos(origin, anchor.center());
    let r = anchor.width * 0.5;
    painter.circle_stroke(c, r, egui::Stroke::new(2.0, fade(ACCENT, on)));
    let iris = c + egui::vec2(offset.dx, offset.dy);
    painter.circle_filled(iris, r * 0.45, fade(ACCENT.gamma_multiply(0.35), on));
    painter.circle_filled(iris, r * 0.2, egui::Color32::BLACK);
    painter.circle_filled(iris + egui::vec2(-r * 0.08, -r * 0.08), r * 0.05, egui::Color32::WHITE);
}

fn paint_hero(painter: &egui::Painter, origin: egui::Pos2, layout: &DocLayout, page: &Page) {
    let hero = page.hero();
    let r = rect(origin, layout.slot(0));
    let loaded = hero.is_loaded();

    for (i, line) in hero.headline().lines().iter().enumerate() {
        let color = if i == HIGHLIGHT_LINE { ACCENT } else { egui::Color32::WHITE };
        painter.text(
            r.center_top() + egui::vec2(0.0, r.height() * 0.16 + i as f32 * 56.0),
            egui::Align2::CENTER_TOP,
            line.rendered(),
            egui::FontId::monospace(44.0),
            fade(color, loaded),
        );
    }

    if !hero.is_past_hero() {
        if let Some(anchor) = layout.anchor_rect(AnchorSlot::Primary) {
            paint_eye(painter, origin, anchor, hero.gaze().offset(), loaded);
        }
    }

    // Tracking line and cursor brackets.
    if let Some((cursor, eye)) = hero.gaze().tracking_line() {
        let from = pos(origin, cursor);
        let to = pos(origin, eye);
        let stroke = egui::Stroke::new(1.0, ACCENT.gamma_multiply(0.4));
        painter.line_segment([from, to], stroke);
        let bk = 10.0;
        let bk_stroke = egui::Stroke::new(1.5, ACCENT);
        for (sx, sy) in [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)] {
            let corner = from + egui::vec2(sx * bk, sy * bk);
            painter.line_segment([corner, corner - egui::vec2(sx * bk * 0.5, 0.0)], bk_stroke);
            painter.line_segment([corner, corner - egui::vec2(0.0, sy * bk * 0.5)], bk_stroke);
        }
    }

    // Telemetry readout, pinned to the window.
    let state = hero.motion();
    let action_color = if state.action.is_alert() { ALERT } else { ACCENT };
    let rows = [
        ("ZONE", state.zone.to_string(), ACCENT),
        ("SPEED", state.speed.to_string(), ACCENT),
        ("ACTION", state.action.to_string(), action_color),
        ("POS", state.coords.clone(), MUTED),
    ];
    let hud = origin + egui::vec2(24.0, layout.height - 24.0 - rows.len() as f32 * 18.0);
    for (i, (label, value, color)) in rows.iter().enumerate() {
        painter.text(
            hud + egui::vec2(0.0, i as f32 * 18.0),
            egui::Align2::LEFT_TOP,
            format!("{:<7}{}", label, value),
            egui::FontId::monospace(12.0),
            *color,
        );
    }
}

fn paint_problem(painter: &egui::Painter, origin: egui::Pos2, layout: &DocLayout, page: &Page) {
    for (i, stat) in page.stats().iter().enumerate() {
        let r = rect(origin, layout.counter(i));
        painter.text(
            r.center(),
            egui::Align2::CENTER_CENTER,
            stat.display(),
            egui::FontId::monospace(48.0),
            ALERT,
        );
        painter.text(
            r.center_bottom(),
            egui::Align2::CENTER_BOTTOM,
            stat.caption,
            egui::FontId::proportional(14.0),
            MUTED,
        );
    }

    let r = rect(origin, layout.section(SectionId::ProblemConclusion));
    painter.rect_stroke(r, 8.0, egui::Stroke::new(1.0, ACCENT.gamma_multiply(0.3)));
    painter.text(
        r.center_top() + egui::vec2(0.0, 16.0),
        egui::Align2::CENTER_TOP,
        "The problem isn't your team.",
        egui::FontId::proportional(18.0),
        egui::Color32::WHITE,
    );
    let typed = page.conclusion();
    let text_rect = painter.text(
        r.center_top() + egui::vec2(0.0, 48.0),
        egui::Align2::CENTER_TOP,
        typed,
        egui::FontId::proportional(18.0),
        ACCENT,
    );
    if page.is_revealed(SectionId::ProblemConclusion) {
        let caret = egui::Rect::from_min_size(text_rect.right_top() + egui::vec2(4.0, 2.0), egui::vec2(8.0, 18.0));
        painter.rect_filled(caret, 0.0, ACCENT);
    }
}

fn paint_features(painter: &egui::Painter, origin: egui::Pos2, layout: &DocLayout, page: &Page) {
    let shown = page.is_revealed(SectionId::Features);
    for (i, name) in FEATURES.iter().enumerate() {
        let r = rect(origin, layout.feature_card(i));
        let active = i == page.active_feature();
        let stroke = if active {
            egui::Stroke::new(2.0, fade(ACCENT, shown))
        } else {
            egui::Stroke::new(1.0, fade(MUTED.gamma_multiply(0.4), shown))
        };
        painter.rect_stroke(r, 12.0, stroke);
        painter.text(
            r.center(),
            egui::Align2::CENTER_CENTER,
            *name,
            egui::FontId::proportional(16.0),
            fade(if active { egui::Color32::WHITE } else { MUTED }, shown),
        );
    }
}

fn paint_industries(painter: &egui::Painter, origin: egui::Pos2, layout: &DocLayout, page: &Page) {
    let hub = layout.hub();
    let canvas = origin + egui::vec2(hub.left, hub.top);
    let pulse = page.pulse();
    let lane_stroke = egui::Stroke::new(1.0, ACCENT.gamma_multiply(0.25));

    for (i, (from, to)) in pulse.lanes(hub.width, hub.height).into_iter().enumerate() {
        let end = pos(canvas, to);
        painter.line_segment([pos(canvas, from), end], lane_stroke);
        painter.circle_stroke(end, 18.0, egui::Stroke::new(1.0, ACCENT.gamma_multiply(0.6)));
        if let Some(name) = INDUSTRIES.get(i) {
            painter.text(
                end + egui::vec2(0.0, 26.0),
                egui::Align2::CENTER_TOP,
                *name,
                egui::FontId::proportional(12.0),
                MUTED,
            );
        }
    }
    for dot in pulse.dots(hub.width, hub.height) {
        painter.circle_filled(pos(canvas, dot), 3.0, ACCENT);
    }
    painter.circle_filled(pos(canvas, Point::new(hub.width * 0.5, hub.height * 0.5)), 24.0, ACCENT.gamma_multiply(0.5));
}
