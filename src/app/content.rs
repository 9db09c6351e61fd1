//! Content-area rendering for `OrbitApp`.
//!
//! - `draw_home`  — three slanted section columns; hover highlights, click routes
//!   (column layout only)
//! - `draw_orbit` — one section's orbit, painted from its `OrbitFrame`

use sakura_orbit::orbit::{OrbitFrame, PanelView};
use sakura_orbit::site::panels::parse_css_angle;
use sakura_orbit::site::{PanelLayout, Route, Section};

use crate::ui::{palette, section_tint, to_container, to_screen, tone_color, truncate_str, Palette};
use super::OrbitApp;

/// Divider lean of the home columns.
const HOME_TILT: &str = "-8deg";
/// Below this width the home columns stack into rows.
const DESKTOP_MIN_WIDTH: f32 = 768.0;

const CORE_RADIUS: f32 = 52.0;
const PANEL_WIDTH: f32 = 240.0;
const PANEL_PAD: f32 = 12.0;
const PANEL_LINE: f32 = 18.0;

impl OrbitApp {
    // ── Home ─────────────────────────────────────────────────────────────────

    pub fn draw_home(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::click());
        let rect = response.rect;
        let (w, h) = (rect.width() as f64, rect.height() as f64);
        let layout = PanelLayout::with_tilt(
            parse_css_angle(HOME_TILT),
            h,
            rect.width() >= DESKTOP_MIN_WIDTH,
        );

        match response.hover_pos() {
            Some(pos) => {
                let p = to_container(rect.min, pos);
                self.home_highlight
                    .pointer_moved(layout.active_panel(p.x, p.y, w, h));
            }
            None => self.home_highlight.pointer_left(self.route),
        }

        if response.clicked() {
            let target = response.interact_pointer_pos().and_then(|pos| {
                let p = to_container(rect.min, pos);
                layout.click_target(p.x, p.y, w, h)
            });
            if let Some(section) = target {
                self.navigate(Route::Section(section));
                return;
            }
        }

        let pal = palette(self.theme);
        for section in Section::ALL {
            let pts: Vec<egui::Pos2> = layout
                .outline(section, w, h)
                .iter()
                .map(|p| to_screen(rect.min, *p))
                .collect();
            let hovered = self.home_highlight.active() == Some(section);
            let fill = section_tint(section).gamma_multiply(if hovered { 0.55 } else { 0.25 });
            let label_pos = egui::pos2(
                pts.iter().map(|p| p.x).sum::<f32>() / pts.len() as f32,
                pts.iter().map(|p| p.y).sum::<f32>() / pts.len() as f32,
            );
            painter.add(egui::Shape::convex_polygon(pts, fill, egui::Stroke::NONE));
            painter.text(
                label_pos,
                egui::Align2::CENTER_CENTER,
                section.title(),
                egui::FontId::proportional(if hovered { 32.0 } else { 28.0 }),
                pal.node_text,
            );
        }
    }

    // ── Orbit canvas ─────────────────────────────────────────────────────────

    pub fn draw_orbit(&mut self, ui: &mut egui::Ui, section: Section) {
        let Some(id) = self.orbits.get(&section).copied() else {
            ui.centered_and_justified(|ui| ui.label("No modules for this section."));
            return;
        };

        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::click());
        let rect = response.rect;
        let origin = rect.min;

        // Size changes go through the scheduler and land on the next tick
        let size = rect.size();
        if self.canvas_sizes.get(&id) != Some(&size) {
            self.canvas_sizes.insert(id, size);
            self.scheduler.request_resize(id, size.x as f64, size.y as f64);
        }

        let hover = response.hover_pos().map(|p| to_container(origin, p));
        let click = if response.clicked() {
            response.interact_pointer_pos().map(|p| to_container(origin, p))
        } else {
            None
        };
        if let (Some(inst), Some(tracker)) =
            (self.scheduler.get_mut(id), self.trackers.get_mut(&section))
        {
            let mut events = Vec::with_capacity(2);
            events.extend(tracker.pointer_moved(inst, hover));
            if let Some(p) = click {
                events.push(tracker.clicked(inst, p));
            }
            for event in events {
                inst.handle_event(event);
            }
        }

        let Some(inst) = self.scheduler.get(id) else {
            return;
        };
        let pal = palette(self.theme);
        let frame = inst.frame();
        paint_orbit(&painter, origin, &frame, &pal);
        match &frame.panel {
            Some(panel) => paint_panel(&painter, rect, origin, panel, &pal),
            None => {
                painter.text(
                    rect.center_bottom() - egui::vec2(0.0, 16.0),
                    egui::Align2::CENTER_BOTTOM,
                    "Hover or tap a module",
                    egui::FontId::proportional(12.0),
                    pal.muted,
                );
            }
        }
    }
}

fn paint_orbit(painter: &egui::Painter, origin: egui::Pos2, frame: &OrbitFrame<'_>, pal: &Palette) {
    for c in &frame.connectors {
        painter.line_segment(
            [to_screen(origin, c.from), to_screen(origin, c.to)],
            egui::Stroke::new(1.5, tone_color(pal, c.tone, c.opacity)),
        );
    }

    let center = to_screen(origin, frame.center);
    painter.circle_filled(center, CORE_RADIUS, pal.core_fill);
    painter.circle_stroke(center, CORE_RADIUS, egui::Stroke::new(1.0, pal.secondary));
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        "Core\nSystem\nModules",
        egui::FontId::proportional(13.0),
        pal.node_text,
    );

    for i in frame.draw_order() {
        let s = &frame.sprites[i];
        let pos = to_screen(origin, s.position);
        let scale = s.scale as f32;
        let r = frame.node_radius as f32 * scale * 0.55;
        let ring = if s.selected { pal.accent } else { pal.secondary };

        painter.circle_filled(pos, r, pal.node_fill);
        painter.circle_stroke(pos, r, egui::Stroke::new(2.0, ring));
        painter.text(
            pos,
            egui::Align2::CENTER_CENTER,
            &s.content.number,
            egui::FontId::proportional(18.0 * scale),
            ring,
        );
        painter.text(
            pos + egui::vec2(0.0, r + 4.0),
            egui::Align2::CENTER_TOP,
            format!("{}\n{}", s.content.title, s.content.subtitle),
            egui::FontId::proportional(12.0),
            pal.node_text,
        );
    }
}

/// Detail panel to the right of the node, flipped left when it would
/// overflow the canvas.
fn paint_panel(
    painter: &egui::Painter,
    bounds: egui::Rect,
    origin: egui::Pos2,
    panel: &PanelView<'_>,
    pal: &Palette,
) {
    let height = PANEL_PAD * 2.0 + 24.0 + panel.bullets.len() as f32 * PANEL_LINE;
    let mut min = to_screen(origin, panel.anchor);
    min.y -= height * 0.5;
    if min.x + PANEL_WIDTH > bounds.right() {
        let gap = (panel.anchor.x - panel.node_position.x) as f32;
        min.x = to_screen(origin, panel.node_position).x - gap - PANEL_WIDTH;
    }
    min.y = min.y.clamp(bounds.top(), (bounds.bottom() - height).max(bounds.top()));

    let rect = egui::Rect::from_min_size(min, egui::vec2(PANEL_WIDTH, height));
    painter.rect_filled(rect, 8.0, pal.panel_fill);
    painter.rect_stroke(rect, 8.0, egui::Stroke::new(1.0, pal.accent));
    painter.text(
        rect.min + egui::vec2(PANEL_PAD, PANEL_PAD),
        egui::Align2::LEFT_TOP,
        truncate_str(&panel.header, 30),
        egui::FontId::proportional(14.0),
        pal.accent,
    );
    for (i, bullet) in panel.bullets.iter().enumerate() {
        let y = PANEL_PAD + 24.0 + i as f32 * PANEL_LINE;
        painter.text(
            rect.min + egui::vec2(PANEL_PAD, y),
            egui::Align2::LEFT_TOP,
            format!("\u{2022} {}", truncate_str(bullet, 34)),
            egui::FontId::proportional(12.0),
            pal.panel_text,
        );
    }
}
