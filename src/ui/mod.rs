//! Generic egui helpers shared by the home view and the orbit canvas.
//!
//! Stateless: colours per theme, coordinate conversion, text trimming.

use sakura_orbit::orbit::{ConnectorTone, Point};
use sakura_orbit::site::{Section, Theme};

// ─── Palette ──────────────────────────────────────────────────────────────────

pub struct Palette {
    pub accent: egui::Color32,
    pub secondary: egui::Color32,
    pub node_fill: egui::Color32,
    pub node_text: egui::Color32,
    pub core_fill: egui::Color32,
    pub panel_fill: egui::Color32,
    pub panel_text: egui::Color32,
    pub muted: egui::Color32,
}

pub fn palette(theme: Theme) -> Palette {
    let accent = egui::Color32::from_rgb(236, 72, 153);
    let secondary = egui::Color32::from_rgb(139, 92, 246);
    match theme {
        Theme::Light => Palette {
            accent,
            secondary,
            node_fill: egui::Color32::from_rgb(255, 255, 255),
            node_text: egui::Color32::from_rgb(30, 27, 46),
            core_fill: egui::Color32::from_rgb(245, 238, 252),
            panel_fill: egui::Color32::from_rgb(255, 255, 255),
            panel_text: egui::Color32::from_rgb(30, 27, 46),
            muted: egui::Color32::from_rgb(110, 104, 130),
        },
        Theme::Dark => Palette {
            accent,
            secondary,
            node_fill: egui::Color32::from_rgb(28, 24, 44),
            node_text: egui::Color32::from_rgb(236, 232, 248),
            core_fill: egui::Color32::from_rgb(40, 32, 64),
            panel_fill: egui::Color32::from_rgb(22, 19, 36),
            panel_text: egui::Color32::from_rgb(236, 232, 248),
            muted: egui::Color32::from_rgb(160, 150, 190),
        },
    }
}

/// Connector colour for `tone` at `opacity`.
pub fn tone_color(palette: &Palette, tone: ConnectorTone, opacity: f32) -> egui::Color32 {
    let base = match tone {
        ConnectorTone::Accent => palette.accent,
        ConnectorTone::Secondary => palette.secondary,
    };
    base.gamma_multiply(opacity.clamp(0.0, 1.0))
}

/// Home column tint.
pub fn section_tint(section: Section) -> egui::Color32 {
    match section {
        Section::Algae => egui::Color32::from_rgb(52, 168, 120),
        Section::Mushroom => egui::Color32::from_rgb(196, 132, 84),
        Section::Plant => egui::Color32::from_rgb(96, 148, 62),
    }
}

// ─── Geometry ─────────────────────────────────────────────────────────────────

/// Container-space point → screen position inside a widget at `origin`.
pub fn to_screen(origin: egui::Pos2, p: Point) -> egui::Pos2 {
    egui::pos2(origin.x + p.x as f32, origin.y + p.y as f32)
}

/// Screen position → container-space point.
pub fn to_container(origin: egui::Pos2, pos: egui::Pos2) -> Point {
    Point::new((pos.x - origin.x) as f64, (pos.y - origin.y) as f64)
}

// ─── Text utilities ───────────────────────────────────────────────────────────

/// Truncate `s` to at most `max_chars` Unicode scalar values, appending `"..."` if truncated.
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let t: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", t)
    }
}
