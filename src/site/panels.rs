//! Home panel hit-testing.
//!
//! The home view is split into three columns whose dividers lean by a tilt
//! angle. On narrow layouts the columns collapse into horizontal thirds.

use std::f64::consts::PI;

use crate::orbit::Point;

use super::sections::{Route, Section};

/// Horizontal shift of a divider over the full panel height.
pub fn slant_px(tilt_rad: f64, height: f64) -> f64 {
    if height <= 0.0 {
        return 0.0;
    }
    tilt_rad.tan() * height
}

/// Parse a CSS angle (`12deg`, `0.2rad`, `calc(-8deg)`; bare numbers are
/// degrees) into radians. The first number in the value is used; a value
/// ending in `rad` is radians, anything else degrees. Unparsable is 0.
pub fn parse_css_angle(value: &str) -> f64 {
    let raw = value.trim();
    let Some(n) = first_number(raw).and_then(|t| t.parse::<f64>().ok()) else {
        return 0.0;
    };
    if !n.is_finite() {
        return 0.0;
    }
    if raw.ends_with("rad") {
        n
    } else {
        n * PI / 180.0
    }
}

/// First number in `s` (`-?\d*\.?\d+`), wherever it sits.
fn first_number(s: &str) -> Option<&str> {
    let b = s.as_bytes();
    let digit = |i: usize| b.get(i).is_some_and(u8::is_ascii_digit);
    let dot_digit = |i: usize| b.get(i) == Some(&b'.') && digit(i + 1);

    let start = (0..b.len()).find(|&i| {
        digit(i) || dot_digit(i) || (b[i] == b'-' && (digit(i + 1) || dot_digit(i + 1)))
    })?;
    let mut end = start;
    if b[end] == b'-' {
        end += 1;
    }
    while digit(end) {
        end += 1;
    }
    if dot_digit(end) {
        end += 1;
        while digit(end) {
            end += 1;
        }
    }
    Some(&s[start..end])
}

/// Column split of the home panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    /// Width fraction of the first column at the top edge
    pub col1: f64,
    /// Width fraction of the second column at the top edge
    pub col2: f64,
    /// Divider lean in pixels across the full height
    pub slant: f64,
    /// Wide (column) layout; narrow layouts stack rows
    pub desktop: bool,
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self {
            col1: 1.0 / 3.0,
            col2: 1.0 / 3.0,
            slant: 0.0,
            desktop: true,
        }
    }
}

impl PanelLayout {
    /// Layout for a panel of `height` px whose dividers lean by `tilt_rad`.
    pub fn with_tilt(tilt_rad: f64, height: f64, desktop: bool) -> Self {
        Self {
            slant: slant_px(tilt_rad, height),
            desktop,
            ..Self::default()
        }
    }

    /// Divider x positions at height `y`.
    pub fn dividers_at(&self, y: f64, width: f64, height: f64) -> (f64, f64) {
        let t = if height > 0.0 { y / height } else { 0.0 };
        let x1 = self.col1 * width + self.slant * t;
        let x2 = (self.col1 + self.col2) * width + self.slant * t;
        (x1, x2)
    }

    /// Corners of `section`'s column (clockwise from top-left).
    pub fn outline(&self, section: Section, width: f64, height: f64) -> [Point; 4] {
        if !self.desktop {
            let third = height / 3.0;
            let top = match section {
                Section::Algae => 0.0,
                Section::Mushroom => third,
                Section::Plant => third * 2.0,
            };
            let bottom = top + third;
            return [
                Point::new(0.0, top),
                Point::new(width, top),
                Point::new(width, bottom),
                Point::new(0.0, bottom),
            ];
        }

        let (x1_top, x2_top) = self.dividers_at(0.0, width, height);
        let (x1_bot, x2_bot) = self.dividers_at(height, width, height);
        let (left_top, right_top, right_bot, left_bot) = match section {
            Section::Algae => (0.0, x1_top, x1_bot, 0.0),
            Section::Mushroom => (x1_top, x2_top, x2_bot, x1_bot),
            Section::Plant => (x2_top, width, width, x2_bot),
        };
        [
            Point::new(left_top, 0.0),
            Point::new(right_top, 0.0),
            Point::new(right_bot, height),
            Point::new(left_bot, height),
        ]
    }

    /// Section under `(x, y)` in panel coordinates.
    pub fn active_panel(&self, x: f64, y: f64, width: f64, height: f64) -> Option<Section> {
        if x < 0.0 || y < 0.0 || x > width || y > height {
            return None;
        }

        if !self.desktop {
            let third = height / 3.0;
            return Some(if y < third {
                Section::Algae
            } else if y < third * 2.0 {
                Section::Mushroom
            } else {
                Section::Plant
            });
        }

        let (x1, x2) = self.dividers_at(y, width, height);
        Some(if x < x1 {
            Section::Algae
        } else if x < x2 {
            Section::Mushroom
        } else {
            Section::Plant
        })
    }

    /// Section a click at `(x, y)` routes to. Stacked layouts don't route on
    /// click.
    pub fn click_target(&self, x: f64, y: f64, width: f64, height: f64) -> Option<Section> {
        if !self.desktop {
            return None;
        }
        self.active_panel(x, y, width, height)
    }
}

/// Highlighted home column.
///
/// Hovering a column highlights it, and the highlight sticks while the
/// pointer is over no column. Leaving the panel falls back to the routed
/// section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HomeHighlight {
    active: Option<Section>,
}

impl HomeHighlight {
    pub fn from_route(route: Route) -> Self {
        Self {
            active: route.section(),
        }
    }

    pub fn active(self) -> Option<Section> {
        self.active
    }

    pub fn pointer_moved(&mut self, hit: Option<Section>) {
        if hit.is_some() {
            self.active = hit;
        }
    }

    pub fn pointer_left(&mut self, route: Route) {
        *self = Self::from_route(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_angles() {
        assert!((parse_css_angle("90deg") - PI / 2.0).abs() < 1e-12);
        assert!((parse_css_angle("0.5rad") - 0.5).abs() < 1e-12);
        assert!((parse_css_angle("-12") + 12.0 * PI / 180.0).abs() < 1e-12);
        assert_eq!(parse_css_angle(""), 0.0);
        assert_eq!(parse_css_angle("auto"), 0.0);
    }

    #[test]
    fn css_angle_number_anywhere() {
        assert!((parse_css_angle("calc(-8deg)") + 8.0 * PI / 180.0).abs() < 1e-12);
        assert!((parse_css_angle("  -.5rad") + 0.5).abs() < 1e-12);
        assert!((parse_css_angle("rotate(12.5deg)") - 12.5 * PI / 180.0).abs() < 1e-12);
        assert_eq!(parse_css_angle("--"), 0.0);
        assert_eq!(first_number("a-b12.c"), Some("12"));
    }

    #[test]
    fn slant_from_tilt() {
        assert!((slant_px(PI / 4.0, 200.0) - 200.0).abs() < 1e-9);
        assert_eq!(slant_px(0.3, 0.0), 0.0);
    }

    #[test]
    fn straight_columns() {
        let l = PanelLayout::default();
        assert_eq!(l.active_panel(10.0, 50.0, 300.0, 100.0), Some(Section::Algae));
        assert_eq!(l.active_panel(150.0, 50.0, 300.0, 100.0), Some(Section::Mushroom));
        assert_eq!(l.active_panel(290.0, 50.0, 300.0, 100.0), Some(Section::Plant));
        assert_eq!(l.active_panel(-1.0, 50.0, 300.0, 100.0), None);
        assert_eq!(l.active_panel(10.0, 101.0, 300.0, 100.0), None);
    }

    #[test]
    fn slanted_divider_shifts_with_depth() {
        let l = PanelLayout {
            slant: 60.0,
            ..PanelLayout::default()
        };
        // x = 120 is past the first divider at the top (100) but not at the
        // bottom (160)
        assert_eq!(l.active_panel(120.0, 0.0, 300.0, 100.0), Some(Section::Mushroom));
        assert_eq!(l.active_panel(120.0, 100.0, 300.0, 100.0), Some(Section::Algae));
    }

    #[test]
    fn outlines_contain_their_own_section() {
        for desktop in [true, false] {
            let l = PanelLayout {
                slant: -40.0,
                desktop,
                ..PanelLayout::default()
            };
            for section in Section::ALL {
                let pts = l.outline(section, 900.0, 500.0);
                let cx = pts.iter().map(|p| p.x).sum::<f64>() / 4.0;
                let cy = pts.iter().map(|p| p.y).sum::<f64>() / 4.0;
                assert_eq!(l.active_panel(cx, cy, 900.0, 500.0), Some(section));
            }
        }
    }

    #[test]
    fn narrow_layout_uses_rows() {
        let l = PanelLayout {
            desktop: false,
            ..PanelLayout::default()
        };
        assert_eq!(l.active_panel(5.0, 10.0, 300.0, 300.0), Some(Section::Algae));
        assert_eq!(l.active_panel(5.0, 150.0, 300.0, 300.0), Some(Section::Mushroom));
        assert_eq!(l.active_panel(5.0, 250.0, 300.0, 300.0), Some(Section::Plant));
    }

    #[test]
    fn clicks_route_only_in_column_layout() {
        let mut l = PanelLayout::default();
        assert_eq!(l.click_target(150.0, 50.0, 300.0, 100.0), Some(Section::Mushroom));
        assert_eq!(l.click_target(350.0, 50.0, 300.0, 100.0), None);
        l.desktop = false;
        assert_eq!(l.click_target(150.0, 50.0, 300.0, 100.0), None);
    }

    #[test]
    fn highlight_sticks_then_falls_back_to_route() {
        let mut h = HomeHighlight::from_route(Route::Home);
        assert_eq!(h.active(), None);
        h.pointer_moved(Some(Section::Plant));
        assert_eq!(h.active(), Some(Section::Plant));
        // between columns: keep the last one
        h.pointer_moved(None);
        assert_eq!(h.active(), Some(Section::Plant));
        h.pointer_left(Route::Section(Section::Algae));
        assert_eq!(h.active(), Some(Section::Algae));
        h.pointer_left(Route::Home);
        assert_eq!(h.active(), None);
    }
}
