//! Toolbar rendering for `OrbitApp`: home link, section tabs, theme toggle.

use sakura_orbit::site::{Route, Section};

use super::OrbitApp;

impl OrbitApp {
    pub fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        let mut target = None;

        ui.horizontal(|ui| {
            let home = ui.selectable_label(
                self.route == Route::Home,
                egui::RichText::new("Sakura Biotech").strong(),
            );
            if home.clicked() {
                target = Some(Route::Home);
            }

            ui.separator();

            for section in Section::ALL {
                let route = Route::Section(section);
                if ui.selectable_label(self.route == route, section.title()).clicked() {
                    target = Some(route);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let toggle = ui
                    .button(self.theme.toggle_label())
                    .on_hover_text(if self.theme.is_dark() {
                        "Switch to light theme"
                    } else {
                        "Switch to dark theme"
                    });
                if toggle.clicked() {
                    self.theme = self.theme.toggled();
                    log::debug!("theme -> {}", self.theme.as_str());
                }
                ui.weak(self.route.to_hash());
            });
        });

        if let Some(route) = target {
            self.navigate(route);
        }
    }
}
