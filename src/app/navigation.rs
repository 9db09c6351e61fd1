//! Navigation methods for `OrbitApp`.
//!
//! Route changes (`navigate`) and arrow-key stepping (`handle_keys`).

use sakura_orbit::orbit::{OrbitEvent, PointerTracker};
use sakura_orbit::site::{HomeHighlight, Route, Step};

use super::OrbitApp;

impl OrbitApp {
    /// Switch to `route`. The section being left loses its pointer, so its
    /// selection is cleared as if the pointer had left the diagram.
    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        if let Some(prev) = self.route.section() {
            if let Some(id) = self.orbits.get(&prev).copied() {
                if let Some(inst) = self.scheduler.get_mut(id) {
                    inst.handle_event(OrbitEvent::PointerLeave);
                }
            }
            self.trackers.insert(prev, PointerTracker::new());
        }
        log::info!("navigate {} -> {}", self.route.to_hash(), route.to_hash());
        self.route = route;
        self.home_highlight = HomeHighlight::from_route(route);
    }

    /// Left / Right arrows step through the sections.
    pub fn handle_keys(&mut self, ctx: &egui::Context) {
        let (next, prev) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::ArrowLeft),
            )
        });
        if next {
            self.navigate(self.route.step(Step::Next));
        } else if prev {
            self.navigate(self.route.step(Step::Prev));
        }
    }
}
