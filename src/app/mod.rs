//! `OrbitApp` — the top-level egui application state.
//!
//! Methods are split across sibling sub-modules:
//!
//! - `navigation` — routing between home and the three sections, keyboard
//! - `toolbar`    — section tabs and theme toggle
//! - `content`    — home panels and the orbit canvas

pub mod content;
pub mod navigation;
pub mod toolbar;

use std::collections::HashMap;
use std::sync::Arc;

use sakura_orbit::content::ContentLibrary;
use sakura_orbit::orbit::{FrameScheduler, InstanceId, OrbitConfig, PointerTracker};
use sakura_orbit::site::{HomeHighlight, Route, Section, Theme};

// ─── Application state ───────────────────────────────────────────────────────

pub struct OrbitApp {
    pub route: Route,
    pub theme: Theme,
    /// Drives every orbit once per repaint
    pub scheduler: FrameScheduler,
    pub orbits: HashMap<Section, InstanceId>,
    pub trackers: HashMap<Section, PointerTracker>,
    /// Last canvas size handed to the scheduler, per orbit
    pub canvas_sizes: HashMap<InstanceId, egui::Vec2>,
    /// Highlighted home column
    pub home_highlight: HomeHighlight,
}

impl OrbitApp {
    pub fn new(config: OrbitConfig, library: &ContentLibrary) -> Self {
        let mut scheduler = FrameScheduler::new(Arc::new(config));
        let mut orbits = HashMap::new();
        let mut trackers = HashMap::new();
        for section in Section::ALL {
            match scheduler.mount(section.container_id(), library, section.key()) {
                Some(id) => {
                    orbits.insert(section, id);
                    trackers.insert(section, PointerTracker::new());
                }
                None => log::warn!("section `{}` has no orbit", section.key()),
            }
        }

        Self {
            route: Route::Home,
            theme: Theme::Light,
            scheduler,
            orbits,
            trackers,
            canvas_sizes: HashMap::new(),
            home_highlight: HomeHighlight::default(),
        }
    }

    /// Start on `route` instead of the home view.
    pub fn with_route(mut self, route: Route) -> Self {
        self.route = route;
        self.home_highlight = HomeHighlight::from_route(route);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

impl eframe::App for OrbitApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(if self.theme.is_dark() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        self.handle_keys(ctx);

        // One tick per displayed frame, before anything reads positions
        self.scheduler.tick();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| self.draw_toolbar(ui));
        egui::CentralPanel::default().show(ctx, |ui| match self.route {
            Route::Home => self.draw_home(ui),
            Route::Section(section) => self.draw_orbit(ui, section),
        });

        ctx.request_repaint();
    }
}
