use sakura_orbit::content::ContentLibrary;
use sakura_orbit::orbit::OrbitConfig;
use sakura_orbit::site::{Route, Theme};

mod app;
mod ui;

use app::OrbitApp;

/// Optional path to a JSON orbit config.
const CONFIG_ENV: &str = "SAKURA_ORBIT_CONFIG";
/// Start page as a hash, e.g. `#mushroom`.
const ROUTE_ENV: &str = "SAKURA_ORBIT_ROUTE";
/// `dark` or `light`.
const THEME_ENV: &str = "SAKURA_ORBIT_THEME";

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = load_config();
    let route = std::env::var(ROUTE_ENV).map_or(Route::Home, |h| Route::from_hash(&h));
    let theme = std::env::var(THEME_ENV).map_or(Theme::Light, |t| Theme::parse(&t));
    let library = ContentLibrary::builtin();
    if library.is_empty() {
        log::error!("no orbit content available");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([480.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sakura Biotech — Core System Modules",
        options,
        Box::new(move |_cc| {
            let app = OrbitApp::new(config, &library)
                .with_route(route)
                .with_theme(theme);
            Ok(Box::new(app))
        }),
    )
}

fn load_config() -> OrbitConfig {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return OrbitConfig::default();
    };
    let text = match std::fs::read_to_string(&path) {
        Ok(t) => t,
        Err(e) => {
            log::error!("cannot read {} ({}): {}", CONFIG_ENV, path, e);
            return OrbitConfig::default();
        }
    };
    match OrbitConfig::from_json(&text) {
        Ok(c) => {
            log::info!("orbit config loaded from {}", path);
            c
        }
        Err(e) => {
            log::error!("{}: {}; using defaults", path, e);
            OrbitConfig::default()
        }
    }
}
