mod app;
mod capture;
mod config;
mod entry;
mod error;
mod icons;
mod input;
mod io;
mod navigator;
mod state;
mod style;
mod view;

use app::Camfolio;
use config::Config;
use eframe::egui;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = Config::create_default() {
        log::warn!("Could not write default config: {}", e);
    }
    let config = Config::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 650.0])
            .with_drag_and_drop(true)
            .with_title("Camfolio"),
        ..Default::default()
    };

    eframe::run_native(
        "Camfolio",
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(Camfolio::new(cc, config)))
        }),
    )
}
