//! GUI entry point for leafdx

mod app;
mod diagnose_panel;

use app::LeafdxApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Potato Crop Disease Detection",
        options,
        Box::new(|cc| Ok(Box::new(LeafdxApp::new(cc)))),
    )
}
