// src/main.rs
use anyhow::Result;
use eframe::egui;

mod api;
mod app;
mod data;
mod report;
mod settings;
mod state;
mod ui;

use app::InstaMindApp;
use settings::AppConfig;

fn main() -> Result<()> {
    env_logger::init();

    let config = AppConfig::load()?;
    log::info!("starting InstaMIND client against {}", config.api_base_url);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_title("InstaMIND"),
        ..Default::default()
    };

    eframe::run_native(
        "InstaMIND",
        options,
        Box::new(move |cc| Box::new(InstaMindApp::new(cc, &config))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
