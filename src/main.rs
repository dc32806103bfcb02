// src/main.rs
use anyhow::Result;
use eframe::egui;
use tracing_subscriber::EnvFilter;

mod analysis;
mod app;
mod config;
mod state;
mod ui;
mod upload;

use app::ResumeLensApp;
use config::Config;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_title("Resume Lens"),
        ..Default::default()
    };

    eframe::run_native(
        "Resume Lens",
        options,
        Box::new(move |cc| Box::new(ResumeLensApp::new(cc, &config))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
