// src/main.rs
use eframe::egui;
use anyhow::{Result, Context};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod analysis;
mod app;
mod chart;
mod config;
mod dataset;
mod file;
mod state;
mod ui;

use crate::app::DashboardApp;
use crate::config::DashboardConfig;
use crate::file::FileManager;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("launch_dash=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let dataset_arg = std::env::args_os().nth(1).map(PathBuf::from);
    let config = DashboardConfig::load()?.with_dataset_override(dataset_arg);
    info!(dataset = %config.dataset_path.display(), "starting dashboard");

    // Loaded exactly once; shared read-only with the UI from here on
    let dataset = match FileManager::new().load_dataset(&config.dataset_path) {
        Ok(dataset) => Arc::new(dataset),
        Err(e) => {
            error!("{}", e);
            return Err(e).context("Cannot start without a launch dataset");
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title("SpaceX Launch Records Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "launch-dash",
        options,
        Box::new(move |_cc| Box::new(DashboardApp::new(dataset, config))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
