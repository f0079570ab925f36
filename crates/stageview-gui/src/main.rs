mod app;
mod convert;
mod messages;
mod panels;
mod states;
mod worker;

use std::path::{Path, PathBuf};

use anyhow::Context;
use stageview_core::config::{load_config, ViewerConfig};

/// Picked up from the working directory when present.
const CONFIG_FILE: &str = "stageview.toml";

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = startup_config();
    let initial_image = std::env::args_os().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                config.stage.width as f32 + 48.0,
                config.stage.height as f32 + 180.0,
            ])
            .with_title("Stageview"),
        ..Default::default()
    };

    eframe::run_native(
        "Stageview",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::StageviewApp::new(
                &cc.egui_ctx,
                config,
                initial_image,
            )))
        }),
    )
}

fn startup_config() -> ViewerConfig {
    let path = Path::new(CONFIG_FILE);
    if !path.exists() {
        return ViewerConfig::default();
    }
    match load_config(path).with_context(|| format!("Failed to load {}", path.display())) {
        Ok(config) => {
            tracing::info!(%config, "Loaded viewer config");
            config
        }
        Err(e) => {
            tracing::warn!("{e:#}; using defaults");
            ViewerConfig::default()
        }
    }
}
