use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use stageview_core::config::{load_config, ViewerConfig};
use stageview_core::controller::{ResolveOutcome, ViewportController};
use stageview_core::geometry::Dimensions;
use stageview_core::io::image_io::probe_dimensions;

use crate::summary::print_view_summary;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,

    /// Stage size as WIDTHxHEIGHT (overrides the config)
    #[arg(long, value_parser = parse_stage)]
    pub stage: Option<Dimensions>,

    /// Viewer config TOML
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let mut config = match args.config {
        Some(ref path) => load_config(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ViewerConfig::default(),
    };
    if let Some(stage) = args.stage {
        config.stage.width = stage.width;
        config.stage.height = stage.height;
    }
    let image = probe_dimensions(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let mut controller = ViewportController::new(&config)?;
    if controller.on_image_resolved(image) == ResolveOutcome::Deferred {
        bail!("{} has no displayable pixels", args.file.display());
    }
    let Some(view) = controller.default_view() else {
        bail!("No default view for {}", args.file.display());
    };

    tracing::debug!(
        scale = view.scale,
        x = view.offset.x,
        y = view.offset.y,
        "Computed default view"
    );
    print_view_summary(&args.file, &config, image, &view);
    Ok(())
}

fn parse_stage(s: &str) -> Result<Dimensions, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let width: f64 = w.trim().parse().map_err(|e| format!("bad width '{w}': {e}"))?;
    let height: f64 = h.trim().parse().map_err(|e| format!("bad height '{h}': {e}"))?;
    Dimensions::new(width, height).map_err(|e| e.to_string())
}
