use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use stageview_core::io::image_io::load_image;

use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the loader thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("stageview-loader".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn loader thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadImage { path } => handle_load_image(&path, &tx, &ctx),
        }
    }
}

fn handle_load_image(path: &Path, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    let start = Instant::now();
    match load_image(path) {
        Ok(image) => send(
            tx,
            ctx,
            WorkerResult::ImageLoaded {
                path: path.to_path_buf(),
                image,
                elapsed: start.elapsed(),
            },
        ),
        Err(e) => {
            tracing::warn!(path = %path.display(), "Image load failed: {e}");
            send(
                tx,
                ctx,
                WorkerResult::Error {
                    message: format!("Failed to load {}: {e}", path.display()),
                },
            );
        }
    }
}
