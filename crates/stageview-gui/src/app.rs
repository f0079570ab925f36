use std::path::PathBuf;
use std::sync::mpsc;

use stageview_core::config::ViewerConfig;
use stageview_core::controller::ViewportController;
use stageview_core::io::image_io::ImageHandle;

use crate::convert::handle_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{UIState, ViewportState};
use crate::worker;

pub struct StageviewApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub controller: ViewportController,
    pub config: ViewerConfig,
}

impl StageviewApp {
    pub fn new(ctx: &egui::Context, config: ViewerConfig, initial_image: Option<PathBuf>) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx.clone(), ctx.clone());

        let (controller, config) = match ViewportController::new(&config) {
            Ok(controller) => (controller, config),
            Err(e) => {
                tracing::warn!("{e}; using default viewer config");
                (ViewportController::default(), ViewerConfig::default())
            }
        };

        let mut app = Self {
            cmd_tx,
            result_tx,
            result_rx,
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            controller,
            config,
        };
        if let Some(path) = initial_image {
            app.open_image(path);
        }
        app
    }

    pub fn open_image(&mut self, path: PathBuf) {
        self.ui_state.add_log(format!("Loading {}", path.display()));
        self.ui_state.loading = Some(path.clone());
        self.ui_state.load_error = None;
        self.send_command(WorkerCommand::LoadImage { path });
    }

    /// Drain all pending results from the loader.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::FilePicked { path } => {
                    self.open_image(path);
                }
                WorkerResult::ImageLoaded {
                    path,
                    image,
                    elapsed,
                } => {
                    self.ui_state.add_log(format!(
                        "Opened: {} ({}x{}) in {}",
                        path.display(),
                        image.dimensions.width,
                        image.dimensions.height,
                        format_duration(elapsed)
                    ));
                    let label = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    self.show_image(ctx, &image, &label);
                    ctx.send_viewport_cmd(egui::ViewportCommand::Title(format!("Stageview - {label}")));
                    self.ui_state.file_path = Some(path);
                    self.ui_state.loading = None;
                    self.ui_state.load_error = None;
                }
                WorkerResult::Error { message } => {
                    self.ui_state.loading = None;
                    self.ui_state.add_log(format!("ERROR: {message}"));
                    self.ui_state.load_error = Some(message);
                }
            }
        }
    }

    fn show_image(&mut self, ctx: &egui::Context, image: &ImageHandle, label: &str) {
        let texture = ctx.load_texture(
            "stage",
            handle_to_color_image(image),
            egui::TextureOptions::LINEAR,
        );
        // A newly opened file is a new image even if its size matches the
        // previous one, so drop the old views before the stage reconciles.
        self.controller.clear_image();
        self.viewport.texture = Some(texture);
        self.viewport.image_size = Some(image.dimensions);
        self.viewport.viewing_label = label.to_string();
    }

    pub fn reset_view(&mut self) {
        if self.controller.reset() {
            self.ui_state.add_log("View reset".into());
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for StageviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);

        // About dialog
        if self.ui_state.show_about {
            egui::Window::new("About Stageview")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Stageview");
                        ui.label("Fit, zoom and pan a single image");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", d.as_millis())
    } else {
        format!("{secs:.1}s")
    }
}
