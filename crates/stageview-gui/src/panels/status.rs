use stageview_core::controller::ViewPhase;

use crate::app::StageviewApp;

pub fn show(ctx: &egui::Context, app: &mut StageviewApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area: fixed height for 3 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            if let Some(ref path) = app.ui_state.file_path {
                ui.label(path.display().to_string());
                ui.separator();
            }
            if let Some(size) = app.controller.image_dimensions() {
                ui.label(format!("{}x{}", size.width, size.height));
                ui.separator();
            }
            match app.controller.zoom_percent() {
                Some(pct) => ui.label(format!("Zoom: {pct:.0}%")),
                None => ui.label("Zoom: -"),
            };
            if let Some(view) = app.controller.view() {
                ui.separator();
                ui.label(format!("Offset: {:.0}, {:.0}", view.offset.x, view.offset.y));
            }
            if app.controller.phase() == ViewPhase::Panning {
                ui.separator();
                ui.label(app.controller.phase().to_string());
            }
            if app.ui_state.is_busy() {
                ui.separator();
                ui.spinner();
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let enabled = !app.controller.is_awaiting_image();
                if ui.add_enabled(enabled, egui::Button::new("Reset")).clicked() {
                    app.reset_view();
                }
            });
        });

        ui.add_space(2.0);
    });
}
