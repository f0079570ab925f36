use std::time::Instant;

use stageview_core::controller::ViewPhase;
use stageview_core::geometry::{Dimensions, Point};
use stageview_core::input::{InputEvent, WheelDirection};
use stageview_core::view::ViewState;

use crate::app::StageviewApp;

const SCROLLBAR_THICKNESS: f32 = 6.0;

pub fn show(ctx: &egui::Context, app: &mut StageviewApp) {
    let now = Instant::now();
    if app.controller.tick(now) {
        tracing::debug!("Panning settled");
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        let stage = app.controller.stage();
        let stage_size = egui::vec2(stage.width as f32, stage.height as f32);

        ui.vertical_centered(|ui| {
            let (rect, response) = ui.allocate_exact_size(stage_size, egui::Sense::click_and_drag());
            paint_background(ui, rect);

            // Re-reported every frame; the controller ignores repeats.
            if let Some(size) = app.viewport.image_size {
                app.controller.on_image_resolved(size);
            }

            let texture_id = app.viewport.texture.as_ref().map(|t| t.id());
            match (texture_id, app.viewport.image_size) {
                (Some(texture_id), Some(image)) if !app.controller.is_awaiting_image() => {
                    handle_zoom(ui, &response, app, rect);
                    handle_pan(ui, &response, app, now);

                    if response.double_clicked() {
                        app.controller.handle(InputEvent::Reset, now);
                    }

                    if let Some(view) = app.controller.view() {
                        let painter = ui.painter_at(rect);
                        draw_image(&painter, texture_id, rect, &view, image);
                        if app.controller.phase() == ViewPhase::Idle {
                            draw_scrollbars(&painter, rect, stage, &view, image);
                        }
                        draw_viewing_label(&painter, rect, &app.viewport.viewing_label);
                    }
                }
                _ => show_placeholder(ui, rect, app),
            }
        });
    });

    if let Some(remaining) = app.controller.pan_remaining(now) {
        ctx.request_repaint_after(remaining);
    }
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

/// Pointer position in stage coordinates, if it is over the stage.
fn pointer_on_stage(ui: &egui::Ui, rect: egui::Rect) -> Option<Point> {
    ui.input(|i| i.pointer.hover_pos())
        .filter(|pos| rect.contains(*pos))
        .map(|pos| {
            let local = pos - rect.min;
            Point::new(f64::from(local.x), f64::from(local.y))
        })
}

fn handle_zoom(ui: &egui::Ui, response: &egui::Response, app: &mut StageviewApp, rect: egui::Rect) {
    if !response.hovered() {
        return;
    }
    let pointer = pointer_on_stage(ui, rect);
    let now = Instant::now();

    let wheel_steps: Vec<(f32, bool)> = ui.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::MouseWheel {
                    delta, modifiers, ..
                } => Some((delta.y, modifiers.command)),
                _ => None,
            })
            .collect()
    });

    for (delta, modifier) in wheel_steps {
        let Some(direction) = WheelDirection::from_delta(f64::from(delta)) else {
            continue;
        };
        app.controller.handle(
            InputEvent::Wheel {
                pointer,
                direction,
                modifier,
            },
            now,
        );
    }
}

/// Plain wheel/trackpad scrolling and middle-button drags both act as the
/// scroll source; the controller just mirrors the offset they report.
fn handle_pan(ui: &egui::Ui, response: &egui::Response, app: &mut StageviewApp, now: Instant) {
    let Some(view) = app.controller.view() else {
        return;
    };

    let mut delta = egui::Vec2::ZERO;
    if response.hovered() && !ui.input(|i| i.modifiers.command) {
        delta += ui.input(|i| i.smooth_scroll_delta);
    }
    if response.dragged_by(egui::PointerButton::Middle) {
        delta += response.drag_delta();
    }
    if delta == egui::Vec2::ZERO {
        return;
    }

    let offset = view.offset + Point::new(f64::from(delta.x), f64::from(delta.y));
    app.controller.handle(InputEvent::Scroll { offset }, now);
}

fn stage_to_screen(rect: egui::Rect, p: Point) -> egui::Pos2 {
    rect.min + egui::vec2(p.x as f32, p.y as f32)
}

fn draw_image(
    painter: &egui::Painter,
    texture_id: egui::TextureId,
    rect: egui::Rect,
    view: &ViewState,
    image: Dimensions,
) {
    let footprint = view.scaled_image(image);
    let img_rect = egui::Rect::from_min_size(
        stage_to_screen(rect, view.offset),
        egui::vec2(footprint.width as f32, footprint.height as f32),
    );
    painter.image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

/// Thumb start and length along one axis, as fractions of the track, or
/// `None` when the image fits on that axis.
fn scrollbar_thumb(offset: f64, extent: f64, stage: f64) -> Option<(f32, f32)> {
    if extent <= stage {
        return None;
    }
    let length = stage / extent;
    let start = (-offset / extent).clamp(0.0, 1.0 - length);
    Some((start as f32, length as f32))
}

fn draw_scrollbars(
    painter: &egui::Painter,
    rect: egui::Rect,
    stage: Dimensions,
    view: &ViewState,
    image: Dimensions,
) {
    let footprint = view.scaled_image(image);
    let color = egui::Color32::from_white_alpha(90);

    if let Some((start, length)) = scrollbar_thumb(view.offset.x, footprint.width, stage.width) {
        let x0 = rect.left() + start * rect.width();
        let thumb = egui::Rect::from_min_size(
            egui::pos2(x0, rect.bottom() - SCROLLBAR_THICKNESS),
            egui::vec2(length * rect.width(), SCROLLBAR_THICKNESS),
        );
        painter.rect_filled(thumb, SCROLLBAR_THICKNESS / 2.0, color);
    }
    if let Some((start, length)) = scrollbar_thumb(view.offset.y, footprint.height, stage.height) {
        let y0 = rect.top() + start * rect.height();
        let thumb = egui::Rect::from_min_size(
            egui::pos2(rect.right() - SCROLLBAR_THICKNESS, y0),
            egui::vec2(SCROLLBAR_THICKNESS, length * rect.height()),
        );
        painter.rect_filled(thumb, SCROLLBAR_THICKNESS / 2.0, color);
    }
}

fn draw_viewing_label(painter: &egui::Painter, rect: egui::Rect, label: &str) {
    if label.is_empty() {
        return;
    }
    let label_pos = rect.left_top() + egui::vec2(8.0, 8.0);
    painter.text(
        label_pos,
        egui::Align2::LEFT_TOP,
        label,
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
    );
}

fn show_placeholder(ui: &egui::Ui, rect: egui::Rect, app: &StageviewApp) {
    let text = if app.ui_state.is_busy() {
        "Loading...".to_string()
    } else if let Some(ref err) = app.ui_state.load_error {
        err.clone()
    } else {
        "Open an image to begin".to_string()
    };
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(18.0),
        egui::Color32::from_gray(100),
    );
}
