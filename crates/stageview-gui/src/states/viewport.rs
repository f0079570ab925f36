use stageview_core::geometry::Dimensions;

/// Render-surface state. View math lives in the controller.
#[derive(Default)]
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    /// Natural size of the bitmap behind `texture`.
    pub image_size: Option<Dimensions>,
    pub viewing_label: String,
}
