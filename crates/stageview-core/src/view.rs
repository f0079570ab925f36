use serde::{Deserialize, Serialize};

use crate::geometry::{center_offset, fit_scale, Dimensions, Point};

/// Affine map from image-local coordinates to stage coordinates:
/// `stage = image * scale + offset`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Uniform scale, always > 0.
    pub scale: f64,
    /// Stage position of the image's top-left corner.
    pub offset: Point,
}

impl ViewState {
    pub fn new(scale: f64, offset: Point) -> Self {
        debug_assert!(scale > 0.0, "view scale must be positive");
        Self { scale, offset }
    }

    /// Fit-and-center view for `image` inside `stage`.
    pub fn fitted(stage: Dimensions, image: Dimensions) -> Self {
        let scale = fit_scale(stage, image);
        let offset = center_offset(stage, image, scale);
        Self::new(scale, offset)
    }

    pub fn stage_to_image(&self, stage_point: Point) -> Point {
        (stage_point - self.offset) / self.scale
    }

    pub fn image_to_stage(&self, image_point: Point) -> Point {
        image_point * self.scale + self.offset
    }

    /// Rescale to `new_scale` while keeping the image point under `anchor`
    /// (a stage position) fixed on the stage.
    pub fn zoomed_about(&self, anchor: Point, new_scale: f64) -> Self {
        let image_point = self.stage_to_image(anchor);
        let offset = anchor - image_point * new_scale;
        Self::new(new_scale, offset)
    }

    /// On-stage footprint of an image drawn with this view.
    pub fn scaled_image(&self, image: Dimensions) -> Dimensions {
        image.scaled(self.scale)
    }
}
