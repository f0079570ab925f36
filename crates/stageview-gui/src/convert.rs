use stageview_core::io::image_io::ImageHandle;

/// Convert a decoded RGBA8 bitmap to an egui ColorImage.
pub fn handle_to_color_image(image: &ImageHandle) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied(image.pixel_size(), image.pixels.as_raw())
}
