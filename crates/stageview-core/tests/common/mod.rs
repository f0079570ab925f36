#![allow(dead_code)]

use stageview_core::config::ViewerConfig;
use stageview_core::controller::ViewportController;
use stageview_core::geometry::{Dimensions, Point};

/// The reference 800x600 stage.
pub fn stage() -> Dimensions {
    Dimensions {
        width: 800.0,
        height: 600.0,
    }
}

pub fn dims(width: f64, height: f64) -> Dimensions {
    Dimensions { width, height }
}

pub fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Controller on the reference stage with the given image already resolved.
pub fn controller_with_image(width: f64, height: f64) -> ViewportController {
    let mut ctrl = ViewportController::new(&ViewerConfig::default()).unwrap();
    ctrl.on_image_resolved(dims(width, height));
    ctrl
}

/// Write a solid-color RGBA PNG to a temporary directory.
///
/// The file lives as long as the returned `TempDir` is not dropped.
pub fn write_test_png(width: u32, height: u32) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("test.png");
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([40, 80, 120, 255]));
    img.save(&path).expect("write PNG");
    (dir, path)
}
