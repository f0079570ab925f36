mod common;

use approx::assert_relative_eq;
use common::{dims, stage};
use stageview_core::geometry::{center_offset, fit_scale, Dimensions, Point};

const TOL: f64 = 1e-9;

#[test]
fn test_fit_scale_wide_image() {
    let scale = fit_scale(stage(), dims(1000.0, 500.0));
    assert_relative_eq!(scale, 0.8, epsilon = TOL);
}

#[test]
fn test_center_offset_wide_image() {
    let image = dims(1000.0, 500.0);
    let scale = fit_scale(stage(), image);
    let offset = center_offset(stage(), image, scale);
    assert_relative_eq!(offset.x, 0.0, epsilon = TOL);
    assert_relative_eq!(offset.y, 100.0, epsilon = TOL);
}

#[test]
fn test_exact_fill_has_zero_offset() {
    let image = dims(400.0, 300.0);
    let scale = fit_scale(stage(), image);
    assert_relative_eq!(scale, 2.0, epsilon = TOL);
    let offset = center_offset(stage(), image, scale);
    assert_eq!(offset, Point::ZERO);
}

#[test]
fn test_tall_image_is_pillarboxed() {
    let image = dims(300.0, 1200.0);
    let scale = fit_scale(stage(), image);
    assert_relative_eq!(scale, 0.5, epsilon = TOL);
    let offset = center_offset(stage(), image, scale);
    assert_relative_eq!(offset.x, 325.0, epsilon = TOL);
    assert_relative_eq!(offset.y, 0.0, epsilon = TOL);
}

#[test]
fn test_fit_scale_is_tight_on_limiting_axis() {
    let cases = [
        (1.0, 1.0),
        (1920.0, 1080.0),
        (37.0, 4096.0),
        (12345.6, 7.5),
        (800.0, 601.0),
        (0.25, 0.5),
    ];
    for (w, h) in cases {
        let image = dims(w, h);
        let scale = fit_scale(stage(), image);
        let fw = image.width * scale;
        let fh = image.height * scale;
        assert!(fw <= 800.0 + 1e-6, "{w}x{h}: width {fw} overflows");
        assert!(fh <= 600.0 + 1e-6, "{w}x{h}: height {fh} overflows");
        let tight = (fw - 800.0).abs() < 1e-6 || (fh - 600.0).abs() < 1e-6;
        assert!(tight, "{w}x{h}: neither axis fills the stage ({fw}x{fh})");
    }
}

#[test]
fn test_center_offset_clamps_oversized_axis() {
    // Scale deliberately larger than the fit scale.
    let offset = center_offset(stage(), dims(1000.0, 200.0), 1.0);
    assert_relative_eq!(offset.x, 0.0, epsilon = TOL);
    assert_relative_eq!(offset.y, 200.0, epsilon = TOL);

    let offset = center_offset(stage(), dims(2000.0, 2000.0), 3.0);
    assert_eq!(offset, Point::ZERO);
}

#[test]
fn test_center_offset_never_negative() {
    for scale in [0.01, 0.5, 1.0, 2.0, 10.0] {
        for (w, h) in [(10.0, 10.0), (800.0, 600.0), (5000.0, 20.0)] {
            let o = center_offset(stage(), dims(w, h), scale);
            assert!(o.x >= 0.0 && o.y >= 0.0, "{w}x{h}@{scale}: {o:?}");
        }
    }
}

#[test]
fn test_dimensions_new_rejects_degenerate() {
    assert!(Dimensions::new(0.0, 10.0).is_err());
    assert!(Dimensions::new(10.0, -1.0).is_err());
    assert!(Dimensions::new(f64::NAN, 10.0).is_err());
    assert!(Dimensions::new(f64::INFINITY, 10.0).is_err());
    let ok = Dimensions::new(3.0, 4.0).unwrap();
    assert!(ok.is_renderable());
}

#[test]
fn test_dimensions_from_pixels_and_scaled() {
    let d = Dimensions::from_pixels(640, 480);
    assert_eq!(d, dims(640.0, 480.0));
    assert_eq!(d.scaled(0.5), dims(320.0, 240.0));
    assert!(!Dimensions::from_pixels(0, 480).is_renderable());
}

#[test]
fn test_point_arithmetic() {
    let a = Point::new(3.0, 4.0);
    let b = Point::new(1.0, 2.0);
    assert_eq!(a + b, Point::new(4.0, 6.0));
    assert_eq!(a - b, Point::new(2.0, 2.0));
    assert_eq!(a * 2.0, Point::new(6.0, 8.0));
    assert_eq!(a / 2.0, Point::new(1.5, 2.0));
}
