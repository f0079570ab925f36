mod common;

use approx::assert_relative_eq;
use common::{dims, pt, stage};
use stageview_core::geometry::Point;
use stageview_core::view::ViewState;

#[test]
fn test_fitted_view_matches_reference_case() {
    let view = ViewState::fitted(stage(), dims(1000.0, 500.0));
    assert_relative_eq!(view.scale, 0.8, epsilon = 1e-12);
    assert_relative_eq!(view.offset.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(view.offset.y, 100.0, epsilon = 1e-12);
    assert_eq!(view.scaled_image(dims(1000.0, 500.0)), dims(800.0, 400.0));
}

#[test]
fn test_stage_image_mapping_inverts() {
    let view = ViewState::new(2.5, pt(-40.0, 17.0));
    let p = pt(123.0, 456.0);
    let back = view.stage_to_image(view.image_to_stage(p));
    assert_relative_eq!(back.x, p.x, epsilon = 1e-9);
    assert_relative_eq!(back.y, p.y, epsilon = 1e-9);
}

#[test]
fn test_image_origin_maps_to_offset() {
    let view = ViewState::new(0.8, pt(0.0, 100.0));
    assert_eq!(view.image_to_stage(Point::ZERO), pt(0.0, 100.0));
}

#[test]
fn test_zoomed_about_keeps_anchor_fixed() {
    let views = [
        ViewState::new(1.0, Point::ZERO),
        ViewState::new(0.8, pt(0.0, 100.0)),
        ViewState::new(3.7, pt(-900.0, -250.0)),
    ];
    let anchors = [pt(0.0, 0.0), pt(400.0, 300.0), pt(799.0, 12.5)];
    for view in views {
        for anchor in anchors {
            for new_scale in [0.1, view.scale * 1.1, view.scale / 1.1, 40.0] {
                let before = view.stage_to_image(anchor);
                let next = view.zoomed_about(anchor, new_scale);
                let after = next.stage_to_image(anchor);
                assert_relative_eq!(next.scale, new_scale);
                assert_relative_eq!(before.x, after.x, epsilon = 1e-9, max_relative = 1e-9);
                assert_relative_eq!(before.y, after.y, epsilon = 1e-9, max_relative = 1e-9);
            }
        }
    }
}
