use super::*;
use crate::foundation::core::Canvas;
use crate::geometry::star::StarSpec;
use crate::rating::config::{RatingMode, RowConfig};
use crate::rating::engine::RatingRow;
use crate::render::plan::compile_frame;
use crate::render::scene::Scene;

fn render_row(rating: f64) -> FrameRGBA {
    let cfg = RowConfig::new(
        RatingMode::display(rating),
        Rgba8::RED,
        2.0,
        StarSpec::new(5, Rgba8::BLACK, 20.0).unwrap(),
    );
    let mut row = RatingRow::new(cfg).unwrap();
    let mut scene = Scene::new();
    row.layout_finalized(Rect::new(0.0, 0.0, 206.0, 40.0), &mut scene);
    let plan = compile_frame(
        &scene.snapshot(),
        Canvas::new(206, 40).unwrap(),
        Rgba8::WHITE,
    );
    CpuRenderer::new().render(&plan).unwrap()
}

#[test]
fn filled_and_empty_star_centers_differ() {
    let frame = render_row(3.0);
    assert_eq!(frame.data.len(), 206 * 40 * 4);
    // Star centers sit at x = 20 + 42 * i.
    assert_eq!(frame.pixel(20, 22), Some([255, 59, 48, 255]));
    assert_eq!(frame.pixel(104, 22), Some([255, 59, 48, 255]));
    assert_eq!(frame.pixel(146, 22), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(188, 22), Some([255, 255, 255, 255]));
}

#[test]
fn corners_outside_star_stay_background() {
    let frame = render_row(5.0);
    assert_eq!(frame.pixel(0, 0), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(41, 39), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(206, 0), None);
}

#[test]
fn partial_fill_covers_left_half_only() {
    let frame = render_row(2.5);
    // Third star spans x in [84, 124]; the partial fill ends at 84 + 1 + 19 = 104.
    assert_eq!(frame.pixel(100, 24), Some([255, 59, 48, 255]));
    assert_eq!(frame.pixel(108, 24), Some([255, 255, 255, 255]));
}

#[test]
fn unbalanced_plan_is_rejected() {
    let mut plan = RenderPlan::new(Canvas::new(8, 8).unwrap(), Rgba8::WHITE);
    plan.ops.push(DrawOp::PopClip);
    assert!(CpuRenderer::new().render(&plan).is_err());
}

#[test]
fn straight_conversion_undoes_premultiply() {
    let frame = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![128, 0, 0, 128],
        premultiplied: true,
    };
    assert_eq!(frame.to_straight_rgba8(), vec![255, 0, 0, 128]);
}
