use super::*;
use kurbo::{PathEl, Shape};

const TOL: f64 = 1e-9;

#[test]
fn vertex_count_and_radii_hold_for_many_shapes() {
    let center = Point::new(30.0, -12.5);
    for corners in 3..=12 {
        for radius in [0.5, 1.0, 20.0, 333.3] {
            let g = StarGeometry::build(center, radius, corners);
            assert_eq!(g.vertices().len(), 2 * corners as usize);
            assert_eq!(g.tips().count(), corners as usize);
            assert_eq!(g.valleys().count(), corners as usize);
            for tip in g.tips() {
                assert!((tip.distance(center) - radius).abs() < TOL * radius.max(1.0));
            }
            for valley in g.valleys() {
                assert!((valley.distance(center) - radius / 2.0).abs() < TOL * radius.max(1.0));
            }
        }
    }
}

#[test]
fn first_tip_points_up_and_walks_clockwise() {
    let g = StarGeometry::build(Point::new(20.0, 20.0), 20.0, 5);
    let v = g.vertices();
    assert!((v[0].x - 20.0).abs() < TOL);
    assert!((v[0].y - 0.0).abs() < TOL);
    // Clockwise on screen: the first valley sits to the right of the top tip.
    assert!(v[1].x > v[0].x);
    // Second tip at -90 + 72 degrees.
    let expected = (-90.0f64 + 72.0).to_radians();
    assert!((v[2].x - (20.0 + 20.0 * expected.cos())).abs() < TOL);
    assert!((v[2].y - (20.0 + 20.0 * expected.sin())).abs() < TOL);
}

#[test]
fn path_is_closed_polygon() {
    let g = StarGeometry::build(Point::ZERO, 10.0, 5);
    let path = g.path();
    let els = path.elements();
    assert_eq!(els.len(), 2 * 5 + 1);
    assert!(matches!(els[0], PathEl::MoveTo(_)));
    assert!(matches!(els.last(), Some(PathEl::ClosePath)));
    assert_eq!(
        els.iter()
            .filter(|el| matches!(el, PathEl::LineTo(_)))
            .count(),
        2 * 5 - 1
    );
    assert!(path.area().abs() > 0.0);
}

#[test]
fn clip_disc_covers_outline_stroke() {
    let g = StarGeometry::build(Point::new(5.0, 5.0), 20.0, 5);
    let clip = g.clip();
    assert_eq!(clip.center, Point::new(5.0, 5.0));
    assert_eq!(clip.radius, 20.0 + DIAMETER_INCREMENT);
    assert!(clip.radius >= 20.0 + OUTLINE_WIDTH / 2.0);
}

#[test]
fn partial_fill_rect_is_proportional() {
    let g = StarGeometry::build(Point::new(20.0, 20.0), 20.0, 5);
    let half = g.partial_fill_rect(0.5);
    assert_eq!(half.x0, DIAMETER_INCREMENT);
    assert!((half.width() - 0.5 * (40.0 - 2.0 * DIAMETER_INCREMENT)).abs() < TOL);
    assert_eq!(half.height(), 40.0);
    assert_eq!(g.partial_fill_rect(0.0).width(), 0.0);
}

#[test]
#[should_panic]
fn degenerate_corner_count_fails_fast() {
    let _ = StarGeometry::build(Point::ZERO, 10.0, 2);
}

#[test]
#[should_panic]
fn non_positive_radius_fails_fast() {
    let _ = StarGeometry::build(Point::ZERO, 0.0, 5);
}

#[test]
fn spec_rejects_invalid_input() {
    assert!(StarSpec::new(2, Rgba8::RED, 10.0).is_err());
    assert!(StarSpec::new(5, Rgba8::RED, 0.0).is_err());
    assert!(StarSpec::new(5, Rgba8::RED, f64::NAN).is_err());
    let spec = StarSpec::new(5, Rgba8::RED, 20.0).unwrap();
    assert_eq!(spec.box_size(), Size::new(40.0, 40.0));
}

#[test]
fn spec_deserialization_validates() {
    let ok: StarSpec =
        serde_json::from_str(r##"{"corners":6,"outline_color":"#000000","radius":8}"##).unwrap();
    assert_eq!(ok.corners(), 6);
    let bad = serde_json::from_str::<StarSpec>(
        r##"{"corners":2,"outline_color":"#000000","radius":8}"##,
    );
    assert!(bad.is_err());
}
