use super::*;
use crate::rating::fill::StarFill;

#[test]
fn demo_rows_mirror_the_reference_host() {
    let rows = demo_rows().unwrap();
    assert_eq!(rows.len(), 6);
    for (i, cfg) in rows.iter().enumerate() {
        let RatingMode::Display { rating, .. } = cfg.mode else {
            panic!("demo rows are display rows");
        };
        assert_eq!(rating, (i + 1) as f64);
        assert_eq!(cfg.star.outline_color(), cfg.fill_color);
        assert_eq!(cfg.preferred_size().width, 206.0);
    }
}

#[test]
fn gallery_lays_out_every_row() {
    let gallery = Gallery::demo().unwrap();
    assert_eq!(gallery.canvas(), Canvas::new(238, 360).unwrap());
    let ratings: Vec<f64> = gallery.rows().map(RatingRow::current_rating).collect();
    // The rating-6 row is out of range and stays empty.
    assert_eq!(ratings, vec![1.0, 2.0, 3.0, 4.0, 5.0, 0.0]);
    let last = gallery.rows().last().unwrap();
    assert_eq!(last.fills(), &[StarFill::Empty; 5]);
    for (i, row) in gallery.rows().enumerate() {
        let b = row.row_bounds().unwrap();
        assert_eq!(b.y0, i as f64 * GALLERY_ROW_HEIGHT + 10.0);
    }
}

#[test]
fn gallery_settles_after_longest_sweep() {
    let mut gallery = Gallery::demo().unwrap();
    // Five stars: last one starts at 0.4s and pulses for 2 * 0.3s.
    assert!((gallery.settled_at() - 1.0).abs() < 1e-9);
    gallery.set_time(2.0);
    let frame = gallery.render(Rgba8::WHITE).unwrap();
    assert_eq!(frame.width, 238);
    assert_eq!(frame.height, 360);
}

#[test]
fn empty_gallery_is_rejected() {
    assert!(Gallery::new(Vec::new(), 60.0).is_err());
    assert!(Gallery::new(demo_rows().unwrap(), 0.0).is_err());
}
