use super::*;

#[test]
fn out_of_range_ratings_are_rejected() {
    for r in [0.0, -1.0, 5.0001, 6.0, f64::NAN, f64::INFINITY] {
        assert_eq!(RatingFill::from_rating(r), None, "{r}");
    }
}

#[test]
fn whole_ratings_have_no_partial() {
    let f = RatingFill::from_rating(3.0).unwrap();
    assert_eq!(f.full, 3);
    assert!(!f.has_partial());
    assert_eq!(
        f.stars(),
        [
            StarFill::Full,
            StarFill::Full,
            StarFill::Full,
            StarFill::Empty,
            StarFill::Empty
        ]
    );
    let max = RatingFill::from_rating(5.0).unwrap();
    assert_eq!(max.stars(), [StarFill::Full; STAR_COUNT]);
}

#[test]
fn fractional_rating_marks_one_partial_star() {
    let f = RatingFill::from_rating(2.5).unwrap();
    assert_eq!(f.partial_index(), Some(2));
    assert_eq!(f.star(2), StarFill::Partial(0.5));
    assert_eq!(f.star(3), StarFill::Empty);
}

#[test]
fn fill_counts_never_exceed_row() {
    for i in 1..=500 {
        let r = f64::from(i) / 100.0;
        let f = RatingFill::from_rating(r).unwrap();
        let stars = f.stars();
        let full = stars.iter().filter(|s| **s == StarFill::Full).count();
        let partial = stars
            .iter()
            .filter(|s| matches!(s, StarFill::Partial(_)))
            .count();
        assert_eq!(full, r.floor() as usize);
        assert!(partial <= 1);
        assert!(full + partial <= STAR_COUNT);
    }
}
