use super::*;

#[test]
fn full_stars_are_staggered_pairs() {
    let fill = RatingFill::from_rating(3.0).unwrap();
    let seq = fill_sequence(&fill, Rgba8::RED, 0.3, Ease::Linear);
    assert_eq!(seq.len(), 6);
    for (i, pair) in seq.chunks(2).enumerate() {
        let expected_delay = i as f64 * STAGGER_DELAY;
        for t in pair {
            assert_eq!(t.layer, Layer::Star(i));
            assert!((t.delay - expected_delay).abs() < 1e-12);
            assert_eq!(t.duration, 0.3);
        }
        assert_eq!(pair[0].target, TransitionTarget::FillColor(Rgba8::RED));
        assert!(pair[0].hold && !pair[0].autoreverse);
        assert_eq!(pair[1].target, TransitionTarget::Scale(PULSE_SCALE));
        assert!(pair[1].autoreverse && !pair[1].hold);
    }
}

#[test]
fn partial_star_follows_last_full_star() {
    let fill = RatingFill::from_rating(2.25).unwrap();
    let seq = fill_sequence(&fill, Rgba8::BLUE, 0.3, Ease::OutQuad);
    assert_eq!(seq.len(), 6);
    let partial: Vec<_> = seq
        .iter()
        .filter(|t| t.layer == Layer::Partial(2))
        .collect();
    assert_eq!(partial.len(), 2);
    for t in &partial {
        assert!((t.delay - 2.0 * STAGGER_DELAY).abs() < 1e-12);
        assert_eq!(t.ease, Ease::OutQuad);
    }
    let TransitionTarget::Scale(peak) = partial[1].target else {
        panic!("expected scale pulse");
    };
    assert!((peak - 1.05).abs() < 1e-12);
}

#[test]
fn rating_below_one_animates_only_the_partial_star() {
    let fill = RatingFill::from_rating(0.4).unwrap();
    let seq = fill_sequence(&fill, Rgba8::TEAL, 1.0, Ease::Linear);
    assert_eq!(seq.len(), 2);
    assert!(seq.iter().all(|t| t.layer == Layer::Partial(0) && t.delay == 0.0));
}
