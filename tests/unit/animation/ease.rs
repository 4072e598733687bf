use super::*;

const ALL: [Ease; 7] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
];

#[test]
fn endpoints_are_fixed_and_input_is_clamped() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
        assert_eq!(ease.apply(-3.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(7.0), 1.0, "{ease:?}");
    }
}

#[test]
fn curves_are_monotonic() {
    for ease in ALL {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease.apply(f64::from(i) / 100.0);
            assert!(v + 1e-12 >= prev, "{ease:?} dipped at {i}");
            prev = v;
        }
    }
}

#[test]
fn default_is_linear_and_serde_is_snake_case() {
    assert_eq!(Ease::default(), Ease::Linear);
    assert_eq!(
        serde_json::to_string(&Ease::InOutCubic).unwrap(),
        "\"in_out_cubic\""
    );
    let e: Ease = serde_json::from_str("\"out_quad\"").unwrap();
    assert_eq!(e, Ease::OutQuad);
}
