use super::*;

const ALL: [Ease; 4] = [Ease::Linear, Ease::InOutQuad, Ease::InOutCubic, Ease::OutCubic];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn in_out_quad_is_symmetric_around_midpoint() {
    assert_eq!(Ease::InOutQuad.apply(0.5), 0.5);
    assert!((Ease::InOutQuad.apply(0.25) - 0.125).abs() < 1e-12);
    assert!((Ease::InOutQuad.apply(0.75) - 0.875).abs() < 1e-12);
}

#[test]
fn out_of_range_inputs_are_clamped() {
    for ease in ALL {
        assert_eq!(ease.apply(-3.0), 0.0);
        assert_eq!(ease.apply(7.0), 1.0);
        assert_eq!(ease.apply(f64::NAN), 0.0);
    }
}

#[test]
fn curves_are_monotonic_on_unit_interval() {
    for ease in ALL {
        let mut prev = ease.apply(0.0);
        for step in 1..=1000 {
            let v = ease.apply(f64::from(step) / 1000.0);
            assert!(v >= prev, "{ease:?} decreased at step {step}");
            prev = v;
        }
    }
}

#[test]
fn serde_uses_snake_case_names() {
    let json = serde_json::to_string(&Ease::InOutQuad).unwrap();
    assert_eq!(json, "\"in_out_quad\"");
    let back: Ease = serde_json::from_str("\"out_cubic\"").unwrap();
    assert_eq!(back, Ease::OutCubic);
}
