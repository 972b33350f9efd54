use cursor_core::{CursorConfig, CursorError};

#[test]
fn defaults_are_valid_and_match_tuning() {
    let c = CursorConfig::default();
    assert!(c.validate().is_ok());
    assert_eq!(c.lerp_factor, 0.1);
    assert_eq!(c.start_position, [-100.0, -100.0]);
    assert_eq!(c.capture_scale, 2.0);
    assert_eq!(c.tether, 0.15);
    assert_eq!(c.magnet_pull, 0.2);
}

#[test]
fn partial_json_overrides_keep_defaults() {
    let c: CursorConfig =
        serde_json::from_str(r#"{ "lerp_factor": 0.25, "magnet_pull": 0.5 }"#).unwrap();
    assert_eq!(c.lerp_factor, 0.25);
    assert_eq!(c.magnet_pull, 0.5);
    assert_eq!(c.capture_scale, CursorConfig::default().capture_scale);
    assert!(c.validate().is_ok());
}

#[test]
fn lerp_factor_must_be_in_unit_interval() {
    for bad in [0.0_f32, -0.1, 1.5] {
        let c = CursorConfig {
            lerp_factor: bad,
            ..CursorConfig::default()
        };
        assert_eq!(c.validate(), Err(CursorError::InvalidLerpFactor(bad)));
    }
    let one = CursorConfig {
        lerp_factor: 1.0,
        ..CursorConfig::default()
    };
    assert!(one.validate().is_ok());
}

#[test]
fn durations_must_be_positive() {
    let c = CursorConfig {
        snap_duration_sec: 0.0,
        ..CursorConfig::default()
    };
    assert!(matches!(
        c.validate(),
        Err(CursorError::InvalidDuration {
            field: "snap_duration_sec",
            ..
        })
    ));
}

#[test]
fn non_finite_values_are_rejected() {
    let c = CursorConfig {
        tether: f32::NAN,
        ..CursorConfig::default()
    };
    assert!(matches!(
        c.validate(),
        Err(CursorError::NonFinite { field: "tether", .. })
    ));
}

#[test]
fn elastic_ease_parameters_must_be_positive() {
    let flat = CursorConfig {
        magnet_elastic_amplitude: 0.0,
        ..CursorConfig::default()
    };
    assert!(matches!(
        flat.validate(),
        Err(CursorError::NotPositive {
            field: "magnet_elastic_amplitude",
            ..
        })
    ));

    let still = CursorConfig {
        magnet_elastic_period: -0.3,
        ..CursorConfig::default()
    };
    assert!(matches!(
        still.validate(),
        Err(CursorError::NotPositive {
            field: "magnet_elastic_period",
            ..
        })
    ));
}

#[test]
fn negative_stretch_gain_is_rejected() {
    let c = CursorConfig {
        capture_stretch_gain: -0.01,
        ..CursorConfig::default()
    };
    assert!(matches!(
        c.validate(),
        Err(CursorError::Negative {
            field: "capture_stretch_gain",
            ..
        })
    ));
}

#[test]
fn velocity_squash_cannot_flip_the_cursor() {
    let c = CursorConfig {
        velocity_stretch_max_y: 5.0,
        ..CursorConfig::default()
    };
    assert_eq!(
        c.validate(),
        Err(CursorError::InvertingStretch {
            field: "velocity_stretch_max_y",
            value: 5.0,
            limit: 1.0,
        })
    );

    // a shrunken capture scale tightens the bound
    let small = CursorConfig {
        capture_scale: 0.5,
        velocity_stretch_max_y: 0.6,
        ..CursorConfig::default()
    };
    assert!(matches!(
        small.validate(),
        Err(CursorError::InvertingStretch { limit, .. }) if limit == 0.5
    ));
}

#[test]
fn capture_squash_cannot_flip_the_cursor() {
    // 0.3^3 * 100 = 2.7 > capture scale 2
    let c = CursorConfig {
        capture_stretch_amount: 100.0,
        ..CursorConfig::default()
    };
    assert!(matches!(
        c.validate(),
        Err(CursorError::InvertingStretch {
            field: "capture_stretch_max_y",
            ..
        })
    ));

    let tall = CursorConfig {
        capture_stretch_max_y: 2.0,
        ..CursorConfig::default()
    };
    assert!(tall.validate().is_err());
}
