use super::*;

#[test]
fn defaults_enable_fast_paths_and_a8_masks() {
    assert!(CompositeOpts::default().fast_paths);
    assert_eq!(TrapezoidOpts::default().mask_format, FormatName::A8);
    assert!(!CompositeOpts::default().with_fast_paths(false).fast_paths);
    assert_eq!(
        TrapezoidOpts::default()
            .with_mask_format(FormatName::A1)
            .mask_format,
        FormatName::A1
    );
}

#[test]
fn env_values_that_disable_fast_paths() {
    for v in ["0", "false", "OFF", " off "] {
        assert_eq!(fast_paths_override(Some(v)), Some(false), "{v}");
    }
    for v in ["1", "true", "on"] {
        assert_eq!(fast_paths_override(Some(v)), Some(true), "{v}");
    }
    assert_eq!(fast_paths_override(Some("")), None);
    assert_eq!(fast_paths_override(None), None);
}

#[test]
fn json_fills_missing_fields_with_defaults() {
    assert_eq!(
        CompositeOpts::from_json("{}").unwrap(),
        CompositeOpts::default()
    );
    assert!(
        !CompositeOpts::from_json(r#"{"fast_paths": false}"#)
            .unwrap()
            .fast_paths
    );
    let t = TrapezoidOpts::from_json(r#"{"mask_format": "a4"}"#).unwrap();
    assert_eq!(t.mask_format, FormatName::A4);
}

#[test]
fn bad_json_is_a_serde_error() {
    let err = CompositeOpts::from_json(r#"{"fast_paths": "maybe"}"#).unwrap_err();
    assert!(matches!(err, PixcompError::Serde(_)));
    let err = TrapezoidOpts::from_json(r#"{"unknown": 1}"#).unwrap_err();
    assert!(matches!(err, PixcompError::Serde(_)));
}
