#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, ()> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key: &str| map.get(key).cloned().ok_or(())
}

#[test]
fn defaults_match_consts() {
    let c = EditorConfig::default();
    assert_eq!(c.canvas_width, 800.0);
    assert_eq!(c.canvas_height, 600.0);
    assert_eq!(c.handle_radius, HANDLE_RADIUS_PX);
    assert_eq!(c.rotate_handle_offset, ROTATE_HANDLE_OFFSET_PX);
}

#[test]
fn lookup_with_nothing_set_yields_defaults() {
    let c = EditorConfig::from_lookup(lookup_from(&[]));
    assert!(matches!(c, Ok(c) if c == EditorConfig::default()));
}

#[test]
fn lookup_overrides_individual_fields() {
    let c = EditorConfig::from_lookup(lookup_from(&[
        ("IMAGE_EDITOR_CANVAS_WIDTH", "1024"),
        ("IMAGE_EDITOR_HANDLE_RADIUS", " 9.5 "),
    ]));
    let Ok(c) = c else {
        panic!("expected valid config");
    };
    assert_eq!(c.canvas_width, 1024.0);
    assert_eq!(c.handle_radius, 9.5);
    assert_eq!(c.canvas_height, 600.0);
}

#[test]
fn lookup_rejects_garbage() {
    let c = EditorConfig::from_lookup(lookup_from(&[("IMAGE_EDITOR_MIN_FRAME_SIZE", "tiny")]));
    match c {
        Err(ConfigError::InvalidValue { key, value }) => {
            assert_eq!(key, "IMAGE_EDITOR_MIN_FRAME_SIZE");
            assert_eq!(value, "tiny");
        }
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn lookup_rejects_negative_and_non_finite() {
    for raw in ["-1", "inf", "NaN"] {
        let c = EditorConfig::from_lookup(lookup_from(&[("IMAGE_EDITOR_SELECTION_DASH", raw)]));
        assert!(matches!(c, Err(ConfigError::InvalidValue { .. })), "{raw}");
    }
}

#[test]
fn json_fills_missing_fields_with_defaults() {
    let c = EditorConfig::from_json(r#"{"canvas_width": 320, "rotation_snap_deg": 45}"#);
    let Ok(c) = c else {
        panic!("expected valid config");
    };
    assert_eq!(c.canvas_width, 320.0);
    assert_eq!(c.rotation_snap_deg, 45.0);
    assert_eq!(c.min_frame_size, MIN_FRAME_SIZE_PX);
}

#[test]
fn json_rejects_malformed() {
    assert!(matches!(EditorConfig::from_json("{"), Err(ConfigError::Json(_))));
    assert!(matches!(EditorConfig::from_json(r#"{"canvas_width": "wide"}"#), Err(ConfigError::Json(_))));
}

#[test]
fn json_rejects_out_of_range_values() {
    let c = EditorConfig::from_json(r#"{"handle_radius": -5, "canvas_width": -800}"#);
    match c {
        Err(ConfigError::InvalidValue { key, value }) => {
            assert_eq!(key, "canvas_width");
            assert_eq!(value, "-800");
        }
        other => panic!("expected InvalidValue, got {other:?}"),
    }
    let c = EditorConfig::from_json(r#"{"handle_radius": -5}"#);
    assert!(matches!(c, Err(ConfigError::InvalidValue { ref key, .. }) if key == "handle_radius"));
}

#[test]
fn zero_canvas_is_rejected_from_every_source() {
    let json = EditorConfig::from_json(r#"{"canvas_height": 0}"#);
    assert!(matches!(json, Err(ConfigError::InvalidValue { ref key, .. }) if key == "canvas_height"));

    let env = EditorConfig::from_lookup(lookup_from(&[("IMAGE_EDITOR_CANVAS_WIDTH", "0")]));
    assert!(matches!(env, Err(ConfigError::InvalidValue { ref key, .. }) if key == "canvas_width"));
}

#[test]
fn validate_accepts_zero_for_optional_sizes() {
    let c = EditorConfig { rotation_snap_deg: 0.0, selection_dash: 0.0, ..EditorConfig::default() };
    assert!(matches!(c.validate(), Ok(v) if v == c));
}

#[test]
fn validate_rejects_non_finite() {
    let c = EditorConfig { min_frame_size: f64::NAN, ..EditorConfig::default() };
    assert!(matches!(c.validate(), Err(ConfigError::InvalidValue { ref key, .. }) if key == "min_frame_size"));
}
