use super::*;

#[test]
fn editor_state_default_is_inactive_and_unloaded() {
    let state = EditorState::default();
    assert!(!state.is_active);
    assert!(!state.is_image_loaded);
    assert_eq!(state.frame, ImageFrame::default());
}

#[test]
fn editor_state_partial_json_fills_defaults() {
    let parsed: Result<EditorState, _> = serde_json::from_str(r#"{"is_active": true}"#);
    let Ok(state) = parsed else {
        panic!("expected state");
    };
    assert!(state.is_active);
    assert!(!state.is_image_loaded);
}

#[test]
fn input_state_default_is_idle() {
    assert!(InputState::default().is_idle());
    assert_eq!(InputState::default().orig_frame(), None);
}

#[test]
fn input_state_exposes_orig_frame_for_every_gesture() {
    let frame = ImageFrame::new(Point::new(1.0, 2.0), 3.0, 4.0);
    let gestures = [
        InputState::Moving { last: Point::default(), orig_frame: frame },
        InputState::Resizing { corner: Corner::TopLeft, orig_frame: frame, start_distance: 1.0 },
        InputState::Rotating { orig_frame: frame, start_angle: 0.0 },
    ];
    for g in gestures {
        assert!(!g.is_idle());
        assert_eq!(g.orig_frame(), Some(frame));
    }
}

#[test]
fn modifiers_default_all_released() {
    let m = Modifiers::default();
    assert!(!m.shift && !m.ctrl && !m.alt && !m.meta);
}

#[test]
fn button_variants_distinct() {
    assert_ne!(Button::Primary, Button::Secondary);
    assert_ne!(Button::Primary, Button::Middle);
}
