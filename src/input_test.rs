use super::*;

#[test]
fn default_gesture_is_idle() {
    assert_eq!(Gesture::default(), Gesture::Idle);
    assert_eq!(Gesture::default().mode(), InteractionMode::Idle);
}

#[test]
fn gesture_mode_follows_variant() {
    let pan = Gesture::Panning { start_pointer: Point::new(1.0, 2.0), start_pan: Point::default() };
    assert_eq!(pan.mode(), InteractionMode::Panning);

    let pinch = Gesture::Pinching {
        start_distance: 100.0,
        start_mid: Point::new(50.0, 50.0),
        start_zoom: 1.0,
        start_pan: Point::default(),
    };
    assert_eq!(pinch.mode(), InteractionMode::Pinching);
}

#[test]
fn command_modifier_accepts_ctrl_or_meta() {
    assert!(Modifiers { ctrl: true, ..Default::default() }.command());
    assert!(Modifiers { meta: true, ..Default::default() }.command());
    assert!(!Modifiers { shift: true, alt: true, ..Default::default() }.command());
}

#[test]
fn space_key_names() {
    assert!(Key(" ".into()).is_space());
    assert!(Key("Spacebar".into()).is_space());
    assert!(!Key("Enter".into()).is_space());
}

#[test]
fn default_focus_is_not_a_text_input() {
    assert_eq!(FocusTarget::default(), FocusTarget::Other);
}
