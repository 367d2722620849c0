// Host-side tests for the 360° showcase rotation logic.

use site_core::{manual_seek_target, RotateDirection, RotationState};

#[test]
fn rotating_right_advances_half_a_second() {
    let t = manual_seek_target(2.0, 10.0, RotateDirection::Right);
    assert!((t - 2.5).abs() < 1e-9);
}

#[test]
fn rotating_right_past_the_end_restarts() {
    let t = manual_seek_target(9.8, 10.0, RotateDirection::Right);
    assert_eq!(t, 0.0);
}

#[test]
fn rotating_left_wraps_across_the_loop_boundary() {
    let t = manual_seek_target(0.2, 10.0, RotateDirection::Left);
    assert!((t - 9.7).abs() < 1e-9);
}

#[test]
fn rotating_left_on_a_very_short_clip_pins_to_start() {
    // 0.1 - 0.5 = -0.4; duration 0.3 still leaves a negative time, so 0.
    let t = manual_seek_target(0.1, 0.3, RotateDirection::Left);
    assert_eq!(t, 0.0);
}

#[test]
fn auto_rotation_runs_at_full_rate_until_hovered() {
    let mut state = RotationState::new();
    assert_eq!(state.rate(), Some(1.2));
    state.set_hovered(true);
    assert_eq!(state.rate(), Some(0.2));
    state.set_hovered(false);
    assert_eq!(state.rate(), Some(1.2));
}

#[test]
fn manual_step_leaves_auto_rotation() {
    let mut state = RotationState::new();
    state.on_manual_step();
    assert_eq!(state.rate(), None);
    // Toggling auto back resumes the spin.
    assert!(state.toggle_auto());
    assert_eq!(state.rate(), Some(1.2));
}

#[test]
fn toggle_auto_flips_the_mode() {
    let mut state = RotationState::new();
    assert!(!state.toggle_auto());
    assert_eq!(state.rate(), None);
    assert!(state.toggle_auto());
}
