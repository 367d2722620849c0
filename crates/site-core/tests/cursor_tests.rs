// Host-side tests for the cursor-trail interpolation.

use glam::Vec2;
use site_core::{CursorTrail, TRAIL_LEN};

#[test]
fn trail_has_the_configured_length() {
    let trail = CursorTrail::new();
    assert_eq!(trail.dots().len(), TRAIL_LEN);
}

#[test]
fn head_dot_chases_faster_than_tail_dot() {
    let mut trail = CursorTrail::new();
    let target = Vec2::new(100.0, 0.0);
    trail.step(target);
    let head = trail.dots()[0].position.x;
    let tail = trail.dots()[TRAIL_LEN - 1].position.x;
    assert!(head > tail, "head {head} should lead tail {tail}");
    // First dot has delay 0, so it covers half the gap per frame.
    assert!((head - 50.0).abs() < 1e-4);
}

#[test]
fn all_dots_converge_onto_a_resting_pointer() {
    let mut trail = CursorTrail::new();
    let target = Vec2::new(37.0, -12.0);
    for _ in 0..500 {
        trail.step(target);
    }
    for dot in trail.dots() {
        assert!((dot.position - target).length() < 1e-2);
    }
}

#[test]
fn opacity_and_scale_fall_off_along_the_trail() {
    assert!((CursorTrail::opacity(0) - 0.8).abs() < 1e-6);
    assert!((CursorTrail::opacity(TRAIL_LEN - 1) - 0.1).abs() < 1e-6);
    for i in 1..TRAIL_LEN {
        assert!(CursorTrail::opacity(i) < CursorTrail::opacity(i - 1));
        assert_eq!(CursorTrail::opacity(i), CursorTrail::scale(i));
    }
}
