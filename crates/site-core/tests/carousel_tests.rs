// Host-side tests for the case-study swiper paging state.

use site_core::{slides_per_view, CarouselState};

#[test]
fn slides_per_view_breakpoints() {
    assert_eq!(slides_per_view(320.0), 1);
    assert_eq!(slides_per_view(639.9), 1);
    assert_eq!(slides_per_view(640.0), 2);
    assert_eq!(slides_per_view(1023.9), 2);
    assert_eq!(slides_per_view(1024.0), 3);
    assert_eq!(slides_per_view(1920.0), 3);
}

#[test]
fn navigation_clamps_at_both_ends() {
    let mut c = CarouselState::new(5, 1200.0); // 3 per view -> last index 2
    assert!(c.at_start());
    c.prev();
    assert_eq!(c.current, 0);
    c.go_to(99);
    assert_eq!(c.current, 2);
    assert!(c.at_end());
    c.next();
    assert_eq!(c.current, 2);
}

#[test]
fn next_and_prev_step_one_slide() {
    let mut c = CarouselState::new(5, 320.0); // 1 per view
    c.next();
    c.next();
    assert_eq!(c.current, 2);
    assert!(!c.at_start() && !c.at_end());
    c.prev();
    assert_eq!(c.current, 1);
}

#[test]
fn translate_percent_accounts_for_slides_per_view() {
    let mut c = CarouselState::new(6, 800.0); // 2 per view
    c.go_to(2);
    assert!((c.translate_percent() - 100.0).abs() < 1e-6);
    c.go_to(3);
    assert!((c.translate_percent() - 150.0).abs() < 1e-6);
}

#[test]
fn viewport_resize_keeps_current_index_valid() {
    let mut c = CarouselState::new(5, 320.0);
    c.go_to(4); // valid with 1 per view
    c.set_viewport_width(1200.0); // 3 per view -> last index 2
    assert_eq!(c.per_view, 3);
    assert_eq!(c.current, 2);
}

#[test]
fn fewer_slides_than_viewport_pins_to_start() {
    let mut c = CarouselState::new(2, 1200.0); // 3 per view
    assert!(c.at_start() && c.at_end());
    c.next();
    assert_eq!(c.current, 0);
    assert_eq!(c.translate_percent(), 0.0);
}
