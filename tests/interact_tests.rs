// Host-side tests for click/drag gesture classification.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod interact {
    include!("../src/core/interact.rs");
}

use glam::Vec2;
use interact::*;

#[test]
fn short_release_over_hovered_marker_shows_info() {
    let mut tracker = GestureTracker::default();
    tracker.pointer_down(Vec2::new(100.0, 100.0));
    let action = tracker.pointer_up(Vec2::new(102.0, 101.0), false, Some(3));
    assert_eq!(action, ClickAction::ShowInfo(3));
}

#[test]
fn release_exactly_at_threshold_still_counts_as_click() {
    // The threshold must be *exceeded* to become a drag
    let mut tracker = GestureTracker::default();
    tracker.pointer_down(Vec2::new(0.0, 0.0));
    let action = tracker.pointer_up(Vec2::new(CLICK_DRAG_THRESHOLD_PX, 0.0), false, Some(0));
    assert_eq!(action, ClickAction::ShowInfo(0));
}

#[test]
fn long_release_is_a_drag_regardless_of_hover() {
    let mut tracker = GestureTracker::default();
    tracker.pointer_down(Vec2::new(50.0, 50.0));
    let action = tracker.pointer_up(Vec2::new(50.0, 56.0), false, Some(7));
    assert_eq!(action, ClickAction::None);

    tracker.pointer_down(Vec2::new(50.0, 50.0));
    let action = tracker.pointer_up(Vec2::new(200.0, 300.0), false, None);
    assert_eq!(action, ClickAction::None);
}

#[test]
fn diagonal_distance_is_euclidean() {
    // 4 px right and 4 px down is ~5.66 px of travel: a drag
    let mut tracker = GestureTracker::default();
    tracker.pointer_down(Vec2::new(0.0, 0.0));
    let action = tracker.pointer_up(Vec2::new(4.0, 4.0), false, Some(1));
    assert_eq!(action, ClickAction::None);

    // 3 px right and 3 px down is ~4.24 px: a click
    tracker.pointer_down(Vec2::new(0.0, 0.0));
    let action = tracker.pointer_up(Vec2::new(3.0, 3.0), false, Some(1));
    assert_eq!(action, ClickAction::ShowInfo(1));
}

#[test]
fn release_over_panel_is_ignored() {
    let mut tracker = GestureTracker::default();
    tracker.pointer_down(Vec2::new(10.0, 10.0));
    let action = tracker.pointer_up(Vec2::new(10.0, 10.0), true, Some(2));
    assert_eq!(action, ClickAction::None);
}

#[test]
fn short_release_over_empty_space_hides_info() {
    let mut tracker = GestureTracker::default();
    tracker.pointer_down(Vec2::new(10.0, 10.0));
    let action = tracker.pointer_up(Vec2::new(11.0, 10.0), false, None);
    assert_eq!(action, ClickAction::HideInfo);
}

#[test]
fn release_without_press_does_nothing() {
    let mut tracker = GestureTracker::default();
    let action = tracker.pointer_up(Vec2::new(10.0, 10.0), false, Some(0));
    assert_eq!(action, ClickAction::None);
}

#[test]
fn gesture_is_consumed_by_release() {
    let mut tracker = GestureTracker::default();
    tracker.pointer_down(Vec2::new(10.0, 10.0));
    assert!(tracker.is_pressed());
    let _ = tracker.pointer_up(Vec2::new(10.0, 10.0), false, None);
    assert!(!tracker.is_pressed());
    // A stray second release has no recorded start to compare against
    let action = tracker.pointer_up(Vec2::new(10.0, 10.0), false, Some(4));
    assert_eq!(action, ClickAction::None);
}

#[test]
fn new_press_replaces_the_previous_start() {
    let mut tracker = GestureTracker::default();
    tracker.pointer_down(Vec2::new(0.0, 0.0));
    tracker.pointer_down(Vec2::new(500.0, 500.0));
    let action = tracker.pointer_up(Vec2::new(501.0, 500.0), false, Some(5));
    assert_eq!(action, ClickAction::ShowInfo(5));
}
