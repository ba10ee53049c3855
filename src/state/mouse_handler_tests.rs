//! Tests for mouse event handling.

use super::*;
use crate::model::PRESENTATION_CATEGORY;
use crate::state::Screen;
use crate::test_harness::sample_posts;

fn targets() -> Vec<(Rect, ClickTarget)> {
    vec![
        (Rect::new(40, 3, 18, 3), ClickTarget::FilterToggle),
        (Rect::new(1, 4, 78, 1), ClickTarget::BlogEntry),
    ]
}

#[test]
fn click_inside_rect_hits_its_target() {
    assert_eq!(
        detect_click(45, 4, &targets()),
        Some(ClickTarget::FilterToggle)
    );
    assert_eq!(detect_click(1, 4, &targets()), Some(ClickTarget::BlogEntry));
}

#[test]
fn click_on_right_and_bottom_edge_misses() {
    // Rect::new(40, 3, 18, 3) covers columns 40..58 and rows 3..6.
    assert_eq!(detect_click(58, 3, &[targets()[0]]), None);
    assert_eq!(detect_click(40, 6, &[targets()[0]]), None);
    assert_eq!(
        detect_click(57, 5, &[targets()[0]]),
        Some(ClickTarget::FilterToggle)
    );
}

#[test]
fn first_listed_target_wins_on_overlap() {
    // (45, 4) lies in both rectangles.
    assert_eq!(
        detect_click(45, 4, &targets()),
        Some(ClickTarget::FilterToggle)
    );
}

#[test]
fn click_outside_every_target_misses() {
    assert_eq!(detect_click(0, 0, &targets()), None);
    assert_eq!(detect_click(10, 10, &[]), None);
}

#[test]
fn empty_rect_is_never_hit() {
    let empty = [(Rect::new(5, 5, 0, 0), ClickTarget::BlogEntry)];
    assert_eq!(detect_click(5, 5, &empty), None);
}

#[test]
fn blog_entry_click_opens_list() {
    let state = AppState::new(sample_posts(), PRESENTATION_CATEGORY);
    let state = handle_click(state, ClickTarget::BlogEntry);
    assert_eq!(state.screen, Screen::BlogList);
}

#[test]
fn filter_toggle_click_flips_filter_and_resets_scroll() {
    let mut state = AppState::new(sample_posts(), PRESENTATION_CATEGORY);
    state.screen = Screen::BlogList;
    state.scroll_offset = 12;

    let state = handle_click(state, ClickTarget::FilterToggle);
    assert!(state.filtered);
    assert_eq!(state.scroll_offset, 0);

    let state = handle_click(state, ClickTarget::FilterToggle);
    assert!(!state.filtered);
}
