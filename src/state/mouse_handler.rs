//! Mouse event handler.
//!
//! Pure functions that transform AppState in response to clicks. The view
//! reports where its clickable controls were drawn; this module maps a
//! click position onto one of them and applies the matching transition.

use crate::state::AppState;
use ratatui::layout::Rect;

/// A control that reacts to a left click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The `Blog` row on the home screen.
    BlogEntry,
    /// The filter toggle: the toggle row button or the inline title button.
    FilterToggle,
}

/// Detect which control (if any) was clicked.
///
/// `targets` are screen rectangles paired with their control. When
/// rectangles overlap, the first one listed wins.
pub fn detect_click(column: u16, row: u16, targets: &[(Rect, ClickTarget)]) -> Option<ClickTarget> {
    targets
        .iter()
        .find(|(area, _)| {
            column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
        })
        .map(|(_, target)| *target)
}

/// Apply the transition for a clicked control.
pub fn handle_click(mut state: AppState, target: ClickTarget) -> AppState {
    match target {
        ClickTarget::BlogEntry => state.open_selected(),
        ClickTarget::FilterToggle => state.toggle_filter(),
    }
    state
}

#[cfg(test)]
#[path = "mouse_handler_tests.rs"]
mod tests;
