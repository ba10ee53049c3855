//! Vertical scrolling keyboard action handler.
//!
//! Pure functions that transform AppState in response to scroll actions.
//!
//! The list viewport changes height with the navigation title: it is
//! shorter while the large title shows and one row taller once the title
//! collapses. [`ListGeometry::max_offset`] accounts for that so the bottom
//! of the list is reachable in either state.

use crate::model::KeyAction;
use crate::state::{AppState, Screen};

/// Geometry of the scrollable list for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListGeometry {
    /// Total rows of list content.
    pub content_height: u16,
    /// Visible rows while the large title is shown.
    pub expanded_viewport: u16,
    /// Visible rows once the title has collapsed inline.
    pub collapsed_viewport: u16,
}

impl ListGeometry {
    /// Visible rows at `offset`.
    pub fn viewport_at(&self, offset: u16, collapse_threshold: u16) -> u16 {
        if offset >= collapse_threshold {
            self.collapsed_viewport
        } else {
            self.expanded_viewport
        }
    }

    /// Largest useful scroll offset.
    ///
    /// When reaching the end requires scrolling past the collapse threshold,
    /// the collapsed viewport decides; the threshold itself stays reachable
    /// so the title can always collapse once the list overflows.
    pub fn max_offset(&self, collapse_threshold: u16) -> u16 {
        let expanded_max = self.content_height.saturating_sub(self.expanded_viewport);
        if expanded_max < collapse_threshold {
            return expanded_max;
        }
        let collapsed_max = self.content_height.saturating_sub(self.collapsed_viewport);
        collapsed_max.max(collapse_threshold)
    }
}

/// Handle a scroll keyboard action on the blog list.
///
/// Non-scroll actions and other screens return the state unchanged.
pub fn handle_scroll_action(
    mut state: AppState,
    action: KeyAction,
    geometry: ListGeometry,
) -> AppState {
    if state.screen != Screen::BlogList {
        return state;
    }

    let threshold = state.collapse_threshold;
    let max = geometry.max_offset(threshold);
    let current = state.scroll_offset.min(max);
    let page = geometry
        .viewport_at(current, threshold)
        .saturating_sub(1)
        .max(1);

    state.scroll_offset = match action {
        KeyAction::ScrollUp => current.saturating_sub(1),
        KeyAction::ScrollDown => current.saturating_add(1).min(max),
        KeyAction::PageUp => current.saturating_sub(page),
        KeyAction::PageDown => current.saturating_add(page).min(max),
        KeyAction::ScrollToTop => 0,
        KeyAction::ScrollToBottom => max,
        _ => return state,
    };

    state
}

/// Pull the scroll offset back into range after content or size changes.
pub fn clamp_scroll(state: &mut AppState, geometry: ListGeometry) {
    let max = geometry.max_offset(state.collapse_threshold);
    if state.scroll_offset > max {
        state.scroll_offset = max;
    }
}

#[cfg(test)]
#[path = "scroll_handler_tests.rs"]
mod tests;
