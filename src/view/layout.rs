//! Screen layout: the current screen above a one-line status bar.

use super::blog_list::render_blog_list;
use super::constants::STATUS_BAR_HEIGHT;
use super::help::render_help_overlay;
use super::home::render_home;
use crate::flow::FlowLayout;
use crate::state::{AppState, Screen};
use crate::view::Theme;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Marker shown in the status bar while the category filter is active.
pub const FILTERED_MARKER: &str = "[filtered]";

/// Area left for the screen once the status bar is taken off `frame_area`.
pub fn body_area(frame_area: Rect) -> Rect {
    let [body, _status] = split(frame_area);
    body
}

fn split(area: Rect) -> [Rect; 2] {
    Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(area)
}

/// Render the current screen, the status bar, and the help overlay if open.
pub fn render_layout(frame: &mut Frame, state: &AppState, theme: &Theme, layout: FlowLayout) {
    let [body, status] = split(frame.area());

    match state.screen {
        Screen::Home => render_home(frame, body, theme),
        Screen::BlogList => render_blog_list(frame, body, state, theme, layout),
    }

    render_status_bar(frame, status, state, theme);

    if state.help_visible {
        render_help_overlay(frame, theme);
    }
}

/// Key hints for the current screen.
fn build_keyboard_hints(screen: Screen) -> &'static str {
    match screen {
        Screen::Home => "Enter: open | ?: help | q: quit",
        Screen::BlogList => "j/k: scroll | f: filter | Esc: back | ?: help | q: quit",
    }
}

/// Render the status bar with hints and the filter marker.
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let mut spans = Vec::new();
    if state.filtered {
        spans.push(Span::styled(FILTERED_MARKER, theme.status_filtered));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(build_keyboard_hints(state.screen), theme.status));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
