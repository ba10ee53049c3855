//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::text::pad_to_width;
use crate::view::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Shortcut groups: category, then (keys, description) rows.
const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("Enter/l/→", "Open Blog"),
            ("Esc/h/←", "Back to ホーム"),
        ],
    ),
    (
        "Scrolling",
        &[
            ("j/↓", "Scroll down"),
            ("k/↑", "Scroll up"),
            ("Ctrl+d/PgDn", "Page down"),
            ("Ctrl+u/PgUp", "Page up"),
            ("g/Home", "Go to top"),
            ("G/End", "Go to bottom"),
        ],
    ),
    ("Filter", &[("f", "Toggle category filter")]),
    (
        "Application",
        &[("?", "Toggle this help"), ("q/Ctrl+C", "Quit")],
    ),
    (
        "Mouse",
        &[("Click", "Press a button or row"), ("Wheel", "Scroll")],
    ),
];

/// Width of the key column, in cells.
const KEY_COLUMN_WIDTH: u16 = 14;

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, theme: &Theme) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);
    if popup_area.is_empty() {
        return;
    }

    // Clear the background for the overlay
    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(theme))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(theme.help_border),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    // Dismissal hint on the bottom border
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        theme.secondary.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate the centered rect for the help overlay.
///
/// Returns a Rect that is centered on the screen with the specified
/// percentage of width and height.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = (u32::from(area.width) * u32::from(percent_x) / 100) as u16;
    let popup_height = (u32::from(area.height) * u32::from(percent_y) / 100) as u16;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Build the help content lines grouped by category.
fn build_help_content(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (index, (category, rows)) in SHORTCUTS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(*category, theme.section_header)));
        for (keys, description) in rows.iter() {
            let keys = format!("  {}", pad_to_width(keys, KEY_COLUMN_WIDTH));
            lines.push(Line::from(vec![
                Span::styled(keys, theme.help_key),
                Span::styled(*description, theme.help_desc),
            ]));
        }
    }

    lines
}
