//! Styling configuration.
//!
//! One [`Theme`] value carries every style the screens use, so colors can be
//! switched off in one place.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors switched on or off explicitly.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Theme =====

/// Every style used by the screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Navigation title ("Blog", "ホーム").
    pub title: Style,
    /// Tappable navigation text (back link, inline filter button).
    pub nav_link: Style,
    /// Section header on the home list.
    pub section_header: Style,
    /// Selected home list row.
    pub selected_row: Style,
    /// Post date and author line.
    pub secondary: Style,
    /// Category badge border.
    pub badge_border: Style,
    /// Category badge label.
    pub badge_text: Style,
    /// Post summary text.
    pub summary: Style,
    /// Tag chip (label and padding).
    pub tag_chip: Style,
    /// Toggle button while selected (filled).
    pub toggle_selected: Style,
    /// Toggle button label while unselected.
    pub toggle_unselected: Style,
    /// Toggle button border while unselected.
    pub toggle_border: Style,
    /// Divider between posts.
    pub divider: Style,
    /// Status bar text.
    pub status: Style,
    /// Status bar filter marker.
    pub status_filtered: Style,
    /// Help overlay key column.
    pub help_key: Style,
    /// Help overlay description column.
    pub help_desc: Style,
    /// Help overlay border.
    pub help_border: Style,
}

impl Theme {
    /// Theme for the given color configuration.
    ///
    /// With colors disabled only modifiers (bold, dim, reversed) remain.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self::colored()
        } else {
            Self::monochrome()
        }
    }

    fn colored() -> Self {
        Self {
            title: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            nav_link: Style::default().fg(Color::Cyan),
            section_header: Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
            selected_row: Style::default().fg(Color::Black).bg(Color::Cyan),
            secondary: Style::default().fg(Color::Gray),
            badge_border: Style::default().fg(Color::DarkGray),
            badge_text: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            summary: Style::default().fg(Color::White),
            tag_chip: Style::default().fg(Color::Gray).bg(Color::Rgb(48, 48, 48)),
            toggle_selected: Style::default().fg(Color::White).bg(Color::DarkGray),
            toggle_unselected: Style::default().fg(Color::Gray),
            toggle_border: Style::default().fg(Color::White),
            divider: Style::default().fg(Color::DarkGray),
            status: Style::default().fg(Color::Gray),
            status_filtered: Style::default().fg(Color::Yellow),
            help_key: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            help_desc: Style::default().fg(Color::White),
            help_border: Style::default().fg(Color::Cyan),
        }
    }

    fn monochrome() -> Self {
        let plain = Style::default();
        Self {
            title: plain.add_modifier(Modifier::BOLD),
            nav_link: plain.add_modifier(Modifier::UNDERLINED),
            section_header: plain.add_modifier(Modifier::BOLD),
            selected_row: plain.add_modifier(Modifier::REVERSED),
            secondary: plain.add_modifier(Modifier::DIM),
            badge_border: plain,
            badge_text: plain.add_modifier(Modifier::BOLD),
            summary: plain,
            tag_chip: plain.add_modifier(Modifier::REVERSED),
            toggle_selected: plain.add_modifier(Modifier::REVERSED),
            toggle_unselected: plain,
            toggle_border: plain,
            divider: plain.add_modifier(Modifier::DIM),
            status: plain,
            status_filtered: plain.add_modifier(Modifier::BOLD),
            help_key: plain.add_modifier(Modifier::BOLD),
            help_desc: plain,
            help_border: plain,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::new(true))
    }
}

// ===== Tests =====
