//! Test harness for TUI testing
//!
//! Wraps `TuiApp<TestBackend>` with convenient methods for simulating user
//! interactions and reading back what the screen shows.

use crate::config::KeyBindings;
use crate::flow::FlowLayout;
use crate::model::{BlogPost, SampleSource, PRESENTATION_CATEGORY};
use crate::state::AppState;
use crate::view::{Theme, TuiApp, TuiError};
use chrono::{NaiveDate, NaiveDateTime};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use unicode_width::UnicodeWidthStr;

/// Convert a ratatui buffer to a string, one `\n`-terminated line per row.
///
/// Cells hidden behind a double-width glyph are skipped, so Japanese text
/// reads back the way it was written.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();

    for y in area.top()..area.bottom() {
        let mut x = area.left();
        while x < area.right() {
            let symbol = buffer[(x, y)].symbol();
            out.push_str(symbol);
            let width = u16::try_from(symbol.width()).unwrap_or(1).max(1);
            x = x.saturating_add(width);
        }
        out.push('\n');
    }

    out
}

/// Screen text with trailing blanks removed from every line and from the end.
///
/// Used for inline snapshots, which cannot carry trailing whitespace.
pub fn screen_text(buffer: &Buffer) -> String {
    buffer_to_string(buffer)
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim_end()
        .to_string()
}

/// Fixed "now" for the sample data, so relative dates are stable.
pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 10, 19)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .expect("valid fixed date")
}

/// The built-in sample posts anchored at [`fixed_now`].
pub fn sample_posts() -> Vec<BlogPost> {
    SampleSource::new(fixed_now()).posts()
}

/// Drives a `TuiApp` on a `TestBackend`.
pub struct AppHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl AppHarness {
    /// Sample posts on an 80x24 terminal with tag spacing 1.
    pub fn with_sample_posts() -> Result<Self, TuiError> {
        Self::with_posts(sample_posts(), 80, 24)
    }

    /// Custom posts and terminal size.
    pub fn with_posts(posts: Vec<BlogPost>, width: u16, height: u16) -> Result<Self, TuiError> {
        Self::with_state(AppState::new(posts, PRESENTATION_CATEGORY), width, height)
    }

    /// Custom state and terminal size.
    pub fn with_state(app_state: AppState, width: u16, height: u16) -> Result<Self, TuiError> {
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        let app = TuiApp::new_for_test(
            terminal,
            app_state,
            KeyBindings::default(),
            Theme::default(),
            FlowLayout::new(1.0),
        );
        Ok(Self { app, running: true })
    }

    /// Send a single key. Returns `true` once the app has quit.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send a key with modifiers. Returns `true` once the app has quit.
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true;
        }
        if self.app.handle_key_test(KeyEvent::new(key, mods)) {
            self.running = false;
        }
        !self.running
    }

    /// Send several keys in order, stopping if the app quits.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    /// Send a mouse event at a screen position.
    pub fn send_mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) {
        if !self.running {
            return;
        }
        self.app.handle_mouse_test(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    /// Left-click a screen position.
    pub fn click(&mut self, column: u16, row: u16) {
        self.send_mouse(MouseEventKind::Down(MouseButton::Left), column, row);
    }

    /// Current application state.
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Whether the app is still running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render a frame and return the screen as text.
    pub fn render_to_string(&mut self) -> String {
        self.app.render_test().expect("render should succeed");
        buffer_to_string(self.app.terminal().backend().buffer())
    }
}
