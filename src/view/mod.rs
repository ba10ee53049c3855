//! TUI rendering and terminal management (impure shell)

pub mod blog_list;
pub mod constants;
mod help;
pub mod home;
mod layout;
pub mod post_item;
mod styles;
pub mod tag_cluster;
pub mod text;
pub mod toggle_button;

pub use help::render_help_overlay;
pub use layout::{body_area, render_layout, FILTERED_MARKER};
pub use post_item::PostItem;
pub use styles::{ColorConfig, Theme};
pub use tag_cluster::{TagChip, TagCluster};
pub use toggle_button::ToggleButton;

use crate::config::KeyBindings;
use crate::flow::FlowLayout;
use crate::model::{AppError, KeyAction};
use crate::state::{
    clamp_scroll, detect_click, handle_click, handle_scroll_action, AppState, ClickTarget,
    ListGeometry, Screen,
};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Post provider error
    #[error("Source error: {0}")]
    Source(#[from] crate::model::SourceError),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    theme: Theme,
    layout: FlowLayout,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(app_state: AppState, args: &CliArgs) -> Result<Self, TuiError> {
        let layout = FlowLayout::try_new(f64::from(args.tag_spacing)).map_err(AppError::from)?;

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            theme: Theme::with_color_config(args.color),
            layout,
        })
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Blocks on terminal events and
    /// redraws only after a key press, a mouse event or a resize.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Mouse(mouse) => {
                    self.handle_mouse(mouse);
                    self.draw()?;
                }
                Event::Resize(width, height) => {
                    debug!("Handling resize to {}x{}", width, height);
                    self.draw()?;
                }
                _ => {}
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        // Help overlay swallows everything but closing it and quitting
        if self.app_state.help_visible {
            match action {
                KeyAction::Help | KeyAction::Back => self.app_state.help_visible = false,
                KeyAction::Quit => return true,
                _ => {}
            }
            return false;
        }

        debug!(?action, screen = ?self.app_state.screen, "Key action");

        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.app_state.toggle_help(),
            KeyAction::Open => {
                self.app_state.open_selected();
                debug!(screen = ?self.app_state.screen, "Screen changed");
            }
            KeyAction::Back => {
                if self.app_state.go_back() {
                    debug!(screen = ?self.app_state.screen, "Screen changed");
                }
            }
            KeyAction::ToggleFilter => {
                if self.app_state.screen == Screen::BlogList {
                    self.app_state.toggle_filter();
                    debug!(
                        filtered = self.app_state.filtered,
                        visible = self.app_state.visible_posts().len(),
                        "Filter toggled"
                    );
                }
            }
            KeyAction::ScrollUp
            | KeyAction::ScrollDown
            | KeyAction::PageUp
            | KeyAction::PageDown
            | KeyAction::ScrollToTop
            | KeyAction::ScrollToBottom => self.scroll(action),
        }

        false
    }

    /// Handle a single mouse event
    ///
    /// Wheel scrolls the list; a left click presses whatever control is
    /// under the pointer. While help is open, a click only closes it.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if self.app_state.help_visible => {
                self.app_state.help_visible = false;
            }
            _ if self.app_state.help_visible => {}
            MouseEventKind::ScrollUp => self.scroll(KeyAction::ScrollUp),
            MouseEventKind::ScrollDown => self.scroll(KeyAction::ScrollDown),
            MouseEventKind::Down(MouseButton::Left) => {
                let targets = self.click_targets();
                if let Some(target) = detect_click(mouse.column, mouse.row, &targets) {
                    debug!(?target, column = mouse.column, row = mouse.row, "Click");
                    self.app_state = handle_click(self.app_state.clone(), target);
                }
            }
            _ => {}
        }
    }

    fn scroll(&mut self, action: KeyAction) {
        let geometry = self.list_geometry();
        self.app_state = handle_scroll_action(self.app_state.clone(), action, geometry);
    }

    /// Clickable controls of the current screen, in frame coordinates.
    fn click_targets(&self) -> Vec<(Rect, ClickTarget)> {
        let body = body_area(self.frame_area());
        match self.app_state.screen {
            Screen::Home => home::click_targets(body),
            Screen::BlogList => blog_list::click_targets(&self.app_state, &self.theme, body),
        }
    }

    /// Current frame area, falling back to 80x24 if the backend cannot tell.
    fn frame_area(&self) -> Rect {
        match self.terminal.size() {
            Ok(size) => Rect::new(0, 0, size.width, size.height),
            Err(_) => Rect::new(0, 0, 80, 24),
        }
    }

    /// Scroll geometry of the blog list for the current terminal size.
    fn list_geometry(&self) -> ListGeometry {
        let body = body_area(self.frame_area());
        blog_list::list_geometry(&self.app_state, &self.theme, self.layout, body)
    }

    /// Render the current frame
    ///
    /// Pulls the scroll offset back into range first: the terminal may have
    /// grown, or the filter may have shortened the list.
    fn draw(&mut self) -> Result<(), TuiError> {
        if self.app_state.screen == Screen::BlogList {
            let geometry = self.list_geometry();
            clamp_scroll(&mut self.app_state, geometry);
        }

        let state = &self.app_state;
        let theme = &self.theme;
        let layout = self.layout;
        self.terminal.draw(|frame| {
            render_layout(frame, state, theme, layout);
        })?;

        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
#[allow(dead_code)] // Not every helper is used by every test module
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without touching the real terminal.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
        theme: Theme,
        layout: FlowLayout,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings,
            theme,
            layout,
        }
    }

    /// Get reference to app state (test-only accessor)
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle a single keyboard event (test-only accessor)
    ///
    /// Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Handle a single mouse event (test-only accessor)
    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) {
        self.handle_mouse(mouse)
    }

    /// Render a frame (test-only accessor)
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Get reference to terminal (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Settings for TUI initialization
///
/// Carries the resolved configuration values that affect rendering. Parsing
/// and precedence handling happen in main.rs; this struct only bridges the
/// result into the impure shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliArgs {
    /// Gap between tag chips, in cells.
    pub tag_spacing: u16,

    /// Whether colors are enabled.
    pub color: ColorConfig,
}

impl CliArgs {
    /// Create new CliArgs
    pub fn new(tag_spacing: u16, color: ColorConfig) -> Self {
        Self { tag_spacing, color }
    }
}

/// Initialize and run the TUI application with a prepared state.
///
/// This is the main entry point for the TUI. It handles terminal setup, runs
/// the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_state(app_state: AppState, args: CliArgs) -> Result<(), TuiError> {
    let mut app = TuiApp::new(app_state, &args)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(DisableMouseCapture)?;
    stdout.execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_app_tests.rs"]
mod tests;
