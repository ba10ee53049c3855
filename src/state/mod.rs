//! UI state machine (pure).
//!
//! All state transitions are testable without a terminal.

pub mod app_state;
pub mod mouse_handler;
pub mod scroll_handler;

// Re-export for convenience
pub use app_state::{AppState, Screen};
pub use mouse_handler::{detect_click, handle_click, ClickTarget};
pub use scroll_handler::{clamp_scroll, handle_scroll_action, ListGeometry};
