//! Domain-level keyboard actions independent of key bindings.

/// User intent, decoupled from concrete keys.
///
/// The mapping from `crossterm::event::KeyEvent` to `KeyAction` is handled
/// by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling
    /// Scroll the list up by one row. Default: k/↑
    ScrollUp,
    /// Scroll the list down by one row. Default: j/↓
    ScrollDown,
    /// Scroll up by a page. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down by a page. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the top of the list. Default: g/Home
    ScrollToTop,
    /// Jump to the bottom of the list. Default: G/End
    ScrollToBottom,

    // Navigation
    /// Open the selected entry on the home screen. Default: Enter/l/→
    Open,
    /// Return to the previous screen. Default: Esc/Backspace/h/←
    Back,

    // List
    /// Toggle the category filter. Default: f
    ToggleFilter,

    // Application
    /// Show or hide the keyboard shortcuts overlay. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Whether this action moves the list viewport.
    pub fn is_scroll(self) -> bool {
        matches!(
            self,
            KeyAction::ScrollUp
                | KeyAction::ScrollDown
                | KeyAction::PageUp
                | KeyAction::PageDown
                | KeyAction::ScrollToTop
                | KeyAction::ScrollToBottom
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_actions_are_scroll() {
        for action in [
            KeyAction::ScrollUp,
            KeyAction::ScrollDown,
            KeyAction::PageUp,
            KeyAction::PageDown,
            KeyAction::ScrollToTop,
            KeyAction::ScrollToBottom,
        ] {
            assert!(action.is_scroll(), "{:?} should be a scroll action", action);
        }
    }

    #[test]
    fn non_scroll_actions_are_not_scroll() {
        for action in [
            KeyAction::Open,
            KeyAction::Back,
            KeyAction::ToggleFilter,
            KeyAction::Help,
            KeyAction::Quit,
        ] {
            assert!(!action.is_scroll(), "{:?} should not scroll", action);
        }
    }
}
