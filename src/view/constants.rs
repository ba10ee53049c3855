//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the large navigation title in lines.
///
/// Back link, bold title, and one blank line below it.
pub const LARGE_TITLE_HEIGHT: u16 = 3;

/// Height of the collapsed (inline) navigation title in lines.
pub const INLINE_TITLE_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
///
/// Single line for status text and keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the row holding the filter toggle button.
///
/// The button is bordered, so this is border + label + border.
pub const TOGGLE_ROW_HEIGHT: u16 = 3;

/// Height of the category badge on each post (rounded border + label).
pub const BADGE_HEIGHT: u16 = 3;

/// Maximum number of wrapped summary lines per post.
pub const SUMMARY_MAX_LINES: usize = 3;

/// Blank columns on each side of the blog list content.
pub const CONTENT_MARGIN: u16 = 1;

/// Blank cells on each side of a tag label inside its chip.
pub const CHIP_PADDING: u16 = 1;

/// Width percentage for help overlay popup.
///
/// Percentage of screen width (0-100) for the help overlay modal.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
///
/// Percentage of screen height (0-100) for the help overlay modal.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;
