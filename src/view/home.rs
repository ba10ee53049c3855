//! Home screen: a one-section menu leading to the blog list.

use super::constants::{CONTENT_MARGIN, LARGE_TITLE_HEIGHT};
use crate::state::ClickTarget;
use crate::view::Theme;
use ratatui::layout::Rect;
use ratatui::Frame;

/// Navigation title of the home screen.
pub const TITLE: &str = "ホーム";

/// Header of the only list section.
pub const SECTION_HEADER: &str = "コンテンツ";

/// The only entry, opening the blog list.
pub const BLOG_ENTRY: &str = "Blog";

/// Render the home screen into `area`.
pub fn render_home(frame: &mut Frame, area: Rect, theme: &Theme) {
    if area.is_empty() {
        return;
    }
    let buf = frame.buffer_mut();
    let x = area.x.saturating_add(CONTENT_MARGIN);
    let width = area.width.saturating_sub(CONTENT_MARGIN);

    // Large title sits on the second row, like the blog list.
    let rows = [
        (1, TITLE, theme.title),
        (LARGE_TITLE_HEIGHT, SECTION_HEADER, theme.section_header),
    ];
    for (offset, text, style) in rows {
        if offset < area.height {
            buf.set_stringn(x, area.y + offset, text, usize::from(width), style);
        }
    }

    if let Some(row) = entry_rect(area) {
        buf.set_style(row, theme.selected_row);
        let label = format!(" {BLOG_ENTRY}");
        buf.set_stringn(x, row.y, label, usize::from(width), theme.selected_row);
        if width > 2 {
            buf.set_string(row.right() - 2, row.y, "›", theme.selected_row);
        }
    }
}

/// Row of the `Blog` entry, if the area is tall enough to show it.
fn entry_rect(area: Rect) -> Option<Rect> {
    let entry_row = LARGE_TITLE_HEIGHT + 1;
    (entry_row < area.height && area.width > CONTENT_MARGIN).then(|| {
        Rect::new(
            area.x + CONTENT_MARGIN,
            area.y + entry_row,
            area.width - CONTENT_MARGIN,
            1,
        )
    })
}

/// Clickable controls of the home screen drawn into `area`.
pub fn click_targets(area: Rect) -> Vec<(Rect, ClickTarget)> {
    entry_rect(area)
        .map(|rect| (rect, ClickTarget::BlogEntry))
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_harness::{buffer_to_string, screen_text};
    use ratatui::backend::TestBackend;
    use ratatui::style::Modifier;
    use ratatui::Terminal;

    fn render(width: u16, height: u16, theme: &Theme) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| render_home(frame, frame.area(), theme))
            .unwrap();
        terminal
    }

    #[test]
    fn shows_title_section_and_entry() {
        let terminal = render(24, 6, &Theme::default());

        let text = screen_text(terminal.backend().buffer());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "",
                " ホーム",
                "",
                " コンテンツ",
                "  Blog                ›",
            ]
        );
    }

    #[test]
    fn entry_row_is_highlighted() {
        let theme = Theme::with_color_config(crate::view::ColorConfig::new(false));
        let terminal = render(24, 6, &theme);
        let buf = terminal.backend().buffer();

        assert!(buf[(3, 4)].modifier.contains(Modifier::REVERSED));
        assert!(!buf[(3, 1)].modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn short_terminal_drops_rows_without_panicking() {
        let terminal = render(24, 2, &Theme::default());
        let text = buffer_to_string(terminal.backend().buffer());

        assert!(text.contains("ホーム"));
        assert!(!text.contains("Blog"));
    }

    #[test]
    fn blog_entry_row_is_the_only_click_target() {
        let area = Rect::new(0, 0, 24, 6);
        assert_eq!(
            click_targets(area),
            vec![(Rect::new(1, 4, 23, 1), ClickTarget::BlogEntry)]
        );
    }

    #[test]
    fn hidden_entry_row_is_not_clickable() {
        assert!(click_targets(Rect::new(0, 0, 24, 2)).is_empty());
    }
}
