//! Blog list screen.
//!
//! The scrollable content (filter toggle row, then every post) is drawn
//! once into an offscreen buffer as tall as the whole list, and the rows
//! from the scroll offset down are copied into the frame. Posts therefore
//! never need to know which part of them is visible.

use super::constants::{
    CONTENT_MARGIN, INLINE_TITLE_HEIGHT, LARGE_TITLE_HEIGHT, TOGGLE_ROW_HEIGHT,
};
use super::post_item::PostItem;
use super::text::display_width;
use super::toggle_button::ToggleButton;
use crate::flow::FlowLayout;
use crate::model::BlogPost;
use crate::state::{AppState, ClickTarget, ListGeometry};
use crate::view::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Widget;
use ratatui::Frame;

/// Navigation title text.
pub const TITLE: &str = "Blog";

/// Back link shown in the title bar.
pub const BACK_LINK: &str = "‹ ホーム";

/// Shown in place of posts when the filter leaves nothing.
pub const EMPTY_MESSAGE: &str = "投稿がありません";

/// Inline title bar button label for the current filter state.
pub fn filter_button_label(filtered: bool, category: &str) -> String {
    if filtered {
        format!("{category}のみ")
    } else {
        "全て".to_string()
    }
}

/// Label of the toggle button row.
pub fn toggle_label(category: &str) -> String {
    format!("≡ {category}")
}

/// Rows taken by the navigation title.
pub fn title_height(collapsed: bool) -> u16 {
    if collapsed {
        INLINE_TITLE_HEIGHT
    } else {
        LARGE_TITLE_HEIGHT
    }
}

fn split(area: Rect, collapsed: bool) -> [Rect; 2] {
    Layout::vertical([
        Constraint::Length(title_height(collapsed)),
        Constraint::Min(0),
    ])
    .areas(area)
}

fn content_width(width: u16) -> u16 {
    width.saturating_sub(2 * CONTENT_MARGIN)
}

fn content_height(posts: &[&BlogPost], theme: &Theme, layout: FlowLayout, width: u16) -> u16 {
    let inner = content_width(width);
    let posts_height = if posts.is_empty() {
        1
    } else {
        posts.iter().fold(0u16, |acc, post| {
            acc.saturating_add(PostItem::new(post, theme, layout).height(inner))
        })
    };
    TOGGLE_ROW_HEIGHT.saturating_add(posts_height)
}

/// Scroll geometry of the list drawn into `area` (title bar included).
pub fn list_geometry(
    state: &AppState,
    theme: &Theme,
    layout: FlowLayout,
    area: Rect,
) -> ListGeometry {
    let posts = state.visible_posts();
    ListGeometry {
        content_height: content_height(&posts, theme, layout, area.width),
        expanded_viewport: area.height.saturating_sub(LARGE_TITLE_HEIGHT),
        collapsed_viewport: area.height.saturating_sub(INLINE_TITLE_HEIGHT),
    }
}

/// Toggle row button, in content coordinates.
fn toggle_button_rect(state: &AppState, theme: &Theme, width: u16) -> Rect {
    let label = toggle_label(state.filter_category());
    let button = ToggleButton::new(&label, state.filtered, theme);
    let button_width = button.width().min(content_width(width));
    let button_x = width.saturating_sub(CONTENT_MARGIN + button_width);
    Rect::new(button_x, 0, button_width, TOGGLE_ROW_HEIGHT)
}

/// Inline title bar button, if it fits beside the back link.
fn inline_button_rect(area: Rect, state: &AppState) -> Option<Rect> {
    if area.is_empty() {
        return None;
    }
    let button_width = display_width(&filter_button_label(
        state.filtered,
        state.filter_category(),
    ));
    let needed = display_width(BACK_LINK)
        .saturating_add(1)
        .saturating_add(button_width);
    (needed <= area.width)
        .then(|| Rect::new(area.right() - button_width, area.y, button_width, 1))
}

/// Clickable controls of the list drawn into `area`, in screen coordinates.
pub fn click_targets(state: &AppState, theme: &Theme, area: Rect) -> Vec<(Rect, ClickTarget)> {
    let collapsed = state.is_title_collapsed();
    let [title_area, list_area] = split(area, collapsed);
    let mut targets = Vec::new();

    if collapsed {
        if let Some(rect) = inline_button_rect(title_area, state) {
            targets.push((rect, ClickTarget::FilterToggle));
        }
    }

    // Only the rows of the toggle button not yet scrolled away are live.
    let button = toggle_button_rect(state, theme, list_area.width);
    let visible_rows = button
        .bottom()
        .saturating_sub(state.scroll_offset)
        .min(list_area.height);
    if visible_rows > 0 && button.width > 0 {
        targets.push((
            Rect::new(
                list_area.x.saturating_add(button.x),
                list_area.y,
                button.width,
                visible_rows,
            ),
            ClickTarget::FilterToggle,
        ));
    }

    targets
}

/// Draw the whole list into a buffer as tall as its content.
fn render_content(state: &AppState, theme: &Theme, layout: FlowLayout, width: u16) -> Buffer {
    let posts = state.visible_posts();
    let height = content_height(&posts, theme, layout, width);
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));

    let label = toggle_label(state.filter_category());
    ToggleButton::new(&label, state.filtered, theme)
        .render(toggle_button_rect(state, theme, width), &mut buf);

    let inner = content_width(width);
    let mut y = TOGGLE_ROW_HEIGHT;
    if posts.is_empty() {
        buf.set_stringn(
            CONTENT_MARGIN,
            y,
            EMPTY_MESSAGE,
            usize::from(inner),
            theme.secondary,
        );
        return buf;
    }

    for post in posts {
        let item = PostItem::new(post, theme, layout);
        let height = item.height(inner);
        item.render(Rect::new(CONTENT_MARGIN, y, inner, height), &mut buf);
        y = y.saturating_add(height);
    }

    buf
}

fn render_large_title(area: Rect, buf: &mut Buffer, theme: &Theme) {
    if area.is_empty() {
        return;
    }
    buf.set_stringn(
        area.x,
        area.y,
        BACK_LINK,
        usize::from(area.width),
        theme.nav_link,
    );
    if area.height > 1 {
        buf.set_stringn(
            area.x.saturating_add(CONTENT_MARGIN),
            area.y + 1,
            TITLE,
            usize::from(area.width.saturating_sub(CONTENT_MARGIN)),
            theme.title,
        );
    }
}

fn render_inline_title(area: Rect, buf: &mut Buffer, state: &AppState, theme: &Theme) {
    if area.is_empty() {
        return;
    }
    let width = usize::from(area.width);
    buf.set_stringn(area.x, area.y, BACK_LINK, width, theme.nav_link);

    let back_width = display_width(BACK_LINK);
    let mut right_limit = area.right();
    if let Some(rect) = inline_button_rect(area, state) {
        let button = filter_button_label(state.filtered, state.filter_category());
        buf.set_string(rect.x, rect.y, button, theme.nav_link);
        right_limit = rect.x;
    }

    let title_width = display_width(TITLE);
    let title_x = area.x + area.width.saturating_sub(title_width) / 2;
    // Centered title only when it clears both ends.
    if title_x > area.x + back_width && title_x + title_width < right_limit {
        buf.set_string(title_x, area.y, TITLE, theme.title);
    }
}

/// Copy rows `offset..` of `content` into `area`.
fn blit_rows(content: &Buffer, offset: u16, area: Rect, buf: &mut Buffer) {
    for row in 0..area.height {
        let src_y = offset.saturating_add(row);
        if src_y >= content.area.height {
            break;
        }
        for col in 0..area.width.min(content.area.width) {
            let dst = (area.x + col, area.y + row);
            if let (Some(src), Some(cell)) = (content.cell((col, src_y)), buf.cell_mut(dst)) {
                *cell = src.clone();
            }
        }
    }
}

/// Render the blog list screen into `area`.
pub fn render_blog_list(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    theme: &Theme,
    layout: FlowLayout,
) {
    let collapsed = state.is_title_collapsed();
    let [title_area, list_area] = split(area, collapsed);

    let content = render_content(state, theme, layout, list_area.width);
    let buf = frame.buffer_mut();
    if collapsed {
        render_inline_title(title_area, buf, state, theme);
    } else {
        render_large_title(title_area, buf, theme);
    }
    blit_rows(&content, state.scroll_offset, list_area, buf);
}

#[cfg(test)]
#[path = "blog_list_tests.rs"]
mod tests;
