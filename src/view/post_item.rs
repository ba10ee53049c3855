//! One blog post in the list.
//!
//! ```text
//! 📅 2023-12-09                    notoroid
//! ╭──────────────╮
//! │ プレゼン資料 │
//! ╰──────────────╯
//! summary, wrapped, at most three lines…
//!  UVC   USB Video Class   iPadOS17
//! ────────────────────────────────────────
//! ```

use super::constants::{BADGE_HEIGHT, SUMMARY_MAX_LINES};
use super::tag_cluster::TagCluster;
use super::text::{display_width, truncate_to_width, wrap_and_clamp};
use crate::flow::FlowLayout;
use crate::model::BlogPost;
use crate::view::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, BorderType, Widget};

/// Widget drawing one post with its tags.
#[derive(Debug, Clone)]
pub struct PostItem<'a> {
    post: &'a BlogPost,
    theme: &'a Theme,
    layout: FlowLayout,
}

impl<'a> PostItem<'a> {
    /// Post widget drawn with `theme`; tags wrap with `layout`.
    pub fn new(post: &'a BlogPost, theme: &'a Theme, layout: FlowLayout) -> Self {
        Self {
            post,
            theme,
            layout,
        }
    }

    /// Rows the post needs at `width`, divider included.
    pub fn height(&self, width: u16) -> u16 {
        let summary = u16::try_from(self.summary_lines(width).len()).unwrap_or(u16::MAX);
        let tags = self.tags().height(width);
        // Header row, badge, summary, tags, divider row.
        1u16.saturating_add(BADGE_HEIGHT)
            .saturating_add(summary)
            .saturating_add(tags)
            .saturating_add(1)
    }

    fn summary_lines(&self, width: u16) -> Vec<String> {
        wrap_and_clamp(&self.post.summary, width, SUMMARY_MAX_LINES)
    }

    fn tags(&self) -> TagCluster<'a> {
        TagCluster::new(&self.post.tags, self.layout).style(self.theme.tag_chip)
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let date = format!("📅 {}", self.post.date_label());
        buf.set_stringn(
            area.x,
            area.y,
            &date,
            usize::from(area.width),
            self.theme.secondary,
        );

        // Author is right-aligned and only drawn when it clears the date.
        let author_width = display_width(&self.post.author);
        let date_width = display_width(&date);
        if date_width.saturating_add(1).saturating_add(author_width) <= area.width {
            let x = area.right() - author_width;
            buf.set_string(x, area.y, &self.post.author, self.theme.secondary);
        }
    }

    fn render_badge(&self, area: Rect, buf: &mut Buffer) {
        let label_room = area.width.saturating_sub(4);
        let label = truncate_to_width(&self.post.category, label_room);
        let badge_width = display_width(&label).saturating_add(4).min(area.width);
        let badge_area = Rect::new(area.x, area.y, badge_width, area.height);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.badge_border);
        let inner = block.inner(badge_area);
        block.render(badge_area, buf);
        if !inner.is_empty() {
            buf.set_stringn(
                inner.x.saturating_add(1),
                inner.y,
                &label,
                usize::from(inner.width.saturating_sub(1)),
                self.theme.badge_text,
            );
        }
    }
}

impl Widget for PostItem<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let mut y = area.y;
        let bottom = area.bottom();
        let row = |y: u16, height: u16| {
            Rect::new(area.x, y, area.width, height.min(bottom.saturating_sub(y)))
        };

        self.render_header(row(y, 1), buf);
        y = y.saturating_add(1);

        if y < bottom {
            self.render_badge(row(y, BADGE_HEIGHT), buf);
        }
        y = y.saturating_add(BADGE_HEIGHT);

        for line in self.summary_lines(area.width) {
            if y >= bottom {
                return;
            }
            buf.set_stringn(
                area.x,
                y,
                &line,
                usize::from(area.width),
                self.theme.summary,
            );
            y += 1;
        }

        let tags = self.tags();
        let tags_height = tags.height(area.width);
        if tags_height > 0 && y < bottom {
            tags.render(row(y, tags_height), buf);
        }
        y = y.saturating_add(tags_height);

        if y < bottom {
            let divider = "─".repeat(usize::from(area.width));
            buf.set_string(area.x, y, divider, self.theme.divider);
        }
    }
}
