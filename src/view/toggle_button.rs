//! Two-state button used for the category filter.

use super::text::display_width;
use crate::view::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::{Block, BorderType, Paragraph, Widget};

/// Bordered button while off, filled while on.
#[derive(Debug, Clone)]
pub struct ToggleButton<'a> {
    label: &'a str,
    selected: bool,
    theme: &'a Theme,
}

impl<'a> ToggleButton<'a> {
    /// Button showing `label`, filled when `selected`.
    pub fn new(label: &'a str, selected: bool, theme: &'a Theme) -> Self {
        Self {
            label,
            selected,
            theme,
        }
    }

    /// Columns needed: label, one blank each side, border each side.
    pub fn width(&self) -> u16 {
        display_width(self.label).saturating_add(4)
    }
}

impl Widget for ToggleButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let block = Block::bordered().border_type(BorderType::Rounded);
        let inner = block.inner(area);

        if self.selected {
            // Filled: same footprint as the bordered state, no border glyphs.
            buf.set_style(area, self.theme.toggle_selected);
            for position in area.positions() {
                if !inner.contains(position) {
                    if let Some(cell) = buf.cell_mut(position) {
                        cell.set_symbol(" ");
                    }
                }
            }
        } else {
            block
                .border_style(self.theme.toggle_border)
                .render(area, buf);
        }

        let style = if self.selected {
            self.theme.toggle_selected
        } else {
            self.theme.toggle_unselected
        };
        Paragraph::new(self.label)
            .style(style)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
