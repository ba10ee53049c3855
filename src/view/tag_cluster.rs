//! Tag chips wrapped into lines by the flow layout.

use super::constants::CHIP_PADDING;
use super::text::{display_width, to_cells};
use crate::flow::{FlowLayout, Measurable, Point, Size};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

/// One tag label with its padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagChip<'a> {
    label: &'a str,
}

impl<'a> TagChip<'a> {
    /// Chip for one tag label.
    pub fn new(label: &'a str) -> Self {
        Self { label }
    }

    /// Chip text as drawn: the label with one blank cell on each side.
    pub fn text(&self) -> String {
        let pad = " ".repeat(usize::from(CHIP_PADDING));
        format!("{pad}{}{pad}", self.label)
    }
}

impl Measurable for TagChip<'_> {
    fn natural_size(&self) -> Size {
        let width = display_width(self.label).saturating_add(2 * CHIP_PADDING);
        Size::new(f64::from(width), 1.0)
    }
}

/// Widget drawing a post's tags as wrapped chips.
#[derive(Debug, Clone)]
pub struct TagCluster<'a> {
    chips: Vec<TagChip<'a>>,
    layout: FlowLayout,
    style: Style,
}

impl<'a> TagCluster<'a> {
    /// One chip per tag, in order, with the default style.
    pub fn new(tags: &'a [String], layout: FlowLayout) -> Self {
        Self {
            chips: tags.iter().map(|t| TagChip::new(t)).collect(),
            layout,
            style: Style::default(),
        }
    }

    /// Style applied to every chip.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Rows needed to draw every chip at `width`.
    pub fn height(&self, width: u16) -> u16 {
        if self.chips.is_empty() {
            return 0;
        }
        let size = self
            .layout
            .size_that_fits(&self.chips, Some(f64::from(width)));
        to_cells(size.height)
    }
}

impl Widget for TagCluster<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let positions = self
            .layout
            .place_in(&self.chips, Point::ORIGIN, f64::from(area.width));

        for (chip, position) in self.chips.iter().zip(positions) {
            let x = area.x.saturating_add(to_cells(position.x));
            let y = area.y.saturating_add(to_cells(position.y));
            if x >= area.right() || y >= area.bottom() {
                continue;
            }
            // An oversized chip starts its own line and is cut at the edge.
            let room = usize::from(area.right() - x);
            buf.set_stringn(x, y, chip.text(), room, self.style);
        }
    }
}
