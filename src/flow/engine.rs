//! Greedy line-packing layout.
//!
//! # Algorithm
//!
//! A cursor walks the items in order. Each item is placed at the cursor;
//! the cursor then advances by the item's width plus `spacing`. Before
//! placing, if the item would cross `max_width` and it is not the first
//! item on its line, the cursor moves to the start of a new line located
//! `line_height + spacing` below the current one.
//!
//! The first item on a line never wraps. An item wider than `max_width`
//! therefore sits alone on its line and overflows, instead of wrapping
//! forever.
//!
//! # Malformed numbers
//!
//! - Non-finite or negative item dimensions are treated as `0`.
//! - NaN or infinite `spacing` is treated as `0`; negative spacing is used as given.
//! - NaN or `-inf` `max_width` is treated as `0`.
//! - `+inf` `max_width` never wraps; the reported width is then the
//!   content extent instead of the (unbounded) proposal.

use super::geometry::{Measurable, Point, Size};
use std::ops::Range;
use thiserror::Error;
use tracing::trace;

/// Default gap between chips, horizontally and vertically.
pub const DEFAULT_SPACING: f64 = 8.0;

/// Width used when the caller proposes no width at all.
const UNSPECIFIED_DIMENSION: f64 = 10.0;

/// Errors raised when building a [`FlowLayout`] from untrusted values.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum LayoutError {
    /// Spacing is negative, NaN or infinite.
    #[error("invalid flow spacing {0}: must be finite and non-negative")]
    InvalidSpacing(f64),
}

/// Output of one layout pass.
///
/// `positions[i]` is the top-left corner of `items[i]`, relative to the
/// container origin.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlowResult {
    /// Size the container needs to show every item.
    pub size: Size,
    /// One position per input item, in input order.
    pub positions: Vec<Point>,
    /// Index of the first item of every line.
    line_starts: Vec<usize>,
}

impl FlowResult {
    /// Number of lines used. Zero when there were no items.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Item index ranges, one per line, top to bottom.
    pub fn lines(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        let total = self.positions.len();
        self.line_starts.iter().enumerate().map(move |(i, &start)| {
            let end = self.line_starts.get(i + 1).copied().unwrap_or(total);
            start..end
        })
    }
}

/// Lay out `items` into lines no wider than `max_width`.
///
/// Runs in one pass, O(n) in the number of items, and allocates only the
/// result. See the module docs for the exact rules.
pub fn compute_layout<I>(items: I, max_width: f64, spacing: f64) -> FlowResult
where
    I: IntoIterator,
    I::Item: Measurable,
{
    let max_width = if max_width.is_nan() || max_width == f64::NEG_INFINITY {
        0.0
    } else {
        max_width
    };
    let spacing = finite_or_zero(spacing);

    let mut current_x = 0.0_f64;
    let mut current_y = 0.0_f64;
    let mut line_height = 0.0_f64;
    let mut content_width = 0.0_f64;

    let mut positions = Vec::new();
    let mut line_starts = Vec::new();

    for (index, item) in items.into_iter().enumerate() {
        let size = item.natural_size();
        let width = dimension(size.width);
        let height = dimension(size.height);

        if current_x + width > max_width && current_x > 0.0 {
            current_x = 0.0;
            current_y += line_height + spacing;
            line_height = 0.0;
            line_starts.push(index);
        } else if index == 0 {
            line_starts.push(0);
        }

        positions.push(Point::new(current_x, current_y));
        line_height = line_height.max(height);
        content_width = content_width.max(current_x + width);
        current_x += width + spacing;
    }

    let width = if max_width.is_finite() {
        max_width
    } else {
        content_width
    };

    trace!(
        items = positions.len(),
        lines = line_starts.len(),
        max_width,
        spacing,
        "flow layout computed"
    );

    FlowResult {
        size: Size::new(width, current_y + line_height),
        positions,
        line_starts,
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

fn dimension(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// A flow container with a fixed spacing.
///
/// Offers the classic two-step container protocol (`size_that_fits`, then
/// `place_in`) on top of [`compute_layout`]. Both steps run the same pass,
/// so for the same width they always agree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowLayout {
    spacing: f64,
}

impl Default for FlowLayout {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
        }
    }
}

impl FlowLayout {
    /// Create a layout with the given spacing, unchecked.
    pub const fn new(spacing: f64) -> Self {
        Self { spacing }
    }

    /// Create a layout, rejecting spacing that is negative or not finite.
    pub fn try_new(spacing: f64) -> Result<Self, LayoutError> {
        if spacing.is_finite() && spacing >= 0.0 {
            Ok(Self { spacing })
        } else {
            Err(LayoutError::InvalidSpacing(spacing))
        }
    }

    /// Gap between items.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Full layout pass for a container `max_width` wide.
    pub fn arrange<I>(&self, items: I, max_width: f64) -> FlowResult
    where
        I: IntoIterator,
        I::Item: Measurable,
    {
        compute_layout(items, max_width, self.spacing)
    }

    /// Size the container needs for a proposed width.
    ///
    /// `None` stands for an unspecified proposal and is replaced by a
    /// small default width, so items wrap rather than stretch forever.
    pub fn size_that_fits<I>(&self, items: I, proposal: Option<f64>) -> Size
    where
        I: IntoIterator,
        I::Item: Measurable,
    {
        let width = proposal.unwrap_or(UNSPECIFIED_DIMENSION);
        self.arrange(items, width).size
    }

    /// Absolute item positions for a container at `origin`, `width` wide.
    pub fn place_in<I>(&self, items: I, origin: Point, width: f64) -> Vec<Point>
    where
        I: IntoIterator,
        I::Item: Measurable,
    {
        self.arrange(items, width)
            .positions
            .into_iter()
            .map(|p| p.offset_by(origin))
            .collect()
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
