//! Terminal text measurement and wrapping.
//!
//! Wrapping runs the flow engine over single glyphs with no spacing: a glyph
//! is just a one-row item as wide as its display width, so line breaking
//! follows the same greedy rule as the tag chips.

use crate::flow::{compute_layout, Measurable, Size};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of `text` in terminal cells, saturating at `u16::MAX`.
pub fn display_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// Convert a layout coordinate to whole cells.
///
/// Negative and non-finite values map to 0.
pub fn to_cells(value: f64) -> u16 {
    if value.is_finite() && value > 0.0 {
        value.round().min(f64::from(u16::MAX)) as u16
    } else {
        0
    }
}

#[derive(Debug, Clone, Copy)]
struct Glyph(char);

impl Measurable for Glyph {
    fn natural_size(&self) -> Size {
        let width = self.0.width().unwrap_or(0);
        Size::new(width as f64, 1.0)
    }
}

/// Wrap `text` into lines at most `width` cells wide.
///
/// Breaks anywhere between glyphs, which suits Japanese text. Explicit line
/// breaks are kept. A glyph wider than `width` sits alone on its line.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let glyphs: Vec<Glyph> = paragraph.chars().map(Glyph).collect();
        if glyphs.is_empty() {
            lines.push(String::new());
            continue;
        }

        let result = compute_layout(&glyphs, f64::from(width), 0.0);
        for range in result.lines() {
            lines.push(glyphs[range].iter().map(|g| g.0).collect());
        }
    }

    lines
}

/// Shorten `text` to fit `width` cells, ending in `…` when cut.
pub fn truncate_to_width(text: &str, width: u16) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = usize::from(width - 1);
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Pad `text` with blanks on the right to `width` cells.
///
/// Text already that wide or wider is returned unchanged.
pub fn pad_to_width(text: &str, width: u16) -> String {
    let fill = width.saturating_sub(display_width(text));
    format!("{text}{}", " ".repeat(usize::from(fill)))
}

/// Wrap `text` and keep at most `max_lines` lines.
///
/// When lines are dropped, the last kept line ends in `…`.
pub fn wrap_and_clamp(text: &str, width: u16, max_lines: usize) -> Vec<String> {
    let mut lines = wrap_text(text, width);
    if lines.len() <= max_lines {
        return lines;
    }

    lines.truncate(max_lines);
    if let Some(last) = lines.last_mut() {
        // Force room for the ellipsis even when the line is exactly full.
        let shortened = truncate_to_width(&format!("{last}…"), width);
        *last = shortened;
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_counts_wide_glyphs_twice() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("プレゼン"), 8);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn to_cells_rounds_and_rejects_bad_values() {
        assert_eq!(to_cells(3.0), 3);
        assert_eq!(to_cells(2.6), 3);
        assert_eq!(to_cells(-4.0), 0);
        assert_eq!(to_cells(f64::NAN), 0);
        assert_eq!(to_cells(f64::INFINITY), 0);
        assert_eq!(to_cells(1e9), u16::MAX);
    }

    #[test]
    fn wrap_text_breaks_ascii_at_width() {
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn wrap_text_never_splits_a_wide_glyph() {
        // 5 cells of width: "アイ" fills 4, "ウ" would need 6.
        assert_eq!(wrap_text("アイウ", 5), vec!["アイ", "ウ"]);
    }

    #[test]
    fn wrap_text_keeps_explicit_breaks() {
        assert_eq!(wrap_text("ab\n\ncd", 10), vec!["ab", "", "cd"]);
    }

    #[test]
    fn wrap_text_zero_width_puts_each_glyph_alone() {
        assert_eq!(wrap_text("ab", 0), vec!["a", "b"]);
    }

    #[test]
    fn wrap_text_empty_input_is_empty() {
        assert!(wrap_text("", 10).is_empty());
    }

    #[test]
    fn truncate_to_width_adds_ellipsis_only_when_cut() {
        assert_eq!(truncate_to_width("hello", 5), "hello");
        assert_eq!(truncate_to_width("hello", 4), "hel…");
        assert_eq!(truncate_to_width("hello", 0), "");
    }

    #[test]
    fn truncate_to_width_does_not_overflow_with_wide_glyphs() {
        let cut = truncate_to_width("プレゼン資料", 6);
        assert_eq!(cut, "プレ…");
        assert!(display_width(&cut) <= 6);
    }

    #[test]
    fn pad_to_width_counts_cells_not_chars() {
        assert_eq!(pad_to_width("j/↓", 6), "j/↓   ");
        // Two wide glyphs already fill four cells.
        assert_eq!(pad_to_width("全て", 6), "全て  ");
        assert_eq!(display_width(&pad_to_width("全て", 6)), 6);
        assert_eq!(pad_to_width("toolong", 3), "toolong");
    }

    #[test]
    fn wrap_and_clamp_limits_line_count() {
        let lines = wrap_and_clamp("aaaabbbbccccdddd", 4, 3);
        assert_eq!(lines, vec!["aaaa", "bbbb", "ccc…"]);
    }

    #[test]
    fn wrap_and_clamp_leaves_short_text_alone() {
        assert_eq!(wrap_and_clamp("abc", 10, 3), vec!["abc"]);
    }
}
