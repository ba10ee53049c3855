//! Property-based tests for the flow layout engine.
//!
//! Properties Under Test:
//! - Every item gets exactly one position
//! - Items on one line never overlap and keep the spacing between them
//! - Only the first item of a line may cross `max_width`
//! - Lines stack downwards without overlapping
//! - The reported size covers exactly the used lines

use crate::flow::{compute_layout, Size};
use proptest::prelude::*;
use std::ops::Range;

const EPS: f64 = 1e-9;

// ===== Arbitrary Strategies =====

/// Items with finite, non-negative sizes; zero sizes included.
fn arb_items() -> impl Strategy<Value = Vec<Size>> {
    prop::collection::vec((0.0f64..60.0, 0.0f64..20.0), 0..40)
        .prop_map(|dims| dims.into_iter().map(|(w, h)| Size::new(w, h)).collect())
}

/// Items at least one unit tall, so stacked lines must move down.
fn arb_tall_items() -> impl Strategy<Value = Vec<Size>> {
    prop::collection::vec((0.0f64..60.0, 1.0f64..20.0), 1..40)
        .prop_map(|dims| dims.into_iter().map(|(w, h)| Size::new(w, h)).collect())
}

fn line_height(items: &[Size], line: Range<usize>) -> f64 {
    items[line].iter().fold(0.0_f64, |acc, s| acc.max(s.height))
}

proptest! {
    #[test]
    fn every_item_gets_one_position(
        items in arb_items(),
        max_width in 0.0f64..200.0,
        spacing in 0.0f64..16.0,
    ) {
        let result = compute_layout(&items, max_width, spacing);
        prop_assert_eq!(result.positions.len(), items.len());
    }

    #[test]
    fn items_on_a_line_share_y_and_do_not_overlap(
        items in arb_items(),
        max_width in 0.0f64..200.0,
        spacing in 0.0f64..16.0,
    ) {
        let result = compute_layout(&items, max_width, spacing);

        for line in result.lines() {
            let first = result.positions[line.start];
            prop_assert_eq!(first.x, 0.0);
            for i in line.start..line.end.saturating_sub(1) {
                let here = result.positions[i];
                let next = result.positions[i + 1];
                prop_assert_eq!(here.y, next.y);
                prop_assert!(
                    next.x + EPS >= here.x + items[i].width + spacing,
                    "item {} at x={} overlaps item {} ending at {}",
                    i + 1, next.x, i, here.x + items[i].width
                );
            }
        }
    }

    #[test]
    fn only_line_starters_overflow(
        items in arb_items(),
        max_width in 0.0f64..200.0,
        spacing in 0.0f64..16.0,
    ) {
        let result = compute_layout(&items, max_width, spacing);

        for (item, position) in items.iter().zip(&result.positions) {
            if position.x > 0.0 {
                prop_assert!(
                    position.x + item.width <= max_width + EPS,
                    "item at x={} with width {} crosses {}",
                    position.x, item.width, max_width
                );
            }
        }
    }

    #[test]
    fn lines_stack_strictly_downwards(
        items in arb_tall_items(),
        max_width in 0.0f64..200.0,
        spacing in 0.0f64..16.0,
    ) {
        let result = compute_layout(&items, max_width, spacing);
        let lines: Vec<_> = result.lines().collect();

        for pair in lines.windows(2) {
            let above = result.positions[pair[0].start].y;
            let below = result.positions[pair[1].start].y;
            let height = line_height(&items, pair[0].clone());
            prop_assert!(below > above);
            prop_assert!(below + EPS >= above + height + spacing);
        }
    }

    #[test]
    fn size_covers_exactly_the_used_lines(
        items in arb_items(),
        max_width in 0.0f64..200.0,
        spacing in 0.0f64..16.0,
    ) {
        let result = compute_layout(&items, max_width, spacing);

        prop_assert_eq!(result.size.width, max_width);
        match result.lines().last() {
            None => prop_assert_eq!(result.size.height, 0.0),
            Some(last) => {
                let top = result.positions[last.start].y;
                let height = line_height(&items, last);
                prop_assert!((result.size.height - (top + height)).abs() < EPS);
            }
        }
    }

    #[test]
    fn layout_is_deterministic(
        items in arb_items(),
        max_width in 0.0f64..200.0,
        spacing in 0.0f64..16.0,
    ) {
        let first = compute_layout(&items, max_width, spacing);
        let second = compute_layout(&items, max_width, spacing);
        prop_assert_eq!(first, second);
    }
}
