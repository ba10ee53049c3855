//! Flow layout engine (pure).
//!
//! Arranges measurable items left-to-right into lines that wrap at a
//! maximum width, the way text wraps words. Used to lay out tag chips,
//! but knows nothing about terminals or tags.
//!
//! The whole computation is a single greedy pass returning both the
//! container size and every item's position, so sizing and placement can
//! never disagree.

pub mod engine;
pub mod geometry;

pub use engine::{compute_layout, FlowLayout, FlowResult, LayoutError, DEFAULT_SPACING};
pub use geometry::{Measurable, Point, Size};
