//! Geometry primitives for the flow layout engine.

/// Width × height pair in abstract layout units.
///
/// The engine never assumes a unit: the TUI feeds it terminal cells,
/// tests feed it arbitrary reals.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// The empty size.
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Create a size from width and height.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Top-left coordinate relative to a container origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal offset.
    pub x: f64,
    /// Vertical offset.
    pub y: f64,
}

impl Point {
    /// The container origin.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Create a point from coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate this point by another point's coordinates.
    pub fn offset_by(self, origin: Point) -> Self {
        Self {
            x: origin.x + self.x,
            y: origin.y + self.y,
        }
    }
}

/// Anything that can report its size when given no width constraint.
///
/// The query must be pure and idempotent: the engine calls it exactly once
/// per item per pass, but callers may run several passes.
pub trait Measurable {
    /// Natural (unconstrained) size of this item.
    fn natural_size(&self) -> Size;
}

impl Measurable for Size {
    fn natural_size(&self) -> Size {
        *self
    }
}

impl Measurable for (f64, f64) {
    fn natural_size(&self) -> Size {
        Size::new(self.0, self.1)
    }
}

impl<T: Measurable + ?Sized> Measurable for &T {
    fn natural_size(&self) -> Size {
        (**self).natural_size()
    }
}
