//! Pixel-space primitives: points, sizes, rectangles.
//!
//! Coordinates follow screen convention: origin top-left, x grows
//! rightward, y grows downward. All quantities are `f64` pixels.

/// A position in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// The origin, `(0, 0)`.
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Create a point from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Pixel dimensions of a region.
///
/// # Invariants
/// - Both extents are `>= 0`. Zero is valid (a hidden row or column);
///   negative extents are never constructed by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Width in pixels.
    pub w: f64,
    /// Height in pixels.
    pub h: f64,
}

impl Size {
    /// The empty size, `(0, 0)`.
    pub const ZERO: Size = Size { w: 0.0, h: 0.0 };

    /// Create a size from its extents.
    pub fn new(w: f64, h: f64) -> Self {
        Size { w, h }
    }

    /// True when either extent is zero (nothing can be shown).
    pub fn is_empty(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }
}

/// A pixel-space rectangle, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Leading horizontal edge.
    pub x: f64,
    /// Leading vertical edge.
    pub y: f64,
    /// Width in pixels.
    pub w: f64,
    /// Height in pixels.
    pub h: f64,
}

impl Rect {
    /// Create a rectangle from origin and extents.
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Rect { x, y, w, h }
    }

    /// Top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Extents as a [`Size`].
    pub fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }

    /// Trailing horizontal edge, `x + w`.
    pub fn max_x(&self) -> f64 {
        self.x + self.w
    }

    /// Trailing vertical edge, `y + h`.
    pub fn max_y(&self) -> f64 {
        self.y + self.h
    }

    /// The same rectangle shifted so that `origin` becomes its zero point.
    ///
    /// Used to express a cell rectangle in a pane's local coordinate
    /// space (the pane's own top-left corner subtracted out).
    pub fn relative_to(&self, origin: Point) -> Rect {
        Rect::new(self.x - origin.x, self.y - origin.y, self.w, self.h)
    }
}
