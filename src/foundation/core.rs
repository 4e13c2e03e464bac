use crate::foundation::fixed::Fixed;

pub use kurbo::{Affine, Point};

/// Integer pixel position.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct IntPoint {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl IntPoint {
    /// Create a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Rectangle given by its top-left corner and size.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct IntRect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl IntRect {
    /// Create a rectangle.
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Half-open box `[x1, x2) x [y1, y2)`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct IntBox {
    /// Inclusive left edge.
    pub x1: i32,
    /// Inclusive top edge.
    pub y1: i32,
    /// Exclusive right edge.
    pub x2: i32,
    /// Exclusive bottom edge.
    pub y2: i32,
}

impl IntBox {
    /// Create a box from its corners.
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Box covering `rect`, saturating at the `i32` range.
    pub fn from_rect(rect: IntRect) -> Self {
        Self {
            x1: rect.x,
            y1: rect.y,
            x2: rect.x.saturating_add_unsigned(rect.width),
            y2: rect.y.saturating_add_unsigned(rect.height),
        }
    }

    /// Return `true` when the box covers no pixel.
    pub fn is_empty(self) -> bool {
        self.x1 >= self.x2 || self.y1 >= self.y2
    }

    /// Width, or zero for inverted boxes.
    pub fn width(self) -> u32 {
        (i64::from(self.x2) - i64::from(self.x1)).max(0) as u32
    }

    /// Height, or zero for inverted boxes.
    pub fn height(self) -> u32 {
        (i64::from(self.y2) - i64::from(self.y1)).max(0) as u32
    }

    /// Overlap of two boxes. The result may be empty.
    pub fn intersect(self, other: Self) -> Self {
        Self {
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
            x2: self.x2.min(other.x2),
            y2: self.y2.min(other.y2),
        }
    }

    /// Shift by `(dx, dy)` with saturating arithmetic.
    pub fn translate(self, dx: i32, dy: i32) -> Self {
        Self {
            x1: self.x1.saturating_add(dx),
            y1: self.y1.saturating_add(dy),
            x2: self.x2.saturating_add(dx),
            y2: self.y2.saturating_add(dy),
        }
    }

    /// Return `true` when pixel `(x, y)` lies inside.
    pub fn contains(self, x: i32, y: i32) -> bool {
        self.x1 <= x && x < self.x2 && self.y1 <= y && y < self.y2
    }
}

/// Point with 16.16 fixed coordinates.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PointFixed {
    /// Horizontal position.
    pub x: Fixed,
    /// Vertical position.
    pub y: Fixed,
}

impl PointFixed {
    /// Create a point from fixed coordinates.
    pub const fn new(x: Fixed, y: Fixed) -> Self {
        Self { x, y }
    }

    /// Round a `kurbo` point to the fixed grid.
    pub fn from_point(p: Point) -> Self {
        Self {
            x: Fixed::from_f64(p.x),
            y: Fixed::from_f64(p.y),
        }
    }

    /// Convert back to a `kurbo` point.
    pub fn to_point(self) -> Point {
        Point::new(self.x.to_f64(), self.y.to_f64())
    }
}

/// Line through two fixed points.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct LineFixed {
    /// First point.
    pub p1: PointFixed,
    /// Second point.
    pub p2: PointFixed,
}

impl LineFixed {
    /// Create a line.
    pub const fn new(p1: PointFixed, p2: PointFixed) -> Self {
        Self { p1, p2 }
    }

    /// Return `true` when both points share the same y.
    pub fn is_horizontal(&self) -> bool {
        self.p1.y == self.p2.y
    }
}

/// Region bounded by two horizontal lines and two edges.
///
/// The edges are infinite lines; only the part between `top` and `bottom` is covered.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Trapezoid {
    /// Top y.
    pub top: Fixed,
    /// Bottom y.
    pub bottom: Fixed,
    /// Left edge.
    pub left: LineFixed,
    /// Right edge.
    pub right: LineFixed,
}

impl Trapezoid {
    /// Create a trapezoid.
    pub const fn new(top: Fixed, bottom: Fixed, left: LineFixed, right: LineFixed) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Axis-aligned trapezoid covering `[x1, x2) x [top, bottom)`.
    pub fn from_rect(x1: Fixed, top: Fixed, x2: Fixed, bottom: Fixed) -> Self {
        Self {
            top,
            bottom,
            left: LineFixed::new(PointFixed::new(x1, top), PointFixed::new(x1, bottom)),
            right: LineFixed::new(PointFixed::new(x2, top), PointFixed::new(x2, bottom)),
        }
    }

    /// Return `true` when neither edge is horizontal and `bottom > top`.
    pub fn is_valid(&self) -> bool {
        !self.left.is_horizontal() && !self.right.is_horizontal() && self.bottom > self.top
    }
}

/// Triangle given by three fixed points in any order.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Triangle {
    /// First vertex.
    pub p1: PointFixed,
    /// Second vertex.
    pub p2: PointFixed,
    /// Third vertex.
    pub p3: PointFixed,
}

impl Triangle {
    /// Create a triangle.
    pub const fn new(p1: PointFixed, p2: PointFixed, p3: PointFixed) -> Self {
        Self { p1, p2, p3 }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
