//! Exact coverage areas under one edge.
//!
//! All lengths are 16.16 fixed point held in `i64`. Areas inside one pixel are 1.31 fixed point:
//! a full pixel is `2^31`. Intermediate products go through `i128`.

use crate::foundation::core::LineFixed;
use crate::trap::rational::RationalPoint;

/// One pixel, in 16.16 units.
pub(crate) const ONE: i64 = 1 << 16;

/// Trapezoid edge oriented downwards and shifted into mask space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Edge {
    pub(crate) x1: i64,
    pub(crate) y1: i64,
    pub(crate) dx: i64,
    pub(crate) dy: i64,
}

impl Edge {
    /// `None` for horizontal lines.
    pub(crate) fn new(line: &LineFixed, x_off: i64, y_off: i64) -> Option<Self> {
        let (a, b) = if line.p1.y <= line.p2.y {
            (line.p1, line.p2)
        } else {
            (line.p2, line.p1)
        };
        let dy = i64::from(b.y.raw()) - i64::from(a.y.raw());
        if dy == 0 {
            return None;
        }
        Some(Self {
            x1: i64::from(a.x.raw()) + x_off,
            y1: i64::from(a.y.raw()) + y_off,
            dx: i64::from(b.x.raw()) - i64::from(a.x.raw()),
            dy,
        })
    }

    /// x where the edge meets row `y`, over `dy`.
    pub(crate) fn x_at(&self, y: i64) -> RationalPoint {
        let num = i128::from(self.x1) * i128::from(self.dy)
            + i128::from(y - self.y1) * i128::from(self.dx);
        RationalPoint::new(num, self.dy)
    }

    /// y where the edge meets column `x`, over `|dx|`. Vertical edges have no crossing.
    pub(crate) fn y_at(&self, x: i64) -> Option<RationalPoint> {
        if self.dx == 0 {
            return None;
        }
        let num = i128::from(self.y1) * i128::from(self.dx.abs())
            + i128::from(x - self.x1) * i128::from(self.dy) * i128::from(self.dx.signum());
        Some(RationalPoint::new(num, self.dx.abs()))
    }

    /// Area of pixel column `px` left of the edge, between `row_top` and `y`, in 1.31.
    ///
    /// `y` must not lie below `row_top + ONE`.
    pub(crate) fn area_left(&self, px: i64, row_top: i64, y: i64) -> i64 {
        let x0 = px * ONE;
        if self.dx == 0 {
            let w = (self.x1 - x0).clamp(0, ONE);
            return round_div(i128::from(w) * i128::from(y - row_top), 2);
        }

        // With n(y) = (x(y) - x0) * dy, the clamped width integrates to k(n) / (2 dx dy).
        let full = i128::from(ONE) * i128::from(self.dy);
        let n = |at: i64| {
            i128::from(self.x1 - x0) * i128::from(self.dy)
                + i128::from(at - self.y1) * i128::from(self.dx)
        };
        let k = |n: i128| {
            if n <= 0 {
                0
            } else if n >= full {
                2 * full * n - full * full
            } else {
                n * n
            }
        };
        let num = k(n(y)) - k(n(row_top));
        round_div(num, 4 * i128::from(self.dx) * i128::from(self.dy))
    }
}

/// Area of a whole pixel column between `row_top` and `y`, in 1.31.
pub(crate) fn full_area(row_top: i64, y: i64) -> i64 {
    ONE * (y - row_top) / 2
}

/// 1.31 area scaled to an alpha in `0..=max`, rounded to nearest.
pub(crate) fn area_alpha(area: i64, max: i64) -> i64 {
    (area * max + (1 << 30)) >> 31
}

fn round_div(num: i128, den: i128) -> i64 {
    let (num, den) = if den < 0 { (-num, -den) } else { (num, den) };
    (2 * num + den).div_euclid(2 * den) as i64
}

#[cfg(test)]
#[path = "../../tests/unit/trap/area.rs"]
mod tests;
