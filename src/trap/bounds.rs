//! Pixel bounds of trapezoid and triangle sets.

use crate::foundation::core::{IntBox, LineFixed, PointFixed, Trapezoid, Triangle};
use crate::foundation::fixed::Fixed;

/// x of `line` at `y`, truncated towards zero, or rounded up when `ceil` is set.
///
/// `line` must not be horizontal.
pub fn line_fixed_x(line: &LineFixed, y: Fixed, ceil: bool) -> Fixed {
    let dx = i64::from(line.p2.x.raw()) - i64::from(line.p1.x.raw());
    let dy = i64::from(line.p2.y.raw()) - i64::from(line.p1.y.raw());
    if dy == 0 {
        return line.p1.x;
    }
    let mut ex = (i64::from(y.raw()) - i64::from(line.p1.y.raw())) * dx;
    if ceil {
        ex += dy - 1;
    }
    let x = i64::from(line.p1.x.raw()) + ex / dy;
    Fixed(x.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

/// Smallest pixel box covering every valid trapezoid; `None` when there is none.
pub fn trapezoid_bounds(traps: &[Trapezoid]) -> Option<IntBox> {
    traps
        .iter()
        .filter(|t| t.is_valid())
        .map(|t| {
            let x1 = line_fixed_x(&t.left, t.top, false)
                .min(line_fixed_x(&t.left, t.bottom, false));
            let x2 = line_fixed_x(&t.right, t.top, true)
                .max(line_fixed_x(&t.right, t.bottom, true));
            IntBox::new(x1.floor(), t.top.floor(), x2.ceil(), t.bottom.ceil())
        })
        .reduce(union)
}

/// Smallest pixel box covering every vertex of `tris`; `None` for an empty slice.
pub fn triangle_bounds(tris: &[Triangle]) -> Option<IntBox> {
    point_bounds(tris.iter().flat_map(|t| [t.p1, t.p2, t.p3]))
}

pub(crate) fn point_bounds(points: impl IntoIterator<Item = PointFixed>) -> Option<IntBox> {
    points
        .into_iter()
        .map(|p| IntBox::new(p.x.floor(), p.y.floor(), p.x.ceil(), p.y.ceil()))
        .reduce(union)
}

fn union(a: IntBox, b: IntBox) -> IntBox {
    IntBox::new(a.x1.min(b.x1), a.y1.min(b.y1), a.x2.max(b.x2), a.y2.max(b.y2))
}

#[cfg(test)]
#[path = "../../tests/unit/trap/bounds.rs"]
mod tests;
