//! Anti-aliased coverage for trapezoids and triangles.
//!
//! Each pixel row is processed as a band clipped to the trapezoid's top and bottom. For both
//! edges the band is walked column by column: the edge enters a pixel, then leaves it through
//! the right side (moving on to the next column) or through the band's top or bottom (ending
//! the walk). The coverage of a pixel is the alpha of the band area left of the right edge minus
//! the alpha of the band area left of the left edge. Alphas are rounded per edge and per y, so
//! trapezoids sharing an edge or a horizontal boundary sum to exactly full coverage.

use crate::foundation::core::{LineFixed, PointFixed, Trapezoid, Triangle};
use crate::foundation::error::{PixcompError, PixcompResult};
use crate::image::surface::Image;
use crate::trap::area::{Edge, ONE, area_alpha, full_area};
use crate::trap::rational::{RationalPoint, RationalStep};

/// Side through which an edge leaves the current pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Departure {
    Top,
    Bottom,
    Right,
}

impl Departure {
    /// `cross` is where the edge meets the pixel's right side, if it is not vertical.
    pub(crate) fn of(dx: i64, cross: Option<&RationalPoint>, top: i64, bottom: i64) -> Self {
        match cross {
            Some(y) if dx > 0 => {
                if y.lt(bottom) {
                    Self::Right
                } else {
                    Self::Bottom
                }
            }
            Some(y) => {
                if y.gt(top) {
                    Self::Right
                } else {
                    Self::Top
                }
            }
            None => Self::Bottom,
        }
    }
}

/// Per-column alphas left of one edge within the current band.
#[derive(Debug, Default)]
struct Span {
    start: i64,
    alphas: Vec<i64>,
}

impl Span {
    fn end(&self) -> i64 {
        self.start + self.alphas.len() as i64 - 1
    }

    fn alpha(&self, px: i64, full: i64) -> i64 {
        if px < self.start {
            return full;
        }
        usize::try_from(px - self.start)
            .ok()
            .and_then(|i| self.alphas.get(i).copied())
            .unwrap_or(0)
    }
}

/// One edge with its row walk and its span on the current band.
struct EdgeWalk {
    edge: Edge,
    row: RationalPoint,
    row_step: RationalStep,
    span: Span,
}

impl EdgeWalk {
    fn new(edge: Edge, row_top: i64) -> Self {
        let row = edge.x_at(row_top);
        let row_step = row.increment(ONE * edge.dx);
        Self {
            edge,
            row,
            row_step,
            span: Span::default(),
        }
    }

    /// Fill the span for band `[top, bottom]` of the row starting at `row_top`, then advance
    /// the row walk to the next row.
    fn band(&mut self, row_top: i64, top: i64, bottom: i64, max: i64, width: i64) {
        let edge = self.edge;
        let mut next = self.row;
        next.step(self.row_step);
        let entry = if edge.dx > 0 {
            if top == row_top { self.row } else { edge.x_at(top) }
        } else if bottom == row_top + ONE {
            next
        } else {
            edge.x_at(bottom)
        };
        self.row = next;

        let mut px = entry.whole.div_euclid(ONE);
        let mut cross = edge.y_at((px + 1) * ONE);
        let col_step = cross.map(|c| c.increment(ONE * edge.dy * edge.dx.signum()));

        self.span.start = px;
        self.span.alphas.clear();
        loop {
            let a = area_alpha(edge.area_left(px, row_top, bottom), max)
                - area_alpha(edge.area_left(px, row_top, top), max);
            self.span.alphas.push(a);

            let departure = Departure::of(edge.dx, cross.as_ref(), top, bottom);
            if departure != Departure::Right || px + 1 >= width {
                break;
            }
            px += 1;
            if let (Some(c), Some(step)) = (cross.as_mut(), col_step) {
                c.step(step);
            }
        }
    }
}

/// Add the coverage of `trap`, shifted by `(x_off, y_off)` pixels, into `mask`.
///
/// `mask` must be an alpha-only image. Coverage saturates at the mask's maximum value. A
/// trapezoid with a horizontal edge or with `bottom <= top` adds nothing.
#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(format = %mask.format(), top = trap.top.raw(), bottom = trap.bottom.raw())
)]
pub fn rasterize_trapezoid(
    mask: &mut Image,
    trap: &Trapezoid,
    x_off: i32,
    y_off: i32,
) -> PixcompResult<()> {
    let format = mask.format();
    if !format.is_alpha_only() {
        return Err(PixcompError::validation(format!(
            "trapezoid mask must be alpha-only, got {format}"
        )));
    }
    if !trap.is_valid() {
        tracing::trace!("degenerate trapezoid skipped");
        return Ok(());
    }

    let x_off = i64::from(x_off) * ONE;
    let y_off = i64::from(y_off) * ONE;
    let (Some(left), Some(right)) = (
        Edge::new(&trap.left, x_off, y_off),
        Edge::new(&trap.right, x_off, y_off),
    ) else {
        return Ok(());
    };

    let max = (1i64 << format.bpp()) - 1;
    let width = i64::from(mask.width());
    let height = i64::from(mask.height());
    let top = i64::from(trap.top.raw()) + y_off;
    let bottom = i64::from(trap.bottom.raw()) + y_off;
    let first_row = top.div_euclid(ONE).max(0);
    let last_row = (bottom - 1).div_euclid(ONE).min(height - 1);
    if first_row > last_row || width == 0 {
        return Ok(());
    }

    let mut left = EdgeWalk::new(left, first_row * ONE);
    let mut right = EdgeWalk::new(right, first_row * ONE);
    for py in first_row..=last_row {
        let row_top = py * ONE;
        let t = top.max(row_top);
        let b = bottom.min(row_top + ONE);
        left.band(row_top, t, b, max, width);
        right.band(row_top, t, b, max, width);

        let full = area_alpha(full_area(row_top, b), max) - area_alpha(full_area(row_top, t), max);
        let lo = left.span.start.min(right.span.start).max(0);
        let hi = left.span.end().max(right.span.end()).min(width - 1);
        for px in lo..=hi {
            let c = right.span.alpha(px, full) - left.span.alpha(px, full);
            if c > 0 {
                accumulate(mask, px, py, c, max);
            }
        }
    }
    Ok(())
}

fn accumulate(mask: &mut Image, x: i64, y: i64, alpha: i64, max: i64) {
    let v = if alpha >= max {
        max
    } else {
        (i64::from(mask.raw(x, y)) + alpha).min(max)
    };
    mask.set_raw(x, y, v as u32);
}

/// Add the coverage of `tri`, shifted by `(x_off, y_off)` pixels, into `mask`.
///
/// The triangle is split at its middle vertex into two trapezoids that share one edge.
pub fn rasterize_triangle(
    mask: &mut Image,
    tri: &Triangle,
    x_off: i32,
    y_off: i32,
) -> PixcompResult<()> {
    for trap in triangle_trapezoids(tri).iter().flatten() {
        rasterize_trapezoid(mask, trap, x_off, y_off)?;
    }
    Ok(())
}

/// The upper and lower trapezoid of `tri`; `None` where one has no height.
pub(crate) fn triangle_trapezoids(tri: &Triangle) -> [Option<Trapezoid>; 2] {
    let mut pts = [tri.p1, tri.p2, tri.p3];
    pts.sort_by_key(|p| p.y);
    let [top, a, b] = pts;

    // `left` is the vertex whose edge from `top` turns counter-clockwise of the other's.
    let cross = cross(top, a, b);
    let (left, right) = if cross > 0 || (cross == 0 && a.x <= b.x) {
        (a, b)
    } else {
        (b, a)
    };

    let left_edge = LineFixed::new(top, left);
    let right_edge = LineFixed::new(top, right);
    let (upper, lower) = if right.y < left.y {
        (
            Trapezoid::new(top.y, right.y, left_edge, right_edge),
            Trapezoid::new(right.y, left.y, left_edge, LineFixed::new(right, left)),
        )
    } else {
        (
            Trapezoid::new(top.y, left.y, left_edge, right_edge),
            Trapezoid::new(left.y, right.y, LineFixed::new(left, right), right_edge),
        )
    };
    [upper, lower].map(|t| (t.top != t.bottom).then_some(t))
}

/// Sign of the turn from `o -> a` to `o -> b`; positive when `a` is left of `b` in y-down space.
fn cross(o: PointFixed, a: PointFixed, b: PointFixed) -> i128 {
    let (ax, ay) = (
        i128::from(a.x.raw()) - i128::from(o.x.raw()),
        i128::from(a.y.raw()) - i128::from(o.y.raw()),
    );
    let (bx, by) = (
        i128::from(b.x.raw()) - i128::from(o.x.raw()),
        i128::from(b.y.raw()) - i128::from(o.y.raw()),
    );
    bx * ay - ax * by
}

#[cfg(test)]
#[path = "../../tests/unit/trap/rasterize.rs"]
mod tests;
