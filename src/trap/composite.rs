//! Compositing through a coverage mask built from trapezoids or triangles.
//!
//! Every entry point rasterizes all shapes into one zero-filled alpha mask covering their
//! bounds, then composites the source through that mask. Source coordinates are relative to an
//! anchor: the first point of the first shape, truncated to whole pixels.

use crate::combine::op::Op;
use crate::composite::driver::{CompositeArea, Compositor};
use crate::format::descriptor::FormatName;
use crate::foundation::core::{IntBox, IntPoint, PointFixed, Trapezoid, Triangle};
use crate::foundation::error::{PixcompError, PixcompResult};
use crate::image::surface::Image;
use crate::trap::bounds::{trapezoid_bounds, triangle_bounds};
use crate::trap::rasterize::{rasterize_trapezoid, rasterize_triangle};

/// Zero-filled alpha-only image for accumulating coverage.
///
/// Fails for colour formats and for sides above [`crate::MAX_DIMENSION`].
pub fn create_alpha_mask(format: FormatName, width: u32, height: u32) -> PixcompResult<Image> {
    if !format.is_alpha_only() {
        return Err(PixcompError::validation(format!(
            "coverage mask must be alpha-only, got {format}"
        )));
    }
    Image::new(format, width, height)
}

impl Compositor {
    /// Combine `src` into `dst` through the coverage of `traps`.
    ///
    /// `(x_src, y_src)` is the source pixel that lands on the anchor, the top-left pixel of the
    /// first trapezoid's left edge. Degenerate trapezoids are skipped.
    #[tracing::instrument(skip_all, fields(op = %op, traps = traps.len()))]
    pub fn composite_trapezoids(
        &self,
        op: Op,
        src: &Image,
        dst: &mut Image,
        x_src: i32,
        y_src: i32,
        traps: &[Trapezoid],
    ) -> PixcompResult<()> {
        let Some(first) = traps.first() else {
            return Ok(());
        };
        let Some(bounds) = trapezoid_bounds(traps).filter(|b| !b.is_empty()) else {
            tracing::debug!("no coverage");
            return Ok(());
        };

        let mut mask = self.coverage_mask(bounds)?;
        for trap in traps {
            rasterize_trapezoid(&mut mask, trap, -bounds.x1, -bounds.y1)?;
        }
        let src_at = IntPoint::new(x_src, y_src);
        self.composite_coverage(op, src, &mask, dst, bounds, anchor(first.left.p1), src_at)
    }

    /// Combine `src` into `dst` through the coverage of `tris`.
    ///
    /// The anchor is the first vertex of the first triangle.
    #[tracing::instrument(skip_all, fields(op = %op, tris = tris.len()))]
    pub fn composite_triangles(
        &self,
        op: Op,
        src: &Image,
        dst: &mut Image,
        x_src: i32,
        y_src: i32,
        tris: &[Triangle],
    ) -> PixcompResult<()> {
        let Some(first) = tris.first() else {
            return Ok(());
        };
        let Some(bounds) = triangle_bounds(tris).filter(|b| !b.is_empty()) else {
            tracing::debug!("no coverage");
            return Ok(());
        };

        let mut mask = self.coverage_mask(bounds)?;
        for tri in tris {
            rasterize_triangle(&mut mask, tri, -bounds.x1, -bounds.y1)?;
        }
        let src_at = IntPoint::new(x_src, y_src);
        self.composite_coverage(op, src, &mask, dst, bounds, anchor(first.p1), src_at)
    }

    /// Triangles `(p[i], p[i+1], p[i+2])` of a strip. Fewer than three points draw nothing.
    pub fn composite_tri_strip(
        &self,
        op: Op,
        src: &Image,
        dst: &mut Image,
        x_src: i32,
        y_src: i32,
        points: &[PointFixed],
    ) -> PixcompResult<()> {
        let tris: Vec<Triangle> = points
            .windows(3)
            .map(|w| Triangle::new(w[0], w[1], w[2]))
            .collect();
        self.composite_triangles(op, src, dst, x_src, y_src, &tris)
    }

    /// Triangles `(p[0], p[i], p[i+1])` of a fan. Fewer than three points draw nothing.
    pub fn composite_tri_fan(
        &self,
        op: Op,
        src: &Image,
        dst: &mut Image,
        x_src: i32,
        y_src: i32,
        points: &[PointFixed],
    ) -> PixcompResult<()> {
        let Some((&hub, rim)) = points.split_first() else {
            return Ok(());
        };
        let tris: Vec<Triangle> = rim
            .windows(2)
            .map(|w| Triangle::new(hub, w[0], w[1]))
            .collect();
        self.composite_triangles(op, src, dst, x_src, y_src, &tris)
    }

    fn coverage_mask(&self, bounds: IntBox) -> PixcompResult<Image> {
        create_alpha_mask(
            self.trapezoid_opts().mask_format,
            bounds.width(),
            bounds.height(),
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn composite_coverage(
        &self,
        op: Op,
        src: &Image,
        mask: &Image,
        dst: &mut Image,
        bounds: IntBox,
        anchor: IntPoint,
        src_at: IntPoint,
    ) -> PixcompResult<()> {
        let area = CompositeArea::new(bounds.width(), bounds.height())
            .with_src(
                bounds.x1.saturating_add(src_at.x).saturating_sub(anchor.x),
                bounds.y1.saturating_add(src_at.y).saturating_sub(anchor.y),
            )
            .with_dst(bounds.x1, bounds.y1);
        self.composite(op, src, Some(mask), dst, area)
    }
}

fn anchor(p: PointFixed) -> IntPoint {
    IntPoint::new(p.x.floor(), p.y.floor())
}

/// Composite trapezoids with default options. See [`Compositor::composite_trapezoids`].
pub fn composite_trapezoids(
    op: Op,
    src: &Image,
    dst: &mut Image,
    x_src: i32,
    y_src: i32,
    traps: &[Trapezoid],
) -> PixcompResult<()> {
    Compositor::default().composite_trapezoids(op, src, dst, x_src, y_src, traps)
}

/// Composite triangles with default options. See [`Compositor::composite_triangles`].
pub fn composite_triangles(
    op: Op,
    src: &Image,
    dst: &mut Image,
    x_src: i32,
    y_src: i32,
    tris: &[Triangle],
) -> PixcompResult<()> {
    Compositor::default().composite_triangles(op, src, dst, x_src, y_src, tris)
}

/// Composite a triangle strip with default options.
pub fn composite_tri_strip(
    op: Op,
    src: &Image,
    dst: &mut Image,
    x_src: i32,
    y_src: i32,
    points: &[PointFixed],
) -> PixcompResult<()> {
    Compositor::default().composite_tri_strip(op, src, dst, x_src, y_src, points)
}

/// Composite a triangle fan with default options.
pub fn composite_tri_fan(
    op: Op,
    src: &Image,
    dst: &mut Image,
    x_src: i32,
    y_src: i32,
    points: &[PointFixed],
) -> PixcompResult<()> {
    Compositor::default().composite_tri_fan(op, src, dst, x_src, y_src, points)
}

#[cfg(test)]
#[path = "../../tests/unit/trap/composite.rs"]
mod tests;
