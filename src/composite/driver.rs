use crate::combine::op::Op;
use crate::combine::table::Combiner;
use crate::composite::fastpath::{FastPath, FastPathKey, select_fast_path};
use crate::composite::general::{Tile, composite_general};
use crate::foundation::config::{CompositeOpts, TrapezoidOpts};
use crate::foundation::core::{IntBox, IntPoint};
use crate::foundation::error::PixcompResult;
use crate::image::surface::Image;
use crate::region::clip::composite_region;

/// Placement of a composite: where it reads in the source and mask, where it writes in the
/// destination, and how large it is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CompositeArea {
    /// Source pixel that lands on `dst`.
    pub src: IntPoint,
    /// Mask pixel that lands on `dst`.
    pub mask: IntPoint,
    /// Top-left destination pixel.
    pub dst: IntPoint,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl CompositeArea {
    /// `width x height` area with every origin at `(0, 0)`.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Return the area with its source origin moved to `(x, y)`.
    pub fn with_src(mut self, x: i32, y: i32) -> Self {
        self.src = IntPoint::new(x, y);
        self
    }

    /// Return the area with its mask origin moved to `(x, y)`.
    pub fn with_mask(mut self, x: i32, y: i32) -> Self {
        self.mask = IntPoint::new(x, y);
        self
    }

    /// Return the area with its destination origin moved to `(x, y)`.
    pub fn with_dst(mut self, x: i32, y: i32) -> Self {
        self.dst = IntPoint::new(x, y);
        self
    }
}

/// Compositing entry points bound to a set of options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Compositor {
    opts: CompositeOpts,
    trap_opts: TrapezoidOpts,
}

impl Compositor {
    /// Compositor using `opts`.
    pub fn new(opts: CompositeOpts) -> Self {
        Self {
            opts,
            trap_opts: TrapezoidOpts::default(),
        }
    }

    /// Return the compositor with `opts` for the trapezoid and triangle entry points.
    pub fn with_trapezoid_opts(mut self, opts: TrapezoidOpts) -> Self {
        self.trap_opts = opts;
        self
    }

    /// Compositor using [`CompositeOpts::from_env`].
    pub fn from_env() -> Self {
        Self::new(CompositeOpts::from_env())
    }

    /// Options in effect.
    pub fn opts(&self) -> CompositeOpts {
        self.opts
    }

    /// Trapezoid options in effect.
    pub fn trapezoid_opts(&self) -> TrapezoidOpts {
        self.trap_opts
    }

    /// Combine `src`, optionally masked by `mask`, into `dst` over `area`.
    ///
    /// Only destination pixels inside every operand's clip are touched. Repeating sources and
    /// masks tile the plane. Degenerate input (an empty area, a zero-sized source or mask, or a
    /// fully clipped region) is a no-op.
    #[tracing::instrument(
        skip_all,
        fields(op = %op, width = area.width, height = area.height, masked = mask.is_some())
    )]
    pub fn composite(
        &self,
        op: Op,
        src: &Image,
        mask: Option<&Image>,
        dst: &mut Image,
        area: CompositeArea,
    ) -> PixcompResult<()> {
        let empty = |img: &Image| img.width == 0 || img.height == 0;
        if empty(src) || mask.is_some_and(empty) {
            tracing::debug!("zero-sized source or mask");
            return Ok(());
        }

        let region = composite_region(
            (src, area.src),
            mask.map(|m| (m, area.mask)),
            (&*dst, area.dst),
            area.width,
            area.height,
        )?;
        if region.is_empty() {
            tracing::debug!("empty composite region");
            return Ok(());
        }

        let fast = if self.opts.fast_paths {
            FastPathKey::of(op, src, mask, dst).and_then(|key| select_fast_path(&key))
        } else {
            None
        };
        if let Some(path) = fast {
            tracing::debug!(path = path.name(), "fast path selected");
        }

        let combiner = Combiner::new(op, mask.is_some_and(Image::component_alpha));
        let job = Job {
            combiner,
            fast,
            area,
            src_tiles: tiles(src, fast.is_none_or(FastPath::reads_solid_source)),
            mask_tiles: mask.is_some_and(|m| tiles(m, fast.is_none())),
        };
        for b in region.boxes() {
            job.run_box(*b, src, mask, dst)?;
        }
        Ok(())
    }
}

/// Composite with default options. See [`Compositor::composite`].
pub fn composite(
    op: Op,
    src: &Image,
    mask: Option<&Image>,
    dst: &mut Image,
    area: CompositeArea,
) -> PixcompResult<()> {
    Compositor::default().composite(op, src, mask, dst, area)
}

/// Return `true` when `image` has to be walked tile by tile. A solid image that the loop reads
/// as a constant needs no tiling.
fn tiles(image: &Image, read_as_constant: bool) -> bool {
    image.repeat && !(read_as_constant && image.is_solid())
}

/// Position inside a repeating image of size `size`; 1-wide tiles collapse to 0.
pub(crate) fn tile_offset(v: i64, size: u32) -> i64 {
    if size == 1 {
        return 0;
    }
    v.rem_euclid(i64::from(size).max(1))
}

fn to_i32(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

struct Job {
    combiner: Combiner,
    fast: Option<FastPath>,
    area: CompositeArea,
    src_tiles: bool,
    mask_tiles: bool,
}

impl Job {
    /// Walk one region box, splitting it at source and mask tile edges.
    fn run_box(
        &self,
        b: IntBox,
        src: &Image,
        mask: Option<&Image>,
        dst: &mut Image,
    ) -> PixcompResult<()> {
        let area = &self.area;
        let (src_w, src_h) = (src.width, src.height);
        let (mask_w, mask_h) = mask.map_or((1, 1), |m| (m.width, m.height));

        let mut h = i64::from(b.y2) - i64::from(b.y1);
        let mut y_dst = i64::from(b.y1);
        let mut y_src = y_dst - i64::from(area.dst.y) + i64::from(area.src.y);
        let mut y_msk = y_dst - i64::from(area.dst.y) + i64::from(area.mask.y);
        while h > 0 {
            let mut h_this = h;
            if self.mask_tiles {
                y_msk = tile_offset(y_msk, mask_h);
                h_this = h_this.min(i64::from(mask_h) - y_msk);
            }
            if self.src_tiles {
                y_src = tile_offset(y_src, src_h);
                h_this = h_this.min(i64::from(src_h) - y_src);
            }

            let mut w = i64::from(b.x2) - i64::from(b.x1);
            let mut x_dst = i64::from(b.x1);
            let mut x_src = x_dst - i64::from(area.dst.x) + i64::from(area.src.x);
            let mut x_msk = x_dst - i64::from(area.dst.x) + i64::from(area.mask.x);
            while w > 0 {
                let mut w_this = w;
                if self.mask_tiles {
                    x_msk = tile_offset(x_msk, mask_w);
                    w_this = w_this.min(i64::from(mask_w) - x_msk);
                }
                if self.src_tiles {
                    x_src = tile_offset(x_src, src_w);
                    w_this = w_this.min(i64::from(src_w) - x_src);
                }

                let tile = Tile {
                    src: IntPoint::new(to_i32(x_src), to_i32(y_src)),
                    mask: IntPoint::new(to_i32(x_msk), to_i32(y_msk)),
                    dst: IntPoint::new(to_i32(x_dst), to_i32(y_dst)),
                    width: w_this as u32,
                    height: h_this as u32,
                };
                tracing::trace!(?tile, "composite tile");
                match self.fast {
                    Some(path) => path.run(&self.combiner, src, mask, dst, &tile)?,
                    None => composite_general(&self.combiner, src, mask, dst, &tile)?,
                }

                w -= w_this;
                x_src += w_this;
                x_msk += w_this;
                x_dst += w_this;
            }
            h -= h_this;
            y_src += h_this;
            y_msk += h_this;
            y_dst += h_this;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composite/driver.rs"]
mod tests;
