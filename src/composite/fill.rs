//! Solid rectangle fills.

use crate::combine::op::Op;
use crate::composite::driver::{CompositeArea, Compositor};
use crate::format::descriptor::FormatName;
use crate::foundation::core::IntRect;
use crate::foundation::error::PixcompResult;
use crate::image::color::Color;
use crate::image::surface::Image;

impl Compositor {
    /// Combine `color` into every rectangle of `dst`.
    ///
    /// An opaque OVER fill is performed as SRC, and CLEAR ignores `color`.
    #[tracing::instrument(skip_all, fields(op = %op, rects = rects.len()))]
    pub fn fill_rectangles(
        &self,
        op: Op,
        dst: &mut Image,
        color: Color,
        rects: &[IntRect],
    ) -> PixcompResult<()> {
        let (op, color) = match op {
            Op::Over if color.alpha == 0xffff => (Op::Src, color),
            Op::Clear => (op, Color::TRANSPARENT),
            _ => (op, color),
        };

        let mut src = Image::new(FormatName::A8r8g8b8, 1, 1)?.with_repeat(true);
        src.set_raw(0, 0, color.to_pixel(FormatName::A8r8g8b8));

        for r in rects {
            let area = CompositeArea::new(r.width, r.height).with_dst(r.x, r.y);
            self.composite(op, &src, None, dst, area)?;
        }
        Ok(())
    }

    /// Combine `color` into one rectangle of `dst`.
    pub fn fill_rectangle(
        &self,
        op: Op,
        dst: &mut Image,
        color: Color,
        rect: IntRect,
    ) -> PixcompResult<()> {
        self.fill_rectangles(op, dst, color, std::slice::from_ref(&rect))
    }
}

/// Fill with default options. See [`Compositor::fill_rectangles`].
pub fn fill_rectangles(
    op: Op,
    dst: &mut Image,
    color: Color,
    rects: &[IntRect],
) -> PixcompResult<()> {
    Compositor::default().fill_rectangles(op, dst, color, rects)
}

/// Fill one rectangle with default options.
pub fn fill_rectangle(op: Op, dst: &mut Image, color: Color, rect: IntRect) -> PixcompResult<()> {
    Compositor::default().fill_rectangle(op, dst, color, rect)
}

#[cfg(test)]
#[path = "../../tests/unit/composite/fill.rs"]
mod tests;
