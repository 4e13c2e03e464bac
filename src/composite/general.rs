//! Format-agnostic compositing loop.

use crate::combine::table::Combiner;
use crate::foundation::core::IntPoint;
use crate::foundation::error::PixcompResult;
use crate::image::surface::Image;
use crate::operand::bind::{BindCaps, bind};
use crate::operand::cursor::Operand;

/// One sub-rectangle of a composite, in image coordinates of each operand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Tile {
    pub(crate) src: IntPoint,
    pub(crate) mask: IntPoint,
    pub(crate) dst: IntPoint,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

/// Composite one tile through bound operands and `combiner`.
pub(crate) fn composite_general(
    combiner: &Combiner,
    src: &Image,
    mask: Option<&Image>,
    dst: &mut Image,
    tile: &Tile,
) -> PixcompResult<()> {
    let mut s = bind(src, tile.src, BindCaps::SOURCE)?;
    let mut m = mask
        .map(|m| bind(m, tile.mask, BindCaps::SOURCE))
        .transpose()?;
    let mut d = bind(dst, tile.dst, BindCaps::DESTINATION)?;

    if let Some(state) = s.transform_state() {
        tracing::debug!(
            op = %combiner.op(),
            transform = ?state.transform,
            filter = ?state.filter,
            x = state.at.x,
            y = state.at.y,
            inner_constant = state.inner_constant,
            "transformed source reads transparent"
        );
    }

    run(combiner, &mut s, m.as_mut(), &mut d, tile.width, tile.height);
    Ok(())
}

fn run<S, M, D>(
    combiner: &Combiner,
    src: &mut Operand<S>,
    mut mask: Option<&mut Operand<M>>,
    dst: &mut Operand<D>,
    width: u32,
    height: u32,
) where
    S: AsRef<[u8]>,
    M: AsRef<[u8]>,
    D: AsRef<[u8]> + AsMut<[u8]>,
{
    for _ in 0..height {
        for _ in 0..width {
            let m = mask.as_deref().map(Operand::sample);
            if let Some(v) = combiner.combine(src.sample(), m, dst.fetch()) {
                dst.store(v);
            }
            src.step_right();
            if let Some(m) = mask.as_deref_mut() {
                m.step_right();
            }
            dst.step_right();
        }
        src.step_down();
        if let Some(m) = mask.as_deref_mut() {
            m.step_down();
        }
        dst.step_down();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composite/general.rs"]
mod tests;
