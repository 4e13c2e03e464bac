//! Specialized loops for common format combinations.
//!
//! A fast path reads and writes through the same codecs and combine arithmetic as the generic
//! loop, so it only removes per-pixel dispatch: the bytes it produces are identical. Paths that
//! work on raw pixel bits are restricted to layouts where that holds.

use crate::combine::op::Op;
use crate::combine::table::Combiner;
use crate::combine::{component, unified};
use crate::composite::general::{Tile, composite_general};
use crate::format::descriptor::FormatName;
use crate::foundation::core::IntPoint;
use crate::foundation::error::{PixcompError, PixcompResult};
use crate::foundation::math::{add_u, alpha, over_u, saturate};
use crate::image::surface::Image;
use crate::operand::bind::{BindCaps, bind, bind_direct};
use crate::operand::cursor::Sample;

use FormatName as F;

/// What fast-path selection looks at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct FastPathKey {
    pub(crate) op: Op,
    pub(crate) src: FormatName,
    pub(crate) src_solid: bool,
    /// Mask format and its component-alpha flag.
    pub(crate) mask: Option<(FormatName, bool)>,
    pub(crate) dst: FormatName,
}

impl FastPathKey {
    /// Key for a composite, or `None` when a transform or an alpha map rules fast paths out.
    pub(crate) fn of(op: Op, src: &Image, mask: Option<&Image>, dst: &Image) -> Option<Self> {
        let transformed = src.transform.is_some() || mask.is_some_and(|m| m.transform.is_some());
        let alpha_mapped = src.alpha_map.is_some()
            || dst.alpha_map.is_some()
            || mask.is_some_and(|m| m.alpha_map.is_some());
        if transformed || alpha_mapped {
            return None;
        }
        Some(Self {
            op,
            src: src.format,
            src_solid: src.is_solid(),
            mask: mask.map(|m| (m.format, m.component_alpha)),
            dst: dst.format,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FastPath {
    /// OVER: solid colour through an `a8` mask.
    SolidA8Over,
    /// OVER: solid colour through a component-alpha 8888 mask.
    SolidComponentOver,
    /// OVER: solid colour through an `a1` mask.
    SolidA1Over,
    /// OVER: 8888 onto same-order 8888.
    Over8888,
    /// OVER: 8888 onto 24-bit.
    Over8888To0888,
    /// OVER: 8888 onto 16-bit.
    Over8888To0565,
    /// OVER: 16-bit onto the same 16-bit layout, a plain copy.
    Copy0565,
    Add8888,
    AddA8,
    AddA1,
}

pub(crate) fn select_fast_path(key: &FastPathKey) -> Option<FastPath> {
    match (key.op, key.mask) {
        (Op::Over, Some((mask, component_alpha))) => {
            if !key.src_solid || !key.src.has_color() {
                return None;
            }
            match (mask, component_alpha, key.dst) {
                (
                    F::A8,
                    _,
                    F::R5g6b5
                    | F::B5g6r5
                    | F::R8g8b8
                    | F::B8g8r8
                    | F::A8r8g8b8
                    | F::X8r8g8b8
                    | F::A8b8g8r8
                    | F::X8b8g8r8,
                ) => Some(FastPath::SolidA8Over),
                (F::A8r8g8b8, true, F::A8r8g8b8 | F::X8r8g8b8 | F::R5g6b5)
                | (F::A8b8g8r8, true, F::A8b8g8r8 | F::X8b8g8r8 | F::B5g6r5) => {
                    Some(FastPath::SolidComponentOver)
                }
                (
                    F::A1,
                    _,
                    F::R5g6b5
                    | F::B5g6r5
                    | F::R8g8b8
                    | F::B8g8r8
                    | F::A8r8g8b8
                    | F::X8r8g8b8
                    | F::A8b8g8r8
                    | F::X8b8g8r8,
                ) => Some(FastPath::SolidA1Over),
                _ => None,
            }
        }
        // Unmasked paths walk the source; a solid one goes to the constant loop.
        (Op::Over | Op::Add, None) if key.src_solid => None,
        (Op::Over, None) => match (key.src, key.dst) {
            (F::A8r8g8b8 | F::X8r8g8b8, F::A8r8g8b8 | F::X8r8g8b8)
            | (F::A8b8g8r8 | F::X8b8g8r8, F::A8b8g8r8 | F::X8b8g8r8) => Some(FastPath::Over8888),
            (F::A8r8g8b8 | F::X8r8g8b8, F::R8g8b8) | (F::A8b8g8r8 | F::X8b8g8r8, F::B8g8r8) => {
                Some(FastPath::Over8888To0888)
            }
            (F::A8r8g8b8 | F::X8r8g8b8, F::R5g6b5) | (F::A8b8g8r8 | F::X8b8g8r8, F::B5g6r5) => {
                Some(FastPath::Over8888To0565)
            }
            (F::R5g6b5, F::R5g6b5) | (F::B5g6r5, F::B5g6r5) => Some(FastPath::Copy0565),
            _ => None,
        },
        (Op::Add, None) => match (key.src, key.dst) {
            (F::A8r8g8b8, F::A8r8g8b8) | (F::A8b8g8r8, F::A8b8g8r8) => Some(FastPath::Add8888),
            (F::A8, F::A8) => Some(FastPath::AddA8),
            (F::A1, F::A1) => Some(FastPath::AddA1),
            _ => None,
        },
        _ => None,
    }
}

impl FastPath {
    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::SolidA8Over => "solid_a8_over",
            Self::SolidComponentOver => "solid_component_over",
            Self::SolidA1Over => "solid_a1_over",
            Self::Over8888 => "over_8888",
            Self::Over8888To0888 => "over_8888_0888",
            Self::Over8888To0565 => "over_8888_0565",
            Self::Copy0565 => "copy_0565",
            Self::Add8888 => "add_8888",
            Self::AddA8 => "add_a8",
            Self::AddA1 => "add_a1",
        }
    }

    /// Return `true` when the path reads the source once instead of walking it.
    pub(crate) fn reads_solid_source(self) -> bool {
        matches!(
            self,
            Self::SolidA8Over | Self::SolidComponentOver | Self::SolidA1Over
        )
    }

    pub(crate) fn run(
        self,
        combiner: &Combiner,
        src: &Image,
        mask: Option<&Image>,
        dst: &mut Image,
        tile: &Tile,
    ) -> PixcompResult<()> {
        match self {
            Self::SolidA8Over | Self::SolidComponentOver | Self::SolidA1Over => {
                let mask = mask.ok_or_else(|| {
                    PixcompError::evaluation(format!("{} selected without a mask", self.name()))
                })?;
                self.solid_mask_over(combiner, src, mask, dst, tile)
            }
            Self::Over8888 | Self::Over8888To0888 | Self::Over8888To0565 => {
                over_8888(src, dst, tile)
            }
            Self::Copy0565 => {
                for_each_pixel(tile, |s, d| dst.set_raw(d.0, d.1, src.raw(s.0, s.1)));
                Ok(())
            }
            Self::Add8888 => {
                for_each_pixel(tile, |s, d| {
                    let sv = src.raw(s.0, s.1);
                    if sv == 0 {
                        return;
                    }
                    let dv = dst.raw(d.0, d.1);
                    if sv == 0xffff_ffff {
                        dst.set_raw(d.0, d.1, sv);
                    } else if dv != 0xffff_ffff {
                        dst.set_raw(d.0, d.1, add_u(sv, dv));
                    }
                });
                Ok(())
            }
            Self::AddA8 => {
                for_each_pixel(tile, |s, d| {
                    let sv = src.raw(s.0, s.1) as u16;
                    if sv != 0 {
                        let dv = dst.raw(d.0, d.1) as u16;
                        dst.set_raw(d.0, d.1, u32::from(saturate(sv + dv)));
                    }
                });
                Ok(())
            }
            Self::AddA1 => {
                for_each_pixel(tile, |s, d| {
                    if src.raw(s.0, s.1) != 0 {
                        dst.set_raw(d.0, d.1, 1);
                    }
                });
                Ok(())
            }
        }
    }

    fn solid_mask_over(
        self,
        combiner: &Combiner,
        src: &Image,
        mask: &Image,
        dst: &mut Image,
        tile: &Tile,
    ) -> PixcompResult<()> {
        let solid = bind(src, IntPoint::default(), BindCaps::SOURCE)?;
        if !solid.is_constant() {
            return Err(PixcompError::evaluation(format!(
                "{} selected for a non-solid source",
                self.name()
            )));
        }
        let s = solid.sample();
        if s.argb == 0 {
            return Ok(());
        }
        if self == Self::SolidA1Over && alpha(s.argb) != 0xff {
            return composite_general(combiner, src, Some(mask), dst, tile);
        }

        let mut m = bind_direct(mask, tile.mask)?;
        let mut d = bind_direct(dst, tile.dst)?;
        for _ in 0..tile.height {
            for _ in 0..tile.width {
                let ms = Sample {
                    argb: m.fetch(),
                    alpha: m.fetch_alpha(),
                };
                match self {
                    Self::SolidA1Over => {
                        if ms.argb != 0 {
                            d.store(s.argb);
                        }
                    }
                    Self::SolidComponentOver => {
                        if ms.alpha != 0
                            && let Some(v) = component::over_c(s, Some(ms), d.fetch())
                        {
                            d.store(v);
                        }
                    }
                    _ => {
                        if alpha(ms.argb) != 0
                            && let Some(v) = unified::over_u(s, Some(ms), d.fetch())
                        {
                            d.store(v);
                        }
                    }
                }
                m.step_right();
                d.step_right();
            }
            m.step_down();
            d.step_down();
        }
        Ok(())
    }
}

fn over_8888(src: &Image, dst: &mut Image, tile: &Tile) -> PixcompResult<()> {
    let mut s = bind_direct(src, tile.src)?;
    let mut d = bind_direct(dst, tile.dst)?;
    for _ in 0..tile.height {
        for _ in 0..tile.width {
            let v = s.fetch();
            match alpha(v) {
                0 => {}
                0xff => d.store(v),
                a => d.store(over_u(v, d.fetch(), !a)),
            }
            s.step_right();
            d.step_right();
        }
        s.step_down();
        d.step_down();
    }
    Ok(())
}

/// Visit source and destination coordinates of every tile pixel in raster order.
fn for_each_pixel(tile: &Tile, mut f: impl FnMut((i64, i64), (i64, i64))) {
    for j in 0..i64::from(tile.height) {
        for i in 0..i64::from(tile.width) {
            f(
                (i64::from(tile.src.x) + i, i64::from(tile.src.y) + j),
                (i64::from(tile.dst.x) + i, i64::from(tile.dst.y) + j),
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composite/fastpath.rs"]
mod tests;
