//! Raster-order pixel cursors and the operand variants built on them.

use crate::format::codec::FormatCodec;
use crate::format::descriptor::PixelFormat;
use crate::foundation::core::{Affine, IntPoint};
use crate::image::surface::Filter;

/// Fetched source or mask pixel: the colour view and the component-alpha view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Sample {
    pub(crate) argb: u32,
    pub(crate) alpha: u32,
}

/// Position inside one image buffer, stepped strictly left to right, top to bottom.
#[derive(Debug)]
pub(crate) struct Cursor<B> {
    bits: B,
    codec: &'static FormatCodec,
    format: PixelFormat,
    stride: usize,
    rows: usize,
    origin: IntPoint,
    start_x: i64,
    x: i64,
    y: i64,
}

impl<B: AsRef<[u8]>> Cursor<B> {
    pub(crate) fn new(
        bits: B,
        codec: &'static FormatCodec,
        format: PixelFormat,
        stride: usize,
        origin: IntPoint,
        at: IntPoint,
    ) -> Self {
        let rows = if stride == 0 {
            0
        } else {
            bits.as_ref().len() / stride
        };
        Self {
            bits,
            codec,
            format,
            stride,
            rows,
            origin,
            start_x: i64::from(at.x),
            x: i64::from(at.x),
            y: i64::from(at.y),
        }
    }

    /// Buffer row and column of the current pixel, if it lies inside the buffer.
    fn slot(&self) -> Option<(usize, usize)> {
        let bx = self.x + i64::from(self.origin.x);
        let by = self.y + i64::from(self.origin.y);
        if bx < 0 || by < 0 || by as usize >= self.rows {
            return None;
        }
        Some((by as usize * self.stride, bx as usize))
    }

    pub(crate) fn fetch(&self) -> u32 {
        match self.slot() {
            Some((start, px)) => (self.codec.fetch)(&self.format, &self.bits.as_ref()[start..], px),
            None => 0,
        }
    }

    pub(crate) fn fetch_alpha(&self) -> u32 {
        match self.slot() {
            Some((start, px)) => {
                (self.codec.fetch_alpha)(&self.format, &self.bits.as_ref()[start..], px)
            }
            None => 0,
        }
    }

    pub(crate) fn step_right(&mut self) {
        self.x += 1;
    }

    pub(crate) fn step_down(&mut self) {
        self.y += 1;
        self.x = self.start_x;
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> Cursor<B> {
    pub(crate) fn store(&mut self, v: u32) {
        if let Some((start, px)) = self.slot() {
            (self.codec.store)(&self.format, &mut self.bits.as_mut()[start..], px, v);
        }
    }
}

/// Snapshot of a transformed operand, for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct TransformState {
    pub(crate) transform: Affine,
    pub(crate) filter: Filter,
    pub(crate) at: IntPoint,
    pub(crate) inner_constant: bool,
}

/// Pixel source or sink bound to one composite call.
#[derive(Debug)]
pub(crate) enum Operand<B> {
    /// Reads and writes a buffer through its format codec.
    Direct(Cursor<B>),
    /// A 1x1 repeating image, read once.
    Constant { value: u32, alpha: u32 },
    /// Colour from one image, alpha from another.
    ExternalAlpha {
        color: Box<Operand<B>>,
        alpha: Box<Operand<B>>,
    },
    /// Transformed image. Sampling through the transform is not supported: the variant only
    /// tracks its raster position, never delegates to `inner`, and reads transparent black.
    Transformed {
        inner: Box<Operand<B>>,
        transform: Affine,
        filter: Filter,
        start_x: i64,
        x: i64,
        y: i64,
    },
}

impl<B: AsRef<[u8]>> Operand<B> {
    pub(crate) fn fetch(&self) -> u32 {
        match self {
            Self::Direct(c) => c.fetch(),
            Self::Constant { value, .. } => *value,
            Self::ExternalAlpha { color, alpha } => {
                (color.fetch() & 0x00ff_ffff) | (alpha.fetch() & 0xff00_0000)
            }
            Self::Transformed { .. } => 0,
        }
    }

    pub(crate) fn fetch_alpha(&self) -> u32 {
        match self {
            Self::Direct(c) => c.fetch_alpha(),
            Self::Constant { alpha, .. } => *alpha,
            Self::ExternalAlpha { alpha, .. } => alpha.fetch(),
            Self::Transformed { .. } => 0,
        }
    }

    pub(crate) fn sample(&self) -> Sample {
        Sample {
            argb: self.fetch(),
            alpha: self.fetch_alpha(),
        }
    }

    pub(crate) fn step_right(&mut self) {
        match self {
            Self::Direct(c) => c.step_right(),
            Self::Constant { .. } => {}
            Self::ExternalAlpha { color, alpha } => {
                color.step_right();
                alpha.step_right();
            }
            Self::Transformed { x, .. } => *x += 1,
        }
    }

    pub(crate) fn step_down(&mut self) {
        match self {
            Self::Direct(c) => c.step_down(),
            Self::Constant { .. } => {}
            Self::ExternalAlpha { color, alpha } => {
                color.step_down();
                alpha.step_down();
            }
            Self::Transformed { start_x, x, y, .. } => {
                *y += 1;
                *x = *start_x;
            }
        }
    }

    pub(crate) fn is_constant(&self) -> bool {
        matches!(self, Self::Constant { .. })
    }

    /// Position and transform of a transformed operand.
    pub(crate) fn transform_state(&self) -> Option<TransformState> {
        match self {
            Self::Transformed {
                inner,
                transform,
                filter,
                x,
                y,
                ..
            } => Some(TransformState {
                transform: *transform,
                filter: *filter,
                at: IntPoint::new(*x as i32, *y as i32),
                inner_constant: inner.is_constant(),
            }),
            _ => None,
        }
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> Operand<B> {
    pub(crate) fn store(&mut self, v: u32) {
        match self {
            Self::Direct(c) => c.store(v),
            Self::ExternalAlpha { color, alpha } => {
                color.store(v | 0xff00_0000);
                alpha.store(v & 0xff00_0000);
            }
            Self::Constant { .. } | Self::Transformed { .. } => {
                tracing::trace!("store to read-only operand dropped");
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/operand/cursor.rs"]
mod tests;
