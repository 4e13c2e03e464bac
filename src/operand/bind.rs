//! Operand construction from images.
//!
//! Sources and masks bind through shared borrows, destinations through an exclusive one. Both
//! go through [`Bindable`], which splits an image into its layout, its pixel buffer and its
//! alpha map so that an external-alpha destination can write both buffers at once.

use crate::format::codec;
use crate::format::descriptor::FormatName;
use crate::foundation::core::{Affine, IntPoint};
use crate::foundation::error::{PixcompError, PixcompResult};
use crate::image::surface::{Filter, Image};
use crate::operand::cursor::{Cursor, Operand};

/// Which operand variants a bind may produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct BindCaps {
    pub(crate) transform: bool,
    pub(crate) external_alpha: bool,
    pub(crate) constant: bool,
}

impl BindCaps {
    /// Sources and masks: every variant.
    pub(crate) const SOURCE: Self = Self {
        transform: true,
        external_alpha: true,
        constant: true,
    };
    /// Destinations: external alpha, never constant or transformed.
    pub(crate) const DESTINATION: Self = Self {
        transform: false,
        external_alpha: true,
        constant: false,
    };
    const PLAIN: Self = Self {
        transform: false,
        external_alpha: false,
        constant: false,
    };
}

/// Image metadata needed to bind, copied out before the buffer is borrowed.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Layout {
    format: FormatName,
    width: u32,
    height: u32,
    stride: usize,
    origin: IntPoint,
    repeat: bool,
    transform: Option<Affine>,
    filter: Filter,
    alpha_origin: IntPoint,
    has_alpha_map: bool,
}

impl Layout {
    fn of(image: &Image) -> Self {
        Self {
            format: image.format,
            width: image.width,
            height: image.height,
            stride: image.stride,
            origin: image.origin,
            repeat: image.repeat,
            transform: image.transform,
            filter: image.filter,
            alpha_origin: image.alpha_origin,
            has_alpha_map: image.alpha_map.is_some(),
        }
    }
}

/// Borrow of an image that can be split into layout, pixels and alpha map.
pub(crate) trait Bindable: Sized {
    type Bits: AsRef<[u8]>;

    fn split(self) -> (Layout, Self::Bits, Option<Self>);
}

impl<'a> Bindable for &'a Image {
    type Bits = &'a [u8];

    fn split(self) -> (Layout, &'a [u8], Option<Self>) {
        (Layout::of(self), &self.data, self.alpha_map.as_deref())
    }
}

impl<'a> Bindable for &'a mut Image {
    type Bits = &'a mut [u8];

    fn split(self) -> (Layout, &'a mut [u8], Option<Self>) {
        let layout = Layout::of(self);
        let Image {
            data, alpha_map, ..
        } = self;
        (layout, data.as_mut_slice(), alpha_map.as_deref_mut())
    }
}

/// Bind `image` with its current pixel at image coordinates `at`.
pub(crate) fn bind<I: Bindable>(
    image: I,
    at: IntPoint,
    caps: BindCaps,
) -> PixcompResult<Operand<I::Bits>> {
    let (layout, bits, alpha_map) = image.split();
    build(layout, bits, alpha_map, at, caps)
}

fn build<I: Bindable>(
    layout: Layout,
    bits: I::Bits,
    alpha_map: Option<I>,
    at: IntPoint,
    caps: BindCaps,
) -> PixcompResult<Operand<I::Bits>> {
    if caps.transform
        && let Some(transform) = layout.transform
    {
        let inner_caps = BindCaps {
            transform: false,
            ..caps
        };
        let inner = build(layout, bits, alpha_map, IntPoint::default(), inner_caps)?;
        return Ok(Operand::Transformed {
            inner: Box::new(inner),
            transform,
            filter: layout.filter,
            start_x: i64::from(at.x),
            x: i64::from(at.x),
            y: i64::from(at.y),
        });
    }

    if caps.external_alpha
        && let Some(map) = alpha_map
    {
        let color = build::<I>(layout, bits, None, at, BindCaps::PLAIN)?;
        let (map_layout, map_bits, _) = map.split();
        let alpha_at = IntPoint::new(
            at.x.saturating_sub(layout.alpha_origin.x),
            at.y.saturating_sub(layout.alpha_origin.y),
        );
        let alpha = build::<I>(map_layout, map_bits, None, alpha_at, BindCaps::PLAIN)?;
        return Ok(Operand::ExternalAlpha {
            color: Box::new(color),
            alpha: Box::new(alpha),
        });
    }

    let solid = layout.repeat
        && layout.width == 1
        && layout.height == 1
        && layout.transform.is_none()
        && !layout.has_alpha_map;
    if caps.constant && solid {
        let probe = cursor(layout, bits, IntPoint::default())?;
        return Ok(Operand::Constant {
            value: probe.fetch(),
            alpha: probe.fetch_alpha(),
        });
    }

    Ok(Operand::Direct(cursor(layout, bits, at)?))
}

fn cursor<B: AsRef<[u8]>>(layout: Layout, bits: B, at: IntPoint) -> PixcompResult<Cursor<B>> {
    let codec = codec::lookup(layout.format).ok_or_else(|| {
        PixcompError::unsupported_format(format!("cannot bind {} pixels", layout.format))
    })?;
    Ok(Cursor::new(
        bits,
        codec,
        layout.format.descriptor(),
        layout.stride,
        layout.origin,
        at,
    ))
}

/// Bind the image's own pixels, ignoring repeat, transform and alpha map.
pub(crate) fn bind_direct<I: Bindable>(image: I, at: IntPoint) -> PixcompResult<Cursor<I::Bits>> {
    let (layout, bits, _) = image.split();
    cursor(layout, bits, at)
}

#[cfg(test)]
#[path = "../../tests/unit/operand/bind.rs"]
mod tests;
