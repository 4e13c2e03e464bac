//! Fetch/store capability objects for every registered format.
//!
//! Buffers are little-endian. Sub-byte pixels pack from the least significant bit, so pixel 0
//! of an `a4` row lives in the low nibble of byte 0 and pixel 0 of an `a1` row in bit 0.
//! Reads past the end of a row return 0 and writes past it are dropped.

use crate::format::descriptor::{FormatName, PixelFormat};
use crate::foundation::math::{alpha, expand_bits, splat, swap_rb};

/// Decode pixel `x` of `row` into canonical `0xAARRGGBB`.
pub(crate) type FetchFn = fn(&PixelFormat, &[u8], usize) -> u32;
/// Encode canonical `0xAARRGGBB` into pixel `x` of `row`.
pub(crate) type StoreFn = fn(&PixelFormat, &mut [u8], usize, u32);

/// Access functions bound to one format.
#[derive(Clone, Copy)]
pub(crate) struct FormatCodec {
    pub(crate) name: FormatName,
    pub(crate) fetch: FetchFn,
    /// Component-alpha view of a pixel.
    pub(crate) fetch_alpha: FetchFn,
    pub(crate) store: StoreFn,
}

impl std::fmt::Debug for FormatCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatCodec")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

const fn generic(name: FormatName) -> FormatCodec {
    FormatCodec {
        name,
        fetch: fetch_generic,
        fetch_alpha: fetch_alpha_generic,
        store: store_generic,
    }
}

static REGISTRY: &[FormatCodec] = &[
    FormatCodec {
        name: FormatName::A8r8g8b8,
        fetch: fetch_a8r8g8b8,
        fetch_alpha: fetch_a8r8g8b8,
        store: store_a8r8g8b8,
    },
    FormatCodec {
        name: FormatName::X8r8g8b8,
        fetch: fetch_x8r8g8b8,
        fetch_alpha: fetch_x8r8g8b8,
        store: store_x8r8g8b8,
    },
    FormatCodec {
        name: FormatName::A8b8g8r8,
        fetch: fetch_a8b8g8r8,
        fetch_alpha: fetch_a8b8g8r8,
        store: store_a8b8g8r8,
    },
    FormatCodec {
        name: FormatName::X8b8g8r8,
        fetch: fetch_x8b8g8r8,
        fetch_alpha: fetch_x8b8g8r8,
        store: store_x8b8g8r8,
    },
    generic(FormatName::R8g8b8),
    generic(FormatName::B8g8r8),
    generic(FormatName::R5g6b5),
    generic(FormatName::B5g6r5),
    generic(FormatName::A1r5g5b5),
    generic(FormatName::X1r5g5b5),
    generic(FormatName::A1b5g5r5),
    generic(FormatName::X1b5g5r5),
    generic(FormatName::A4r4g4b4),
    generic(FormatName::X4r4g4b4),
    generic(FormatName::A4b4g4r4),
    generic(FormatName::X4b4g4r4),
    FormatCodec {
        name: FormatName::A8,
        fetch: fetch_a8,
        fetch_alpha: fetch_alpha_a8,
        store: store_a8,
    },
    generic(FormatName::R3g3b2),
    generic(FormatName::B2g3r3),
    generic(FormatName::A2r2g2b2),
    generic(FormatName::A2b2g2r2),
    generic(FormatName::A4),
    generic(FormatName::R1g2b1),
    generic(FormatName::B1g2r1),
    generic(FormatName::A1r1g1b1),
    generic(FormatName::A1b1g1r1),
    generic(FormatName::A1),
];

/// Registered codec for `name`, if any. Indexed formats have none.
pub(crate) fn lookup(name: FormatName) -> Option<&'static FormatCodec> {
    REGISTRY.iter().find(|c| c.name == name)
}

/// Return `true` when images of `name` can be composited.
pub fn is_registered(name: FormatName) -> bool {
    lookup(name).is_some()
}

/// Read the raw bits of pixel `x`.
pub(crate) fn read_raw(row: &[u8], x: usize, bpp: u32) -> u32 {
    match bpp {
        32 => bytes_le(row, x * 4, 4),
        24 => bytes_le(row, x * 3, 3),
        16 => bytes_le(row, x * 2, 2),
        8 => row.get(x).copied().map_or(0, u32::from),
        4 => row
            .get(x / 2)
            .map_or(0, |&b| u32::from(b >> ((x & 1) * 4)) & 0xf),
        1 => row.get(x / 8).map_or(0, |&b| u32::from(b >> (x & 7)) & 1),
        _ => 0,
    }
}

/// Write the raw bits of pixel `x`, leaving neighbouring sub-byte pixels intact.
pub(crate) fn write_raw(row: &mut [u8], x: usize, bpp: u32, v: u32) {
    match bpp {
        32 => put_le(row, x * 4, 4, v),
        24 => put_le(row, x * 3, 3, v),
        16 => put_le(row, x * 2, 2, v),
        8 => {
            if let Some(b) = row.get_mut(x) {
                *b = v as u8;
            }
        }
        4 => {
            if let Some(b) = row.get_mut(x / 2) {
                let shift = (x & 1) * 4;
                *b = (*b & !(0xf << shift)) | (((v & 0xf) as u8) << shift);
            }
        }
        1 => {
            if let Some(b) = row.get_mut(x / 8) {
                let bit = 1u8 << (x & 7);
                if v & 1 != 0 {
                    *b |= bit;
                } else {
                    *b &= !bit;
                }
            }
        }
        _ => {}
    }
}

fn bytes_le(row: &[u8], start: usize, n: usize) -> u32 {
    row.get(start..start + n).map_or(0, |bytes| {
        bytes
            .iter()
            .rev()
            .fold(0u32, |acc, &b| (acc << 8) | u32::from(b))
    })
}

fn put_le(row: &mut [u8], start: usize, n: usize, v: u32) {
    if let Some(bytes) = row.get_mut(start..start + n) {
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = (v >> (8 * i)) as u8;
        }
    }
}

fn fetch_generic(fmt: &PixelFormat, row: &[u8], x: usize) -> u32 {
    let p = read_raw(row, x, fmt.depth);
    let [a, r, g, b] = fmt
        .channels()
        .map(|ch| expand_bits(ch.extract(p), ch.bits()));
    let a = if fmt.alpha.mask == 0 { 0xff } else { a };
    u32::from_be_bytes([a, r, g, b])
}

fn fetch_alpha_generic(fmt: &PixelFormat, row: &[u8], x: usize) -> u32 {
    let v = fetch_generic(fmt, row, x);
    if fmt.name.is_alpha_only() {
        splat(alpha(v))
    } else {
        v
    }
}

fn store_generic(fmt: &PixelFormat, row: &mut [u8], x: usize, v: u32) {
    let [a, r, g, b] = v.to_be_bytes();
    let p = fmt
        .channels()
        .into_iter()
        .zip([a, r, g, b])
        .filter(|(ch, _)| ch.mask != 0)
        .fold(0u32, |acc, (ch, c)| {
            acc | ((u32::from(c) >> (8 - ch.bits())) << ch.shift)
        });
    write_raw(row, x, fmt.depth, p);
}

fn fetch_a8r8g8b8(_: &PixelFormat, row: &[u8], x: usize) -> u32 {
    bytes_le(row, x * 4, 4)
}

fn fetch_x8r8g8b8(_: &PixelFormat, row: &[u8], x: usize) -> u32 {
    bytes_le(row, x * 4, 4) | 0xff00_0000
}

fn fetch_a8b8g8r8(_: &PixelFormat, row: &[u8], x: usize) -> u32 {
    swap_rb(bytes_le(row, x * 4, 4))
}

fn fetch_x8b8g8r8(_: &PixelFormat, row: &[u8], x: usize) -> u32 {
    swap_rb(bytes_le(row, x * 4, 4)) | 0xff00_0000
}

fn fetch_a8(_: &PixelFormat, row: &[u8], x: usize) -> u32 {
    row.get(x).map_or(0, |&a| u32::from(a) << 24)
}

fn fetch_alpha_a8(_: &PixelFormat, row: &[u8], x: usize) -> u32 {
    row.get(x).map_or(0, |&a| splat(a))
}

fn store_a8r8g8b8(_: &PixelFormat, row: &mut [u8], x: usize, v: u32) {
    put_le(row, x * 4, 4, v);
}

fn store_x8r8g8b8(_: &PixelFormat, row: &mut [u8], x: usize, v: u32) {
    put_le(row, x * 4, 4, v & 0x00ff_ffff);
}

fn store_a8b8g8r8(_: &PixelFormat, row: &mut [u8], x: usize, v: u32) {
    put_le(row, x * 4, 4, swap_rb(v));
}

fn store_x8b8g8r8(_: &PixelFormat, row: &mut [u8], x: usize, v: u32) {
    put_le(row, x * 4, 4, swap_rb(v) & 0x00ff_ffff);
}

fn store_a8(_: &PixelFormat, row: &mut [u8], x: usize, v: u32) {
    if let Some(b) = row.get_mut(x) {
        *b = alpha(v);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/format/codec.rs"]
mod tests;
