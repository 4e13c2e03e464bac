use crate::format::descriptor::{Channel, FormatName};

/// Premultiplied colour with 16-bit channels.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Color {
    /// Red, premultiplied.
    pub red: u16,
    /// Green, premultiplied.
    pub green: u16,
    /// Blue, premultiplied.
    pub blue: u16,
    /// Coverage.
    pub alpha: u16,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 0xffff);
    /// Opaque white.
    pub const WHITE: Self = Self::new(0xffff, 0xffff, 0xffff, 0xffff);

    /// Create a colour from premultiplied channels.
    pub const fn new(red: u16, green: u16, blue: u16, alpha: u16) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Widen premultiplied `0xAARRGGBB`.
    pub fn from_argb32(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        let widen = |c: u8| u16::from(c) * 0x101;
        Self::new(widen(r), widen(g), widen(b), widen(a))
    }

    /// Narrow to premultiplied `0xAARRGGBB` by dropping the low byte of each channel.
    pub fn to_argb32(self) -> u32 {
        let narrow = |c: u16| (c >> 8) as u8;
        u32::from_be_bytes([
            narrow(self.alpha),
            narrow(self.red),
            narrow(self.green),
            narrow(self.blue),
        ])
    }

    /// Raw pixel value in `format`, keeping the top bits of each channel.
    pub fn to_pixel(self, format: FormatName) -> u32 {
        let d = format.descriptor();
        [
            (d.alpha, self.alpha),
            (d.red, self.red),
            (d.green, self.green),
            (d.blue, self.blue),
        ]
        .into_iter()
        .filter(|(ch, _)| ch.mask != 0)
        .fold(0, |acc, (ch, c)| {
            acc | ((u32::from(c) >> (16 - ch.bits())) << ch.shift)
        })
    }

    /// Decode a raw pixel of `format`. Missing alpha reads as opaque and missing colour
    /// channels as zero.
    pub fn from_pixel(format: FormatName, pixel: u32) -> Self {
        let d = format.descriptor();
        let alpha = if d.alpha.mask == 0 {
            0xffff
        } else {
            widen_channel(d.alpha, pixel)
        };
        Self::new(
            widen_channel(d.red, pixel),
            widen_channel(d.green, pixel),
            widen_channel(d.blue, pixel),
            alpha,
        )
    }
}

fn widen_channel(ch: Channel, pixel: u32) -> u16 {
    let bits = ch.bits();
    if bits == 0 {
        return 0;
    }
    let mut out = ch.extract(pixel) << (16 - bits);
    let mut filled = bits;
    while filled < 16 {
        out |= out >> filled;
        filled *= 2;
    }
    out as u16
}

#[cfg(test)]
#[path = "../../tests/unit/image/color.rs"]
mod tests;
