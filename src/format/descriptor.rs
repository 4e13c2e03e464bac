//! Pixel format naming and channel layout.
//!
//! A [`FormatName`] packs its layout into a 32-bit code
//! `bpp << 24 | type << 16 | a << 12 | r << 8 | g << 4 | b`, where `a`, `r`, `g` and `b` are
//! channel widths in bits. [`PixelFormat`] unpacks that code into per-channel masks and shifts.

use std::fmt;

/// Channel arrangement encoded in bits 16..24 of a format code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum FormatType {
    /// No channels (unknown layouts).
    Other = 0,
    /// Alpha only.
    A = 1,
    /// Alpha above red, green and blue (blue in the low bits).
    Argb = 2,
    /// Alpha above blue, green and red (red in the low bits).
    Abgr = 3,
    /// Palette index.
    Color = 4,
    /// Gray index.
    Gray = 5,
}

impl FormatType {
    fn from_code(v: u32) -> Self {
        match v {
            1 => Self::A,
            2 => Self::Argb,
            3 => Self::Abgr,
            4 => Self::Color,
            5 => Self::Gray,
            _ => Self::Other,
        }
    }
}

const fn pack(bpp: u32, ty: FormatType, a: u32, r: u32, g: u32, b: u32) -> u32 {
    (bpp << 24) | ((ty as u32) << 16) | (a << 12) | (r << 8) | (g << 4) | b
}

macro_rules! format_names {
    ($($variant:ident = $name:literal => ($bpp:literal, $ty:ident, $a:literal, $r:literal, $g:literal, $b:literal),)*) => {
        /// Named storage formats.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum FormatName {
            $(
                #[doc = concat!("`", $name, "`.")]
                $variant,
            )*
        }

        impl FormatName {
            /// Every named format, registered or not.
            pub const ALL: &'static [FormatName] = &[$(FormatName::$variant,)*];

            /// Packed format code.
            pub const fn code(self) -> u32 {
                match self {
                    $(FormatName::$variant => pack($bpp, FormatType::$ty, $a, $r, $g, $b),)*
                }
            }

            /// Lowercase name, e.g. `a8r8g8b8`.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(FormatName::$variant => $name,)*
                }
            }
        }
    };
}

format_names! {
    A8r8g8b8 = "a8r8g8b8" => (32, Argb, 8, 8, 8, 8),
    X8r8g8b8 = "x8r8g8b8" => (32, Argb, 0, 8, 8, 8),
    A8b8g8r8 = "a8b8g8r8" => (32, Abgr, 8, 8, 8, 8),
    X8b8g8r8 = "x8b8g8r8" => (32, Abgr, 0, 8, 8, 8),
    R8g8b8 = "r8g8b8" => (24, Argb, 0, 8, 8, 8),
    B8g8r8 = "b8g8r8" => (24, Abgr, 0, 8, 8, 8),
    R5g6b5 = "r5g6b5" => (16, Argb, 0, 5, 6, 5),
    B5g6r5 = "b5g6r5" => (16, Abgr, 0, 5, 6, 5),
    A1r5g5b5 = "a1r5g5b5" => (16, Argb, 1, 5, 5, 5),
    X1r5g5b5 = "x1r5g5b5" => (16, Argb, 0, 5, 5, 5),
    A1b5g5r5 = "a1b5g5r5" => (16, Abgr, 1, 5, 5, 5),
    X1b5g5r5 = "x1b5g5r5" => (16, Abgr, 0, 5, 5, 5),
    A4r4g4b4 = "a4r4g4b4" => (16, Argb, 4, 4, 4, 4),
    X4r4g4b4 = "x4r4g4b4" => (16, Argb, 0, 4, 4, 4),
    A4b4g4r4 = "a4b4g4r4" => (16, Abgr, 4, 4, 4, 4),
    X4b4g4r4 = "x4b4g4r4" => (16, Abgr, 0, 4, 4, 4),
    A8 = "a8" => (8, A, 8, 0, 0, 0),
    R3g3b2 = "r3g3b2" => (8, Argb, 0, 3, 3, 2),
    B2g3r3 = "b2g3r3" => (8, Abgr, 0, 3, 3, 2),
    A2r2g2b2 = "a2r2g2b2" => (8, Argb, 2, 2, 2, 2),
    A2b2g2r2 = "a2b2g2r2" => (8, Abgr, 2, 2, 2, 2),
    C8 = "c8" => (8, Color, 0, 0, 0, 0),
    G8 = "g8" => (8, Gray, 0, 0, 0, 0),
    A4 = "a4" => (4, A, 4, 0, 0, 0),
    R1g2b1 = "r1g2b1" => (4, Argb, 0, 1, 2, 1),
    B1g2r1 = "b1g2r1" => (4, Abgr, 0, 1, 2, 1),
    A1r1g1b1 = "a1r1g1b1" => (4, Argb, 1, 1, 1, 1),
    A1b1g1r1 = "a1b1g1r1" => (4, Abgr, 1, 1, 1, 1),
    C4 = "c4" => (4, Color, 0, 0, 0, 0),
    G4 = "g4" => (4, Gray, 0, 0, 0, 0),
    A1 = "a1" => (1, A, 1, 0, 0, 0),
    G1 = "g1" => (1, Gray, 0, 0, 0, 0),
}

impl FormatName {
    /// Look a format up by its packed code.
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.code() == code)
    }

    /// Bits per pixel.
    pub const fn bpp(self) -> u32 {
        self.code() >> 24
    }

    /// Channel arrangement.
    pub fn format_type(self) -> FormatType {
        FormatType::from_code((self.code() >> 16) & 0xff)
    }

    /// Width of the alpha channel in bits.
    pub const fn alpha_bits(self) -> u32 {
        (self.code() >> 12) & 0xf
    }

    /// Width of the red channel in bits.
    pub const fn red_bits(self) -> u32 {
        (self.code() >> 8) & 0xf
    }

    /// Width of the green channel in bits.
    pub const fn green_bits(self) -> u32 {
        (self.code() >> 4) & 0xf
    }

    /// Width of the blue channel in bits.
    pub const fn blue_bits(self) -> u32 {
        self.code() & 0xf
    }

    /// Return `true` when the format stores alpha.
    pub const fn has_alpha(self) -> bool {
        self.alpha_bits() != 0
    }

    /// Return `true` for `a8`, `a4` and `a1`.
    pub fn is_alpha_only(self) -> bool {
        self.format_type() == FormatType::A
    }

    /// Return `true` when the format stores red, green and blue.
    pub fn has_color(self) -> bool {
        matches!(self.format_type(), FormatType::Argb | FormatType::Abgr)
    }

    /// Unpacked channel layout.
    pub fn descriptor(self) -> PixelFormat {
        PixelFormat::from_name(self)
    }
}

impl fmt::Display for FormatName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One channel inside a packed pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Channel {
    /// Unshifted mask, `(1 << bits) - 1`.
    pub mask: u32,
    /// Position of the lowest bit.
    pub shift: u32,
}

impl Channel {
    fn with_bits(bits: u32, shift: u32) -> Self {
        Self {
            mask: (1u32 << bits) - 1,
            shift,
        }
    }

    /// Width in bits.
    pub fn bits(self) -> u32 {
        self.mask.count_ones()
    }

    /// Mask positioned inside the pixel.
    pub fn shifted_mask(self) -> u32 {
        self.mask << self.shift
    }

    /// Raw channel value of `pixel`.
    pub fn extract(self, pixel: u32) -> u32 {
        (pixel >> self.shift) & self.mask
    }
}

/// Per-channel layout of a storage format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelFormat {
    /// Name the layout was derived from.
    pub name: FormatName,
    /// Bits per pixel.
    pub depth: u32,
    /// Alpha channel; `mask == 0` when absent.
    pub alpha: Channel,
    /// Red channel.
    pub red: Channel,
    /// Green channel.
    pub green: Channel,
    /// Blue channel.
    pub blue: Channel,
    /// Pixels span more than one byte, so their byte order matters.
    pub byte_order_sensitive: bool,
}

impl PixelFormat {
    /// Unpack the code of `name`.
    pub fn from_name(name: FormatName) -> Self {
        let (a, r, g, b) = (
            name.alpha_bits(),
            name.red_bits(),
            name.green_bits(),
            name.blue_bits(),
        );
        let none = Channel::default();
        let (alpha, red, green, blue) = match name.format_type() {
            FormatType::A => (Channel::with_bits(a, 0), none, none, none),
            FormatType::Argb => (
                Channel::with_bits(a, r + g + b),
                Channel::with_bits(r, g + b),
                Channel::with_bits(g, b),
                Channel::with_bits(b, 0),
            ),
            FormatType::Abgr => (
                Channel::with_bits(a, b + g + r),
                Channel::with_bits(r, 0),
                Channel::with_bits(g, r),
                Channel::with_bits(b, g + r),
            ),
            FormatType::Color | FormatType::Gray | FormatType::Other => (none, none, none, none),
        };
        Self {
            name,
            depth: name.bpp(),
            alpha,
            red,
            green,
            blue,
            byte_order_sensitive: name.bpp() > 8,
        }
    }

    /// Channels in `[alpha, red, green, blue]` order.
    pub fn channels(&self) -> [Channel; 4] {
        [self.alpha, self.red, self.green, self.blue]
    }

    /// Check that channel masks are disjoint and fit in `depth` bits.
    pub fn is_consistent(&self) -> bool {
        let limit = if self.depth >= 32 {
            u32::MAX
        } else {
            (1u32 << self.depth) - 1
        };
        let mut seen = 0u32;
        for ch in self.channels() {
            let m = ch.shifted_mask();
            if m & seen != 0 || m & !limit != 0 {
                return false;
            }
            seen |= m;
        }
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/format/descriptor.rs"]
mod tests;
