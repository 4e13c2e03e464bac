//! 8-bit channel arithmetic shared by the combiners and fast paths.
//!
//! Every helper works on premultiplied channels packed as `0xAARRGGBB`. Rounding is
//! round-half-up through a `+0x80` bias, which keeps results reproducible bit for bit.

/// Channel shifts in `0xAARRGGBB` order, lowest first.
pub(crate) const CHANNEL_SHIFTS: [u32; 4] = [0, 8, 16, 24];

/// `round(a * b / 255)` using one multiply and a folded correction term.
#[inline]
pub(crate) fn int_mult(a: u8, b: u8) -> u8 {
    let t = u32::from(a) * u32::from(b) + 0x80;
    (((t >> 8) + t) >> 8) as u8
}

/// Truncating `a * 255 / b`. Callers guarantee `a < b`, so the result stays below 255.
#[inline]
pub(crate) fn int_div(a: u8, b: u8) -> u8 {
    if b == 0 {
        return 0xff;
    }
    ((u32::from(a) * 255) / u32::from(b)).min(255) as u8
}

/// Clamp a 9-bit intermediate to 8 bits via sign extension of the carry bit.
#[inline]
pub(crate) fn saturate(t: u16) -> u8 {
    (t | 0u16.wrapping_sub(t >> 8)) as u8
}

#[inline]
pub(crate) fn channel(x: u32, shift: u32) -> u8 {
    (x >> shift) as u8
}

#[inline]
pub(crate) fn alpha(x: u32) -> u8 {
    (x >> 24) as u8
}

/// Replicate an 8-bit value into all four channels.
#[inline]
pub(crate) fn splat(a: u8) -> u32 {
    u32::from(a) * 0x0101_0101
}

/// `x + y * a`, per channel, saturating.
#[inline]
pub(crate) fn over_u(x: u32, y: u32, a: u8) -> u32 {
    map_channels(|s| {
        let t = u16::from(int_mult(channel(y, s), a)) + u16::from(channel(x, s));
        saturate(t)
    })
}

/// `x + y * a_i` with a separate factor per channel.
#[inline]
pub(crate) fn over_c(x: u32, y: u32, a: u32) -> u32 {
    map_channels(|s| {
        let t = u16::from(int_mult(channel(y, s), channel(a, s))) + u16::from(channel(x, s));
        saturate(t)
    })
}

/// `x * a`, per channel.
#[inline]
pub(crate) fn in_u(x: u32, a: u8) -> u32 {
    map_channels(|s| int_mult(channel(x, s), a))
}

/// `x_i * a_i`, per channel.
#[inline]
pub(crate) fn in_c(x: u32, a: u32) -> u32 {
    map_channels(|s| int_mult(channel(x, s), channel(a, s)))
}

/// `x * ax + y * ay`, per channel, saturating.
#[inline]
pub(crate) fn gen_u(x: u32, y: u32, ax: u8, ay: u8) -> u32 {
    map_channels(|s| gen_channel(channel(x, s), channel(y, s), ax, ay))
}

/// `x * ax_i + y * ay`, with a per-channel source factor.
#[inline]
pub(crate) fn gen_c(x: u32, y: u32, ax: u32, ay: u8) -> u32 {
    map_channels(|s| gen_channel(channel(x, s), channel(y, s), channel(ax, s), ay))
}

#[inline]
pub(crate) fn gen_channel(x: u8, y: u8, ax: u8, ay: u8) -> u8 {
    let t = u16::from(int_mult(y, ay)) + u16::from(int_mult(x, ax));
    saturate(t)
}

/// Saturating per-channel addition.
#[inline]
pub(crate) fn add_u(x: u32, y: u32) -> u32 {
    map_channels(|s| saturate(u16::from(channel(x, s)) + u16::from(channel(y, s))))
}

#[inline]
pub(crate) fn map_channels(mut f: impl FnMut(u32) -> u8) -> u32 {
    CHANNEL_SHIFTS
        .iter()
        .fold(0u32, |acc, &s| acc | (u32::from(f(s)) << s))
}

/// Swap the red and blue bytes, leaving alpha and green alone.
#[inline]
pub(crate) fn swap_rb(x: u32) -> u32 {
    (x & 0xff00_ff00) | ((x >> 16) & 0xff) | ((x & 0xff) << 16)
}

/// Expand an `n`-bit channel value to 8 bits by replicating its top bits.
#[inline]
pub(crate) fn expand_bits(v: u32, bits: u32) -> u8 {
    if bits == 0 {
        return 0;
    }
    if bits >= 8 {
        return (v >> (bits - 8)) as u8;
    }
    let mut out = v << (8 - bits);
    let mut filled = bits;
    while filled < 8 {
        out |= out >> filled;
        filled *= 2;
    }
    out as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
