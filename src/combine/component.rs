//! Component-alpha combiners: the mask carries a separate alpha for each channel.

use crate::combine::factor::{self, A, A_IN, A_OUT};
use crate::foundation::math::{
    add_u as add, alpha, channel, gen_c, gen_channel, in_c as scale_c, in_u as scale,
    map_channels, over_c as over_c_math, over_u as over, saturate, splat,
};
use crate::operand::cursor::Sample;

/// Masked source value and its per-channel alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Masked {
    pub(crate) value: u32,
    pub(crate) alpha: u32,
}

pub(crate) fn mask_c(s: Sample, m: Option<Sample>) -> Masked {
    let opaque = Masked {
        value: s.argb,
        alpha: splat(alpha(s.argb)),
    };
    let Some(m) = m else {
        return opaque;
    };
    match m.alpha {
        0 => Masked { value: 0, alpha: 0 },
        0xffff_ffff => opaque,
        a => Masked {
            value: scale_c(s.argb, a),
            alpha: scale(a, alpha(s.argb)),
        },
    }
}

pub(crate) fn mask_value_c(s: Sample, m: Option<Sample>) -> u32 {
    let Some(m) = m else {
        return s.argb;
    };
    match m.alpha {
        0 => 0,
        0xffff_ffff => s.argb,
        a => scale_c(s.argb, a),
    }
}

pub(crate) fn mask_alpha_c(s: Sample, m: Option<Sample>) -> u32 {
    let Some(m) = m else {
        return s.argb;
    };
    match m.alpha {
        0 => 0,
        0xffff_ffff => s.alpha,
        a => scale_c(s.alpha, a),
    }
}

pub(crate) fn src_c(s: Sample, m: Option<Sample>, _: u32) -> Option<u32> {
    Some(mask_value_c(s, m))
}

pub(crate) fn over_c(s: Sample, m: Option<Sample>, d: u32) -> Option<u32> {
    let cs = mask_c(s, m);
    match !cs.alpha {
        0xffff_ffff => None,
        0 => Some(cs.value),
        a => Some(over_c_math(cs.value, d, a)),
    }
}

pub(crate) fn over_reverse_c(s: Sample, m: Option<Sample>, d: u32) -> Option<u32> {
    let a = !alpha(d);
    if a == 0 {
        return None;
    }
    let s = mask_value_c(s, m);
    if a == 0xff {
        return Some(s);
    }
    Some(over(d, s, a))
}

pub(crate) fn in_c(s: Sample, m: Option<Sample>, d: u32) -> Option<u32> {
    Some(match alpha(d) {
        0 => 0,
        0xff => mask_value_c(s, m),
        a => scale(mask_value_c(s, m), a),
    })
}

pub(crate) fn in_reverse_c(s: Sample, m: Option<Sample>, d: u32) -> Option<u32> {
    match mask_alpha_c(s, m) {
        0xffff_ffff => None,
        0 => Some(0),
        a => Some(scale_c(d, a)),
    }
}

pub(crate) fn out_c(s: Sample, m: Option<Sample>, d: u32) -> Option<u32> {
    Some(match !alpha(d) {
        0 => 0,
        0xff => mask_value_c(s, m),
        a => scale(mask_value_c(s, m), a),
    })
}

pub(crate) fn out_reverse_c(s: Sample, m: Option<Sample>, d: u32) -> Option<u32> {
    match !mask_alpha_c(s, m) {
        0xffff_ffff => None,
        0 => Some(0),
        a => Some(scale_c(d, a)),
    }
}

pub(crate) fn atop_c(s: Sample, m: Option<Sample>, d: u32) -> Option<u32> {
    let cs = mask_c(s, m);
    Some(gen_c(d, cs.value, !cs.alpha, alpha(d)))
}

pub(crate) fn atop_reverse_c(s: Sample, m: Option<Sample>, d: u32) -> Option<u32> {
    let cs = mask_c(s, m);
    Some(gen_c(d, cs.value, cs.alpha, !alpha(d)))
}

pub(crate) fn xor_c(s: Sample, m: Option<Sample>, d: u32) -> Option<u32> {
    let cs = mask_c(s, m);
    Some(gen_c(d, cs.value, !cs.alpha, !alpha(d)))
}

pub(crate) fn add_c(s: Sample, m: Option<Sample>, d: u32) -> Option<u32> {
    let s = mask_value_c(s, m);
    if s == 0xffff_ffff {
        return Some(s);
    }
    (s != 0 && d != 0xffff_ffff).then(|| add(s, d))
}

/// Per channel: add while the source fits in the destination's free alpha, otherwise scale the
/// source down to fill it exactly.
pub(crate) fn saturate_c(s: Sample, m: Option<Sample>, d: u32) -> Option<u32> {
    let cs = mask_c(s, m);
    let da = !alpha(d);
    Some(map_channels(|shift| {
        let sc = channel(cs.value, shift);
        let dc = channel(d, shift);
        let sa = channel(cs.alpha, shift);
        if sa <= da {
            saturate(u16::from(sc) + u16::from(dc))
        } else {
            let f = ((u32::from(da) << 8) / u32::from(sa)) as u8;
            gen_channel(sc, dc, f, 0xff)
        }
    }))
}

/// Disjoint or conjoint operator described by `COMBINE` flags, with per-channel source factors.
pub(crate) fn general_c<const FAMILY: u8, const COMBINE: u8>(
    s: Sample,
    m: Option<Sample>,
    d: u32,
) -> Option<u32> {
    let cs = mask_c(s, m);
    let da = alpha(d);
    let fa = match COMBINE & A {
        A_OUT => map_channels(|sh| factor::out_part::<FAMILY>(channel(cs.alpha, sh), da)),
        A_IN => map_channels(|sh| factor::in_part::<FAMILY>(channel(cs.alpha, sh), da)),
        A => 0xffff_ffff,
        _ => 0,
    };
    let (_, fb) = factor::factors::<FAMILY>(COMBINE & !A, alpha(cs.alpha), da);
    Some(gen_c(cs.value, d, fa, fb))
}

#[cfg(test)]
#[path = "../../tests/unit/combine/component.rs"]
mod tests;
