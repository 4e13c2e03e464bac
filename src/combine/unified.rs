//! Unified-alpha combiners: the mask contributes a single alpha per pixel.
//!
//! Every combiner takes the source sample, the optional mask sample and the destination
//! pixel, and returns the value to store, or `None` when the destination stays untouched.

use crate::combine::factor::{self, disjoint_out_part};
use crate::foundation::math::{add_u as add, alpha, gen_u, in_u as scale, over_u as over};
use crate::operand::cursor::Sample;

/// Source IN mask alpha.
pub(crate) fn mask_u(s: Sample, m: Option<Sample>) -> u32 {
    let Some(m) = m else {
        return s.argb;
    };
    match alpha(m.argb) {
        0 => 0,
        0xff => s.argb,
        a => scale(s.argb, a),
    }
}

/// Source alpha IN mask alpha, in the alpha byte only.
pub(crate) fn mask_alpha_u(s: Sample, m: Option<Sample>) -> u32 {
    let Some(m) = m else {
        return s.argb;
    };
    match alpha(m.argb) {
        0 => 0,
        0xff => s.argb,
        a => scale(s.argb & 0xff00_0000, a),
    }
}

pub(crate) fn clear(_: Sample, _: Option<Sample>, _: u32) -> Option<u32> {
    Some(0)
}

pub(crate) fn src(s: Sample, m: Option<Sample>, _: u32) -> Option<u32> {
    Some(mask_u(s, m))
}

pub(crate) fn dst(_: Sample, _: Option<Sample>, _: u32) -> Option<u32> {
    None
}

pub(crate) fn over_u(s: Sample, m: Option<Sample>, d: u32) -> Option<u32> {
    let s = mask_u(s, m);
    match !alpha(s) {
        0xff => None,
        0 => Some(s),
        a => Some(over(s, d, a)),
    }
}

pub(crate) fn over_reverse_u(s: Sample, m: Option<Sample>, d: u32) -> Option<u32> {
    let a = !alpha(d);
    if a == 0 {
        return None;
    }
    let s = mask_u(s, m);
    if a == 0xff {
        return Some(s);
    }
    Some(over(d, s, a))
}

pub(crate) fn in_u(s: Sample, m: Option<Sample>, d: u32) -> Option<u32> {
    Some(match alpha(d) {
        0 => 0,
        0xff => mask_u(s, m),
        a => scale(mask_u(s, m), a),
    })
}

pub(crate) fn in_reverse_u(s: Sample, m: Option<Sample>, d: u32) -> Option<u32> {
    match alpha(mask_alpha_u(s, m)) {
        0xff => None,
        0 => Some(0),
        a => Some(scale(d, a)),
    }
}

pub(crate) fn out_u(s: Sample, m: Option<Sample>, d: u32) -> Option<u32> {
    Some(match !alpha(d) {
        0 => 0,
        0xff => mask_u(s, m),
        a => scale(mask_u(s, m), a),
    })
}

pub(crate) fn out_reverse_u(s: Sample, m: Option<Sample>, d: u32) -> Option<u32> {
    match !alpha(mask_alpha_u(s, m)) {
        0xff => None,
        0 => Some(0),
        a => Some(scale(d, a)),
    }
}

pub(crate) fn atop_u(s: Sample, m: Option<Sample>, d: u32) -> Option<u32> {
    let s = mask_u(s, m);
    Some(gen_u(s, d, alpha(d), !alpha(s)))
}

pub(crate) fn atop_reverse_u(s: Sample, m: Option<Sample>, d: u32) -> Option<u32> {
    let s = mask_u(s, m);
    Some(gen_u(s, d, !alpha(d), alpha(s)))
}

pub(crate) fn xor_u(s: Sample, m: Option<Sample>, d: u32) -> Option<u32> {
    let s = mask_u(s, m);
    Some(gen_u(s, d, !alpha(d), !alpha(s)))
}

pub(crate) fn add_u(s: Sample, m: Option<Sample>, d: u32) -> Option<u32> {
    let s = mask_u(s, m);
    if s == 0xffff_ffff {
        return Some(s);
    }
    (s != 0 && d != 0xffff_ffff).then(|| add(s, d))
}

pub(crate) fn saturate_u(s: Sample, m: Option<Sample>, d: u32) -> Option<u32> {
    let s = mask_u(s, m);
    let sa = alpha(s);
    (sa == 0xff || sa > alpha(d)).then_some(s)
}

/// Short form of disjoint OVER: the destination keeps the part the source leaves uncovered.
pub(crate) fn disjoint_over_u(s: Sample, m: Option<Sample>, d: u32) -> Option<u32> {
    let s = mask_u(s, m);
    match alpha(s) {
        0 => None,
        0xff => Some(s),
        a => Some(over(s, d, disjoint_out_part(alpha(d), a))),
    }
}

/// Disjoint or conjoint operator described by `COMBINE` flags.
pub(crate) fn general_u<const FAMILY: u8, const COMBINE: u8>(
    s: Sample,
    m: Option<Sample>,
    d: u32,
) -> Option<u32> {
    let s = mask_u(s, m);
    let (fa, fb) = factor::factors::<FAMILY>(COMBINE, alpha(s), alpha(d));
    Some(gen_u(s, d, fa, fb))
}

#[cfg(test)]
#[path = "../../tests/unit/combine/unified.rs"]
mod tests;
