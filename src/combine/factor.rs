//! Blend factors for the disjoint and conjoint operator families.
//!
//! Each operator is described by which of the four coverage areas keep a contribution: the part
//! of the source outside the destination (`A_OUT`), inside it (`A_IN`), and the same for the
//! destination (`B_OUT`, `B_IN`). The families differ in how they assume the two shapes overlap.
//! Factors use the truncating `int_div`, so results are reproducible but not exactly rounded.

use crate::foundation::math::int_div;

pub(crate) const A_OUT: u8 = 1;
pub(crate) const A_IN: u8 = 2;
pub(crate) const B_OUT: u8 = 4;
pub(crate) const B_IN: u8 = 8;

pub(crate) const A: u8 = A_OUT | A_IN;
pub(crate) const B: u8 = B_OUT | B_IN;
pub(crate) const A_OVER: u8 = A_OUT | B_OUT | A_IN;
pub(crate) const B_OVER: u8 = A_OUT | B_OUT | B_IN;
pub(crate) const A_ATOP: u8 = B_OUT | A_IN;
pub(crate) const B_ATOP: u8 = A_OUT | B_IN;
pub(crate) const XOR: u8 = A_OUT | B_OUT;

/// Overlap model, usable as a const generic parameter.
pub(crate) const DISJOINT: u8 = 0;
pub(crate) const CONJOINT: u8 = 1;

/// Portion of `a` not covered by `b`.
pub(crate) fn out_part<const FAMILY: u8>(a: u8, b: u8) -> u8 {
    if FAMILY == DISJOINT {
        disjoint_out_part(a, b)
    } else {
        conjoint_out_part(a, b)
    }
}

/// Portion of `a` covered by `b`.
pub(crate) fn in_part<const FAMILY: u8>(a: u8, b: u8) -> u8 {
    if FAMILY == DISJOINT {
        disjoint_in_part(a, b)
    } else {
        conjoint_in_part(a, b)
    }
}

/// `min(1, (1-b)/a)`.
pub(crate) fn disjoint_out_part(a: u8, b: u8) -> u8 {
    let nb = !b;
    if nb >= a {
        return 0xff;
    }
    int_div(nb, a)
}

/// `max(1 - (1-b)/a, 0)`.
pub(crate) fn disjoint_in_part(a: u8, b: u8) -> u8 {
    let nb = !b;
    if nb >= a {
        return 0;
    }
    !int_div(nb, a)
}

/// `max(1 - b/a, 0)`.
pub(crate) fn conjoint_out_part(a: u8, b: u8) -> u8 {
    if b >= a {
        return 0;
    }
    !int_div(b, a)
}

/// `min(1, b/a)`.
pub(crate) fn conjoint_in_part(a: u8, b: u8) -> u8 {
    if b >= a {
        return 0xff;
    }
    int_div(b, a)
}

/// Source and destination factors for `combine` given scalar alphas.
pub(crate) fn factors<const FAMILY: u8>(combine: u8, sa: u8, da: u8) -> (u8, u8) {
    let fa = match combine & A {
        A_OUT => out_part::<FAMILY>(sa, da),
        A_IN => in_part::<FAMILY>(sa, da),
        A => 0xff,
        _ => 0,
    };
    let fb = match combine & B {
        B_OUT => out_part::<FAMILY>(da, sa),
        B_IN => in_part::<FAMILY>(da, sa),
        B => 0xff,
        _ => 0,
    };
    (fa, fb)
}

#[cfg(test)]
#[path = "../../tests/unit/combine/factor.rs"]
mod tests;
