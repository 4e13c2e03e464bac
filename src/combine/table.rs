//! Operator to combiner dispatch.

use crate::combine::component as c;
use crate::combine::factor::{
    A_ATOP, A_IN, A_OUT, A_OVER, B_ATOP, B_IN, B_OUT, B_OVER, CONJOINT, DISJOINT, XOR,
};
use crate::combine::op::Op;
use crate::combine::unified as u;
use crate::operand::cursor::Sample;

/// Per-pixel combine step. `None` leaves the destination untouched.
pub(crate) type CombineFn = fn(Sample, Option<Sample>, u32) -> Option<u32>;

fn unified(op: Op) -> CombineFn {
    match op {
        Op::Clear | Op::DisjointClear | Op::ConjointClear => u::clear,
        Op::Src | Op::DisjointSrc | Op::ConjointSrc => u::src,
        Op::Dst | Op::DisjointDst | Op::ConjointDst => u::dst,
        Op::Over => u::over_u,
        Op::OverReverse => u::over_reverse_u,
        Op::In => u::in_u,
        Op::InReverse => u::in_reverse_u,
        Op::Out => u::out_u,
        Op::OutReverse => u::out_reverse_u,
        Op::Atop => u::atop_u,
        Op::AtopReverse => u::atop_reverse_u,
        Op::Xor => u::xor_u,
        Op::Add => u::add_u,
        Op::Saturate => u::saturate_u,
        Op::DisjointOver => u::disjoint_over_u,
        Op::DisjointOverReverse => u::general_u::<DISJOINT, B_OVER>,
        Op::DisjointIn => u::general_u::<DISJOINT, A_IN>,
        Op::DisjointInReverse => u::general_u::<DISJOINT, B_IN>,
        Op::DisjointOut => u::general_u::<DISJOINT, A_OUT>,
        Op::DisjointOutReverse => u::general_u::<DISJOINT, B_OUT>,
        Op::DisjointAtop => u::general_u::<DISJOINT, A_ATOP>,
        Op::DisjointAtopReverse => u::general_u::<DISJOINT, B_ATOP>,
        Op::DisjointXor => u::general_u::<DISJOINT, XOR>,
        Op::ConjointOver => u::general_u::<CONJOINT, A_OVER>,
        Op::ConjointOverReverse => u::general_u::<CONJOINT, B_OVER>,
        Op::ConjointIn => u::general_u::<CONJOINT, A_IN>,
        Op::ConjointInReverse => u::general_u::<CONJOINT, B_IN>,
        Op::ConjointOut => u::general_u::<CONJOINT, A_OUT>,
        Op::ConjointOutReverse => u::general_u::<CONJOINT, B_OUT>,
        Op::ConjointAtop => u::general_u::<CONJOINT, A_ATOP>,
        Op::ConjointAtopReverse => u::general_u::<CONJOINT, B_ATOP>,
        Op::ConjointXor => u::general_u::<CONJOINT, XOR>,
    }
}

fn component(op: Op) -> CombineFn {
    match op {
        Op::Clear | Op::DisjointClear | Op::ConjointClear => u::clear,
        Op::Src | Op::DisjointSrc | Op::ConjointSrc => c::src_c,
        Op::Dst | Op::DisjointDst | Op::ConjointDst => u::dst,
        Op::Over => c::over_c,
        Op::OverReverse => c::over_reverse_c,
        Op::In => c::in_c,
        Op::InReverse => c::in_reverse_c,
        Op::Out => c::out_c,
        Op::OutReverse => c::out_reverse_c,
        Op::Atop => c::atop_c,
        Op::AtopReverse => c::atop_reverse_c,
        Op::Xor => c::xor_c,
        Op::Add => c::add_c,
        Op::Saturate => c::saturate_c,
        Op::DisjointOver => c::general_c::<DISJOINT, A_OVER>,
        Op::DisjointOverReverse => c::general_c::<DISJOINT, B_OVER>,
        Op::DisjointIn => c::general_c::<DISJOINT, A_IN>,
        Op::DisjointInReverse => c::general_c::<DISJOINT, B_IN>,
        Op::DisjointOut => c::general_c::<DISJOINT, A_OUT>,
        Op::DisjointOutReverse => c::general_c::<DISJOINT, B_OUT>,
        Op::DisjointAtop => c::general_c::<DISJOINT, A_ATOP>,
        Op::DisjointAtopReverse => c::general_c::<DISJOINT, B_ATOP>,
        Op::DisjointXor => c::general_c::<DISJOINT, XOR>,
        Op::ConjointOver => c::general_c::<CONJOINT, A_OVER>,
        Op::ConjointOverReverse => c::general_c::<CONJOINT, B_OVER>,
        Op::ConjointIn => c::general_c::<CONJOINT, A_IN>,
        Op::ConjointInReverse => c::general_c::<CONJOINT, B_IN>,
        Op::ConjointOut => c::general_c::<CONJOINT, A_OUT>,
        Op::ConjointOutReverse => c::general_c::<CONJOINT, B_OUT>,
        Op::ConjointAtop => c::general_c::<CONJOINT, A_ATOP>,
        Op::ConjointAtopReverse => c::general_c::<CONJOINT, B_ATOP>,
        Op::ConjointXor => c::general_c::<CONJOINT, XOR>,
    }
}

/// Combine step chosen once per composite call.
#[derive(Clone, Copy)]
pub(crate) struct Combiner {
    op: Op,
    component_alpha: bool,
    f: CombineFn,
}

impl std::fmt::Debug for Combiner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Combiner")
            .field("op", &self.op)
            .field("component_alpha", &self.component_alpha)
            .finish()
    }
}

impl Combiner {
    /// Combiner for `op`; the component-alpha table applies when the mask asks for it.
    pub(crate) fn new(op: Op, component_alpha: bool) -> Self {
        let f = if component_alpha {
            component(op)
        } else {
            unified(op)
        };
        Self {
            op,
            component_alpha,
            f,
        }
    }

    pub(crate) fn op(&self) -> Op {
        self.op
    }

    /// Value to store, or `None` to leave `d` as is.
    #[inline]
    pub(crate) fn combine(&self, s: Sample, m: Option<Sample>, d: u32) -> Option<u32> {
        (self.f)(s, m, d)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/combine/table.rs"]
mod tests;
