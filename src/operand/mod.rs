//! Format-agnostic pixel operands.

pub(crate) mod bind;
pub(crate) mod cursor;
