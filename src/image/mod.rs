//! Caller-owned pixel images and colours.

pub(crate) mod color;
pub(crate) mod interop;
pub(crate) mod surface;
