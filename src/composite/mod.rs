//! Region-driven compositing.
//!
//! The driver computes the destination region, splits it at repeat-tile edges and hands each
//! tile to a fast path or to the generic loop.

pub(crate) mod driver;
pub(crate) mod fastpath;
pub(crate) mod fill;
pub(crate) mod general;
