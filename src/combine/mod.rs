//! Per-pixel Porter-Duff combiners.
//!
//! [`op::Op`] names the operators; [`table::Combiner`] picks the unified or component-alpha
//! implementation for one composite call.

pub(crate) mod component;
pub(crate) mod factor;
pub(crate) mod op;
pub(crate) mod table;
pub(crate) mod unified;
