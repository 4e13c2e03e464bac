//! Rectangle sets and the clip arithmetic of a composite call.

pub(crate) mod boxes;
pub(crate) mod clip;
