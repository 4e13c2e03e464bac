//! Storage formats: names, channel layouts and the per-format access functions.

pub(crate) mod codec;
pub(crate) mod descriptor;
