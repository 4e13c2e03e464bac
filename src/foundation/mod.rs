//! Shared building blocks: errors, geometry, fixed-point values, options and channel math.

pub(crate) mod config;
pub(crate) mod core;
pub(crate) mod error;
pub(crate) mod fixed;
pub(crate) mod math;
