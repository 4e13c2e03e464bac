//! Trapezoid and triangle rasterization into alpha masks, and compositing through them.

pub(crate) mod area;
pub(crate) mod bounds;
pub(crate) mod composite;
pub(crate) mod rasterize;
pub(crate) mod rational;
