//! pixcomp composites premultiplied pixels and rasterizes trapezoids into coverage masks.
//!
//! The public surface is small:
//!
//! - Describe pixels with an [`Image`] in one of the [`FormatName`] storage formats
//! - Combine images with [`composite`] (or a configured [`Compositor`]) under one of the
//!   Porter-Duff [`Op`]s
//! - Build anti-aliased coverage with [`rasterize_trapezoid`], or draw shapes directly with
//!   [`composite_trapezoids`] and the triangle entry points
//!
//! Every channel computation is exact 8-bit integer arithmetic, so results are reproducible
//! across platforms and between the specialized and generic compositing loops.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod combine;
pub(crate) mod composite;
pub(crate) mod format;
pub(crate) mod image;
pub(crate) mod operand;
pub(crate) mod region;
pub(crate) mod trap;

pub use crate::foundation::config::{CompositeOpts, FAST_PATHS_ENV, TrapezoidOpts};
pub use crate::foundation::core::{
    Affine, IntBox, IntPoint, IntRect, LineFixed, Point, PointFixed, Trapezoid, Triangle,
};
pub use crate::foundation::error::{PixcompError, PixcompResult};
pub use crate::foundation::fixed::Fixed;

pub use crate::combine::op::Op;
pub use crate::composite::driver::{CompositeArea, Compositor, composite};
pub use crate::composite::fill::{fill_rectangle, fill_rectangles};
pub use crate::format::codec::is_registered;
pub use crate::format::descriptor::{Channel, FormatName, FormatType, PixelFormat};
pub use crate::image::color::Color;
pub use crate::image::surface::{Filter, Image, MAX_DIMENSION, min_stride};
pub use crate::region::boxes::Region;
pub use crate::trap::bounds::{line_fixed_x, trapezoid_bounds, triangle_bounds};
pub use crate::trap::composite::{
    composite_trapezoids, composite_tri_fan, composite_tri_strip, composite_triangles,
    create_alpha_mask,
};
pub use crate::trap::rasterize::{rasterize_trapezoid, rasterize_triangle};
