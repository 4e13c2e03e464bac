//! Composite-region computation.
//!
//! All clips are expressed in destination coordinates before they are intersected. A source
//! pixel `p` lands on destination pixel `p + (dst - src)`; an alpha-map pixel `q` belongs to
//! its owner's pixel `q + alpha_origin`.

use crate::foundation::core::{IntBox, IntPoint};
use crate::foundation::error::PixcompResult;
use crate::image::surface::Image;
use crate::region::boxes::Region;

/// Clamp a coordinate to the 16-bit range regions are built in.
pub(crate) fn clamp_short(v: i64) -> i32 {
    v.clamp(i64::from(i16::MIN), i64::from(i16::MAX)) as i32
}

/// Destination box of a `width x height` composite at `at`, clamped to 16 bits.
pub(crate) fn destination_box(at: IntPoint, width: u32, height: u32) -> IntBox {
    let x = i64::from(at.x);
    let y = i64::from(at.y);
    IntBox::new(
        clamp_short(x),
        clamp_short(y),
        clamp_short(x + i64::from(width)),
        clamp_short(y + i64::from(height)),
    )
}

/// Restrict `region` to the pixels a source (or mask) placed with offset `(dx, dy)` can supply.
///
/// Transformed images are not clipped. Repeating images tile the plane, so only their client
/// clip applies.
pub(crate) fn clip_source(
    region: &Region,
    image: &Image,
    dx: i32,
    dy: i32,
) -> PixcompResult<Region> {
    if image.transform.is_some() {
        return Ok(region.clone());
    }
    if image.repeat {
        return match &image.clip {
            None => Ok(region.clone()),
            Some(clip) => region.intersect(&clip.translated(
                dx.saturating_add(image.clip_origin.x),
                dy.saturating_add(image.clip_origin.y),
            )),
        };
    }
    region.intersect(&image.composite_clip()?.translated(dx, dy))
}

/// Clip against a source and, when present, its alpha map.
fn clip_operand(region: Region, image: &Image, dx: i32, dy: i32) -> PixcompResult<Region> {
    let region = clip_source(&region, image, dx, dy)?;
    match &image.alpha_map {
        Some(map) if !region.is_empty() => clip_source(
            &region,
            map,
            dx.saturating_add(image.alpha_origin.x),
            dy.saturating_add(image.alpha_origin.y),
        ),
        _ => Ok(region),
    }
}

/// Clip against the destination's composite clip and its alpha map's.
fn clip_destination(region: Region, dst: &Image) -> PixcompResult<Region> {
    let region = region.intersect(&dst.composite_clip()?)?;
    match &dst.alpha_map {
        Some(map) if !region.is_empty() => region.intersect(
            &map.composite_clip()?
                .translated(dst.alpha_origin.x, dst.alpha_origin.y),
        ),
        _ => Ok(region),
    }
}

/// Destination pixels touched by a composite, in destination coordinates.
pub(crate) fn composite_region(
    src: (&Image, IntPoint),
    mask: Option<(&Image, IntPoint)>,
    dst: (&Image, IntPoint),
    width: u32,
    height: u32,
) -> PixcompResult<Region> {
    let (dst_image, dst_at) = dst;
    let region = Region::from_box(destination_box(dst_at, width, height));
    if region.is_empty() {
        return Ok(region);
    }

    let offset = |at: IntPoint| {
        (
            dst_at.x.saturating_sub(at.x),
            dst_at.y.saturating_sub(at.y),
        )
    };

    let (src_image, src_at) = src;
    let (dx, dy) = offset(src_at);
    let mut region = clip_operand(region, src_image, dx, dy)?;

    if let Some((mask_image, mask_at)) = mask
        && !region.is_empty()
    {
        let (dx, dy) = offset(mask_at);
        region = clip_operand(region, mask_image, dx, dy)?;
    }

    if region.is_empty() {
        return Ok(region);
    }
    clip_destination(region, dst_image)
}

#[cfg(test)]
#[path = "../../tests/unit/region/clip.rs"]
mod tests;
