use crate::format::codec::{self, read_raw, write_raw};
use crate::format::descriptor::FormatName;
use crate::foundation::core::{Affine, IntBox, IntPoint};
use crate::foundation::error::{PixcompError, PixcompResult};
use crate::region::boxes::Region;

/// Largest width or height an image may have.
pub const MAX_DIMENSION: u32 = 32767;

/// Sampling filter recorded alongside a transform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    /// Fastest available.
    Fast,
    /// Balanced quality.
    Good,
    /// Highest quality.
    Best,
    /// Nearest neighbour.
    #[default]
    Nearest,
    /// Bilinear interpolation.
    Bilinear,
}

/// Pixel buffer plus the state that controls how it is composited.
///
/// Image coordinates are relative to the buffer origin: image pixel `(0, 0)` is buffer pixel
/// `(origin.x, origin.y)`. Clip regions and alpha-map origins are in image coordinates.
#[derive(Clone, Debug)]
pub struct Image {
    pub(crate) format: FormatName,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) stride: usize,
    pub(crate) origin: IntPoint,
    pub(crate) data: Vec<u8>,
    pub(crate) repeat: bool,
    pub(crate) component_alpha: bool,
    pub(crate) alpha_map: Option<Box<Image>>,
    pub(crate) alpha_origin: IntPoint,
    pub(crate) clip: Option<Region>,
    pub(crate) clip_origin: IntPoint,
    pub(crate) transform: Option<Affine>,
    pub(crate) filter: Filter,
}

/// Minimum row size in bytes, rounded up to whole 32-bit words.
pub fn min_stride(format: FormatName, width: u32) -> usize {
    let bits = u64::from(width) * u64::from(format.bpp());
    (bits.div_ceil(32) * 4) as usize
}

pub(crate) fn alloc_zeroed(len: usize) -> PixcompResult<Vec<u8>> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|e| PixcompError::allocation(format!("pixel buffer of {len} bytes: {e}")))?;
    data.resize(len, 0);
    Ok(data)
}

fn check_dimensions(width: u32, height: u32) -> PixcompResult<()> {
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(PixcompError::validation(format!(
            "image size {width}x{height} exceeds {MAX_DIMENSION}x{MAX_DIMENSION}"
        )));
    }
    Ok(())
}

impl Image {
    /// Create a zero-filled image.
    pub fn new(format: FormatName, width: u32, height: u32) -> PixcompResult<Self> {
        check_dimensions(width, height)?;
        let stride = min_stride(format, width);
        let data = alloc_zeroed(stride * height as usize)?;
        Ok(Self::with_parts(format, width, height, stride, data))
    }

    /// Wrap an existing buffer whose rows are `stride` bytes apart.
    pub fn from_data(
        format: FormatName,
        width: u32,
        height: u32,
        stride: usize,
        data: Vec<u8>,
    ) -> PixcompResult<Self> {
        check_dimensions(width, height)?;
        if stride < min_stride(format, width) {
            return Err(PixcompError::validation(format!(
                "stride {stride} too small for {width} {format} pixels"
            )));
        }
        let needed = stride
            .checked_mul(height as usize)
            .ok_or_else(|| PixcompError::validation("buffer size overflows"))?;
        if data.len() < needed {
            return Err(PixcompError::validation(format!(
                "buffer holds {} bytes, {needed} required",
                data.len()
            )));
        }
        Ok(Self::with_parts(format, width, height, stride, data))
    }

    fn with_parts(
        format: FormatName,
        width: u32,
        height: u32,
        stride: usize,
        data: Vec<u8>,
    ) -> Self {
        Self {
            format,
            width,
            height,
            stride,
            origin: IntPoint::default(),
            data,
            repeat: false,
            component_alpha: false,
            alpha_map: None,
            alpha_origin: IntPoint::default(),
            clip: None,
            clip_origin: IntPoint::default(),
            transform: None,
            filter: Filter::default(),
        }
    }

    /// Treat the `width x height` block at buffer pixel `origin` as the image.
    ///
    /// The block must lie inside the buffer.
    pub fn with_origin(mut self, origin: IntPoint) -> PixcompResult<Self> {
        let bpp = u64::from(self.format.bpp().max(1));
        let buffer_w = (self.stride as u64 * 8) / bpp;
        let buffer_h = if self.stride == 0 {
            0
        } else {
            (self.data.len() / self.stride) as u64
        };
        let fits = origin.x >= 0
            && origin.y >= 0
            && origin.x as u64 + u64::from(self.width) <= buffer_w
            && origin.y as u64 + u64::from(self.height) <= buffer_h;
        if !fits {
            return Err(PixcompError::validation(format!(
                "origin ({}, {}) puts {}x{} image outside its buffer",
                origin.x, origin.y, self.width, self.height
            )));
        }
        self.origin = origin;
        Ok(self)
    }

    /// Storage format.
    pub fn format(&self) -> FormatName {
        self.format
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row size in bytes.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Buffer position of image pixel `(0, 0)`.
    pub fn origin(&self) -> IntPoint {
        self.origin
    }

    /// Raw buffer.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Raw buffer, mutable.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Give the buffer back to the caller.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Whether reads outside the image wrap around.
    pub fn repeat(&self) -> bool {
        self.repeat
    }

    /// Enable or disable tiling.
    pub fn set_repeat(&mut self, repeat: bool) {
        self.repeat = repeat;
    }

    /// Return `self` with tiling enabled or disabled.
    pub fn with_repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }

    /// Whether a mask applies per channel.
    pub fn component_alpha(&self) -> bool {
        self.component_alpha
    }

    /// Select per-channel mask application.
    pub fn set_component_alpha(&mut self, on: bool) {
        self.component_alpha = on;
    }

    /// Separate alpha image, if any.
    pub fn alpha_map(&self) -> Option<&Image> {
        self.alpha_map.as_deref()
    }

    /// Offset of the alpha map relative to this image.
    pub fn alpha_origin(&self) -> IntPoint {
        self.alpha_origin
    }

    /// Attach or remove a separate alpha image.
    ///
    /// The alpha map must carry alpha and must not have an alpha map of its own.
    pub fn set_alpha_map(&mut self, map: Option<Image>, origin: IntPoint) -> PixcompResult<()> {
        if let Some(m) = &map {
            if !m.format.has_alpha() {
                return Err(PixcompError::validation(format!(
                    "alpha map format {} has no alpha channel",
                    m.format
                )));
            }
            if m.alpha_map.is_some() {
                return Err(PixcompError::validation("alpha maps cannot be nested"));
            }
        }
        self.alpha_map = map.map(Box::new);
        self.alpha_origin = origin;
        Ok(())
    }

    /// Detach the alpha map and return it.
    pub fn take_alpha_map(&mut self) -> Option<Image> {
        self.alpha_map.take().map(|b| *b)
    }

    /// Client clip, in image coordinates before `clip_origin` is applied.
    pub fn clip_region(&self) -> Option<&Region> {
        self.clip.as_ref()
    }

    /// Offset applied to the client clip.
    pub fn clip_origin(&self) -> IntPoint {
        self.clip_origin
    }

    /// Replace the client clip. `None` means unclipped.
    pub fn set_clip_region(&mut self, clip: Option<Region>) {
        self.clip = clip;
    }

    /// Move the client clip.
    pub fn set_clip_origin(&mut self, origin: IntPoint) {
        self.clip_origin = origin;
    }

    /// Source transform; recorded but never resampled through.
    pub fn transform(&self) -> Option<Affine> {
        self.transform
    }

    /// Set or clear the transform. The identity is stored as no transform.
    pub fn set_transform(&mut self, transform: Option<Affine>) {
        self.transform = transform.filter(|t| *t != Affine::IDENTITY);
    }

    /// Sampling filter.
    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Select the sampling filter.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Image bounds as a box.
    pub fn bounds(&self) -> IntBox {
        IntBox::new(0, 0, self.width as i32, self.height as i32)
    }

    /// 1x1 repeating image without transform or alpha map, readable as one constant.
    pub fn is_solid(&self) -> bool {
        self.repeat
            && self.width == 1
            && self.height == 1
            && self.transform.is_none()
            && self.alpha_map.is_none()
    }

    /// Pixels that may be read or written: the image bounds intersected with the
    /// client clip shifted by `clip_origin`.
    pub fn composite_clip(&self) -> PixcompResult<Region> {
        let full = Region::from_box(self.bounds());
        match &self.clip {
            None => Ok(full),
            Some(clip) => clip
                .translated(self.clip_origin.x, self.clip_origin.y)
                .intersect(&full),
        }
    }

    fn codec(&self) -> PixcompResult<&'static codec::FormatCodec> {
        codec::lookup(self.format).ok_or_else(|| {
            PixcompError::unsupported_format(format!("no pixel access for {}", self.format))
        })
    }

    fn check_inside(&self, x: u32, y: u32) -> PixcompResult<()> {
        if x >= self.width || y >= self.height {
            return Err(PixcompError::validation(format!(
                "pixel ({x}, {y}) outside {}x{} image",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Pixel `(x, y)` as premultiplied `0xAARRGGBB`.
    pub fn pixel(&self, x: u32, y: u32) -> PixcompResult<u32> {
        let codec = self.codec()?;
        self.check_inside(x, y)?;
        let fmt = self.format.descriptor();
        let (row, px) = self.locate(x as i64, y as i64);
        Ok((codec.fetch)(&fmt, row, px))
    }

    /// Store premultiplied `0xAARRGGBB` at `(x, y)`, truncated to the format.
    pub fn set_pixel(&mut self, x: u32, y: u32, argb: u32) -> PixcompResult<()> {
        let codec = self.codec()?;
        self.check_inside(x, y)?;
        let fmt = self.format.descriptor();
        let (start, px) = self.row_start(x as i64, y as i64);
        let row = self.data.get_mut(start..).unwrap_or_default();
        (codec.store)(&fmt, row, px, argb);
        Ok(())
    }

    /// Raw bits of pixel `(x, y)` at native depth; 0 outside the image.
    pub(crate) fn raw(&self, x: i64, y: i64) -> u32 {
        if !self.raw_inside(x, y) {
            return 0;
        }
        let (row, px) = self.locate(x, y);
        read_raw(row, px, self.format.bpp())
    }

    /// Write raw bits of pixel `(x, y)`; ignored outside the image.
    pub(crate) fn set_raw(&mut self, x: i64, y: i64, v: u32) {
        if !self.raw_inside(x, y) {
            return;
        }
        let bpp = self.format.bpp();
        let (start, px) = self.row_start(x, y);
        if let Some(row) = self.data.get_mut(start..) {
            write_raw(row, px, bpp, v);
        }
    }

    fn raw_inside(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width) && y < i64::from(self.height)
    }

    fn row_start(&self, x: i64, y: i64) -> (usize, usize) {
        let by = (y + i64::from(self.origin.y)) as usize;
        let bx = (x + i64::from(self.origin.x)) as usize;
        (by * self.stride, bx)
    }

    fn locate(&self, x: i64, y: i64) -> (&[u8], usize) {
        let (start, px) = self.row_start(x, y);
        (self.data.get(start..).unwrap_or_default(), px)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/image/surface.rs"]
mod tests;
