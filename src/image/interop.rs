use anyhow::Context as _;

use crate::format::descriptor::FormatName;
use crate::foundation::error::{PixcompError, PixcompResult};
use crate::foundation::math::int_mult;
use crate::image::surface::Image;

impl Image {
    /// Premultiply a straight-alpha RGBA buffer into a new `a8r8g8b8` image.
    pub fn from_rgba8(src: &::image::RgbaImage) -> PixcompResult<Self> {
        let (w, h) = src.dimensions();
        let mut img = Self::new(FormatName::A8r8g8b8, w, h)?;
        let stride = img.stride;
        for (y, row) in src.rows().enumerate() {
            let line = &mut img.data[y * stride..y * stride + w as usize * 4];
            for (px, out) in row.zip(line.chunks_exact_mut(4)) {
                let [r, g, b, a] = px.0;
                let argb = u32::from_be_bytes([a, int_mult(r, a), int_mult(g, a), int_mult(b, a)]);
                out.copy_from_slice(&argb.to_le_bytes());
            }
        }
        Ok(img)
    }

    /// Decode every pixel and unpremultiply into a straight-alpha RGBA buffer.
    pub fn to_rgba8(&self) -> PixcompResult<::image::RgbaImage> {
        let mut out = Vec::new();
        let len = self.width as usize * self.height as usize * 4;
        out.try_reserve_exact(len)
            .map_err(|e| PixcompError::allocation(format!("rgba8 buffer: {e}")))?;
        for y in 0..self.height {
            for x in 0..self.width {
                let [a, r, g, b] = self.pixel(x, y)?.to_be_bytes();
                out.extend_from_slice(&[unpremul(r, a), unpremul(g, a), unpremul(b, a), a]);
            }
        }
        let img = ::image::RgbaImage::from_raw(self.width, self.height, out)
            .context("rgba8 buffer does not match image dimensions")?;
        Ok(img)
    }
}

fn unpremul(c: u8, a: u8) -> u8 {
    if a == 0 {
        return 0;
    }
    let v = (u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a);
    v.min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/image/interop.rs"]
mod tests;
