use crate::{
    foundation::core::{Rect, ViewportSize},
    foundation::error::{FramescrubError, FramescrubResult},
    render::composite::{PremulRgba8, unpremultiply},
};

const MAX_DIM: u32 = 16_384;

/// Full-viewport drawing surface backed by premultiplied RGBA8 pixels.
///
/// The backing store is the logical viewport scaled by `min(device_pixel_ratio, dpr_cap)`.
#[derive(Clone, Debug)]
pub struct Surface {
    viewport: ViewportSize,
    scale: f64,
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Surface {
    pub fn new(viewport: ViewportSize, dpr_cap: f64) -> FramescrubResult<Self> {
        let mut out = Self {
            viewport,
            scale: 1.0,
            width: 0,
            height: 0,
            data: Vec::new(),
        };
        out.resize(viewport, dpr_cap)?;
        Ok(out)
    }

    /// Recompute backing dimensions for a new viewport. Returns whether the store was reallocated.
    ///
    /// Pixel contents are cleared whenever the dimensions change.
    pub fn resize(&mut self, viewport: ViewportSize, dpr_cap: f64) -> FramescrubResult<bool> {
        if !(dpr_cap.is_finite() && dpr_cap > 0.0) {
            return Err(FramescrubError::validation("dpr_cap must be finite and > 0"));
        }
        let scale = viewport.device_pixel_ratio.min(dpr_cap);
        let to_px = |v: f64| -> FramescrubResult<u32> {
            let px = (v * scale).round().max(1.0);
            if !px.is_finite() || px > f64::from(MAX_DIM) {
                return Err(FramescrubError::render(format!(
                    "surface dimension {px} exceeds {MAX_DIM}"
                )));
            }
            Ok(px as u32)
        };
        let width = to_px(viewport.width)?;
        let height = to_px(viewport.height)?;

        self.viewport = viewport;
        self.scale = scale;
        if width == self.width && height == self.height {
            return Ok(false);
        }
        self.width = width;
        self.height = height;
        self.data = vec![0u8; width as usize * height as usize * 4];
        tracing::debug!(width, height, scale, "surface resized");
        Ok(true)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Device pixels per logical pixel actually applied.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    /// The viewport in logical pixels.
    pub fn logical_rect(&self) -> Rect {
        self.viewport.logical_rect()
    }

    /// Premultiplied RGBA8 bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn clear(&mut self, rgba: PremulRgba8) {
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<PremulRgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Export as straight-alpha RGBA, with every pixel's alpha scaled by `opacity`.
    ///
    /// `opacity` mirrors the style opacity a host applies to the presented surface.
    pub fn to_rgba_image(&self, opacity: f64) -> FramescrubResult<image::RgbaImage> {
        let op = crate::foundation::math::opacity_to_u8(opacity as f32);
        let mut out = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            let mut straight = unpremultiply([px[0], px[1], px[2], px[3]]);
            straight[3] = crate::foundation::math::mul_div255_u8(u16::from(straight[3]), op);
            out.extend_from_slice(&straight);
        }
        image::RgbaImage::from_raw(self.width, self.height, out)
            .ok_or_else(|| FramescrubError::render("surface buffer does not match its size"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
