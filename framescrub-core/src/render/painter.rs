use crate::{
    assets::frame_set::{FrameSet, PreparedFrame},
    device::tier::Smoothing,
    foundation::core::Rect,
    foundation::error::FramescrubResult,
    render::{
        composite::{PremulRgba8, over},
        fit::{FitMode, fit_rect},
        surface::Surface,
    },
    scroll::resolver::FramePick,
};

/// Paints frames onto a [`Surface`]. Holds no playback state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceRenderer {
    pub fit: FitMode,
    pub smoothing: Smoothing,
    /// Fill used when no frames are available yet.
    pub empty_fill: PremulRgba8,
}

impl SurfaceRenderer {
    pub fn new(fit: FitMode, smoothing: Smoothing) -> Self {
        Self {
            fit,
            smoothing,
            empty_fill: [0, 0, 0, 255],
        }
    }

    /// Paint `pick` from `frames`, or the empty fill when `frames` is `None` or empty.
    pub fn paint(
        &self,
        frames: Option<&FrameSet>,
        pick: FramePick,
        surface: &mut Surface,
    ) -> FramescrubResult<()> {
        let Some(frames) = frames.filter(|f| !f.is_empty()) else {
            surface.clear(self.empty_fill);
            return Ok(());
        };

        surface.clear([0, 0, 0, 0]);
        let base = frames.get_clamped(pick.base);
        if pick.is_blended() {
            let next = frames.get_clamped(pick.next);
            self.draw_frame(surface, base, 1.0 - pick.blend);
            self.draw_frame(surface, next, pick.blend);
        } else {
            self.draw_frame(surface, base, 1.0);
        }
        Ok(())
    }

    /// Device-pixel rectangle `frame` is drawn into.
    pub fn draw_rect(&self, frame: &PreparedFrame, surface: &Surface) -> Rect {
        let logical = fit_rect(
            f64::from(frame.width),
            f64::from(frame.height),
            surface.logical_rect(),
            self.fit,
        );
        logical.scale_from_origin(surface.scale())
    }

    fn draw_frame(&self, surface: &mut Surface, frame: &PreparedFrame, alpha: f32) {
        if alpha <= 0.0 || frame.width == 0 || frame.height == 0 {
            return;
        }
        let dest = self.draw_rect(frame, surface);
        let (sw, sh) = (surface.width(), surface.height());

        let x_start = dest.x0.max(0.0).floor() as u32;
        let y_start = dest.y0.max(0.0).floor() as u32;
        let x_end = (dest.x1.min(f64::from(sw)).ceil().max(0.0) as u32).min(sw);
        let y_end = (dest.y1.min(f64::from(sh)).ceil().max(0.0) as u32).min(sh);
        if x_start >= x_end || y_start >= y_end {
            return;
        }

        // Source texels per destination pixel.
        let kx = f64::from(frame.width) / dest.width();
        let ky = f64::from(frame.height) / dest.height();
        let stride = sw as usize * 4;
        let data = surface.data_mut();

        for y in y_start..y_end {
            let v = (f64::from(y) + 0.5 - dest.y0) * ky;
            let row = &mut data[y as usize * stride..(y as usize + 1) * stride];
            for x in x_start..x_end {
                let u = (f64::from(x) + 0.5 - dest.x0) * kx;
                if u < 0.0 || v < 0.0 || u > f64::from(frame.width) || v > f64::from(frame.height) {
                    continue;
                }
                let src = match self.smoothing {
                    Smoothing::Off => sample_nearest(frame, u, v),
                    Smoothing::Low => sample_bilinear(frame, u, v),
                    Smoothing::High => sample_supersampled(frame, u, v, kx, ky),
                };
                let i = x as usize * 4;
                let d = [row[i], row[i + 1], row[i + 2], row[i + 3]];
                row[i..i + 4].copy_from_slice(&over(d, src, alpha));
            }
        }
    }
}

fn sample_nearest(frame: &PreparedFrame, u: f64, v: f64) -> PremulRgba8 {
    let x = (u.floor() as i64).clamp(0, i64::from(frame.width) - 1) as u32;
    let y = (v.floor() as i64).clamp(0, i64::from(frame.height) - 1) as u32;
    frame.pixel(x, y)
}

fn sample_bilinear(frame: &PreparedFrame, u: f64, v: f64) -> PremulRgba8 {
    let max_x = f64::from(frame.width - 1);
    let max_y = f64::from(frame.height - 1);
    let fx = (u - 0.5).clamp(0.0, max_x);
    let fy = (v - 0.5).clamp(0.0, max_y);
    let x0 = fx.floor() as u32;
    let y0 = fy.floor() as u32;
    let x1 = (x0 + 1).min(frame.width - 1);
    let y1 = (y0 + 1).min(frame.height - 1);
    let tx = (fx - f64::from(x0)) as f32;
    let ty = (fy - f64::from(y0)) as f32;

    let p00 = frame.pixel(x0, y0);
    let p10 = frame.pixel(x1, y0);
    let p01 = frame.pixel(x0, y1);
    let p11 = frame.pixel(x1, y1);

    let mut out = [0u8; 4];
    for c in 0..4 {
        let top = f32::from(p00[c]) * (1.0 - tx) + f32::from(p10[c]) * tx;
        let bottom = f32::from(p01[c]) * (1.0 - tx) + f32::from(p11[c]) * tx;
        out[c] = (top * (1.0 - ty) + bottom * ty).round().clamp(0.0, 255.0) as u8;
    }
    out
}

fn sample_supersampled(frame: &PreparedFrame, u: f64, v: f64, kx: f64, ky: f64) -> PremulRgba8 {
    let (dx, dy) = (kx * 0.25, ky * 0.25);
    let taps = [
        sample_bilinear(frame, u - dx, v - dy),
        sample_bilinear(frame, u + dx, v - dy),
        sample_bilinear(frame, u - dx, v + dy),
        sample_bilinear(frame, u + dx, v + dy),
    ];
    let mut out = [0u8; 4];
    for c in 0..4 {
        let sum: u16 = taps.iter().map(|t| u16::from(t[c])).sum();
        out[c] = ((sum + 2) / 4) as u8;
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/painter.rs"]
mod tests;
