use crate::foundation::error::{FramescrubError, FramescrubResult};

pub use kurbo::{Rect, Size};

/// Zero-based position inside a loaded frame set.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub usize);

impl FrameIndex {
    /// Clamp into `[0, len - 1]`. An empty set clamps to 0.
    pub fn clamp_to(self, len: usize) -> Self {
        Self(self.0.min(len.saturating_sub(1)))
    }

    /// One-based frame number as used by asset file names.
    pub fn number(self) -> usize {
        self.0 + 1
    }
}

/// Vertical extent of a named layout region, in CSS pixels from the document top.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Region {
    pub top: f64,
    pub height: f64,
}

impl Region {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(self) -> f64 {
        self.top + self.height
    }
}

/// Logical viewport dimensions plus the reported device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
}

impl ViewportSize {
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> FramescrubResult<Self> {
        if !(width.is_finite() && width > 0.0) || !(height.is_finite() && height > 0.0) {
            return Err(FramescrubError::validation(format!(
                "viewport must have positive size, got {width}x{height}"
            )));
        }
        let device_pixel_ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        Ok(Self {
            width,
            height,
            device_pixel_ratio,
        })
    }

    pub fn aspect(self) -> f64 {
        self.width / self.height
    }

    pub fn logical_rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Measurements read from the live layout for a single scroll tick.
///
/// Snapshots are never cached beyond the tick they were taken for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutSnapshot {
    pub scroll_y: f64,
    pub viewport: ViewportSize,
    pub hero: Option<Region>,
    pub next: Option<Region>,
}

impl LayoutSnapshot {
    /// Both regions, or `None` when either is missing from the layout.
    pub fn regions(&self) -> Option<(Region, Region)> {
        Some((self.hero?, self.next?))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
