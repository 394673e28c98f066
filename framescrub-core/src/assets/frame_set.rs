use std::sync::Arc;

use crate::foundation::{
    core::FrameIndex,
    error::{FramescrubError, FramescrubResult},
};

/// Where a slot's pixels came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOrigin {
    /// Decoded from the frame asset.
    Decoded,
    /// Generated because the asset failed to load.
    Placeholder,
}

#[derive(Clone, Debug)]
/// Raster frame in premultiplied RGBA8 form.
pub struct PreparedFrame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
    pub origin: FrameOrigin,
}

impl PreparedFrame {
    pub fn aspect(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height.max(1))
    }

    pub fn is_placeholder(&self) -> bool {
        self.origin == FrameOrigin::Placeholder
    }

    #[inline]
    pub(crate) fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let p = &self.rgba8_premul[i..i + 4];
        [p[0], p[1], p[2], p[3]]
    }
}

/// Settled/total counters shown by the loading overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct LoadProgress {
    pub settled: usize,
    pub total: usize,
    /// Settled slots that hold a placeholder.
    pub placeholders: usize,
}

impl LoadProgress {
    pub fn fraction(self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.settled as f64 / self.total as f64
    }

    /// Whole-number percentage, rounded down.
    pub fn percent(self) -> u8 {
        (self.fraction() * 100.0).floor().clamp(0.0, 100.0) as u8
    }

    pub fn is_complete(self) -> bool {
        self.settled >= self.total
    }

    pub fn overlay_label(self) -> String {
        format!("Loading 3D Animation... {}/{}", self.settled, self.total)
    }
}

/// Fixed-length slot array filled by index while frames load.
///
/// Each slot is written at most once; [`FrameSetBuilder::finish`] refuses to build while any slot is
/// still empty.
#[derive(Debug)]
pub struct FrameSetBuilder {
    slots: Vec<Option<Arc<PreparedFrame>>>,
    placeholders: usize,
}

impl FrameSetBuilder {
    pub fn new(len: usize) -> FramescrubResult<Self> {
        if len == 0 {
            return Err(FramescrubError::validation("frame set length must be >= 1"));
        }
        Ok(Self {
            slots: vec![None; len],
            placeholders: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn fill(&mut self, index: FrameIndex, frame: PreparedFrame) -> FramescrubResult<()> {
        let len = self.slots.len();
        let slot = self.slots.get_mut(index.0).ok_or_else(|| {
            FramescrubError::validation(format!("slot {} out of range for {len} frames", index.0))
        })?;
        if slot.is_some() {
            return Err(FramescrubError::validation(format!(
                "slot {} already filled",
                index.0
            )));
        }
        if frame.is_placeholder() {
            self.placeholders += 1;
        }
        *slot = Some(Arc::new(frame));
        Ok(())
    }

    pub fn progress(&self) -> LoadProgress {
        LoadProgress {
            settled: self.slots.iter().filter(|s| s.is_some()).count(),
            total: self.slots.len(),
            placeholders: self.placeholders,
        }
    }

    pub fn finish(self) -> FramescrubResult<FrameSet> {
        let mut frames = Vec::with_capacity(self.slots.len());
        for (i, slot) in self.slots.into_iter().enumerate() {
            let frame =
                slot.ok_or_else(|| FramescrubError::asset(format!("slot {i} never settled")))?;
            frames.push(frame);
        }
        Ok(FrameSet {
            frames,
            placeholders: self.placeholders,
        })
    }
}

/// Immutable, index-complete sequence of frames.
#[derive(Clone, Debug)]
pub struct FrameSet {
    frames: Vec<Arc<PreparedFrame>>,
    placeholders: usize,
}

impl FrameSet {
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn get(&self, index: FrameIndex) -> Option<&PreparedFrame> {
        self.frames.get(index.0).map(Arc::as_ref)
    }

    /// Frame at `index` clamped into range.
    pub fn get_clamped(&self, index: FrameIndex) -> &PreparedFrame {
        &self.frames[index.clamp_to(self.frames.len()).0]
    }

    pub fn placeholder_count(&self) -> usize {
        self.placeholders
    }

    pub fn iter(&self) -> impl Iterator<Item = &PreparedFrame> {
        self.frames.iter().map(Arc::as_ref)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/frame_set.rs"]
mod tests;
