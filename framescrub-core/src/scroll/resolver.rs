use crate::foundation::{core::FrameIndex, math::clamp01};

/// How progress is turned into frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolveMode {
    /// One frame, `floor(progress * (n - 1))`.
    #[default]
    Simple,
    /// Two neighbouring frames and a blend weight between them.
    CrossFade,
}

/// Frames to draw for one progress value.
///
/// `base` is drawn at alpha `1 - blend` and `next` at alpha `blend` on top. Both indices are always
/// inside the frame set; in simple mode `next == base` and `blend == 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FramePick {
    pub base: FrameIndex,
    pub next: FrameIndex,
    pub blend: f32,
}

impl FramePick {
    pub fn single(index: FrameIndex) -> Self {
        Self {
            base: index,
            next: index,
            blend: 0.0,
        }
    }

    /// Whether the second frame contributes anything.
    pub fn is_blended(self) -> bool {
        self.blend > 0.0 && self.next != self.base
    }
}

/// `floor(progress * (n - 1))` clamped to `[0, n - 1]`. Non-finite progress counts as 0.
pub fn resolve_frame_index(progress: f64, n: usize) -> FrameIndex {
    if n == 0 {
        return FrameIndex(0);
    }
    let last = n - 1;
    let f = clamp01(progress) * last as f64;
    FrameIndex((f.floor() as usize).min(last))
}

pub fn resolve_pick(progress: f64, n: usize, mode: ResolveMode) -> FramePick {
    match mode {
        ResolveMode::Simple => FramePick::single(resolve_frame_index(progress, n)),
        ResolveMode::CrossFade => {
            if n <= 1 {
                return FramePick::single(FrameIndex(0));
            }
            let last = n - 1;
            let f = clamp01(progress) * last as f64;
            let base = (f.floor() as usize).min(last);
            let blend = clamp01(f - base as f64) as f32;
            FramePick {
                base: FrameIndex(base),
                next: FrameIndex((base + 1).min(last)),
                blend,
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/resolver.rs"]
mod tests;
