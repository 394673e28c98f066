use crate::scroll::{mapper::ScrollSample, resolver::FramePick};

/// What the scroll handler last decided. Read by the paint routine only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaybackState {
    /// Linear progress before easing.
    pub raw_progress: f64,
    /// Eased progress in `[0, 1]`.
    pub progress: f64,
    pub frame: FramePick,
    /// Surface opacity in `[0, 1]`.
    pub opacity: f64,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            raw_progress: 0.0,
            progress: 0.0,
            frame: FramePick::default(),
            opacity: 1.0,
        }
    }
}

impl PlaybackState {
    pub(crate) fn apply(&mut self, sample: ScrollSample, frame: FramePick) {
        self.raw_progress = sample.raw_progress;
        self.progress = sample.progress;
        self.opacity = sample.opacity().clamp(0.0, 1.0);
        self.frame = frame;
    }
}
