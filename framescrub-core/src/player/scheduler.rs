use std::time::Duration;

/// How bursts of scroll events are coalesced into paints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThrottleMode {
    /// One paint per animation-frame tick.
    #[default]
    AnimationFrame,
    /// One paint per tick, and no more often than every `min_interval_ms`.
    MinInterval { min_interval_ms: u64 },
}

/// Outcome of an animation-frame tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameDecision {
    /// Measure layout and paint now.
    Paint,
    /// A paint is owed but the gate is closed; request another tick.
    Defer,
    /// Nothing to do.
    Idle,
}

/// Single-flight paint scheduler.
///
/// At most one paint happens per tick, and a tick only paints if a scroll arrived since the last
/// paint.
#[derive(Clone, Debug, Default)]
pub struct PaintScheduler {
    mode: ThrottleMode,
    pending: bool,
    last_paint: Option<Duration>,
}

impl PaintScheduler {
    pub fn new(mode: ThrottleMode) -> Self {
        Self {
            mode,
            pending: false,
            last_paint: None,
        }
    }

    pub fn mode(&self) -> ThrottleMode {
        self.mode
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Record a scroll event. Returns `true` when the caller must request an animation frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Decide what to do on an animation-frame tick at host time `now`.
    pub fn on_frame(&mut self, now: Duration) -> FrameDecision {
        if !self.pending {
            return FrameDecision::Idle;
        }
        if let ThrottleMode::MinInterval { min_interval_ms } = self.mode
            && let Some(last) = self.last_paint
            && now.saturating_sub(last) < Duration::from_millis(min_interval_ms)
        {
            return FrameDecision::Defer;
        }
        self.pending = false;
        self.last_paint = Some(now);
        FrameDecision::Paint
    }

    /// Drop any owed paint.
    pub fn cancel(&mut self) {
        self.pending = false;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/player/scheduler.rs"]
mod tests;
