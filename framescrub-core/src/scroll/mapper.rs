use crate::{
    animation::ease::Ease,
    foundation::{
        core::LayoutSnapshot,
        error::{FramescrubError, FramescrubResult},
        math::{clamp01, ratio01},
    },
};

/// Where the opacity fade finishes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FadeEnd {
    /// This fraction of the next region's height past its top.
    NextRegionFraction(f64),
    /// A fixed pixel margin past the next region's top.
    FixedMargin(f64),
}

/// Result of mapping one layout snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSample {
    /// Linear progress through the hero-to-next span, in `[0, 1]`.
    pub raw_progress: f64,
    /// `raw_progress` after easing; drives frame selection.
    pub progress: f64,
    /// Fade amount in `[0, 1]`; 0 is fully visible.
    pub fade: f64,
}

impl ScrollSample {
    /// Surface opacity derived from the fade amount.
    pub fn opacity(self) -> f64 {
        1.0 - self.fade
    }
}

/// Converts scroll offsets into eased progress and a fade amount.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScrollMapper {
    pub ease: Ease,
    /// Fade starts this fraction of the hero height past the hero top.
    pub fade_start_fraction: f64,
    pub fade_end: FadeEnd,
}

impl Default for ScrollMapper {
    fn default() -> Self {
        Self {
            ease: Ease::InOutQuad,
            fade_start_fraction: 0.5,
            fade_end: FadeEnd::NextRegionFraction(0.8),
        }
    }
}

impl ScrollMapper {
    pub fn validate(&self) -> FramescrubResult<()> {
        if !(0.0..=1.0).contains(&self.fade_start_fraction) {
            return Err(FramescrubError::validation(
                "fade_start_fraction must be within [0, 1]",
            ));
        }
        let end = match self.fade_end {
            FadeEnd::NextRegionFraction(f) | FadeEnd::FixedMargin(f) => f,
        };
        if !end.is_finite() || end < 0.0 {
            return Err(FramescrubError::validation(
                "fade_end must be finite and >= 0",
            ));
        }
        Ok(())
    }

    /// Map `layout`, or `None` when either region is missing from it.
    pub fn map(&self, layout: &LayoutSnapshot) -> Option<ScrollSample> {
        let (hero, next) = layout.regions()?;
        let y = layout.scroll_y;

        let raw_progress = ratio01(y - hero.top, next.top - hero.top);
        let progress = clamp01(self.ease.apply(raw_progress));

        let fade_start = hero.top + hero.height * self.fade_start_fraction;
        let fade_end = match self.fade_end {
            FadeEnd::NextRegionFraction(f) => next.top + next.height * f,
            FadeEnd::FixedMargin(px) => next.top + px,
        };
        let fade = if fade_end > fade_start {
            ratio01(y - fade_start, fade_end - fade_start)
        } else if y >= fade_start {
            1.0
        } else {
            0.0
        };

        Some(ScrollSample {
            raw_progress,
            progress,
            fade,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/mapper.rs"]
mod tests;
