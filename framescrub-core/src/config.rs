use std::path::Path;

use anyhow::Context;

use crate::{
    assets::{loader::LoaderOpts, naming::FramePathTemplate},
    device::tier::{PerformanceTier, TierSettings, TierTable, TierThresholds},
    foundation::error::{FramescrubError, FramescrubResult},
    player::scheduler::ThrottleMode,
    render::fit::FitMode,
    scroll::{mapper::ScrollMapper, resolver::ResolveMode},
};

/// Layout ids of the two regions the mapper measures.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RegionIds {
    pub hero: String,
    pub next: String,
}

impl Default for RegionIds {
    fn default() -> Self {
        Self {
            hero: "hero".to_string(),
            next: "about".to_string(),
        }
    }
}

/// Complete player configuration. Every field has a default, so `{}` is a valid config file.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayerConfig {
    pub thresholds: TierThresholds,
    pub tiers: TierTable,
    pub frames: FramePathTemplate,
    pub loader: LoaderOpts,
    pub scroll: ScrollMapper,
    pub fit: FitMode,
    pub throttle: ThrottleMode,
    pub regions: RegionIds,
}

impl PlayerConfig {
    pub fn from_json_str(s: &str) -> FramescrubResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| FramescrubError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> FramescrubResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read player config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> FramescrubResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| FramescrubError::serde(e.to_string()))
    }

    pub fn validate(&self) -> FramescrubResult<()> {
        self.tiers.validate()?;
        self.frames.validate()?;
        self.scroll.validate()?;
        for tier in [
            PerformanceTier::Full,
            PerformanceTier::Reduced,
            PerformanceTier::Minimal,
        ] {
            let count = self.tiers.get(tier).frame_count;
            if count > self.frames.source_frame_count {
                return Err(FramescrubError::validation(format!(
                    "{} tier frame_count {count} exceeds source_frame_count {}",
                    tier.as_str(),
                    self.frames.source_frame_count
                )));
            }
        }
        if self.regions.hero.is_empty() || self.regions.next.is_empty() {
            return Err(FramescrubError::validation("region ids must be non-empty"));
        }
        if self.regions.hero == self.regions.next {
            return Err(FramescrubError::validation(
                "hero and next region ids must differ",
            ));
        }
        if !(self.thresholds.mobile_breakpoint_px.is_finite()
            && self.thresholds.mobile_breakpoint_px >= 0.0)
        {
            return Err(FramescrubError::validation(
                "mobile_breakpoint_px must be finite and >= 0",
            ));
        }
        Ok(())
    }

    /// Resolve mode allowed by `settings`.
    pub fn resolve_mode(settings: &TierSettings) -> ResolveMode {
        if settings.crossfade {
            ResolveMode::CrossFade
        } else {
            ResolveMode::Simple
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
