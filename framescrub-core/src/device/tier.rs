use std::time::Duration;

use crate::foundation::error::{FramescrubError, FramescrubResult};

/// Coarse device class chosen once per page view.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceTier {
    /// Capable desktop: full resolution, every frame, cross-fade.
    Full,
    /// Small viewport or weak hardware.
    Reduced,
    /// Small viewport on weak hardware.
    Minimal,
}

impl PerformanceTier {
    /// Stable lowercase name used in logs and CLI output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Reduced => "reduced",
            Self::Minimal => "minimal",
        }
    }
}

/// Image smoothing quality used when scaling frames onto the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Smoothing {
    /// Nearest-neighbour sampling.
    Off,
    /// Single bilinear tap per pixel.
    Low,
    /// 2x2 supersampled bilinear.
    High,
}

/// Capability hints reported by the host environment.
///
/// Hosts that cannot report a value leave it `None`; unknown values never count as weak hardware.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DeviceProfile {
    pub viewport_width: f64,
    pub hardware_concurrency: Option<u32>,
    pub device_memory_gb: Option<f64>,
    pub device_pixel_ratio: f64,
}

/// Breakpoints used by [`select_tier`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    /// Viewports at or below this width count as mobile.
    pub mobile_breakpoint_px: f64,
    /// Logical CPU counts at or below this are weak.
    pub constrained_cores: u32,
    /// Memory estimates (GiB) at or below this are weak.
    pub constrained_memory_gb: f64,
    /// Pixel ratios at or above this count as a dense display.
    pub dense_display_dpr: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: 768.0,
            constrained_cores: 4,
            constrained_memory_gb: 2.0,
            dense_display_dpr: 3.0,
        }
    }
}

/// Everything the loader and renderer need to know about a tier.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TierSettings {
    pub tier: PerformanceTier,
    /// Number of frames loaded for this tier.
    pub frame_count: usize,
    /// Decode requests in flight per batch.
    pub batch_size: usize,
    /// Pause between batches.
    #[serde(with = "duration_ms")]
    pub batch_pause: Duration,
    /// Upper bound applied to the device pixel ratio when sizing the surface.
    pub dpr_cap: f64,
    pub smoothing: Smoothing,
    /// Whether sub-frame cross-fading is allowed.
    pub crossfade: bool,
    /// Directory below the frame base path; empty for the base itself.
    pub asset_dir: String,
}

impl TierSettings {
    /// Check the invariants the loader and renderer rely on.
    pub fn validate(&self) -> FramescrubResult<()> {
        if self.frame_count == 0 {
            return Err(FramescrubError::validation(format!(
                "tier '{}' frame_count must be >= 1",
                self.tier.as_str()
            )));
        }
        if self.batch_size == 0 {
            return Err(FramescrubError::validation(format!(
                "tier '{}' batch_size must be >= 1",
                self.tier.as_str()
            )));
        }
        if !(self.dpr_cap.is_finite() && self.dpr_cap > 0.0) {
            return Err(FramescrubError::validation(format!(
                "tier '{}' dpr_cap must be finite and > 0",
                self.tier.as_str()
            )));
        }
        Ok(())
    }
}

/// Per-tier settings table.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TierTable {
    pub full: TierSettings,
    pub reduced: TierSettings,
    pub minimal: TierSettings,
}

impl Default for TierTable {
    fn default() -> Self {
        Self {
            full: TierSettings {
                tier: PerformanceTier::Full,
                frame_count: 79,
                batch_size: 20,
                batch_pause: Duration::ZERO,
                dpr_cap: 2.0,
                smoothing: Smoothing::High,
                crossfade: true,
                asset_dir: String::new(),
            },
            reduced: TierSettings {
                tier: PerformanceTier::Reduced,
                frame_count: 48,
                batch_size: 10,
                batch_pause: Duration::from_millis(16),
                dpr_cap: 1.5,
                smoothing: Smoothing::Low,
                crossfade: false,
                asset_dir: "mobile".to_string(),
            },
            minimal: TierSettings {
                tier: PerformanceTier::Minimal,
                frame_count: 30,
                batch_size: 5,
                batch_pause: Duration::from_millis(50),
                dpr_cap: 1.0,
                smoothing: Smoothing::Off,
                crossfade: false,
                asset_dir: "mobile-low".to_string(),
            },
        }
    }
}

impl TierTable {
    pub fn get(&self, tier: PerformanceTier) -> &TierSettings {
        match tier {
            PerformanceTier::Full => &self.full,
            PerformanceTier::Reduced => &self.reduced,
            PerformanceTier::Minimal => &self.minimal,
        }
    }

    pub fn validate(&self) -> FramescrubResult<()> {
        for (expected, settings) in [
            (PerformanceTier::Full, &self.full),
            (PerformanceTier::Reduced, &self.reduced),
            (PerformanceTier::Minimal, &self.minimal),
        ] {
            if settings.tier != expected {
                return Err(FramescrubError::validation(format!(
                    "tier table slot '{}' holds settings for '{}'",
                    expected.as_str(),
                    settings.tier.as_str()
                )));
            }
            settings.validate()?;
        }
        Ok(())
    }
}

/// Pick the tier for `device`.
///
/// Mobile viewports on weak hardware get [`PerformanceTier::Minimal`]; a dense mobile display that
/// reports no capability hints at all is treated the same way. Remaining mobile viewports and weak
/// desktops get [`PerformanceTier::Reduced`].
pub fn select_tier(device: &DeviceProfile, thresholds: &TierThresholds) -> PerformanceTier {
    let mobile = device.viewport_width <= thresholds.mobile_breakpoint_px;
    let weak_cpu = device
        .hardware_concurrency
        .is_some_and(|c| c <= thresholds.constrained_cores);
    let weak_mem = device
        .device_memory_gb
        .is_some_and(|m| m <= thresholds.constrained_memory_gb);
    let no_hints = device.hardware_concurrency.is_none() && device.device_memory_gb.is_none();
    let dense = device.device_pixel_ratio >= thresholds.dense_display_dpr;

    let tier = match (mobile, weak_cpu || weak_mem) {
        (true, true) => PerformanceTier::Minimal,
        (true, false) if dense && no_hints => PerformanceTier::Minimal,
        (true, false) | (false, true) => PerformanceTier::Reduced,
        (false, false) => PerformanceTier::Full,
    };

    tracing::debug!(
        tier = tier.as_str(),
        viewport_width = device.viewport_width,
        cores = ?device.hardware_concurrency,
        memory_gb = ?device.device_memory_gb,
        dpr = device.device_pixel_ratio,
        "selected performance tier"
    );
    tier
}

/// Resolve the full settings for `device` in one step.
pub fn resolve_settings(
    device: &DeviceProfile,
    thresholds: &TierThresholds,
    table: &TierTable,
) -> TierSettings {
    table.get(select_tier(device, thresholds)).clone()
}

mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_millis(u64::deserialize(d)?))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/device/tier.rs"]
mod tests;
