use crate::{
    device::tier::TierSettings,
    foundation::core::FrameIndex,
    foundation::error::{FramescrubError, FramescrubResult},
};

/// Naming convention shared with the offline asset-preparation step.
///
/// A frame resolves to `<base>/<tier dir>/<prefix><number>.<extension>` where `number` is
/// zero-padded to `pad_width` digits and counted from `first_number`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FramePathTemplate {
    pub base: String,
    pub prefix: String,
    pub pad_width: usize,
    pub extension: String,
    pub first_number: usize,
    /// Number of frames the asset tool emits into every tier directory.
    pub source_frame_count: usize,
}

impl Default for FramePathTemplate {
    fn default() -> Self {
        Self {
            base: "video-frames".to_string(),
            prefix: "frame_".to_string(),
            pad_width: 4,
            extension: "jpg".to_string(),
            first_number: 1,
            source_frame_count: 79,
        }
    }
}

impl FramePathTemplate {
    pub fn validate(&self) -> FramescrubResult<()> {
        if self.pad_width == 0 {
            return Err(FramescrubError::validation("pad_width must be >= 1"));
        }
        if self.source_frame_count == 0 {
            return Err(FramescrubError::validation(
                "source_frame_count must be >= 1",
            ));
        }
        if self.extension.is_empty() || self.extension.contains('/') {
            return Err(FramescrubError::validation(
                "extension must be a non-empty file extension",
            ));
        }
        for part in [&self.base, &self.prefix] {
            if part.split('/').any(|seg| seg == "..") {
                return Err(FramescrubError::validation(
                    "frame paths must not contain '..'",
                ));
            }
        }
        let widest = self.first_number + self.source_frame_count - 1;
        if widest.to_string().len() > self.pad_width {
            return Err(FramescrubError::validation(format!(
                "pad_width {} cannot hold frame number {widest}",
                self.pad_width
            )));
        }
        Ok(())
    }

    /// File name for a one-based source frame number.
    pub fn file_name(&self, source_number: usize) -> String {
        format!(
            "{}{:0width$}.{}",
            self.prefix,
            source_number,
            self.extension,
            width = self.pad_width
        )
    }

    /// Relative path (always `/`-separated) of a source frame inside a tier directory.
    pub fn path_for(&self, asset_dir: &str, source_number: usize) -> String {
        let mut parts = Vec::with_capacity(3);
        for p in [self.base.as_str(), asset_dir] {
            let p = p.trim_matches('/');
            if !p.is_empty() {
                parts.push(p.to_string());
            }
        }
        parts.push(self.file_name(source_number));
        parts.join("/")
    }

    /// Source frame number backing slot `index` of a tier that loads `count` frames.
    ///
    /// Slots are spread evenly over the source sequence so the first and last slots always hit the
    /// first and last source frames.
    pub fn source_number(&self, index: FrameIndex, count: usize) -> usize {
        let last = self.source_frame_count.saturating_sub(1);
        let offset = if count <= 1 {
            0
        } else if count >= self.source_frame_count {
            index.0.min(last)
        } else {
            let step = last as f64 / (count - 1) as f64;
            ((index.0 as f64 * step).round() as usize).min(last)
        };
        self.first_number + offset
    }

    /// Every path a tier will request, in slot order.
    pub fn paths_for_tier(&self, settings: &TierSettings) -> Vec<String> {
        (0..settings.frame_count)
            .map(|i| {
                let n = self.source_number(FrameIndex(i), settings.frame_count);
                self.path_for(&settings.asset_dir, n)
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/naming.rs"]
mod tests;
