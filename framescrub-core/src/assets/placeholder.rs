use std::sync::Arc;

use anyhow::Context;

use crate::{
    assets::frame_set::{FrameOrigin, PreparedFrame},
    foundation::error::{FramescrubError, FramescrubResult},
};

/// Look of generated stand-in frames.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlaceholderStyle {
    pub width: u32,
    pub height: u32,
    /// Gradient start (top-left), `#rrggbb`.
    pub from: String,
    /// Gradient end (bottom-right), `#rrggbb`.
    pub to: String,
    /// Label colour, `#rrggbb`.
    pub label: String,
    pub font_size_px: f32,
}

impl Default for PlaceholderStyle {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            from: "#1a1a2e".to_string(),
            to: "#16213e".to_string(),
            label: "#66fcf1".to_string(),
            font_size_px: 48.0,
        }
    }
}

impl PlaceholderStyle {
    pub fn validate(&self) -> FramescrubResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(FramescrubError::validation(
                "placeholder size must be non-zero",
            ));
        }
        for c in [&self.from, &self.to, &self.label] {
            if !is_hex_colour(c) {
                return Err(FramescrubError::validation(format!(
                    "placeholder colour '{c}' must be #rrggbb"
                )));
            }
        }
        if !(self.font_size_px.is_finite() && self.font_size_px > 0.0) {
            return Err(FramescrubError::validation(
                "placeholder font_size_px must be finite and > 0",
            ));
        }
        Ok(())
    }
}

fn is_hex_colour(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Rasterizes "Frame N" stand-ins through `usvg`/`resvg`.
///
/// The font database is loaded once; when no font is available the label is dropped and the
/// gradient alone is returned.
pub struct PlaceholderPainter {
    style: PlaceholderStyle,
    fontdb: Arc<usvg::fontdb::Database>,
}

impl std::fmt::Debug for PlaceholderPainter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaceholderPainter")
            .field("style", &self.style)
            .field("font_faces", &self.fontdb.len())
            .finish()
    }
}

impl PlaceholderPainter {
    pub fn new(style: PlaceholderStyle) -> FramescrubResult<Self> {
        style.validate()?;
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "placeholder font database ready");
        Ok(Self {
            style,
            fontdb: Arc::new(db),
        })
    }

    pub fn style(&self) -> &PlaceholderStyle {
        &self.style
    }

    /// Render the stand-in for one-based frame `number`.
    pub fn paint(&self, number: usize) -> FramescrubResult<PreparedFrame> {
        let svg = self.svg_source(number);
        let opts = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_data(svg.as_bytes(), &opts).context("parse placeholder svg")?;

        let (w, h) = (self.style.width, self.style.height);
        let mut pixmap = resvg::tiny_skia::Pixmap::new(w, h)
            .ok_or_else(|| FramescrubError::render("failed to allocate placeholder pixmap"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );

        Ok(PreparedFrame {
            width: w,
            height: h,
            rgba8_premul: Arc::new(pixmap.take()),
            origin: FrameOrigin::Placeholder,
        })
    }

    fn svg_source(&self, number: usize) -> String {
        let s = &self.style;
        format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
<defs><linearGradient id="bg" x1="0" y1="0" x2="{w}" y2="{h}" gradientUnits="userSpaceOnUse">
<stop offset="0" stop-color="{from}"/><stop offset="1" stop-color="{to}"/>
</linearGradient></defs>
<rect x="0" y="0" width="{w}" height="{h}" fill="url(#bg)"/>
<text x="{cx}" y="{cy}" fill="{label}" font-family="Arial, sans-serif" font-weight="bold" font-size="{size}" text-anchor="middle">Frame {number}</text>
</svg>"##,
            w = s.width,
            h = s.height,
            from = s.from,
            to = s.to,
            label = s.label,
            size = s.font_size_px,
            cx = f64::from(s.width) / 2.0,
            cy = f64::from(s.height) / 2.0,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/placeholder.rs"]
mod tests;
