use crate::foundation::core::Rect;

/// How a frame is scaled into the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitMode {
    /// Fill the viewport and crop the overflow. Never letterboxes.
    #[default]
    Cover,
    /// Fit entirely inside the viewport and letterbox the rest.
    Contain,
}

/// Destination rectangle for an `image_w x image_h` frame inside `viewport`.
///
/// The rectangle is centred on the viewport; with [`FitMode::Cover`] it may extend past the viewport
/// edges on one axis.
pub fn fit_rect(image_w: f64, image_h: f64, viewport: Rect, mode: FitMode) -> Rect {
    let (vw, vh) = (viewport.width(), viewport.height());
    if !(image_w > 0.0 && image_h > 0.0 && vw > 0.0 && vh > 0.0) {
        return viewport;
    }
    let image_ratio = image_w / image_h;
    let viewport_ratio = vw / vh;

    let wider = image_ratio > viewport_ratio;
    let fit_height = match mode {
        FitMode::Cover => wider,
        FitMode::Contain => !wider,
    };

    let (w, h) = if fit_height {
        (vh * image_ratio, vh)
    } else {
        (vw, vw / image_ratio)
    };
    let x = viewport.x0 + (vw - w) / 2.0;
    let y = viewport.y0 + (vh - h) / 2.0;
    Rect::new(x, y, x + w, y + h)
}

#[cfg(test)]
#[path = "../../tests/unit/render/fit.rs"]
mod tests;
