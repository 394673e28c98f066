/// Easing curve applied to linear scroll progress before frame selection.
///
/// Every curve maps `[0, 1]` onto `[0, 1]`, fixes both endpoints and is monotonic, so frame
/// selection never runs backwards while the page scrolls forward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Progress is used as-is.
    Linear,
    /// Quadratic ease-in-out.
    #[default]
    InOutQuad,
    /// Cubic ease-in-out.
    InOutCubic,
    /// Cubic ease-out.
    OutCubic,
}

impl Ease {
    /// Apply the curve to `t`, clamping the input into `[0, 1]` first.
    pub fn apply(self, t: f64) -> f64 {
        let t = crate::foundation::math::clamp01(t);
        match self {
            Self::Linear => t,
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
