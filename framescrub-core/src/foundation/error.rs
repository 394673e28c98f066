/// Convenience result type used across framescrub.
pub type FramescrubResult<T> = Result<T, FramescrubError>;

/// Top-level error taxonomy used by player, loader and renderer APIs.
#[derive(thiserror::Error, Debug)]
pub enum FramescrubError {
    /// Invalid configuration, geometry or caller-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A frame asset could not be fetched or decoded.
    #[error("asset error: {0}")]
    Asset(String),

    /// Errors while preparing or painting the drawing surface.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FramescrubError {
    /// Build a [`FramescrubError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FramescrubError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`FramescrubError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`FramescrubError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
