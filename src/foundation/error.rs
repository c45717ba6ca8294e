/// Convenience result type used across snapline.
pub type SnaplineResult<T> = Result<T, SnaplineError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum SnaplineError {
    /// Malformed play data or invalid caller-provided options.
    #[error("validation error: {0}")]
    Validation(String),

    /// Playback state machine misuse (e.g. answering a quiz round twice).
    #[error("playback error: {0}")]
    Playback(String),

    /// Errors raised by a renderer adapter.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SnaplineError {
    /// Build a [`SnaplineError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SnaplineError::Playback`] value.
    pub fn playback(msg: impl Into<String>) -> Self {
        Self::Playback(msg.into())
    }

    /// Build a [`SnaplineError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SnaplineError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
