/// Convenience result type used across boothstrip.
pub type BoothResult<T> = Result<T, BoothError>;

/// Top-level error taxonomy used by pipeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum BoothError {
    /// The live frame source cannot start or stopped producing frames
    /// (camera permission denied, no device, feed went away).
    #[error("source unavailable: {0}")]
    SourceUnavailable(String),

    /// A captured frame or the overlay asset failed to load or decode.
    #[error("decode error: {0}")]
    Decode(String),

    /// Invalid user-provided data, parameters, or formats.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while compositing or finalizing a print strip.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BoothError {
    /// Build a [`BoothError::SourceUnavailable`] value.
    pub fn source_unavailable(msg: impl Into<String>) -> Self {
        Self::SourceUnavailable(msg.into())
    }

    /// Build a [`BoothError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`BoothError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BoothError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
