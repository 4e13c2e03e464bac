/// Convenience result type used across pixcomp.
pub type PixcompResult<T> = Result<T, PixcompError>;

/// Error type for compositing, binding and rasterization calls.
#[derive(thiserror::Error, Debug)]
pub enum PixcompError {
    /// Invalid caller-provided geometry, dimensions or image configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// A pixel format has no registered codec.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A pixel buffer or rectangle set could not be allocated.
    #[error("allocation error: {0}")]
    Allocation(String),

    /// Internal inconsistency detected while compositing.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Options could not be parsed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PixcompError {
    /// Build a [`PixcompError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PixcompError::UnsupportedFormat`] value.
    pub fn unsupported_format(msg: impl Into<String>) -> Self {
        Self::UnsupportedFormat(msg.into())
    }

    /// Build a [`PixcompError::Allocation`] value.
    pub fn allocation(msg: impl Into<String>) -> Self {
        Self::Allocation(msg.into())
    }

    /// Build a [`PixcompError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`PixcompError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
