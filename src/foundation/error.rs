/// Convenience result type used across styletween.
pub type AnimResult<T> = Result<T, AnimError>;

/// Ways an animator, its options or a frame driver can fail.
#[derive(thiserror::Error, Debug)]
pub enum AnimError {
    /// A lifecycle phase name that is not `begin`, `moving` or `complete`,
    /// or a frame step that is not a positive number.
    #[error("validation error: {0}")]
    Validation(String),

    /// `run`, `begin`, `moving`, `complete` or `set` called while the
    /// queue holds no descriptor.
    #[error("animation error: {0}")]
    Animation(String),

    /// The active descriptor's easing identifier names no registered
    /// function, so it cannot be run or sampled.
    #[error("easing error: {0}")]
    Easing(String),

    /// Animation options JSON that does not parse.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Failure reading an options file, with the path as context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AnimError {
    /// Build an [`AnimError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`AnimError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build an [`AnimError::Easing`] value.
    pub fn easing(msg: impl Into<String>) -> Self {
        Self::Easing(msg.into())
    }

    /// Build an [`AnimError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    pub(crate) fn empty_queue() -> Self {
        Self::animation("animation queue is empty")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
