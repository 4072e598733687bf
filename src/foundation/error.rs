/// Convenience result type used across starrow.
pub type StarrowResult<T> = Result<T, StarrowError>;

/// Top-level error taxonomy used by the control's APIs.
#[derive(thiserror::Error, Debug)]
pub enum StarrowError {
    /// Construction input that violates the control's contract.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while loading or decoding a row configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Errors while compiling or rasterizing a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StarrowError {
    /// Build a [`StarrowError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StarrowError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`StarrowError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
