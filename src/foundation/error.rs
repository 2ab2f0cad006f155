/// Convenience result type used across drape.
pub type DrapeResult<T> = Result<T, DrapeError>;

/// Top-level error taxonomy used by drape APIs.
#[derive(thiserror::Error, Debug)]
pub enum DrapeError {
    /// Invalid user-provided data or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed or inconsistent catalog records, or an unknown catalog reference.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Camera acquisition or frame capture failures.
    #[error("camera error: {0}")]
    Camera(String),

    /// An operation was requested in a session step that does not allow it.
    #[error("session error: {0}")]
    Session(String),

    /// Compositing or image encoding failures.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DrapeError {
    /// Build a [`DrapeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DrapeError::Catalog`] value.
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Build a [`DrapeError::Camera`] value.
    pub fn camera(msg: impl Into<String>) -> Self {
        Self::Camera(msg.into())
    }

    /// Build a [`DrapeError::Session`] value.
    pub fn session(msg: impl Into<String>) -> Self {
        Self::Session(msg.into())
    }

    /// Build a [`DrapeError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`DrapeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for DrapeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
