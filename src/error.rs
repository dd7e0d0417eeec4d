//! Error types for the editor core.

/// Error returned by the geometry helpers on malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    /// A center was requested for an empty vertex list.
    #[error("vertex list is empty")]
    EmptyVertices,
    /// A vertex carried a NaN or infinite coordinate.
    #[error("vertex {index} has a non-finite coordinate")]
    NonFinite { index: usize },
}

/// Error returned while building an [`crate::config::EditorConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A setting did not parse or was out of range.
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
    /// A JSON config document failed to deserialize.
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
