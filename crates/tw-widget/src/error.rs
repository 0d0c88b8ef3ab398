//! Widget error types

/// Configuration loading and validation errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Reasons a drag cannot start or a drag frame cannot be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DragError {
    #[error("No active handle")]
    NoActiveHandle,
    #[error("Viewport cannot produce a ray")]
    NoRay,
    #[error("Cursor ray does not intersect the constraint plane")]
    PlaneMiss,
}
