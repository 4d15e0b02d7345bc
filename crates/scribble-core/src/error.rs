//! Error types for host-facing engine operations.

use thiserror::Error;

/// Engine errors.
///
/// The gesture path itself never fails; these cover the calls a host makes
/// with ids, color codes, configuration or persisted content.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
    #[error("Invalid color code: {0}")]
    InvalidColor(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Invalid canvas content: {0}")]
    InvalidContent(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
