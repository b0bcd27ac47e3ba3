//! Error types for the permissions module.

use thiserror::Error;

/// Errors that can occur while declaring store types.
#[derive(Debug, Error)]
pub enum PermsError {
    /// Type configuration could not be parsed.
    #[error("invalid store type configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

/// Result type for permission declarations.
pub type Result<T> = std::result::Result<T, PermsError>;
