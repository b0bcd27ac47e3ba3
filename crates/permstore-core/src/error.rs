//! Error types for permstore core.

use thiserror::Error;

/// Core errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A policy string that is none of `rw`, `r`, `w`, `none`.
    #[error("unknown policy: {0}")]
    InvalidPolicy(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
