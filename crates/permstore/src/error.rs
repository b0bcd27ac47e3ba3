//! Error types for the facade.

use permstore_core::CoreError;
use permstore_perms::PermsError;
use permstore_store::StoreError;
use thiserror::Error;

/// Errors from any permstore component.
#[derive(Debug, Error)]
pub enum PermstoreError {
    /// Policy parsing error.
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Store type declaration error.
    #[error("type error: {0}")]
    Perms(#[from] PermsError),

    /// Permission denied by a store.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl PermstoreError {
    /// Check if this is a permission denial.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, PermstoreError::Store(StoreError::PermissionDenied { .. }))
    }
}

/// Result type for facade operations.
pub type Result<T> = std::result::Result<T, PermstoreError>;
