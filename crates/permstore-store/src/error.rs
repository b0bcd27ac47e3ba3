//! Error types for the store module.

use permstore_core::{join_path, Access};
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The root key of `path` at some level does not permit `access`.
    ///
    /// `path` is the full path as the caller passed it, not just the part
    /// the denying store saw.
    #[error("permission denied: cannot {access} '{path}'")]
    PermissionDenied { path: String, access: Access },
}

impl StoreError {
    /// The path that was denied.
    pub fn path(&self) -> &str {
        match self {
            StoreError::PermissionDenied { path, .. } => path,
        }
    }

    /// The operation that was denied.
    pub fn access(&self) -> Access {
        match self {
            StoreError::PermissionDenied { access, .. } => *access,
        }
    }

    /// Re-prefix an error raised by the nested store at `root`.
    pub(crate) fn nested_under(self, root: &str) -> Self {
        match self {
            StoreError::PermissionDenied { path, access } => StoreError::PermissionDenied {
                path: join_path(root, &path),
                access,
            },
        }
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
