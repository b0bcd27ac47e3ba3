//! # Permstore
//!
//! In-process, hierarchical key-value containers with per-field read/write
//! permissions.
//!
//! ## Overview
//!
//! Permstore holds application state (configuration, session data) where
//! some fields must be readable but not writable from outside, or hidden
//! entirely, while trusted code keeps full access.
//!
//! - **Policies**: every field is read-write, read-only, write-only, or hidden
//! - **Store types**: field restrictions declared once and shared by every instance
//! - **Paths**: `a:b:c` descends through nested stores, creating them on write
//! - **Shared access**: [`SharedStore`] serializes access from several threads
//!
//! ## Usage
//!
//! ```rust
//! use permstore::{Policy, Store, StoreType, EntriesMode};
//! use serde_json::json;
//!
//! let session = StoreType::builder("Session")
//!     .restrict("user_id", Some(Policy::ReadOnly))
//!     .restrict("token", Some(Policy::None))
//!     .entries(EntriesMode::Readable)
//!     .build();
//!
//! let mut store = Store::of_type(session);
//! store.write("prefs:theme", "dark").unwrap();
//!
//! assert!(store.write("user_id", "u-1").is_err());
//! assert!(store.read("token").is_err());
//! assert_eq!(
//!     serde_json::Value::Object(store.entries()),
//!     json!({ "prefs": { "theme": "dark" } })
//! );
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `permstore::core` - Policies, access kinds, path splitting
//! - `permstore::perms` - Restriction tables and store types
//! - `permstore::store` - The store itself

pub mod error;
pub mod shared;

// Re-export component crates
pub use permstore_core as core;
pub use permstore_perms as perms;
pub use permstore_store as store;

// Re-export main types for convenience
pub use error::{PermstoreError, Result};
pub use shared::SharedStore;

pub use permstore_core::{Access, Policy};
pub use permstore_perms::{EntriesMode, Restrictions, StoreType, StoreTypeBuilder, TypeConfig};
pub use permstore_store::{Producer, Store, StoreError, StoreValue};
