//! # Permstore Store
//!
//! A hierarchical key-value container with per-field read/write
//! permissions.
//!
//! ## Overview
//!
//! A [`Store`] maps field names to [`StoreValue`]s: JSON data, nested
//! stores, or lazy producers. Every `read` and `write` resolves the root
//! key of its path, checks that key's policy, and then either touches the
//! field or hands the rest of the path to the nested store found there.
//!
//! ## Key Types
//!
//! - [`Store`] - The permission-checked container
//! - [`StoreValue`] - What a field holds
//! - [`Producer`] - A zero-argument function behind a lazy field
//! - [`StoreError`] - Permission denial, carrying the full path
//!
//! ## Usage
//!
//! ```rust
//! use permstore_core::Policy;
//! use permstore_perms::StoreType;
//! use permstore_store::{Store, StoreValue};
//! use serde_json::json;
//!
//! let settings = StoreType::builder("Settings")
//!     .restrict("version", Some(Policy::ReadOnly))
//!     .build();
//!
//! let mut store = Store::of_type(settings);
//! store.write("ui:theme", "dark").unwrap();
//! assert_eq!(store.read("ui:theme").unwrap(), Some(StoreValue::from("dark")));
//!
//! assert!(store.write("version", json!(2)).is_err());
//! ```
//!
//! ## Design Notes
//!
//! - **Independent levels**: a nested store checks its own policies; a parent
//!   only decides about the root key.
//! - **Auto-vivification**: writing through a key that does not hold a store
//!   replaces it with a new, empty base store.
//! - **Reads never create**: reading through a missing or non-store key
//!   yields `None`.

pub mod error;
pub mod store;
pub mod value;

pub use error::{Result, StoreError};
pub use store::Store;
pub use value::{Producer, StoreValue};
