//! # Permstore Core
//!
//! Pure primitives for permstore: field policies, access kinds, and
//! colon-delimited path splitting.
//!
//! This crate holds no state. It is the vocabulary shared by the
//! permissions table, the store, and the facade crate.
//!
//! ## Key Types
//!
//! - [`Policy`] - What a field permits: read-write, read-only, write-only, or nothing
//! - [`Access`] - The operation being checked (read or write)
//! - [`split_root`] - Splits a path into its root key and the remainder
//!
//! ## Paths
//!
//! Paths are plain strings. The separator is [`SEPARATOR`] (`:`). Only the
//! first separator matters at each level: the root key is checked and
//! looked up, the remainder is handed to the nested store verbatim.

pub mod error;
pub mod path;
pub mod policy;

pub use error::{CoreError, Result};
pub use path::{join_path, root_key, split_root, SEPARATOR};
pub use policy::{Access, Policy};
