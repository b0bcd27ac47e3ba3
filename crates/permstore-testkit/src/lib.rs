//! # Permstore Testkit
//!
//! Testing utilities for permstore.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Generators**: Proptest strategies for policies, field names, paths and store operations
//! - **Fixtures**: Ready-made store types and populated stores
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use permstore_testkit::generators::{path, json_leaf};
//! use permstore::Store;
//!
//! proptest! {
//!     #[test]
//!     fn write_then_read(p in path(3), v in json_leaf()) {
//!         let mut store = Store::new();
//!         store.write(&p, v.clone()).unwrap();
//!         prop_assert_eq!(store.read(&p).unwrap(), Some(v.into()));
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use permstore_testkit::fixtures::StoreFixture;
//!
//! let fixture = StoreFixture::session();
//! assert!(!fixture.store.allowed_to_write("user_id"));
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{config_type, session_type, StoreFixture};
pub use generators::{field_name, json_leaf, path, policy, StoreOp};
