//! # Permstore Permissions
//!
//! Field restrictions and store type declarations.
//!
//! ## Overview
//!
//! A field's permission is fixed when it is declared and does not change
//! unless explicitly rewritten. Declarations live in a [`StoreType`]: a
//! named, immutable table of field restrictions shared by every store
//! created from it, plus the type's default policy and how it exposes
//! [`entries`](EntriesMode).
//!
//! ## Key Concepts
//!
//! - **Restriction**: an explicit policy for one field name
//! - **StoreType**: default policy + restriction table + entries mode
//! - **TypeConfig**: the same declaration as a serde structure
//!
//! ## Usage
//!
//! ```rust
//! use permstore_core::Policy;
//! use permstore_perms::{EntriesMode, StoreType};
//!
//! let session = StoreType::builder("Session")
//!     .restrict("user_id", Some(Policy::ReadOnly))
//!     .restrict("token", Some(Policy::None))
//!     .entries(EntriesMode::Readable)
//!     .build();
//!
//! assert_eq!(session.restriction("token"), Some(Policy::None));
//! assert_eq!(session.restriction("theme"), None);
//! ```

pub mod config;
pub mod error;
pub mod restrictions;
pub mod store_type;

pub use config::TypeConfig;
pub use error::{PermsError, Result};
pub use restrictions::Restrictions;
pub use store_type::{EntriesMode, StoreType, StoreTypeBuilder};
