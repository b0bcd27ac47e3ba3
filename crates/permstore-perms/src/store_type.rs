//! Store type declarations.
//!
//! A [`StoreType`] plays the role a class plays for field annotations: it
//! is declared once, and every store built from it consults the same
//! restriction table through a shared `Arc`.

use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

use permstore_core::Policy;

use crate::restrictions::Restrictions;

/// How a store answers `entries()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntriesMode {
    /// Always an empty mapping.
    #[default]
    Hidden,

    /// Every readable field, rendered as JSON.
    Readable,
}

/// A declared store type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreType {
    name: String,
    default_policy: Policy,
    restrictions: Restrictions,
    entries: EntriesMode,
}

impl StoreType {
    /// Start declaring a new type.
    pub fn builder(name: impl Into<String>) -> StoreTypeBuilder {
        StoreTypeBuilder::new(name)
    }

    /// The base type: read-write default, no restrictions, hidden entries.
    ///
    /// Stores created by auto-vivification are of this type. All callers
    /// share one instance.
    pub fn base() -> Arc<StoreType> {
        static BASE: OnceLock<Arc<StoreType>> = OnceLock::new();
        BASE.get_or_init(|| StoreTypeBuilder::new("").build()).clone()
    }

    /// The declared name. Empty for the base type.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The policy new instances start with.
    pub fn default_policy(&self) -> Policy {
        self.default_policy
    }

    /// The explicit policy declared for `field`, if any.
    pub fn restriction(&self, field: &str) -> Option<Policy> {
        self.restrictions.get(field)
    }

    /// The full restriction table.
    pub fn restrictions(&self) -> &Restrictions {
        &self.restrictions
    }

    pub fn entries_mode(&self) -> EntriesMode {
        self.entries
    }
}

/// Builder for [`StoreType`].
#[derive(Debug, Clone)]
pub struct StoreTypeBuilder {
    name: String,
    default_policy: Policy,
    restrictions: Restrictions,
    entries: EntriesMode,
}

impl StoreTypeBuilder {
    /// Create a builder with a read-write default and no restrictions.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_policy: Policy::default(),
            restrictions: Restrictions::new(),
            entries: EntriesMode::default(),
        }
    }

    /// Set the default policy.
    ///
    /// Only affects restrictions declared after this call and fields with
    /// no restriction at all.
    pub fn default_policy(mut self, policy: Policy) -> Self {
        self.default_policy = policy;
        self
    }

    /// Declare an explicit policy for `field`.
    ///
    /// With `None`, the current default policy is captured and stored.
    pub fn restrict(mut self, field: impl Into<String>, policy: Option<Policy>) -> Self {
        let policy = policy.unwrap_or(self.default_policy);
        self.restrictions.set(field, policy);
        self
    }

    pub fn entries(mut self, mode: EntriesMode) -> Self {
        self.entries = mode;
        self
    }

    /// Finish the declaration.
    pub fn build(self) -> Arc<StoreType> {
        Arc::new(StoreType {
            name: self.name,
            default_policy: self.default_policy,
            restrictions: self.restrictions,
            entries: self.entries,
        })
    }
}
