//! Store type declarations as plain configuration.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use permstore_core::Policy;

use crate::error::Result;
use crate::store_type::{EntriesMode, StoreType, StoreTypeBuilder};

/// A [`StoreType`] declaration that can be loaded with serde.
///
/// ```json
/// { "name": "Session", "default_policy": "rw", "entries": "readable",
///   "fields": { "token": "none", "user_id": "r", "theme": null } }
/// ```
///
/// A `null` field policy captures `default_policy`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeConfig {
    pub name: String,
    pub default_policy: Policy,
    pub entries: EntriesMode,
    pub fields: BTreeMap<String, Option<Policy>>,
}

impl TypeConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parse a configuration from an already-decoded JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Build the declared type.
    pub fn build(self) -> Arc<StoreType> {
        let builder = StoreTypeBuilder::new(self.name)
            .default_policy(self.default_policy)
            .entries(self.entries);

        self.fields
            .into_iter()
            .fold(builder, |b, (field, policy)| b.restrict(field, policy))
            .build()
    }
}

impl StoreType {
    /// Build a type from its configuration.
    pub fn from_config(config: TypeConfig) -> Arc<StoreType> {
        config.build()
    }
}
