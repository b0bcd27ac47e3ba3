//! The permission-checked store.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{Map, Value};

use permstore_core::{split_root, Access, Policy};
use permstore_perms::{EntriesMode, Restrictions, StoreType};

use crate::error::{Result, StoreError};
use crate::value::StoreValue;

/// A hierarchical key-value container with per-field policies.
///
/// The effective policy of a field is, in order: the instance override
/// recorded by [`Store::restrict`], the restriction declared on the
/// store's [`StoreType`], and finally the store's default policy.
///
/// Paths address fields through nested stores with `:`. Each level checks
/// only its own root key against its own policies.
#[derive(Debug, Clone, PartialEq)]
pub struct Store {
    store_type: Arc<StoreType>,
    default_policy: Policy,
    overrides: Restrictions,
    fields: HashMap<String, StoreValue>,
}

impl Store {
    /// Create an empty store of the base type.
    pub fn new() -> Self {
        Self::of_type(StoreType::base())
    }

    /// Create an empty store of a declared type.
    pub fn of_type(store_type: Arc<StoreType>) -> Self {
        Self {
            default_policy: store_type.default_policy(),
            store_type,
            overrides: Restrictions::new(),
            fields: HashMap::new(),
        }
    }

    pub fn store_type(&self) -> &StoreType {
        &self.store_type
    }

    pub fn default_policy(&self) -> Policy {
        self.default_policy
    }

    /// Change the fallback policy.
    ///
    /// Fields with an explicit restriction keep it.
    pub fn set_default_policy(&mut self, policy: Policy) {
        self.default_policy = policy;
    }

    /// Record an explicit policy for `field` on this instance only.
    ///
    /// With `None`, the current default policy is captured. Returns the
    /// instance override that was replaced, if any.
    pub fn restrict(&mut self, field: impl Into<String>, policy: Option<Policy>) -> Option<Policy> {
        let policy = policy.unwrap_or(self.default_policy);
        self.overrides.set(field, policy)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Permission checks
    // ─────────────────────────────────────────────────────────────────────────

    /// The effective policy for the root key of `key`.
    pub fn policy_for(&self, key: &str) -> Policy {
        self.overrides
            .for_path(key)
            .or_else(|| self.store_type.restrictions().for_path(key))
            .unwrap_or(self.default_policy)
    }

    /// Check if the root key of `key` may be read at this level.
    pub fn allowed_to_read(&self, key: &str) -> bool {
        self.policy_for(key).can_read()
    }

    /// Check if the root key of `key` may be written at this level.
    pub fn allowed_to_write(&self, key: &str) -> bool {
        self.policy_for(key).can_write()
    }

    fn check(&self, path: &str, access: Access) -> Result<()> {
        if self.policy_for(path).permits(access) {
            return Ok(());
        }
        tracing::warn!(path, %access, "permission denied");
        Err(StoreError::PermissionDenied {
            path: path.to_string(),
            access,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reads and writes
    // ─────────────────────────────────────────────────────────────────────────

    /// Read the value at `path`.
    ///
    /// Lazy fields are evaluated and their result returned. A path that
    /// runs through a missing or non-store field yields `None`, and a lazy
    /// field counts as non-store even when it produces one. Reads never
    /// create anything.
    pub fn read(&self, path: &str) -> Result<Option<StoreValue>> {
        self.check(path, Access::Read)?;

        let (root, rest) = split_root(path);
        let Some(value) = self.fields.get(root) else {
            return Ok(None);
        };

        let Some(rest) = rest else {
            tracing::trace!(path, "read");
            return Ok(Some(value.clone().resolve()));
        };

        match value {
            StoreValue::Store(child) => child.read(rest).map_err(|e| e.nested_under(root)),
            StoreValue::Json(_) | StoreValue::Lazy(_) => Ok(None),
        }
    }

    /// Write `value` at `path`, returning the value it replaced.
    ///
    /// Intermediate keys that do not hold a store are replaced by new,
    /// empty base stores. Permission overrides are never touched by a
    /// write.
    pub fn write(&mut self, path: &str, value: impl Into<StoreValue>) -> Result<Option<StoreValue>> {
        self.write_value(path, value.into())
    }

    fn write_value(&mut self, path: &str, value: StoreValue) -> Result<Option<StoreValue>> {
        self.check(path, Access::Write)?;

        let (root, rest) = split_root(path);
        let Some(rest) = rest else {
            tracing::trace!(path, "write");
            return Ok(self.fields.insert(root.to_string(), value));
        };

        let mut child = match self.fields.remove(root) {
            Some(StoreValue::Store(child)) => child,
            replaced => {
                tracing::debug!(
                    key = root,
                    replaced = replaced.is_some(),
                    "creating nested store"
                );
                Store::new()
            }
        };

        // The child goes back in even when its own check fails.
        let result = child
            .write_value(rest, value)
            .map_err(|e| e.nested_under(root));
        self.fields.insert(root.to_string(), StoreValue::Store(child));
        result
    }

    /// Write every entry in iteration order.
    ///
    /// Stops at the first denied write and returns its error; entries
    /// before it stay written.
    pub fn write_entries<I, K, V>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<StoreValue>,
    {
        let mut count = 0usize;
        for (key, value) in entries {
            self.write(key.as_ref(), value)?;
            count += 1;
        }
        tracing::debug!(count, "wrote entries");
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Snapshots
    // ─────────────────────────────────────────────────────────────────────────

    /// The store's public view of its fields.
    ///
    /// Empty unless the store type opts into [`EntriesMode::Readable`].
    pub fn entries(&self) -> Map<String, Value> {
        match self.store_type.entries_mode() {
            EntriesMode::Hidden => Map::new(),
            EntriesMode::Readable => self.readable_entries(),
        }
    }

    /// Every readable field rendered as JSON.
    ///
    /// Nested stores are filtered by their own policies.
    pub fn readable_entries(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .filter(|(key, _)| self.allowed_to_read(key))
            .map(|(key, value)| (key.clone(), value.to_json()))
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Trusted access
    // ─────────────────────────────────────────────────────────────────────────

    /// The nested store held directly at `field`, without permission checks.
    pub fn child(&self, field: &str) -> Option<&Store> {
        self.fields.get(field).and_then(StoreValue::as_store)
    }

    /// Mutable access to the nested store at `field`, without permission checks.
    pub fn child_mut(&mut self, field: &str) -> Option<&mut Store> {
        match self.fields.get_mut(field) {
            Some(StoreValue::Store(child)) => Some(child),
            _ => None,
        }
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Field names at this level, in no particular order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
