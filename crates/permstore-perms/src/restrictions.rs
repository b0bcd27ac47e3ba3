//! Per-field policy tables.

use std::collections::HashMap;

use permstore_core::{root_key, Policy};

/// Explicit policies keyed by field name.
///
/// An absent entry means the field falls back to its store's default
/// policy. Field names are kept verbatim; one containing the separator can
/// never be hit by a lookup through [`Restrictions::for_path`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Restrictions {
    fields: HashMap<String, Policy>,
}

impl Restrictions {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a policy for `field`, returning the one it replaced.
    pub fn set(&mut self, field: impl Into<String>, policy: Policy) -> Option<Policy> {
        self.fields.insert(field.into(), policy)
    }

    /// The explicit policy for `field`, if any.
    pub fn get(&self, field: &str) -> Option<Policy> {
        self.fields.get(field).copied()
    }

    /// The explicit policy for the root key of `path`, if any.
    pub fn for_path(&self, path: &str) -> Option<Policy> {
        self.get(root_key(path))
    }

    /// Drop the explicit policy for `field`.
    pub fn remove(&mut self, field: &str) -> Option<Policy> {
        self.fields.remove(field)
    }

    /// Check if `field` has an explicit policy.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(field, policy)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Policy)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, Policy)> for Restrictions {
    fn from_iter<I: IntoIterator<Item = (K, Policy)>>(iter: I) -> Self {
        let mut table = Restrictions::new();
        for (field, policy) in iter {
            table.set(field, policy);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_previous() {
        let mut table = Restrictions::new();
        assert_eq!(table.set("token", Policy::ReadOnly), None);
        assert_eq!(table.set("token", Policy::None), Some(Policy::ReadOnly));
        assert_eq!(table.get("token"), Some(Policy::None));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_for_path_uses_root_key() {
        let table: Restrictions = [("user", Policy::ReadOnly)].into_iter().collect();
        assert_eq!(table.for_path("user:name"), Some(Policy::ReadOnly));
        assert_eq!(table.for_path("user"), Some(Policy::ReadOnly));
        assert_eq!(table.for_path("username"), None);
    }

    #[test]
    fn test_colon_field_never_matches_path() {
        let table: Restrictions = [("a:b", Policy::None)].into_iter().collect();
        assert!(table.contains("a:b"));
        assert_eq!(table.for_path("a:b"), None);
    }

    #[test]
    fn test_remove() {
        let mut table = Restrictions::new();
        table.set("x", Policy::WriteOnly);
        assert_eq!(table.remove("x"), Some(Policy::WriteOnly));
        assert!(table.is_empty());
    }
}
