//! Test fixtures and helpers.
//!
//! Common store types and populated stores for tests.

use std::sync::Arc;

use permstore::{EntriesMode, Policy, Store, StoreType, StoreValue};
use serde_json::json;

/// A session type: read-only identity, hidden token, write-only password.
pub fn session_type() -> Arc<StoreType> {
    StoreType::builder("Session")
        .restrict("user_id", Some(Policy::ReadOnly))
        .restrict("token", Some(Policy::None))
        .restrict("password", Some(Policy::WriteOnly))
        .entries(EntriesMode::Readable)
        .build()
}

/// A configuration type that hides everything not explicitly listed.
pub fn config_type() -> Arc<StoreType> {
    StoreType::builder("Config")
        .default_policy(Policy::None)
        .restrict("version", Some(Policy::ReadOnly))
        .restrict("settings", Some(Policy::ReadWrite))
        .entries(EntriesMode::Readable)
        .build()
}

/// A store plus the type it was built from.
pub struct StoreFixture {
    pub store_type: Arc<StoreType>,
    pub store: Store,
}

impl StoreFixture {
    /// An empty store of `store_type`.
    pub fn new(store_type: Arc<StoreType>) -> Self {
        Self {
            store: Store::of_type(store_type.clone()),
            store_type,
        }
    }

    /// A session store with `user_id` and `token` already filled in.
    ///
    /// Restricted fields are populated through [`StoreFixture::seed`].
    pub fn session() -> Self {
        let mut fixture = Self::new(session_type());
        fixture.seed("user_id", json!("user-1"));
        fixture.seed("token", json!("secret-token"));
        fixture
    }

    /// A config store with a version and a couple of nested settings.
    pub fn config() -> Self {
        let mut fixture = Self::new(config_type());
        fixture.seed("version", json!(3));
        fixture.seed("settings:ui:theme", json!("dark"));
        fixture.seed("settings:net:timeout_ms", json!(5000));
        fixture
    }

    /// Write `value` at `path` regardless of the root key's policy.
    ///
    /// The root key is opened with an instance override for the write and
    /// then pinned back to the policy it had before.
    pub fn seed(&mut self, path: &str, value: impl Into<StoreValue>) {
        let root = permstore::core::root_key(path).to_string();
        let previous = self.store.policy_for(&root);
        self.store.restrict(root.clone(), Some(Policy::ReadWrite));
        self.store
            .write(path, value)
            .expect("seeding an unrestricted root cannot be denied");
        self.store.restrict(root, Some(previous));
    }
}
