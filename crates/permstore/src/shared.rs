//! A store shared between threads.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::{Map, Value};

use permstore_perms::{StoreType, TypeConfig};
use permstore_store::{Store, StoreValue};

use crate::error::Result;

/// A [`Store`] behind one lock.
///
/// Every call holds the lock for its whole descent through nested stores,
/// so creating intermediate stores is atomic with respect to other
/// writers. Clones share the same store.
///
/// A panic while the lock is held does not make the store unusable; the
/// lock is recovered on the next call.
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<RwLock<Store>>,
}

impl SharedStore {
    /// Create a shared, empty store of the base type.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shared, empty store of a declared type.
    pub fn of_type(store_type: Arc<StoreType>) -> Self {
        Self::from(Store::of_type(store_type))
    }

    /// Create a shared store from a JSON type configuration.
    pub fn from_config_json(text: &str) -> Result<Self> {
        let config = TypeConfig::from_json(text)?;
        Ok(Self::of_type(config.build()))
    }

    fn lock_read(&self) -> RwLockReadGuard<'_, Store> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_write(&self) -> RwLockWriteGuard<'_, Store> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn allowed_to_read(&self, key: &str) -> bool {
        self.lock_read().allowed_to_read(key)
    }

    pub fn allowed_to_write(&self, key: &str) -> bool {
        self.lock_read().allowed_to_write(key)
    }

    /// See [`Store::read`].
    pub fn read(&self, path: &str) -> Result<Option<StoreValue>> {
        Ok(self.lock_read().read(path)?)
    }

    /// See [`Store::write`].
    pub fn write(&self, path: &str, value: impl Into<StoreValue>) -> Result<Option<StoreValue>> {
        Ok(self.lock_write().write(path, value)?)
    }

    /// See [`Store::write_entries`]. The whole batch runs under one lock.
    pub fn write_entries<I, K, V>(&self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<StoreValue>,
    {
        Ok(self.lock_write().write_entries(entries)?)
    }

    /// See [`Store::entries`].
    pub fn entries(&self) -> Map<String, Value> {
        self.lock_read().entries()
    }

    /// Run `f` with shared access to the underlying store.
    pub fn with<R>(&self, f: impl FnOnce(&Store) -> R) -> R {
        f(&self.lock_read())
    }

    /// Run `f` with exclusive access to the underlying store.
    ///
    /// This is trusted access: restrictions and default policies can be
    /// changed from here.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Store) -> R) -> R {
        tracing::debug!("exclusive store access");
        f(&mut self.lock_write())
    }

    /// Take the store back out if this is the last handle.
    pub fn try_unwrap(self) -> std::result::Result<Store, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(lock) => Ok(lock.into_inner().unwrap_or_else(PoisonError::into_inner)),
            Err(inner) => Err(Self { inner }),
        }
    }
}

impl From<Store> for SharedStore {
    fn from(store: Store) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }
}
