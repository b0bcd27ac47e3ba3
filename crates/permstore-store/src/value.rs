//! Field values.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::store::Store;

/// A zero-argument function behind a lazy field.
///
/// Evaluated every time the field is read; nothing is cached.
#[derive(Clone)]
pub struct Producer(Arc<dyn Fn() -> StoreValue + Send + Sync>);

impl Producer {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> StoreValue + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Call the function once.
    pub fn produce(&self) -> StoreValue {
        (self.0)()
    }
}

impl fmt::Debug for Producer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Producer(..)")
    }
}

/// What a field holds.
#[derive(Debug, Clone)]
pub enum StoreValue {
    /// A primitive, array, or object, passed through unmodified.
    Json(Value),

    /// A nested store with its own policies.
    Store(Store),

    /// A lazy field.
    Lazy(Producer),
}

impl StoreValue {
    /// Wrap a closure as a lazy field.
    pub fn lazy<F>(f: F) -> Self
    where
        F: Fn() -> StoreValue + Send + Sync + 'static,
    {
        StoreValue::Lazy(Producer::new(f))
    }

    /// Evaluate lazy fields until a concrete value comes out.
    pub fn resolve(self) -> StoreValue {
        let mut value = self;
        while let StoreValue::Lazy(producer) = value {
            value = producer.produce();
        }
        value
    }

    /// Render as JSON.
    ///
    /// Lazy fields are evaluated. Nested stores become objects holding
    /// their readable fields only.
    pub fn to_json(&self) -> Value {
        match self {
            StoreValue::Json(v) => v.clone(),
            StoreValue::Store(store) => Value::Object(store.readable_entries()),
            StoreValue::Lazy(producer) => producer.produce().to_json(),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            StoreValue::Json(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_json(self) -> Option<Value> {
        match self {
            StoreValue::Json(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_store(&self) -> Option<&Store> {
        match self {
            StoreValue::Store(s) => Some(s),
            _ => None,
        }
    }

    pub fn into_store(self) -> Option<Store> {
        match self {
            StoreValue::Store(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_store(&self) -> bool {
        matches!(self, StoreValue::Store(_))
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self, StoreValue::Lazy(_))
    }
}

/// Lazy fields compare by identity: two clones of the same producer are
/// equal, two separately built producers are not.
impl PartialEq for StoreValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (StoreValue::Json(a), StoreValue::Json(b)) => a == b,
            (StoreValue::Store(a), StoreValue::Store(b)) => a == b,
            (StoreValue::Lazy(a), StoreValue::Lazy(b)) => Arc::ptr_eq(&a.0, &b.0),
            _ => false,
        }
    }
}

impl From<Value> for StoreValue {
    fn from(v: Value) -> Self {
        StoreValue::Json(v)
    }
}

impl From<Store> for StoreValue {
    fn from(s: Store) -> Self {
        StoreValue::Store(s)
    }
}

impl From<Producer> for StoreValue {
    fn from(p: Producer) -> Self {
        StoreValue::Lazy(p)
    }
}

macro_rules! json_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for StoreValue {
                fn from(v: $t) -> Self {
                    StoreValue::Json(Value::from(v))
                }
            }
        )*
    };
}

json_from!(&str, String, bool, i32, i64, u32, u64, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_resolve_chained_producers() {
        let value = StoreValue::lazy(|| StoreValue::lazy(|| StoreValue::from(7)));
        assert_eq!(value.resolve(), StoreValue::from(7));
    }

    #[test]
    fn test_producer_runs_on_every_resolve() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let value = StoreValue::lazy(move || {
            StoreValue::from(counter.fetch_add(1, Ordering::SeqCst) as u64)
        });

        assert_eq!(value.clone().resolve(), StoreValue::from(0u64));
        assert_eq!(value.resolve(), StoreValue::from(1u64));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_lazy_equality_is_identity() {
        let a = StoreValue::lazy(|| StoreValue::from(1));
        let b = StoreValue::lazy(|| StoreValue::from(1));
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_to_json_passthrough() {
        let obj = json!({ "a": [1, 2, { "b": null }] });
        assert_eq!(StoreValue::from(obj.clone()).to_json(), obj);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(StoreValue::from("x").into_json(), Some(json!("x")));
        assert_eq!(StoreValue::from(true).as_json(), Some(&json!(true)));
        assert!(StoreValue::from(Store::new()).is_store());
        assert!(StoreValue::from(1.5).as_store().is_none());
    }

    #[test]
    fn test_into_store_and_is_lazy() {
        let lazy = StoreValue::lazy(|| StoreValue::from(Store::new()));
        assert!(lazy.is_lazy());
        assert!(lazy.clone().into_store().is_none());

        let resolved = lazy.resolve();
        assert!(!resolved.is_lazy());
        assert_eq!(resolved.into_store(), Some(Store::new()));
    }
}
