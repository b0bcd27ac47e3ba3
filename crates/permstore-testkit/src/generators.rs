//! Proptest generators for property-based testing.

use proptest::prelude::*;
use serde_json::Value;

use permstore::{Policy, Store};

/// Generate a policy.
pub fn policy() -> impl Strategy<Value = Policy> {
    prop::sample::select(Policy::ALL.to_vec())
}

/// Generate a field name: short, possibly empty, never containing `:`.
pub fn field_name() -> impl Strategy<Value = String> {
    "[a-z_]{0,6}".prop_map(String::from)
}

/// Generate a path of 1 to `max_depth` segments.
pub fn path(max_depth: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(field_name(), 1..=max_depth.max(1)).prop_map(|segs| segs.join(":"))
}

/// Generate a JSON primitive.
pub fn json_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z0-9 ]{0,12}".prop_map(Value::from),
    ]
}

/// One operation against a top-level store.
#[derive(Debug, Clone)]
pub enum StoreOp {
    Write { path: String, value: Value },
    Restrict { field: String, policy: Policy },
}

impl Arbitrary for StoreOp {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            3 => (path(3), json_leaf()).prop_map(|(path, value)| StoreOp::Write { path, value }),
            1 => (field_name(), policy()).prop_map(|(field, policy)| StoreOp::Restrict { field, policy }),
        ]
        .boxed()
    }
}

impl StoreOp {
    /// Apply to `store`, returning whether it was permitted.
    pub fn apply(&self, store: &mut Store) -> bool {
        match self {
            StoreOp::Write { path, value } => store.write(path, value.clone()).is_ok(),
            StoreOp::Restrict { field, policy } => {
                store.restrict(field.clone(), Some(*policy));
                true
            }
        }
    }
}
