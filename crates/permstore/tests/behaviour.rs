//! End-to-end behaviour of permission-checked stores.

use std::sync::Arc;

use permstore::{
    Access, EntriesMode, Policy, PermstoreError, Store, StoreError, StoreType, StoreValue,
    TypeConfig,
};
use serde_json::{json, Value};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn json_at(store: &Store, path: &str) -> anyhow::Result<Option<Value>> {
    Ok(store.read(path)?.and_then(StoreValue::into_json))
}

fn app_config_type() -> Arc<StoreType> {
    StoreType::builder("AppConfig")
        .restrict("build", Some(Policy::ReadOnly))
        .restrict("api_key", Some(Policy::WriteOnly))
        .restrict("internal", Some(Policy::None))
        .entries(EntriesMode::Readable)
        .build()
}

#[test]
fn test_unrestricted_fields_are_read_write() {
    let store = Store::new();
    for key in ["a", "b:c", "", "with space", "ünïcode"] {
        assert!(store.allowed_to_read(key), "read {key}");
        assert!(store.allowed_to_write(key), "write {key}");
    }
}

#[test]
fn test_read_only_field_rejects_writes() -> anyhow::Result<()> {
    init_tracing();

    let mut trusted = Store::of_type(app_config_type());
    trusted.restrict("build", Some(Policy::ReadWrite));
    trusted.write("build", "2024.1")?;
    trusted.restrict("build", Some(Policy::ReadOnly));

    assert!(!trusted.allowed_to_write("build"));
    match trusted.write("build", "hacked") {
        Err(StoreError::PermissionDenied { path, access }) => {
            assert_eq!(path, "build");
            assert_eq!(access, Access::Write);
        }
        other => panic!("expected PermissionDenied, got {:?}", other),
    }
    assert_eq!(json_at(&trusted, "build")?, Some(json!("2024.1")));
    Ok(())
}

#[test]
fn test_round_trip() -> anyhow::Result<()> {
    let mut store = Store::new();
    store.write("a", 5)?;
    assert_eq!(store.read("a")?, Some(StoreValue::from(5)));
    Ok(())
}

#[test]
fn test_nested_auto_vivification() -> anyhow::Result<()> {
    init_tracing();

    let mut store = Store::new();
    store.write("a:b:c", 1)?;

    assert!(matches!(store.read("a")?, Some(StoreValue::Store(_))));
    assert!(matches!(store.read("a:b")?, Some(StoreValue::Store(_))));
    assert_eq!(json_at(&store, "a:b:c")?, Some(json!(1)));
    Ok(())
}

#[test]
fn test_permission_isolation_across_nesting() -> anyhow::Result<()> {
    let mut nested = Store::new();
    nested.restrict("b", Some(Policy::ReadOnly));

    let mut root = Store::new();
    root.write("a", nested)?;

    assert!(root.allowed_to_write("a"));
    let err = root.write("a:b", "x").unwrap_err();
    assert_eq!(err.path(), "a:b");
    assert_eq!(err.access(), Access::Write);
    Ok(())
}

#[test]
fn test_grandchild_governed_by_child_only() -> anyhow::Result<()> {
    let mut root = Store::new();
    root.restrict("a", Some(Policy::ReadWrite));
    root.write("a:b:c", 1)?;

    root.child_mut("a")
        .expect("a is a store")
        .restrict("b", Some(Policy::WriteOnly));

    assert!(root.read("a:b:c").is_err());
    root.write("a:b:c", 2)?;

    root.child_mut("a")
        .and_then(|a| a.child_mut("b"))
        .expect("a:b is a store")
        .restrict("c", Some(Policy::None));
    root.child_mut("a")
        .expect("a is a store")
        .restrict("b", Some(Policy::ReadWrite));

    let err = root.read("a:b:c").unwrap_err();
    assert_eq!(err.path(), "a:b:c");
    Ok(())
}

#[test]
fn test_overwriting() -> anyhow::Result<()> {
    let mut store = Store::new();
    store.write("a", 1)?;
    store.write("a", 2)?;
    assert_eq!(json_at(&store, "a")?, Some(json!(2)));

    store.write("a:deeper", 3)?;
    assert!(store.child("a").is_some());
    assert_eq!(json_at(&store, "a:deeper")?, Some(json!(3)));
    Ok(())
}

#[test]
fn test_write_entries_matches_sequential_writes() -> anyhow::Result<()> {
    let mut batched = Store::new();
    batched.write_entries([("x", json!(1)), ("y", json!(2))])?;

    let mut sequential = Store::new();
    sequential.write("x", 1)?;
    sequential.write("y", 2)?;

    assert_eq!(batched, sequential);
    Ok(())
}

#[test]
fn test_entries_snapshot_respects_policies() -> anyhow::Result<()> {
    let mut store = Store::of_type(app_config_type());
    store.write("api_key", "k")?;
    store.write("server:port", 8080)?;
    store.write("server:host", "localhost")?;

    assert_eq!(
        Value::Object(store.entries()),
        json!({ "server": { "host": "localhost", "port": 8080 } })
    );
    Ok(())
}

#[test]
fn test_type_from_config() -> anyhow::Result<()> {
    let config = TypeConfig::from_json(
        r#"{ "name": "Flags", "default_policy": "r", "fields": { "beta": "rw" } }"#,
    )?;
    let mut store = Store::of_type(StoreType::from_config(config));

    store.write("beta", true)?;
    assert!(store.write("stable", true).is_err());
    assert_eq!(store.store_type().name(), "Flags");
    Ok(())
}

#[test]
fn test_errors_convert_into_facade_error() {
    fn parse_and_write(store: &mut Store, policy: &str) -> permstore::Result<()> {
        let policy: Policy = policy.parse()?;
        store.restrict("field", Some(policy));
        store.write("field", 1)?;
        Ok(())
    }

    let mut store = Store::new();
    assert!(parse_and_write(&mut store, "rw").is_ok());

    let err = parse_and_write(&mut store, "r").unwrap_err();
    assert!(err.is_permission_denied());

    let err = parse_and_write(&mut store, "bogus").unwrap_err();
    assert!(matches!(err, PermstoreError::Core(_)));
}
