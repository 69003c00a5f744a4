//! Integration tests for path writes and auto-created intermediates.

use pathquill::{AccessorError, ErrorKind, Map, Mode, NestedAccessor, Value};
use serde_json::json;

fn obj(value: serde_json::Value) -> Value {
    Value::from(value)
}

#[test]
fn test_simple_write() {
    let mut root = Value::Object(Map::new());
    let mut accessor = NestedAccessor::new(&mut root);

    accessor.set_with("test.a.a", 1, Mode::Lenient).unwrap();
    let expected = obj(json!({"test": {"a": {"a": 1}}}));
    assert_eq!(accessor.get(None::<&str>).unwrap(), expected);
    assert_eq!(accessor.get("").unwrap(), expected);

    accessor.set("test.a.b", 2).unwrap();
    accessor.set_with("test.b.a", 3, Mode::Lenient).unwrap();
    assert_eq!(accessor.get("test.a").unwrap(), obj(json!({"a": 1, "b": 2})));
    assert_eq!(accessor.get("test.b").unwrap(), obj(json!({"a": 3})));

    accessor.set("test.b.a", 33).unwrap();
    assert_eq!(accessor.get("test.b").unwrap(), obj(json!({"a": 33})));

    accessor.set("test.b.c", obj(json!({"d": "e"}))).unwrap();
    assert_eq!(accessor.get("test.b.c.d").unwrap(), Value::from("e"));

    accessor.set("test.b", 0).unwrap();
    assert_eq!(accessor.get("test.b").unwrap(), Value::from(0));
    assert_eq!(
        accessor.get_with("test.b.c.d", Mode::Lenient).unwrap(),
        Value::Null
    );

    let err = accessor
        .set_with("test.b.c", 123, Mode::Strict)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CannotSetValue);
    assert_eq!(err.kind().code(), 2);
    assert_eq!(err.path(), "test.b.c");

    accessor
        .set_with("test.b.c", obj(json!({"d": "e"})), Mode::Lenient)
        .unwrap();
    assert_eq!(
        accessor.get_with("test.b.c", Mode::Lenient).unwrap(),
        obj(json!({"d": "e"}))
    );
    assert_eq!(accessor.get("test.b.c.d").unwrap(), Value::from("e"));

    accessor.set("test.b.c.f", 123).unwrap();
    assert_eq!(accessor.get("test.b.c.f").unwrap(), Value::from(123));
    assert_eq!(accessor.get("test.a").unwrap(), obj(json!({"a": 1, "b": 2})));
}

#[test]
fn test_write_overwrites_scalar_intermediate() {
    let mut root = obj(json!({"a": 1}));
    let mut accessor = NestedAccessor::new(&mut root);

    assert_eq!(accessor.get("a").unwrap(), Value::from(1));
    assert_eq!(accessor.get("").unwrap(), obj(json!({"a": 1})));

    assert_eq!(
        accessor.set_with("a.b", 2, Mode::Strict).unwrap_err(),
        AccessorError::CannotSetValue {
            path: "a.b".to_string()
        }
    );

    accessor.set_with("a.b", 22, Mode::Lenient).unwrap();
    assert_eq!(accessor.get("a").unwrap(), obj(json!({"b": 22})));

    accessor.set("c", 33).unwrap();
    assert_eq!(
        accessor.get(None::<&str>).unwrap(),
        obj(json!({"a": {"b": 22}, "c": 33}))
    );
}

#[test]
fn test_write_then_read_array() {
    let mut root = obj(json!({
        "countries": [{"name": "Russia"}, {"name": "Belarus"}],
        "test": {"a": {"b": 3}}
    }));
    let mut accessor = NestedAccessor::new(&mut root);

    assert_eq!(accessor.get("test.a.b").unwrap(), Value::from(3));

    accessor.set("test.a.c", vec![1, 2, 3]).unwrap();
    assert_eq!(accessor.get("test.a.c").unwrap(), Value::from(vec![1, 2, 3]));
}

#[test]
fn test_write_does_not_broadcast_over_arrays() {
    let mut root = obj(json!({"items": [{"id": 1}, {"id": 2}]}));
    let mut accessor = NestedAccessor::new(&mut root);

    assert!(accessor.set_with("items.id", 5, Mode::Strict).is_err());
    assert_eq!(
        accessor.get("items.id").unwrap(),
        Value::from(vec![1, 2])
    );

    accessor.set("items.id", 5).unwrap();
    assert_eq!(accessor.get("items").unwrap(), obj(json!({"id": 5})));
}

#[test]
fn test_null_intermediate_is_replaced() {
    let mut root = obj(json!({"status": null}));
    let mut accessor = NestedAccessor::new(&mut root);

    assert!(accessor.set_with("status.code", 1, Mode::Strict).is_err());
    accessor.set("status.code", 1).unwrap();
    assert_eq!(accessor.get("status.code").unwrap(), Value::from(1));
}

#[test]
fn test_empty_path_writes_empty_key() {
    let mut root = obj(json!({"a": 1}));
    let mut accessor = NestedAccessor::new(&mut root);

    accessor.set(None::<&str>, "root?").unwrap();
    accessor.set("", "still root?").unwrap();
    drop(accessor);

    assert_eq!(root, obj(json!({"a": 1, "": "still root?"})));
}

#[test]
fn test_writes_visible_after_accessor_dropped() {
    let mut root = Value::Null;
    {
        let mut accessor = NestedAccessor::with_delimiter(&mut root, "/").unwrap();
        accessor.set("server/port", 8080).unwrap();
        accessor.set(["server", "hosts"], vec!["a", "b"]).unwrap();
    }

    assert_eq!(
        root,
        obj(json!({"server": {"port": 8080, "hosts": ["a", "b"]}}))
    );
}
