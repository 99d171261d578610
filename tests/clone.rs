// SPDX-License-Identifier: FSL-1.1
use lifo::{deep_simple_clone, error::CloneError, DeepClone, Error, Kind, Value};
use test_log::test;
use tracing::{span, Level};

#[test]
fn test_clone_one_dimensional_array() {
    let _s = span!(Level::INFO, "test_clone_one_dimensional_array").entered();
    let arr = Value::array([1, 2, 3]);
    let cloned = deep_simple_clone(&arr).unwrap();
    assert_eq!(arr, cloned);
    assert!(!arr.identical(&cloned));
}

#[test]
fn test_clone_empty_object() {
    let _s = span!(Level::INFO, "test_clone_empty_object").entered();
    let obj = Value::object(Vec::<(String, Value)>::new());
    let cloned = deep_simple_clone(&obj).unwrap();
    assert_eq!(obj, cloned);
    assert!(!obj.identical(&cloned));
}

#[test]
fn test_clone_simple_object() {
    let _s = span!(Level::INFO, "test_clone_simple_object").entered();
    let obj = Value::object([("foo", Value::from("bar")), ("baz", Value::from(123))]);
    let cloned = deep_simple_clone(&obj).unwrap();
    assert_eq!(obj, cloned);
    assert!(!obj.identical(&cloned));
}

#[test]
fn test_clone_nested_objects_and_arrays() {
    let _s = span!(Level::INFO, "test_clone_nested_objects_and_arrays").entered();
    let obj = Value::object([
        ("foo", Value::object([("bar", Value::array([1, 2, 3]))])),
        ("baz", Value::array([Value::object([("qux", "quux")])])),
    ]);
    let cloned = obj.deep_clone().unwrap();
    assert_eq!(obj, cloned);
    assert!(!obj.identical(&cloned));

    let (foo, cloned_foo) = (obj.get("foo").unwrap(), cloned.get("foo").unwrap());
    assert!(!foo.identical(&cloned_foo));
    let (bar, cloned_bar) = (foo.get("bar").unwrap(), cloned_foo.get("bar").unwrap());
    assert!(!bar.identical(&cloned_bar));

    let (baz, cloned_baz) = (obj.get("baz").unwrap(), cloned.get("baz").unwrap());
    assert!(!baz.identical(&cloned_baz));
    assert!(!baz.at(0).unwrap().identical(&cloned_baz.at(0).unwrap()));

    // mutating the clone leaves the original alone
    cloned_bar.as_array().unwrap().borrow_mut().clear();
    assert_eq!(Value::array([1, 2, 3]), bar);
}

#[test]
fn test_clone_primitives() {
    let _s = span!(Level::INFO, "test_clone_primitives").entered();
    for v in [
        Value::from("hello, world!"),
        Value::from(123),
        Value::from(true),
        Value::BigInt(1),
        Value::Null,
        Value::Undefined,
    ] {
        assert_eq!(Kind::Primitive, v.kind());
        assert_eq!(v, deep_simple_clone(&v).unwrap());
    }
}

#[test]
fn test_clone_unsupported_types() {
    let _s = span!(Level::INFO, "test_clone_unsupported_types").entered();
    let unsupported = [
        Value::function(|_| Value::Undefined),
        Value::map(Vec::<(Value, Value)>::new()),
        Value::set(Vec::<Value>::new()),
    ];
    for v in unsupported {
        match deep_simple_clone(&v) {
            Err(Error::Clone(CloneError::UnsupportedType(name))) => assert_eq!(v.type_name(), name),
            other => panic!("expected an unsupported type error, got {:?}", other),
        }
    }
}

#[test]
fn test_clone_rejects_nested_map() {
    let _s = span!(Level::INFO, "test_clone_rejects_nested_map").entered();
    let map = Value::map([(1, "one"), (2, "two"), (3, "three")]);
    let obj = Value::object([("foo", map)]);
    let err = deep_simple_clone(&obj).unwrap_err();
    assert_eq!("unsupported type encountered: map", err.to_string());
}
