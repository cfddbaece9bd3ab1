//! End-to-end tests for the typed cell contract.

use std::collections::BTreeMap;

use tycell::{OpKind, TypeMismatch, TypeTag, TypedCell, Value};

#[test]
fn integer_cell_lifecycle() {
    // Seed with 5: bound type is integer.
    let mut cell = TypedCell::new(5);
    assert_eq!(cell.bound_type(), TypeTag::Int);
    assert_eq!(cell.read().unwrap(), &Value::Int(5));

    // Same-type assignment replaces the value.
    cell.assign(10).unwrap();
    assert_eq!(cell.read().unwrap(), &Value::Int(10));

    // Wrong-type assignment fails and leaves the value intact.
    let err = cell.assign("hello").unwrap_err();
    assert_eq!(
        err,
        TypeMismatch {
            expected: TypeTag::Int,
            actual: TypeTag::Str,
            op: OpKind::Assign,
        }
    );
    assert_eq!(cell.read().unwrap(), &Value::Int(10));
}

#[test]
fn string_cell_rejects_float() {
    let mut cell = TypedCell::new("x");
    let err = cell.assign(3.14).unwrap_err();
    assert_eq!(err.expected, TypeTag::Str);
    assert_eq!(err.actual, TypeTag::Float);
    assert_eq!(err.op, OpKind::Assign);
}

#[test]
fn list_cells_accept_any_list() {
    let mut cell = TypedCell::new(Value::List(vec![
        Value::Int(1),
        Value::Int(2),
        Value::Int(3),
    ]));
    assert_eq!(cell.bound_type(), TypeTag::List);

    cell.assign(Value::List(vec![Value::Int(4), Value::Int(5)]))
        .unwrap();
    assert_eq!(
        cell.read().unwrap(),
        &Value::List(vec![Value::Int(4), Value::Int(5)])
    );
}

#[test]
fn map_cells_accept_any_map() {
    let mut entries = BTreeMap::new();
    entries.insert("a".to_owned(), Value::Int(1));
    let mut cell = TypedCell::new(entries);
    assert_eq!(cell.bound_type(), TypeTag::Map);

    cell.assign(BTreeMap::<String, Value>::new()).unwrap();
    assert_eq!(cell.read().unwrap(), &Value::Map(BTreeMap::new()));
}

#[test]
fn read_twice_returns_equal_values() {
    let cell = TypedCell::new(vec![Value::Int(1), Value::Int(2)]);
    let first = cell.read().unwrap().clone();
    let second = cell.read().unwrap().clone();
    assert_eq!(first, second);
    assert_eq!(cell.bound_type(), TypeTag::List);
}

#[test]
fn failed_operations_never_change_the_bound_type() {
    let mut cell = TypedCell::new(true);
    for wrong in [Value::Int(1), Value::Str("no".into()), Value::Unit] {
        assert!(cell.assign(wrong).is_err());
        assert_eq!(cell.bound_type(), TypeTag::Bool);
    }
    assert_eq!(cell.read().unwrap(), &Value::Bool(true));
}

#[test]
fn cell_to_cell_flow_matches_the_original_operators() {
    // x << 3; y << x; x << 4; x >> y
    let mut x = TypedCell::new(0);
    (&mut x << Value::Int(3)).unwrap();
    assert_eq!(x.to_string(), "3");

    let mut y = TypedCell::new(0);
    (&mut y << &x).unwrap();
    assert_eq!(y.to_string(), "3");

    (&mut x << Value::Int(4)).unwrap();
    assert_eq!(x.to_string(), "4");
    assert_eq!(y.to_string(), "3");

    (&x >> &mut y).unwrap();
    assert_eq!(y.to_string(), "4");
}

#[test]
fn mismatch_error_is_std_error() {
    let mut z = TypedCell::new("hello, world");
    let err = z.assign(42).unwrap_err();
    let dynamic: &dyn std::error::Error = &err;
    assert_eq!(
        dynamic.to_string(),
        "type mismatch on assign: expected string, got integer"
    );
}

#[test]
fn cells_clone_independently() {
    let mut a = TypedCell::new(1);
    let mut b = a.clone();
    a.assign(2).unwrap();
    b.assign(3).unwrap();
    assert_eq!(a.read().unwrap(), &Value::Int(2));
    assert_eq!(b.read().unwrap(), &Value::Int(3));
}

#[test]
fn json_values_seed_cells() {
    let seed = Value::from(serde_json::json!([1, 2, 3]));
    let mut cell = TypedCell::new(seed);
    assert_eq!(cell.bound_type(), TypeTag::List);

    cell.assign(Value::from(serde_json::json!(["a", "b"])))
        .unwrap();
    let err = cell.assign(Value::from(serde_json::json!(5))).unwrap_err();
    assert_eq!(err.actual, TypeTag::Int);
}
