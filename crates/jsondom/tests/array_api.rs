#![allow(missing_docs)]

use jsondom::{AccessError, Array, ArrayExt, PrimitiveKind, Value};

#[test]
fn append_primitive_and_set() {
    let mut arr: Array = std::vec::Vec::new();
    arr.append_primitive(Value::Number(1.0)).unwrap();
    arr.append_primitive(Value::new_string("x")).unwrap();
    arr.set(1, Value::new_string("y")).unwrap();

    assert_eq!(arr[0], Value::Number(1.0));
    assert_eq!(arr[1], Value::String("y".into()));
}

#[test]
fn append_primitive_rejects_containers() {
    let mut arr: Array = std::vec::Vec::new();
    assert_eq!(arr.append_primitive(Value::new_array()), Err(AccessError::InvalidInput));
}

#[test]
fn append_complex_accepts_array_object_null_rejects_scalars() {
    let mut arr: Array = std::vec::Vec::new();
    arr.append_complex(Value::new_array()).unwrap();
    arr.append_complex(Value::Null).unwrap();
    assert_eq!(arr.append_complex(Value::Boolean(true)), Err(AccessError::InvalidInput));
}

#[test]
fn get_typed_and_remove_first_primitive() {
    let mut arr: Array = std::vec::Vec::new();
    arr.append_primitive(Value::Number(1.0)).unwrap();
    arr.append_primitive(Value::Number(2.0)).unwrap();

    assert_eq!(arr.get_typed(0, PrimitiveKind::Number), Ok(&Value::Number(1.0)));
    assert_eq!(arr.get_typed(5, PrimitiveKind::Number), Err(AccessError::NotFound));

    assert!(arr.remove_first_primitive(&Value::Number(1.0)));
    assert_eq!(arr.len(), 1);
    assert!(!arr.remove_first_primitive(&Value::Number(1.0)));
}

#[test]
fn remove_at_returns_the_removed_element() {
    let mut arr: Array = std::vec::Vec::new();
    arr.append_primitive(Value::Number(1.0)).unwrap();
    arr.append_primitive(Value::Number(2.0)).unwrap();
    assert_eq!(arr.remove_at(0), Ok(Value::Number(1.0)));
    assert_eq!(arr, std::vec![Value::Number(2.0)]);
    assert_eq!(arr.remove_at(9), Err(AccessError::NotFound));
}

#[test]
fn parsed_array_elements_are_indexable() {
    let out = jsondom::parse(br#"[1, 2, [3, 4]]"#);
    let arr = out.root.as_array().unwrap();
    assert_eq!(arr.len(), 3);
    let nested = arr[2].as_array().unwrap();
    assert_eq!(nested.len(), 2);
}
