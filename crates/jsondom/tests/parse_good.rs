#![allow(missing_docs)]
#![expect(clippy::needless_raw_string_hashes)]

mod common;

use jsondom::{ErrorKind, Value};
use rstest::rstest;

#[rstest]
#[case::empty_object(r#"{}"#)]
#[case::empty_array(r#"[]"#)]
#[case::mixed_array(r#"[1, 3.14, false, "hello world"]"#)]
#[case::nested_object(r#"{"pi":3.14,"e":{"is_rational":false}}"#)]
#[case::unicode_escape("[\"\\u00A9\"]")]
fn parses_without_error(#[case] input: &str) {
    let out = jsondom::parse(input.as_bytes());
    assert_eq!(out.error, ErrorKind::None, "input: {input}");
}

#[test]
fn empty_object_has_size_zero() {
    let out = jsondom::parse(b"{}");
    assert_eq!(out.error, ErrorKind::None);
    assert_eq!(out.root.size(), Some(0));
    assert!(out.root.as_object().unwrap().is_empty());
}

#[test]
fn empty_array_has_size_zero() {
    let out = jsondom::parse(b"[]");
    assert_eq!(out.error, ErrorKind::None);
    assert_eq!(out.root.size(), Some(0));
    assert!(out.root.as_array().unwrap().is_empty());
}

#[test]
fn mixed_array_has_four_elements_of_the_right_kind() {
    let out = jsondom::parse(br#"[1, 3.14, false, "hello world"]"#);
    assert_eq!(out.error, ErrorKind::None);
    let arr = out.root.as_array().unwrap();
    assert_eq!(arr.len(), 4);
    assert_eq!(arr[0], Value::Number(1.0));
    assert_eq!(arr[1], Value::Number(3.14));
    assert_eq!(arr[2], Value::Boolean(false));
    assert_eq!(arr[3], Value::String("hello world".into()));
}

#[test]
fn nested_object_fields_are_reachable() {
    let out = jsondom::parse(br#"{"pi":3.14,"e":{"is_rational":false}}"#);
    assert_eq!(out.error, ErrorKind::None);
    let root = out.root.as_object().unwrap();
    assert_eq!(root.get("pi"), Some(&Value::Number(3.14)));
    let e = root.get("e").unwrap().as_object().unwrap();
    assert_eq!(e.get("is_rational"), Some(&Value::Boolean(false)));
}

#[test]
fn unicode_escape_decodes_to_utf8_bytes() {
    let out = jsondom::parse(b"[\"\\u00A9\"]");
    assert_eq!(out.error, ErrorKind::None);
    let arr = out.root.as_array().unwrap();
    assert_eq!(arr[0].as_str().unwrap().as_bytes(), [0xC2, 0xA9]);
}

#[test]
fn sample_document_parses_cleanly() {
    let out = jsondom::parse(common::SAMPLE.as_bytes());
    assert_eq!(out.error, ErrorKind::None);
}
