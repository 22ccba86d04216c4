#![allow(missing_docs)]
#![expect(clippy::needless_raw_string_hashes)]

mod common;

use jsondom::{serialize, ErrorKind, Value};

#[test]
fn compact_output_matches_scenario_9() {
    let parsed = jsondom::parse(br#"{"a":1,"b":true,"c":null,"d":"string"}"#);
    assert_eq!(parsed.error, ErrorKind::None);
    insta::assert_snapshot!(serialize(&parsed.root, 0), @r#"{"a":1.000000,"b":true,"c":null,"d":"string"}"#);
}

#[test]
fn indented_output_matches_scenario_10() {
    let parsed = jsondom::parse(br#"[1, {"k0":[2,{"k1":3},4]}, 5]"#);
    assert_eq!(parsed.error, ErrorKind::None);
    let expected = "[\n 1.000000,\n {\n  \"k0\": [\n   2.000000,\n   {\n    \"k1\": 3.000000\n   },\n   4.000000\n  ]\n },\n 5.000000\n]";
    assert_eq!(serialize(&parsed.root, 1), expected);
}

#[test]
fn parsed_tree_shape_matches_the_sample_document() {
    let parsed = jsondom::parse(common::SAMPLE.as_bytes());
    assert_eq!(parsed.error, ErrorKind::None);
    let root = parsed.root.as_object().unwrap();

    assert_eq!(root.get("pi"), Some(&Value::Number(3.14)));
    assert_eq!(root.get("e").unwrap().as_object().unwrap().get("is_rational"), Some(&Value::Boolean(false)));
    let tags = root.get("tags").unwrap().as_array().unwrap();
    assert_eq!(tags, &std::vec![Value::new_string("math"), Value::new_string("constant")]);
    assert_eq!(root.get("nothing"), Some(&Value::Null));
    let empties = root.get("empties").unwrap().as_object().unwrap();
    assert!(empties.get("obj").unwrap().is_empty());
    assert!(empties.get("arr").unwrap().is_empty());
}

#[test]
fn compact_serialization_is_stable_across_runs() {
    let parsed = jsondom::parse(common::SAMPLE.as_bytes());
    let rendered_twice = (serialize(&parsed.root, 0), serialize(&parsed.root, 0));
    assert_eq!(rendered_twice.0, rendered_twice.1);
}

#[test]
fn named_escapes_round_trip_through_serialize_and_parse() {
    let parsed = jsondom::parse(b"[\"a\\\"b\\\\c\\/d\\n\"]");
    assert_eq!(parsed.error, ErrorKind::None);
    let rendered = serialize(&parsed.root, 0);
    let reparsed = jsondom::parse(rendered.as_bytes());
    assert_eq!(reparsed.error, ErrorKind::None);
    assert_eq!(parsed.root, reparsed.root);
}
