//! End-to-end rendering tests: value trees in, ADM text out.

use adm_core::{FormatMode, Value};
use adm_encoder::{render, render_with, EncoderOptions, INDENT};
use serde_json::json;

fn object(members: Vec<(&str, Value)>) -> Value {
    Value::object(members.into_iter().map(|(k, v)| (k.to_string(), v))).unwrap()
}

/// Plain JSON equivalent of a tree without typed scalars or multisets.
fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Boolean(b) => json!(b),
        Value::String(s) => json!(s),
        Value::Int32(i) => json!(i),
        Value::Null => serde_json::Value::Null,
        Value::Array(items) => serde_json::Value::Array(items.iter().map(to_json).collect()),
        Value::Object(members) => serde_json::Value::Object(
            members
                .iter()
                .map(|(k, v)| (k.clone(), to_json(v)))
                .collect(),
        ),
        other => panic!("{} has no plain JSON form", other.type_name()),
    }
}

fn pretty_json(value: &serde_json::Value) -> String {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    serde::Serialize::serialize(value, &mut serializer).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_plain_tree_matches_serde_json() {
    let value = object(vec![
        ("zeta", Value::Int32(1)),
        ("alpha", Value::string("say \"hi\" \\ ok").unwrap()),
        (
            "list",
            Value::array(vec![Value::Boolean(false), Value::Null, Value::array(vec![])]),
        ),
        ("nested", object(vec![("x", Value::Int32(-5))])),
        ("empty", object(vec![])),
    ]);
    let plain = to_json(&value);

    assert_eq!(render(&value, false).unwrap(), serde_json::to_string(&plain).unwrap());
    assert_eq!(render(&value, true).unwrap(), pretty_json(&plain));
}

#[test]
fn test_multiset_pretty() {
    let value = Value::multiset(vec![Value::Int32(1), Value::tiny_int(2).unwrap()]);

    assert_eq!(
        render(&value, true).unwrap(),
        "{\n    1,\n    tinyint(\"2\")\n}"
    );
}

#[test]
fn test_multiset_object_multiset_nesting() {
    let value = Value::multiset(vec![
        object(vec![(
            "a",
            Value::multiset(vec![Value::Int32(1), Value::Null]),
        )]),
        Value::Missing,
    ]);

    assert_eq!(render(&value, false).unwrap(), r#"{{"a":{1,null}},missing}"#);
    assert_eq!(
        render(&value, true).unwrap(),
        "{\n    {\n        \"a\": {\n            1,\n            null\n        }\n    },\n    missing\n}"
    );
}

#[test]
fn test_array_inside_multiset_keeps_brackets() {
    let value = Value::multiset(vec![
        Value::array(vec![Value::Int32(1), Value::tiny_int(2).unwrap()]),
        Value::multiset(vec![]),
        Value::multiset(vec![Value::point(1.0, 2.0)]),
    ]);

    assert_eq!(
        render(&value, false).unwrap(),
        r#"{[1,tinyint("2")],{},{point("1, 2")}}"#
    );
}

#[test]
fn test_typed_scalars_in_object() {
    let start = adm_core::temporal::datetime(2020, 1, 1, 0, 0, 0).unwrap();
    let end = adm_core::temporal::datetime(2020, 1, 2, 3, 4, 5).unwrap();
    let value = object(vec![
        (
            "shape",
            Value::polygon(vec![0.0, 1.0, 2.0, 2.5], vec![0.0, 1.0, 0.0, 0.5]).unwrap(),
        ),
        ("span", Value::interval(start, end)),
        ("id", Value::uuid(uuid::Uuid::nil())),
        ("big", Value::big_int(-9).unwrap()),
        ("gone", Value::Missing),
    ]);

    assert_eq!(
        render(&value, true).unwrap(),
        concat!(
            "{\n",
            "    \"shape\": polygon(\"0,0 1,1 2,0 2.5,0.5\"),\n",
            "    \"span\": interval(datetime(\"2020-01-01T00:00:00\"), datetime(\"2020-01-02T03:04:05\")),\n",
            "    \"id\": uuid(\"00000000-0000-0000-0000-000000000000\"),\n",
            "    \"big\": bigint(\"-9\"),\n",
            "    \"gone\": missing\n",
            "}"
        )
    );
}

#[test]
fn test_format_modes() {
    let value = Value::array(vec![
        Value::double(2.5).unwrap(),
        Value::float(f64::NEG_INFINITY).unwrap(),
        Value::time(1, 2, 3).unwrap(),
    ]);

    let load = render_with(&value, &EncoderOptions::new(false, FormatMode::LoadDataset)).unwrap();
    assert_eq!(load, r#"[double("2.5"),float("-INF"),time("01:02:03")]"#);

    let insert =
        render_with(&value, &EncoderOptions::new(false, FormatMode::DirectInsertion)).unwrap();
    assert_eq!(insert, r#"[double(2.5),float("-INF"),time("01:02:03")]"#);
}

#[test]
fn test_pretty_and_compact_agree_modulo_whitespace() {
    let value = object(vec![
        (
            "bag",
            Value::multiset(vec![
                Value::multiset(vec![Value::string("a").unwrap(), Value::Null]),
                Value::hex("00FF").unwrap(),
            ]),
        ),
        ("n", Value::Int32(3)),
    ]);

    let compact = render(&value, false).unwrap();
    let pretty: String = render(&value, true)
        .unwrap()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    assert_eq!(compact, pretty);
    assert_eq!(compact, r#"{"bag":{{"a",null},hex("00FF")},"n":3}"#);
}

#[test]
fn test_extreme_floats_render_in_exponent_form() {
    let value = Value::multiset(vec![
        Value::double(1.5361363305686634e307).unwrap(),
        Value::float(-6.4e37).unwrap(),
        Value::point(1e30, 2.5e-7),
    ]);

    assert_eq!(
        render(&value, false).unwrap(),
        r#"{double("1.5361363305686634e307"),float("-6.4e37"),point("1e30, 2.5e-7")}"#
    );

    let insert =
        render_with(&value, &EncoderOptions::new(false, FormatMode::DirectInsertion)).unwrap();
    assert!(insert.starts_with("{double(1.5361363305686634e307),float(-6.4e37),"));
}
