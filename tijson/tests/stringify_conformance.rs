//! Serializer conformance tests.
//!
//! Exact output is checked where the compact form is fixed; everything
//! else is checked by parsing the output back and comparing values.

use pretty_assertions::assert_eq;
use tijson::{parse, stringify, Object, Value};

fn assert_roundtrip(input: &str) {
    let value = parse(input).unwrap_or_else(|e| panic!("{:?} failed: {}", input, e));
    let text = stringify(&value);
    let reparsed = parse(&text).unwrap_or_else(|e| panic!("output {:?} failed: {}", text, e));
    assert_eq!(reparsed, value, "round trip of {:?} via {:?}", input, text);
}

fn assert_compact(input: &str, expected: &str) {
    let value = parse(input).unwrap_or_else(|e| panic!("{:?} failed: {}", input, e));
    assert_eq!(stringify(&value), expected, "input {:?}", input);
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn roundtrip_literals() {
    for input in ["null", "false", "true"] {
        assert_roundtrip(input);
    }
}

#[test]
fn roundtrip_numbers() {
    for input in [
        "0",
        "-0",
        "1",
        "-1",
        "1.5",
        "-1.5",
        "3.25",
        "1e+20",
        "1.234e+20",
        "1.234e-20",
        "1.0000000000000002",
        "4.9406564584124654e-324",
        "-4.9406564584124654e-324",
        "2.2250738585072009e-308",
        "-2.2250738585072009e-308",
        "2.2250738585072014e-308",
        "-2.2250738585072014e-308",
        "1.7976931348623157e+308",
        "-1.7976931348623157e+308",
        "0.1",
        "123456.789",
        "9007199254740993",
    ] {
        assert_roundtrip(input);
    }
}

#[test]
fn roundtrip_strings() {
    for input in [
        r#""""#,
        r#""Hello""#,
        r#""Hello\nWorld""#,
        r#""\" \\ / \b \f \n \r \t""#,
        r#""Hello\u0000World""#,
        r#""\u0001\u001F\u007F""#,
        r#""𝄞 €""#,
    ] {
        assert_roundtrip(input);
    }
}

#[test]
fn roundtrip_containers() {
    assert_roundtrip("[]");
    assert_roundtrip(r#"[null,false,true,123,"abc",[1,2,3]]"#);
    assert_roundtrip("{}");
    assert_roundtrip(concat!(
        r#"{"n":null,"f":false,"t":true,"i":123,"s":"abc","#,
        r#""a":[1,2,3],"o":{"1":1,"2":2,"3":3}}"#
    ));
}

// ============================================================================
// Compact output
// ============================================================================

#[test]
fn compact_removes_whitespace() {
    assert_compact(" [ 1 , 2 , [ ] , { } ] ", "[1,2,[],{}]");
    assert_compact("{ \"a\" : [ true , null ] }", r#"{"a":[true,null]}"#);
}

#[test]
fn compact_integers_have_no_fraction() {
    assert_compact("1.0", "1");
    assert_compact("-0", "0");
    assert_compact("1e2", "100");
    assert_compact("9007199254740991", "9007199254740991");
}

#[test]
fn compact_fractions_use_shortest_form() {
    assert_compact("0.1", "0.1");
    assert_compact("3.250", "3.25");
    assert_compact("1.0000000000000002", "1.0000000000000002");
}

#[test]
fn compact_object_keys_sorted() {
    assert_compact(r#"{"b":1,"a":2,"c":{"z":0,"y":0}}"#, r#"{"a":2,"b":1,"c":{"y":0,"z":0}}"#);
}

#[test]
fn compact_escapes() {
    assert_compact(r#""A\/""#, r#""A\/""#);
    assert_compact(r#""\u0001""#, r#""\u0001""#);
    assert_compact(r#""\u001f""#, r#""\u001f""#);
    assert_compact(r#""€""#, "\"\u{20AC}\"");
}

// ============================================================================
// Values built in code
// ============================================================================

#[test]
fn built_value_stringifies() {
    let mut obj = Object::new();
    obj.insert("name".to_string(), Value::from("tijson"));
    obj.insert("tags".to_string(), Value::from(vec![Value::from(1), Value::from(true)]));
    let value = Value::from(obj);

    assert_eq!(value.stringify(), r#"{"name":"tijson","tags":[1,true]}"#);
    assert_eq!(value.to_string(), value.stringify());
}

#[test]
fn non_finite_numbers_become_null() {
    let value = Value::from(vec![Value::from(f64::NAN), Value::from(f64::NEG_INFINITY)]);
    let text = value.stringify();
    assert_eq!(text, "[null,null]");
    assert!(parse(&text).is_ok(), "output must remain valid JSON");
}

#[test]
fn invalid_value_stringifies_empty() {
    assert_eq!(stringify(&Value::Invalid), "");
}
