//! Property-based tests for the parser and serializer.

use proptest::prelude::*;
use tijson::{parse, parse_with_limits, stringify, Limits, Object, Value};

fn config() -> ProptestConfig {
    ProptestConfig::with_cases(256)
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<f64>()
            .prop_filter("finite", |n| n.is_finite())
            .prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        any::<String>().prop_map(Value::from),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::from),
            prop::collection::btree_map(any::<String>(), inner, 0..8)
                .prop_map(|m: Object| Value::from(m)),
        ]
    })
}

/// Serialize with `ws` around every structural token.
fn spaced(value: &Value, ws: &str, out: &mut String) {
    match value {
        Value::Array(arr) => {
            out.push('[');
            out.push_str(ws);
            for (i, v) in arr.iter().enumerate() {
                if i > 0 {
                    out.push_str(ws);
                    out.push(',');
                    out.push_str(ws);
                }
                spaced(v, ws, out);
            }
            out.push_str(ws);
            out.push(']');
        }
        Value::Object(obj) => {
            out.push('{');
            out.push_str(ws);
            for (i, (k, v)) in obj.iter().enumerate() {
                if i > 0 {
                    out.push_str(ws);
                    out.push(',');
                    out.push_str(ws);
                }
                out.push_str(&stringify(&Value::from(k.as_str())));
                out.push_str(ws);
                out.push(':');
                out.push_str(ws);
                spaced(v, ws, out);
            }
            out.push_str(ws);
            out.push('}');
        }
        scalar => out.push_str(&stringify(scalar)),
    }
}

// =============================================================================
// Property: Parser Never Panics
// =============================================================================

proptest! {
    #![proptest_config(config())]

    /// Arbitrary text is either a value or an error, never a panic.
    #[test]
    fn parser_never_panics(input in any::<String>()) {
        let _ = parse(&input);
    }

    /// JSON-shaped noise reaches deeper into the grammar.
    #[test]
    fn parser_never_panics_json_alphabet(input in "[\\[\\]{}:,\"\\\\/ \\t\\n0-9eE.+\\-ntruefalsu]{0,200}") {
        let _ = parse(&input);
    }

    /// Deep nesting fails cleanly under a small limit.
    #[test]
    fn nesting_limit_never_overflows(depth in 1usize..2000) {
        let input = "[".repeat(depth);
        let result = parse_with_limits(&input, Limits::strict().with_max_nesting_depth(64));
        prop_assert!(result.is_err());
    }
}

// =============================================================================
// Property: Round Trip
// =============================================================================

proptest! {
    #![proptest_config(config())]

    /// Serialized output parses back to an equal value.
    #[test]
    fn stringify_then_parse_is_identity(value in arb_value()) {
        let text = stringify(&value);
        let reparsed = parse(&text);
        prop_assert_eq!(reparsed.as_ref(), Ok(&value), "output was {:?}", text);
    }

    /// Serializing a parsed document twice gives the same text.
    #[test]
    fn stringify_is_stable(value in arb_value()) {
        let once = stringify(&value);
        let twice = parse(&once).map(|v| stringify(&v));
        prop_assert_eq!(twice, Ok(once));
    }

    /// Whitespace between tokens does not change the parsed value.
    #[test]
    fn whitespace_is_insignificant(value in arb_value(), ws in "[ \\t\\n\\r]{0,3}") {
        let mut text = String::new();
        text.push_str(&ws);
        spaced(&value, &ws, &mut text);
        text.push_str(&ws);
        prop_assert_eq!(parse(&text), Ok(value));
    }
}
