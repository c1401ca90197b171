//! Compact JSON serialization.
//!
//! Output contains no insignificant whitespace. Object members follow the
//! map's key order. Numbers use the shortest representation that parses
//! back to the same `f64`, so `parse(stringify(v)) == v` for every value
//! the parser can produce.

use crate::value::Value;

/// Integral values below this magnitude are written without a fraction.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0; // 2^53

/// Serialize a value to a new string.
///
/// `Value::Invalid` produces an empty string, which is not a JSON document.
pub fn stringify(value: &Value) -> String {
    let mut output = String::new();
    write_value(value, &mut output);
    output
}

/// Append the serialized form of `value` to `output`.
pub fn write_value(value: &Value, output: &mut String) {
    match value {
        Value::Null => output.push_str("null"),
        Value::Bool(true) => output.push_str("true"),
        Value::Bool(false) => output.push_str("false"),
        Value::Number(n) => write_number(*n, output),
        Value::String(s) => write_string(s, output),
        Value::Array(arr) => write_array(arr, output),
        Value::Object(obj) => {
            output.push('{');
            for (i, (key, v)) in obj.iter().enumerate() {
                if i > 0 {
                    output.push(',');
                }
                write_string(key, output);
                output.push(':');
                write_value(v, output);
            }
            output.push('}');
        }
        Value::Invalid => {}
    }
}

/// Serialize a number.
///
/// Non-finite values cannot come from the parser, only from
/// [`Value::set_number`]; JSON has no spelling for them, so they are
/// written as `null`.
pub fn write_number(n: f64, output: &mut String) {
    if !n.is_finite() {
        output.push_str("null");
    } else if n.fract() == 0.0 && n.abs() < MAX_EXACT_INT {
        let mut buf = itoa::Buffer::new();
        output.push_str(buf.format(n as i64));
    } else {
        let mut buf = ryu::Buffer::new();
        output.push_str(buf.format_finite(n));
    }
}

/// Serialize a string with JSON escaping.
///
/// `/` is always escaped as `\/`. Non-ASCII passes through as UTF-8.
pub fn write_string(s: &str, output: &mut String) {
    output.push('"');
    for ch in s.chars() {
        match ch {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '/' => output.push_str("\\/"),
            '\x08' => output.push_str("\\b"),
            '\x0C' => output.push_str("\\f"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c < '\x20' => {
                // Other control characters as \u00XX
                output.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => output.push(c),
        }
    }
    output.push('"');
}

fn write_array(arr: &[Value], output: &mut String) {
    output.push('[');
    for (i, value) in arr.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }
        write_value(value, output);
    }
    output.push(']');
}
