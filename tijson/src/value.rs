//! JSON value types.
//!
//! [`Value`] is a closed tagged union that owns its children outright:
//! arrays and objects hold their elements by value, so the tree has no
//! shared substructure and `clone()` is always a deep copy.
//!
//! Typed getters return [`ErrorCode::AccessWrongType`] on a tag mismatch
//! rather than asserting. Equality is structural and is only defined
//! between two `Value`s; compare against a Rust scalar by unwrapping
//! first (`v.get_string()? == "abc"`).

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::error::{ErrorCode, JsonResult};

/// Mapping used for JSON objects.
///
/// Keys are unique. Iteration (and therefore serialization) follows the
/// map's sorted key order.
pub type Object = BTreeMap<String, Value>;

static NULL: Value = Value::Null;

/// The tag of a [`Value`].
///
/// Booleans are split into `True` and `False` tags, matching the literal
/// that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// `null`
    Null,
    /// `true`
    True,
    /// `false`
    False,
    /// Any number
    Number,
    /// A string
    String,
    /// An array
    Array,
    /// An object
    Object,
    /// Moved-from or absent value
    Invalid,
}

impl ValueType {
    /// Upper-case tag name for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Null => "NULL",
            ValueType::True => "TRUE",
            ValueType::False => "FALSE",
            ValueType::Number => "NUMBER",
            ValueType::String => "STRING",
            ValueType::Array => "ARRAY",
            ValueType::Object => "OBJECT",
            ValueType::Invalid => "INVALID",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A JSON document node.
///
/// `Invalid` never comes out of the parser; it marks a value whose
/// contents were moved out with [`Value::take`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// JSON null literal
    #[default]
    Null,
    /// JSON boolean (true/false)
    Bool(bool),
    /// JSON number as a 64-bit float
    Number(f64),
    /// JSON string (owned UTF-8)
    String(String),
    /// JSON array of values
    Array(Vec<Value>),
    /// JSON object
    Object(Object),
    /// Moved-from sentinel
    Invalid,
}

impl Value {
    /// Returns the tag of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Bool(true) => ValueType::True,
            Value::Bool(false) => ValueType::False,
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
            Value::Array(_) => ValueType::Array,
            Value::Object(_) => ValueType::Object,
            Value::Invalid => ValueType::Invalid,
        }
    }

    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is `true`.
    pub fn is_true(&self) -> bool {
        matches!(self, Value::Bool(true))
    }

    /// Returns true if this is `false`.
    pub fn is_false(&self) -> bool {
        matches!(self, Value::Bool(false))
    }

    /// Returns true if this is a boolean value.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns true if this is a number value.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns true if this is a string value.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns true if this is an array value.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns true if this is an object value.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns true if this value has been moved out of.
    pub fn is_invalid(&self) -> bool {
        matches!(self, Value::Invalid)
    }

    /// Replaces this value with `null`.
    pub fn set_null(&mut self) {
        *self = Value::Null;
    }

    /// Replaces this value with a boolean.
    pub fn set_bool(&mut self, b: bool) {
        *self = Value::Bool(b);
    }

    /// Replaces this value with a number.
    pub fn set_number(&mut self, n: f64) {
        *self = Value::Number(n);
    }

    /// Replaces this value with a string.
    pub fn set_string(&mut self, s: impl Into<String>) {
        *self = Value::String(s.into());
    }

    /// Replaces this value with an array, taking ownership of the elements.
    pub fn set_array(&mut self, arr: Vec<Value>) {
        *self = Value::Array(arr);
    }

    /// Replaces this value with an object, taking ownership of the members.
    pub fn set_object(&mut self, obj: Object) {
        *self = Value::Object(obj);
    }

    fn wrong_type(&self, expected: &'static str) -> ErrorCode {
        ErrorCode::AccessWrongType {
            expected,
            found: self.type_name(),
        }
    }

    /// Returns the boolean payload.
    pub fn get_bool(&self) -> JsonResult<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            _ => Err(self.wrong_type("boolean")),
        }
    }

    /// Returns the number payload.
    pub fn get_number(&self) -> JsonResult<f64> {
        match self {
            Value::Number(n) => Ok(*n),
            _ => Err(self.wrong_type("number")),
        }
    }

    /// Returns the string payload.
    pub fn get_string(&self) -> JsonResult<&str> {
        match self {
            Value::String(s) => Ok(s),
            _ => Err(self.wrong_type("string")),
        }
    }

    /// Returns the array payload.
    pub fn get_array(&self) -> JsonResult<&Vec<Value>> {
        match self {
            Value::Array(a) => Ok(a),
            _ => Err(self.wrong_type("array")),
        }
    }

    /// Mutable access to the owned array, for in-place edits.
    pub fn get_array_mut(&mut self) -> JsonResult<&mut Vec<Value>> {
        let err = self.wrong_type("array");
        match self {
            Value::Array(a) => Ok(a),
            _ => Err(err),
        }
    }

    /// Returns the object payload.
    pub fn get_object(&self) -> JsonResult<&Object> {
        match self {
            Value::Object(o) => Ok(o),
            _ => Err(self.wrong_type("object")),
        }
    }

    /// Mutable access to the owned object, for in-place edits.
    pub fn get_object_mut(&mut self) -> JsonResult<&mut Object> {
        let err = self.wrong_type("object");
        match self {
            Value::Object(o) => Ok(o),
            _ => Err(err),
        }
    }

    /// Get a value from an object by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Get a value from an array by index.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(arr) => arr.get(index),
            _ => None,
        }
    }

    /// Moves the contents out, leaving `Invalid` behind.
    pub fn take(&mut self) -> Value {
        std::mem::replace(self, Value::Invalid)
    }

    /// Serializes this value to compact JSON text.
    ///
    /// See [`stringify`](crate::stringify).
    pub fn stringify(&self) -> String {
        crate::serializer::stringify(self)
    }

    /// Returns the type name as a string for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Invalid => "invalid",
        }
    }
}

impl Index<&str> for Value {
    type Output = Value;

    /// Missing keys and non-objects index to `null`.
    fn index(&self, key: &str) -> &Value {
        self.get(key).unwrap_or(&NULL)
    }
}

impl Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        self.get_index(index).unwrap_or(&NULL)
    }
}

impl IndexMut<&str> for Value {
    /// Inserts `null` for a missing key. A `null` receiver becomes an
    /// empty object first.
    ///
    /// # Panics
    ///
    /// Panics if the value is neither `null` nor an object.
    #[allow(clippy::panic)]
    fn index_mut(&mut self, key: &str) -> &mut Value {
        if self.is_null() {
            *self = Value::Object(Object::new());
        }
        match self {
            Value::Object(map) => map.entry(key.to_owned()).or_insert(Value::Null),
            other => panic!("{}", other.wrong_type("object")),
        }
    }
}

impl IndexMut<usize> for Value {
    /// # Panics
    ///
    /// Panics if the value is not an array or the index is out of bounds.
    #[allow(clippy::panic)]
    fn index_mut(&mut self, index: usize) -> &mut Value {
        let found = self.type_name();
        match self {
            Value::Array(arr) => {
                let len = arr.len();
                match arr.get_mut(index) {
                    Some(v) => v,
                    None => panic!("index {index} out of bounds for array of length {len}"),
                }
            }
            _ => panic!(
                "{}",
                ErrorCode::AccessWrongType {
                    expected: "array",
                    found,
                }
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(arr: Vec<Value>) -> Self {
        Value::Array(arr)
    }
}

impl From<Object> for Value {
    fn from(obj: Object) -> Self {
        Value::Object(obj)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().collect())
    }
}

impl FromStr for Value {
    type Err = ErrorCode;

    fn from_str(s: &str) -> JsonResult<Self> {
        crate::parser::parse(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        crate::serializer::write_value(self, &mut out);
        f.write_str(&out)
    }
}
