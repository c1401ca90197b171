//! tijson - strict RFC 8259 JSON for Rust.
//!
//! A tagged-union value model, a recursive-descent parser that rejects
//! anything outside the JSON grammar, and a compact serializer whose
//! output always parses back to an equal value.
//!
//! # Architecture
//!
//! - [`value`] - the [`Value`] tree, accessors and conversions
//! - [`parser`] - text to [`Value`], one method per grammar production
//! - [`serializer`] - [`Value`] to text
//! - [`cursor`] - forward-only byte cursor used by the parser
//! - [`limits`] - nesting depth and input size bounds
//! - [`error`] - the [`ErrorCode`] taxonomy
//!
//! # Example
//!
//! ```
//! use tijson::{parse, ErrorCode, Value};
//!
//! let mut value = parse(r#"{"b": [1, 2.5, "x"], "a": null}"#).unwrap();
//! assert!(value["a"].is_null());
//! assert_eq!(value["b"][1].get_number(), Ok(2.5));
//!
//! value["c"] = Value::from(true);
//! assert_eq!(value.stringify(), r#"{"a":null,"b":[1,2.5,"x"],"c":true}"#);
//!
//! assert_eq!(parse("[1,]"), Err(ErrorCode::InvalidValue));
//! ```

// Library code reports failures through ErrorCode instead of panicking.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod cursor;
pub mod error;
pub mod limits;
pub mod parser;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod serializer;
pub mod value;

// Re-export commonly used types
pub use error::{ErrorCode, JsonResult};
pub use limits::Limits;
pub use parser::{parse, parse_with_limits, Parser};
pub use serializer::stringify;
pub use value::{Object, Value, ValueType};
