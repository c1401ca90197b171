//! Recursive-descent JSON parser.
//!
//! Each grammar production is one method. The leading byte of a value
//! selects its production and there is no backtracking once a branch is
//! chosen. Any violation aborts the whole parse with the [`ErrorCode`]
//! naming the production that failed; no partial value is returned.
//!
//! - Literals: `null`, `true`, `false`
//! - Numbers: RFC 8259 grammar, converted to `f64` (overflow is
//!   `NUMBER_TOO_BIG`, underflow to zero is accepted)
//! - Strings: escapes, control characters, `\u` surrogate pairs
//! - Arrays and objects, bounded by [`Limits::max_nesting_depth`]

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::error::{ErrorCode, JsonResult};
use crate::limits::Limits;
use crate::value::{Object, Value};

/// JSON parser over a complete input document.
pub struct Parser<'a> {
    text: &'a str,
    cursor: Cursor<'a>,
    limits: Limits,
    depth: u64,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given input.
    pub fn new(text: &'a str, limits: Limits) -> Self {
        Self {
            text,
            cursor: Cursor::new(text.as_bytes()),
            limits,
            depth: 0,
        }
    }

    /// Parse the input and return the root value.
    pub fn parse(mut self) -> JsonResult<Value> {
        debug!(
            len = self.text.len(),
            max_depth = self.limits.max_nesting_depth,
            "parsing JSON document"
        );
        let result = self.parse_root();
        match &result {
            Ok(value) => trace!(root = value.type_name(), "parsed JSON document"),
            Err(e) => debug!(
                error = e.name(),
                offset = self.cursor.position(),
                "JSON parse failed"
            ),
        }
        result
    }

    fn parse_root(&mut self) -> JsonResult<Value> {
        let size = self.text.len() as u64;
        if size > self.limits.max_input_size {
            return Err(ErrorCode::InputTooLarge(size, self.limits.max_input_size));
        }

        self.cursor.skip_whitespace();
        if self.cursor.at_end() {
            return Err(ErrorCode::ExpectValue);
        }
        let value = self.parse_value()?;

        // Ensure no trailing content
        self.cursor.skip_whitespace();
        if !self.cursor.at_end() {
            return Err(ErrorCode::RootNotSingular);
        }

        Ok(value)
    }

    /// Parse a single JSON value, dispatching on its first byte.
    fn parse_value(&mut self) -> JsonResult<Value> {
        match self.cursor.peek() {
            Some(b'n') => {
                self.cursor.advance();
                self.parse_literal(b"ull", Value::Null)
            }
            Some(b't') => {
                self.cursor.advance();
                self.parse_literal(b"rue", Value::Bool(true))
            }
            Some(b'f') => {
                self.cursor.advance();
                self.parse_literal(b"alse", Value::Bool(false))
            }
            Some(b'"') => {
                self.cursor.advance();
                self.parse_string().map(Value::String)
            }
            Some(b'[') => {
                self.cursor.advance();
                self.parse_array()
            }
            Some(b'{') => {
                self.cursor.advance();
                self.parse_object()
            }
            Some(b'-' | b'0'..=b'9') => self.parse_number(),
            _ => Err(ErrorCode::InvalidValue),
        }
    }

    /// Match the rest of a literal after its first byte.
    fn parse_literal(&mut self, rest: &[u8], value: Value) -> JsonResult<Value> {
        if !self.cursor.starts_with(rest) {
            return Err(ErrorCode::InvalidValue);
        }
        self.cursor.skip(rest.len());
        Ok(value)
    }

    fn parse_number(&mut self) -> JsonResult<Value> {
        let start = self.cursor.position();

        self.cursor.eat(b'-');

        // Integer part. A leading zero ends the integer; any digits after
        // it are left for the root check to reject.
        if !self.cursor.eat(b'0') {
            match self.cursor.peek() {
                Some(b'1'..=b'9') => {
                    self.cursor.skip_digits();
                }
                _ => return Err(ErrorCode::InvalidValue),
            }
        }

        if self.cursor.eat(b'.') && self.cursor.skip_digits() == 0 {
            return Err(ErrorCode::InvalidValue);
        }

        if self.cursor.eat(b'e') || self.cursor.eat(b'E') {
            if !self.cursor.eat(b'+') {
                self.cursor.eat(b'-');
            }
            if self.cursor.skip_digits() == 0 {
                return Err(ErrorCode::InvalidValue);
            }
        }

        let raw = std::str::from_utf8(self.cursor.slice_from(start))
            .map_err(|_| ErrorCode::InvalidValue)?;
        if raw.is_empty() {
            return Err(ErrorCode::InvalidValue);
        }
        let n: f64 = raw.parse().map_err(|_| ErrorCode::InvalidValue)?;
        if n.is_infinite() {
            return Err(ErrorCode::NumberTooBig);
        }

        Ok(Value::Number(n))
    }

    /// Parse string contents after the opening quote.
    ///
    /// Used for both string values and object keys.
    fn parse_string(&mut self) -> JsonResult<String> {
        let mut result = String::new();
        let mut run_start = self.cursor.position();

        loop {
            let b = match self.cursor.peek() {
                None => return Err(ErrorCode::MissQuotationMark),
                Some(b) => b,
            };
            match b {
                b'"' | b'\\' => {
                    // Flush the run of raw bytes before the delimiter. The
                    // delimiter is ASCII, so this is always a char boundary.
                    let run = self
                        .text
                        .get(run_start..self.cursor.position())
                        .ok_or(ErrorCode::InvalidStringChar)?;
                    result.push_str(run);
                    self.cursor.advance();

                    if b == b'"' {
                        return Ok(result);
                    }
                    self.parse_escape(&mut result)?;
                    run_start = self.cursor.position();
                }
                0x00..=0x1F => return Err(ErrorCode::InvalidStringChar),
                _ => {
                    self.cursor.advance();
                }
            }
        }
    }

    /// Decode one escape sequence after a backslash.
    fn parse_escape(&mut self, out: &mut String) -> JsonResult<()> {
        let ch = match self.cursor.advance() {
            None => return Err(ErrorCode::InvalidStringEscape),
            Some(b'"') => '"',
            Some(b'\\') => '\\',
            Some(b'/') => '/',
            Some(b'b') => '\x08',
            Some(b'f') => '\x0C',
            Some(b'n') => '\n',
            Some(b'r') => '\r',
            Some(b't') => '\t',
            Some(b'u') => self.parse_unicode_escape()?,
            Some(_) => return Err(ErrorCode::InvalidStringEscape),
        };
        out.push(ch);
        Ok(())
    }

    /// Decode `XXXX` (after `\u`), joining a surrogate pair if present.
    fn parse_unicode_escape(&mut self) -> JsonResult<char> {
        let high = self.cursor.read_hex4()?;

        let codepoint = match high {
            0xD800..=0xDBFF => {
                if !self.cursor.starts_with(b"\\u") {
                    return Err(ErrorCode::InvalidUnicodeSurrogate);
                }
                self.cursor.skip(2);
                let low = self.cursor.read_hex4()?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(ErrorCode::InvalidUnicodeSurrogate);
                }
                0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00)
            }
            // A low surrogate on its own has no scalar value
            0xDC00..=0xDFFF => return Err(ErrorCode::InvalidUnicodeSurrogate),
            _ => u32::from(high),
        };

        char::from_u32(codepoint).ok_or(ErrorCode::InvalidUnicodeSurrogate)
    }

    fn enter(&mut self) -> JsonResult<()> {
        self.depth += 1;
        if self.depth > self.limits.max_nesting_depth {
            return Err(ErrorCode::NestingTooDeep(
                self.depth,
                self.limits.max_nesting_depth,
            ));
        }
        Ok(())
    }

    /// Parse array contents after the opening bracket.
    fn parse_array(&mut self) -> JsonResult<Value> {
        self.enter()?;

        let mut arr = Vec::new();

        self.cursor.skip_whitespace();
        if self.cursor.eat(b']') {
            self.depth -= 1;
            return Ok(Value::Array(arr));
        }

        loop {
            arr.push(self.parse_value()?);
            self.cursor.skip_whitespace();

            match self.cursor.peek() {
                Some(b',') => {
                    self.cursor.advance();
                    self.cursor.skip_whitespace();
                }
                Some(b']') => {
                    self.cursor.advance();
                    break;
                }
                _ => return Err(ErrorCode::MissCommaOrSquareBracket),
            }
        }

        self.depth -= 1;
        Ok(Value::Array(arr))
    }

    /// Parse object contents after the opening brace.
    fn parse_object(&mut self) -> JsonResult<Value> {
        self.enter()?;

        let mut map = Object::new();

        self.cursor.skip_whitespace();
        if self.cursor.eat(b'}') {
            self.depth -= 1;
            return Ok(Value::Object(map));
        }

        loop {
            if !self.cursor.eat(b'"') {
                return Err(ErrorCode::MissKey);
            }
            let key = self.parse_string()?;

            self.cursor.skip_whitespace();
            if !self.cursor.eat(b':') {
                return Err(ErrorCode::MissColon);
            }
            self.cursor.skip_whitespace();

            let value = self.parse_value()?;
            // Last write wins on duplicate keys
            map.insert(key, value);

            self.cursor.skip_whitespace();
            match self.cursor.peek() {
                Some(b',') => {
                    self.cursor.advance();
                    self.cursor.skip_whitespace();
                }
                Some(b'}') => {
                    self.cursor.advance();
                    break;
                }
                _ => return Err(ErrorCode::MissCommaOrCurlyBracket),
            }
        }

        self.depth -= 1;
        Ok(Value::Object(map))
    }
}

/// Parse a JSON document with default limits.
pub fn parse(text: &str) -> JsonResult<Value> {
    parse_with_limits(text, Limits::default())
}

/// Parse a JSON document with custom limits.
pub fn parse_with_limits(text: &str, limits: Limits) -> JsonResult<Value> {
    Parser::new(text, limits).parse()
}
