//! Error codes for parsing and value access.
//!
//! Every grammar violation maps to exactly one [`ErrorCode`] variant so
//! callers can branch on the failing production instead of matching on
//! message text. Accessor misuse and hardening limits get their own
//! variants in separate numeric ranges.

use thiserror::Error;

/// All error codes produced by this crate.
///
/// Codes 1..=13 are grammar violations, 20 is accessor misuse and 30+
/// are [`Limits`](crate::Limits) violations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum ErrorCode {
    /// Input is empty or whitespace only (code 1)
    #[error("EXPECT_VALUE")]
    ExpectValue,

    /// Leading byte starts no production, or a literal/number is malformed (code 2)
    #[error("INVALID_VALUE")]
    InvalidValue,

    /// Non-whitespace content after the root value (code 3)
    #[error("ROOT_NOT_SINGULAR")]
    RootNotSingular,

    /// Number overflows to infinity as an f64 (code 4)
    #[error("NUMBER_TOO_BIG")]
    NumberTooBig,

    /// End of input before the closing quote (code 5)
    #[error("MISS_QUOTATION_MARK")]
    MissQuotationMark,

    /// Unknown escape, or end of input right after a backslash (code 6)
    #[error("INVALID_STRING_ESCAPE")]
    InvalidStringEscape,

    /// Unescaped control character inside a string (code 7)
    #[error("INVALID_STRING_CHAR")]
    InvalidStringChar,

    /// `\u` not followed by four hex digits (code 8)
    #[error("INVALID_UNICODE_HEX")]
    InvalidUnicodeHex,

    /// Unpaired or malformed surrogate in a `\u` escape (code 9)
    #[error("INVALID_UNICODE_SURROGATE")]
    InvalidUnicodeSurrogate,

    /// Array element not followed by `,` or `]` (code 10)
    #[error("MISS_COMMA_OR_SQUARE_BRACKET")]
    MissCommaOrSquareBracket,

    /// Object member does not start with a string key (code 11)
    #[error("MISS_KEY")]
    MissKey,

    /// Object key not followed by `:` (code 12)
    #[error("MISS_COLON")]
    MissColon,

    /// Object member not followed by `,` or `}` (code 13)
    #[error("MISS_COMMA_OR_CURLY_BRACKET")]
    MissCommaOrCurlyBracket,

    /// Typed getter called on a value with a different tag (code 20)
    #[error("ACCESS_WRONG_TYPE(expected {expected}, found {found})")]
    AccessWrongType {
        /// Type name the accessor requires
        expected: &'static str,
        /// Type name the value actually holds
        found: &'static str,
    },

    /// Array/object nesting deeper than the configured limit (code 30)
    #[error("NESTING_TOO_DEEP({0}, {1})")]
    NestingTooDeep(/* depth */ u64, /* limit */ u64),

    /// Input longer than the configured limit (code 31)
    #[error("INPUT_TOO_LARGE({0}, {1})")]
    InputTooLarge(/* size */ u64, /* limit */ u64),
}

impl ErrorCode {
    /// Get the numeric error code.
    pub fn code(&self) -> u32 {
        match self {
            ErrorCode::ExpectValue => 1,
            ErrorCode::InvalidValue => 2,
            ErrorCode::RootNotSingular => 3,
            ErrorCode::NumberTooBig => 4,
            ErrorCode::MissQuotationMark => 5,
            ErrorCode::InvalidStringEscape => 6,
            ErrorCode::InvalidStringChar => 7,
            ErrorCode::InvalidUnicodeHex => 8,
            ErrorCode::InvalidUnicodeSurrogate => 9,
            ErrorCode::MissCommaOrSquareBracket => 10,
            ErrorCode::MissKey => 11,
            ErrorCode::MissColon => 12,
            ErrorCode::MissCommaOrCurlyBracket => 13,
            ErrorCode::AccessWrongType { .. } => 20,
            ErrorCode::NestingTooDeep(_, _) => 30,
            ErrorCode::InputTooLarge(_, _) => 31,
        }
    }

    /// Get the error name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCode::ExpectValue => "EXPECT_VALUE",
            ErrorCode::InvalidValue => "INVALID_VALUE",
            ErrorCode::RootNotSingular => "ROOT_NOT_SINGULAR",
            ErrorCode::NumberTooBig => "NUMBER_TOO_BIG",
            ErrorCode::MissQuotationMark => "MISS_QUOTATION_MARK",
            ErrorCode::InvalidStringEscape => "INVALID_STRING_ESCAPE",
            ErrorCode::InvalidStringChar => "INVALID_STRING_CHAR",
            ErrorCode::InvalidUnicodeHex => "INVALID_UNICODE_HEX",
            ErrorCode::InvalidUnicodeSurrogate => "INVALID_UNICODE_SURROGATE",
            ErrorCode::MissCommaOrSquareBracket => "MISS_COMMA_OR_SQUARE_BRACKET",
            ErrorCode::MissKey => "MISS_KEY",
            ErrorCode::MissColon => "MISS_COLON",
            ErrorCode::MissCommaOrCurlyBracket => "MISS_COMMA_OR_CURLY_BRACKET",
            ErrorCode::AccessWrongType { .. } => "ACCESS_WRONG_TYPE",
            ErrorCode::NestingTooDeep(_, _) => "NESTING_TOO_DEEP",
            ErrorCode::InputTooLarge(_, _) => "INPUT_TOO_LARGE",
        }
    }

    /// Returns true for grammar violations reported by the parser.
    pub fn is_syntax_error(&self) -> bool {
        (1..=13).contains(&self.code())
    }
}

/// Result type for parsing and value access.
pub type JsonResult<T> = Result<T, ErrorCode>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_name_for_syntax_errors() {
        let all = [
            ErrorCode::ExpectValue,
            ErrorCode::InvalidValue,
            ErrorCode::RootNotSingular,
            ErrorCode::NumberTooBig,
            ErrorCode::MissQuotationMark,
            ErrorCode::InvalidStringEscape,
            ErrorCode::InvalidStringChar,
            ErrorCode::InvalidUnicodeHex,
            ErrorCode::InvalidUnicodeSurrogate,
            ErrorCode::MissCommaOrSquareBracket,
            ErrorCode::MissKey,
            ErrorCode::MissColon,
            ErrorCode::MissCommaOrCurlyBracket,
        ];
        for (i, e) in all.iter().enumerate() {
            assert_eq!(e.to_string(), e.name());
            assert_eq!(e.code(), i as u32 + 1);
            assert!(e.is_syntax_error());
        }
    }

    #[test]
    fn test_parameterised_messages() {
        let e = ErrorCode::AccessWrongType {
            expected: "string",
            found: "number",
        };
        assert_eq!(e.to_string(), "ACCESS_WRONG_TYPE(expected string, found number)");
        assert_eq!(e.name(), "ACCESS_WRONG_TYPE");
        assert!(!e.is_syntax_error());

        let e = ErrorCode::NestingTooDeep(5, 4);
        assert_eq!(e.to_string(), "NESTING_TOO_DEEP(5, 4)");
        assert_eq!(e.code(), 30);
    }
}
