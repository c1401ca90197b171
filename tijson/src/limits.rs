//! Hardening limits for parsing.
//!
//! The grammar itself places no bound on nesting, so a deeply nested
//! document would recurse until the call stack is exhausted. These
//! limits turn that into an ordinary [`ErrorCode`](crate::ErrorCode).
//!
//! - `NESTING_TOO_DEEP`: maximum array/object nesting depth
//! - `INPUT_TOO_LARGE`: maximum input size in bytes (opt-in, see
//!   [`Limits::bounded`])

/// Parsing limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum total input size in bytes
    pub max_input_size: u64,
    /// Maximum nesting depth for arrays/objects
    pub max_nesting_depth: u64,
}

impl Limits {
    /// Default limits: nesting depth 128, no input size cap.
    pub const fn strict() -> Self {
        Self {
            max_input_size: u64::MAX,
            max_nesting_depth: 128,
        }
    }

    /// Deeper nesting for trusted documents.
    pub const fn lenient() -> Self {
        Self {
            max_input_size: u64::MAX,
            max_nesting_depth: 1024,
        }
    }

    /// Strict nesting plus a 1 MiB input cap, for untrusted network input.
    pub const fn bounded() -> Self {
        Self {
            max_input_size: 1024 * 1024, // 1 MiB
            max_nesting_depth: 128,
        }
    }

    /// No limits at all; nesting is bounded only by the stack.
    pub const fn unbounded() -> Self {
        Self {
            max_input_size: u64::MAX,
            max_nesting_depth: u64::MAX,
        }
    }

    /// Returns a copy with a different nesting limit.
    pub const fn with_max_nesting_depth(self, max_nesting_depth: u64) -> Self {
        Self {
            max_nesting_depth,
            ..self
        }
    }

    /// Returns a copy with a different input size limit.
    pub const fn with_max_input_size(self, max_input_size: u64) -> Self {
        Self {
            max_input_size,
            ..self
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::strict()
    }
}
