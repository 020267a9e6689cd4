//! Error handling for the validator.
//!
//! Error kinds are generated from `metadata/errors.json` so the numeric codes
//! and kebab-case names stay in sync with corpora and machine-readable
//! reports.
//!
//! A failed check yields exactly one [`SyntaxError`]: the first failure along
//! the leftmost derivation. There is no recovery and no error collection.

// Include the generated ErrorKind enum (brings `thiserror::Error` into scope)
include!(concat!(env!("OUT_DIR"), "/error_generated.rs"));

/// A rejected document: what went wrong and where.
///
/// `column` is 1-based and counts characters from the start of the trimmed
/// input, across line breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("{kind} at column {column}")]
pub struct SyntaxError {
    /// The kind of failure.
    pub kind: ErrorKind,
    /// 1-based column where the failing production started.
    pub column: u32,
}

impl SyntaxError {
    /// Create a new syntax error.
    pub const fn new(kind: ErrorKind, column: u32) -> Self {
        Self { kind, column }
    }

    /// Numeric code of the error kind.
    pub const fn code(&self) -> u32 {
        self.kind.code()
    }
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, SyntaxError>;
