//! JSON syntax checking.
//!
//! Checks that a string is exactly one well-formed JSON value (RFC 8259
//! grammar) without building any representation of it. The only outputs are
//! accept/reject and, on rejection, the kind and column of the first failure.
//!
//! # Architecture
//!
//! The checker is organized into focused modules:
//!
//! - [`cursor`] - Forward-only character cursor with column tracking
//! - [`lexer`] - Token productions: literals, numbers, strings, escapes
//! - [`parser`] - Value dispatch, objects/arrays and the entry points
//! - [`limits`] - Nesting depth and input size limits
//!
//! # Example
//!
//! ```
//! use jsonv::json::{check, validate};
//! use jsonv::ErrorKind;
//!
//! assert!(validate("[1, 2, 3]"));
//!
//! let err = check("[1,,2]").unwrap_err();
//! assert_eq!(err.kind, ErrorKind::ExpectedValue);
//! assert_eq!(err.column, 4);
//! ```

pub mod cursor;
pub mod lexer;
pub mod limits;
pub mod parser;

// Re-export commonly used items
pub use cursor::Cursor;
pub use limits::Limits;
pub use parser::{check, check_with_config, validate, Validator};
