//! jsonv - a single-pass JSON syntax checker.
//!
//! Determines whether text is one grammatically well-formed JSON value
//! without building any in-memory representation of it. Checking is linear,
//! allocation-free and reentrant.
//!
//! # Architecture
//!
//! - [`json`] - Cursor, token productions and the recursive descent checker
//! - [`config`] - Validation policy and resource limits
//! - [`error`] - Error kinds (generated from `metadata/errors.json`)
//! - [`conformance`] - Corpus-driven conformance runner
//!
//! # Example
//!
//! ```
//! use jsonv::{check, validate, ErrorKind};
//!
//! assert!(validate(r#"{"a": 1}"#));
//! assert!(!validate("[1, 2,]"));
//!
//! let err = check("{} extra").unwrap_err();
//! assert_eq!(err.kind, ErrorKind::TrailingContent);
//! ```

// Library code reports failures through SyntaxError, never by panicking.
// Tests are checked separately with `cargo test`.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod config;
pub mod conformance;
pub mod error;
pub mod json;

// Re-export commonly used types
pub use config::Config;
pub use error::{ErrorKind, SyntaxError, ValidationResult};
pub use json::{check, check_with_config, validate, Limits, Validator};
