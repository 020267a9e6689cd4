//! Resource limits for JSON checking.
//!
//! The checker is recursive descent, so nesting depth maps directly onto
//! stack depth. These limits bound that depth and the total input size so
//! hostile input is rejected with a diagnostic instead of exhausting the
//! stack.
//!
//! - `nesting-too-deep`: maximum object/array nesting depth
//! - `input-too-large`: maximum total input size in bytes

/// Resource limits applied to a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum total input size in bytes (`input-too-large`)
    pub max_input_size: u64,
    /// Maximum nesting depth for arrays/objects (`nesting-too-deep`)
    pub max_nesting_depth: u64,
}

impl Limits {
    /// Limits for general use: any input size, deep nesting.
    pub const fn permissive() -> Self {
        Self {
            max_input_size: u64::MAX,
            max_nesting_depth: 1024,
        }
    }

    /// Tight limits for untrusted input.
    pub const fn strict() -> Self {
        Self {
            max_input_size: 1024 * 1024, // 1 MiB
            max_nesting_depth: 128,      // 128 levels
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::permissive()
    }
}
