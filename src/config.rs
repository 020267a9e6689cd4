//! Validation policy.
//!
//! [`Config`] bundles the resource [`Limits`] with the two policy decisions
//! where lenient tools and RFC 8259 disagree: whether empty input counts as
//! valid, and whether raw control characters may appear inside strings.

use crate::json::Limits;

/// Policy for a validation run.
///
/// The default is [`Config::compatible`], which follows the lenient
/// checker's policy on empty input and control characters. Whitespace is
/// classified by [`char::is_whitespace`], so documents using exotic
/// separators (U+00A0, U+001F) may be judged differently by other tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Resource limits.
    pub limits: Limits,
    /// Accept empty or all-whitespace input as valid.
    pub allow_empty: bool,
    /// Accept unescaped characters below U+0020 inside strings.
    pub allow_control_characters: bool,
}

impl Config {
    /// Lenient policy: empty input and raw control characters are accepted.
    pub const fn compatible() -> Self {
        Self {
            limits: Limits::permissive(),
            allow_empty: true,
            allow_control_characters: true,
        }
    }

    /// RFC 8259 policy with tight resource limits.
    pub const fn strict() -> Self {
        Self {
            limits: Limits::strict(),
            allow_empty: false,
            allow_control_characters: false,
        }
    }

    /// Override the maximum nesting depth.
    pub const fn with_max_depth(mut self, depth: u64) -> Self {
        self.limits.max_nesting_depth = depth;
        self
    }

    /// Override the maximum input size in bytes.
    pub const fn with_max_input_size(mut self, size: u64) -> Self {
        self.limits.max_input_size = size;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::compatible()
    }
}
