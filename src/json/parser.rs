//! Recursive descent checker.
//!
//! Dispatch is LL(1): the leading character of a value selects exactly one
//! production (`t`, `f`, `n`, `"`, `-`/digit, `{`, `[`), and a production that
//! fails is never retried as another. The cursor therefore never rewinds and
//! checking is linear in the input length.
//!
//! All scanning state lives in a [`Checker`] created per call, so checks are
//! reentrant and a [`Validator`] can be shared freely across threads.

use log::{debug, trace};

use super::cursor::Cursor;
use super::lexer::{scan_literal, scan_number, scan_string};
use crate::config::Config;
use crate::error::{ErrorKind, SyntaxError, ValidationResult};

/// Per-call checking context.
struct Checker<'a, 'c> {
    cursor: Cursor<'a>,
    config: &'c Config,
    depth: u64,
}

impl<'a, 'c> Checker<'a, 'c> {
    /// Check a complete document.
    fn run(text: &'a str, config: &'c Config) -> ValidationResult<()> {
        // Check input size limit
        if text.len() as u64 > config.limits.max_input_size {
            return Err(SyntaxError::new(ErrorKind::InputTooLarge, 1));
        }

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return if config.allow_empty {
                Ok(())
            } else {
                Err(SyntaxError::new(ErrorKind::EmptyInput, 1))
            };
        }

        let mut checker = Checker {
            cursor: Cursor::new(trimmed),
            config,
            depth: 0,
        };
        checker.value()?;

        // Ensure no trailing content
        checker.cursor.skip_whitespace();
        if !checker.cursor.is_at_end() {
            return Err(checker.error(ErrorKind::TrailingContent));
        }

        Ok(())
    }

    /// Error of the given kind at the current column.
    fn error(&self, kind: ErrorKind) -> SyntaxError {
        SyntaxError::new(kind, self.cursor.column())
    }

    /// Check a single JSON value.
    fn value(&mut self) -> ValidationResult<()> {
        match self.cursor.current() {
            Some('t') => scan_literal(&mut self.cursor, "true"),
            Some('f') => scan_literal(&mut self.cursor, "false"),
            Some('n') => scan_literal(&mut self.cursor, "null"),
            Some('"') => scan_string(&mut self.cursor, self.config.allow_control_characters),
            Some('-' | '0'..='9') => scan_number(&mut self.cursor),
            Some('{') => self.object(),
            Some('[') => self.array(),
            _ => Err(self.error(ErrorKind::ExpectedValue)),
        }
    }

    fn object(&mut self) -> ValidationResult<()> {
        self.aggregate('{', '}', true)
    }

    fn array(&mut self) -> ValidationResult<()> {
        self.aggregate('[', ']', false)
    }

    /// Check an object (`keyed`) or array between `open` and `close`.
    fn aggregate(&mut self, open: char, close: char, keyed: bool) -> ValidationResult<()> {
        if self.cursor.current() != Some(open) {
            return Err(self.error(ErrorKind::ExpectedValue));
        }

        // Check nesting depth
        self.depth += 1;
        if self.depth > self.config.limits.max_nesting_depth {
            return Err(self.error(ErrorKind::NestingTooDeep));
        }

        // Consume opening bracket
        self.cursor.advance();
        self.cursor.skip_whitespace();

        // Empty aggregate
        if self.cursor.current() == Some(close) {
            self.cursor.advance();
            self.depth -= 1;
            return Ok(());
        }

        loop {
            if keyed {
                scan_string(&mut self.cursor, self.config.allow_control_characters)?;
                self.cursor.skip_whitespace();
                if self.cursor.current() != Some(':') {
                    return Err(self.error(ErrorKind::ExpectedColon));
                }
                self.cursor.advance();
                self.cursor.skip_whitespace();
            }

            self.value()?;
            self.cursor.skip_whitespace();

            // Expect comma or closing bracket
            match self.cursor.current() {
                Some(',') => {
                    self.cursor.advance();
                    self.cursor.skip_whitespace();
                }
                Some(c) if c == close => break,
                _ => return Err(self.error(ErrorKind::ExpectedCommaOrCloser)),
            }
        }

        // Consume closing bracket
        self.cursor.advance();
        self.depth -= 1;
        Ok(())
    }
}

/// Check `text` under `config`, reporting the first failure.
pub fn check_with_config(text: &str, config: &Config) -> ValidationResult<()> {
    let result = Checker::run(text, config);
    match &result {
        Ok(()) => trace!("accepted {} bytes", text.len()),
        Err(e) => debug!("rejected: {} ({})", e, e.kind.name()),
    }
    result
}

/// Check `text` under the default configuration, reporting the first failure.
pub fn check(text: &str) -> ValidationResult<()> {
    check_with_config(text, &Config::default())
}

/// Whether `text` is a single, complete JSON value.
///
/// Surrounding whitespace is ignored. Empty input is accepted under the
/// default configuration.
///
/// ```
/// assert!(jsonv::validate(r#"{"a": [1, 2.5e3, "x"]}"#));
/// assert!(!jsonv::validate(r#"{"a": 1,}"#));
/// ```
pub fn validate(text: &str) -> bool {
    check(text).is_ok()
}

/// A reusable validator holding a fixed [`Config`].
///
/// Holds no scanning state, so one instance may check any number of inputs,
/// concurrently if needed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    config: Config,
}

impl Validator {
    /// Create a validator with the given configuration.
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// The configuration this validator applies.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether `text` is a single, complete JSON value.
    pub fn validate(&self, text: &str) -> bool {
        self.check(text).is_ok()
    }

    /// Check `text`, reporting the first failure.
    pub fn check(&self, text: &str) -> ValidationResult<()> {
        check_with_config(text, &self.config)
    }
}
