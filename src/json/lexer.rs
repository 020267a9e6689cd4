//! Token-level productions.
//!
//! Each scanner checks one lexical token against the cursor without
//! producing a value: literals, numbers, strings and the escape sequences
//! inside strings. On success the cursor is left just past the token.
//! On failure the cursor is wherever the mismatch was found.

use super::cursor::Cursor;
use crate::error::{ErrorKind, SyntaxError, ValidationResult};

/// Match an exact keyword (`true`, `false`, `null`) at the cursor.
///
/// A mismatch is reported at the keyword's first column.
pub fn scan_literal(cursor: &mut Cursor<'_>, keyword: &str) -> ValidationResult<()> {
    let start = cursor.column();
    for expected in keyword.chars() {
        if cursor.current() != Some(expected) {
            return Err(SyntaxError::new(ErrorKind::LiteralMismatch, start));
        }
        cursor.advance();
    }
    Ok(())
}

/// Check a number token: `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`.
///
/// Any missing digit run is reported at the token's first column.
pub fn scan_number(cursor: &mut Cursor<'_>) -> ValidationResult<()> {
    let malformed = SyntaxError::new(ErrorKind::MalformedNumber, cursor.column());

    // Optional minus sign
    if cursor.current() == Some('-') {
        cursor.advance();
    }

    // Integer part; a leading zero stands alone
    match cursor.current() {
        Some('0') => {
            cursor.advance();
        }
        Some('1'..='9') => {
            skip_digits(cursor);
        }
        _ => return Err(malformed),
    }

    // Fractional part
    if cursor.current() == Some('.') {
        cursor.advance();
        if !skip_digits(cursor) {
            return Err(malformed);
        }
    }

    // Exponent
    if let Some('e') | Some('E') = cursor.current() {
        cursor.advance();
        if let Some('+') | Some('-') = cursor.current() {
            cursor.advance();
        }
        if !skip_digits(cursor) {
            return Err(malformed);
        }
    }

    Ok(())
}

/// Skip a run of ASCII digits. Returns false if there were none.
fn skip_digits(cursor: &mut Cursor<'_>) -> bool {
    let mut any = false;
    while matches!(cursor.current(), Some(c) if c.is_ascii_digit()) {
        cursor.advance();
        any = true;
    }
    any
}

/// Check a double-quoted string token.
///
/// Fails with `expected-string` if the cursor is not on a `"`, and with
/// `unterminated-string` (at the opening quote) if input ends first.
pub fn scan_string(cursor: &mut Cursor<'_>, allow_control: bool) -> ValidationResult<()> {
    let start = cursor.column();
    if cursor.current() != Some('"') {
        return Err(SyntaxError::new(ErrorKind::ExpectedString, start));
    }

    let unterminated = SyntaxError::new(ErrorKind::UnterminatedString, start);
    cursor.advance();

    loop {
        match cursor.current() {
            None => return Err(unterminated),
            Some('"') => {
                cursor.advance();
                return Ok(());
            }
            Some('\\') => {
                let backslash = cursor.column();
                if cursor.advance().is_none() {
                    return Err(unterminated);
                }
                scan_escape(cursor, backslash)?;
            }
            Some(c) if c < '\u{20}' && !allow_control => {
                return Err(SyntaxError::new(
                    ErrorKind::ControlCharacter,
                    cursor.column(),
                ));
            }
            Some(_) => {
                cursor.advance();
            }
        }
    }
}

/// Check the escape sequence whose backslash sat at column `backslash`.
///
/// The cursor is on the character after the backslash. Every failure is
/// reported at the backslash.
pub fn scan_escape(cursor: &mut Cursor<'_>, backslash: u32) -> ValidationResult<()> {
    match cursor.current() {
        Some('"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't') => {
            cursor.advance();
            Ok(())
        }
        Some('u') => {
            for _ in 0..4 {
                let digit = cursor.advance();
                if !matches!(digit, Some(c) if c.is_ascii_hexdigit()) {
                    return Err(SyntaxError::new(
                        ErrorKind::InvalidUnicodeEscape,
                        backslash,
                    ));
                }
            }
            cursor.advance();
            Ok(())
        }
        _ => Err(SyntaxError::new(
            ErrorKind::InvalidEscapeSequence,
            backslash,
        )),
    }
}
