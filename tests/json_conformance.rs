//! JSON grammar conformance tests.
//!
//! These tests pin down the accept set of the checker against RFC 8259 and
//! the diagnostics it reports for each failure class.

use jsonv::{check, check_with_config, validate, Config, ErrorKind, SyntaxError, Validator};
use serde_json::json;

fn rejected(input: &str) -> SyntaxError {
    match check(input) {
        Ok(()) => panic!("{:?} should be rejected", input),
        Err(e) => e,
    }
}

// ============================================================================
// Empty input
// ============================================================================

#[test]
fn empty_input_accepted_by_default() {
    assert!(validate(""));
    assert!(validate("   "));
    assert!(validate("\n\t\r "));
}

#[test]
fn empty_input_rejected_when_strict() {
    let err = check_with_config("", &Config::strict()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::EmptyInput);
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn literals_accepted() {
    assert!(validate("true"));
    assert!(validate("false"));
    assert!(validate("null"));
}

#[test]
fn malformed_literals_rejected() {
    assert!(!validate("truee"));
    assert!(!validate("tru"));
    assert!(!validate("nul"));
    assert_eq!(rejected("tru").kind, ErrorKind::LiteralMismatch);
    assert_eq!(rejected("truee").kind, ErrorKind::TrailingContent);
    assert_eq!(rejected("NULL").kind, ErrorKind::ExpectedValue);
}

// ============================================================================
// Objects and arrays
// ============================================================================

#[test]
fn objects() {
    assert!(validate(r#"{"a":1}"#));
    assert!(validate("{}"));
    assert!(!validate(r#"{"a":1,}"#));
    assert!(!validate(r#"{"a" 1}"#));
    assert!(!validate(r#"{1: 2}"#));
}

#[test]
fn arrays() {
    assert!(validate("[]"));
    assert!(validate("[1, 2, 3]"));
    assert!(!validate("[1,,2]"));
    assert!(!validate("[1, 2,]"));
    assert!(!validate("[,]"));
}

#[test]
fn whitespace_between_tokens() {
    assert!(validate(" { \"a\" :\n[ 1 ,\t2 ] , \"b\" : { } } "));
}

#[test]
fn whitespace_uses_unicode_classification() {
    assert!(validate("[1,\u{a0} 2]"));
    assert!(validate("\u{a0}[]\u{3000}"));
    assert_eq!(
        rejected("[1,\u{1f}2]"),
        SyntaxError::new(ErrorKind::ExpectedValue, 4)
    );
}

// ============================================================================
// Strings and escapes
// ============================================================================

#[test]
fn strings() {
    assert!(validate(r#""ab\n""#));
    assert!(!validate(r#""ab\q""#));
    assert!(!validate(r#""\u12GH""#));
    assert!(validate(r#""ኯ""#));
    assert!(validate("\"北京\""));
}

#[test]
fn escaped_space_rejected() {
    assert_eq!(rejected(r#""a\ b""#).kind, ErrorKind::InvalidEscapeSequence);
}

#[test]
fn escape_errors_reported_at_backslash() {
    assert_eq!(
        rejected(r#"["abc\x"]"#),
        SyntaxError::new(ErrorKind::InvalidEscapeSequence, 6)
    );
    assert_eq!(
        rejected(r#"["\u00zz"]"#),
        SyntaxError::new(ErrorKind::InvalidUnicodeEscape, 3)
    );
}

#[test]
fn unterminated_string_reported_at_opening_quote() {
    assert_eq!(
        rejected(r#"{"key": "value}"#),
        SyntaxError::new(ErrorKind::UnterminatedString, 9)
    );
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn numbers_accepted() {
    for n in ["1.5e10", "-0", "0", "123", "-9.75", "1E+2", "0.001e-7"] {
        assert!(validate(n), "{} should be accepted", n);
    }
}

#[test]
fn numbers_rejected() {
    for n in ["01", ".5", "1.", "1e", "-", "+1", "1.5e", "0x10", "Infinity", "NaN"] {
        assert!(!validate(n), "{} should be rejected", n);
    }
    assert_eq!(rejected("1.").kind, ErrorKind::MalformedNumber);
    assert_eq!(rejected("01").kind, ErrorKind::TrailingContent);
}

// ============================================================================
// Trailing content
// ============================================================================

#[test]
fn trailing_content_rejected() {
    assert_eq!(
        rejected("{} extra"),
        SyntaxError::new(ErrorKind::TrailingContent, 4)
    );
    assert_eq!(rejected("[1] [2]").kind, ErrorKind::TrailingContent);
}

// ============================================================================
// Encoder round trip and truncation
// ============================================================================

fn documents() -> Vec<serde_json::Value> {
    vec![
        json!(null),
        json!([]),
        json!({}),
        json!({"status": 0, "message": "", "data": {"search_data": []}}),
        json!([1, -2, 3.5, 1e300, -0.0, "x", true, false, null]),
        json!({"name": "厦门", "escapes": "\"\\/\u{8}\u{c}\n\r\t", "ctl": "\u{1}"}),
        json!({"nested": [[[{"a": [{"b": {"c": []}}]}]]]}),
        json!({"location": {"lat": 24.477188, "lng": 118.094398}, "has_route_maps": false}),
    ]
}

#[test]
fn encoder_output_accepted() {
    for doc in documents() {
        let compact = serde_json::to_string(&doc).unwrap();
        let pretty = serde_json::to_string_pretty(&doc).unwrap();
        assert!(validate(&compact), "{}", compact);
        assert!(validate(&pretty), "{}", pretty);
    }
}

#[test]
fn encoder_output_accepted_strict() {
    let strict = Validator::new(Config::strict());
    for doc in documents() {
        let compact = serde_json::to_string(&doc).unwrap();
        assert!(strict.validate(&compact), "{}", compact);
    }
}

#[test]
fn truncated_aggregates_rejected() {
    for doc in documents() {
        let text = serde_json::to_string_pretty(&doc).unwrap();
        if !text.starts_with('{') && !text.starts_with('[') {
            continue;
        }
        for (i, _) in text.char_indices().skip(1) {
            let prefix = &text[..i];
            assert!(!validate(prefix), "prefix {:?} should be rejected", prefix);
        }
    }
}

// ============================================================================
// Purity and reentrancy
// ============================================================================

#[test]
fn validation_is_idempotent() {
    let inputs = ["", "[1, 2]", "[1,,2]", r#"{"a": "A"}"#, "{} extra"];
    for input in inputs {
        let first = check(input);
        for _ in 0..3 {
            assert_eq!(check(input), first, "{}", input);
        }
    }
}

#[test]
fn shared_validator_across_threads() {
    let validator = Validator::default();
    let docs: Vec<String> = documents()
        .iter()
        .map(|d| serde_json::to_string(d).unwrap())
        .collect();

    std::thread::scope(|s| {
        for _ in 0..4 {
            let validator = &validator;
            let docs = &docs;
            s.spawn(move || {
                for _ in 0..100 {
                    for doc in docs {
                        assert!(validator.validate(doc));
                    }
                    assert!(!validator.validate("[1,,2]"));
                }
            });
        }
    });
}

// ============================================================================
// Resource limits
// ============================================================================

#[test]
fn deep_nesting_rejected_not_overflowing() {
    let depth = 100_000;
    let text = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    let err = rejected(&text);
    assert_eq!(err.kind, ErrorKind::NestingTooDeep);
    assert_eq!(err.column, 1025);
}

#[test]
fn nesting_within_limit_accepted() {
    let depth = 500;
    let text = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    assert!(validate(&text));
}
