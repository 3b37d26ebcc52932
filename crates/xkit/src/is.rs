//! Runtime value predicates
//!
//! Predicates over dynamically shaped [`serde_json::Value`]s, plus helpers
//! that decide whether a raw string token is a numeric literal.
//! All functions are **pure**: same input, same output, no side effects.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Sign, digits with optional fraction (or a bare fraction), optional exponent
static NUMBER_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?$")
        .expect("number literal regex is valid")
});

// ============================================================================
// String literal checks
// ============================================================================

/// Parses `token` as a finite numeric literal
///
/// Accepts an optional sign, an integer or decimal part, and an optional
/// exponent. Words such as `inf` or `NaN`, hex and empty strings are rejected.
///
/// # Examples
///
/// ```
/// use xkit::is::number_literal;
///
/// assert_eq!(number_literal("42"), Some(42.0));
/// assert_eq!(number_literal("-0.5"), Some(-0.5));
/// assert_eq!(number_literal("1e3"), Some(1000.0));
/// assert_eq!(number_literal("NaN"), None);
/// assert_eq!(number_literal("12abc"), None);
/// ```
pub fn number_literal(token: &str) -> Option<f64> {
    if !NUMBER_LITERAL.is_match(token) {
        return None;
    }

    token.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Returns true when `token` is a finite numeric literal
pub fn is_number_like(token: &str) -> bool {
    number_literal(token).is_some()
}

/// Returns true when `token` is a numeric literal without a fractional part
///
/// `"1.0"` counts as an integer literal, `"1.5"` does not.
pub fn is_int_literal(token: &str) -> bool {
    number_literal(token).map_or(false, |n| n.fract() == 0.0)
}

// ============================================================================
// Core primitive checks
// ============================================================================

pub fn is_boolean(v: &Value) -> bool {
    v.is_boolean()
}

pub fn is_string(v: &Value) -> bool {
    v.is_string()
}

pub fn is_number(v: &Value) -> bool {
    v.is_number()
}

pub fn is_null(v: &Value) -> bool {
    v.is_null()
}

/// Integer valued number, including floats such as `3.0`
pub fn is_integer(v: &Value) -> bool {
    match v {
        Value::Number(n) if n.is_i64() || n.is_u64() => true,
        Value::Number(n) => n.as_f64().map_or(false, |f| f.fract() == 0.0),
        _ => false,
    }
}

pub fn is_positive_number(v: &Value) -> bool {
    v.as_f64().map_or(false, |n| n > 0.0)
}

pub fn is_non_negative_number(v: &Value) -> bool {
    v.as_f64().map_or(false, |n| n >= 0.0)
}

// ============================================================================
// Collections
// ============================================================================

pub fn is_array(v: &Value) -> bool {
    v.is_array()
}

/// JSON object (the only kind of "plain object" a `Value` can hold)
pub fn is_plain_object(v: &Value) -> bool {
    v.is_object()
}

pub fn is_non_empty_object(v: &Value) -> bool {
    v.as_object().map_or(false, |o| !o.is_empty())
}

/// Scalars and null; arrays and objects are not primitive
pub fn is_primitive(v: &Value) -> bool {
    !matches!(v, Value::Array(_) | Value::Object(_))
}

/// Null, empty string, empty array and empty object are empty
pub fn is_empty(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        _ => false,
    }
}

// ============================================================================
// String checks
// ============================================================================

pub fn is_empty_string(v: &Value) -> bool {
    v.as_str().map_or(false, str::is_empty)
}

pub fn is_non_empty_string(v: &Value) -> bool {
    v.as_str().map_or(false, |s| !s.is_empty())
}

/// Non-empty string made only of whitespace
pub fn is_whitespace(v: &Value) -> bool {
    v.as_str()
        .map_or(false, |s| !s.is_empty() && s.trim().is_empty())
}
