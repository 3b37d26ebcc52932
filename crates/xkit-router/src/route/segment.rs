//! Segment type inference for concrete request paths
//!
//! Pure functional classification of a single path token into one of the
//! recognized segment kinds. All functions are **pure**: same input → same
//! output, no side effects.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use xkit::is::{is_int_literal, number_literal};

/// Dot followed by word characters at the end of the token
static FILE_EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.[A-Za-z0-9_]+$").expect("file extension regex is valid"));

/// Inferred type of a path segment
///
/// The tag strings (`int`, `float`, `file`, `uuid`, `string`, `-`) are what
/// placeholders declare in route templates and what appears in structural
/// route keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Int,
    Float,
    File,
    Uuid,
    String,
    /// The root marker, for a token that is exactly `/`
    Root,
}

impl SegmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentKind::Int => "int",
            SegmentKind::Float => "float",
            SegmentKind::File => "file",
            SegmentKind::Uuid => "uuid",
            SegmentKind::String => "string",
            SegmentKind::Root => "-",
        }
    }

    /// Looks up a kind by its tag
    ///
    /// ```
    /// use xkit_router::SegmentKind;
    ///
    /// assert_eq!(SegmentKind::from_tag("uuid"), Some(SegmentKind::Uuid));
    /// assert_eq!(SegmentKind::from_tag("slug"), None);
    /// ```
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "int" => Some(SegmentKind::Int),
            "float" => Some(SegmentKind::Float),
            "file" => Some(SegmentKind::File),
            "uuid" => Some(SegmentKind::Uuid),
            "string" => Some(SegmentKind::String),
            "-" => Some(SegmentKind::Root),
            _ => None,
        }
    }

    /// True for every kind except the root marker
    pub fn is_typed(&self) -> bool {
        !matches!(self, SegmentKind::Root)
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value carried by a classified segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentValue<'a> {
    /// Parsed numeric literal (`int` and `float` segments)
    Number(f64),
    /// The token itself (every other kind)
    Text(&'a str),
}

/// A classified path token
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<'a> {
    /// Token exactly as it appeared in the path
    pub raw: &'a str,
    pub value: SegmentValue<'a>,
    pub kind: SegmentKind,
}

/// Classifies a path token (pure function)
///
/// # Inference Rules (first match wins)
///
/// 1. **Numeric literal**: `int` without fractional part, else `float`
/// 2. **File**: only for the final segment, token ends in `.ext`
/// 3. **Root**: token is exactly `/`
/// 4. **UUID**: 36 characters with exactly 4 hyphens (structural check only,
///    hex digits and version bits are not validated)
/// 5. **String**: anything else
///
/// # Examples
///
/// ```
/// use xkit_router::{classify, SegmentKind, SegmentValue};
///
/// assert_eq!(classify("42", false).kind, SegmentKind::Int);
/// assert_eq!(classify("42", false).value, SegmentValue::Number(42.0));
/// assert_eq!(classify("3.14", true).kind, SegmentKind::Float);
///
/// // File only applies to the final segment
/// assert_eq!(classify("report.pdf", true).kind, SegmentKind::File);
/// assert_eq!(classify("report.pdf", false).kind, SegmentKind::String);
///
/// assert_eq!(classify("123e4567-e89b-12d3-a456-426614174000", false).kind, SegmentKind::Uuid);
/// ```
pub fn classify(token: &str, is_final: bool) -> Segment<'_> {
    if let Some(number) = number_literal(token) {
        let kind = if is_int_literal(token) {
            SegmentKind::Int
        } else {
            SegmentKind::Float
        };
        return Segment {
            raw: token,
            value: SegmentValue::Number(number),
            kind,
        };
    }

    let kind = if is_final && FILE_EXTENSION.is_match(token) {
        SegmentKind::File
    } else if token == "/" {
        SegmentKind::Root
    } else if is_uuid_shaped(token) {
        SegmentKind::Uuid
    } else {
        SegmentKind::String
    };

    Segment {
        raw: token,
        value: SegmentValue::Text(token),
        kind,
    }
}

fn is_uuid_shaped(token: &str) -> bool {
    token.chars().count() == 36 && token.matches('-').count() == 4
}
