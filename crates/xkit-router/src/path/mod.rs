//! Route template and request path parsing
//!
//! `parse_path` turns `/users/<int:id>` into `parsed = ["users", "int"]`
//! and `args = ["id"]`. The same function parses concrete request paths,
//! which simply have no placeholders.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use xkit::cache::Cacher;

/// Placeholder name used when a template omits one (`<uuid>`)
pub const DEFAULT_ARG: &str = "_";

/// Root marker segment
pub const ROOT: &str = "/";

/// Parsed form of a path or route template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedPath {
    /// Literal segments and declared placeholder types, in path order
    pub parsed: Vec<String>,
    /// Placeholder names, in path order
    pub args: Vec<String>,
}

impl ParsedPath {
    pub fn len(&self) -> usize {
        self.parsed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsed.is_empty()
    }
}

/// Memo of parsed paths keyed by the exact input string
///
/// Owned by the caller; its growth is governed by the `CachePolicy` it was
/// created with.
pub type ParseCache = Cacher<String, ParsedPath>;

/// Parses a path or route template (pure function)
///
/// # Parsing Rules
///
/// - A missing leading `/` is added
/// - Empty segments (`//`) are skipped
/// - `<type:name>` contributes `type` to `parsed` and `name` to `args`;
///   `<type>` uses `_` as the name
/// - A placeholder with an empty type (`<:id>`) or no inner text is dropped
/// - A literal `>` segment becomes the root marker `/`
/// - A trailing `/` (other than the root path) appends a root marker
/// - A path without segments parses to `["/"]`
///
/// # Examples
///
/// ```
/// use xkit_router::parse_path;
///
/// let route = parse_path("/users/<int:id>");
/// assert_eq!(route.parsed, vec!["users", "int"]);
/// assert_eq!(route.args, vec!["id"]);
///
/// let root = parse_path("/");
/// assert_eq!(root.parsed, vec!["/"]);
/// assert!(root.args.is_empty());
///
/// let dir = parse_path("docs/");
/// assert_eq!(dir.parsed, vec!["docs", "/"]);
/// ```
pub fn parse_path(path: &str) -> ParsedPath {
    let normalized: Cow<'_, str> = if path.starts_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{}", path))
    };

    let mut segments = normalized.split('/').filter(|s| !s.is_empty()).peekable();

    let mut result = ParsedPath::default();

    if segments.peek().is_none() {
        result.parsed.push(ROOT.to_string());
    }

    for segment in segments {
        if segment.contains('<') {
            if let Some((kind, name)) = placeholder(segment) {
                result.parsed.push(kind.to_string());
                result.args.push(name.to_string());
            }
        } else if segment == ">" {
            result.parsed.push(ROOT.to_string());
        } else {
            result.parsed.push(segment.to_string());
        }
    }

    if normalized.len() > 1 && normalized.ends_with('/') {
        result.parsed.push(ROOT.to_string());
    }

    result
}

/// Parses `path` through `cache`
pub fn parse_cached<'c>(cache: &'c mut ParseCache, path: &str) -> Cow<'c, ParsedPath> {
    cache.cache(path, || parse_path(path))
}

/// Splits a placeholder segment into (declared type, name)
///
/// The inner text starts right after the first `<`, takes at least one
/// character, and runs to the next `>` or the end of the segment.
fn placeholder(segment: &str) -> Option<(&str, &str)> {
    let start = segment.find('<')? + 1;
    let rest = &segment[start..];

    let first = rest.chars().next()?.len_utf8();
    let end = rest[first..].find('>').map_or(rest.len(), |i| i + first);
    let inner = &rest[..end];

    let mut parts = inner.split(':');
    let kind = parts.next().filter(|k| !k.is_empty())?;
    let name = parts.next().filter(|n| !n.is_empty()).unwrap_or(DEFAULT_ARG);

    Some((kind, name))
}
