//! Typed wildcard matching of a request against a stored template
//!
//! Each request segment is compared with the template segment at the same
//! position:
//!
//! - an identical segment is kept as is
//! - a segment inferring to `int`, `float`, `file`, `uuid` or `string`
//!   becomes that tag, and its raw text is captured
//! - anything else (the root marker) takes the template segment
//!
//! The derived list matches when it equals a registered template's
//! segments.

use crate::path::{parse_path, ParsedPath, ROOT};
use crate::route::segment::classify;
use std::collections::HashMap;

/// Bound placeholder values keyed by placeholder name
pub type Params = HashMap<String, String>;

/// Segments derived from a request for one candidate template
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Derived<'a> {
    pub segments: Vec<String>,
    pub captured: Vec<&'a str>,
}

/// Derives the typed form of `request` against `template`
///
/// Callers only pass templates with the same segment count.
pub(crate) fn derive<'a>(request: &'a [String], template: &[String]) -> Derived<'a> {
    let last = request.len().saturating_sub(1);
    let mut derived = Derived {
        segments: Vec::with_capacity(request.len()),
        captured: Vec::new(),
    };

    for (i, (token, stored)) in request.iter().zip(template).enumerate() {
        if token == stored {
            derived.segments.push(token.clone());
            continue;
        }

        let kind = classify(token, i == last).kind;
        if kind.is_typed() {
            derived.segments.push(kind.as_str().to_string());
            derived.captured.push(token.as_str());
        } else {
            derived.segments.push(stored.clone());
        }
    }

    derived
}

/// Zips captured tokens onto placeholder names; later names overwrite
///
/// Returns `None` when some placeholder would stay unbound.
pub(crate) fn bind(args: &[String], captured: &[&str]) -> Option<Params> {
    if captured.len() < args.len() {
        return None;
    }

    Some(
        args.iter()
            .zip(captured)
            .map(|(name, value)| (name.clone(), value.to_string()))
            .collect(),
    )
}

/// True for requests made only of root markers (`/`, `//`)
///
/// Only the exact lookup may answer these.
pub(crate) fn is_root_request(request: &ParsedPath) -> bool {
    request.parsed.iter().all(|segment| segment == ROOT)
}

/// Tests one concrete path against one route template
///
/// Returns the bound parameters on a match; an exact structural match binds
/// none.
///
/// # Examples
///
/// ```
/// use xkit_router::match_path;
///
/// let params = match_path("/users/42", "/users/<int:id>").unwrap();
/// assert_eq!(params["id"], "42");
///
/// assert!(match_path("/users/42", "/users/<uuid:id>").is_none());
/// assert!(match_path("/about", "/about").unwrap().is_empty());
/// ```
pub fn match_path(path: &str, pattern: &str) -> Option<Params> {
    let request = parse_path(path);
    let template = parse_path(pattern);

    if request.parsed == template.parsed {
        return Some(Params::new());
    }

    if is_root_request(&request) || request.len() != template.len() {
        return None;
    }

    let derived = derive(&request.parsed, &template.parsed);
    if derived.segments != template.parsed {
        return None;
    }
    bind(&template.args, &derived.captured)
}
