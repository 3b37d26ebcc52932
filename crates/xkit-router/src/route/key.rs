//! Structural route keys
//!
//! Two patterns collide when their parsed segment lists are equal. The key
//! is the JSON encoding of that list, e.g. `["users","int"]`.

use crate::RouteError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteKey(String);

impl RouteKey {
    /// Encodes a segment list
    ///
    /// ```
    /// use xkit_router::RouteKey;
    ///
    /// let key = RouteKey::from_segments(&["users", "int"]).unwrap();
    /// assert_eq!(key.as_str(), r#"["users","int"]"#);
    /// ```
    pub fn from_segments<S: AsRef<str>>(segments: &[S]) -> Result<Self, RouteError> {
        let segments: Vec<&str> = segments.iter().map(AsRef::as_ref).collect();
        Ok(RouteKey(serde_json::to_string(&segments)?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
