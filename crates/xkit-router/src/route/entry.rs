//! Registered route entries

use super::key::RouteKey;
use crate::path::{parse_path, ParsedPath};
use crate::RouteError;

/// A route template together with its parsed form and its value
#[derive(Debug, Clone)]
pub struct RouteEntry<T> {
    path: String,
    parsed: ParsedPath,
    key: RouteKey,
    value: T,
}

impl<T> RouteEntry<T> {
    /// Parses `path` and computes its structural key
    pub fn new(path: impl Into<String>, value: T) -> Result<Self, RouteError> {
        let path = path.into();
        let parsed = parse_path(&path);
        let key = RouteKey::from_segments(&parsed.parsed)?;

        Ok(Self {
            path,
            parsed,
            key,
            value,
        })
    }

    /// Template exactly as registered
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn parsed(&self) -> &ParsedPath {
        &self.parsed
    }

    /// Placeholder names, in path order
    pub fn args(&self) -> &[String] {
        &self.parsed.args
    }

    pub fn key(&self) -> &RouteKey {
        &self.key
    }

    pub fn value(&self) -> &T {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_from_template() {
        let entry = RouteEntry::new("/users/<int:id>", "user").unwrap();
        assert_eq!(entry.path(), "/users/<int:id>");
        assert_eq!(entry.parsed().parsed, vec!["users", "int"]);
        assert_eq!(entry.args(), ["id"]);
        assert_eq!(entry.key().as_str(), r#"["users","int"]"#);
        assert_eq!(*entry.value(), "user");
    }

    #[test]
    fn test_names_do_not_affect_key() {
        let a = RouteEntry::new("/users/<int:id>", ()).unwrap();
        let b = RouteEntry::new("users/<int:userId>", ()).unwrap();
        assert_eq!(a.key(), b.key());
    }
}
