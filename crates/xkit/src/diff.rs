//! Shallow change detection between two JSON objects

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;

/// Old and new value of a modified key
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Modified {
    pub old: Value,
    pub new: Value,
}

/// Keys added, removed and modified between two objects
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Changes {
    pub added: Map<String, Value>,
    pub removed: Map<String, Value>,
    pub modified: BTreeMap<String, Modified>,
}

impl Changes {
    /// True when any key was added, removed or modified
    pub fn is_updated(&self) -> bool {
        !(self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty())
    }
}

/// Compares two objects key by key
///
/// Nested objects are compared recursively, but a nested difference is
/// reported as a modification of the top-level key holding it.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use xkit::diff::{compare_objects, Modified};
///
/// let old = json!({"foo": 1, "bar": 2});
/// let new = json!({"foo": 2, "baz": 3});
/// let changes = compare_objects(old.as_object().unwrap(), new.as_object().unwrap());
///
/// assert_eq!(changes.added["baz"], json!(3));
/// assert_eq!(changes.removed["bar"], json!(2));
/// assert_eq!(changes.modified["foo"], Modified { old: json!(1), new: json!(2) });
/// ```
pub fn compare_objects(old: &Map<String, Value>, new: &Map<String, Value>) -> Changes {
    let mut changes = Changes::default();

    for (key, new_value) in new {
        let Some(old_value) = old.get(key) else {
            changes.added.insert(key.clone(), new_value.clone());
            continue;
        };

        let differs = match (old_value, new_value) {
            (Value::Object(a), Value::Object(b)) => compare_objects(a, b).is_updated(),
            (a, b) => a != b,
        };

        if differs {
            changes.modified.insert(
                key.clone(),
                Modified {
                    old: old_value.clone(),
                    new: new_value.clone(),
                },
            );
        }
    }

    for (key, old_value) in old {
        if !new.contains_key(key) {
            changes.removed.insert(key.clone(), old_value.clone());
        }
    }

    changes
}

/// True when the two sets do not hold the same members
pub fn sets_differ<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> bool {
    a.len() != b.len() || a.iter().any(|v| !b.contains(v))
}
