//! Shape-aware merging of key-value stores
//!
//! Values are held in a [`Slot`], a small sum type that tells the merge how
//! to combine an incoming value with the one already stored:
//!
//! | incoming        | effect on destination                          |
//! |-----------------|------------------------------------------------|
//! | `Slot::Map`     | stored as-is, replacing any previous value     |
//! | `Slot::List`    | appended to an existing list (created if absent) |
//! | `Slot::Record`  | shallow-assigned into an existing record        |
//! | `Slot::Scalar`  | overwrites                                     |
//!
//! The destination is anything implementing [`KeyValueStore`].

use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

/// JSON object used as a record
pub type Record = Map<String, Value>;

/// A stored value, tagged by how it merges
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    /// Nested store, passed through untouched
    Map(HashMap<String, Slot>),
    /// Sequence, concatenated on merge
    List(Vec<Value>),
    /// Plain object, key-wise assigned on merge
    Record(Record),
    /// Anything else
    Scalar(Value),
}

impl From<Value> for Slot {
    /// Arrays become lists, objects become records, the rest are scalars
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Slot::List(items),
            Value::Object(record) => Slot::Record(record),
            other => Slot::Scalar(other),
        }
    }
}

/// Minimal associative container interface the merge functions work on
pub trait KeyValueStore {
    fn slot(&self, key: &str) -> Option<&Slot>;
    fn slot_mut(&mut self, key: &str) -> Option<&mut Slot>;
    fn put(&mut self, key: String, slot: Slot);
    fn slot_or_insert(&mut self, key: &str, default: Slot) -> &mut Slot;
}

impl KeyValueStore for HashMap<String, Slot> {
    fn slot(&self, key: &str) -> Option<&Slot> {
        self.get(key)
    }

    fn slot_mut(&mut self, key: &str) -> Option<&mut Slot> {
        self.get_mut(key)
    }

    fn put(&mut self, key: String, slot: Slot) {
        self.insert(key, slot);
    }

    fn slot_or_insert(&mut self, key: &str, default: Slot) -> &mut Slot {
        self.entry(key.to_string()).or_insert(default)
    }
}

impl KeyValueStore for BTreeMap<String, Slot> {
    fn slot(&self, key: &str) -> Option<&Slot> {
        self.get(key)
    }

    fn slot_mut(&mut self, key: &str) -> Option<&mut Slot> {
        self.get_mut(key)
    }

    fn put(&mut self, key: String, slot: Slot) {
        self.insert(key, slot);
    }

    fn slot_or_insert(&mut self, key: &str, default: Slot) -> &mut Slot {
        self.entry(key.to_string()).or_insert(default)
    }
}

/// Merges every entry of `src` into `dst` according to its [`Slot`] kind
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use serde_json::json;
/// use xkit::merge::{merge, Slot};
///
/// let mut dst: HashMap<String, Slot> = HashMap::new();
/// dst.insert("tags".into(), Slot::List(vec![json!("a")]));
///
/// merge(&mut dst, [("tags".to_string(), Slot::List(vec![json!("b")]))]);
///
/// assert_eq!(dst["tags"], Slot::List(vec![json!("a"), json!("b")]));
/// ```
pub fn merge<S, I>(dst: &mut S, src: I)
where
    S: KeyValueStore,
    I: IntoIterator<Item = (String, Slot)>,
{
    for (key, slot) in src {
        match slot {
            Slot::List(items) => match dst.slot_mut(&key) {
                Some(Slot::List(existing)) => existing.extend(items),
                _ => dst.put(key, Slot::List(items)),
            },
            Slot::Record(record) => assign(dst, key, record),
            map_or_scalar => dst.put(key, map_or_scalar),
        }
    }
}

/// Assigns the fields of `record` into the record stored under `key`
///
/// A missing key (or a non-record value) starts from an empty record.
pub fn assign<S: KeyValueStore>(dst: &mut S, key: String, record: Record) {
    match dst.slot_mut(&key) {
        Some(Slot::Record(existing)) => existing.extend(record),
        _ => dst.put(key, Slot::Record(record)),
    }
}

/// Returns the value under `key`, storing `default` first when absent
pub fn init<'a, S: KeyValueStore>(dst: &'a mut S, key: &str, default: Slot) -> &'a mut Slot {
    dst.slot_or_insert(key, default)
}

/// Sets every field of a JSON object into `dst`, overwriting
///
/// Non-object values (including `null`) are ignored.
pub fn merge_object<S: KeyValueStore>(dst: &mut S, object: &Value) {
    if let Some(fields) = object.as_object() {
        for (key, value) in fields {
            dst.put(key.clone(), Slot::from(value.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_scalars_overwrite() {
        let mut dst: HashMap<String, Slot> = HashMap::new();
        dst.put("x".into(), Slot::Scalar(json!(1)));

        merge(
            &mut dst,
            [
                ("x".to_string(), Slot::Scalar(json!(10))),
                ("y".to_string(), Slot::Scalar(json!(20))),
            ],
        );

        assert_eq!(dst["x"], Slot::Scalar(json!(10)));
        assert_eq!(dst["y"], Slot::Scalar(json!(20)));
        assert_eq!(dst.len(), 2);
    }

    #[test]
    fn test_nested_maps_pass_through() {
        let mut nested = HashMap::new();
        nested.insert("inner".to_string(), Slot::Scalar(json!(123)));

        let mut dst: HashMap<String, Slot> = HashMap::new();
        dst.put("nested".into(), Slot::Scalar(json!("old")));
        merge(&mut dst, [("nested".to_string(), Slot::Map(nested.clone()))]);

        assert_eq!(dst["nested"], Slot::Map(nested));
    }

    #[test]
    fn test_lists_concatenate() {
        let mut dst: BTreeMap<String, Slot> = BTreeMap::new();
        dst.put("arr".into(), Slot::List(vec![json!(1), json!(2)]));

        merge(&mut dst, [("arr".to_string(), Slot::List(vec![json!(3), json!(4)]))]);

        assert_eq!(
            dst["arr"],
            Slot::List(vec![json!(1), json!(2), json!(3), json!(4)])
        );
    }

    #[test]
    fn test_lists_created_when_missing() {
        let mut dst: HashMap<String, Slot> = HashMap::new();
        merge(&mut dst, [("arr".to_string(), Slot::List(vec![json!(1)]))]);
        assert_eq!(dst["arr"], Slot::List(vec![json!(1)]));
    }

    #[test]
    fn test_records_assign() {
        let mut dst: HashMap<String, Slot> = HashMap::new();
        dst.put("cfg".into(), Slot::Record(record(json!({"x": 9}))));

        merge(
            &mut dst,
            [
                ("cfg".to_string(), Slot::Record(record(json!({"a": 1})))),
                ("other".to_string(), Slot::Record(record(json!({"b": 2})))),
            ],
        );

        assert_eq!(dst["cfg"], Slot::Record(record(json!({"x": 9, "a": 1}))));
        assert_eq!(dst["other"], Slot::Record(record(json!({"b": 2}))));
    }

    #[test]
    fn test_init_keeps_existing() {
        let mut dst: HashMap<String, Slot> = HashMap::new();
        assert_eq!(
            *init(&mut dst, "count", Slot::Scalar(json!(0))),
            Slot::Scalar(json!(0))
        );

        dst.put("count".into(), Slot::Scalar(json!(5)));
        assert_eq!(
            *init(&mut dst, "count", Slot::Scalar(json!(0))),
            Slot::Scalar(json!(5))
        );
    }

    #[test]
    fn test_merge_object_ignores_null() {
        let mut dst: HashMap<String, Slot> = HashMap::new();
        merge_object(&mut dst, &Value::Null);
        assert!(dst.is_empty());

        merge_object(&mut dst, &json!({"a": 1, "b": [2]}));
        assert_eq!(dst["a"], Slot::Scalar(json!(1)));
        assert_eq!(dst["b"], Slot::List(vec![json!(2)]));
    }
}
