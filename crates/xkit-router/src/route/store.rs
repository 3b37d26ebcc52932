//! Insertion-ordered route store
//!
//! Templates are indexed by their structural key. Resolution tries the exact
//! key first, then scans the stored templates in registration order and
//! derives a typed key from the request for each one (see
//! [`crate::matcher`]). The first derived key present in the store wins.

use super::entry::RouteEntry;
use super::key::RouteKey;
use crate::matcher::{bind, derive, is_root_request, Params};
use crate::path::{parse_cached, ParseCache, ParsedPath};
use crate::RouteError;
use std::collections::HashMap;
use std::hash::Hash;

/// Result of a successful resolution
#[derive(Debug)]
pub struct RouteMatch<'a, T> {
    /// The entry stored under the matched key
    pub entry: &'a RouteEntry<T>,
    /// Bound placeholder values (empty for an exact match)
    pub params: Params,
}

impl<'a, T> RouteMatch<'a, T> {
    pub fn value(&self) -> &'a T {
        self.entry.value()
    }

    /// Template the request matched
    pub fn pattern(&self) -> &'a str {
        self.entry.path()
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Route templates keyed by structure, kept in registration order
#[derive(Debug, Clone)]
pub struct RouteStore<T> {
    entries: Vec<RouteEntry<T>>,
    index: HashMap<RouteKey, usize>,
}

impl<T> Default for RouteStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RouteStore<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Registers `pattern` with its associated value
    ///
    /// Fails with [`RouteError::Duplicate`] when another template already
    /// has the same structural key (placeholder names are not part of it).
    ///
    /// # Examples
    ///
    /// ```
    /// use xkit_router::{RouteError, RouteStore};
    ///
    /// let mut store = RouteStore::new();
    /// store.register("/users/<int:id>", "show").unwrap();
    ///
    /// let err = store.register("/users/<int:userId>", "again").unwrap_err();
    /// assert!(matches!(err, RouteError::Duplicate { .. }));
    /// ```
    pub fn register(&mut self, pattern: &str, value: T) -> Result<(), RouteError> {
        self.insert(RouteEntry::new(pattern, value)?)
    }

    /// Adds an already built entry
    pub fn insert(&mut self, entry: RouteEntry<T>) -> Result<(), RouteError> {
        if let Some(&existing) = self.index.get(entry.key()) {
            let existing = self.entries[existing].path();
            tracing::warn!(
                "Route {} conflicts with {} (key {})",
                entry.path(),
                existing,
                entry.key()
            );
            return Err(RouteError::duplicate(entry.path(), existing));
        }

        tracing::debug!("Registered route {} as {}", entry.path(), entry.key());

        self.index.insert(entry.key().clone(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    /// Resolves a concrete request path
    ///
    /// The request is parsed through `cache`. Returns `None` when nothing
    /// matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use xkit_router::{ParseCache, RouteStore};
    ///
    /// let mut store = RouteStore::new();
    /// store.register("/users/<int:id>", "user").unwrap();
    ///
    /// let mut cache = ParseCache::default();
    /// let found = store.resolve(&mut cache, "/users/42").unwrap();
    /// assert_eq!(*found.value(), "user");
    /// assert_eq!(found.param("id"), Some("42"));
    ///
    /// assert!(store.resolve(&mut cache, "/users/42/posts").is_none());
    /// ```
    pub fn resolve(&self, cache: &mut ParseCache, path: &str) -> Option<RouteMatch<'_, T>> {
        let request = parse_cached(cache, path);
        let found = self.resolve_parsed(&request);

        match &found {
            Some(m) => tracing::trace!("Resolved {} to {}", path, m.pattern()),
            None => tracing::trace!("No route for {}", path),
        }

        found
    }

    /// Resolves an already parsed request
    pub fn resolve_parsed(&self, request: &ParsedPath) -> Option<RouteMatch<'_, T>> {
        let exact = RouteKey::from_segments(&request.parsed).ok()?;
        if let Some(entry) = self.get(&exact) {
            return Some(RouteMatch {
                entry,
                params: Params::new(),
            });
        }

        if is_root_request(request) {
            return None;
        }

        self.entries
            .iter()
            .filter(|candidate| candidate.parsed().len() == request.len())
            .find_map(|candidate| {
                let derived = derive(&request.parsed, &candidate.parsed().parsed);
                let key = RouteKey::from_segments(&derived.segments).ok()?;
                let entry = self.get(&key)?;
                let params = bind(entry.args(), &derived.captured)?;
                Some(RouteMatch { entry, params })
            })
    }

    pub fn get(&self, key: &RouteKey) -> Option<&RouteEntry<T>> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    /// Looks up the entry registered for a template
    pub fn get_pattern(&self, pattern: &str) -> Option<&RouteEntry<T>> {
        let parsed = crate::path::parse_path(pattern);
        let key = RouteKey::from_segments(&parsed.parsed).ok()?;
        self.get(&key)
    }

    /// Structural keys in registration order
    pub fn keys(&self) -> impl Iterator<Item = &RouteKey> {
        self.entries.iter().map(RouteEntry::key)
    }

    pub fn entries(&self) -> &[RouteEntry<T>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One [`RouteStore`] per key, e.g. per HTTP method
#[derive(Debug, Clone)]
pub struct StoreSet<K, T> {
    stores: HashMap<K, RouteStore<T>>,
}

impl<K, T> StoreSet<K, T>
where
    K: Eq + Hash,
{
    /// Creates an empty store for every key
    ///
    /// ```
    /// use xkit_router::StoreSet;
    ///
    /// let mut set: StoreSet<&str, u32> = StoreSet::new(["GET", "POST"]);
    /// set.get_mut(&"GET").unwrap().register("/", 1).unwrap();
    /// assert_eq!(set.get(&"GET").unwrap().len(), 1);
    /// assert!(set.get(&"DELETE").is_none());
    /// ```
    pub fn new(keys: impl IntoIterator<Item = K>) -> Self {
        Self {
            stores: keys.into_iter().map(|k| (k, RouteStore::new())).collect(),
        }
    }

    pub fn get(&self, key: &K) -> Option<&RouteStore<T>> {
        self.stores.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut RouteStore<T>> {
        self.stores.get_mut(key)
    }

    /// Returns the store for `key`, creating an empty one when missing
    pub fn insert_store(&mut self, key: K) -> &mut RouteStore<T> {
        self.stores.entry(key).or_default()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.stores.keys()
    }

    pub fn len(&self) -> usize {
        self.stores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}
