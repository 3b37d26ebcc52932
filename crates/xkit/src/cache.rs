//! In-process caching wrappers
//!
//! - [`Cacher`]: keyed memo with an explicit [`CachePolicy`]
//! - [`Singleton`]: a value built once from a factory, shared afterwards
//! - [`Memoized`]: a function whose results are remembered per argument

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::borrow::{Borrow, Cow};
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// Eviction policy of a [`Cacher`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "policy", rename_all = "lowercase")]
pub enum CachePolicy {
    /// Keep every entry for the lifetime of the cache
    #[default]
    Unbounded,
    /// Keep at most `capacity` entries, evicting the oldest insertion first
    Bounded { capacity: usize },
    /// Never store anything; every lookup runs the factory
    Disabled,
}

impl CachePolicy {
    fn stores(&self) -> bool {
        match self {
            CachePolicy::Unbounded => true,
            CachePolicy::Bounded { capacity } => *capacity > 0,
            CachePolicy::Disabled => false,
        }
    }
}

/// Keyed memo: computes a value on first lookup, returns the stored one after
///
/// # Examples
///
/// ```
/// use xkit::cache::{Cacher, CachePolicy};
///
/// let mut cache: Cacher<String, usize> = Cacher::new(CachePolicy::Unbounded);
/// assert_eq!(*cache.cache("abc", || 3), 3);
/// // Factory is not called again for a cached key
/// assert_eq!(*cache.cache("abc", || unreachable!()), 3);
/// ```
pub struct Cacher<K, V> {
    entries: HashMap<K, V>,
    order: VecDeque<K>,
    policy: CachePolicy,
}

impl<K, V> Cacher<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            policy,
        }
    }

    /// Returns the value stored under `key`, running `factory` on a miss
    ///
    /// With [`CachePolicy::Disabled`] the factory result is returned owned and
    /// nothing is stored.
    pub fn cache<Q, F>(&mut self, key: &Q, factory: F) -> Cow<'_, V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
        F: FnOnce() -> V,
    {
        if !self.policy.stores() {
            return Cow::Owned(factory());
        }

        if !self.entries.contains_key(key) {
            self.make_room();
            let owned = key.to_owned();
            if let CachePolicy::Bounded { .. } = self.policy {
                self.order.push_back(owned.clone());
            }
            self.entries.insert(owned, factory());
        }

        Cow::Borrowed(&self.entries[key])
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn policy(&self) -> CachePolicy {
        self.policy
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// Evicts oldest entries until one more fits
    fn make_room(&mut self) {
        let CachePolicy::Bounded { capacity } = self.policy else {
            return;
        };

        while self.entries.len() >= capacity {
            match self.order.pop_front() {
                Some(oldest) => {
                    self.entries.remove(&oldest);
                }
                None => break,
            }
        }
    }
}

impl<K, V> Default for Cacher<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new(CachePolicy::default())
    }
}

impl<K, V> fmt::Debug for Cacher<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cacher")
            .field("len", &self.entries.len())
            .field("policy", &self.policy)
            .finish()
    }
}

/// A value built from `init` on first access and shared afterwards
///
/// ```
/// use xkit::cache::Singleton;
///
/// let config = Singleton::new(|| vec![1, 2, 3]);
/// assert!(!config.is_initialized());
/// assert_eq!(config.get().len(), 3);
/// assert!(std::ptr::eq(config.get(), config.get()));
/// ```
pub struct Singleton<T, F = fn() -> T> {
    cell: OnceCell<T>,
    init: F,
}

impl<T, F: Fn() -> T> Singleton<T, F> {
    pub fn new(init: F) -> Self {
        Self {
            cell: OnceCell::new(),
            init,
        }
    }

    pub fn get(&self) -> &T {
        self.cell.get_or_init(&self.init)
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

/// Function wrapper remembering results per JSON-encoded argument
pub struct Memoized<A, R, F> {
    func: F,
    results: HashMap<String, R>,
    _args: PhantomData<fn(&A)>,
}

impl<A, R, F> Memoized<A, R, F>
where
    A: Serialize,
    F: Fn(&A) -> R,
{
    pub fn new(func: F) -> Self {
        Self {
            func,
            results: HashMap::new(),
            _args: PhantomData,
        }
    }

    /// Calls the wrapped function unless `args` was seen before
    ///
    /// Fails only when `args` cannot be encoded as JSON.
    pub fn call(&mut self, args: &A) -> serde_json::Result<&R> {
        let key = serde_json::to_string(args)?;
        let func = &self.func;
        Ok(self.results.entry(key).or_insert_with(|| func(args)))
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_unbounded_never_evicts() {
        let mut cache: Cacher<String, usize> = Cacher::default();
        for i in 0..100 {
            cache.cache(&i.to_string(), || i);
        }
        assert_eq!(cache.len(), 100);
        assert_eq!(cache.get("42"), Some(&42));
    }

    #[test]
    fn test_bounded_evicts_oldest() {
        let mut cache: Cacher<String, usize> = Cacher::new(CachePolicy::Bounded { capacity: 2 });
        cache.cache("a", || 1);
        cache.cache("b", || 2);
        cache.cache("c", || 3);

        assert_eq!(cache.len(), 2);
        assert!(!cache.contains("a"));
        assert!(cache.contains("b"));
        assert!(cache.contains("c"));
    }

    #[test]
    fn test_bounded_hit_does_not_evict() {
        let mut cache: Cacher<String, usize> = Cacher::new(CachePolicy::Bounded { capacity: 2 });
        cache.cache("a", || 1);
        cache.cache("b", || 2);
        cache.cache("a", || 10);

        assert_eq!(cache.get("a"), Some(&1));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_disabled_stores_nothing() {
        let calls = Cell::new(0);
        let mut cache: Cacher<String, usize> = Cacher::new(CachePolicy::Disabled);
        for _ in 0..3 {
            let value = cache.cache("k", || {
                calls.set(calls.get() + 1);
                7
            });
            assert!(matches!(value, Cow::Owned(7)));
        }
        assert_eq!(calls.get(), 3);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_zero_capacity_behaves_disabled() {
        let mut cache: Cacher<String, usize> = Cacher::new(CachePolicy::Bounded { capacity: 0 });
        assert_eq!(*cache.cache("k", || 1), 1);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_policy_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            cache: CachePolicy,
        }

        let bounded: Wrapper =
            toml::from_str("cache = { policy = \"bounded\", capacity = 8 }").unwrap();
        assert_eq!(bounded.cache, CachePolicy::Bounded { capacity: 8 });

        let disabled: Wrapper = toml::from_str("cache = { policy = \"disabled\" }").unwrap();
        assert_eq!(disabled.cache, CachePolicy::Disabled);
    }

    #[test]
    fn test_singleton_builds_once() {
        let calls = Cell::new(0);
        let single = Singleton::new(|| {
            calls.set(calls.get() + 1);
            String::from("instance")
        });

        assert_eq!(single.get(), "instance");
        assert_eq!(single.get(), "instance");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_memoized_per_argument() {
        let calls = Cell::new(0);
        let mut square = Memoized::new(|n: &(u32, u32)| {
            calls.set(calls.get() + 1);
            n.0 * n.1
        });

        assert_eq!(*square.call(&(3, 3)).unwrap(), 9);
        assert_eq!(*square.call(&(3, 3)).unwrap(), 9);
        assert_eq!(*square.call(&(2, 5)).unwrap(), 10);
        assert_eq!(calls.get(), 2);
        assert_eq!(square.len(), 2);
    }
}
