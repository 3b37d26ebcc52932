//! # xkit Router
//!
//! A path-template matcher with segment type inference:
//! - Literal templates (`/about`)
//! - Typed placeholders (`/users/<int:id>`, `/files/<file:name>`)
//! - Unnamed placeholders (`/items/<uuid>`, bound as `_`)
//! - Trailing slash and root markers (`/docs/`, `/`)
//!
//! ## Resolution
//!
//! Templates are stored under a structural key, the JSON list of their
//! parsed segments. A request first tries its own key (exact match). Then
//! every template with the same segment count is tried in registration
//! order: request segments that differ from the template are replaced by
//! their inferred type (`int`, `float`, `file`, `uuid`, `string`), and the
//! first resulting key present in the store wins.
//!
//! The inferred type has to equal the declared one: `<int:id>` matches
//! `42` but not `abc`, and `<float:x>` does not match `42`.
//!
//! ## Parse Cache
//!
//! Parsing is memoized in a caller-owned [`ParseCache`] whose growth is set
//! by a [`CachePolicy`]. [`Router`] bundles a store with its cache.
//!
//! ## Example
//!
//! ```
//! use xkit_router::Router;
//!
//! let mut router = Router::new()
//!     .with_route("/users/<int:id>", "user")
//!     .unwrap()
//!     .with_route("/files/<file:name>", "file")
//!     .unwrap();
//!
//! let found = router.resolve("/users/42").unwrap();
//! assert_eq!(*found.value(), "user");
//! assert_eq!(found.param("id"), Some("42"));
//!
//! let found = router.resolve("/files/report.pdf").unwrap();
//! assert_eq!(found.param("name"), Some("report.pdf"));
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod error;
pub mod matcher;
pub mod path;
pub mod route;

pub use error::RouteError;
pub use matcher::{match_path, Params};
pub use path::{parse_cached, parse_path, ParseCache, ParsedPath, DEFAULT_ARG, ROOT};
pub use route::{
    classify, RouteEntry, RouteKey, RouteMatch, RouteStore, Segment, SegmentKind, SegmentValue,
    StoreSet,
};
pub use xkit::cache::CachePolicy;
pub use xkit::config::RoutingConfig;

// ============================================================================
// Router
// ============================================================================

/// A [`RouteStore`] together with the parse cache used to resolve against it
///
/// # Examples
///
/// ```
/// use xkit_router::{CachePolicy, Router};
///
/// let mut router = Router::with_policy(CachePolicy::Bounded { capacity: 2 });
/// router.register("/a/<string:x>", 1).unwrap();
/// router.register("/<string:y>/b", 2).unwrap();
///
/// // Both templates fit; the first registered wins
/// let found = router.resolve("/a/b").unwrap();
/// assert_eq!(*found.value(), 1);
/// assert_eq!(found.param("x"), Some("b"));
/// ```
#[derive(Debug)]
pub struct Router<T> {
    store: RouteStore<T>,
    cache: ParseCache,
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Router<T> {
    /// Creates an empty router with an unbounded parse cache
    pub fn new() -> Self {
        Self::with_policy(CachePolicy::default())
    }

    pub fn with_policy(policy: CachePolicy) -> Self {
        Self {
            store: RouteStore::new(),
            cache: ParseCache::new(policy),
        }
    }

    /// Creates an empty router configured by the `[routing]` section
    pub fn from_config(config: &RoutingConfig) -> Self {
        Self::with_policy(config.parse_cache)
    }

    // ========================================================================
    // Builder API
    // ========================================================================

    /// Registers a template (builder pattern)
    pub fn with_route(mut self, pattern: &str, value: T) -> Result<Self, RouteError> {
        self.register(pattern, value)?;
        Ok(self)
    }

    // ========================================================================
    // Registration & Resolution
    // ========================================================================

    pub fn register(&mut self, pattern: &str, value: T) -> Result<(), RouteError> {
        self.store.register(pattern, value)
    }

    /// Resolves a concrete request path, memoizing its parse
    pub fn resolve(&mut self, path: &str) -> Option<RouteMatch<'_, T>> {
        self.store.resolve(&mut self.cache, path)
    }

    pub fn store(&self) -> &RouteStore<T> {
        &self.store
    }

    pub fn cache(&self) -> &ParseCache {
        &self.cache
    }

    /// Drops every memoized parse
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Splits the router into its store and cache
    pub fn into_parts(self) -> (RouteStore<T>, ParseCache) {
        (self.store, self.cache)
    }
}
