//! # xkit
//!
//! Small, independent utilities shared by the xkit crates.
//!
//! ## Modules
//!
//! - **[`is`]**: runtime predicates over JSON values and numeric string literals
//! - **[`merge`]**: shape-aware merging of key-value stores
//! - **[`diff`]**: added / removed / modified keys between two objects
//! - **[`cache`]**: keyed memo with an explicit eviction policy, singletons, memoized functions
//! - **[`strings`]**: trimming, case conversion, random identifiers
//! - **[`json_cache`]**: file-backed JSON record cache
//! - **[`config`]**: `xkit.toml` configuration
//! - **[`logging`]**: `tracing` subscriber bootstrap
//!
//! ## Example
//!
//! ```rust
//! use xkit::cache::{Cacher, CachePolicy};
//! use xkit::config::Config;
//!
//! let config = Config::from_toml_str(r#"
//!     [routing]
//!     parse_cache = { policy = "bounded", capacity = 2 }
//! "#).unwrap();
//!
//! let mut memo: Cacher<String, usize> = Cacher::new(config.routing.parse_cache);
//! assert_eq!(*memo.cache("key", || 1), 1);
//! ```

pub mod cache;
pub mod config;
pub mod diff;
pub mod is;
pub mod json_cache;
pub mod logging;
pub mod merge;
pub mod strings;

pub use cache::{CachePolicy, Cacher, Memoized, Singleton};
pub use config::{Config, JsonCacheConfig, RoutingConfig};
pub use json_cache::JsonCache;
