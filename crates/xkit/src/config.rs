// File: src/config.rs
// Purpose: Configuration parsing from xkit.toml

use crate::cache::CachePolicy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Toolkit configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub routing: RoutingConfig,

    #[serde(default)]
    pub json_cache: JsonCacheConfig,
}

/// Route matching configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RoutingConfig {
    /// Eviction policy of the parsed-path memo (default: unbounded)
    #[serde(default)]
    pub parse_cache: CachePolicy,
}

/// File-backed JSON cache configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonCacheConfig {
    /// Base directory; records live under `<dir>/ffs/` (default: ".xkit")
    #[serde(default = "default_cache_dir")]
    pub dir: PathBuf,

    /// File name without extension (default: "records")
    #[serde(default = "default_cache_name")]
    pub name: String,

    /// Record field used as the cache key (default: "id")
    #[serde(default = "default_cache_key")]
    pub key: String,
}

// Default values
fn default_cache_dir() -> PathBuf {
    PathBuf::from(".xkit")
}

fn default_cache_name() -> String {
    "records".to_string()
}

fn default_cache_key() -> String {
    "id".to_string()
}

impl Default for JsonCacheConfig {
    fn default() -> Self {
        Self {
            dir: default_cache_dir(),
            name: default_cache_name(),
            key: default_cache_key(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// A missing or empty file yields the default configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./xkit.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("xkit.toml")
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(content).context("Invalid xkit configuration")?;
        Ok(config)
    }
}
