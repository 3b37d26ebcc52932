//! File-backed JSON record cache
//!
//! Records are flat JSON objects identified by one of their fields (the
//! configured `key`). The whole cache is a single JSON object on disk,
//! `<dir>/ffs/<name>.json`, mapping id → record, mirrored in memory for reads.
//! Writes go to disk first, then to memory.

use crate::config::JsonCacheConfig;
use crate::merge::Record;
use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Persistent id → record cache
#[derive(Debug)]
pub struct JsonCache {
    path: PathBuf,
    key: String,
    records: HashMap<String, Record>,
}

impl JsonCache {
    /// Opens (creating when missing) the cache file described by `config`
    pub async fn open(config: &JsonCacheConfig) -> Result<Self> {
        let dir = config.dir.join("ffs");
        fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Failed to create cache directory: {:?}", dir))?;

        let path = dir.join(format!("{}.json", config.name));
        let exists = fs::try_exists(&path)
            .await
            .with_context(|| format!("Failed to inspect cache file: {:?}", path))?;
        if !exists {
            fs::write(&path, "{}")
                .await
                .with_context(|| format!("Failed to create cache file: {:?}", path))?;
            tracing::debug!("Created JSON cache file {:?}", path);
        }

        let records = read_records(&path)
            .await?
            .into_iter()
            .filter_map(|(id, value)| match value {
                Value::Object(record) => Some((id, record)),
                other => {
                    tracing::warn!("Skipping non-object cache entry {}: {}", id, other);
                    None
                }
            })
            .collect::<HashMap<_, _>>();

        tracing::debug!("Loaded {} records from {:?}", records.len(), path);

        Ok(Self {
            path,
            key: config.key.clone(),
            records,
        })
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.get(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Stores `record` under the value of its key field
    ///
    /// Returns `Ok(false)` without touching the file when the record has no
    /// key field.
    pub async fn set(&mut self, record: Record) -> Result<bool> {
        let Some(id) = record.get(&self.key).map(record_id) else {
            tracing::debug!("Record has no '{}' field, not cached", self.key);
            return Ok(false);
        };

        let mut on_disk = read_records(&self.path).await?;
        on_disk.insert(id.clone(), Value::Object(record.clone()));
        write_records(&self.path, &on_disk).await?;

        self.records.insert(id, record);
        Ok(true)
    }

    /// Removes the record stored under `id`; returns whether one existed
    pub async fn delete(&mut self, id: &str) -> Result<bool> {
        if !self.records.contains_key(id) {
            return Ok(false);
        }

        let mut on_disk = read_records(&self.path).await?;
        if on_disk.remove(id).is_some() {
            write_records(&self.path, &on_disk).await?;
        }

        self.records.remove(id);
        Ok(true)
    }

    /// Current file contents, re-read from disk
    pub async fn json(&self) -> Result<Value> {
        read_records(&self.path).await.map(Value::Object)
    }
}

/// String form of a key field: strings verbatim, other values as JSON text
fn record_id(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

async fn read_records(path: &Path) -> Result<Map<String, Value>> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read cache file: {:?}", path))?;

    if content.trim().is_empty() {
        return Ok(Map::new());
    }

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse cache file: {:?}", path))
}

async fn write_records(path: &Path, records: &Map<String, Value>) -> Result<()> {
    let json = serde_json::to_string(records).context("Failed to serialize cache records")?;

    fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write cache file: {:?}", path))?;

    tracing::debug!("Wrote {} records to {:?}", records.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_id() {
        assert_eq!(record_id(&json!("abc")), "abc");
        assert_eq!(record_id(&json!(42)), "42");
        assert_eq!(record_id(&json!(true)), "true");
    }
}
