use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Envelope written around every cached payload. `cached_at` is
/// informational only - it shows up in log lines, never in an expiry
/// decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedData<T> {
    pub data: T,
    pub cached_at: DateTime<Utc>,
}

impl<T> CachedData<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            cached_at: Utc::now(),
        }
    }

    pub fn age_minutes(&self) -> i64 {
        (Utc::now() - self.cached_at).num_minutes()
    }

    pub fn age_display(&self) -> String {
        let minutes = self.age_minutes();
        if minutes < 1 {
            // Covers clock skew too
            "just now".to_string()
        } else if minutes < 60 {
            format!("{}m ago", minutes)
        } else if minutes < 1440 {
            format!("{}h ago", minutes / 60)
        } else {
            format!("{}d ago", minutes / 1440)
        }
    }
}

/// A byte store keyed by string.
///
/// `get` never errors the caller: "not found" and "failed to read" are
/// both a miss. `put` reports failure, but the fetcher only logs it -
/// a lost write costs one extra remote call later, nothing else.
#[async_trait]
pub trait KeyValueCache: Send + Sync + 'static {
    async fn get(&self, key: &str) -> Option<Vec<u8>>;
    async fn put(&self, key: &str, value: Vec<u8>) -> Result<()>;
}

/// File-backed store: one `<key>.json` file per key under the cache
/// directory.
pub struct FileStore {
    cache_dir: PathBuf,
}

impl FileStore {
    pub fn new(cache_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&cache_dir)
            .with_context(|| format!("failed to create cache dir {}", cache_dir.display()))?;
        Ok(Self { cache_dir })
    }

    fn cache_path(&self, key: &str) -> PathBuf {
        // Keys are dotted identifiers; replace anything that could
        // escape the cache dir.
        let safe: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.cache_dir.join(format!("{}.json", safe))
    }
}

#[async_trait]
impl KeyValueCache for FileStore {
    async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let path = self.cache_path(key);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Some(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                debug!(key, error = %e, "cache read failed, treating as miss");
                None
            }
        }
    }

    async fn put(&self, key: &str, value: Vec<u8>) -> Result<()> {
        let path = self.cache_path(key);
        tokio::fs::write(&path, value)
            .await
            .with_context(|| format!("failed to write cache file {}", path.display()))?;
        Ok(())
    }
}

/// In-memory store used by tests that exercise the fetch pipeline
/// without touching disk.
#[cfg(test)]
pub struct MemStore {
    entries: tokio::sync::Mutex<std::collections::HashMap<String, Vec<u8>>>,
}

#[cfg(test)]
impl MemStore {
    pub fn new() -> Self {
        Self {
            entries: tokio::sync::Mutex::new(std::collections::HashMap::new()),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl KeyValueCache for MemStore {
    async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.lock().await.get(key).cloned()
    }

    async fn put(&self, key: &str, value: Vec<u8>) -> Result<()> {
        self.entries.lock().await.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn cached_data_age_display_just_now() {
        let cached = CachedData::new(vec![1, 2, 3]);
        assert_eq!(cached.age_display(), "just now");
    }

    #[test]
    fn cached_data_age_display_hours() {
        let mut cached = CachedData::new(vec![1]);
        cached.cached_at = Utc::now() - Duration::minutes(125);
        assert_eq!(cached.age_display(), "2h ago");
    }

    #[tokio::test]
    async fn file_store_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).unwrap();
        assert_eq!(store.get("events").await, None);
    }

    #[tokio::test]
    async fn file_store_round_trips_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).unwrap();
        store
            .put("event_attendance.abc123", b"[1,2,3]".to_vec())
            .await
            .unwrap();
        assert_eq!(
            store.get("event_attendance.abc123").await,
            Some(b"[1,2,3]".to_vec())
        );
    }

    #[tokio::test]
    async fn file_store_sanitizes_hostile_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).unwrap();
        store.put("../escape", b"x".to_vec()).await.unwrap();
        // Whatever the name maps to, it stays inside the cache dir
        // and reads back through the same mapping.
        assert_eq!(store.get("../escape").await, Some(b"x".to_vec()));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
