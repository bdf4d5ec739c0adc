//! Cache-backed fetching.
//!
//! `CachedFetcher` sits between the cache store and the remote API:
//! a present key is served as-is (the cache is authoritative, no
//! revalidation), a miss triggers exactly one remote call whose result
//! is written back without being awaited.
//!
//! Known race: a second fetch for the same key that lands before the
//! spawned write completes re-enters the miss path. Writes are
//! idempotent (same key, same eventually-consistent payload), so the
//! duplicate only costs extra traffic.

use std::future::Future;
use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info, warn};

use crate::api::FetchError;
use crate::cache::{CachedData, KeyValueCache};

/// A fetchable payload. API responses may report failure inside an
/// otherwise-successful body; `take_error` pops the most recent such
/// message, if any.
pub trait Payload {
    fn take_error(&mut self) -> Option<String>;
}

pub struct CachedFetcher<S> {
    store: Arc<S>,
}

impl<S: KeyValueCache> CachedFetcher<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Serve `key` from cache, or run `remote` once and cache its
    /// result.
    ///
    /// The cache write is spawned and never awaited: a write failure
    /// is logged, not surfaced. An `errors` field inside the payload
    /// fails the fetch whether it came from cache or network - the
    /// error payload itself is cached, matching what was received.
    pub async fn fetch<T, F, Fut>(&self, key: &str, remote: F) -> Result<T, FetchError>
    where
        T: Payload + Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, FetchError>>,
    {
        if let Some(bytes) = self.store.get(key).await {
            match serde_json::from_slice::<CachedData<T>>(&bytes) {
                Ok(cached) => {
                    info!(key, age = %cached.age_display(), "served from cache");
                    let mut payload = cached.data;
                    return match payload.take_error() {
                        Some(message) => Err(FetchError::Api(message)),
                        None => Ok(payload),
                    };
                }
                Err(e) => {
                    warn!(key, error = %e, "unreadable cache entry, refetching");
                }
            }
        }

        let mut payload = remote().await?;

        // Cache the response as received, error payloads included,
        // before inspecting it.
        match serde_json::to_vec(&CachedData::new(&payload)) {
            Ok(bytes) => {
                let store = Arc::clone(&self.store);
                let key = key.to_string();
                tokio::spawn(async move {
                    match store.put(&key, bytes).await {
                        Ok(()) => debug!(key = %key, "cached"),
                        Err(e) => warn!(key = %key, error = %e, "cache write failed"),
                    }
                });
            }
            Err(e) => warn!(key, error = %e, "failed to serialize payload for cache"),
        }

        info!(key, "served from API, now cached");
        match payload.take_error() {
            Some(message) => Err(FetchError::Api(message)),
            None => Ok(payload),
        }
    }
}
