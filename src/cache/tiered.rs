use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use super::memory::{CacheStats, TtlCache};
use crate::constants::CACHE_MAX_ENTRIES;
use crate::errors::Result;

/// Persistent key/value tier consumed by [`TieredCache`].
///
/// Implementations own expiry: `get` must not return an entry past the
/// `expires_at` its `set` was given. I/O errors are returned to the caller,
/// which decides how to degrade.
#[async_trait]
pub trait DurableStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: String, expires_at: DateTime<Utc>) -> Result<()>;
}

/// Two-tier read/write-through cache with a single TTL policy.
///
/// Reads consult the memory tier first and fall back to the durable tier,
/// re-populating memory on a durable hit. Durable keys carry the configured
/// namespace prefix; memory keys are unprefixed.
pub struct TieredCache {
    memory: TtlCache<serde_json::Value>,
    durable: Arc<dyn DurableStore>,
    namespace: String,
    ttl: Duration,
}

impl TieredCache {
    pub fn new(durable: Arc<dyn DurableStore>, namespace: impl Into<String>, ttl: Duration) -> Self {
        Self {
            memory: TtlCache::new(CACHE_MAX_ENTRIES, ttl),
            durable,
            namespace: namespace.into(),
            ttl,
        }
    }

    fn durable_key(&self, key: &str) -> String {
        format!("{}/{}", self.namespace, key)
    }

    /// Read through both tiers. A durable read failure, a corrupt entry, or
    /// one that no longer deserializes into `T` is treated as a miss.
    pub async fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        if let Some(value) = self.memory.get(key).await {
            match serde_json::from_value(value) {
                Ok(decoded) => {
                    debug!("Memory cache hit: {}", key);
                    return Some(decoded);
                }
                Err(e) => warn!("Discarding unreadable memory cache entry {}: {}", key, e),
            }
        }

        let raw = match self.durable.get(&self.durable_key(key)).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Durable cache read failed for {}, treating as miss: {}", key, e);
                return None;
            }
        };

        let value: serde_json::Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("Discarding corrupt durable cache entry {}: {}", key, e);
                return None;
            }
        };

        match serde_json::from_value(value.clone()) {
            Ok(decoded) => {
                debug!("Durable cache hit: {}, populating memory tier", key);
                self.memory.set(key.to_string(), value).await;
                Some(decoded)
            }
            Err(e) => {
                warn!("Discarding unreadable durable cache entry {}: {}", key, e);
                None
            }
        }
    }

    /// Write through both tiers with the shared TTL.
    ///
    /// The memory entry stays valid for its own TTL even if the durable
    /// write fails; that failure is logged, not returned.
    pub async fn write<T: Serialize>(&self, key: &str, value: &T) {
        let json = match serde_json::to_value(value) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize cache value for {}: {}", key, e);
                return;
            }
        };

        self.memory.set(key.to_string(), json.clone()).await;

        let expires_at = Utc::now() + chrono::Duration::seconds(self.ttl.as_secs() as i64);
        if let Err(e) = self
            .durable
            .set(&self.durable_key(key), json.to_string(), expires_at)
            .await
        {
            warn!("Durable cache write failed for {}: {}", key, e);
        }
    }

    pub async fn stats(&self) -> CacheStats {
        self.memory.stats().await
    }
}
