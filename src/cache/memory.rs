use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

/// In-process cache tier with a fixed TTL measured from insertion.
///
/// Entries expire lazily: once `ttl` has elapsed since the insert, the key
/// reads as absent even while still physically present. Nothing survives a
/// restart; the durable tier covers that.
pub struct TtlCache<V> {
    entries: RwLock<HashMap<String, CacheEntry<V>>>,
    ttl: Duration,
    max_capacity: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

struct CacheEntry<V> {
    value: V,
    stored_at: Instant,
}

#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
    pub hit_rate: f64,
}

impl<V: Clone> TtlCache<V> {
    pub fn new(max_capacity: usize, ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            max_capacity,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub async fn get(&self, key: &str) -> Option<V> {
        let entries = self.entries.read().await;
        match entries.get(key) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(entry.value.clone())
            }
            _ => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    pub async fn set(&self, key: String, value: V) {
        let mut entries = self.entries.write().await;
        if entries.len() >= self.max_capacity && !entries.contains_key(&key) {
            let ttl = self.ttl;
            entries.retain(|_, entry| entry.stored_at.elapsed() < ttl);
            if entries.len() >= self.max_capacity {
                // Still full after dropping expired entries: evict the oldest.
                if let Some(oldest) = entries
                    .iter()
                    .min_by_key(|(_, entry)| entry.stored_at)
                    .map(|(key, _)| key.clone())
                {
                    entries.remove(&oldest);
                }
            }
        }
        entries.insert(
            key,
            CacheEntry {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    pub async fn stats(&self) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let hit_rate = if hits + misses > 0 {
            hits as f64 / (hits + misses) as f64 * 100.0
        } else {
            0.0
        };
        CacheStats {
            hits,
            misses,
            entries: self.entries.read().await.len(),
            hit_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn entry_expires_at_ttl_boundary() {
        let cache = TtlCache::new(16, Duration::from_secs(30));
        cache.set("key".to_string(), "value".to_string()).await;

        tokio::time::advance(Duration::from_secs(29)).await;
        assert_eq!(cache.get("key").await.as_deref(), Some("value"));

        tokio::time::advance(Duration::from_secs(1)).await;
        assert_eq!(cache.get("key").await, None);
    }

    #[tokio::test]
    async fn missing_key_is_absent() {
        let cache: TtlCache<String> = TtlCache::new(16, Duration::from_secs(30));
        assert_eq!(cache.get("nope").await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn overwrite_restarts_the_clock() {
        let cache = TtlCache::new(16, Duration::from_secs(30));
        cache.set("key".to_string(), 1u32).await;

        tokio::time::advance(Duration::from_secs(20)).await;
        cache.set("key".to_string(), 2u32).await;

        tokio::time::advance(Duration::from_secs(20)).await;
        assert_eq!(cache.get("key").await, Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn evicts_oldest_when_full() {
        let cache = TtlCache::new(2, Duration::from_secs(30));
        cache.set("a".to_string(), 1u32).await;
        tokio::time::advance(Duration::from_secs(1)).await;
        cache.set("b".to_string(), 2u32).await;
        tokio::time::advance(Duration::from_secs(1)).await;
        cache.set("c".to_string(), 3u32).await;

        assert_eq!(cache.get("a").await, None);
        assert_eq!(cache.get("b").await, Some(2));
        assert_eq!(cache.get("c").await, Some(3));
    }

    #[tokio::test]
    async fn tracks_hit_and_miss_counts() {
        let cache = TtlCache::new(16, Duration::from_secs(30));
        cache.set("key".to_string(), 1u32).await;
        cache.get("key").await;
        cache.get("absent").await;

        let stats = cache.stats().await;
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entries, 1);
        assert!((stats.hit_rate - 50.0).abs() < f64::EPSILON);
    }
}
