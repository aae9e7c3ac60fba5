// In-memory cache implementation using DashMap
use crate::domain::traits::{Cache, CachedValue};
use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tracing::debug;

#[derive(Debug, Clone)]
struct CacheEntry {
    value: CachedValue,
    expires_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Thread-safe in-memory cache with per-key expiry
///
/// Expired entries are dropped lazily when read, or in bulk by
/// [`Cache::purge_expired`] (see [`spawn_cache_sweeper`]). Concurrent
/// writers to the same key are last-write-wins.
pub struct MemoryCache {
    map: DashMap<String, CacheEntry>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self {
            map: DashMap::new(),
        }
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl Cache for MemoryCache {
    fn get(&self, key: &str) -> Option<CachedValue> {
        let now = Instant::now();
        {
            let entry = self.map.get(key)?;
            if !entry.is_expired(now) {
                return Some(entry.value.clone());
            }
        }
        // Guard released above; re-check so a fresh concurrent write survives.
        self.map.remove_if(key, |_, entry| entry.is_expired(now));
        None
    }

    fn set(&self, key: String, value: CachedValue, ttl: Duration) {
        let expires_at = Instant::now()
            .checked_add(ttl)
            .unwrap_or_else(|| Instant::now() + Duration::from_secs(60 * 60 * 24 * 365));
        self.map.insert(key, CacheEntry { value, expires_at });
    }

    fn delete(&self, key: &str) -> bool {
        self.map.remove(key).is_some()
    }

    fn clear(&self) -> usize {
        let count = self.map.len();
        self.map.clear();
        count
    }

    fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.map.len();
        self.map.retain(|_, entry| !entry.is_expired(now));
        before.saturating_sub(self.map.len())
    }

    fn len(&self) -> usize {
        self.map.len()
    }
}

/// Periodically sweep expired entries.
///
/// Keys that are never read again (one per unseen `lang` code) are only
/// reclaimed here. Abort the returned handle to stop the sweeper.
pub fn spawn_cache_sweeper(cache: Arc<dyn Cache>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let removed = cache.purge_expired();
            if removed > 0 {
                debug!(removed, remaining = cache.len(), "swept expired cache entries");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() {
        let cache = MemoryCache::new();
        cache.set(
            "faq:question:1:hi".to_string(),
            CachedValue::Text("नमस्ते".to_string()),
            Duration::from_secs(60),
        );
        assert_eq!(
            cache.get("faq:question:1:hi"),
            Some(CachedValue::Text("नमस्ते".to_string()))
        );
        assert_eq!(cache.get("faq:question:1:bn"), None);
    }

    #[test]
    fn test_zero_ttl_expires_immediately() {
        let cache = MemoryCache::new();
        cache.set(
            "k".to_string(),
            CachedValue::Text("v".to_string()),
            Duration::ZERO,
        );
        assert_eq!(cache.get("k"), None);
        // Lazy eviction removed it
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_purge_expired_keeps_live_entries() {
        let cache = MemoryCache::new();
        cache.set("dead".to_string(), CachedValue::Items(vec![]), Duration::ZERO);
        cache.set(
            "alive".to_string(),
            CachedValue::Items(vec![]),
            Duration::from_secs(60),
        );
        assert_eq!(cache.purge_expired(), 1);
        assert_eq!(cache.len(), 1);
        assert!(cache.get("alive").is_some());
    }

    #[tokio::test]
    async fn test_sweeper_reclaims_unread_expired_entries() {
        let cache: Arc<dyn Cache> = Arc::new(MemoryCache::new());
        for i in 0..50 {
            cache.set(format!("faq:list:zz{i}"), CachedValue::Items(vec![]), Duration::ZERO);
        }
        cache.set(
            "faq:list:hi".to_string(),
            CachedValue::Items(vec![]),
            Duration::from_secs(60),
        );
        assert_eq!(cache.len(), 51);

        let sweeper = spawn_cache_sweeper(cache.clone(), Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(100)).await;
        sweeper.abort();

        assert_eq!(cache.len(), 1);
        assert!(cache.get("faq:list:hi").is_some());
    }

    #[test]
    fn test_last_write_wins() {
        let cache = MemoryCache::new();
        let ttl = Duration::from_secs(60);
        cache.set("k".to_string(), CachedValue::Text("a".to_string()), ttl);
        cache.set("k".to_string(), CachedValue::Text("b".to_string()), ttl);
        assert_eq!(cache.get("k"), Some(CachedValue::Text("b".to_string())));
    }

    #[test]
    fn test_delete_and_clear() {
        let cache = MemoryCache::new();
        let ttl = Duration::from_secs(60);
        cache.set("a".to_string(), CachedValue::Text("1".to_string()), ttl);
        cache.set("b".to_string(), CachedValue::Text("2".to_string()), ttl);
        assert!(cache.delete("a"));
        assert!(!cache.delete("a"));
        assert_eq!(cache.clear(), 1);
        assert!(cache.is_empty());
    }
}
