//! In-memory caches for enrichment responses and resolved hubs.
//!
//! Both caches are moka future caches with a time-to-live and a size bound.
//! Nothing survives a restart.

use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use moka::policy::EvictionPolicy;

use crate::enrich::EnrichResponse;

/// Configuration for one cache.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl CacheConfig {
    /// Whole-request responses: 10 minutes, 256 entries.
    pub fn responses() -> Self {
        Self {
            ttl: Duration::from_secs(10 * 60),
            max_capacity: 256,
        }
    }

    /// Resolved hubs: 24 hours, 10 000 entries.
    pub fn hubs() -> Self {
        Self {
            ttl: Duration::from_secs(24 * 60 * 60),
            max_capacity: 10_000,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_max_capacity(mut self, n: u64) -> Self {
        self.max_capacity = n;
        self
    }

    /// Build an LRU moka cache from this configuration.
    pub fn build<K, V>(&self) -> MokaCache<K, V>
    where
        K: Hash + Eq + Send + Sync + 'static,
        V: Clone + Send + Sync + 'static,
    {
        MokaCache::builder()
            .time_to_live(self.ttl)
            .max_capacity(self.max_capacity)
            .eviction_policy(EvictionPolicy::lru())
            .build()
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::responses()
    }
}

/// Cache of enrichment responses keyed by request digest.
pub struct ResponseCache {
    inner: MokaCache<String, Arc<EnrichResponse>>,
}

impl ResponseCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            inner: config.build(),
        }
    }

    pub async fn get(&self, key: &str) -> Option<Arc<EnrichResponse>> {
        self.inner.get(key).await
    }

    pub async fn insert(&self, key: String, response: Arc<EnrichResponse>) {
        self.inner.insert(key, response).await;
    }

    /// Number of live entries, after applying pending evictions.
    pub async fn entry_count(&self) -> u64 {
        self.inner.run_pending_tasks().await;
        self.inner.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}
