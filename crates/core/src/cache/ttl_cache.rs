use std::sync::Arc;

use chrono::Duration;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{CacheEntry, CacheLookup};
use crate::store::KeyValueStore;
use crate::utils::Clock;

/// Category-keyed cache with a fixed time-to-live.
///
/// Every failure of the underlying store degrades to a miss: reads that fail
/// return nothing, writes that fail are logged and dropped. The cache never
/// serves data it could not verify as fresh.
pub struct TtlCache {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    namespace: String,
    ttl: Duration,
}

impl TtlCache {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        namespace: impl Into<String>,
        ttl: Duration,
    ) -> Self {
        Self {
            store,
            clock,
            namespace: namespace.into(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Store key for a category, e.g. `ipo_upcoming`.
    pub fn key_for(&self, category: &str) -> String {
        format!("{}_{}", self.namespace, category)
    }

    /// The cached payload when present and fresh.
    pub fn get<T: DeserializeOwned>(&self, category: &str) -> Option<T> {
        self.lookup(category).into_fresh()
    }

    /// Like [`get`](Self::get) but reports why nothing was served.
    pub fn lookup<T: DeserializeOwned>(&self, category: &str) -> CacheLookup<T> {
        let key = self.key_for(category);

        let raw = match self.store.read(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return CacheLookup::Missing,
            Err(e) => {
                warn!("Cache read error for {}: {}", key, e);
                return CacheLookup::Missing;
            }
        };

        let entry: CacheEntry<T> = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Discarding malformed cache entry {}: {}", key, e);
                self.evict(&key);
                return CacheLookup::Malformed;
            }
        };

        if entry.is_fresh(self.clock.now_millis(), self.ttl) {
            debug!("Using cached data for {}", key);
            CacheLookup::Fresh(entry.data)
        } else {
            debug!("Cache entry {} expired", key);
            self.evict(&key);
            CacheLookup::Expired
        }
    }

    /// Create or overwrite the entry for `category`, stamped with the current time.
    pub fn put<T: Serialize>(&self, category: &str, payload: &T) {
        let key = self.key_for(category);
        let entry = CacheEntry::new(payload, self.clock.now_millis());

        let raw = match serde_json::to_string(&entry) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Cache serialization error for {}: {}", key, e);
                return;
            }
        };

        match self.store.write(&key, &raw) {
            Ok(()) => debug!("Cached data for {}", key),
            Err(e) => warn!("Cache write error for {}: {}", key, e),
        }
    }

    /// Drop the entry for `category` regardless of age. No-op when absent.
    pub fn invalidate(&self, category: &str) {
        let key = self.key_for(category);
        self.evict(&key);
    }

    fn evict(&self, key: &str) {
        if let Err(e) = self.store.remove(key) {
            warn!("Cache eviction error for {}: {}", key, e);
        }
    }
}
