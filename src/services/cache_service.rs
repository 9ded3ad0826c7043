use std::time::{Duration, Instant};

use dashmap::DashMap;
use serde_json::Value;

/// Process-wide get/set cache for JSON-shaped responses with per-entry
/// expiration. Expired entries read as misses and are evicted lazily on
/// the next lookup.
pub struct CacheService {
    entries: DashMap<String, CacheEntry>,
}

struct CacheEntry {
    value: Value,
    expires_at: Instant,
}

impl CacheService {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Returns the cached value, or None on miss or expiry.
    pub fn get(&self, key: &str) -> Option<Value> {
        let entry = self.entries.get(key)?;
        if Instant::now() >= entry.expires_at {
            // The guard must be released before removal to avoid deadlocking
            // on the entry's shard.
            drop(entry);
            self.entries.remove(key);
            return None;
        }
        Some(entry.value.clone())
    }

    pub fn set(&self, key: &str, value: Value, ttl: Duration) {
        self.entries.insert(
            key.to_owned(),
            CacheEntry {
                value,
                expires_at: Instant::now() + ttl,
            },
        );
    }
}

impl Default for CacheService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_then_get_round_trips() {
        let cache = CacheService::new();
        let value = json!({"id": 3, "tags": ["cat", "dog"], "confidence": 72.5});

        cache.set("some_key", value.clone(), Duration::from_secs(60));

        assert_eq!(cache.get("some_key"), Some(value));
    }

    #[test]
    fn test_absent_key_is_a_miss() {
        let cache = CacheService::new();
        assert_eq!(cache.get("never_set"), None);
    }

    #[test]
    fn test_expired_entry_reads_as_miss() {
        let cache = CacheService::new();
        cache.set("ephemeral", json!("value"), Duration::ZERO);

        assert_eq!(cache.get("ephemeral"), None);
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let cache = CacheService::new();
        cache.set("key", json!(1), Duration::from_secs(60));
        cache.set("key", json!(2), Duration::from_secs(60));

        assert_eq!(cache.get("key"), Some(json!(2)));
    }
}
