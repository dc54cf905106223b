//! In-memory response cache with a single fixed TTL

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::time::Instant;

use super::CacheTtl;

struct CacheEntry {
    value: serde_json::Value,
    inserted_at: Instant,
}

/// Statistics about cache state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub total_entries: usize,
    pub valid_entries: usize,
    pub expired_entries: usize,
}

/// Process-lifetime response cache.
///
/// An entry is valid while `now - inserted_at < ttl`. Expired entries read as
/// misses but stay in the map until overwritten or `invalidate_all`.
pub struct ResponseCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(CacheTtl::RESPONSES)
    }
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Get a cached value if present and fresh
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = {
            let entries = self.entries();
            let entry = entries.get(key)?;
            if entry.inserted_at.elapsed() >= self.ttl {
                log::debug!("Cache expired: {}", key);
                return None;
            }
            entry.value.clone()
        };

        match serde_json::from_value(value) {
            Ok(data) => {
                log::debug!("Cache hit: {}", key);
                Some(data)
            }
            Err(e) => {
                log::debug!("Cache entry {} has unexpected shape: {}", key, e);
                None
            }
        }
    }

    /// Store a value, replacing any previous entry under the same key
    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_value(value) {
            Ok(value) => {
                self.entries().insert(
                    key.to_string(),
                    CacheEntry {
                        value,
                        inserted_at: Instant::now(),
                    },
                );
            }
            Err(e) => log::warn!("Failed to cache {}: {}", key, e),
        }
    }

    /// Drop every entry. Returns how many were removed.
    pub fn invalidate_all(&self) -> usize {
        let mut entries = self.entries();
        let count = entries.len();
        entries.clear();
        count
    }

    pub fn stats(&self) -> CacheStats {
        let entries = self.entries();
        let valid_entries = entries
            .values()
            .filter(|e| e.inserted_at.elapsed() < self.ttl)
            .count();

        CacheStats {
            total_entries: entries.len(),
            valid_entries,
            expired_entries: entries.len() - valid_entries,
        }
    }
}
