//! Process-lifetime response cache

use dashmap::DashMap;
use uuid::Uuid;

/// Cache key: one entry per business per normalized prompt
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub business_id: Uuid,
    pub prompt: String,
}

impl CacheKey {
    /// Builds a key from a raw prompt, normalizing it by trimming
    pub fn new(business_id: Uuid, prompt: &str) -> Self {
        Self {
            business_id,
            prompt: prompt.trim().to_string(),
        }
    }
}

/// Concurrent map of cached generation responses
///
/// Unbounded and never evicted for the life of the process. Sharded, so
/// unrelated businesses never contend on a single lock. Two racing misses
/// may both call upstream and both write; last write wins.
#[derive(Default)]
pub struct ResponseCache {
    entries: DashMap<CacheKey, String>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &CacheKey) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    pub fn insert(&self, key: CacheKey, response: String) {
        self.entries.insert(key, response);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
