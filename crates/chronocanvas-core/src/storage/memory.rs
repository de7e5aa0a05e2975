//! In-memory cache implementation.

use super::{CacheError, CacheResult, ImageCache};
use std::collections::BTreeMap;
use std::sync::RwLock;

/// In-memory cache for testing and hosts without durable storage.
///
/// An optional capacity limit (in total stored bytes) makes writes fail
/// with [`CacheError::QuotaExceeded`], like a full browser store.
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<BTreeMap<String, String>>,
    capacity: Option<usize>,
}

impl MemoryCache {
    /// Create a new unbounded cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cache holding at most `bytes` of values.
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
            capacity: Some(bytes),
        }
    }
}

fn lock_error(e: impl std::fmt::Display) -> CacheError {
    CacheError::Other(format!("Lock error: {}", e))
}

impl ImageCache for MemoryCache {
    fn put(&self, key: &str, value: &str) -> CacheResult<()> {
        let mut entries = self.entries.write().map_err(lock_error)?;
        if let Some(capacity) = self.capacity {
            let used: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(_, v)| v.len())
                .sum();
            if used + value.len() > capacity {
                return Err(CacheError::QuotaExceeded(key.to_string()));
            }
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let entries = self.entries.read().map_err(lock_error)?;
        Ok(entries.get(key).cloned())
    }

    fn remove(&self, key: &str) -> CacheResult<()> {
        let mut entries = self.entries.write().map_err(lock_error)?;
        entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> CacheResult<Vec<String>> {
        let entries = self.entries.read().map_err(lock_error)?;
        Ok(entries.keys().cloned().collect())
    }
}
