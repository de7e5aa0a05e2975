//! Browser localStorage cache implementation for WASM.

use super::{CacheError, CacheResult, ImageCache};
use web_sys::Storage;

/// Cache backed by `window.localStorage`.
pub struct LocalStorageCache {
    storage: Storage,
}

impl LocalStorageCache {
    /// Open the window's local storage.
    pub fn new() -> CacheResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| CacheError::Unavailable("No window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| CacheError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| CacheError::Unavailable("localStorage disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl ImageCache for LocalStorageCache {
    fn put(&self, key: &str, value: &str) -> CacheResult<()> {
        // setItem only throws when the origin's quota is exhausted
        self.storage
            .set_item(key, value)
            .map_err(|_| CacheError::QuotaExceeded(key.to_string()))
    }

    fn get(&self, key: &str) -> CacheResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| CacheError::Other(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> CacheResult<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| CacheError::Other(format!("{:?}", e)))
    }

    fn keys(&self) -> CacheResult<Vec<String>> {
        let length = self
            .storage
            .length()
            .map_err(|e| CacheError::Other(format!("{:?}", e)))?;
        let mut keys = Vec::with_capacity(length as usize);
        for i in 0..length {
            if let Ok(Some(key)) = self.storage.key(i) {
                keys.push(key);
            }
        }
        Ok(keys)
    }
}
