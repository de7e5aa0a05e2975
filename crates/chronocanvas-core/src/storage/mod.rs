//! Local key-value cache for ingested image data.
//!
//! Entries are data-URI strings keyed `<namespace>-image-<timestamp>`. The
//! cache is best effort: the session works without it.

mod memory;

#[cfg(not(target_arch = "wasm32"))]
mod file;

#[cfg(target_arch = "wasm32")]
mod local;

pub use memory::MemoryCache;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileCache;

#[cfg(target_arch = "wasm32")]
pub use local::LocalStorageCache;

use thiserror::Error;

/// Cache errors.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache unavailable: {0}")]
    Unavailable(String),
    #[error("Cache quota exceeded while writing {0}")]
    QuotaExceeded(String),
    #[error("Invalid cache key: {0}")]
    InvalidKey(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Cache error: {0}")]
    Other(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Build the cache key for an image ingested at `timestamp`.
pub fn image_cache_key(namespace: &str, timestamp: u64) -> String {
    format!("{}-image-{}", namespace, timestamp)
}

/// Trait for image cache backends.
///
/// Note: On native platforms, implementations must be Send + Sync.
/// On WASM, these bounds are relaxed since it's single-threaded.
#[cfg(not(target_arch = "wasm32"))]
pub trait ImageCache: Send + Sync {
    /// Store a value, replacing any previous one.
    fn put(&self, key: &str, value: &str) -> CacheResult<()>;

    /// Read a value.
    fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Remove a value. Missing keys are not an error.
    fn remove(&self, key: &str) -> CacheResult<()>;

    /// All keys currently stored.
    fn keys(&self) -> CacheResult<Vec<String>>;
}

/// Trait for image cache backends (WASM version without Send + Sync).
#[cfg(target_arch = "wasm32")]
pub trait ImageCache {
    /// Store a value, replacing any previous one.
    fn put(&self, key: &str, value: &str) -> CacheResult<()>;

    /// Read a value.
    fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Remove a value. Missing keys are not an error.
    fn remove(&self, key: &str) -> CacheResult<()>;

    /// All keys currently stored.
    fn keys(&self) -> CacheResult<Vec<String>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_cache_key() {
        assert_eq!(image_cache_key("chronocanvas", 1700000000000), "chronocanvas-image-1700000000000");
    }
}
