//! File-based cache implementation for native platforms.

use super::{CacheError, CacheResult, ImageCache};
use std::fs;
use std::path::PathBuf;

/// File-based cache for native platforms.
///
/// Stores each entry as a `.txt` file in a specified directory. Keys are
/// used as file names verbatim, so they are limited to alphanumerics, `-`
/// and `_` (which covers every key built by `image_cache_key`). Other keys
/// are rejected with [`CacheError::InvalidKey`].
pub struct FileCache {
    /// Base directory for cache entries.
    base_path: PathBuf,
}

impl FileCache {
    /// Create a new file cache with the given base directory.
    ///
    /// Creates the directory if it doesn't exist.
    pub fn new(base_path: PathBuf) -> CacheResult<Self> {
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|e| {
                CacheError::Io(format!("Failed to create cache directory: {}", e))
            })?;
        }
        Ok(Self { base_path })
    }

    /// Create a file cache in the default location.
    ///
    /// On Unix: `~/.local/share/chronocanvas/image-cache/`
    /// On Windows: `%LOCALAPPDATA%\chronocanvas\image-cache\`
    pub fn default_location() -> CacheResult<Self> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| CacheError::Unavailable("Could not determine home directory".to_string()))?;

        Self::new(base.join("chronocanvas").join("image-cache"))
    }

    /// Get the file path for a key.
    fn entry_path(&self, key: &str) -> CacheResult<PathBuf> {
        let valid = !key.is_empty() && key.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(CacheError::InvalidKey(key.to_string()));
        }
        Ok(self.base_path.join(format!("{}.txt", key)))
    }

    /// Get the base path.
    pub fn base_path(&self) -> &PathBuf {
        &self.base_path
    }
}

impl ImageCache for FileCache {
    fn put(&self, key: &str, value: &str) -> CacheResult<()> {
        let path = self.entry_path(key)?;
        fs::write(&path, value)
            .map_err(|e| CacheError::Io(format!("Failed to write {}: {}", path.display(), e)))
    }

    fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let path = self.entry_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| CacheError::Io(format!("Failed to read {}: {}", path.display(), e)))
    }

    fn remove(&self, key: &str) -> CacheResult<()> {
        let path = self.entry_path(key)?;
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                CacheError::Io(format!("Failed to delete {}: {}", path.display(), e))
            })?;
        }
        Ok(())
    }

    fn keys(&self) -> CacheResult<Vec<String>> {
        if !self.base_path.exists() {
            return Ok(vec![]);
        }

        let entries = fs::read_dir(&self.base_path)
            .map_err(|e| CacheError::Io(format!("Failed to read directory: {}", e)))?;

        let mut keys = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().map(|e| e == "txt").unwrap_or(false) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    keys.push(stem.to_string());
                }
            }
        }
        keys.sort();
        Ok(keys)
    }
}
