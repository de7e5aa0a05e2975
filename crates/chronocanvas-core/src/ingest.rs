//! Drag-and-drop image ingestion.
//!
//! Dropped files are filtered to images and turned into decode tasks, one
//! per file, each identified by a request token. The host drives the task
//! futures on its executor and feeds the outcomes back through
//! [`ImageIngestor::complete`] in whatever order they finish. Cancelled
//! tokens are discarded on completion.

use crate::clock::MonotonicClock;
use crate::images::{ImageLibrary, NewImage};
use crate::storage::{image_cache_key, ImageCache};
use base64::{Engine, engine::general_purpose::STANDARD};
use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use thiserror::Error;

/// Boxed future for async operations (compatible with WASM).
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Ingestion errors.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Unsupported media type: {0}")]
    UnsupportedType(String),
    #[error("File is empty: {0}")]
    EmptyFile(String),
    #[error("Failed to read {name}: {reason}")]
    Read { name: String, reason: String },
}

/// A file dropped onto the library panel.
#[derive(Debug, Clone, PartialEq)]
pub struct DroppedFile {
    pub name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl DroppedFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Whether the declared media type is an image type.
    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }

    /// Read a file from disk, inferring its media type from the extension
    /// and then from its contents.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_path(path: &std::path::Path) -> Result<Self, IngestError> {
        use crate::format::ImageFormat;

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        let bytes = std::fs::read(path).map_err(|e| IngestError::Read {
            name: name.clone(),
            reason: e.to_string(),
        })?;
        let media_type = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(ImageFormat::from_extension)
            .or_else(|| ImageFormat::from_magic_bytes(&bytes))
            .map(|f| f.mime_type())
            .unwrap_or("application/octet-stream");

        Ok(Self::new(name, media_type, bytes))
    }
}

/// Encode bytes as a base64 data URI.
pub fn encode_data_uri(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", media_type, STANDARD.encode(bytes))
}

/// Identifies one decode request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IngestToken(u64);

/// Result of a decode task.
#[derive(Debug)]
pub struct DecodeOutcome {
    pub token: IngestToken,
    pub name: String,
    pub result: Result<String, IngestError>,
}

/// Pending decode of a single file.
#[derive(Debug)]
pub struct DecodeTask {
    token: IngestToken,
    file: DroppedFile,
}

impl DecodeTask {
    pub fn token(&self) -> IngestToken {
        self.token
    }

    pub fn file(&self) -> &DroppedFile {
        &self.file
    }

    /// Decode the file into a data URI.
    pub fn run(self) -> BoxFuture<'static, DecodeOutcome> {
        Box::pin(async move {
            let DecodeTask { token, file } = self;
            let result = if !file.is_image() {
                Err(IngestError::UnsupportedType(file.media_type.clone()))
            } else if file.bytes.is_empty() {
                Err(IngestError::EmptyFile(file.name.clone()))
            } else {
                Ok(encode_data_uri(&file.media_type, &file.bytes))
            };
            DecodeOutcome {
                token,
                name: file.name,
                result,
            }
        })
    }
}

/// What happened when a decode completed.
#[derive(Debug)]
pub enum IngestEvent {
    /// The image was added to the library. `cache_key` is set when the
    /// cache write succeeded.
    Added {
        token: IngestToken,
        image_id: String,
        cache_key: Option<String>,
    },
    /// The file could not be decoded.
    DecodeFailed {
        token: IngestToken,
        name: String,
        error: IngestError,
    },
}

/// Turns dropped files into library images.
pub struct ImageIngestor<C: ImageCache> {
    cache: Arc<C>,
    namespace: String,
    /// Outstanding tokens and the file names they belong to.
    pending: BTreeMap<IngestToken, String>,
    next_token: u64,
    clock: MonotonicClock,
}

impl<C: ImageCache> ImageIngestor<C> {
    /// Create an ingestor writing cache entries under `namespace`.
    pub fn new(cache: Arc<C>, namespace: impl Into<String>) -> Self {
        Self {
            cache,
            namespace: namespace.into(),
            pending: BTreeMap::new(),
            next_token: 1,
            clock: MonotonicClock::new(),
        }
    }

    /// Accept a drop. Non-image files are skipped.
    pub fn accept_drop(&mut self, files: Vec<DroppedFile>) -> Vec<DecodeTask> {
        files
            .into_iter()
            .filter(|file| {
                if !file.is_image() {
                    log::debug!("Skipping dropped file {} ({})", file.name, file.media_type);
                }
                file.is_image()
            })
            .map(|file| {
                let token = IngestToken(self.next_token);
                self.next_token += 1;
                self.pending.insert(token, file.name.clone());
                DecodeTask { token, file }
            })
            .collect()
    }

    /// Handle a finished decode.
    ///
    /// Returns `None` when the token was cancelled or is unknown.
    pub fn complete(&mut self, outcome: DecodeOutcome, library: &mut ImageLibrary) -> Option<IngestEvent> {
        if self.pending.remove(&outcome.token).is_none() {
            log::warn!("Discarding decode of {} for cancelled request", outcome.name);
            return None;
        }

        let data_uri = match outcome.result {
            Ok(uri) => uri,
            Err(error) => {
                log::warn!("Failed to decode {}: {}", outcome.name, error);
                return Some(IngestEvent::DecodeFailed {
                    token: outcome.token,
                    name: outcome.name,
                    error,
                });
            }
        };

        let key = image_cache_key(&self.namespace, self.clock.next());
        let cache_key = match self.cache.put(&key, &data_uri) {
            Ok(()) => Some(key),
            Err(e) => {
                log::warn!("Failed to cache {}: {}", outcome.name, e);
                None
            }
        };

        let image_id = library.add_image(NewImage {
            src: Some(data_uri.clone()),
            name: Some(outcome.name.clone()),
            alt: Some(outcome.name.clone()),
            thumbnail: Some(data_uri),
            is_user_uploaded: Some(true),
        });
        log::info!("Ingested {} as {}", outcome.name, image_id);

        Some(IngestEvent::Added {
            token: outcome.token,
            image_id,
            cache_key,
        })
    }

    /// Cancel one request. Returns whether it was pending.
    pub fn cancel(&mut self, token: IngestToken) -> bool {
        self.pending.remove(&token).is_some()
    }

    /// Cancel every outstanding request (teardown). Returns how many were pending.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.pending.len();
        if count > 0 {
            log::debug!("Cancelling {} pending image decodes", count);
        }
        self.pending.clear();
        count
    }

    pub fn is_pending(&self, token: IngestToken) -> bool {
        self.pending.contains_key(&token)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn cache(&self) -> &Arc<C> {
        &self.cache
    }
}

/// Run a decode task on the browser event loop and hand the outcome to `on_done`.
#[cfg(target_arch = "wasm32")]
pub fn spawn_decode(task: DecodeTask, on_done: impl FnOnce(DecodeOutcome) + 'static) {
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = task.run().await;
        on_done(outcome);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{CacheError, CacheResult, MemoryCache};

    const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    struct FailingCache;

    impl ImageCache for FailingCache {
        fn put(&self, key: &str, _value: &str) -> CacheResult<()> {
            Err(CacheError::QuotaExceeded(key.to_string()))
        }
        fn get(&self, _key: &str) -> CacheResult<Option<String>> {
            Ok(None)
        }
        fn remove(&self, _key: &str) -> CacheResult<()> {
            Ok(())
        }
        fn keys(&self) -> CacheResult<Vec<String>> {
            Ok(vec![])
        }
    }

    fn png(name: &str) -> DroppedFile {
        DroppedFile::new(name, "image/png", PNG.to_vec())
    }

    #[test]
    fn test_encode_data_uri() {
        assert_eq!(encode_data_uri("image/png", b"hi"), "data:image/png;base64,aGk=");
    }

    #[test]
    fn test_accept_drop_filters_non_images() {
        let mut ingestor = ImageIngestor::new(Arc::new(MemoryCache::new()), "test");
        let tasks = ingestor.accept_drop(vec![
            png("a.png"),
            DroppedFile::new("notes.txt", "text/plain", b"hello".to_vec()),
            DroppedFile::new("b.jpg", "image/jpeg", vec![0xFF, 0xD8, 0xFF, 0xE0]),
        ]);
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].file().name, "a.png");
        assert_eq!(tasks[1].file().name, "b.jpg");
        assert_eq!(ingestor.pending_count(), 2);
    }

    #[test]
    fn test_complete_adds_image_and_caches() {
        let cache = Arc::new(MemoryCache::new());
        let mut ingestor = ImageIngestor::new(cache.clone(), "test");
        let mut library = ImageLibrary::new();

        let task = ingestor.accept_drop(vec![png("photo.png")]).remove(0);
        let outcome = pollster::block_on(task.run());
        let event = ingestor.complete(outcome, &mut library).unwrap();

        let (image_id, cache_key) = match event {
            IngestEvent::Added { image_id, cache_key, .. } => (image_id, cache_key),
            other => panic!("unexpected event {:?}", other),
        };
        let image = library.get(&image_id).unwrap();
        assert_eq!(image.name, "photo.png");
        assert_eq!(image.alt, "photo.png");
        assert!(image.src.starts_with("data:image/png;base64,"));
        assert_eq!(image.thumbnail, image.src);
        assert!(image.is_user_uploaded);

        let key = cache_key.unwrap();
        assert!(key.starts_with("test-image-"));
        assert_eq!(cache.get(&key).unwrap().as_deref(), Some(image.src.as_str()));
        assert_eq!(ingestor.pending_count(), 0);
    }

    #[test]
    fn test_cache_failure_still_adds_image() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut ingestor = ImageIngestor::new(Arc::new(FailingCache), "test");
        let mut library = ImageLibrary::new();

        let task = ingestor.accept_drop(vec![png("photo.png")]).remove(0);
        let event = ingestor.complete(pollster::block_on(task.run()), &mut library);

        assert!(matches!(event, Some(IngestEvent::Added { cache_key: None, .. })));
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn test_empty_file_reports_decode_failure() {
        let mut ingestor = ImageIngestor::new(Arc::new(MemoryCache::new()), "test");
        let mut library = ImageLibrary::new();

        let task = ingestor.accept_drop(vec![DroppedFile::new("empty.png", "image/png", vec![])]).remove(0);
        let event = ingestor.complete(pollster::block_on(task.run()), &mut library);

        match event {
            Some(IngestEvent::DecodeFailed { name, error, .. }) => {
                assert_eq!(name, "empty.png");
                assert!(matches!(error, IngestError::EmptyFile(_)));
            }
            other => panic!("unexpected event {:?}", other),
        }
        assert!(library.is_empty());
    }

    #[test]
    fn test_cancelled_completion_discarded() {
        let mut ingestor = ImageIngestor::new(Arc::new(MemoryCache::new()), "test");
        let mut library = ImageLibrary::new();

        let mut tasks = ingestor.accept_drop(vec![png("a.png"), png("b.png")]);
        let second = tasks.pop().unwrap();
        let first = tasks.pop().unwrap();

        assert!(ingestor.cancel(first.token()));
        assert!(!ingestor.cancel(first.token()));
        assert!(ingestor.complete(pollster::block_on(first.run()), &mut library).is_none());

        assert_eq!(ingestor.cancel_all(), 1);
        assert!(ingestor.complete(pollster::block_on(second.run()), &mut library).is_none());
        assert!(library.is_empty());
        assert!(ingestor.cache().keys().unwrap().is_empty());
    }

    #[test]
    fn test_completion_order_sets_display_order() {
        let mut ingestor = ImageIngestor::new(Arc::new(MemoryCache::new()), "test");
        let mut library = ImageLibrary::new();

        let mut tasks = ingestor.accept_drop(vec![png("first.png"), png("second.png")]);
        let second = pollster::block_on(tasks.pop().unwrap().run());
        let first = pollster::block_on(tasks.pop().unwrap().run());

        ingestor.complete(second, &mut library);
        ingestor.complete(first, &mut library);

        let names: Vec<&str> = library.images().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["second.png", "first.png"]);
    }
}
