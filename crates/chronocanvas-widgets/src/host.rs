//! Library host: owns the panel state and applies the actions it emits.
//!
//! The host ties the pieces together for an application: the image library,
//! the drop ingestor with its cache, the sidebar resizer and the panel
//! selection. Each frame, [`LibraryHost::show`] drains finished decodes, draws
//! the sidebar and applies whatever the user did to the canvas.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;

use egui::Ui;
use thiserror::Error;

use chronocanvas_core::{
    CacheError, CanvasSink, ConfigError, DecodeOutcome, DroppedFile, ImageCache, ImageIngestor, ImageLibrary,
    IngestEvent, LibraryConfig, LibraryPanel, PanelResizer,
};

use crate::library_panel::{LibraryAction, LibraryPanelView};
use crate::resizable::ResizableSidebar;

/// Errors raised while setting up a host.
#[derive(Debug, Error)]
pub enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Image cache unavailable: {0}")]
    Cache(#[from] CacheError),
}

/// Decode outcomes waiting to be registered on the next frame.
type OutcomeQueue = Rc<RefCell<VecDeque<DecodeOutcome>>>;

/// Owns the element library state behind the sidebar.
pub struct LibraryHost<C: ImageCache> {
    config: LibraryConfig,
    images: ImageLibrary,
    panel: LibraryPanel,
    resizer: PanelResizer,
    ingestor: ImageIngestor<C>,
    finished: OutcomeQueue,
}

impl<C: ImageCache + 'static> LibraryHost<C> {
    /// Build a host from a validated config and an image cache.
    pub fn new(config: LibraryConfig, cache: Arc<C>) -> Result<Self, HostError> {
        config.validate()?;
        let images = if config.seed_sample_images {
            ImageLibrary::with_samples()
        } else {
            ImageLibrary::new()
        };
        let panel = LibraryPanel::new(&config);
        let resizer = config.panel_resizer()?;
        let ingestor = ImageIngestor::new(cache, config.cache_namespace.clone());
        log::info!(
            "Library host ready ({} images, panel {}px)",
            images.len(),
            resizer.width()
        );

        Ok(Self {
            config,
            images,
            panel,
            resizer,
            ingestor,
            finished: Rc::default(),
        })
    }

    pub fn config(&self) -> &LibraryConfig {
        &self.config
    }

    pub fn images(&self) -> &ImageLibrary {
        &self.images
    }

    pub fn images_mut(&mut self) -> &mut ImageLibrary {
        &mut self.images
    }

    pub fn panel(&self) -> &LibraryPanel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut LibraryPanel {
        &mut self.panel
    }

    pub fn resizer(&self) -> &PanelResizer {
        &self.resizer
    }

    pub fn ingestor(&self) -> &ImageIngestor<C> {
        &self.ingestor
    }

    /// Draw the sidebar and apply this frame's actions to `canvas`.
    ///
    /// Returns the ingest events of decodes that finished since the last frame.
    pub fn show(&mut self, ui: &mut Ui, canvas: &mut dyn CanvasSink) -> Vec<IngestEvent> {
        let events = self.pump();

        let panel = &mut self.panel;
        let images = &self.images;
        let actions = ResizableSidebar::new("chronocanvas_library", &mut self.resizer)
            .show(ui, |ui| LibraryPanelView::new(panel, images).show(ui));

        for action in actions {
            self.apply(action, canvas, ui.ctx());
        }
        events
    }

    /// Apply one panel action. Returns the id of an inserted element.
    pub fn apply(&mut self, action: LibraryAction, canvas: &mut dyn CanvasSink, ctx: &egui::Context) -> Option<String> {
        match action {
            LibraryAction::Insert(entry) => Some(self.panel.insert(&entry, canvas)),
            LibraryAction::DragStarted(payload) => {
                log::debug!("Library drag started ({} bytes of {})", payload.data.len(), payload.mime_type);
                None
            }
            LibraryAction::FilesDropped(files) => {
                self.start_decodes(files, ctx);
                None
            }
        }
    }

    /// Register finished decodes with the library.
    pub fn pump(&mut self) -> Vec<IngestEvent> {
        let finished: Vec<DecodeOutcome> = self.finished.borrow_mut().drain(..).collect();
        finished
            .into_iter()
            .filter_map(|outcome| self.ingestor.complete(outcome, &mut self.images))
            .collect()
    }

    /// Cancel pending decodes and release the resize capture.
    pub fn teardown(&mut self) {
        self.ingestor.cancel_all();
        self.finished.borrow_mut().clear();
        self.resizer.teardown();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn start_decodes(&mut self, files: Vec<DroppedFile>, ctx: &egui::Context) {
        for task in self.ingestor.accept_drop(files) {
            let outcome = pollster::block_on(task.run());
            self.finished.borrow_mut().push_back(outcome);
        }
        ctx.request_repaint();
    }

    #[cfg(target_arch = "wasm32")]
    fn start_decodes(&mut self, files: Vec<DroppedFile>, ctx: &egui::Context) {
        for task in self.ingestor.accept_drop(files) {
            let finished = Rc::clone(&self.finished);
            let ctx = ctx.clone();
            chronocanvas_core::ingest::spawn_decode(task, move |outcome| {
                finished.borrow_mut().push_back(outcome);
                ctx.request_repaint();
            });
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl LibraryHost<chronocanvas_core::storage::FileCache> {
    /// Host backed by the user's config file and on-disk image cache.
    pub fn from_default_config() -> Result<Self, HostError> {
        let config = LibraryConfig::load(&chronocanvas_core::config::config_file())?;
        let cache = chronocanvas_core::storage::FileCache::default_location()?;
        Self::new(config, Arc::new(cache))
    }
}

#[cfg(target_arch = "wasm32")]
impl LibraryHost<chronocanvas_core::storage::LocalStorageCache> {
    /// Host backed by the browser's localStorage.
    pub fn for_browser(config: LibraryConfig) -> Result<Self, HostError> {
        let cache = chronocanvas_core::storage::LocalStorageCache::new()?;
        Self::new(config, Arc::new(cache))
    }
}

impl<C: ImageCache> Drop for LibraryHost<C> {
    fn drop(&mut self) {
        self.ingestor.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronocanvas_core::{CanvasDocument, Category, ElementType, MemoryCache};

    const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    fn host(seed: bool) -> (LibraryHost<MemoryCache>, Arc<MemoryCache>) {
        let cache = Arc::new(MemoryCache::new());
        let config = LibraryConfig {
            seed_sample_images: seed,
            ..LibraryConfig::default()
        };
        (LibraryHost::new(config, Arc::clone(&cache)).unwrap(), cache)
    }

    fn drop_files() -> Vec<DroppedFile> {
        vec![
            DroppedFile::new("a.png", "image/png", PNG.to_vec()),
            DroppedFile::new("notes.txt", "text/plain", b"hi".to_vec()),
            DroppedFile::new("b.png", "image/png", PNG.to_vec()),
        ]
    }

    #[test]
    fn test_seeding_follows_config() {
        let (seeded, _) = host(true);
        assert_eq!(seeded.images().len(), ImageLibrary::with_samples().len());
        assert!(!seeded.images().is_empty());

        let (empty, _) = host(false);
        assert!(empty.images().is_empty());
        assert_eq!(empty.resizer().width(), empty.config().panel.initial_width);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = LibraryConfig::default();
        config.panel.min_width = 600.0;
        config.panel.max_width = 300.0;
        let result = LibraryHost::new(config, Arc::new(MemoryCache::new()));
        assert!(matches!(result, Err(HostError::Config(ConfigError::InvalidPanelBounds { .. }))));
    }

    #[test]
    fn test_insert_action_adds_to_canvas() {
        let (mut host, _) = host(false);
        let ctx = egui::Context::default();
        let mut canvas = CanvasDocument::new();

        host.panel_mut().select_category(Category::Stickers);
        let entry = host.panel().entries(host.images())[0].clone();
        let id = host.apply(LibraryAction::Insert(entry), &mut canvas, &ctx).unwrap();

        assert_eq!(canvas.len(), 1);
        assert_eq!(canvas.get(&id).unwrap().element_type(), ElementType::Sticker);
    }

    #[test]
    fn test_drag_started_leaves_canvas_alone() {
        let (mut host, _) = host(false);
        let ctx = egui::Context::default();
        let mut canvas = CanvasDocument::new();

        host.panel_mut().select_category(Category::Shapes);
        let entry = host.panel().entries(host.images())[0].clone();
        let payload = host.panel().drag_payload(&entry).unwrap();

        assert!(host.apply(LibraryAction::DragStarted(payload), &mut canvas, &ctx).is_none());
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_dropped_files_become_images() {
        let (mut host, cache) = host(false);
        let ctx = egui::Context::default();
        let mut canvas = CanvasDocument::new();

        host.apply(LibraryAction::FilesDropped(drop_files()), &mut canvas, &ctx);
        // Registered on the next pump, not during apply
        assert!(host.images().is_empty());
        assert_eq!(host.ingestor().pending_count(), 2);

        let events = host.pump();
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| matches!(e, IngestEvent::Added { cache_key: Some(_), .. })));
        assert_eq!(host.images().len(), 2);
        assert_eq!(host.images().images()[0].name, "a.png");
        assert_eq!(cache.keys().unwrap().len(), 2);
        assert!(canvas.is_empty());
        assert!(host.pump().is_empty());
    }

    #[test]
    fn test_teardown_discards_pending_decodes() {
        let (mut host, cache) = host(false);
        let ctx = egui::Context::default();
        let mut canvas = CanvasDocument::new();

        host.apply(LibraryAction::FilesDropped(drop_files()), &mut canvas, &ctx);
        host.teardown();

        assert!(host.pump().is_empty());
        assert_eq!(host.ingestor().pending_count(), 0);
        assert!(host.images().is_empty());
        assert!(cache.keys().unwrap().is_empty());
        assert!(!host.resizer().is_capturing());
    }

    #[test]
    fn test_show_renders_a_frame() {
        let (mut host, _) = host(true);
        let ctx = egui::Context::default();
        let mut canvas = CanvasDocument::new();
        let mut events = Vec::new();

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                events = host.show(ui, &mut canvas);
            });
        });

        assert!(events.is_empty());
        assert!(canvas.is_empty());
    }
}
