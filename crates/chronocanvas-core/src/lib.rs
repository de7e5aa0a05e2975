//! ChronoCanvas Core Library
//!
//! Platform-agnostic element library for the ChronoCanvas editor: static
//! catalogs, the session image store, the insertion pipeline that builds
//! canvas elements, drag-and-drop image ingestion and the panel resize
//! state machine.

pub mod canvas;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod element;
pub mod format;
pub mod images;
pub mod ingest;
pub mod input;
pub mod insert;
pub mod panel;
pub mod payload;
pub mod resize;
pub mod storage;
pub mod timeline;

pub use canvas::{CanvasDocument, CanvasSink};
pub use catalog::{ShapeKind, StickerEntry};
pub use config::{ConfigError, LibraryConfig};
pub use element::{CanvasElementRecord, ElementProperties, ElementType, LibraryElement, StickerType};
pub use images::{ImageLibrary, LibraryImage, NewImage};
pub use ingest::{DecodeOutcome, DecodeTask, DroppedFile, ImageIngestor, IngestError, IngestEvent, IngestToken};
pub use input::{MouseButton, PointerEvent};
pub use insert::{build_from_library_entry, build_from_shape, build_from_sticker};
pub use panel::{filter_by_name, Category, LibraryPanel, Named, PanelEntry};
pub use payload::{DragPayload, PayloadError, DRAG_MIME_TYPE};
pub use resize::{PanelResizer, PanelWidth, ResizeError, ResizeState};
pub use storage::{CacheError, ImageCache, MemoryCache};
pub use timeline::{AnimatableProperty, Keyframe, TimelineData};

/// Route `log` output to the browser console.
#[cfg(target_arch = "wasm32")]
pub fn init_web_logging() {
    // A logger may already be installed by the host page
    let _ = console_log::init_with_level(log::Level::Debug);
}
