use chronocanvas_core::{
    CanvasDocument, CanvasSink, Category, DragPayload, DroppedFile, ImageCache, ImageIngestor, ImageLibrary,
    IngestEvent, LibraryConfig, LibraryPanel, MemoryCache, PanelEntry,
};
use std::collections::HashSet;
use std::sync::Arc;

const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00];

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn drop_two(reverse: bool) -> ImageLibrary {
    let config = LibraryConfig::default();
    let mut ingestor = ImageIngestor::new(Arc::new(MemoryCache::new()), config.cache_namespace.clone());
    let mut library = ImageLibrary::new();

    let tasks = ingestor.accept_drop(vec![
        DroppedFile::new("one.png", "image/png", PNG.to_vec()),
        DroppedFile::new("two.png", "image/png", PNG.to_vec()),
    ]);
    let mut outcomes: Vec<_> = tasks.into_iter().map(|t| pollster::block_on(t.run())).collect();
    if reverse {
        outcomes.reverse();
    }
    for outcome in outcomes {
        let event = ingestor.complete(outcome, &mut library);
        assert!(matches!(event, Some(IngestEvent::Added { .. })));
    }

    let keys = ingestor.cache().keys().unwrap();
    assert_eq!(keys.len(), 2);
    assert!(keys.iter().all(|k| k.starts_with("chronocanvas-image-")));
    library
}

#[test]
fn concurrent_drops_yield_two_distinct_images() {
    init_logging();
    for reverse in [false, true] {
        let library = drop_two(reverse);
        assert_eq!(library.len(), 2);
        let ids: HashSet<&str> = library.images().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), 2);
    }
}

#[test]
fn dropped_image_can_be_inserted_from_panel() {
    init_logging();
    let library = drop_two(false);
    let panel = LibraryPanel::new(&LibraryConfig::default());
    assert_eq!(panel.category(), Some(Category::Images));

    let entry = panel
        .visible_entries(&library)
        .into_iter()
        .find(|e| matches!(e, PanelEntry::Element(el) if el.name == "two.png"))
        .expect("dropped image listed");

    let mut canvas = CanvasDocument::new();
    let id = panel.insert(&entry, &mut canvas);
    let record = canvas.get(&id).unwrap();
    assert!(record.src().unwrap().starts_with("data:image/png;base64,"));
    assert_eq!(record.alt(), Some("two.png"));

    canvas.clear_canvas();
    assert!(canvas.is_empty());
}

#[test]
fn drag_payload_reaches_canvas() {
    init_logging();
    let library = ImageLibrary::with_samples();
    let mut panel = LibraryPanel::default();
    panel.select_category(Category::Maps);
    panel.set_query("europe");

    let entries = panel.visible_entries(&library);
    assert_eq!(entries.len(), 1);

    let payload = panel.drag_payload(&entries[0]).unwrap();
    let record = DragPayload::parse(payload.mime_type, &payload.data).unwrap();

    let mut canvas = CanvasDocument::new();
    canvas.add_element(record.clone());
    assert_eq!(canvas.get(&record.id), Some(&record));
}
