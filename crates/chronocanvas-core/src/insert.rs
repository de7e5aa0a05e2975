//! Conversion of library entries into canvas element records.
//!
//! These functions are pure apart from id generation: the store and the
//! canvas are never touched here.

use crate::catalog::{ShapeKind, StickerEntry};
use crate::element::{CanvasElementRecord, ElementProperties, ElementType, LibraryElement};
use crate::timeline::TimelineData;
use kurbo::{Point, Size};
use uuid::Uuid;

/// Where new elements land on the canvas.
pub const DEFAULT_POSITION: Point = Point::new(100.0, 100.0);
/// Size of elements inserted from generic library entries.
pub const DEFAULT_ELEMENT_SIZE: Size = Size::new(200.0, 200.0);
/// Size of inserted stickers and shapes.
pub const DEFAULT_SMALL_SIZE: Size = Size::new(100.0, 100.0);
/// Sticker color when none is given.
pub const DEFAULT_STICKER_COLOR: &str = "#000000";

/// Generate a fresh element id with the given prefix.
pub fn generate_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}

fn base_record(id: String, position: Point, size: Size, data: ElementProperties) -> CanvasElementRecord {
    CanvasElementRecord {
        id,
        position,
        size,
        rotation: 0.0,
        opacity: 1.0,
        z_index: 1,
        data,
        properties: None,
        timeline_data: TimelineData::default(),
    }
}

/// Build a canvas element from a library entry.
///
/// The entry's properties are spread over the record. Images with a source
/// get `src`/`alt` at the top level (alt falling back to the entry name)
/// and keep the original properties nested.
pub fn build_from_library_entry(entry: &LibraryElement) -> CanvasElementRecord {
    let element_type = entry.element_type();
    let mut record = base_record(
        generate_id(element_type.as_str()),
        DEFAULT_POSITION,
        DEFAULT_ELEMENT_SIZE,
        entry.properties.clone(),
    );

    if let ElementProperties::Image { src: Some(src), alt } = &entry.properties {
        record.data = ElementProperties::Image {
            src: Some(src.clone()),
            alt: Some(alt.clone().unwrap_or_else(|| entry.name.clone())),
        };
        record.properties = Some(entry.properties.clone());
    }

    log::debug!("Built {} element {} from '{}'", element_type, record.id, entry.name);
    record
}

/// Build a canvas element from a sticker.
pub fn build_from_sticker(sticker: &StickerEntry) -> CanvasElementRecord {
    let position = Point::new(
        sticker.x.unwrap_or(DEFAULT_POSITION.x),
        sticker.y.unwrap_or(DEFAULT_POSITION.y),
    );
    let size = Size::new(
        sticker.width.unwrap_or(DEFAULT_SMALL_SIZE.width),
        sticker.height.unwrap_or(DEFAULT_SMALL_SIZE.height),
    );
    let properties = ElementProperties::Sticker {
        emoji: sticker.emoji.clone(),
        sticker_type: sticker.sticker_type.unwrap_or_default(),
        color: sticker
            .color
            .clone()
            .unwrap_or_else(|| DEFAULT_STICKER_COLOR.to_string()),
    };

    let mut record = base_record(
        generate_id(ElementType::Sticker.as_str()),
        position,
        size,
        properties,
    );
    record.rotation = sticker.rotation.unwrap_or(0.0);
    record.opacity = sticker.opacity.unwrap_or(1.0);
    record.z_index = sticker.z_index.unwrap_or(1);

    log::debug!("Built sticker element {} ({})", record.id, sticker.name);
    record
}

/// Build a canvas element for a catalog shape filled with `color`.
pub fn build_from_shape(shape: ShapeKind, color: &str) -> CanvasElementRecord {
    let record = base_record(
        generate_id(shape.as_str()),
        DEFAULT_POSITION,
        DEFAULT_SMALL_SIZE,
        ElementProperties::Shape {
            shape,
            background_color: color.to_string(),
        },
    );
    log::debug!("Built shape element {}", record.id);
    record
}
