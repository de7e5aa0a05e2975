//! Library entries and the canvas element records built from them.

use crate::catalog::ShapeKind;
use crate::timeline::TimelineData;
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of element that can be placed on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Image,
    Text,
    Shape,
    Sticker,
    Media,
    Audio,
    Map,
}

impl ElementType {
    /// Wire name, also used as the id prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Image => "image",
            ElementType::Text => "text",
            ElementType::Shape => "shape",
            ElementType::Sticker => "sticker",
            ElementType::Media => "media",
            ElementType::Audio => "audio",
            ElementType::Map => "map",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a sticker is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StickerType {
    #[default]
    Emoji,
    Icon,
    Badge,
}

/// Type-specific properties of an element.
///
/// The element type is the variant; each variant has its own field set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum ElementProperties {
    Image {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        src: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
    },
    Text {
        content: String,
        font_size: f64,
        font_family: String,
        color: String,
    },
    Shape {
        shape: ShapeKind,
        background_color: String,
    },
    Sticker {
        emoji: String,
        sticker_type: StickerType,
        color: String,
    },
    Media {
        src: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration: Option<f64>,
    },
    Audio {
        src: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration: Option<f64>,
    },
    Map {
        region: String,
    },
}

impl ElementProperties {
    /// The element type this variant describes.
    pub fn element_type(&self) -> ElementType {
        match self {
            ElementProperties::Image { .. } => ElementType::Image,
            ElementProperties::Text { .. } => ElementType::Text,
            ElementProperties::Shape { .. } => ElementType::Shape,
            ElementProperties::Sticker { .. } => ElementType::Sticker,
            ElementProperties::Media { .. } => ElementType::Media,
            ElementProperties::Audio { .. } => ElementType::Audio,
            ElementProperties::Map { .. } => ElementType::Map,
        }
    }
}

/// An entry of the element library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryElement {
    pub id: String,
    pub name: String,
    /// Thumbnail URI.
    pub thumbnail: String,
    pub properties: ElementProperties,
}

impl LibraryElement {
    pub fn new(id: impl Into<String>, name: impl Into<String>, thumbnail: impl Into<String>, properties: ElementProperties) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            thumbnail: thumbnail.into(),
            properties,
        }
    }

    pub fn element_type(&self) -> ElementType {
        self.properties.element_type()
    }
}

/// A fully formed element handed to the canvas.
///
/// The type tag and the type-specific fields sit at the top level next to
/// the geometry. Image records also keep the entry's properties nested
/// under `properties`, since the canvas reads `src`/`alt` from the top
/// level while other consumers read the nested copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasElementRecord {
    pub id: String,
    pub position: Point,
    pub size: Size,
    pub rotation: f64,
    pub opacity: f64,
    pub z_index: i32,
    #[serde(flatten)]
    pub data: ElementProperties,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<ElementProperties>,
    pub timeline_data: TimelineData,
}

impl CanvasElementRecord {
    pub fn element_type(&self) -> ElementType {
        self.data.element_type()
    }

    /// Top-level image source.
    pub fn src(&self) -> Option<&str> {
        match &self.data {
            ElementProperties::Image { src, .. } => src.as_deref(),
            _ => None,
        }
    }

    /// Top-level image alt text.
    pub fn alt(&self) -> Option<&str> {
        match &self.data {
            ElementProperties::Image { alt, .. } => alt.as_deref(),
            _ => None,
        }
    }
}
