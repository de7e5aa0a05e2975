//! Library panel state: category selection, search and insertion.

use crate::canvas::CanvasSink;
use crate::catalog::{
    audio_presets, map_presets, media_presets, shapes_in, stickers_in, text_presets, ShapeKind, StickerEntry,
    SHAPE_CATEGORIES, STICKER_CATEGORIES,
};
use crate::config::LibraryConfig;
use crate::element::{CanvasElementRecord, LibraryElement};
use crate::images::{ImageLibrary, LibraryImage};
use crate::insert::{build_from_library_entry, build_from_shape, build_from_sticker};
use crate::payload::{DragPayload, PayloadError};

/// Top-level library category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Images,
    Text,
    Shapes,
    Stickers,
    Media,
    Audio,
    Maps,
}

impl Category {
    /// All categories in tab order.
    pub const ALL: [Category; 7] = [
        Category::Images,
        Category::Text,
        Category::Shapes,
        Category::Stickers,
        Category::Media,
        Category::Audio,
        Category::Maps,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Images => "images",
            Category::Text => "text",
            Category::Shapes => "shapes",
            Category::Stickers => "stickers",
            Category::Media => "media",
            Category::Audio => "audio",
            Category::Maps => "maps",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Images => "Images",
            Category::Text => "Text",
            Category::Shapes => "Shapes",
            Category::Stickers => "Stickers",
            Category::Media => "Media",
            Category::Audio => "Audio",
            Category::Maps => "Maps",
        }
    }

    /// Look up a category by its key.
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == key)
    }

    /// Subgroup names, for categories backed by grouped catalogs.
    pub fn groups(&self) -> Vec<&'static str> {
        match self {
            Category::Shapes => SHAPE_CATEGORIES.iter().map(|c| c.name).collect(),
            Category::Stickers => STICKER_CATEGORIES.iter().map(|c| c.name).collect(),
            _ => Vec::new(),
        }
    }
}

/// Anything listed by name in the panel.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for LibraryElement {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for LibraryImage {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for StickerEntry {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Case-insensitive substring match. An empty query matches everything.
pub fn matches_query(name: &str, query: &str) -> bool {
    query.is_empty() || name.to_lowercase().contains(&query.to_lowercase())
}

/// Items whose name contains `query`, in their original order.
pub fn filter_by_name<'a, T: Named>(query: &str, items: &'a [T]) -> Vec<&'a T> {
    items.iter().filter(|item| matches_query(item.name(), query)).collect()
}

/// An entry displayed in the panel grid.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelEntry {
    Element(LibraryElement),
    Sticker(StickerEntry),
    Shape(ShapeKind),
}

impl Named for PanelEntry {
    fn name(&self) -> &str {
        match self {
            PanelEntry::Element(element) => &element.name,
            PanelEntry::Sticker(sticker) => &sticker.name,
            PanelEntry::Shape(shape) => shape.display_name(),
        }
    }
}

/// State of the library panel.
#[derive(Debug, Clone)]
pub struct LibraryPanel {
    /// `None` after selecting an unknown category key.
    category: Option<Category>,
    /// Subgroup within shapes or stickers; `None` lists every group.
    group: Option<String>,
    query: String,
    shape_color: String,
}

impl Default for LibraryPanel {
    fn default() -> Self {
        Self::new(&LibraryConfig::default())
    }
}

impl LibraryPanel {
    pub fn new(config: &LibraryConfig) -> Self {
        Self {
            category: Some(Category::Images),
            group: None,
            query: String::new(),
            shape_color: config.default_shape_color.clone(),
        }
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    /// Switch category. Clears the subgroup.
    pub fn select_category(&mut self, category: Category) {
        self.category = Some(category);
        self.group = None;
    }

    /// Switch category by key. Unknown keys select nothing.
    pub fn select_category_by_key(&mut self, key: &str) {
        self.category = Category::parse(key);
        self.group = None;
        if self.category.is_none() {
            log::debug!("Unknown library category '{}'", key);
        }
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn select_group(&mut self, group: Option<&str>) {
        self.group = group.map(str::to_string);
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn shape_color(&self) -> &str {
        &self.shape_color
    }

    pub fn set_shape_color(&mut self, color: impl Into<String>) {
        self.shape_color = color.into();
    }

    /// Every entry of the active category, unfiltered.
    pub fn entries(&self, images: &ImageLibrary) -> Vec<PanelEntry> {
        let Some(category) = self.category else {
            return Vec::new();
        };
        match category {
            Category::Images => images
                .images()
                .iter()
                .map(|image| PanelEntry::Element(image.to_library_element()))
                .collect(),
            Category::Text => text_presets().into_iter().map(PanelEntry::Element).collect(),
            Category::Media => media_presets().into_iter().map(PanelEntry::Element).collect(),
            Category::Audio => audio_presets().into_iter().map(PanelEntry::Element).collect(),
            Category::Maps => map_presets().into_iter().map(PanelEntry::Element).collect(),
            Category::Shapes => self
                .active_groups(category)
                .into_iter()
                .flat_map(shapes_in)
                .map(|shape| PanelEntry::Shape(*shape))
                .collect(),
            Category::Stickers => self
                .active_groups(category)
                .into_iter()
                .flat_map(|group| stickers_in(group).iter().map(move |s| PanelEntry::Sticker(s.to_entry(group))))
                .collect(),
        }
    }

    fn active_groups(&self, category: Category) -> Vec<&'static str> {
        let groups = category.groups();
        match &self.group {
            Some(selected) => groups.into_iter().filter(|g| *g == selected.as_str()).collect(),
            None => groups,
        }
    }

    /// Entries of the active category matching the search query.
    pub fn visible_entries(&self, images: &ImageLibrary) -> Vec<PanelEntry> {
        let mut entries = self.entries(images);
        entries.retain(|entry| matches_query(entry.name(), &self.query));
        entries
    }

    /// Build the canvas element for an entry.
    pub fn build_record(&self, entry: &PanelEntry) -> CanvasElementRecord {
        match entry {
            PanelEntry::Element(element) => build_from_library_entry(element),
            PanelEntry::Sticker(sticker) => build_from_sticker(sticker),
            PanelEntry::Shape(shape) => build_from_shape(*shape, &self.shape_color),
        }
    }

    /// Insert an entry into the canvas. Returns the new element id.
    pub fn insert(&self, entry: &PanelEntry, canvas: &mut dyn CanvasSink) -> String {
        let record = self.build_record(entry);
        let id = record.id.clone();
        canvas.add_element(record);
        id
    }

    /// Payload for dragging an entry onto the canvas.
    pub fn drag_payload(&self, entry: &PanelEntry) -> Result<DragPayload, PayloadError> {
        DragPayload::from_record(&self.build_record(entry))
    }
}
