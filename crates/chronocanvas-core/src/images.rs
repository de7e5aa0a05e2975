//! Session image library.
//!
//! Holds the images available for insertion, in display order. The store is
//! owned by the host and handed to the panel and the ingestion pipeline as
//! a parameter.

use crate::clock::MonotonicClock;
use crate::element::{ElementProperties, LibraryElement};
use serde::{Deserialize, Serialize};

/// Prefix of every image id.
pub const IMAGE_ID_PREFIX: &str = "image";

/// An image available in the library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryImage {
    pub id: String,
    pub name: String,
    /// URI or data URI.
    pub src: String,
    pub alt: String,
    pub thumbnail: String,
    pub is_user_uploaded: bool,
}

impl LibraryImage {
    /// Library entry used by the panel and the insertion pipeline.
    pub fn to_library_element(&self) -> LibraryElement {
        LibraryElement::new(
            self.id.clone(),
            self.name.clone(),
            self.thumbnail.clone(),
            ElementProperties::Image {
                src: Some(self.src.clone()),
                alt: Some(self.alt.clone()),
            },
        )
    }
}

/// Partial image description passed to [`ImageLibrary::add_image`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewImage {
    pub src: Option<String>,
    pub name: Option<String>,
    pub alt: Option<String>,
    pub thumbnail: Option<String>,
    pub is_user_uploaded: Option<bool>,
}

impl NewImage {
    pub fn from_src(src: impl Into<String>) -> Self {
        Self {
            src: Some(src.into()),
            ..Default::default()
        }
    }
}

/// Ordered registry of library images.
#[derive(Debug, Clone, Default)]
pub struct ImageLibrary {
    images: Vec<LibraryImage>,
    clock: MonotonicClock,
}

impl ImageLibrary {
    /// Create an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a library seeded with the built-in sample images.
    pub fn with_samples() -> Self {
        let mut library = Self::new();
        for (name, src) in SAMPLE_IMAGES {
            library.add_image(NewImage {
                src: Some(src.to_string()),
                name: Some(name.to_string()),
                alt: Some(name.to_string()),
                thumbnail: None,
                is_user_uploaded: Some(false),
            });
        }
        library
    }

    /// Add an image, filling missing fields with defaults. Returns its id.
    pub fn add_image(&mut self, image: NewImage) -> String {
        let id = format!("{}-{}", IMAGE_ID_PREFIX, self.clock.next());
        let default_name = format!("Image {}", self.images.len() + 1);
        let src = image.src.unwrap_or_default();

        let entry = LibraryImage {
            id: id.clone(),
            name: image.name.unwrap_or_else(|| default_name.clone()),
            alt: image.alt.unwrap_or(default_name),
            thumbnail: image.thumbnail.unwrap_or_else(|| src.clone()),
            src,
            is_user_uploaded: image.is_user_uploaded.unwrap_or(true),
        };
        log::debug!("Added image {} ('{}')", entry.id, entry.name);
        self.images.push(entry);
        id
    }

    /// Remove an image. Unknown ids are ignored.
    pub fn remove_image(&mut self, id: &str) {
        let before = self.images.len();
        self.images.retain(|image| image.id != id);
        if self.images.len() != before {
            log::debug!("Removed image {}", id);
        }
    }

    /// Images in display order.
    pub fn images(&self) -> &[LibraryImage] {
        &self.images
    }

    /// Look up an image by id.
    pub fn get(&self, id: &str) -> Option<&LibraryImage> {
        self.images.iter().find(|image| image.id == id)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

const SAMPLE_IMAGES: [(&str, &str); 4] = [
    ("Beach Scene", "/images/samples/beach.jpg"),
    ("Mountain", "/images/samples/mountain.jpg"),
    ("City Skyline", "/images/samples/city.jpg"),
    ("Forest", "/images/samples/forest.jpg"),
];
