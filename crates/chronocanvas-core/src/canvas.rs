//! Canvas collaborator interface and an in-memory document.

use crate::element::CanvasElementRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// The canvas/timeline engine as seen by the library.
///
/// Records are handed over by value; the library never touches them again.
pub trait CanvasSink {
    /// Add an element to the canvas.
    fn add_element(&mut self, record: CanvasElementRecord);

    /// Remove every element from the canvas.
    fn clear_canvas(&mut self);
}

/// A canvas document holding inserted elements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasDocument {
    /// Unique document identifier.
    pub id: String,
    /// Document name.
    pub name: String,
    /// All elements in the document, keyed by ID.
    pub elements: HashMap<String, CanvasElementRecord>,
    /// Z-order of elements (back to front).
    pub z_order: Vec<String>,
}

impl Default for CanvasDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: "Untitled".to_string(),
            elements: HashMap::new(),
            z_order: Vec::new(),
        }
    }

    /// Get an element by ID.
    pub fn get(&self, id: &str) -> Option<&CanvasElementRecord> {
        self.elements.get(id)
    }

    /// Elements in z-order (back to front).
    pub fn elements_ordered(&self) -> impl Iterator<Item = &CanvasElementRecord> {
        self.z_order.iter().filter_map(|id| self.elements.get(id))
    }

    /// Remove an element.
    pub fn remove(&mut self, id: &str) -> Option<CanvasElementRecord> {
        self.z_order.retain(|element_id| element_id != id);
        self.elements.remove(id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Serialize document to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize document from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl CanvasSink for CanvasDocument {
    fn add_element(&mut self, record: CanvasElementRecord) {
        let id = record.id.clone();
        if self.elements.insert(id.clone(), record).is_none() {
            self.z_order.push(id);
        }
    }

    fn clear_canvas(&mut self) {
        self.elements.clear();
        self.z_order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ShapeKind;
    use crate::insert::build_from_shape;

    #[test]
    fn test_add_and_clear() {
        let mut doc = CanvasDocument::new();
        let first = build_from_shape(ShapeKind::Circle, "#000000");
        let second = build_from_shape(ShapeKind::Heart, "#ff0000");
        let first_id = first.id.clone();
        let second_id = second.id.clone();

        doc.add_element(first);
        doc.add_element(second);
        assert_eq!(doc.len(), 2);

        let ordered: Vec<&str> = doc.elements_ordered().map(|r| r.id.as_str()).collect();
        assert_eq!(ordered, vec![first_id.as_str(), second_id.as_str()]);

        doc.clear_canvas();
        assert!(doc.is_empty());
        assert!(doc.z_order.is_empty());
    }

    #[test]
    fn test_remove() {
        let mut doc = CanvasDocument::new();
        let record = build_from_shape(ShapeKind::Star, "#000000");
        let id = record.id.clone();
        doc.add_element(record);

        assert!(doc.remove(&id).is_some());
        assert!(doc.get(&id).is_none());
        assert!(doc.z_order.is_empty());
    }

    #[test]
    fn test_json_roundtrip() {
        let mut doc = CanvasDocument::new();
        doc.add_element(build_from_shape(ShapeKind::Diamond, "#123456"));

        let json = doc.to_json().unwrap();
        let loaded = CanvasDocument::from_json(&json).unwrap();
        assert_eq!(loaded.id, doc.id);
        assert_eq!(loaded.len(), 1);
    }
}
