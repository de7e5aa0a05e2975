//! Drag-and-drop payload carrying an element record to the canvas.

use crate::element::CanvasElementRecord;
use thiserror::Error;

/// MIME type the record is attached under.
pub const DRAG_MIME_TYPE: &str = "application/json";

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Unsupported drag MIME type: {0}")]
    UnsupportedMimeType(String),
    #[error("Malformed element payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A serialized element ready to be attached to a native drag event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    pub mime_type: &'static str,
    pub data: String,
}

impl DragPayload {
    /// Serialize a record.
    pub fn from_record(record: &CanvasElementRecord) -> Result<Self, PayloadError> {
        Ok(Self {
            mime_type: DRAG_MIME_TYPE,
            data: serde_json::to_string(record)?,
        })
    }

    /// Parse the record back on the drop side.
    pub fn parse(mime_type: &str, data: &str) -> Result<CanvasElementRecord, PayloadError> {
        if mime_type != DRAG_MIME_TYPE {
            return Err(PayloadError::UnsupportedMimeType(mime_type.to_string()));
        }
        Ok(serde_json::from_str(data)?)
    }

    pub fn into_record(self) -> Result<CanvasElementRecord, PayloadError> {
        Self::parse(self.mime_type, &self.data)
    }
}
