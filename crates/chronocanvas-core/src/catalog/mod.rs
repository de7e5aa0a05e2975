//! Static catalogs of library content.

mod presets;
mod shapes;
mod stickers;

pub use presets::{audio_presets, map_presets, media_presets, text_presets};
pub use shapes::{path_from_segments, shapes_in, PathSegment, ShapeCategory, ShapeKind, SHAPE_CATEGORIES};
pub use stickers::{stickers_in, StickerCategory, StickerDef, StickerEntry, STICKER_CATEGORIES};
