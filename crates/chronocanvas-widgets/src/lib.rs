//! egui components for the ChronoCanvas element library.
//!
//! - **Library panel**: category tabs, search, entry grid and image drop zone
//! - **Resizable sidebar**: hosts the panel behind a draggable edge
//! - **Previews**: vector shape previews painted from kurbo outlines
//! - **Colors**: shape fill palette and swatches
//! - **Host**: owns the library state and applies panel actions

pub mod colors;
pub mod host;
pub mod layout;
pub mod library_panel;
pub mod preview;
pub mod resizable;
pub mod tabs;

pub use colors::{colors_match, palette_row, parse_css_color, parse_hex_color, to_hex, ColorSwatch, PaletteColor, SHAPE_PALETTE};
pub use host::{HostError, LibraryHost};
pub use layout::{panel_frame, section_label, separator};
pub use library_panel::{LibraryAction, LibraryPanelView};
pub use preview::{paint_shape, shape_preview};
pub use resizable::ResizableSidebar;
pub use tabs::{category_tabs, group_tabs, TabButton};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Small swatch size
    pub const SMALL: f32 = 20.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(245, 245, 245);
    /// Selected background
    pub const SELECTED_BG: Color32 = Color32::from_rgb(235, 245, 255);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
}
