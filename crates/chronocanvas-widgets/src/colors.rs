//! Shape fill palette and color swatches.

use egui::{vec2, Color32, CursorIcon, Rect, Sense, Stroke, Ui};

use crate::{sizing, theme};

/// A named palette color.
#[derive(Clone, Copy, Debug)]
pub struct PaletteColor {
    pub name: &'static str,
    pub color: Color32,
}

impl PaletteColor {
    pub const fn new(name: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self {
            name,
            color: Color32::from_rgb(r, g, b),
        }
    }

    /// CSS hex string for this color.
    pub fn hex(&self) -> String {
        to_hex(self.color)
    }
}

// Tailwind 500 shades
pub const SHAPE_PALETTE: &[PaletteColor] = &[
    PaletteColor::new("Blue", 59, 130, 246),
    PaletteColor::new("Red", 239, 68, 68),
    PaletteColor::new("Orange", 249, 115, 22),
    PaletteColor::new("Amber", 245, 158, 11),
    PaletteColor::new("Green", 34, 197, 94),
    PaletteColor::new("Teal", 20, 184, 166),
    PaletteColor::new("Indigo", 99, 102, 241),
    PaletteColor::new("Purple", 168, 85, 247),
    PaletteColor::new("Pink", 236, 72, 153),
    PaletteColor::new("Slate", 100, 116, 139),
];

/// A clickable circular color swatch.
pub struct ColorSwatch<'a> {
    color: Color32,
    tooltip: &'a str,
    selected: bool,
    size: f32,
}

impl<'a> ColorSwatch<'a> {
    pub fn new(color: Color32, tooltip: &'a str) -> Self {
        Self {
            color,
            tooltip,
            selected: false,
            size: sizing::SMALL,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Show the swatch and return (clicked, rect).
    pub fn show(self, ui: &mut Ui) -> (bool, Rect) {
        let (rect, response) = ui.allocate_exact_size(vec2(self.size, self.size), Sense::click());

        if ui.is_rect_visible(rect) {
            let center = rect.center();
            let radius = rect.width().min(rect.height()) / 2.0;
            ui.painter().circle_filled(center, radius, self.color);

            if self.selected {
                // Inner offset ring
                ui.painter()
                    .circle_stroke(center, radius - 3.0, Stroke::new(2.0, Color32::WHITE));
            } else if response.hovered() {
                ui.painter()
                    .circle_stroke(center, radius, Stroke::new(1.0, theme::BORDER));
            }
        }

        let clicked = response.clicked();
        response
            .on_hover_text(self.tooltip)
            .on_hover_cursor(CursorIcon::PointingHand);
        (clicked, rect)
    }
}

/// Row of palette swatches. Returns the hex string of a newly picked color.
pub fn palette_row(ui: &mut Ui, current: &str) -> Option<String> {
    let current = parse_hex_color(current);
    let mut picked = None;
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = vec2(4.0, 4.0);
        for entry in SHAPE_PALETTE {
            let selected = current.is_some_and(|c| colors_match(c, entry.color));
            let (clicked, _) = ColorSwatch::new(entry.color, entry.name).selected(selected).show(ui);
            if clicked && !selected {
                picked = Some(entry.hex());
            }
        }
    });
    picked
}

/// Check if two colors match, ignoring alpha.
pub fn colors_match(a: Color32, b: Color32) -> bool {
    a.r() == b.r() && a.g() == b.g() && a.b() == b.b()
}

/// Parse a CSS hex color (`#rgb` or `#rrggbb`).
pub fn parse_hex_color(color: &str) -> Option<Color32> {
    let hex = color.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let r = channel(&hex[0..1])?;
            let g = channel(&hex[1..2])?;
            let b = channel(&hex[2..3])?;
            Some(Color32::from_rgb(r * 17, g * 17, b * 17))
        }
        6 => Some(Color32::from_rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}

/// Parse a CSS hex color, falling back to mid gray.
pub fn parse_css_color(color: &str) -> Color32 {
    parse_hex_color(color).unwrap_or(Color32::from_rgb(128, 128, 128))
}

/// Format a color as a lowercase `#rrggbb` string.
pub fn to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}
