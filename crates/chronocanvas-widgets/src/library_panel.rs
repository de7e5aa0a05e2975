//! The element library sidebar: tabs, search, entry grid and image drop zone.

use egui::{vec2, Align2, Color32, CornerRadius, CursorIcon, FontId, Rect, Sense, Stroke, StrokeKind, Ui};

use chronocanvas_core::format::ImageFormat;
use chronocanvas_core::{
    Category, DragPayload, DroppedFile, ElementType, ImageLibrary, LibraryPanel, PanelEntry,
};

use crate::colors::{palette_row, parse_css_color};
use crate::layout::{section_label, separator};
use crate::preview::paint_shape;
use crate::tabs::{category_tabs, group_tabs};
use crate::{sizing, theme};

/// Smallest tile edge before the grid drops a column.
const MIN_TILE: f32 = 72.0;
const TILE_SPACING: f32 = 6.0;
const DROP_ZONE_HEIGHT: f32 = 56.0;

/// Something the user did in the panel that the host must act on.
#[derive(Debug)]
pub enum LibraryAction {
    /// An entry was clicked; insert it into the canvas.
    Insert(PanelEntry),
    /// An entry started dragging. The payload is also attached to egui's
    /// drag-and-drop state for canvas drop targets.
    DragStarted(DragPayload),
    /// Files were dropped on the images drop zone.
    FilesDropped(Vec<DroppedFile>),
}

/// Renders a [`LibraryPanel`] and collects user actions.
pub struct LibraryPanelView<'a> {
    panel: &'a mut LibraryPanel,
    images: &'a ImageLibrary,
}

impl<'a> LibraryPanelView<'a> {
    pub fn new(panel: &'a mut LibraryPanel, images: &'a ImageLibrary) -> Self {
        Self { panel, images }
    }

    pub fn show(self, ui: &mut Ui) -> Vec<LibraryAction> {
        let mut actions = Vec::new();

        category_tabs(ui, self.panel);
        ui.add_space(4.0);
        group_tabs(ui, self.panel);
        separator(ui);

        let mut query = self.panel.query().to_string();
        let search = ui.add(
            egui::TextEdit::singleline(&mut query)
                .hint_text("Search...")
                .desired_width(f32::INFINITY),
        );
        if search.changed() {
            self.panel.set_query(query);
        }

        match self.panel.category() {
            Some(Category::Shapes) => {
                ui.add_space(4.0);
                section_label(ui, "Fill");
                if let Some(color) = palette_row(ui, self.panel.shape_color()) {
                    self.panel.set_shape_color(color);
                }
            }
            Some(Category::Images) => {
                ui.add_space(4.0);
                if let Some(files) = drop_zone(ui) {
                    actions.push(LibraryAction::FilesDropped(files));
                }
            }
            _ => {}
        }
        ui.add_space(4.0);

        let entries = self.panel.visible_entries(self.images);
        if entries.is_empty() {
            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("No elements found").color(theme::TEXT_MUTED));
            });
            return actions;
        }

        let panel: &LibraryPanel = self.panel;
        let fill = parse_css_color(panel.shape_color());
        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            let width = ui.available_width();
            let columns = grid_columns(width);
            let tile = (width - TILE_SPACING * (columns as f32 - 1.0)) / columns as f32;

            ui.spacing_mut().item_spacing = vec2(TILE_SPACING, TILE_SPACING);
            for row in entries.chunks(columns) {
                ui.horizontal(|ui| {
                    for entry in row {
                        if let Some(action) = entry_tile(ui, panel, entry, tile, fill) {
                            actions.push(action);
                        }
                    }
                });
            }
        });

        actions
    }
}

/// Number of grid columns that fit `width`.
fn grid_columns(width: f32) -> usize {
    (((width + TILE_SPACING) / (MIN_TILE + TILE_SPACING)).floor() as usize).max(1)
}

fn element_glyph(element_type: ElementType) -> &'static str {
    match element_type {
        ElementType::Image => "🖼",
        ElementType::Text => "T",
        ElementType::Shape => "⬛",
        ElementType::Sticker => "⭐",
        ElementType::Media => "🎬",
        ElementType::Audio => "🎵",
        ElementType::Map => "🗺",
    }
}

fn entry_tile(
    ui: &mut Ui,
    panel: &LibraryPanel,
    entry: &PanelEntry,
    size: f32,
    shape_fill: Color32,
) -> Option<LibraryAction> {
    let (rect, response) = ui.allocate_exact_size(vec2(size, size), Sense::click_and_drag());

    if ui.is_rect_visible(rect) {
        let bg = if response.hovered() { theme::HOVER_BG } else { Color32::WHITE };
        let radius = CornerRadius::same(sizing::CORNER_RADIUS);
        ui.painter().rect_filled(rect, radius, bg);
        ui.painter()
            .rect_stroke(rect, radius, Stroke::new(1.0, theme::BORDER), StrokeKind::Inside);

        let label_height = 14.0;
        let art = Rect::from_min_max(rect.min, rect.max - vec2(0.0, label_height)).shrink(8.0);
        match entry {
            PanelEntry::Shape(shape) => {
                paint_shape(ui, *shape, art, shape_fill, Stroke::new(1.0, Color32::from_gray(60)));
            }
            PanelEntry::Sticker(sticker) => {
                ui.painter().text(
                    art.center(),
                    Align2::CENTER_CENTER,
                    &sticker.emoji,
                    FontId::proportional(art.height() * 0.7),
                    theme::TEXT,
                );
            }
            PanelEntry::Element(element) => {
                ui.painter().text(
                    art.center(),
                    Align2::CENTER_CENTER,
                    element_glyph(element.element_type()),
                    FontId::proportional(art.height() * 0.5),
                    theme::TEXT_MUTED,
                );
            }
        }

        let name = match entry {
            PanelEntry::Element(element) => element.name.as_str(),
            PanelEntry::Sticker(sticker) => sticker.name.as_str(),
            PanelEntry::Shape(shape) => shape.display_name(),
        };
        ui.painter().with_clip_rect(rect).text(
            rect.center_bottom() - vec2(0.0, 4.0),
            Align2::CENTER_BOTTOM,
            name,
            FontId::proportional(10.0),
            theme::TEXT,
        );
    }

    if response.drag_started() {
        return match panel.drag_payload(entry) {
            Ok(payload) => {
                response.dnd_set_drag_payload(payload.clone());
                Some(LibraryAction::DragStarted(payload))
            }
            Err(e) => {
                log::warn!("Failed to build drag payload: {}", e);
                None
            }
        };
    }

    let clicked = response.clicked();
    response.on_hover_cursor(CursorIcon::Grab);
    clicked.then(|| LibraryAction::Insert(entry.clone()))
}

/// Drop zone for image files. Returns the files dropped this frame.
fn drop_zone(ui: &mut Ui) -> Option<Vec<DroppedFile>> {
    let (hovering, dropped) = ui.ctx().input(|i| (!i.raw.hovered_files.is_empty(), i.raw.dropped_files.clone()));

    let (rect, _) = ui.allocate_exact_size(vec2(ui.available_width(), DROP_ZONE_HEIGHT), Sense::hover());
    if ui.is_rect_visible(rect) {
        let (stroke, fill) = if hovering {
            (theme::ACCENT, theme::SELECTED_BG)
        } else {
            (theme::BORDER, Color32::TRANSPARENT)
        };
        let radius = CornerRadius::same(sizing::PANEL_RADIUS);
        ui.painter().rect_filled(rect, radius, fill);
        ui.painter()
            .rect_stroke(rect, radius, Stroke::new(1.0, stroke), StrokeKind::Inside);
        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            "Drop images here",
            FontId::proportional(11.0),
            theme::TEXT_MUTED,
        );
    }

    if dropped.is_empty() {
        return None;
    }
    let files: Vec<DroppedFile> = dropped.iter().filter_map(to_dropped_file).collect();
    (!files.is_empty()).then_some(files)
}

/// Convert an egui dropped file, inferring a missing media type.
fn to_dropped_file(file: &egui::DroppedFile) -> Option<DroppedFile> {
    let bytes = match (&file.bytes, &file.path) {
        (Some(bytes), _) => bytes.to_vec(),
        #[cfg(not(target_arch = "wasm32"))]
        (None, Some(path)) => {
            return match DroppedFile::from_path(path) {
                Ok(dropped) => Some(dropped),
                Err(e) => {
                    log::warn!("{}", e);
                    None
                }
            };
        }
        _ => {
            log::warn!("Dropped file '{}' carried no data", file.name);
            return None;
        }
    };

    let media_type = if file.mime.is_empty() {
        file.name
            .rsplit_once('.')
            .and_then(|(_, ext)| ImageFormat::from_extension(ext))
            .or_else(|| ImageFormat::from_magic_bytes(&bytes))
            .map(|f| f.mime_type().to_string())
            .unwrap_or_default()
    } else {
        file.mime.clone()
    };

    Some(DroppedFile::new(file.name.clone(), media_type, bytes))
}
