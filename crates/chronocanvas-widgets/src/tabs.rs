//! Category and subgroup tab strips.

use egui::{vec2, Align2, Color32, CornerRadius, CursorIcon, Sense, Ui};

use chronocanvas_core::{Category, LibraryPanel};

use crate::{sizing, theme};

/// A pill-shaped tab with a text label.
/// Uses a solid accent background when selected.
pub struct TabButton<'a> {
    label: &'a str,
    selected: bool,
    height: f32,
    font_size: f32,
}

impl<'a> TabButton<'a> {
    pub fn new(label: &'a str, selected: bool) -> Self {
        Self {
            label,
            selected,
            height: 24.0,
            font_size: 11.0,
        }
    }

    /// Use the compact style for subgroup chips.
    pub fn compact(mut self) -> Self {
        self.height = 20.0;
        self.font_size = 10.0;
        self
    }

    /// Show the tab and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let font_id = egui::FontId::proportional(self.font_size);
        let galley = ui
            .painter()
            .layout_no_wrap(self.label.to_string(), font_id.clone(), Color32::PLACEHOLDER);
        let size = vec2(galley.size().x + 16.0, self.height);

        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                theme::ACCENT
            } else if response.hovered() {
                Color32::from_gray(235)
            } else {
                Color32::from_gray(245)
            };
            let text_color = if self.selected { Color32::WHITE } else { theme::TEXT };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);
            ui.painter()
                .text(rect.center(), Align2::CENTER_CENTER, self.label, font_id, text_color);
        }

        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

/// Tabs for every library category. Switching category resets the subgroup.
pub fn category_tabs(ui: &mut Ui, panel: &mut LibraryPanel) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = vec2(4.0, 4.0);
        for category in Category::ALL {
            let selected = panel.category() == Some(category);
            if TabButton::new(category.label(), selected).show(ui) && !selected {
                log::debug!("Library category -> {}", category.as_str());
                panel.select_category(category);
            }
        }
    });
}

/// Subgroup chips for shapes and stickers, led by an "All" chip.
pub fn group_tabs(ui: &mut Ui, panel: &mut LibraryPanel) {
    let Some(category) = panel.category() else {
        return;
    };
    let groups = category.groups();
    if groups.is_empty() {
        return;
    }

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = vec2(4.0, 4.0);
        if TabButton::new("All", panel.group().is_none()).compact().show(ui) {
            panel.select_group(None);
        }
        for group in groups {
            let selected = panel.group() == Some(group);
            if TabButton::new(&group_label(group), selected).compact().show(ui) {
                panel.select_group(Some(group));
            }
        }
    });
}

/// Capitalize a catalog group key for display.
fn group_label(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
