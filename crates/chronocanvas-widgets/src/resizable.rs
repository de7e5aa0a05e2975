//! Sidebar shell with a draggable right edge.

use egui::{pos2, vec2, CursorIcon, Id, Layout, PointerButton, Pos2, Rect, Response, Sense, Stroke, Ui, UiBuilder};
use kurbo::Point;

use chronocanvas_core::{MouseButton, PanelResizer, PointerEvent};

use crate::layout::panel_frame;
use crate::theme;

/// Width of the grab area to the right of the panel.
pub const HANDLE_WIDTH: f32 = 6.0;

/// Hosts panel content at the width tracked by a [`PanelResizer`].
pub struct ResizableSidebar<'a> {
    resizer: &'a mut PanelResizer,
    id: Id,
}

impl<'a> ResizableSidebar<'a> {
    pub fn new(id_salt: impl std::hash::Hash, resizer: &'a mut PanelResizer) -> Self {
        Self {
            resizer,
            id: Id::new(id_salt),
        }
    }

    pub fn show<R>(self, ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
        let width = self.resizer.width() as f32;
        let height = ui.available_height();
        let (rect, _) = ui.allocate_exact_size(vec2(width + HANDLE_WIDTH, height), Sense::hover());

        let content_rect = Rect::from_min_size(rect.min, vec2(width, height));
        let handle_rect = Rect::from_min_size(pos2(content_rect.right(), rect.top()), vec2(HANDLE_WIDTH, height));

        let mut child = ui.new_child(
            UiBuilder::new()
                .max_rect(content_rect)
                .layout(Layout::top_down(egui::Align::Min)),
        );
        child.set_clip_rect(content_rect);
        let inner = panel_frame()
            .show(&mut child, |ui| {
                ui.set_min_size(ui.available_size());
                add_contents(ui)
            })
            .inner;

        let response = ui.interact(handle_rect, self.id.with("resize_handle"), Sense::drag());
        let mut changed = false;
        for event in pointer_events(&response) {
            if let Some(new_width) = self.resizer.handle_pointer_event(&event) {
                log::trace!("Panel width -> {}", new_width);
                changed = true;
            }
        }
        // Drag ended without a matching release (focus lost, pointer cancelled)
        if self.resizer.is_capturing() && !response.dragged() {
            self.resizer.teardown();
        }
        if changed {
            ui.ctx().request_repaint();
        }

        let active = response.hovered() || self.resizer.is_capturing();
        if active {
            ui.ctx().set_cursor_icon(CursorIcon::ResizeHorizontal);
        }
        let line_color = if active { theme::ACCENT } else { theme::BORDER };
        let x = handle_rect.center().x;
        ui.painter().line_segment(
            [pos2(x, handle_rect.top()), pos2(x, handle_rect.bottom())],
            Stroke::new(if active { 2.0 } else { 1.0 }, line_color),
        );

        inner
    }
}

fn to_mouse_button(button: PointerButton) -> MouseButton {
    match button {
        PointerButton::Secondary => MouseButton::Right,
        PointerButton::Middle => MouseButton::Middle,
        _ => MouseButton::Left,
    }
}

fn to_point(pos: Pos2) -> Point {
    Point::new(pos.x as f64, pos.y as f64)
}

/// Translate this frame's handle interaction into pointer events.
///
/// egui reports a drag start only once the pointer has travelled past the
/// click threshold, so `Down` is placed at the press origin. Otherwise the
/// distance covered before the threshold would be lost.
fn pointer_events(response: &Response) -> Vec<PointerEvent> {
    let Some(pos) = response.interact_pointer_pos() else {
        return Vec::new();
    };
    let position = to_point(pos);
    let mut events = Vec::new();

    for button in [PointerButton::Primary, PointerButton::Secondary, PointerButton::Middle] {
        if response.drag_started_by(button) {
            let origin = response.ctx.input(|i| i.pointer.press_origin()).unwrap_or(pos);
            events.push(PointerEvent::Down {
                position: to_point(origin),
                button: to_mouse_button(button),
            });
        }
    }
    if response.dragged() {
        events.push(PointerEvent::Move { position });
    }
    for button in [PointerButton::Primary, PointerButton::Secondary, PointerButton::Middle] {
        if response.drag_stopped_by(button) {
            events.push(PointerEvent::Up {
                position,
                button: to_mouse_button(button),
            });
        }
    }
    events
}
