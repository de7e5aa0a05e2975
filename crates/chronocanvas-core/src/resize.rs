//! Drag-to-resize state machine for the library panel.
//!
//! A pointer-down on the resize handle captures the pointer and records the
//! starting position and width. While captured, moves set the width to the
//! start width plus the horizontal delta, clamped to the panel bounds. A
//! pointer-up, or tearing the shell down, releases the capture.

use crate::input::{MouseButton, PointerEvent};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResizeError {
    #[error("Invalid panel bounds: min {min} is greater than max {max}")]
    InvalidBounds { min: f64, max: f64 },
}

/// Panel width and its bounds. Always `min <= current <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelWidth {
    current: f64,
    min: f64,
    max: f64,
}

impl PanelWidth {
    /// Create a width state. `initial` is clamped into the bounds.
    pub fn new(initial: f64, min: f64, max: f64) -> Result<Self, ResizeError> {
        if !(min <= max) {
            return Err(ResizeError::InvalidBounds { min, max });
        }
        Ok(Self {
            current: clamp_width(initial, min, max),
            min,
            max,
        })
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    fn set(&mut self, width: f64) -> f64 {
        self.current = clamp_width(width, self.min, self.max);
        self.current
    }
}

fn clamp_width(width: f64, min: f64, max: f64) -> f64 {
    if width.is_nan() { min } else { width.clamp(min, max) }
}

/// Resize interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ResizeState {
    #[default]
    Idle,
    Resizing {
        start_x: f64,
        start_width: f64,
    },
}

/// Owns the panel width and the pointer capture used while resizing.
#[derive(Debug, Clone)]
pub struct PanelResizer {
    width: PanelWidth,
    state: ResizeState,
}

impl PanelResizer {
    pub fn new(width: PanelWidth) -> Self {
        Self {
            width,
            state: ResizeState::Idle,
        }
    }

    pub fn width(&self) -> f64 {
        self.width.current()
    }

    pub fn bounds(&self) -> PanelWidth {
        self.width
    }

    pub fn state(&self) -> ResizeState {
        self.state
    }

    /// Whether move/up events are currently being listened for.
    pub fn is_capturing(&self) -> bool {
        matches!(self.state, ResizeState::Resizing { .. })
    }

    /// Pointer pressed on the resize handle.
    pub fn pointer_down(&mut self, x: f64) {
        self.state = ResizeState::Resizing {
            start_x: x,
            start_width: self.width.current(),
        };
        log::debug!("Panel resize started at x={} width={}", x, self.width.current());
    }

    /// Pointer moved. Returns the new width while resizing, `None` when idle.
    pub fn pointer_move(&mut self, x: f64) -> Option<f64> {
        match self.state {
            ResizeState::Resizing { start_x, start_width } => Some(self.width.set(start_width + (x - start_x))),
            ResizeState::Idle => None,
        }
    }

    /// Pointer released.
    pub fn pointer_up(&mut self) {
        if self.is_capturing() {
            log::debug!("Panel resize finished at width={}", self.width.current());
        }
        self.state = ResizeState::Idle;
    }

    /// Release any capture when the shell goes away.
    pub fn teardown(&mut self) {
        self.state = ResizeState::Idle;
    }

    /// Route a pointer event. Down events are assumed to target the handle.
    /// Returns the new width if it changed.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent) -> Option<f64> {
        match event {
            PointerEvent::Down { position, button: MouseButton::Left } => {
                self.pointer_down(position.x);
                None
            }
            PointerEvent::Move { position } => {
                let before = self.width.current();
                self.pointer_move(position.x).filter(|w| *w != before)
            }
            PointerEvent::Up { button: MouseButton::Left, .. } => {
                self.pointer_up();
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    fn resizer() -> PanelResizer {
        PanelResizer::new(PanelWidth::new(280.0, 200.0, 500.0).unwrap())
    }

    #[test]
    fn test_drag_clamps_and_stops() {
        let mut resizer = resizer();
        resizer.pointer_down(50.0);
        assert!(resizer.is_capturing());

        assert_eq!(resizer.pointer_move(400.0), Some(500.0));
        assert_eq!(resizer.pointer_move(-500.0), Some(200.0));

        resizer.pointer_up();
        assert_eq!(resizer.state(), ResizeState::Idle);
        assert!(!resizer.is_capturing());
        assert_eq!(resizer.pointer_move(300.0), None);
        assert_eq!(resizer.width(), 200.0);
    }

    #[test]
    fn test_drag_within_bounds() {
        let mut resizer = resizer();
        resizer.pointer_down(100.0);
        assert_eq!(resizer.pointer_move(150.0), Some(330.0));
        assert_eq!(resizer.pointer_move(80.0), Some(260.0));
    }

    #[test]
    fn test_second_gesture_starts_from_current_width() {
        let mut resizer = resizer();
        resizer.pointer_down(0.0);
        resizer.pointer_move(20.0);
        resizer.pointer_up();

        resizer.pointer_down(500.0);
        assert_eq!(resizer.state(), ResizeState::Resizing { start_x: 500.0, start_width: 300.0 });
        assert_eq!(resizer.pointer_move(510.0), Some(310.0));
    }

    #[test]
    fn test_teardown_releases_capture() {
        let mut resizer = resizer();
        resizer.pointer_down(0.0);
        resizer.teardown();
        assert!(!resizer.is_capturing());
        assert_eq!(resizer.pointer_move(100.0), None);
    }

    #[test]
    fn test_pointer_events() {
        let mut resizer = resizer();
        let down = PointerEvent::Down { position: Point::new(50.0, 10.0), button: MouseButton::Left };
        assert_eq!(resizer.handle_pointer_event(&down), None);

        let mv = PointerEvent::Move { position: Point::new(70.0, 400.0) };
        assert_eq!(resizer.handle_pointer_event(&mv), Some(300.0));
        assert_eq!(resizer.handle_pointer_event(&mv), None);

        let right_up = PointerEvent::Up { position: Point::new(70.0, 0.0), button: MouseButton::Right };
        resizer.handle_pointer_event(&right_up);
        assert!(resizer.is_capturing());

        let up = PointerEvent::Up { position: Point::new(70.0, 0.0), button: MouseButton::Left };
        resizer.handle_pointer_event(&up);
        assert!(!resizer.is_capturing());
    }

    #[test]
    fn test_invalid_bounds() {
        assert_eq!(
            PanelWidth::new(300.0, 500.0, 200.0),
            Err(ResizeError::InvalidBounds { min: 500.0, max: 200.0 })
        );
        let width = PanelWidth::new(1000.0, 200.0, 500.0).unwrap();
        assert_eq!(width.current(), 500.0);
    }
}
