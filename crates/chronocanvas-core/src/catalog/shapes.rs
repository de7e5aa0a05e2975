//! Vector shape catalog.
//!
//! Shapes are described as structured path data in a unit square and
//! scaled into any target rectangle. Nothing here produces markup.

use kurbo::{Affine, BezPath, Circle, Ellipse, Point, Rect, RoundedRect, Shape as KurboShape};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Path tolerance used when flattening curved primitives in unit space.
const UNIT_TOLERANCE: f64 = 1e-4;

/// A shape that can be inserted from the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeKind {
    Rectangle,
    RoundedRectangle,
    Circle,
    Ellipse,
    Triangle,
    Diamond,
    Pentagon,
    Hexagon,
    Octagon,
    Star,
    Heart,
    Cross,
    ArrowRight,
    ArrowLeft,
    ArrowUp,
    ArrowDown,
}

/// One segment of a unit-space outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    CurveTo(f64, f64, f64, f64, f64, f64),
    Close,
}

const HEART: &[PathSegment] = &[
    PathSegment::MoveTo(0.5, 0.9),
    PathSegment::CurveTo(0.2, 0.7, 0.0, 0.5, 0.0, 0.3),
    PathSegment::CurveTo(0.0, 0.12, 0.14, 0.0, 0.3, 0.0),
    PathSegment::CurveTo(0.4, 0.0, 0.47, 0.06, 0.5, 0.15),
    PathSegment::CurveTo(0.53, 0.06, 0.6, 0.0, 0.7, 0.0),
    PathSegment::CurveTo(0.86, 0.0, 1.0, 0.12, 1.0, 0.3),
    PathSegment::CurveTo(1.0, 0.5, 0.8, 0.7, 0.5, 0.9),
    PathSegment::Close,
];

const ARROW: &[PathSegment] = &[
    PathSegment::MoveTo(0.0, 0.35),
    PathSegment::LineTo(0.6, 0.35),
    PathSegment::LineTo(0.6, 0.15),
    PathSegment::LineTo(1.0, 0.5),
    PathSegment::LineTo(0.6, 0.85),
    PathSegment::LineTo(0.6, 0.65),
    PathSegment::LineTo(0.0, 0.65),
    PathSegment::Close,
];

const CROSS: &[PathSegment] = &[
    PathSegment::MoveTo(0.35, 0.0),
    PathSegment::LineTo(0.65, 0.0),
    PathSegment::LineTo(0.65, 0.35),
    PathSegment::LineTo(1.0, 0.35),
    PathSegment::LineTo(1.0, 0.65),
    PathSegment::LineTo(0.65, 0.65),
    PathSegment::LineTo(0.65, 1.0),
    PathSegment::LineTo(0.35, 1.0),
    PathSegment::LineTo(0.35, 0.65),
    PathSegment::LineTo(0.0, 0.65),
    PathSegment::LineTo(0.0, 0.35),
    PathSegment::LineTo(0.35, 0.35),
    PathSegment::Close,
];

const TRIANGLE: &[PathSegment] = &[
    PathSegment::MoveTo(0.5, 0.0),
    PathSegment::LineTo(1.0, 1.0),
    PathSegment::LineTo(0.0, 1.0),
    PathSegment::Close,
];

const DIAMOND: &[PathSegment] = &[
    PathSegment::MoveTo(0.5, 0.0),
    PathSegment::LineTo(1.0, 0.5),
    PathSegment::LineTo(0.5, 1.0),
    PathSegment::LineTo(0.0, 0.5),
    PathSegment::Close,
];

/// Build a path from unit-space segments.
pub fn path_from_segments(segments: &[PathSegment]) -> BezPath {
    let mut path = BezPath::new();
    for segment in segments {
        match *segment {
            PathSegment::MoveTo(x, y) => path.move_to((x, y)),
            PathSegment::LineTo(x, y) => path.line_to((x, y)),
            PathSegment::CurveTo(x1, y1, x2, y2, x, y) => path.curve_to((x1, y1), (x2, y2), (x, y)),
            PathSegment::Close => path.close_path(),
        }
    }
    path
}

/// Regular polygon (or star when `inner_ratio` is set) inscribed in the unit square.
fn unit_polygon(points: usize, inner_ratio: Option<f64>) -> BezPath {
    let center = Point::new(0.5, 0.5);
    let vertex_count = if inner_ratio.is_some() { points * 2 } else { points };
    let step = 2.0 * PI / vertex_count as f64;

    let mut path = BezPath::new();
    for i in 0..vertex_count {
        let radius = match inner_ratio {
            Some(ratio) if i % 2 == 1 => 0.5 * ratio,
            _ => 0.5,
        };
        // Start at the top
        let angle = -PI / 2.0 + step * i as f64;
        let p = Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin());
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path.close_path();
    path
}

impl ShapeKind {
    /// All shapes in catalog order.
    pub const ALL: [ShapeKind; 16] = [
        ShapeKind::Rectangle,
        ShapeKind::RoundedRectangle,
        ShapeKind::Circle,
        ShapeKind::Ellipse,
        ShapeKind::Triangle,
        ShapeKind::Diamond,
        ShapeKind::Pentagon,
        ShapeKind::Hexagon,
        ShapeKind::Octagon,
        ShapeKind::Star,
        ShapeKind::Heart,
        ShapeKind::Cross,
        ShapeKind::ArrowRight,
        ShapeKind::ArrowLeft,
        ShapeKind::ArrowUp,
        ShapeKind::ArrowDown,
    ];

    /// Wire name, also used as the id prefix of inserted shapes.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::RoundedRectangle => "roundedRectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Diamond => "diamond",
            ShapeKind::Pentagon => "pentagon",
            ShapeKind::Hexagon => "hexagon",
            ShapeKind::Octagon => "octagon",
            ShapeKind::Star => "star",
            ShapeKind::Heart => "heart",
            ShapeKind::Cross => "cross",
            ShapeKind::ArrowRight => "arrowRight",
            ShapeKind::ArrowLeft => "arrowLeft",
            ShapeKind::ArrowUp => "arrowUp",
            ShapeKind::ArrowDown => "arrowDown",
        }
    }

    /// Human-readable name shown in the library.
    pub fn display_name(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::RoundedRectangle => "Rounded Rectangle",
            ShapeKind::Circle => "Circle",
            ShapeKind::Ellipse => "Ellipse",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Diamond => "Diamond",
            ShapeKind::Pentagon => "Pentagon",
            ShapeKind::Hexagon => "Hexagon",
            ShapeKind::Octagon => "Octagon",
            ShapeKind::Star => "Star",
            ShapeKind::Heart => "Heart",
            ShapeKind::Cross => "Cross",
            ShapeKind::ArrowRight => "Arrow Right",
            ShapeKind::ArrowLeft => "Arrow Left",
            ShapeKind::ArrowUp => "Arrow Up",
            ShapeKind::ArrowDown => "Arrow Down",
        }
    }

    /// Outline in the unit square `(0,0)-(1,1)`.
    pub fn unit_outline(&self) -> BezPath {
        let unit = Rect::new(0.0, 0.0, 1.0, 1.0);
        let center = Point::new(0.5, 0.5);
        match self {
            ShapeKind::Rectangle => unit.to_path(UNIT_TOLERANCE),
            ShapeKind::RoundedRectangle => RoundedRect::from_rect(unit, 0.12).to_path(UNIT_TOLERANCE),
            ShapeKind::Circle => Circle::new(center, 0.5).to_path(UNIT_TOLERANCE),
            ShapeKind::Ellipse => Ellipse::from_rect(Rect::new(0.0, 0.2, 1.0, 0.8)).to_path(UNIT_TOLERANCE),
            ShapeKind::Triangle => path_from_segments(TRIANGLE),
            ShapeKind::Diamond => path_from_segments(DIAMOND),
            ShapeKind::Pentagon => unit_polygon(5, None),
            ShapeKind::Hexagon => unit_polygon(6, None),
            ShapeKind::Octagon => unit_polygon(8, None),
            ShapeKind::Star => unit_polygon(5, Some(0.4)),
            ShapeKind::Heart => path_from_segments(HEART),
            ShapeKind::Cross => path_from_segments(CROSS),
            ShapeKind::ArrowRight => path_from_segments(ARROW),
            ShapeKind::ArrowLeft => Affine::rotate_about(PI, center) * path_from_segments(ARROW),
            ShapeKind::ArrowUp => Affine::rotate_about(-PI / 2.0, center) * path_from_segments(ARROW),
            ShapeKind::ArrowDown => Affine::rotate_about(PI / 2.0, center) * path_from_segments(ARROW),
        }
    }

    /// Outline scaled into `bounds`.
    pub fn outline(&self, bounds: Rect) -> BezPath {
        let transform = Affine::translate((bounds.x0, bounds.y0))
            * Affine::scale_non_uniform(bounds.width(), bounds.height());
        transform * self.unit_outline()
    }
}

/// A named group of shapes.
#[derive(Debug, Clone, Copy)]
pub struct ShapeCategory {
    pub name: &'static str,
    pub shapes: &'static [ShapeKind],
}

pub const SHAPE_CATEGORIES: &[ShapeCategory] = &[
    ShapeCategory {
        name: "basic",
        shapes: &[
            ShapeKind::Rectangle,
            ShapeKind::RoundedRectangle,
            ShapeKind::Circle,
            ShapeKind::Ellipse,
            ShapeKind::Triangle,
            ShapeKind::Diamond,
        ],
    },
    ShapeCategory {
        name: "polygons",
        shapes: &[ShapeKind::Pentagon, ShapeKind::Hexagon, ShapeKind::Octagon, ShapeKind::Star],
    },
    ShapeCategory {
        name: "symbols",
        shapes: &[ShapeKind::Heart, ShapeKind::Cross],
    },
    ShapeCategory {
        name: "arrows",
        shapes: &[ShapeKind::ArrowRight, ShapeKind::ArrowLeft, ShapeKind::ArrowUp, ShapeKind::ArrowDown],
    },
];

/// Shapes in a category. Unknown categories are empty.
pub fn shapes_in(category: &str) -> &'static [ShapeKind] {
    SHAPE_CATEGORIES
        .iter()
        .find(|c| c.name == category)
        .map(|c| c.shapes)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_fits_bounds() {
        let bounds = Rect::new(10.0, 20.0, 110.0, 70.0);
        for kind in ShapeKind::ALL {
            let bbox = kind.outline(bounds).bounding_box();
            assert!(bbox.x0 >= bounds.x0 - 0.01, "{:?} left {}", kind, bbox.x0);
            assert!(bbox.y0 >= bounds.y0 - 0.01, "{:?} top {}", kind, bbox.y0);
            assert!(bbox.x1 <= bounds.x1 + 0.01, "{:?} right {}", kind, bbox.x1);
            assert!(bbox.y1 <= bounds.y1 + 0.01, "{:?} bottom {}", kind, bbox.y1);
        }
    }

    #[test]
    fn test_rectangle_fills_bounds() {
        let bounds = Rect::new(0.0, 0.0, 40.0, 30.0);
        let bbox = ShapeKind::Rectangle.outline(bounds).bounding_box();
        assert!((bbox.width() - 40.0).abs() < 1e-9);
        assert!((bbox.height() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_star_has_ten_vertices() {
        let path = ShapeKind::Star.unit_outline();
        let lines = path.segments().count();
        assert_eq!(lines, 10);
    }

    #[test]
    fn test_every_shape_in_a_category() {
        for kind in ShapeKind::ALL {
            assert!(
                SHAPE_CATEGORIES.iter().any(|c| c.shapes.contains(&kind)),
                "{:?} missing from catalog",
                kind
            );
        }
    }

    #[test]
    fn test_unknown_category_is_empty() {
        assert!(shapes_in("nope").is_empty());
        assert_eq!(shapes_in("arrows").len(), 4);
    }

    #[test]
    fn test_wire_name_matches_serde() {
        for kind in ShapeKind::ALL {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, kind.as_str());
        }
    }
}
