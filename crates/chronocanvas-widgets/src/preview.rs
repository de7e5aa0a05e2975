//! Vector shape previews.
//!
//! Shape outlines come from structured kurbo paths. They are flattened to
//! polygons, triangulated by ear clipping and painted as an egui mesh, with
//! the outline stroked on top.

use chronocanvas_core::ShapeKind;
use egui::{Color32, Mesh, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2};
use kurbo::{BezPath, PathEl};

/// Flattening tolerance in screen pixels.
const FLATTEN_TOLERANCE: f64 = 0.25;

/// Flatten a path into closed polygons (one per subpath).
pub fn flatten_polygons(path: &BezPath, tolerance: f64) -> Vec<Vec<Pos2>> {
    let mut polygons = Vec::new();
    let mut current: Vec<Pos2> = Vec::new();

    kurbo::flatten(path.iter(), tolerance, |el| match el {
        PathEl::MoveTo(p) => {
            if current.len() >= 3 {
                polygons.push(std::mem::take(&mut current));
            }
            current.clear();
            current.push(Pos2::new(p.x as f32, p.y as f32));
        }
        PathEl::LineTo(p) => current.push(Pos2::new(p.x as f32, p.y as f32)),
        PathEl::ClosePath => {
            if current.len() >= 3 {
                polygons.push(std::mem::take(&mut current));
            }
            current.clear();
        }
        // flatten only emits lines
        _ => {}
    });
    if current.len() >= 3 {
        polygons.push(current);
    }

    polygons
        .into_iter()
        .map(simplify)
        .filter(|polygon| polygon.len() >= 3)
        .collect()
}

/// Remove repeated and collinear vertices, including the closing duplicate.
fn simplify(mut points: Vec<Pos2>) -> Vec<Pos2> {
    const EPSILON: f32 = 1e-4;
    loop {
        let n = points.len();
        if n < 3 {
            return points;
        }
        let redundant = (0..n).find(|&i| {
            let prev = points[(i + n - 1) % n];
            let next = points[(i + 1) % n];
            let p = points[i];
            p.distance(prev) < EPSILON || cross(prev, p, next).abs() < EPSILON * prev.distance(next).max(1.0)
        });
        match redundant {
            Some(i) => {
                points.remove(i);
            }
            None => return points,
        }
    }
}

fn signed_area(points: &[Pos2]) -> f32 {
    let mut area = 0.0;
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        area += a.x * b.y - b.x * a.y;
    }
    area / 2.0
}

fn cross(o: Pos2, a: Pos2, b: Pos2) -> f32 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

fn in_triangle(p: Pos2, a: Pos2, b: Pos2, c: Pos2) -> bool {
    let d1 = cross(a, b, p);
    let d2 = cross(b, c, p);
    let d3 = cross(c, a, p);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

/// Triangulate a simple polygon by ear clipping. Returns vertex index triples.
pub fn triangulate(points: &[Pos2]) -> Vec<[u32; 3]> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }

    let mut remaining: Vec<usize> = (0..n).collect();
    if signed_area(points) < 0.0 {
        remaining.reverse();
    }

    let mut triangles = Vec::with_capacity(n - 2);
    let mut guard = 0;
    while remaining.len() > 3 && guard < n * n {
        guard += 1;
        let len = remaining.len();
        let mut clipped = false;
        for i in 0..len {
            let prev = remaining[(i + len - 1) % len];
            let curr = remaining[i];
            let next = remaining[(i + 1) % len];
            let (a, b, c) = (points[prev], points[curr], points[next]);

            // Reflex or degenerate corner
            if cross(a, b, c) <= 0.0 {
                continue;
            }
            let contains_other = remaining
                .iter()
                .filter(|&&j| j != prev && j != curr && j != next)
                .any(|&j| in_triangle(points[j], a, b, c));
            if contains_other {
                continue;
            }

            triangles.push([prev as u32, curr as u32, next as u32]);
            remaining.remove(i);
            clipped = true;
            break;
        }
        if !clipped {
            // Self-intersecting or fully degenerate input
            break;
        }
    }
    if remaining.len() == 3 {
        triangles.push([remaining[0] as u32, remaining[1] as u32, remaining[2] as u32]);
    }
    triangles
}

/// Paint a shape outline filled with `fill` inside `rect`.
pub fn paint_shape(ui: &Ui, shape: ShapeKind, rect: Rect, fill: Color32, stroke: Stroke) {
    let bounds = kurbo::Rect::new(rect.min.x as f64, rect.min.y as f64, rect.max.x as f64, rect.max.y as f64);
    let path = shape.outline(bounds);

    for polygon in flatten_polygons(&path, FLATTEN_TOLERANCE) {
        let mut mesh = Mesh::default();
        for point in &polygon {
            mesh.colored_vertex(*point, fill);
        }
        for [a, b, c] in triangulate(&polygon) {
            mesh.add_triangle(a, b, c);
        }
        ui.painter().add(Shape::mesh(mesh));
        ui.painter().add(Shape::closed_line(polygon, stroke));
    }
}

/// A clickable shape preview tile.
pub fn shape_preview(ui: &mut Ui, shape: ShapeKind, size: Vec2, fill: Color32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());
    if ui.is_rect_visible(rect) {
        let inset = rect.shrink(size.min_elem() * 0.15);
        paint_shape(ui, shape, inset, fill, Stroke::new(1.0, Color32::from_gray(60)));
    }
    response.on_hover_text(shape.display_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area_of(points: &[Pos2], triangles: &[[u32; 3]]) -> f32 {
        triangles
            .iter()
            .map(|[a, b, c]| cross(points[*a as usize], points[*b as usize], points[*c as usize]).abs() / 2.0)
            .sum()
    }

    #[test]
    fn test_triangulate_square() {
        let square = vec![
            Pos2::new(0.0, 0.0),
            Pos2::new(10.0, 0.0),
            Pos2::new(10.0, 10.0),
            Pos2::new(0.0, 10.0),
        ];
        let triangles = triangulate(&square);
        assert_eq!(triangles.len(), 2);
        assert!((area_of(&square, &triangles) - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_triangulate_concave_matches_area() {
        // L shape, area 3
        let l_shape = vec![
            Pos2::new(0.0, 0.0),
            Pos2::new(2.0, 0.0),
            Pos2::new(2.0, 1.0),
            Pos2::new(1.0, 1.0),
            Pos2::new(1.0, 2.0),
            Pos2::new(0.0, 2.0),
        ];
        let triangles = triangulate(&l_shape);
        assert_eq!(triangles.len(), 4);
        assert!((area_of(&l_shape, &triangles) - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_triangulate_either_winding() {
        let mut square = vec![
            Pos2::new(0.0, 0.0),
            Pos2::new(4.0, 0.0),
            Pos2::new(4.0, 4.0),
            Pos2::new(0.0, 4.0),
        ];
        square.reverse();
        assert!((area_of(&square, &triangulate(&square)) - 16.0).abs() < 1e-3);
    }

    #[test]
    fn test_star_triangulation_covers_polygon() {
        let bounds = kurbo::Rect::new(0.0, 0.0, 100.0, 100.0);
        let polygons = flatten_polygons(&ShapeKind::Star.outline(bounds), 0.25);
        assert_eq!(polygons.len(), 1);

        let star = &polygons[0];
        assert_eq!(star.len(), 10);
        let triangles = triangulate(star);
        assert_eq!(triangles.len(), 8);
        assert!((area_of(star, &triangles) - signed_area(star).abs()).abs() < 0.5);
    }

    #[test]
    fn test_all_shapes_flatten() {
        let bounds = kurbo::Rect::new(0.0, 0.0, 64.0, 64.0);
        for kind in ShapeKind::ALL {
            let polygons = flatten_polygons(&kind.outline(bounds), FLATTEN_TOLERANCE);
            assert!(!polygons.is_empty(), "{:?}", kind);
            for polygon in polygons {
                assert_eq!(triangulate(&polygon).len(), polygon.len() - 2, "{:?}", kind);
            }
        }
    }
}
