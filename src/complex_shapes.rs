//!
//! Resolving the shapes built with `begin_shape`, `vertex` and `end_shape`
//!

use super::state::*;
use super::value::*;
use super::error::*;
use super::shapes::*;

use flo_sketch_canvas::*;

///
/// The geometry that a shape resolves to
///
#[derive(Clone, PartialEq, Debug)]
pub enum ShapeGeometry {
    /// Separate point markers (for `BeginShapeMode::Points`)
    Points(Vec<(f64, f64)>),

    /// A path, which may be made up of several subpaths
    Path(Vec<Draw>)
}

///
/// Converts a list of points to a Catmull-Rom curve made of cubic bezier sections
///
/// The curve runs from the second point to the second-to-last point: the first and last points only
/// change the direction of the curve at its ends. `tightness` of 0 gives a Catmull-Rom spline and 1 gives
/// straight lines. Fewer than 4 points produce an empty path.
///
pub fn curve_path(points: &[(f64, f64)], tightness: f64) -> Vec<Draw> {
    if points.len() < 4 {
        return vec![];
    }

    let s           = 1.0 - tightness;
    let point       = |(x, y): (f64, f64)| (x as f32, y as f32);
    let mut path    = vec![Draw::Move(points[1].0 as f32, points[1].1 as f32)];

    for index in 1..(points.len()-2) {
        let (prev, current, next, after) = (points[index-1], points[index], points[index+1], points[index+2]);

        let control1 = (current.0 + (s*next.0 - s*prev.0) / 6.0, current.1 + (s*next.1 - s*prev.1) / 6.0);
        let control2 = (next.0 + (s*current.0 - s*after.0) / 6.0, next.1 + (s*current.1 - s*after.1) / 6.0);

        path.push(Draw::BezierCurve(point(next), point(control1), point(control2)));
    }

    path
}

///
/// Resolves the vertices of a shape into the geometry that should be painted
///
pub fn resolve_shape(shape: &ShapeAssembly, end_mode: EndShapeMode, curve_tightness: f64, size: SurfaceSize) -> Result<ShapeGeometry, ShapeAssemblyError> {
    let vertices = &shape.vertices;

    if vertices.is_empty() {
        return Err(ShapeAssemblyError::EmptyShape { shape_type: shape.shape_type });
    }

    let close   = end_mode == EndShapeMode::Close;
    let points  = vertices.iter()
        .map(|vertex| vertex.anchor().resolve(size))
        .collect::<Vec<_>>();

    match shape.shape_type {
        ShapeType::Bezier   => Ok(ShapeGeometry::Path(bezier_shape(vertices, close, size))),

        ShapeType::Curve    => {
            if points.len() < 4 {
                Err(ShapeAssemblyError::NotEnoughVertices { shape_type: ShapeType::Curve, required: 4, found: points.len() })
            } else {
                Ok(ShapeGeometry::Path(curve_path(&points, curve_tightness)))
            }
        }

        ShapeType::Regular  => Ok(match shape.begin_mode {
            Some(BeginShapeMode::Points)        => ShapeGeometry::Points(points),
            Some(BeginShapeMode::Lines)         => ShapeGeometry::Path(lines(&points)),
            Some(BeginShapeMode::Triangles)     => ShapeGeometry::Path(triangles(&points)),
            Some(BeginShapeMode::TriangleStrip) => ShapeGeometry::Path(triangle_strip(&points)),
            Some(BeginShapeMode::TriangleFan)   => ShapeGeometry::Path(triangle_fan(&points)),
            Some(BeginShapeMode::Quads)         => ShapeGeometry::Path(quads(&points)),
            Some(BeginShapeMode::QuadStrip)     => ShapeGeometry::Path(quad_strip(&points, close)),
            None                                => ShapeGeometry::Path(polygon_path(&points, close))
        })
    }
}

///
/// A shape containing bezier vertices is drawn as a single path through all of its vertices
///
fn bezier_shape(vertices: &[Vertex], close: bool, size: SurfaceSize) -> Vec<Draw> {
    let point       = |p: CanvasPoint| { let (x, y) = p.resolve(size); (x as f32, y as f32) };
    let (x, y)      = point(vertices[0].anchor());
    let mut path    = vec![Draw::Move(x, y)];

    for vertex in vertices.iter().skip(1) {
        match vertex {
            Vertex::Point(p)                    => { let (x, y) = point(*p); path.push(Draw::Line(x, y)); }
            Vertex::Bezier(cp1, cp2, end)       => path.push(Draw::BezierCurve(point(*end), point(*cp1), point(*cp2)))
        }
    }

    if close {
        path.push(Draw::ClosePath);
    }

    path
}

///
/// Separate line segments between pairs of points (an unpaired point at the end is ignored)
///
fn lines(points: &[(f64, f64)]) -> Vec<Draw> {
    points.chunks_exact(2)
        .flat_map(|pair| polygon_path(pair, false))
        .collect()
}

///
/// Separate triangles for each group of three points
///
fn triangles(points: &[(f64, f64)]) -> Vec<Draw> {
    points.chunks_exact(3)
        .flat_map(|triangle| polygon_path(triangle, true))
        .collect()
}

///
/// A triangle for every three consecutive points
///
fn triangle_strip(points: &[(f64, f64)]) -> Vec<Draw> {
    points.windows(3)
        .flat_map(|triangle| polygon_path(triangle, true))
        .collect()
}

///
/// Triangles that all share the first point
///
fn triangle_fan(points: &[(f64, f64)]) -> Vec<Draw> {
    if points.len() < 3 {
        return vec![];
    }

    let apex = points[0];

    points[1..].windows(2)
        .flat_map(|edge| polygon_path(&[apex, edge[0], edge[1]], true))
        .collect()
}

///
/// Separate quadrilaterals for each group of four points
///
fn quads(points: &[(f64, f64)]) -> Vec<Draw> {
    points.chunks_exact(4)
        .flat_map(|quad| polygon_path(quad, true))
        .collect()
}

///
/// A strip of quadrilaterals, where each pair of points is shared with the next quad
///
/// Each quad starting at point i is drawn in the order (i+2, i, i+1, i+3). Once there aren't enough points
/// left for another quad, the last pair is drawn as a line. Only the final subpath is closed.
///
fn quad_strip(points: &[(f64, f64)], close: bool) -> Vec<Draw> {
    if points.len() < 4 {
        return vec![];
    }

    let mut path = vec![];

    for index in (0..points.len()).step_by(2) {
        if index + 3 < points.len() {
            path.extend(polygon_path(&[points[index+2], points[index], points[index+1], points[index+3]], false));
        } else if index + 1 < points.len() {
            path.extend(polygon_path(&points[index..index+2], false));
        }
    }

    if close {
        path.push(Draw::ClosePath);
    }

    path
}

#[cfg(test)]
mod test {
    use super::*;

    fn size() -> SurfaceSize {
        SurfaceSize::new(100.0, 100.0)
    }

    fn shape(mode: Option<BeginShapeMode>, points: &[(f64, f64)]) -> ShapeAssembly {
        let mut shape   = ShapeAssembly::new(mode);
        shape.vertices  = points.iter().map(|(x, y)| Vertex::Point(CanvasPoint::absolute(*x, *y))).collect();

        shape
    }

    fn path(geometry: ShapeGeometry) -> Vec<Draw> {
        match geometry {
            ShapeGeometry::Path(path)   => path,
            other                       => panic!("Expected a path, got {:?}", other)
        }
    }

    #[test]
    fn empty_shape_is_an_error() {
        let result = resolve_shape(&shape(None, &[]), EndShapeMode::Open, 0.0, size());

        assert!(result == Err(ShapeAssemblyError::EmptyShape { shape_type: ShapeType::Regular }));
    }

    #[test]
    fn curve_needs_four_points() {
        let mut curve       = shape(None, &[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
        curve.shape_type    = ShapeType::Curve;

        let result = resolve_shape(&curve, EndShapeMode::Open, 0.0, size());
        assert!(result == Err(ShapeAssemblyError::NotEnoughVertices { shape_type: ShapeType::Curve, required: 4, found: 3 }));
    }

    #[test]
    fn open_polyline() {
        let path = path(resolve_shape(&shape(None, &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]), EndShapeMode::Open, 0.0, size()).unwrap());

        assert!(path == vec![Draw::Move(0.0, 0.0), Draw::Line(10.0, 0.0), Draw::Line(10.0, 10.0)]);
    }

    #[test]
    fn closed_polyline() {
        let path = path(resolve_shape(&shape(None, &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]), EndShapeMode::Close, 0.0, size()).unwrap());

        assert!(path.last() == Some(&Draw::ClosePath));
    }

    #[test]
    fn lines_ignore_unpaired_point() {
        let path = path(resolve_shape(&shape(Some(BeginShapeMode::Lines), &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (4.0, 0.0)]), EndShapeMode::Open, 0.0, size()).unwrap());

        assert!(path == vec![Draw::Move(0.0, 0.0), Draw::Line(1.0, 0.0), Draw::Move(2.0, 0.0), Draw::Line(3.0, 0.0)]);
    }

    #[test]
    fn triangle_strip_overlaps() {
        let path = path(resolve_shape(&shape(Some(BeginShapeMode::TriangleStrip), &[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)]), EndShapeMode::Open, 0.0, size()).unwrap());

        assert!(count_closed_subpaths(&path) == 2);
        assert!(path[4] == Draw::Move(1.0, 0.0));
    }

    #[test]
    fn quads_drop_partial_group() {
        let path = path(resolve_shape(&shape(Some(BeginShapeMode::Quads), &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (5.0, 5.0), (6.0, 5.0)]), EndShapeMode::Open, 0.0, size()).unwrap());

        assert!(count_closed_subpaths(&path) == 1);
        assert!(path.len() == 5);
    }

    #[test]
    fn points_mode_gives_markers() {
        let geometry = resolve_shape(&shape(Some(BeginShapeMode::Points), &[(3.0, 4.0), (5.0, 6.0)]), EndShapeMode::Open, 0.0, size()).unwrap();

        assert!(geometry == ShapeGeometry::Points(vec![(3.0, 4.0), (5.0, 6.0)]));
    }

    #[test]
    fn bezier_shape_is_one_path() {
        let mut shape   = shape(None, &[(0.0, 0.0)]);
        shape.shape_type = ShapeType::Bezier;
        shape.vertices.push(Vertex::Bezier(CanvasPoint::absolute(0.0, 10.0), CanvasPoint::absolute(10.0, 10.0), CanvasPoint::absolute(10.0, 0.0)));
        shape.vertices.push(Vertex::Point(CanvasPoint::absolute(5.0, -5.0)));

        let path = path(resolve_shape(&shape, EndShapeMode::Close, 0.0, size()).unwrap());

        assert!(path == vec![
            Draw::Move(0.0, 0.0),
            Draw::BezierCurve((10.0, 0.0), (0.0, 10.0), (10.0, 10.0)),
            Draw::Line(5.0, -5.0),
            Draw::ClosePath
        ]);
    }

    #[test]
    fn vertices_resolve_against_surface() {
        let mut shape   = ShapeAssembly::new(None);
        shape.vertices  = vec![Vertex::Point(CanvasPoint::relative(0.5, 0.5)), Vertex::Point(CanvasPoint::relative(1.0, 0.0))];

        let path = path(resolve_shape(&shape, EndShapeMode::Open, 0.0, SurfaceSize::new(200.0, 40.0)).unwrap());
        assert!(path == vec![Draw::Move(100.0, 20.0), Draw::Line(200.0, 0.0)]);
    }

    #[test]
    fn curve_with_full_tightness_is_straight() {
        let path = curve_path(&[(0.0, 0.0), (10.0, 0.0), (20.0, 10.0), (30.0, 0.0)], 1.0);

        assert!(path == vec![Draw::Move(10.0, 0.0), Draw::BezierCurve((20.0, 10.0), (10.0, 0.0), (20.0, 10.0))]);
    }
}
