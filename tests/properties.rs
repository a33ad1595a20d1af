#[macro_use]
extern crate flo_sketch;

use flo_sketch::*;

fn size() -> SurfaceSize {
    SurfaceSize::new(200.0, 100.0)
}

fn render(content: &Content) -> RecordingSurface {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut surface = RecordingSurface::new();
    let mut values  = GameValues::default();

    evaluate_frame(content, &mut values, &mut surface, size()).unwrap();

    surface
}

///
/// Splits a path into the points of each of its subpaths
///
fn subpaths(path: &[Draw]) -> Vec<Vec<(f32, f32)>> {
    let mut subpaths = vec![];

    for element in path.iter() {
        match element {
            Draw::Move(x, y)    => subpaths.push(vec![(*x, *y)]),
            Draw::Line(x, y)    => { if let Some(last) = subpaths.last_mut() { last.push((*x, *y)); } }
            _                   => { }
        }
    }

    subpaths
}

fn filled_path(surface: &RecordingSurface) -> Vec<Draw> {
    surface.painted_paths().into_iter()
        .filter(|painted| match painted.operation { PaintOperation::Fill(_) => true, _ => false })
        .map(|painted| painted.path)
        .next()
        .unwrap()
}

#[test]
fn resolve_combines_absolute_and_relative_parts() {
    let first   = CanvasValue::new(3.0, 0.25);
    let second  = CanvasValue::new(-7.0, 0.5);

    assert!(first.resolve(200.0) == 53.0);
    assert!((first + second).resolve(200.0) == first.resolve(200.0) + second.resolve(200.0));
}

#[test]
fn channels_round_trip() {
    let channels = decompose(color_rgba(12.0, 250.0, 99.0, 128.0));

    assert!((channels.red - 12.0).abs() <= 1.0/255.0);
    assert!((channels.green - 250.0).abs() <= 1.0/255.0);
    assert!((channels.blue - 99.0).abs() <= 1.0/255.0);
    assert!((channels.alpha - 128.0).abs() <= 1.0/255.0);
}

#[test]
fn lerp_color_hits_both_ends() {
    let from    = color_rgba(10.0, 20.0, 30.0, 40.0);
    let to      = color(200.0, 100.0, 0.0);
    let close   = |a: Color, b: Color| {
        let (a, b) = (decompose(a), decompose(b));
        (a.red - b.red).abs() < 0.01 && (a.green - b.green).abs() < 0.01 && (a.blue - b.blue).abs() < 0.01 && (a.alpha - b.alpha).abs() < 0.01
    };

    assert!(close(lerp_color(from, to, 0.0), from));
    assert!(close(lerp_color(from, to, 1.0), to));
}

#[test]
fn multiply_uses_fixed_point_arithmetic() {
    let gray        = color(200.0, 200.0, 200.0);
    let multiplied  = blend_color(gray, gray, BlendColorMode::Multiply);

    assert!(red(multiplied).round() == 156.0);
    assert!(green(multiplied).round() == 156.0);
    assert!(blue(multiplied).round() == 156.0);
}

#[test]
fn triangles_draw_one_closed_triangle() {
    let surface = render(&content![
        begin_shape_with(BeginShapeMode::Triangles),
        vertex(0.0, 0.0),
        vertex(10.0, 0.0),
        vertex(0.0, 10.0),
        end_shape()
    ]);

    let path = filled_path(&surface);
    assert!(subpaths(&path) == vec![vec![(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]]);
    assert!(count_closed_subpaths(&path) == 1);
}

#[test]
fn triangles_ignore_a_stray_vertex() {
    let surface = render(&content![
        begin_shape_with(BeginShapeMode::Triangles),
        vertex(0.0, 0.0),
        vertex(10.0, 0.0),
        vertex(0.0, 10.0),
        vertex(50.0, 50.0),
        end_shape()
    ]);

    let path = filled_path(&surface);
    assert!(subpaths(&path) == vec![vec![(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]]);
}

#[test]
fn triangle_fan_shares_the_first_vertex() {
    let (a, b, c, d) = ((0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0));

    let surface = render(&content![
        begin_shape_with(BeginShapeMode::TriangleFan),
        vertex(a.0, a.1),
        vertex(b.0, b.1),
        vertex(c.0, c.1),
        vertex(d.0, d.1),
        end_shape()
    ]);

    assert!(subpaths(&filled_path(&surface)) == vec![vec![a, b, c], vec![a, c, d]]);
}

#[test]
fn quad_strip_orders_the_first_quad() {
    let points = [(0.0, 0.0), (0.0, 10.0), (10.0, 0.0), (10.0, 10.0)];

    let surface = render(&content![
        begin_shape_with(BeginShapeMode::QuadStrip),
        vertex(points[0].0, points[0].1),
        vertex(points[1].0, points[1].1),
        vertex(points[2].0, points[2].1),
        vertex(points[3].0, points[3].1),
        end_shape()
    ]);

    let subpaths    = subpaths(&filled_path(&surface));
    let quads       = subpaths.iter().filter(|subpath| subpath.len() == 4).collect::<Vec<_>>();

    assert!(quads.len() == 1);
    assert!(*quads[0] == vec![points[2], points[0], points[1], points[3]]);
}

#[test]
fn catmull_rom_midpoint_of_collinear_points() {
    assert!((curve_point(0.0, 10.0, 20.0, 30.0, 0.5) - 15.0).abs() < 0.0001);

    // The section that's drawn runs from the second point to the third
    let surface = render(&content![curve(0.0, 0.0, 10.0, 0.0, 20.0, 0.0, 30.0, 0.0)]);
    let path    = filled_path(&surface);

    assert!(path[0] == Draw::Move(10.0, 0.0));

    match path[1] {
        Draw::BezierCurve(end, cp1, cp2)    => {
            let middle = bezier_point(10.0, cp1.0 as f64, cp2.0 as f64, end.0 as f64, 0.5);

            assert!(end == (20.0, 0.0));
            assert!((middle - 15.0).abs() < 0.0001);
        }

        _                                   => assert!(false)
    }
}

#[test]
fn push_translate_pop_restores_the_transform() {
    let _ = env_logger::builder().is_test(true).try_init();

    let before  = content![translate(5.0, 7.0), rotate(0.3), scale(2.0)];
    let after   = before.clone() + content![push_matrix(), translate(10.0, 10.0), pop_matrix()];

    let mut before_values   = GameValues::default();
    let mut after_values    = GameValues::default();

    evaluate_frame(&before, &mut before_values, &mut RecordingSurface::new(), size()).unwrap();
    evaluate_frame(&after, &mut after_values, &mut RecordingSurface::new(), size()).unwrap();

    assert!(before_values.transform == after_values.transform);
    assert!(after_values.matrices.is_empty());
}

#[test]
fn rect_in_center_mode_matches_rect_center() {
    let generic     = render(&content![rect_mode(RectMode::Center), rect(50.0, 50.0, 20.0, 20.0)]);
    let explicit    = render(&content![rect_center(50.0, 50.0, 20.0, 20.0)]);

    assert!(generic.drawing() == explicit.drawing());
    assert!(filled_path(&explicit) == draw_rect(40.0, 40.0, 60.0, 60.0));
}
