#[macro_use]
extern crate flo_sketch;

use flo_sketch::*;

fn size() -> SurfaceSize {
    SurfaceSize::new(200.0, 100.0)
}

fn evaluate(content: &Content, surface: &mut RecordingSurface) -> Result<FrameOutput, FrameError> {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut values = GameValues::default();
    evaluate_frame(content, &mut values, surface, size())
}

#[test]
fn vertex_without_begin_shape_fails_the_frame() {
    let mut surface = RecordingSurface::new();
    let error       = evaluate(&content![rect(0.0, 0.0, 10.0, 10.0), vertex(1.0, 1.0), rect(20.0, 20.0, 10.0, 10.0)], &mut surface).unwrap_err();

    assert!(error.instruction_index == 1);
    assert!(error.error == SketchError::ShapeAssembly(ShapeAssemblyError::NoShapeInProgress));

    // Only the first rect (filled and stroked) was drawn
    assert!(surface.painted_paths().len() == 2);
}

#[test]
fn end_shape_needs_vertices() {
    let mut surface = RecordingSurface::new();
    let error       = evaluate(&content![begin_shape(), end_shape()], &mut surface).unwrap_err();

    assert!(error.error == SketchError::ShapeAssembly(ShapeAssemblyError::EmptyShape { shape_type: ShapeType::Regular }));
}

#[test]
fn end_shape_without_begin_shape_fails() {
    let mut surface = RecordingSurface::new();
    let error       = evaluate(&content![end_shape_closed()], &mut surface).unwrap_err();

    assert!(error.error == SketchError::ShapeAssembly(ShapeAssemblyError::NoShapeInProgress));
}

#[test]
fn curve_shape_needs_four_vertices() {
    let mut surface = RecordingSurface::new();
    let error       = evaluate(&content![
        begin_shape(),
        curve_vertex(0.0, 0.0),
        curve_vertex(10.0, 0.0),
        curve_vertex(20.0, 0.0),
        end_shape()
    ], &mut surface).unwrap_err();

    assert!(error.instruction_index == 4);
    assert!(error.error == SketchError::ShapeAssembly(ShapeAssemblyError::NotEnoughVertices { shape_type: ShapeType::Curve, required: 4, found: 3 }));
}

#[test]
fn bezier_shape_is_a_single_path() {
    let mut surface = RecordingSurface::new();

    evaluate(&content![
        no_stroke(),
        begin_shape(),
        vertex(0.0, 0.0),
        bezier_vertex(10.0, 0.0, 20.0, 10.0, 20.0, 20.0),
        vertex(0.0, 20.0),
        end_shape_closed()
    ], &mut surface).unwrap();

    let painted = surface.painted_paths();

    assert!(painted.len() == 1);
    assert!(painted[0].path == vec![
        Draw::Move(0.0, 0.0),
        Draw::BezierCurve((20.0, 20.0), (10.0, 0.0), (20.0, 10.0)),
        Draw::Line(0.0, 20.0),
        Draw::ClosePath
    ]);
}

#[test]
fn shapes_can_follow_each_other() {
    let mut surface = RecordingSurface::new();

    evaluate(&content![
        no_stroke(),
        begin_shape(), vertex(0.0, 0.0), vertex(10.0, 0.0), vertex(10.0, 10.0), end_shape_closed(),
        begin_shape_with(BeginShapeMode::Points), vertex(5.0, 5.0), vertex(6.0, 6.0), end_shape()
    ], &mut surface).unwrap();

    // The polygon followed by two point markers
    assert!(surface.painted_paths().len() == 3);
}

#[test]
fn missing_image_is_a_warning() {
    let mut surface = RecordingSurface::new();
    let output      = evaluate(&content![image(&get_image("missing"), 0.0, 0.0), rect(0.0, 0.0, 10.0, 10.0)], &mut surface).unwrap();

    assert!(output.warnings == vec![ResourceWarning::ImageNotFound("missing".to_string())]);
    assert!(surface.images_drawn().is_empty());
    assert!(surface.painted_paths().len() == 2);
}

#[test]
fn observed_values_are_returned() {
    let mut surface = RecordingSurface::new().with_image("cat", 40.0, 20.0);
    let cat         = get_image("cat");
    let output      = evaluate(&content![
        observe("width", Observable::CanvasWidth),
        observe("height", Observable::CanvasHeight),
        observe("cat_width", Observable::ImageWidth(cat.clone())),
        observe("cat_height", Observable::ImageHeight(cat.clone())),
        text_size(20.0),
        observe("text", Observable::TextWidth("hello".to_string())),
        observe("ascent", Observable::TextAscent)
    ], &mut surface).unwrap();

    assert!(output.observed.get("width") == Some(&200.0));
    assert!(output.observed.get("height") == Some(&100.0));
    assert!(output.observed.get("cat_width") == Some(&40.0));
    assert!(output.observed.get("cat_height") == Some(&20.0));
    assert!((output.observed["text"] - 60.0).abs() < 0.001);
    assert!((output.observed["ascent"] - 16.0).abs() < 0.001);
    assert!(output.warnings.is_empty());
}

#[test]
fn observing_a_missing_image_records_nothing() {
    let mut surface = RecordingSurface::new();
    let output      = evaluate(&content![observe("width", Observable::ImageWidth(get_image("missing")))], &mut surface).unwrap();

    assert!(output.observed.get("width").is_none());
    assert!(output.warnings.len() == 1);
}

#[test]
fn frame_rate_is_shared_with_the_host() {
    let target          = FrameRateTarget::new(60.0);
    let mut surface     = RecordingSurface::new();

    let mut values      = GameValues::new(target.clone());
    evaluate_frame(&content![frame_rate(30.0)], &mut values, &mut surface, size()).unwrap();
    assert!(target.get() == 30.0);

    let mut values      = GameValues::new(target.clone());
    evaluate_frame(&content![no_loop()], &mut values, &mut surface, size()).unwrap();
    assert!(target.get() == 0.0);

    let config          = SketchConfig { loop_frame_rate: 90.0, ..SketchConfig::default() };
    let mut values      = GameValues::with_config(&config, target.clone());
    evaluate_frame(&content![loop_()], &mut values, &mut surface, size()).unwrap();
    assert!(target.get() == 90.0);
}

#[test]
fn background_covers_the_surface() {
    let mut surface = RecordingSurface::new();
    evaluate(&content![background(gray(51.0))], &mut surface).unwrap();

    let painted = surface.painted_paths();

    assert!(painted.len() == 1);
    assert!(painted[0].path == draw_rect(0.0, 0.0, 200.0, 100.0));
    assert!(painted[0].operation == PaintOperation::Fill(gray(51.0)));
}

#[test]
fn stroke_settings_reach_the_surface() {
    let mut surface = RecordingSurface::new();
    evaluate(&content![no_fill(), stroke(color(255.0, 0.0, 0.0)), stroke_weight(4.0), stroke_cap(StrokeCap::Square), line(0.0, 0.0, 10.0, 10.0)], &mut surface).unwrap();

    let painted = surface.painted_paths();

    assert!(painted.len() == 1);
    assert!(painted[0].operation == PaintOperation::Stroke(color(255.0, 0.0, 0.0), 4.0));
    assert!(surface.drawing().contains(&Draw::LineCap(LineCap::Butt)));
}

#[test]
fn transforms_are_sent_before_drawing() {
    let mut surface = RecordingSurface::new();
    evaluate(&content![translate(10.0, 20.0), point(0.0, 0.0)], &mut surface).unwrap();

    let painted = surface.painted_paths();

    assert!(painted.len() == 1);
    assert!(painted[0].transform.transform_point(0.0, 0.0) == (10.0, 20.0));
}

#[test]
fn each_frame_starts_untransformed() {
    let mut surface = RecordingSurface::new();

    evaluate(&content![no_fill(), translate(50.0, 50.0), line(0.0, 0.0, 10.0, 10.0)], &mut surface).unwrap();
    evaluate(&content![no_fill(), line(0.0, 0.0, 10.0, 10.0)], &mut surface).unwrap();

    let painted = surface.painted_paths();

    assert!(painted.len() == 2);
    assert!(painted[0].transform == Transform2D::translate(50.0, 50.0));
    assert!(painted[1].transform.is_identity());
}

#[test]
fn abandoned_frame_does_not_leave_its_transform_behind() {
    let mut surface = RecordingSurface::new();

    assert!(evaluate(&content![translate(50.0, 50.0), line(0.0, 0.0, 10.0, 10.0), end_shape()], &mut surface).is_err());
    evaluate(&content![no_fill(), line(0.0, 0.0, 10.0, 10.0)], &mut surface).unwrap();

    let last = surface.painted_paths().pop().unwrap();

    assert!(last.transform.is_identity());
    assert!(last.transform.transform_point(10.0, 10.0) == (10.0, 10.0));
}

#[test]
fn text_is_drawn_at_its_anchor() {
    let mut surface = RecordingSurface::new();
    evaluate(&content![
        text_size(10.0),
        text_align(HorizontalAlign::Center, VerticalAlign::Baseline),
        text("abcd", 100.0, 50.0),
        text_in("boxed", 10.0, 10.0, 50.0, 20.0)
    ], &mut surface).unwrap();

    assert!(surface.text_runs() == vec![
        ("abcd".to_string(), TextPlacement::Baseline(88.0, 50.0)),
        ("boxed".to_string(), TextPlacement::InRect(10.0, 10.0, 50.0, 20.0))
    ]);
}

#[test]
fn text_leading_is_not_supported() {
    assert!(text_leading(2.0) == Err(SketchError::UnsupportedOperation("text_leading".to_string())));
}

#[test]
fn config_loads_from_json() {
    let config = SketchConfig::from_json(r#"{ "width": 640, "overlay_compatibility": false }"#).unwrap();

    assert!(config.width == 640.0);
    assert!(config.height == 400.0);
    assert!(!config.overlay_compatibility);
    assert!(SketchConfig::from_json("not json").is_err());
}
