//!
//! The functions that sketches call to build their content
//!
//! These follow the names used by Processing. Functions that take coordinates accept anything that
//! converts to a `CanvasValue` (so plain numbers are positions in pixels). The generic shape functions
//! (`rect`, `ellipse`, `arc` and `image`) interpret their coordinates according to the mode in effect
//! when they're drawn, and there are variants for each mode that don't depend on it.
//!

use super::state::*;
use super::value::*;
use super::color::*;
use super::error::*;
use super::shapes::*;
use super::instruction::*;

use flo_sketch_canvas::*;

fn action(action: Action) -> Instruction {
    Instruction::Action(action)
}

fn draw(draw: DrawOp) -> Instruction {
    Instruction::Draw(draw)
}

// -- Colour and stroke --

///
/// Sets the colour used to fill shapes and text
///
pub fn fill<C: Into<ColorArgs>>(color: C) -> Instruction        { action(Action::Fill(color.into())) }
pub fn no_fill() -> Instruction                                 { action(Action::NoFill) }

///
/// Sets the colour used to outline shapes and draw lines and points
///
pub fn stroke<C: Into<ColorArgs>>(color: C) -> Instruction      { action(Action::Stroke(color.into())) }
pub fn no_stroke() -> Instruction                               { action(Action::NoStroke) }
pub fn stroke_weight(weight: f64) -> Instruction                { action(Action::StrokeWeight(weight)) }
pub fn stroke_cap(cap: StrokeCap) -> Instruction                { action(Action::StrokeCap(cap)) }
pub fn stroke_join(join: LineJoin) -> Instruction               { action(Action::StrokeJoin(join)) }

///
/// Fills the whole canvas with a colour
///
pub fn background<C: Into<ColorArgs>>(color: C) -> Instruction  { draw(DrawOp::Background(color.into())) }

///
/// Chooses how colours given as bare channels are interpreted
///
pub fn color_mode(mode: ColorMode) -> Instruction               { action(Action::ColorMode(mode)) }

// -- Modes --

pub fn rect_mode(mode: RectMode) -> Instruction                 { action(Action::RectMode(mode)) }
pub fn ellipse_mode(mode: EllipseMode) -> Instruction           { action(Action::EllipseMode(mode)) }
pub fn image_mode(mode: ImageMode) -> Instruction               { action(Action::ImageMode(mode)) }

///
/// Sets how tightly curves follow their control points (0 is a Catmull-Rom curve, 1 is straight lines)
///
pub fn curve_tightness(tightness: f64) -> Instruction           { action(Action::CurveTightness(tightness)) }

// -- Rectangles --

fn rect_with_layout(bounds: BoxArgs, layout: Option<BoxLayout>) -> Instruction {
    draw(DrawOp::Rect { bounds, layout, corner_radius: 0.0 })
}

///
/// Draws a rectangle, interpreting the coordinates according to the current `rect_mode`
///
pub fn rect<V: Into<CanvasValue>>(a: V, b: V, c: V, d: V) -> Instruction {
    rect_with_layout(BoxArgs::new(a, b, c, d), None)
}

///
/// Draws a rectangle with rounded corners, interpreting the coordinates according to the current `rect_mode`
///
pub fn rounded_rect<V: Into<CanvasValue>>(a: V, b: V, c: V, d: V, corner_radius: f64) -> Instruction {
    rect(a, b, c, d).with_corner_radius(corner_radius)
}

pub fn rect_corner<V: Into<CanvasValue>>(x: V, y: V, width: V, height: V) -> Instruction {
    rect_with_layout(BoxArgs::new(x, y, width, height), Some(BoxLayout::Corner))
}

pub fn rect_corners<V: Into<CanvasValue>>(x: V, y: V, opposite_x: V, opposite_y: V) -> Instruction {
    rect_with_layout(BoxArgs::new(x, y, opposite_x, opposite_y), Some(BoxLayout::Corners))
}

pub fn rect_center<V: Into<CanvasValue>>(center_x: V, center_y: V, width: V, height: V) -> Instruction {
    rect_with_layout(BoxArgs::new(center_x, center_y, width, height), Some(BoxLayout::Center))
}

pub fn rect_radius<V: Into<CanvasValue>>(center_x: V, center_y: V, x_radius: V, y_radius: V) -> Instruction {
    rect_with_layout(BoxArgs::new(center_x, center_y, x_radius, y_radius), Some(BoxLayout::Radius))
}

///
/// Draws a rectangle with its top-left corner at `origin`
///
pub fn rect_at(origin: CanvasPoint, size: CanvasSize) -> Instruction {
    rect_with_layout(BoxArgs::from_point_size(origin, size), Some(BoxLayout::Corner))
}

///
/// Draws a rectangle between two opposite corners
///
pub fn rect_between(corner: CanvasPoint, opposite: CanvasPoint) -> Instruction {
    rect_with_layout(BoxArgs::from_points(corner, opposite), Some(BoxLayout::Corners))
}

// -- Ellipses --

fn ellipse_with_layout(bounds: BoxArgs, layout: Option<BoxLayout>) -> Instruction {
    draw(DrawOp::Ellipse { bounds, layout })
}

///
/// Draws an ellipse, interpreting the coordinates according to the current `ellipse_mode`
///
pub fn ellipse<V: Into<CanvasValue>>(a: V, b: V, c: V, d: V) -> Instruction {
    ellipse_with_layout(BoxArgs::new(a, b, c, d), None)
}

pub fn ellipse_corner<V: Into<CanvasValue>>(x: V, y: V, width: V, height: V) -> Instruction {
    ellipse_with_layout(BoxArgs::new(x, y, width, height), Some(BoxLayout::Corner))
}

pub fn ellipse_corners<V: Into<CanvasValue>>(x: V, y: V, opposite_x: V, opposite_y: V) -> Instruction {
    ellipse_with_layout(BoxArgs::new(x, y, opposite_x, opposite_y), Some(BoxLayout::Corners))
}

pub fn ellipse_center<V: Into<CanvasValue>>(center_x: V, center_y: V, width: V, height: V) -> Instruction {
    ellipse_with_layout(BoxArgs::new(center_x, center_y, width, height), Some(BoxLayout::Center))
}

pub fn ellipse_radius<V: Into<CanvasValue>>(center_x: V, center_y: V, x_radius: V, y_radius: V) -> Instruction {
    ellipse_with_layout(BoxArgs::new(center_x, center_y, x_radius, y_radius), Some(BoxLayout::Radius))
}

///
/// Draws a circle around a center point
///
/// As with the other radius layouts, a relative radius is resolved against the width for the x axis
/// and against the height for the y axis, so it produces an ellipse on a canvas that isn't square.
///
pub fn circle<V: Into<CanvasValue>>(center_x: V, center_y: V, radius: V) -> Instruction {
    let radius = radius.into();

    ellipse_with_layout(BoxArgs(center_x.into(), center_y.into(), radius, radius), Some(BoxLayout::Radius))
}

// -- Arcs --

fn arc_with_layout(bounds: BoxArgs, layout: Option<BoxLayout>, start: f64, stop: f64) -> Instruction {
    draw(DrawOp::Arc { bounds, layout, start, stop })
}

///
/// Draws an arc of an ellipse, interpreting the coordinates according to the current `ellipse_mode`
///
/// The angles are in radians, measured clockwise from the positive x axis.
///
pub fn arc<V: Into<CanvasValue>>(a: V, b: V, c: V, d: V, start: f64, stop: f64) -> Instruction {
    arc_with_layout(BoxArgs::new(a, b, c, d), None, start, stop)
}

///
/// As for `arc`, but with the angles in degrees
///
pub fn arc_degrees<V: Into<CanvasValue>>(a: V, b: V, c: V, d: V, start: f64, stop: f64) -> Instruction {
    arc(a, b, c, d, start.to_radians(), stop.to_radians())
}

pub fn arc_corner<V: Into<CanvasValue>>(x: V, y: V, width: V, height: V, start: f64, stop: f64) -> Instruction {
    arc_with_layout(BoxArgs::new(x, y, width, height), Some(BoxLayout::Corner), start, stop)
}

pub fn arc_corners<V: Into<CanvasValue>>(x: V, y: V, opposite_x: V, opposite_y: V, start: f64, stop: f64) -> Instruction {
    arc_with_layout(BoxArgs::new(x, y, opposite_x, opposite_y), Some(BoxLayout::Corners), start, stop)
}

pub fn arc_center<V: Into<CanvasValue>>(center_x: V, center_y: V, width: V, height: V, start: f64, stop: f64) -> Instruction {
    arc_with_layout(BoxArgs::new(center_x, center_y, width, height), Some(BoxLayout::Center), start, stop)
}

pub fn arc_radius<V: Into<CanvasValue>>(center_x: V, center_y: V, x_radius: V, y_radius: V, start: f64, stop: f64) -> Instruction {
    arc_with_layout(BoxArgs::new(center_x, center_y, x_radius, y_radius), Some(BoxLayout::Radius), start, stop)
}

// -- Other primitives --

pub fn triangle<V: Into<CanvasValue>>(x1: V, y1: V, x2: V, y2: V, x3: V, y3: V) -> Instruction {
    triangle_points(CanvasPoint::new(x1, y1), CanvasPoint::new(x2, y2), CanvasPoint::new(x3, y3))
}

pub fn triangle_points(p1: CanvasPoint, p2: CanvasPoint, p3: CanvasPoint) -> Instruction {
    draw(DrawOp::Triangle(p1, p2, p3))
}

pub fn quad<V: Into<CanvasValue>>(x1: V, y1: V, x2: V, y2: V, x3: V, y3: V, x4: V, y4: V) -> Instruction {
    quad_points(CanvasPoint::new(x1, y1), CanvasPoint::new(x2, y2), CanvasPoint::new(x3, y3), CanvasPoint::new(x4, y4))
}

pub fn quad_points(p1: CanvasPoint, p2: CanvasPoint, p3: CanvasPoint, p4: CanvasPoint) -> Instruction {
    draw(DrawOp::Quad(p1, p2, p3, p4))
}

pub fn line<V: Into<CanvasValue>>(x1: V, y1: V, x2: V, y2: V) -> Instruction {
    line_points(CanvasPoint::new(x1, y1), CanvasPoint::new(x2, y2))
}

pub fn line_points(p1: CanvasPoint, p2: CanvasPoint) -> Instruction {
    draw(DrawOp::Line(p1, p2))
}

///
/// Draws a point as a marker the size of the stroke weight, in the stroke colour
///
pub fn point<V: Into<CanvasValue>>(x: V, y: V) -> Instruction {
    point_at(CanvasPoint::new(x, y))
}

pub fn point_at(p: CanvasPoint) -> Instruction {
    draw(DrawOp::Point(p))
}

///
/// Draws a cubic bezier curve from (x1, y1) to (x2, y2)
///
pub fn bezier<V: Into<CanvasValue>>(x1: V, y1: V, cx1: V, cy1: V, cx2: V, cy2: V, x2: V, y2: V) -> Instruction {
    bezier_points(CanvasPoint::new(x1, y1), CanvasPoint::new(cx1, cy1), CanvasPoint::new(cx2, cy2), CanvasPoint::new(x2, y2))
}

pub fn bezier_points(start: CanvasPoint, control1: CanvasPoint, control2: CanvasPoint, end: CanvasPoint) -> Instruction {
    draw(DrawOp::Bezier { start, control1, control2, end })
}

///
/// Draws a Catmull-Rom curve between the second and third points (the first and last points set the
/// direction of the curve at each end)
///
pub fn curve<V: Into<CanvasValue>>(x1: V, y1: V, x2: V, y2: V, x3: V, y3: V, x4: V, y4: V) -> Instruction {
    curve_points(CanvasPoint::new(x1, y1), CanvasPoint::new(x2, y2), CanvasPoint::new(x3, y3), CanvasPoint::new(x4, y4))
}

pub fn curve_points(p1: CanvasPoint, p2: CanvasPoint, p3: CanvasPoint, p4: CanvasPoint) -> Instruction {
    draw(DrawOp::Curve([p1, p2, p3, p4]))
}

// -- Shapes --

///
/// Starts a shape whose vertices are joined into a single line
///
pub fn begin_shape() -> Instruction                             { action(Action::BeginShape(None)) }

///
/// Starts a shape whose vertices are grouped according to the mode
///
pub fn begin_shape_with(mode: BeginShapeMode) -> Instruction    { action(Action::BeginShape(Some(mode))) }

pub fn vertex<V: Into<CanvasValue>>(x: V, y: V) -> Instruction {
    action(Action::Vertex(CanvasPoint::new(x, y)))
}

///
/// Adds a point to a shape, turning it into a Catmull-Rom curve
///
pub fn curve_vertex<V: Into<CanvasValue>>(x: V, y: V) -> Instruction {
    action(Action::CurveVertex(CanvasPoint::new(x, y)))
}

///
/// Adds a bezier curve to a shape, ending at (x, y)
///
pub fn bezier_vertex<V: Into<CanvasValue>>(cx1: V, cy1: V, cx2: V, cy2: V, x: V, y: V) -> Instruction {
    action(Action::BezierVertex(CanvasPoint::new(cx1, cy1), CanvasPoint::new(cx2, cy2), CanvasPoint::new(x, y)))
}

pub fn end_shape() -> Instruction                               { draw(DrawOp::EndShape(EndShapeMode::Open)) }
pub fn end_shape_closed() -> Instruction                        { draw(DrawOp::EndShape(EndShapeMode::Close)) }

// -- Text --

///
/// Draws text, placing it relative to (x, y) according to the current `text_align`
///
pub fn text<S: Into<String>, V: Into<CanvasValue>>(text: S, x: V, y: V) -> Instruction {
    text_at(text, CanvasPoint::new(x, y))
}

pub fn text_at<S: Into<String>>(text: S, position: CanvasPoint) -> Instruction {
    draw(DrawOp::Text { text: text.into(), position })
}

///
/// Draws text laid out in a box
///
pub fn text_in<S: Into<String>, V: Into<CanvasValue>>(text: S, x: V, y: V, width: V, height: V) -> Instruction {
    draw(DrawOp::TextInRect { text: text.into(), position: CanvasPoint::new(x, y), size: CanvasSize::new(width, height) })
}

pub fn text_size(size: f64) -> Instruction                      { action(Action::TextSize(size)) }

///
/// Sets the font design, and the size if one is supplied
///
pub fn text_font(font: FontDesign, size: Option<f64>) -> Instruction {
    action(Action::TextFont(font, size))
}

///
/// Fonts are identified by their design
///
pub fn create_font(design: FontDesign) -> FontDesign {
    design
}

pub fn text_align(horizontal: HorizontalAlign, vertical: VerticalAlign) -> Instruction {
    action(Action::TextAlign(TextAlign { horizontal, vertical }))
}

///
/// The spacing between lines of text can't be changed, so this always fails
///
pub fn text_leading(_leading: f64) -> Result<Instruction, SketchError> {
    Err(SketchError::UnsupportedOperation("text_leading".to_string()))
}

// -- Images --

///
/// Refers to an image by name (the surface loads it when it's drawn)
///
pub fn get_image<S: Into<String>>(name: S) -> ImageRef {
    ImageRef(name.into())
}

fn image_with_layout(image: &ImageRef, position: CanvasPoint, width: Option<CanvasValue>, height: Option<CanvasValue>, layout: Option<BoxLayout>) -> Instruction {
    draw(DrawOp::Image { image: image.clone(), position, width, height, layout })
}

///
/// Draws an image at its natural size, positioned according to the current `image_mode`
///
pub fn image<V: Into<CanvasValue>>(image: &ImageRef, a: V, b: V) -> Instruction {
    image_with_layout(image, CanvasPoint::new(a, b), None, None, None)
}

///
/// Draws an image, interpreting the coordinates according to the current `image_mode`
///
/// Either of the last two coordinates can be left out, in which case it comes from the natural size
/// of the image.
///
pub fn image_sized<V: Into<CanvasValue>>(image: &ImageRef, a: V, b: V, c: Option<V>, d: Option<V>) -> Instruction {
    image_with_layout(image, CanvasPoint::new(a, b), c.map(Into::into), d.map(Into::into), None)
}

pub fn image_corner(image: &ImageRef, origin: CanvasPoint, size: Option<CanvasSize>) -> Instruction {
    image_with_layout(image, origin, size.map(|size| size.width), size.map(|size| size.height), Some(BoxLayout::Corner))
}

pub fn image_center(image: &ImageRef, center: CanvasPoint, size: Option<CanvasSize>) -> Instruction {
    image_with_layout(image, center, size.map(|size| size.width), size.map(|size| size.height), Some(BoxLayout::Center))
}

pub fn image_corners(image: &ImageRef, origin: CanvasPoint, opposite: Option<CanvasPoint>) -> Instruction {
    image_with_layout(image, origin, opposite.map(|p| p.x), opposite.map(|p| p.y), Some(BoxLayout::Corners))
}

// -- Transforms --

pub fn translate<V: Into<CanvasValue>>(x: V, y: V) -> Instruction  { action(Action::Translate(CanvasPoint::new(x, y))) }

///
/// Rotates everything drawn afterwards by an angle in radians
///
pub fn rotate(radians: f64) -> Instruction                      { action(Action::Rotate(radians)) }
pub fn rotate_degrees(degrees: f64) -> Instruction              { rotate(degrees.to_radians()) }
pub fn scale(factor: f64) -> Instruction                        { action(Action::Scale(factor, factor)) }
pub fn scale_xy(x: f64, y: f64) -> Instruction                  { action(Action::Scale(x, y)) }
pub fn push_matrix() -> Instruction                             { action(Action::PushMatrix) }

///
/// Restores the transform saved by the last `push_matrix` (or the identity transform if there isn't one)
///
pub fn pop_matrix() -> Instruction                              { action(Action::PopMatrix) }
pub fn reset_matrix() -> Instruction                            { action(Action::ResetMatrix) }
pub fn print_matrix() -> Instruction                            { action(Action::PrintMatrix) }

// -- Frame rate --

pub fn frame_rate(rate: f64) -> Instruction                     { action(Action::FrameRate(rate)) }

///
/// Stops the host from drawing any more frames
///
pub fn no_loop() -> Instruction                                 { frame_rate(0.0) }

///
/// Starts the host drawing frames again after `no_loop`
///
pub fn loop_() -> Instruction                                   { action(Action::Loop) }

// -- Observed values --

///
/// Measures a value while the frame is evaluated, storing it in the frame output under `name`
///
pub fn observe<S: Into<String>>(name: S, observable: Observable) -> Instruction {
    Instruction::Observe(name.into(), observable)
}
