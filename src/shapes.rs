//!
//! Geometry for the primitive shapes
//!
//! The generic `rect`, `ellipse`, `arc` and `image` instructions take four coordinates whose meaning
//! depends on the current mode. Each mode is mapped to a `BoxLayout`, which resolves the coordinates
//! to a box in pixels: the shapes are then built from that box.
//!

use super::state::*;
use super::value::*;

use flo_sketch_canvas::*;

///
/// The four coordinates passed to a generic shape instruction
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct BoxArgs(pub CanvasValue, pub CanvasValue, pub CanvasValue, pub CanvasValue);

impl BoxArgs {
    pub fn new<V: Into<CanvasValue>>(a: V, b: V, c: V, d: V) -> BoxArgs {
        BoxArgs(a.into(), b.into(), c.into(), d.into())
    }

    ///
    /// Box arguments made of a point and a size
    ///
    pub fn from_point_size(point: CanvasPoint, size: CanvasSize) -> BoxArgs {
        BoxArgs(point.x, point.y, size.width, size.height)
    }

    ///
    /// Box arguments made of two points
    ///
    pub fn from_points(first: CanvasPoint, second: CanvasPoint) -> BoxArgs {
        BoxArgs(first.x, first.y, second.x, second.y)
    }
}

///
/// How the four coordinates of a shape describe the box it fits in
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum BoxLayout {
    /// Top-left corner, width, height
    Corner,

    /// Top-left corner, bottom-right corner
    Corners,

    /// Center, width, height
    Center,

    /// Center, half width, half height
    Radius
}

impl RectMode {
    pub fn layout(&self) -> BoxLayout {
        match self {
            RectMode::Corner    => BoxLayout::Corner,
            RectMode::Corners   => BoxLayout::Corners,
            RectMode::Center    => BoxLayout::Center,
            RectMode::Radius    => BoxLayout::Radius
        }
    }
}

impl EllipseMode {
    pub fn layout(&self) -> BoxLayout {
        match self {
            EllipseMode::Corner     => BoxLayout::Corner,
            EllipseMode::Corners    => BoxLayout::Corners,
            EllipseMode::Center     => BoxLayout::Center,
            EllipseMode::Radius     => BoxLayout::Radius
        }
    }
}

impl ImageMode {
    pub fn layout(&self) -> BoxLayout {
        match self {
            ImageMode::Corner   => BoxLayout::Corner,
            ImageMode::Corners  => BoxLayout::Corners,
            ImageMode::Center   => BoxLayout::Center
        }
    }
}

///
/// A box in pixels (the width and height can be negative if the box was specified by two corners the 'wrong' way round)
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct PixelBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64
}

impl PixelBox {
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    ///
    /// The corner opposite (x, y)
    ///
    pub fn opposite(&self) -> (f64, f64) {
        (self.x + self.width, self.y + self.height)
    }
}

impl BoxLayout {
    ///
    /// Works out the box described by four coordinates on a surface of the specified size
    ///
    /// Coordinates on the x axis (the first and, for every layout, the third) resolve against the width
    /// of the surface and the others against the height. This applies to radii too, so a relative radius
    /// gives different pixel sizes on the two axes of a surface that isn't square.
    ///
    pub fn resolve(&self, args: &BoxArgs, size: SurfaceSize) -> PixelBox {
        let BoxArgs(a, b, c, d) = args;

        let a = a.resolve(size.width);
        let b = b.resolve(size.height);
        let c = c.resolve(size.width);
        let d = d.resolve(size.height);

        match self {
            BoxLayout::Corner   => PixelBox { x: a, y: b, width: c, height: d },
            BoxLayout::Corners  => PixelBox { x: a, y: b, width: c - a, height: d - b },
            BoxLayout::Center   => PixelBox { x: a - c/2.0, y: b - d/2.0, width: c, height: d },
            BoxLayout::Radius   => PixelBox { x: a - c, y: b - d, width: c * 2.0, height: d * 2.0 }
        }
    }
}

///
/// Converts a list of points (in pixels) to a path, optionally closing it
///
pub fn polygon_path(points: &[(f64, f64)], close: bool) -> Vec<Draw> {
    let mut path = vec![];

    for (index, (x, y)) in points.iter().enumerate() {
        if index == 0 {
            path.push(Draw::Move(*x as f32, *y as f32));
        } else {
            path.push(Draw::Line(*x as f32, *y as f32));
        }
    }

    if close && !path.is_empty() {
        path.push(Draw::ClosePath);
    }

    path
}

///
/// The path of a rectangle, with rounded corners if `corner_radius` is more than 0
///
pub fn rect_path(bounds: &PixelBox, corner_radius: f64) -> Vec<Draw> {
    let (x1, y1) = (bounds.x as f32, bounds.y as f32);
    let (x2, y2) = bounds.opposite();

    draw_rounded_rect(x1, y1, x2 as f32, y2 as f32, corner_radius as f32)
}

///
/// The path of an ellipse that fits in a box
///
pub fn ellipse_path(bounds: &PixelBox) -> Vec<Draw> {
    let (cx, cy) = bounds.center();

    draw_ellipse(cx as f32, cy as f32, (bounds.width/2.0) as f32, (bounds.height/2.0) as f32)
}

///
/// The paths used to fill and stroke an arc that fits in a box
///
/// The arc is worked out as part of a circle with a diameter of the width of the box and then stretched
/// vertically to match the height. Angles are in radians. Returns None if the box has no width.
///
pub fn arc_paths(bounds: &PixelBox, start: f64, stop: f64) -> Option<(Vec<Draw>, Vec<Draw>)> {
    if bounds.width == 0.0 {
        return None;
    }

    if !start.is_finite() || !stop.is_finite() {
        warn!("Arc from {} to {} is not drawn: the angles must be finite", start, stop);
        return None;
    }

    let (cx, cy)    = bounds.center();
    let (cx, cy)    = (cx as f32, cy as f32);
    let radius      = (bounds.width / 2.0) as f32;
    let stretch     = (bounds.height / bounds.width) as f32;

    let stretch     = Transform2D::translate(cx, cy) * Transform2D::scale(1.0, stretch) * Transform2D::translate(-cx, -cy);
    let fill        = draw_arc(cx, cy, radius, start as f32, stop as f32, true);
    let stroke      = draw_arc(cx, cy, radius, start as f32, stop as f32, false);

    Some((transform_path(&fill, &stretch), transform_path(&stroke, &stretch)))
}

///
/// The path of the marker drawn by `point`
///
/// Thin strokes produce a square with its top-left corner at the point, and anything thicker produces
/// a circle centered on the point. Either way the marker is as wide as the stroke.
///
pub fn point_marker_path(x: f64, y: f64, stroke_weight: f64) -> Vec<Draw> {
    if stroke_weight > 1.0 {
        let radius = (stroke_weight / 2.0) as f32;
        draw_ellipse(x as f32, y as f32, radius, radius)
    } else {
        draw_rect(x as f32, y as f32, (x + stroke_weight) as f32, (y + stroke_weight) as f32)
    }
}

///
/// A path made of a single cubic bezier curve
///
pub fn bezier_path(start: (f64, f64), control1: (f64, f64), control2: (f64, f64), end: (f64, f64)) -> Vec<Draw> {
    let point = |(x, y): (f64, f64)| (x as f32, y as f32);

    vec![
        Draw::Move(start.0 as f32, start.1 as f32),
        Draw::BezierCurve(point(end), point(control1), point(control2))
    ]
}
