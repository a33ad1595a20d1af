use super::color::*;
use super::value::*;
use super::config::*;

use flo_sketch_canvas::*;
use ::desync::*;

use std::fmt;
use std::sync::*;

///
/// How `rect` interprets its four coordinates
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum RectMode {
    /// x, y of the top-left corner, then width and height
    Corner,

    /// x, y of one corner, then x, y of the opposite corner
    Corners,

    /// x, y of the center, then width and height
    Center,

    /// x, y of the center, then half the width and half the height
    Radius
}

///
/// How `ellipse` and `arc` interpret their four coordinates
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum EllipseMode {
    Corner,
    Corners,
    Center,
    Radius
}

///
/// How `image` interprets its coordinates
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ImageMode {
    Corner,
    Corners,
    Center
}

///
/// The kind of shape that `begin_shape` starts
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum BeginShapeMode {
    Points,
    Lines,
    Triangles,
    TriangleFan,
    TriangleStrip,
    Quads,
    QuadStrip
}

///
/// Whether `end_shape` closes the shape
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum EndShapeMode {
    Open,
    Close
}

///
/// How the vertices of a shape are joined, which depends on the kind of vertices that were added
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ShapeType {
    /// Only `vertex` was used: the begin shape mode decides what is drawn
    Regular,

    /// `bezier_vertex` was used: the whole shape is a single path
    Bezier,

    /// `curve_vertex` was used: the whole shape is a Catmull-Rom curve
    Curve
}

///
/// The line caps as named in Processing
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum StrokeCap {
    Round,
    Square,
    Project
}

impl StrokeCap {
    ///
    /// The cap that the surface uses to draw this cap ('square' ends flush with the line, 'project' extends past it)
    ///
    pub fn line_cap(&self) -> LineCap {
        match self {
            StrokeCap::Round    => LineCap::Round,
            StrokeCap::Square   => LineCap::Butt,
            StrokeCap::Project  => LineCap::Square
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum VerticalAlign {
    Top,
    Center,
    Bottom,
    Baseline
}

///
/// Which point of a run of text is placed at the coordinates passed to `text`
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct TextAlign {
    pub horizontal: HorizontalAlign,
    pub vertical: VerticalAlign
}

impl Default for TextAlign {
    fn default() -> TextAlign {
        TextAlign { horizontal: HorizontalAlign::Left, vertical: VerticalAlign::Baseline }
    }
}

///
/// A vertex added to a shape
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum Vertex {
    /// A point added by `vertex` or `curve_vertex`
    Point(CanvasPoint),

    /// A curve segment added by `bezier_vertex` (the two control points, then the end point)
    Bezier(CanvasPoint, CanvasPoint, CanvasPoint)
}

impl Vertex {
    ///
    /// The point where this vertex is anchored (the end point for bezier segments)
    ///
    pub fn anchor(&self) -> CanvasPoint {
        match self {
            Vertex::Point(point)        => *point,
            Vertex::Bezier(_, _, end)   => *end
        }
    }
}

///
/// A shape that's being built between `begin_shape` and `end_shape`
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ShapeAssembly {
    /// The mode passed to `begin_shape`, if there was one
    pub begin_mode: Option<BeginShapeMode>,

    /// How the vertices will be joined
    pub shape_type: ShapeType,

    /// The vertices added so far
    pub vertices: Vec<Vertex>
}

impl ShapeAssembly {
    pub fn new(begin_mode: Option<BeginShapeMode>) -> ShapeAssembly {
        ShapeAssembly {
            begin_mode: begin_mode,
            shape_type: ShapeType::Regular,
            vertices:   vec![]
        }
    }
}

///
/// The frame rate that the host runs a sketch at
///
/// Sketches change this with the `frame_rate` instruction while a frame is being evaluated. Updates are
/// queued rather than applied immediately so they don't race the host's frame loop: `get` waits for any
/// queued changes before returning the rate.
///
#[derive(Clone)]
pub struct FrameRateTarget {
    rate: Arc<Desync<f64>>
}

impl FrameRateTarget {
    pub fn new(rate: f64) -> FrameRateTarget {
        FrameRateTarget {
            rate: Arc::new(Desync::new(rate))
        }
    }

    ///
    /// Queues a change to the frame rate
    ///
    pub fn set(&self, new_rate: f64) {
        self.rate.desync(move |rate| *rate = new_rate);
    }

    ///
    /// Retrieves the frame rate once any queued changes have been made
    ///
    pub fn get(&self) -> f64 {
        self.rate.sync(|rate| *rate)
    }
}

impl fmt::Debug for FrameRateTarget {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FrameRateTarget({})", self.get())
    }
}

///
/// Everything that instructions can change while a frame is being drawn
///
/// A new set of values is created for every frame: nothing carries over from one frame to the next
/// except the frame rate target, which belongs to the host.
///
#[derive(Clone, Debug)]
pub struct GameValues {
    pub fill_color: Color,
    pub stroke_color: Color,
    pub no_fill: bool,
    pub no_stroke: bool,

    pub text_font: FontDesign,
    pub text_size: f64,
    pub text_align: TextAlign,

    pub rect_mode: RectMode,
    pub ellipse_mode: EllipseMode,
    pub image_mode: ImageMode,

    pub curve_tightness: f64,

    pub stroke_weight: f64,
    pub stroke_cap: StrokeCap,
    pub stroke_join: LineJoin,

    /// The shape being assembled, if `begin_shape` has been called and the shape hasn't been ended
    pub shape: Option<ShapeAssembly>,

    pub color_mode: ColorMode,

    /// The transformation applied to everything that's drawn
    pub transform: Transform2D,

    /// Transformations saved by `push_matrix`
    pub matrices: Vec<Transform2D>,

    /// The rate that `loop_()` restores
    pub loop_frame_rate: f64,

    pub frame_rate: FrameRateTarget
}

impl GameValues {
    ///
    /// Creates the values for a new frame
    ///
    pub fn new(frame_rate: FrameRateTarget) -> GameValues {
        GameValues {
            fill_color:         Color::Rgba(1.0, 1.0, 1.0, 1.0),
            stroke_color:       Color::Rgba(0.0, 0.0, 0.0, 1.0),
            no_fill:            false,
            no_stroke:          false,

            text_font:          FontDesign::Default,
            text_size:          12.0,
            text_align:         TextAlign::default(),

            rect_mode:          RectMode::Corner,
            ellipse_mode:       EllipseMode::Center,
            image_mode:         ImageMode::Corner,

            curve_tightness:    0.0,

            stroke_weight:      1.0,
            stroke_cap:         StrokeCap::Round,
            stroke_join:        LineJoin::Miter,

            shape:              None,

            color_mode:         ColorMode::Rgb,

            transform:          Transform2D::identity(),
            matrices:           vec![],

            loop_frame_rate:    SketchConfig::default().loop_frame_rate,
            frame_rate:         frame_rate
        }
    }

    ///
    /// Creates the values for a new frame of a sketch with the specified configuration
    ///
    pub fn with_config(config: &SketchConfig, frame_rate: FrameRateTarget) -> GameValues {
        let mut values          = GameValues::new(frame_rate);
        values.loop_frame_rate  = config.loop_frame_rate;

        values
    }
}

impl Default for GameValues {
    fn default() -> GameValues {
        GameValues::new(FrameRateTarget::new(SketchConfig::default().frame_rate))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let values = GameValues::default();

        assert!(values.fill_color == Color::Rgba(1.0, 1.0, 1.0, 1.0));
        assert!(values.stroke_color == Color::Rgba(0.0, 0.0, 0.0, 1.0));
        assert!(values.rect_mode == RectMode::Corner);
        assert!(values.ellipse_mode == EllipseMode::Center);
        assert!(values.image_mode == ImageMode::Corner);
        assert!(values.color_mode == ColorMode::Rgb);
        assert!(values.stroke_weight == 1.0);
        assert!(values.curve_tightness == 0.0);
        assert!(values.shape.is_none());
        assert!(values.transform.is_identity());
    }

    #[test]
    fn frame_rate_changes_are_seen_by_clones() {
        let target  = FrameRateTarget::new(60.0);
        let host    = target.clone();

        target.set(12.0);
        assert!(host.get() == 12.0);
    }

    #[test]
    fn bezier_vertex_is_anchored_at_its_end() {
        let vertex = Vertex::Bezier(CanvasPoint::absolute(1.0, 2.0), CanvasPoint::absolute(3.0, 4.0), CanvasPoint::absolute(5.0, 6.0));

        assert!(vertex.anchor() == CanvasPoint::absolute(5.0, 6.0));
    }
}
