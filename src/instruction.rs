//!
//! Instructions are the data that sketches are made of
//!
//! An `Action` changes the `GameValues` for the rest of the frame without drawing anything. A `DrawOp`
//! reads the values and sends drawing instructions to the surface. An `Observe` instruction measures
//! something about the surface and reports it back in the output of the frame.
//!

use super::state::*;
use super::value::*;
use super::color::*;
use super::error::*;
use super::shapes::*;

use flo_sketch_canvas::*;

use std::ops::{Add};
use std::iter::{FromIterator};

///
/// An instruction that updates the state of a frame without drawing anything
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Action {
    Fill(ColorArgs),
    NoFill,
    Stroke(ColorArgs),
    NoStroke,
    StrokeWeight(f64),
    StrokeCap(StrokeCap),
    StrokeJoin(LineJoin),
    ColorMode(ColorMode),

    RectMode(RectMode),
    EllipseMode(EllipseMode),
    ImageMode(ImageMode),
    CurveTightness(f64),

    TextSize(f64),

    /// Sets the font design and optionally the size
    TextFont(FontDesign, Option<f64>),
    TextAlign(TextAlign),

    /// Starts assembling a shape
    BeginShape(Option<BeginShapeMode>),
    Vertex(CanvasPoint),
    CurveVertex(CanvasPoint),

    /// Adds a bezier segment to the current shape (first control point, second control point, end point)
    BezierVertex(CanvasPoint, CanvasPoint, CanvasPoint),

    Translate(CanvasPoint),

    /// Rotates by an angle in radians
    Rotate(f64),
    Scale(f64, f64),
    PushMatrix,
    PopMatrix,
    ResetMatrix,

    /// Writes the current transformation to the log
    PrintMatrix,

    FrameRate(f64),

    /// Sets the frame rate back to the looping frame rate
    Loop
}

///
/// An instruction that draws something
///
/// Shapes with a `layout` of `None` use the mode set in the `GameValues` when they are drawn.
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum DrawOp {
    /// Fills the whole surface with a colour
    Background(ColorArgs),

    Rect { bounds: BoxArgs, layout: Option<BoxLayout>, corner_radius: f64 },
    Ellipse { bounds: BoxArgs, layout: Option<BoxLayout> },

    /// An arc of an ellipse, from the start angle to the stop angle in radians
    Arc { bounds: BoxArgs, layout: Option<BoxLayout>, start: f64, stop: f64 },

    Triangle(CanvasPoint, CanvasPoint, CanvasPoint),
    Quad(CanvasPoint, CanvasPoint, CanvasPoint, CanvasPoint),
    Line(CanvasPoint, CanvasPoint),

    /// A marker the size of the stroke weight
    Point(CanvasPoint),

    Bezier { start: CanvasPoint, control1: CanvasPoint, control2: CanvasPoint, end: CanvasPoint },

    /// A Catmull-Rom curve between the middle two points
    Curve([CanvasPoint; 4]),

    /// An image, at its natural size if no width or height are supplied
    Image { image: ImageRef, position: CanvasPoint, width: Option<CanvasValue>, height: Option<CanvasValue>, layout: Option<BoxLayout> },

    /// Text aligned against a point using the current text alignment
    Text { text: String, position: CanvasPoint },

    /// Text laid out in a box
    TextInRect { text: String, position: CanvasPoint, size: CanvasSize },

    /// Ends the current shape and draws it
    EndShape(EndShapeMode)
}

///
/// Values that can be measured while a frame is being evaluated
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Observable {
    CanvasWidth,
    CanvasHeight,
    ImageWidth(ImageRef),
    ImageHeight(ImageRef),

    /// The width of a run of text in the current font and size
    TextWidth(String),
    TextAscent,
    TextDescent
}

///
/// A single step in the content of a frame
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Instruction {
    Action(Action),
    Draw(DrawOp),

    /// Measures a value and stores it in the frame output under the specified name
    Observe(String, Observable)
}

impl Action {
    ///
    /// Applies this action to the values for a frame
    ///
    pub fn apply(&self, values: &mut GameValues, size: SurfaceSize) -> Result<(), SketchError> {
        use self::Action::*;

        match self {
            Fill(color)                     => { values.fill_color = color.resolve(values.color_mode); values.no_fill = false; }
            NoFill                          => { values.no_fill = true; }
            Stroke(color)                   => { values.stroke_color = color.resolve(values.color_mode); values.no_stroke = false; }
            NoStroke                        => { values.no_stroke = true; }
            StrokeWeight(weight)            => { values.stroke_weight = *weight; }
            StrokeCap(cap)                  => { values.stroke_cap = *cap; }
            StrokeJoin(join)                => { values.stroke_join = *join; }
            ColorMode(mode)                 => { values.color_mode = *mode; }

            RectMode(mode)                  => { values.rect_mode = *mode; }
            EllipseMode(mode)               => { values.ellipse_mode = *mode; }
            ImageMode(mode)                 => { values.image_mode = *mode; }
            CurveTightness(tightness)       => { values.curve_tightness = *tightness; }

            TextSize(text_size)             => { values.text_size = *text_size; }
            TextFont(design, text_size)     => {
                values.text_font = *design;
                if let Some(text_size) = text_size {
                    values.text_size = *text_size;
                }
            }
            TextAlign(align)                => { values.text_align = *align; }

            BeginShape(mode)                => { values.shape = Some(ShapeAssembly::new(*mode)); }
            Vertex(point)                   => { current_shape(values)?.vertices.push(self::Vertex::Point(*point)); }
            CurveVertex(point)              => {
                let shape = current_shape(values)?;
                shape.shape_type = ShapeType::Curve;
                shape.vertices.push(self::Vertex::Point(*point));
            }
            BezierVertex(cp1, cp2, end)     => {
                let shape = current_shape(values)?;
                shape.shape_type = ShapeType::Bezier;
                shape.vertices.push(self::Vertex::Bezier(*cp1, *cp2, *end));
            }

            Translate(offset)               => {
                let (x, y)          = offset.resolve(size);
                values.transform    = values.transform.then(&Transform2D::translate(x as f32, y as f32));
            }
            Rotate(radians)                 => { values.transform = values.transform.then(&Transform2D::rotate(*radians as f32)); }
            Scale(x, y)                     => { values.transform = values.transform.then(&Transform2D::scale(*x as f32, *y as f32)); }
            PushMatrix                      => { values.matrices.push(values.transform); }
            PopMatrix                       => { values.transform = values.matrices.pop().unwrap_or_else(Transform2D::identity); }
            ResetMatrix                     => { values.transform = Transform2D::identity(); }
            PrintMatrix                     => { info!("{:?}", values.transform); }

            FrameRate(rate)                 => {
                debug!("Frame rate target changed to {}", rate);
                values.frame_rate.set(*rate);
            }
            Loop                            => {
                debug!("Frame rate target changed to {} (loop)", values.loop_frame_rate);
                values.frame_rate.set(values.loop_frame_rate);
            }
        }

        Ok(())
    }
}

///
/// Retrieves the shape being assembled, or an error if `begin_shape` hasn't been called
///
fn current_shape(values: &mut GameValues) -> Result<&mut ShapeAssembly, ShapeAssemblyError> {
    values.shape.as_mut().ok_or(ShapeAssemblyError::NoShapeInProgress)
}

impl Instruction {
    ///
    /// Sets the radius of the corners of a rectangle (other instructions are returned unchanged)
    ///
    pub fn with_corner_radius(self, radius: f64) -> Instruction {
        match self {
            Instruction::Draw(DrawOp::Rect { bounds, layout, .. })  => Instruction::Draw(DrawOp::Rect { bounds, layout, corner_radius: radius }),
            other                                                   => other
        }
    }
}

impl From<Action> for Instruction {
    fn from(action: Action) -> Instruction {
        Instruction::Action(action)
    }
}

impl From<DrawOp> for Instruction {
    fn from(draw: DrawOp) -> Instruction {
        Instruction::Draw(draw)
    }
}

///
/// The instructions that make up a frame, in the order they're evaluated
///
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Content {
    pub instructions: Vec<Instruction>
}

impl Content {
    pub fn new() -> Content {
        Content { instructions: vec![] }
    }

    ///
    /// Adds an instruction to the end of this content
    ///
    pub fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    ///
    /// Returns this content followed by some more content
    ///
    pub fn with<C: Into<Content>>(mut self, more: C) -> Content {
        self.instructions.extend(more.into().instructions);
        self
    }

    pub fn iter<'a>(&'a self) -> impl 'a+Iterator<Item=&'a Instruction> {
        self.instructions.iter()
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

impl From<Instruction> for Content {
    fn from(instruction: Instruction) -> Content {
        Content { instructions: vec![instruction] }
    }
}

impl From<Action> for Content {
    fn from(action: Action) -> Content {
        Content::from(Instruction::from(action))
    }
}

impl From<DrawOp> for Content {
    fn from(draw: DrawOp) -> Content {
        Content::from(Instruction::from(draw))
    }
}

impl From<Option<Instruction>> for Content {
    fn from(instruction: Option<Instruction>) -> Content {
        Content { instructions: instruction.into_iter().collect() }
    }
}

impl From<Vec<Instruction>> for Content {
    fn from(instructions: Vec<Instruction>) -> Content {
        Content { instructions }
    }
}

impl FromIterator<Instruction> for Content {
    fn from_iter<I: IntoIterator<Item=Instruction>>(iter: I) -> Content {
        Content { instructions: iter.into_iter().collect() }
    }
}

impl Extend<Instruction> for Content {
    fn extend<I: IntoIterator<Item=Instruction>>(&mut self, iter: I) {
        self.instructions.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Content {
    type Item       = &'a Instruction;
    type IntoIter   = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}

impl<C: Into<Content>> Add<C> for Content {
    type Output = Content;

    fn add(self, more: C) -> Content {
        self.with(more)
    }
}

///
/// Builds `Content` from a list of instructions (or anything else that can be converted to content)
///
/// ```
/// # #[macro_use] extern crate flo_sketch;
/// # use flo_sketch::*;
/// let content = content![
///     no_stroke(),
///     ellipse(50.0, 50.0, 10.0, 10.0)
/// ];
///
/// assert!(content.len() == 2);
/// ```
///
#[macro_export]
macro_rules! content {
    ( $( $item:expr ),* $(,)* ) => {
        $crate::Content::new() $( .with($item) )*
    };
}
