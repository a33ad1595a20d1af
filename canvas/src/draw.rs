use super::color::*;
use super::transform2d::*;

///
/// Possible way to join lines
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel
}

///
/// How to cap lines
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum LineCap {
    Butt,
    Round,
    Square
}

///
/// The system font designs that text can be drawn in
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum FontDesign {
    Default,
    Rounded,
    Monospaced,
    Serif
}

///
/// Identifies an image resource by name (the surface is responsible for loading it)
///
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct ImageRef(pub String);

impl ImageRef {
    ///
    /// The name of the image resource
    ///
    pub fn name(&self) -> &str {
        &self.0
    }
}

///
/// Where an image should be drawn
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum ImagePlacement {
    /// Draw at the natural size of the image with its top-left corner at the specified point
    At(f32, f32),

    /// Stretch the image into the rectangle (x, y, width, height)
    InRect(f32, f32, f32, f32)
}

///
/// Where a run of text should be drawn
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum TextPlacement {
    /// Start of the baseline of the text
    Baseline(f32, f32),

    /// Lay the text out in the rectangle (x, y, width, height)
    InRect(f32, f32, f32, f32)
}

///
/// Measurements of a run of text as laid out by a surface
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct TextMetrics {
    /// Advance width of the whole run
    pub width: f32,

    /// Distance from the baseline to the top of the tallest glyphs
    pub ascent: f32,

    /// Distance from the baseline to the bottom of the lowest glyphs
    pub descent: f32
}

///
/// Instructions for drawing to a surface
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Draw {
    /// Begins a new path
    NewPath,

    /// Move to a new point
    Move(f32, f32),

    /// Line to point
    Line(f32, f32),

    /// Bezier curve to point (the end point, followed by the two control points)
    BezierCurve((f32, f32), (f32, f32), (f32, f32)),

    /// Closes the current path
    ClosePath,

    /// Fill the current path
    Fill,

    /// Draw a line around the current path
    Stroke,

    /// Set the line width (in pixels)
    LineWidth(f32),

    /// Line join
    LineJoin(LineJoin),

    /// The cap to use on lines
    LineCap(LineCap),

    /// Sets the colour used for filling paths and text
    FillColor(Color),

    /// Sets the colour used for stroking paths
    StrokeColor(Color),

    /// Replaces the transformation applied to everything drawn afterwards
    SetTransform(Transform2D),

    /// Draws an image resource
    DrawImage(ImageRef, ImagePlacement),

    /// Draws a run of text in the fill colour (font design, size in points, the text itself)
    DrawText(FontDesign, f32, String, TextPlacement)
}

impl Draw {
    ///
    /// True if this instruction describes part of a path (as opposed to painting or changing state)
    ///
    pub fn is_path_element(&self) -> bool {
        use self::Draw::*;

        match self {
            Move(_, _) | Line(_, _) | BezierCurve(_, _, _) | ClosePath  => true,

            NewPath | Fill | Stroke | LineWidth(_) | LineJoin(_) | LineCap(_) |
            FillColor(_) | StrokeColor(_) | SetTransform(_) | DrawImage(_, _) |
            DrawText(_, _, _, _)                                        => false
        }
    }
}
